// Bindkit Config Loader
// Collects binding directives from text and builds the final tables

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::bindings::BindingTable;
use crate::definition::{KeyDefinition, MapParser};
use crate::key::KeysymNames;
use crate::kitten::{parse_kitten_alias, KittenAliases};
use crate::modifier::{to_modifiers, Modifier, ModMask};
use crate::mouse::{parse_mouse_map, MouseMapping};
use crate::sequence::DEFAULT_SEQUENCE_SEPARATOR;
use crate::util::to_bool;

use super::directive::{split_directive, Directive};

/// Configuration loader errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binding directives collected from one or more configuration sources
#[derive(Debug, Clone, PartialEq)]
pub struct BindingConfig {
    key_definitions: Vec<KeyDefinition>,
    mouse_mappings: Vec<MouseMapping>,
    kitten_aliases: KittenAliases,
    primary_modifier: ModMask,
    sequence_separator: char,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            key_definitions: Vec::new(),
            mouse_mappings: Vec::new(),
            kitten_aliases: KittenAliases::new(),
            primary_modifier: Modifier::Control | Modifier::Shift,
            sequence_separator: DEFAULT_SEQUENCE_SEPARATOR,
        }
    }
}

impl BindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the bindings file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bindkit").join("bindings.conf"))
    }

    /// Load directives from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Load directives from text; invalid lines are logged and skipped
    pub fn parse(content: &str) -> Self {
        let mut config = Self::new();
        config.apply_str(content);
        config
    }

    /// Apply every line of `content` on top of the current state
    pub fn apply_str(&mut self, content: &str) {
        for line in content.lines() {
            self.apply_line(line);
        }
    }

    /// Apply one configuration line
    pub fn apply_line(&mut self, line: &str) {
        let Some((keyword, value)) = split_directive(line) else {
            return;
        };
        let Ok(directive) = Directive::from_str(keyword) else {
            log::debug!("Skipping unknown directive: {}", keyword);
            return;
        };

        match directive {
            Directive::Map => {
                let parser = MapParser::new(self.sequence_separator, &KeysymNames);
                if let Some(definition) = parser.parse(value) {
                    self.key_definitions.push(definition);
                }
            }
            Directive::MouseMap => {
                self.mouse_mappings.extend(parse_mouse_map(value));
            }
            Directive::KittenAlias => match parse_kitten_alias(value) {
                Some((name, expansion)) => self.kitten_aliases.insert(name, expansion),
                None => log::warn!("Ignoring invalid kitten_alias: {}", value),
            },
            Directive::PrimaryModifier => {
                let mods = to_modifiers(value);
                if mods.is_empty() || mods.has_placeholder() {
                    log::warn!("Ignoring invalid primary modifier: {}", value);
                } else {
                    self.primary_modifier = mods;
                }
            }
            Directive::ClearAllShortcuts => {
                if to_bool(value) {
                    self.key_definitions.clear();
                }
            }
            Directive::ClearAllMouseActions => {
                if to_bool(value) {
                    self.mouse_mappings.clear();
                }
            }
            Directive::SequenceSeparator => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(sep), None) if sep != '+' => self.sequence_separator = sep,
                    _ => log::warn!("Ignoring invalid sequence separator: {:?}", value),
                }
            }
        }
    }

    pub fn key_definitions(&self) -> &[KeyDefinition] {
        &self.key_definitions
    }

    pub fn mouse_mappings(&self) -> &[MouseMapping] {
        &self.mouse_mappings
    }

    pub fn kitten_aliases(&self) -> &KittenAliases {
        &self.kitten_aliases
    }

    pub fn primary_modifier(&self) -> ModMask {
        self.primary_modifier
    }

    /// Override the primary modifier, e.g. from the command line
    pub fn set_primary_modifier(&mut self, mods: ModMask) {
        self.primary_modifier = mods;
    }

    pub fn sequence_separator(&self) -> char {
        self.sequence_separator
    }

    /// Resolve every collected binding and build the lookup tables
    pub fn into_table(self) -> BindingTable {
        BindingTable::build(
            self.key_definitions,
            self.mouse_mappings,
            self.primary_modifier,
            &self.kitten_aliases,
        )
    }
}
