// Bindkit Key Definitions
// Compiles "map" directives and resolves the primary modifier placeholder

use crate::action::{parse_key_action, Action, ActionError};
use crate::key::{KeyNameLookup, KeysymNames};
use crate::kitten::{expand_kitten_alias, KittenAliases};
use crate::modifier::ModMask;
use crate::sequence::{parse_sequence_with, KeySequence, SequenceTail, DEFAULT_SEQUENCE_SEPARATOR};
use crate::trigger::{parse_shortcut_with, ShortcutError, Trigger};
use crate::util::split_max;

/// Behaviour shared by compiled key and mouse bindings.
///
/// `resolve` is the only change allowed after parsing; it must be applied
/// before the binding reaches a binding table.
pub trait BindingDefinition {
    fn action(&self) -> &Action;

    fn action_mut(&mut self) -> &mut Action;

    /// Substitute the primary-modifier placeholder with `primary`
    fn resolve(&mut self, primary: ModMask);

    /// True once no trigger carries the placeholder bit
    fn is_resolved(&self) -> bool;

    /// Expand a kitten alias named by the action, at most once
    fn resolve_kitten_aliases(&mut self, aliases: &KittenAliases) {
        if let Some(expanded) = expand_kitten_alias(self.action(), aliases) {
            *self.action_mut() = expanded;
        }
    }
}

/// A compiled `map` directive
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDefinition {
    is_sequence: bool,
    action: Action,
    keys: KeySequence,
}

impl KeyDefinition {
    /// Binding for a single key press
    pub fn single(trigger: Trigger, action: Action) -> Self {
        Self {
            is_sequence: false,
            action,
            keys: KeySequence {
                head: trigger,
                tail: SequenceTail::new(),
            },
        }
    }

    /// Binding for a chain of key presses
    pub fn sequence(keys: KeySequence, action: Action) -> Self {
        Self {
            is_sequence: true,
            action,
            keys,
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.is_sequence
    }

    /// The first (or only) key press
    pub fn trigger(&self) -> &Trigger {
        &self.keys.head
    }

    /// Key presses after the first one, empty for single bindings
    pub fn rest(&self) -> &[Trigger] {
        &self.keys.tail
    }

    /// Total number of key presses
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when every trigger carries a real key code
    pub fn has_valid_keys(&self) -> bool {
        self.keys.iter().all(Trigger::is_valid)
    }

    /// Shortcut text, `>`-joined for sequences
    pub fn shortcut(&self) -> String {
        self.keys.to_string()
    }
}

impl BindingDefinition for KeyDefinition {
    fn action(&self) -> &Action {
        &self.action
    }

    fn action_mut(&mut self) -> &mut Action {
        &mut self.action
    }

    fn resolve(&mut self, primary: ModMask) {
        self.keys.resolve(primary);
    }

    fn is_resolved(&self) -> bool {
        self.keys.iter().all(|t| !t.mods.has_placeholder())
    }
}

/// Errors that can occur while compiling a `map` directive
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("Ignoring invalid map directive: {0}")]
    Malformed(String),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error("Invalid shortcut action: {0}. Ignoring.")]
    Action(#[from] ActionError),
}

/// Compiles `map` directives with a given separator and key name table
pub struct MapParser<'a> {
    separator: char,
    key_names: &'a dyn KeyNameLookup,
}

impl Default for MapParser<'static> {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEQUENCE_SEPARATOR,
            key_names: &KeysymNames,
        }
    }
}

impl<'a> MapParser<'a> {
    pub fn new(separator: char, key_names: &'a dyn KeyNameLookup) -> Self {
        Self {
            separator,
            key_names,
        }
    }

    /// Compile `<shortcut> <action...>`, reporting why a line is rejected
    pub fn compile(&self, val: &str) -> Result<KeyDefinition, MapError> {
        let parts = split_max(val, 1);
        let [sc, action] = parts.as_slice() else {
            return Err(MapError::Malformed(val.to_string()));
        };
        let sc = sc.trim_matches(self.separator);
        let action = action.trim();
        if sc.is_empty() || action.is_empty() {
            return Err(MapError::Malformed(val.to_string()));
        }

        if sc.contains(self.separator) {
            let sequence = parse_sequence_with(sc, self.separator, self.key_names)?;
            let action = parse_key_action(action)?;
            Ok(KeyDefinition::sequence(sequence, action))
        } else {
            let trigger = parse_shortcut_with(sc, self.key_names)?;
            let action = parse_key_action(action)?;
            Ok(KeyDefinition::single(trigger, action))
        }
    }

    /// Compile a directive, logging and dropping it if it is invalid
    pub fn parse(&self, val: &str) -> Option<KeyDefinition> {
        match self.compile(val) {
            Ok(definition) => Some(definition),
            // already reported while resolving modifiers
            Err(MapError::Shortcut(ShortcutError::InvalidModifier(_))) => None,
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }
}

/// Compile a `map` directive value with the default settings
pub fn compile_map(val: &str) -> Result<KeyDefinition, MapError> {
    MapParser::default().compile(val)
}

/// Compile a `map` directive value, logging and dropping invalid lines
pub fn parse_map(val: &str) -> Option<KeyDefinition> {
    MapParser::default().parse(val)
}
