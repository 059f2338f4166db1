// Bindkit Trigger Parser
// Parses shortcut strings like "ctrl+shift+a" into normalized triggers

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::key::{self, KeyNameLookup, KeysymNames};
use crate::modifier::{parse_mods, ModMask};

/// A single normalized key press: modifiers, native flag and key code.
///
/// A key code of 0 means the key could not be resolved; `parse_shortcut`
/// never returns such a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trigger {
    pub mods: ModMask,
    pub is_native: bool,
    pub key: u32,
}

impl Trigger {
    pub fn new(mods: ModMask, is_native: bool, key: u32) -> Self {
        Self {
            mods,
            is_native,
            key,
        }
    }

    /// True when the key code resolved to something
    pub fn is_valid(&self) -> bool {
        self.key != 0
    }

    /// Copy of this trigger with the primary-modifier placeholder substituted
    pub fn resolved(self, primary: ModMask) -> Self {
        Self {
            mods: self.mods.resolve_primary(primary),
            ..self
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+", self.mods)?;
        }
        if self.is_native {
            write!(f, "0x{:x}", self.key)
        } else {
            write!(f, "{}", key::key_name(self.key))
        }
    }
}

/// Errors that can occur during shortcut parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    /// A modifier token did not resolve
    #[error("Shortcut: {0} has unknown modifier, ignoring")]
    InvalidModifier(String),
    /// The key spec resolved to code 0
    #[error("Shortcut: {0} has unknown key, ignoring")]
    UnknownKey(String),
    /// Nothing left to parse after trimming separators
    #[error("Shortcut is empty")]
    Empty,
}

/// Parse a shortcut using the default native key name table.
///
/// # Examples
/// ```
/// use bindkit_core::trigger::parse_shortcut;
/// use bindkit_core::modifier::{ModMask, Modifier};
/// let trigger = parse_shortcut("ctrl+a").unwrap();
/// assert_eq!(trigger.mods, ModMask::from(Modifier::Control));
/// assert_eq!(trigger.key, 'a' as u32);
/// ```
pub fn parse_shortcut(sc: &str) -> Result<Trigger, ShortcutError> {
    parse_shortcut_with(sc, &KeysymNames)
}

/// Parse a shortcut, consulting `key_names` when no portable name matches
pub fn parse_shortcut_with(
    sc: &str,
    key_names: &dyn KeyNameLookup,
) -> Result<Trigger, ShortcutError> {
    // "ctrl++" binds the plus key itself, since '+' also joins modifiers
    let spec: Cow<'_, str> = match sc.strip_suffix('+') {
        Some(prefix) if sc.len() > 1 => Cow::Owned(format!("{}plus", prefix)),
        _ => Cow::Borrowed(sc),
    };

    let (mods, key_spec) = match spec.rsplit_once('+') {
        Some((mod_spec, key_spec)) => {
            let mods = parse_mods(mod_spec.split('+'), sc)
                .map_err(|_| ShortcutError::InvalidModifier(sc.to_string()))?;
            // an explicit modifier section must contribute at least one bit
            if mods.is_empty() {
                log::warn!("Shortcut: {} has no usable modifiers, ignoring", sc);
                return Err(ShortcutError::InvalidModifier(sc.to_string()));
            }
            (mods, key_spec)
        }
        None => (ModMask::NONE, spec.as_ref()),
    };

    let (key, is_native) = resolve_key(key_spec, key_names);
    if key == 0 {
        return Err(ShortcutError::UnknownKey(sc.to_string()));
    }
    Ok(Trigger::new(mods, is_native, key))
}

/// Resolve the key part of a shortcut to (code, is_native), code 0 if unknown
fn resolve_key(spec: &str, key_names: &dyn KeyNameLookup) -> (u32, bool) {
    let q: Cow<'_, str> = match key::character_alias(&spec.to_uppercase()) {
        Some(c) => Cow::Owned(c.to_string()),
        None => Cow::Borrowed(spec),
    };

    if let Some(hex) = q.strip_prefix("0x") {
        return match u32::from_str_radix(hex, 16) {
            Ok(code) => (code, true),
            Err(_) => (0, false),
        };
    }

    let mut chars = q.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_control() {
            return (c as u32, false);
        }
    }

    if let Some(code) = key::functional_key_code(&q.to_uppercase()) {
        return (code, false);
    }

    match key_names.lookup(&q, false) {
        Some(code) if code > 0 => (code, true),
        _ => (0, false),
    }
}
