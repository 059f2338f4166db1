// Bindkit Modifier System
// Resolves modifier names (ctrl, shift, cmd, ...) into a modifier bit mask

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A single keyboard modifier and its bit in a [`ModMask`].
///
/// `Primary` is a placeholder: it stands for whatever modifiers the user
/// configured as their primary modifier and is substituted at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum Modifier {
    Shift = 1,
    Alt = 2,
    Control = 4,
    Super = 8,
    Hyper = 16,
    Meta = 32,
    CapsLock = 64,
    NumLock = 128,
    Primary = 256,
}

impl Modifier {
    /// The bit this modifier occupies
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Short lowercase name used when printing masks
    pub fn short_name(self) -> &'static str {
        match self {
            Modifier::Shift => "shift",
            Modifier::Alt => "alt",
            Modifier::Control => "ctrl",
            Modifier::Super => "super",
            Modifier::Hyper => "hyper",
            Modifier::Meta => "meta",
            Modifier::CapsLock => "caps_lock",
            Modifier::NumLock => "num_lock",
            Modifier::Primary => "primary",
        }
    }
}

/// Alternate spellings accepted for modifier names (already uppercased)
const MODIFIER_ALIASES: &[(&str, &str)] = &[
    ("CTRL", "CONTROL"),
    ("CMD", "SUPER"),
    ("\u{2318}", "SUPER"), // ⌘
    ("\u{2325}", "ALT"),   // ⌥
    ("OPTION", "ALT"),
    ("KITTY_MOD", "PRIMARY"),
    ("PRIMARY_MOD", "PRIMARY"),
];

/// Bit set of held modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ModMask(u32);

impl ModMask {
    pub const NONE: ModMask = ModMask(0);

    pub const fn from_bits(bits: u32) -> Self {
        ModMask(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// True while the primary-modifier placeholder is still present
    pub fn has_placeholder(self) -> bool {
        self.contains(Modifier::Primary)
    }

    /// Substitute the placeholder bit with the concrete bits of `primary`.
    ///
    /// Masks without the placeholder are returned unchanged, so applying this
    /// repeatedly with the same `primary` is a no-op after the first call.
    /// A placeholder bit inside `primary` itself is ignored.
    pub fn resolve_primary(self, primary: ModMask) -> ModMask {
        if !self.has_placeholder() {
            return self;
        }
        let placeholder = Modifier::Primary.bit();
        ModMask((self.0 & !placeholder) | (primary.0 & !placeholder))
    }

    /// Iterate over the modifiers set in this mask, lowest bit first
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::iter().filter(move |m| self.contains(*m))
    }
}

impl From<Modifier> for ModMask {
    fn from(modifier: Modifier) -> Self {
        ModMask(modifier.bit())
    }
}

impl BitOr for ModMask {
    type Output = ModMask;

    fn bitor(self, rhs: ModMask) -> ModMask {
        ModMask(self.0 | rhs.0)
    }
}

impl BitOr<Modifier> for ModMask {
    type Output = ModMask;

    fn bitor(self, rhs: Modifier) -> ModMask {
        ModMask(self.0 | rhs.bit())
    }
}

impl BitOr for Modifier {
    type Output = ModMask;

    fn bitor(self, rhs: Modifier) -> ModMask {
        ModMask(self.bit() | rhs.bit())
    }
}

impl BitOrAssign for ModMask {
    fn bitor_assign(&mut self, rhs: ModMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.modifiers().map(Modifier::short_name).collect();
        write!(f, "{}", names.join("+"))
    }
}

impl Serialize for ModMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors that can occur while resolving modifier names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModifierError {
    #[error("Shortcut: {shortcut} has unknown modifier: {modifier}, ignoring")]
    Unknown { modifier: String, shortcut: String },
}

/// Resolve one modifier token, `Some(None)` meaning the explicit `none` token
fn resolve_token(token: &str) -> Option<Option<Modifier>> {
    let upper = token.to_uppercase();
    let name = MODIFIER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(upper.as_str());

    if name == "NONE" {
        return Some(None);
    }
    Modifier::from_str(name).ok().map(Some)
}

/// Resolve modifier tokens into a mask.
///
/// `shortcut` is the full text the tokens came from and only appears in the
/// warning emitted for an unknown token. A single unknown token fails the
/// whole call; `none` contributes no bits.
///
/// # Examples
/// ```
/// use bindkit_core::modifier::{parse_mods, Modifier};
/// let mask = parse_mods(["ctrl", "shift"], "ctrl+shift+a").unwrap();
/// assert_eq!(mask, Modifier::Control | Modifier::Shift);
/// ```
pub fn parse_mods<'a, I>(parts: I, shortcut: &str) -> Result<ModMask, ModifierError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut mods = ModMask::NONE;
    for part in parts {
        match resolve_token(part) {
            Some(Some(modifier)) => mods |= modifier.into(),
            Some(None) => {}
            None => {
                let err = ModifierError::Unknown {
                    modifier: part.to_string(),
                    shortcut: shortcut.to_string(),
                };
                log::warn!("{}", err);
                return Err(err);
            }
        }
    }
    Ok(mods)
}

/// Resolve a whole `+`-joined modifier value such as `ctrl+shift`.
///
/// Used for option values; an invalid value resolves to no modifiers.
pub fn to_modifiers(val: &str) -> ModMask {
    parse_mods(val.split('+'), val).unwrap_or(ModMask::NONE)
}
