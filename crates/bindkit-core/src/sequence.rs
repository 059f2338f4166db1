// Bindkit Sequence Parser
// Chains shortcuts like "ctrl+x>ctrl+s" into an ordered key sequence

use std::fmt;

use smallvec::SmallVec;

use crate::key::{KeyNameLookup, KeysymNames};
use crate::modifier::ModMask;
use crate::trigger::{parse_shortcut_with, ShortcutError, Trigger};

/// Separator between the keys of a sequence unless configured otherwise
pub const DEFAULT_SEQUENCE_SEPARATOR: char = '>';

/// Triggers after the first one in a sequence
pub type SequenceTail = SmallVec<[Trigger; 4]>;

/// An ordered chain of triggers pressed one after another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySequence {
    pub head: Trigger,
    pub tail: SequenceTail,
}

impl KeySequence {
    /// Number of key presses in the sequence
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// A sequence always holds at least its head
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn resolve(&mut self, primary: ModMask) {
        self.head = self.head.resolved(primary);
        for trigger in self.tail.iter_mut() {
            *trigger = trigger.resolved(primary);
        }
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(">"))
    }
}

/// Parse a sequence with the default separator and key name table
pub fn parse_sequence(sc: &str) -> Result<KeySequence, ShortcutError> {
    parse_sequence_with(sc, DEFAULT_SEQUENCE_SEPARATOR, &KeysymNames)
}

/// Parse `sc` as `separator`-joined shortcuts.
///
/// Leading and trailing separators are ignored. Every segment must resolve;
/// the first failure discards the whole sequence.
pub fn parse_sequence_with(
    sc: &str,
    separator: char,
    key_names: &dyn KeyNameLookup,
) -> Result<KeySequence, ShortcutError> {
    let trimmed = sc.trim_matches(separator);
    if trimmed.is_empty() {
        return Err(ShortcutError::Empty);
    }

    let mut head: Option<Trigger> = None;
    let mut tail = SequenceTail::new();
    for part in trimmed.split(separator) {
        let trigger = parse_shortcut_with(part, key_names).map_err(|err| match err {
            // Name the whole sequence, not just the failing segment
            ShortcutError::UnknownKey(_) => ShortcutError::UnknownKey(sc.to_string()),
            other => other,
        })?;
        match head {
            None => head = Some(trigger),
            Some(_) => tail.push(trigger),
        }
    }

    head.map(|head| KeySequence { head, tail })
        .ok_or(ShortcutError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Modifier;
    use crate::trigger::parse_shortcut;

    #[test]
    fn test_parse_two_key_sequence() {
        let seq = parse_sequence("ctrl+a>ctrl+b").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.head, parse_shortcut("ctrl+a").unwrap());
        assert_eq!(seq.tail.as_slice(), &[parse_shortcut("ctrl+b").unwrap()]);
    }

    #[test]
    fn test_single_segment() {
        let seq = parse_sequence("ctrl+a").unwrap();
        assert_eq!(seq.len(), 1);
        assert!(seq.tail.is_empty());
    }

    #[test]
    fn test_strips_outer_separators() {
        let seq = parse_sequence(">ctrl+x>s>").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.tail[0].key, 's' as u32);
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(parse_sequence(">>"), Err(ShortcutError::Empty));
    }

    #[test]
    fn test_unknown_key_discards_sequence() {
        assert_eq!(
            parse_sequence("ctrl+a>notakey>b"),
            Err(ShortcutError::UnknownKey("ctrl+a>notakey>b".to_string()))
        );
    }

    #[test]
    fn test_empty_middle_segment_discards_sequence() {
        assert!(parse_sequence("a>>b").is_err());
    }

    #[test]
    fn test_invalid_modifier_discards_sequence() {
        assert!(matches!(
            parse_sequence("ctrl+a>bogus+b"),
            Err(ShortcutError::InvalidModifier(_))
        ));
    }

    #[test]
    fn test_custom_separator() {
        let seq = parse_sequence_with("ctrl+a,b,c", ',', &KeysymNames).unwrap();
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_resolve_every_trigger() {
        let mut seq = parse_sequence("primary+a>primary+b>c").unwrap();
        let primary = Modifier::Control | Modifier::Shift;
        seq.resolve(primary);
        assert_eq!(seq.head.mods, primary);
        assert_eq!(seq.tail[0].mods, primary);
        assert_eq!(seq.tail[1].mods, ModMask::NONE);
    }

    #[test]
    fn test_display() {
        let seq = parse_sequence("ctrl+a>b").unwrap();
        assert_eq!(seq.to_string(), "ctrl+a>b");
    }
}
