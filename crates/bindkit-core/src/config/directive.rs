// Bindkit Directive Lines
// Keyword recognition for binding configuration files

use strum_macros::{Display, EnumString};

/// Keywords understood by the binding loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Directive {
    Map,
    MouseMap,
    KittenAlias,
    #[strum(serialize = "primary_modifier", serialize = "kitty_mod")]
    PrimaryModifier,
    ClearAllShortcuts,
    ClearAllMouseActions,
    SequenceSeparator,
}

/// Split a raw line into keyword and value.
///
/// Returns `None` for blank lines and comments. The value is trimmed and may
/// be empty.
pub fn split_directive(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((keyword, value)) => Some((keyword, value.trim())),
        None => Some((line, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_keywords() {
        assert_eq!(Directive::from_str("map"), Ok(Directive::Map));
        assert_eq!(Directive::from_str("mouse_map"), Ok(Directive::MouseMap));
        assert_eq!(Directive::from_str("kitty_mod"), Ok(Directive::PrimaryModifier));
        assert_eq!(
            Directive::from_str("primary_modifier"),
            Ok(Directive::PrimaryModifier)
        );
        assert!(Directive::from_str("font_size").is_err());
    }

    #[test]
    fn test_split_directive() {
        assert_eq!(split_directive("  # comment"), None);
        assert_eq!(split_directive("   "), None);
        assert_eq!(
            split_directive("map ctrl+a   new_tab "),
            Some(("map", "ctrl+a   new_tab"))
        );
        assert_eq!(split_directive("map"), Some(("map", "")));
        assert_eq!(
            split_directive("kitty_mod\tctrl+alt"),
            Some(("kitty_mod", "ctrl+alt"))
        );
    }
}
