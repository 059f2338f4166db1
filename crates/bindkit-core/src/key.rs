// Bindkit Key Tables
// Character aliases, functional key codes and native key name lookup

use std::collections::HashMap;
use std::sync::OnceLock;

/// First code of the functional key block (Unicode private use area)
pub const FUNCTIONAL_KEY_BASE: u32 = 57344;

/// Functional key names in code order, starting at [`FUNCTIONAL_KEY_BASE`].
///
/// F1..F35 and KP_0..KP_9 are spliced in by `functional_key_table`.
const FUNCTIONAL_KEYS_HEAD: &[&str] = &[
    "ESCAPE",
    "ENTER",
    "TAB",
    "BACKSPACE",
    "INSERT",
    "DELETE",
    "LEFT",
    "RIGHT",
    "UP",
    "DOWN",
    "PAGE_UP",
    "PAGE_DOWN",
    "HOME",
    "END",
    "CAPS_LOCK",
    "SCROLL_LOCK",
    "NUM_LOCK",
    "PRINT_SCREEN",
    "PAUSE",
    "MENU",
];

const FUNCTIONAL_KEYS_KEYPAD: &[&str] = &[
    "KP_DECIMAL",
    "KP_DIVIDE",
    "KP_MULTIPLY",
    "KP_SUBTRACT",
    "KP_ADD",
    "KP_ENTER",
    "KP_EQUAL",
    "KP_SEPARATOR",
    "KP_LEFT",
    "KP_RIGHT",
    "KP_UP",
    "KP_DOWN",
    "KP_PAGE_UP",
    "KP_PAGE_DOWN",
    "KP_HOME",
    "KP_END",
    "KP_INSERT",
    "KP_DELETE",
    "KP_BEGIN",
    "MEDIA_PLAY",
    "MEDIA_PAUSE",
    "MEDIA_PLAY_PAUSE",
    "MEDIA_REVERSE",
    "MEDIA_STOP",
    "MEDIA_FAST_FORWARD",
    "MEDIA_REWIND",
    "MEDIA_TRACK_NEXT",
    "MEDIA_TRACK_PREVIOUS",
    "MEDIA_RECORD",
    "LOWER_VOLUME",
    "RAISE_VOLUME",
    "MUTE_VOLUME",
    "LEFT_SHIFT",
    "LEFT_CONTROL",
    "LEFT_ALT",
    "LEFT_SUPER",
    "LEFT_HYPER",
    "LEFT_META",
    "RIGHT_SHIFT",
    "RIGHT_CONTROL",
    "RIGHT_ALT",
    "RIGHT_SUPER",
    "RIGHT_HYPER",
    "RIGHT_META",
    "ISO_LEVEL3_SHIFT",
    "ISO_LEVEL5_SHIFT",
];

/// Alternate spellings for functional key names (uppercased)
const FUNCTIONAL_KEY_ALIASES: &[(&str, &str)] = &[
    ("ESC", "ESCAPE"),
    ("PGUP", "PAGE_UP"),
    ("PAGEUP", "PAGE_UP"),
    ("PGDN", "PAGE_DOWN"),
    ("PAGEDOWN", "PAGE_DOWN"),
    ("RETURN", "ENTER"),
    ("ARROWUP", "UP"),
    ("ARROWDOWN", "DOWN"),
    ("ARROWLEFT", "LEFT"),
    ("ARROWRIGHT", "RIGHT"),
    ("DEL", "DELETE"),
    ("INS", "INSERT"),
    ("KP_PLUS", "KP_ADD"),
    ("KP_MINUS", "KP_SUBTRACT"),
    ("KP_SLASH", "KP_DIVIDE"),
];

/// Names for printable characters (uppercased name -> character)
const CHARACTER_KEY_ALIASES: &[(&str, char)] = &[
    ("SPACE", ' '),
    ("SPC", ' '),
    ("PLUS", '+'),
    ("MINUS", '-'),
    ("EQUAL", '='),
    ("UNDERSCORE", '_'),
    ("COMMA", ','),
    ("PERIOD", '.'),
    ("DOT", '.'),
    ("SLASH", '/'),
    ("BACKSLASH", '\\'),
    ("TILDE", '~'),
    ("GRAVE", '`'),
    ("GRAVE_ACCENT", '`'),
    ("BACKTICK", '`'),
    ("APOSTROPHE", '\''),
    ("QUOTE", '\''),
    ("DOUBLE_QUOTE", '"'),
    ("SEMICOLON", ';'),
    ("COLON", ':'),
    ("LEFT_BRACKET", '['),
    ("RIGHT_BRACKET", ']'),
    ("LEFT_BRACE", '{'),
    ("RIGHT_BRACE", '}'),
    ("PAREN_LEFT", '('),
    ("PAREN_RIGHT", ')'),
    ("LESS", '<'),
    ("GREATER", '>'),
    ("EXCLAM", '!'),
    ("AT", '@'),
    ("HASH", '#'),
    ("DOLLAR", '$'),
    ("PERCENT", '%'),
    ("CARET", '^'),
    ("AMPERSAND", '&'),
    ("ASTERISK", '*'),
    ("STAR", '*'),
    ("QUESTION", '?'),
    ("PIPE", '|'),
    ("BAR", '|'),
];

fn functional_key_table() -> &'static HashMap<String, u32> {
    static TABLE: OnceLock<HashMap<String, u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let names = FUNCTIONAL_KEYS_HEAD
            .iter()
            .map(|s| s.to_string())
            .chain((1..=35).map(|n| format!("F{}", n)))
            .chain((0..=9).map(|n| format!("KP_{}", n)))
            .chain(FUNCTIONAL_KEYS_KEYPAD.iter().map(|s| s.to_string()));
        names
            .zip(FUNCTIONAL_KEY_BASE..)
            .collect()
    })
}

fn character_alias_table() -> &'static HashMap<String, char> {
    static TABLE: OnceLock<HashMap<String, char>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: HashMap<String, char> = CHARACTER_KEY_ALIASES
            .iter()
            .map(|(name, c)| (name.to_string(), *c))
            .collect();
        // A bare uppercase letter names the unshifted key
        for c in 'A'..='Z' {
            table.insert(c.to_string(), c.to_ascii_lowercase());
        }
        table
    })
}

/// Look up an uppercased name in the character alias table
pub fn character_alias(name: &str) -> Option<char> {
    character_alias_table().get(name).copied()
}

/// Look up an uppercased functional key name, applying aliases first
pub fn functional_key_code(name: &str) -> Option<u32> {
    let canonical = FUNCTIONAL_KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name);
    functional_key_table().get(canonical).copied()
}

/// Reverse lookup of a functional key code
pub fn functional_key_name(code: u32) -> Option<&'static str> {
    functional_key_table()
        .iter()
        .find(|(_, c)| **c == code)
        .map(|(name, _)| name.as_str())
}

/// Human readable name for a non-native key code
pub fn key_name(code: u32) -> String {
    if let Some(name) = functional_key_name(code) {
        return name.to_lowercase();
    }
    match char::from_u32(code) {
        Some(' ') => "space".to_string(),
        Some('+') => "plus".to_string(),
        Some('>') => "greater".to_string(),
        Some(c) if !c.is_control() => c.to_string(),
        _ => format!("0x{:x}", code),
    }
}

/// Platform key name lookup used as the last resolution step.
///
/// A successful lookup yields a native key code, bypassing the portable
/// symbolic tables.
pub trait KeyNameLookup {
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<u32>;
}

/// Default lookup over a table of common X keysym names
#[derive(Debug, Clone, Copy, Default)]
pub struct KeysymNames;

const KEYSYM_NAMES: &[(&str, u32)] = &[
    ("ISO_Level3_Shift", 0xfe03),
    ("ISO_Level5_Shift", 0xfe11),
    ("Multi_key", 0xff20),
    ("Kanji", 0xff21),
    ("Muhenkan", 0xff22),
    ("Henkan", 0xff23),
    ("Hiragana", 0xff25),
    ("Katakana", 0xff26),
    ("Hangul", 0xff31),
    ("Hangul_Hanja", 0xff34),
    ("XF86MonBrightnessUp", 0x1008ff02),
    ("XF86MonBrightnessDown", 0x1008ff03),
    ("XF86AudioLowerVolume", 0x1008ff11),
    ("XF86AudioMute", 0x1008ff12),
    ("XF86AudioRaiseVolume", 0x1008ff13),
    ("XF86AudioPlay", 0x1008ff14),
    ("XF86AudioStop", 0x1008ff15),
    ("XF86AudioPrev", 0x1008ff16),
    ("XF86AudioNext", 0x1008ff17),
    ("XF86HomePage", 0x1008ff18),
    ("XF86Mail", 0x1008ff19),
    ("XF86Search", 0x1008ff1b),
    ("XF86Calculator", 0x1008ff1d),
    ("XF86Back", 0x1008ff26),
    ("XF86Forward", 0x1008ff27),
    ("XF86Refresh", 0x1008ff29),
    ("XF86Copy", 0x1008ff57),
    ("XF86Cut", 0x1008ff58),
    ("XF86Paste", 0x1008ff6d),
];

impl KeyNameLookup for KeysymNames {
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<u32> {
        KEYSYM_NAMES
            .iter()
            .find(|(n, _)| {
                if case_sensitive {
                    *n == name
                } else {
                    n.eq_ignore_ascii_case(name)
                }
            })
            .map(|(_, code)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functional_key_codes() {
        assert_eq!(functional_key_code("ESCAPE"), Some(57344));
        assert_eq!(functional_key_code("ENTER"), Some(57345));
        assert_eq!(functional_key_code("MENU"), Some(57363));
        assert_eq!(functional_key_code("F1"), Some(57364));
        assert_eq!(functional_key_code("F35"), Some(57398));
        assert_eq!(functional_key_code("KP_0"), Some(57399));
        assert_eq!(functional_key_code("KP_DECIMAL"), Some(57409));
        assert_eq!(functional_key_code("ISO_LEVEL5_SHIFT"), Some(57454));
        assert_eq!(functional_key_code("NOT_A_KEY"), None);
    }

    #[test]
    fn test_functional_aliases() {
        assert_eq!(functional_key_code("ESC"), functional_key_code("ESCAPE"));
        assert_eq!(functional_key_code("PGUP"), functional_key_code("PAGE_UP"));
        assert_eq!(functional_key_code("RETURN"), functional_key_code("ENTER"));
        assert_eq!(functional_key_code("KP_PLUS"), functional_key_code("KP_ADD"));
    }

    #[test]
    fn test_character_aliases() {
        assert_eq!(character_alias("PLUS"), Some('+'));
        assert_eq!(character_alias("SPACE"), Some(' '));
        assert_eq!(character_alias("A"), Some('a'));
        assert_eq!(character_alias("Z"), Some('z'));
        assert_eq!(character_alias("a"), None);
        assert_eq!(character_alias("ENTER"), None);
    }

    #[test]
    fn test_key_name() {
        assert_eq!(key_name(57345), "enter");
        assert_eq!(key_name('a' as u32), "a");
        assert_eq!(key_name(' ' as u32), "space");
        assert_eq!(key_name('+' as u32), "plus");
    }

    #[test]
    fn test_keysym_lookup() {
        assert_eq!(KeysymNames.lookup("XF86AudioMute", true), Some(0x1008ff12));
        assert_eq!(KeysymNames.lookup("xf86audiomute", false), Some(0x1008ff12));
        assert_eq!(KeysymNames.lookup("xf86audiomute", true), None);
        assert_eq!(KeysymNames.lookup("nothing", false), None);
    }
}
