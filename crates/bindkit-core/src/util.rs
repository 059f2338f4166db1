// Bindkit Utilities
// Whitespace field splitting shared by the directive parsers

/// Split on whitespace runs into at most `maxsplit + 1` fields.
///
/// The last field keeps any interior whitespace of the remainder.
pub(crate) fn split_max(s: &str, maxsplit: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s.trim();
    while !rest.is_empty() {
        if parts.len() == maxsplit {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(&rest[..idx]);
                rest = rest[idx..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }
    parts
}

/// Boolean option values as written in config files
pub(crate) fn to_bool(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "y" | "yes" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_max() {
        assert_eq!(split_max("a b c d", 1), vec!["a", "b c d"]);
        assert_eq!(split_max("  a   b  c  ", 3), vec!["a", "b", "c"]);
        assert_eq!(split_max("a  b   c d", 2), vec!["a", "b", "c d"]);
        assert_eq!(split_max("", 2), Vec::<&str>::new());
        assert_eq!(split_max("single", 3), vec!["single"]);
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool("yes"));
        assert!(to_bool("True"));
        assert!(!to_bool("no"));
        assert!(!to_bool("maybe"));
    }
}
