// Bindkit Action Argument Parsers
// Turns the text after a function name into canonical argument lists

use super::cmdline::split_command_line;
use crate::util::split_max;

/// Errors raised by argument parsers; any of them invalidates the action
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("not an integer: '{0}'")]
    NotAnInteger(String),

    #[error("not a number: '{0}'")]
    NotANumber(String),

    #[error("unterminated quote in: {0}")]
    UnterminatedQuote(String),

    #[error("invalid escape sequence in: {0}")]
    InvalidEscape(String),

    #[error("{value} is not a valid {what}")]
    InvalidChoice { what: &'static str, value: String },

    #[error("missing {0}")]
    MissingArgument(&'static str),
}

pub(crate) type ParsedArgs = Result<(String, Vec<String>), ArgsError>;

fn parse_int(val: &str) -> Result<i64, ArgsError> {
    val.trim()
        .parse::<i64>()
        .map_err(|_| ArgsError::NotAnInteger(val.to_string()))
}

fn parse_float(val: &str) -> Result<f64, ArgsError> {
    val.trim()
        .parse::<f64>()
        .map_err(|_| ArgsError::NotANumber(val.to_string()))
}

fn normalize_direction(val: &str) -> String {
    match val.to_lowercase().as_str() {
        "up" => "top".to_string(),
        "down" => "bottom".to_string(),
        other => other.to_string(),
    }
}

const DIRECTIONS: &[&str] = &["left", "right", "top", "bottom"];

pub(crate) fn command_line(func: &str, rest: &str) -> ParsedArgs {
    Ok((func.to_string(), split_command_line(rest)?))
}

pub(crate) fn kitten(func: &str, rest: &str) -> ParsedArgs {
    let parts = if func == "kitten" {
        split_max(rest, 1)
    } else {
        // run_kitten / run_simple_kitten carry a kitten type word first
        split_max(rest, 2).into_iter().skip(1).collect()
    };
    let (name, args) = match parts.as_slice() {
        [name] => (name.to_string(), String::new()),
        [name, args, ..] => (name.to_string(), args.to_string()),
        [] => return Err(ArgsError::MissingArgument("kitten name")),
    };
    Ok(("kitten".to_string(), vec![name, args]))
}

pub(crate) fn send_text(func: &str, rest: &str) -> ParsedArgs {
    let parts = split_max(rest, 1);
    let (mode, text) = match parts.as_slice() {
        [mode, text] => match decode_escapes(text) {
            Ok(decoded) => (mode.to_string(), decoded),
            Err(err) => {
                log::warn!("Ignoring invalid send_text string: {} ({})", text, err);
                (mode.to_string(), String::new())
            }
        },
        _ => (String::new(), String::new()),
    };
    Ok((func.to_string(), vec![mode, text]))
}

/// Expand backslash escapes as written in send_text strings
pub fn decode_escapes(text: &str) -> Result<String, ArgsError> {
    let invalid = || ArgsError::InvalidEscape(text.to_string());
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = chars.next().ok_or_else(invalid)?;
        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'e' => out.push('\x1b'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            '0' => out.push('\0'),
            '\\' | '\'' | '"' | '?' => out.push(escaped),
            'x' | 'u' | 'U' => {
                let width = match escaped {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.by_ref().take(width).collect();
                if digits.len() != width {
                    return Err(invalid());
                }
                let code = u32::from_str_radix(&digits, 16).map_err(|_| invalid())?;
                out.push(char::from_u32(code).ok_or_else(invalid)?);
            }
            _ => return Err(invalid()),
        }
    }
    Ok(out)
}

pub(crate) fn goto_tab(func: &str, rest: &str) -> ParsedArgs {
    let num = parse_int(rest)?.max(0);
    Ok((func.to_string(), vec![num.to_string()]))
}

pub(crate) fn nth_window(func: &str, rest: &str) -> ParsedArgs {
    let num = parse_int(rest).unwrap_or_else(|_| {
        log::warn!("Invalid nth_window number: {}, using 0", rest);
        0
    });
    Ok((func.to_string(), vec![num.to_string()]))
}

pub(crate) fn set_font_size(func: &str, rest: &str) -> ParsedArgs {
    Ok((func.to_string(), vec![parse_float(rest)?.to_string()]))
}

pub(crate) fn change_font_size(func: &str, rest: &str) -> ParsedArgs {
    let mut parts = split_max(rest, 1);
    if parts.len() != 2 {
        log::warn!("Invalid change_font_size specification: {}, treating it as default", rest);
        parts = vec!["all", "0"];
    }
    let scope = if parts[0].eq_ignore_ascii_case("all") {
        "all"
    } else {
        "current"
    };
    let amount = parts[1];
    let (sign, amount) = match amount.chars().next() {
        Some(s @ ('+' | '-')) => (s.to_string(), &amount[1..]),
        _ => (String::new(), amount),
    };
    let amount = parse_float(amount)?;
    Ok((
        func.to_string(),
        vec![scope.to_string(), sign, amount.to_string()],
    ))
}

pub(crate) fn clear_terminal(func: &str, rest: &str) -> ParsedArgs {
    let mut parts = split_max(rest, 1);
    if parts.len() != 2 {
        log::warn!("clear_terminal needs two arguments, using defaults");
        parts = vec!["reset", "active"];
    }
    let mut action = parts[0].to_lowercase();
    if !matches!(action.as_str(), "reset" | "scroll" | "scrollback" | "clear") {
        log::warn!("{} is not a valid clear_terminal action, using reset", parts[0]);
        action = "reset".to_string();
    }
    let scope = if parts[1].eq_ignore_ascii_case("active") {
        "active"
    } else {
        "all"
    };
    Ok((func.to_string(), vec![action, scope.to_string()]))
}

pub(crate) fn neighboring_window(func: &str, rest: &str) -> ParsedArgs {
    let mut direction = normalize_direction(rest);
    if !DIRECTIONS.contains(&direction.as_str()) {
        log::warn!("Invalid neighbor specification: {}", rest);
        direction = "left".to_string();
    }
    Ok((func.to_string(), vec![direction]))
}

pub(crate) fn move_window(func: &str, rest: &str) -> ParsedArgs {
    let direction = normalize_direction(rest);
    let target = if direction.parse::<i64>().is_ok() || DIRECTIONS.contains(&direction.as_str()) {
        direction
    } else {
        log::warn!("Invalid move_window specification: {}", rest);
        "left".to_string()
    };
    Ok((func.to_string(), vec![target]))
}

pub(crate) fn resize_window(func: &str, rest: &str) -> ParsedArgs {
    let parts = split_max(rest, 1);
    let mut quality = parts.first().map(|q| q.to_lowercase()).unwrap_or_default();
    if !matches!(quality.as_str(), "taller" | "shorter" | "wider" | "narrower") {
        log::warn!("Invalid quality specification: {}", quality);
        quality = "wider".to_string();
    }
    let increment = match parts.get(1) {
        Some(val) => parse_int(val).unwrap_or_else(|_| {
            log::warn!("Invalid increment specification: {}", val);
            1
        }),
        None => 1,
    };
    Ok((func.to_string(), vec![quality, increment.to_string()]))
}

fn choice(func: &str, rest: &str, allowed: &[&str]) -> ParsedArgs {
    let value = if allowed.contains(&rest) {
        rest.to_string()
    } else {
        log::warn!("Ignoring invalid {} argument: {}", func, rest);
        "new".to_string()
    };
    Ok((func.to_string(), vec![value]))
}

pub(crate) fn detach_window(func: &str, rest: &str) -> ParsedArgs {
    choice(
        func,
        rest,
        &["new", "new-tab", "ask", "tab-prev", "tab-left", "tab-right"],
    )
}

pub(crate) fn detach_tab(func: &str, rest: &str) -> ParsedArgs {
    choice(func, rest, &["new", "ask"])
}

const SIGNALS: &[(&str, i32)] = &[
    ("SIGHUP", 1),
    ("SIGINT", 2),
    ("SIGQUIT", 3),
    ("SIGILL", 4),
    ("SIGTRAP", 5),
    ("SIGABRT", 6),
    ("SIGBUS", 7),
    ("SIGFPE", 8),
    ("SIGKILL", 9),
    ("SIGUSR1", 10),
    ("SIGSEGV", 11),
    ("SIGUSR2", 12),
    ("SIGPIPE", 13),
    ("SIGALRM", 14),
    ("SIGTERM", 15),
    ("SIGCHLD", 17),
    ("SIGCONT", 18),
    ("SIGSTOP", 19),
    ("SIGTSTP", 20),
    ("SIGTTIN", 21),
    ("SIGTTOU", 22),
    ("SIGWINCH", 28),
];

pub(crate) fn signal_child(func: &str, rest: &str) -> ParsedArgs {
    let mut signals = Vec::new();
    for name in rest.split_whitespace() {
        let upper = name.to_uppercase();
        match SIGNALS.iter().find(|(n, _)| *n == upper) {
            Some((_, num)) => signals.push(num.to_string()),
            None => log::warn!("{} is not a known signal, ignoring", name),
        }
    }
    Ok((func.to_string(), signals))
}

pub(crate) fn pipe(func: &str, rest: &str) -> ParsedArgs {
    let mut args = split_command_line(rest)?;
    if args.len() < 3 {
        log::warn!("Too few arguments to pipe function");
        args = vec!["none".to_string(), "none".to_string(), "true".to_string()];
    }
    Ok((func.to_string(), args))
}

pub(crate) fn disable_ligatures_in(func: &str, rest: &str) -> ParsedArgs {
    let parts = split_max(rest, 1);
    let (where_, strategy) = match parts.as_slice() {
        [strategy] => ("active", *strategy),
        [where_, strategy] => (*where_, *strategy),
        _ => return Err(ArgsError::MissingArgument("ligature strategy")),
    };
    if !matches!(where_, "active" | "all" | "tab") {
        return Err(ArgsError::InvalidChoice {
            what: "set of windows to disable ligatures in",
            value: where_.to_string(),
        });
    }
    if !matches!(strategy, "never" | "always" | "cursor") {
        return Err(ArgsError::InvalidChoice {
            what: "ligature disabling strategy",
            value: strategy.to_string(),
        });
    }
    Ok((func.to_string(), vec![where_.to_string(), strategy.to_string()]))
}

pub(crate) fn layout_action(func: &str, rest: &str) -> ParsedArgs {
    let parts = split_max(rest, 1);
    let mut args: Vec<String> = match parts.first() {
        Some(name) => vec![name.to_string()],
        None => return Err(ArgsError::MissingArgument("layout action name")),
    };
    if let Some(params) = parts.get(1) {
        args.extend(params.split_whitespace().map(str::to_string));
    }
    Ok((func.to_string(), args))
}

pub(crate) fn single(func: &str, rest: &str) -> ParsedArgs {
    Ok((func.to_string(), vec![rest.to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(result: ParsedArgs) -> Vec<String> {
        result.unwrap().1
    }

    #[test]
    fn test_kitten_forms() {
        assert_eq!(
            kitten("kitten", "hints --type url").unwrap(),
            ("kitten".to_string(), vec!["hints".to_string(), "--type url".to_string()])
        );
        assert_eq!(args(kitten("kitten", "unicode_input")), vec!["unicode_input", ""]);
        assert_eq!(
            kitten("run_simple_kitten", "text hints --type path").unwrap(),
            ("kitten".to_string(), vec!["hints".to_string(), "--type path".to_string()])
        );
        assert_eq!(
            kitten("run_kitten", "text"),
            Err(ArgsError::MissingArgument("kitten name"))
        );
    }

    #[test]
    fn test_send_text() {
        assert_eq!(args(send_text("send_text", r"all \x1b[A")), vec!["all", "\x1b[A"]);
        assert_eq!(args(send_text("send_text", r"normal hi\n")), vec!["normal", "hi\n"]);
        assert_eq!(args(send_text("send_text", "all")), vec!["", ""]);
        assert_eq!(args(send_text("send_text", r"all bad\q")), vec!["all", ""]);
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes(r"é\t").unwrap(), "\u{e9}\t");
        assert!(decode_escapes(r"\x1").is_err());
        assert!(decode_escapes("trailing\\").is_err());
    }

    #[test]
    fn test_goto_tab() {
        assert_eq!(args(goto_tab("goto_tab", "3")), vec!["3"]);
        assert_eq!(args(goto_tab("goto_tab", "-1")), vec!["0"]);
        assert!(matches!(goto_tab("goto_tab", "x"), Err(ArgsError::NotAnInteger(_))));
    }

    #[test]
    fn test_nth_window_defaults() {
        assert_eq!(args(nth_window("nth_window", "-1")), vec!["-1"]);
        assert_eq!(args(nth_window("nth_window", "x")), vec!["0"]);
    }

    #[test]
    fn test_font_sizes() {
        assert_eq!(args(set_font_size("set_font_size", "14.5")), vec!["14.5"]);
        assert!(set_font_size("set_font_size", "big").is_err());
        assert_eq!(
            args(change_font_size("change_font_size", "all +2.0")),
            vec!["all", "+", "2"]
        );
        assert_eq!(
            args(change_font_size("change_font_size", "current -1.5")),
            vec!["current", "-", "1.5"]
        );
        assert_eq!(
            args(change_font_size("change_font_size", "all 0")),
            vec!["all", "", "0"]
        );
        assert_eq!(
            args(change_font_size("change_font_size", "oops")),
            vec!["all", "", "0"]
        );
    }

    #[test]
    fn test_clear_terminal() {
        assert_eq!(
            args(clear_terminal("clear_terminal", "scroll active")),
            vec!["scroll", "active"]
        );
        assert_eq!(
            args(clear_terminal("clear_terminal", "wipe all")),
            vec!["reset", "all"]
        );
    }

    #[test]
    fn test_directions() {
        assert_eq!(args(neighboring_window("neighboring_window", "up")), vec!["top"]);
        assert_eq!(args(neighboring_window("neighboring_window", "sideways")), vec!["left"]);
        assert_eq!(args(move_window("move_window", "Down")), vec!["bottom"]);
        assert_eq!(args(move_window("move_window", "2")), vec!["2"]);
    }

    #[test]
    fn test_resize_window() {
        assert_eq!(args(resize_window("resize_window", "taller 3")), vec!["taller", "3"]);
        assert_eq!(args(resize_window("resize_window", "narrower")), vec!["narrower", "1"]);
        assert_eq!(args(resize_window("resize_window", "fatter x")), vec!["wider", "1"]);
    }

    #[test]
    fn test_detach() {
        assert_eq!(args(detach_window("detach_window", "tab-left")), vec!["tab-left"]);
        assert_eq!(args(detach_window("detach_window", "nowhere")), vec!["new"]);
        assert_eq!(args(detach_tab("detach_tab", "ask")), vec!["ask"]);
    }

    #[test]
    fn test_signal_child() {
        assert_eq!(args(signal_child("signal_child", "SIGINT sigterm SIGNOPE")), vec!["2", "15"]);
    }

    #[test]
    fn test_pipe() {
        assert_eq!(
            args(pipe("pipe", "@selection window less")),
            vec!["@selection", "window", "less"]
        );
        assert_eq!(args(pipe("pipe", "@selection")), vec!["none", "none", "true"]);
    }

    #[test]
    fn test_disable_ligatures_in() {
        assert_eq!(
            args(disable_ligatures_in("disable_ligatures_in", "always")),
            vec!["active", "always"]
        );
        assert_eq!(
            args(disable_ligatures_in("disable_ligatures_in", "tab cursor")),
            vec!["tab", "cursor"]
        );
        assert!(disable_ligatures_in("disable_ligatures_in", "everywhere never").is_err());
        assert!(disable_ligatures_in("disable_ligatures_in", "all sometimes").is_err());
    }

    #[test]
    fn test_layout_action() {
        assert_eq!(
            args(layout_action("layout_action", "bias 50 62 70")),
            vec!["bias", "50", "62", "70"]
        );
        assert_eq!(args(layout_action("layout_action", "rotate")), vec!["rotate"]);
    }
}
