// Bindkit Action Parser
// Splits an action directive into a function name and its arguments

pub mod args;
pub mod cmdline;
pub mod kind;

use std::fmt;

use serde::Serialize;

pub use args::{decode_escapes, ArgsError};
pub use cmdline::split_command_line;
pub use kind::{registered_functions, ActionKind};

/// Function name of the action that unbinds a trigger
pub const NO_OP: &str = "no_op";

/// A function name plus its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Action {
    func: String,
    args: Vec<String>,
}

impl Action {
    pub fn new(func: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            func: func.into(),
            args,
        }
    }

    pub fn func(&self) -> &str {
        &self.func
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Same function with a different argument list
    pub fn with_args(&self, args: Vec<String>) -> Self {
        Self {
            func: self.func.clone(),
            args,
        }
    }

    /// True for the action that removes an existing binding
    pub fn is_no_op(&self) -> bool {
        self.func == NO_OP
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.func)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Errors that can occur while parsing an action
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("Empty action")]
    Empty,

    #[error("Ignoring invalid key action: {action} with err: {source}")]
    InvalidArguments {
        action: String,
        #[source]
        source: ArgsError,
    },
}

/// Parse the action part of a directive, e.g. `new_tab` or `goto_tab 3`.
///
/// # Examples
/// ```
/// use bindkit_core::action::parse_key_action;
/// let action = parse_key_action("goto_tab 3").unwrap();
/// assert_eq!(action.func(), "goto_tab");
/// assert_eq!(action.args(), &["3".to_string()]);
/// ```
pub fn parse_key_action(text: &str) -> Result<Action, ActionError> {
    let text = text.trim();
    let (func, rest) = match text.split_once(char::is_whitespace) {
        Some((func, rest)) => (func, rest.trim()),
        None => (text, ""),
    };
    if func.is_empty() {
        return Err(ActionError::Empty);
    }
    if rest.is_empty() {
        return Ok(Action::new(func, Vec::new()));
    }

    let (func, args) = ActionKind::for_function(func)
        .parse(func, rest)
        .map_err(|source| ActionError::InvalidArguments {
            action: text.to_string(),
            source,
        })?;
    Ok(Action::new(func, args))
}
