// Bindkit Mouse Mappings
// Compiles "button event modes action" directives into mouse bindings

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::action::{parse_key_action, Action, ActionError};
use crate::definition::BindingDefinition;
use crate::modifier::{parse_mods, ModMask};
use crate::util::split_max;

/// Button names accepted besides the raw `b1`..`b8` constants
const BUTTON_ALIASES: &[(&str, &str)] = &[("left", "b1"), ("middle", "b3"), ("right", "b2")];

/// Raw button constants (name without the `b` prefix -> button code)
const MOUSE_BUTTONS: &[(&str, u32)] = &[
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
];

/// Resolve a lowercased button name to its code
pub fn mouse_button_code(name: &str) -> Option<u32> {
    let name = BUTTON_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, raw)| *raw)
        .unwrap_or(name);
    let number = name.strip_prefix('b')?;
    MOUSE_BUTTONS
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, code)| *code)
}

/// Kind of mouse event a binding fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MouseEventKind {
    Press,
    DoublePress,
    TriplePress,
    Release,
    Click,
    DoubleClick,
}

impl MouseEventKind {
    /// Signed repeat count: positive fires on button down, negative on button up
    pub fn repeat_count(self) -> i32 {
        match self {
            MouseEventKind::Press => 1,
            MouseEventKind::DoublePress => 2,
            MouseEventKind::TriplePress => 3,
            MouseEventKind::Release => -1,
            MouseEventKind::Click => -2,
            MouseEventKind::DoubleClick => -3,
        }
    }
}

/// Whether a binding applies while the program has grabbed the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GrabMode {
    Grabbed,
    Ungrabbed,
}

/// The trigger side of a mouse binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MouseEvent {
    pub button: u32,
    pub mods: ModMask,
    pub repeat_count: i32,
    pub grabbed: bool,
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+", self.mods)?;
        }
        let mode = if self.grabbed { "grabbed" } else { "ungrabbed" };
        write!(f, "b{} x{} {}", self.button, self.repeat_count, mode)
    }
}

/// A compiled mouse binding
#[derive(Debug, Clone, PartialEq)]
pub struct MouseMapping {
    pub button: u32,
    pub mods: ModMask,
    pub repeat_count: i32,
    pub grabbed: bool,
    pub action: Action,
}

impl MouseMapping {
    pub fn trigger(&self) -> MouseEvent {
        MouseEvent {
            button: self.button,
            mods: self.mods,
            repeat_count: self.repeat_count,
            grabbed: self.grabbed,
        }
    }
}

impl BindingDefinition for MouseMapping {
    fn action(&self) -> &Action {
        &self.action
    }

    fn action_mut(&mut self) -> &mut Action {
        &mut self.action
    }

    fn resolve(&mut self, primary: ModMask) {
        self.mods = self.mods.resolve_primary(primary);
    }

    fn is_resolved(&self) -> bool {
        !self.mods.has_placeholder()
    }
}

/// Errors that can occur while compiling a mouse directive
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MouseMapError {
    #[error("Ignoring invalid mouse action: {0}")]
    FieldCount(String),

    #[error("Mouse button: {0} has unknown modifier, ignoring")]
    InvalidModifier(String),

    #[error("Mouse button: {0} not recognized, ignoring")]
    UnknownButton(String),

    #[error("Mouse event type: {0} not recognized, ignoring")]
    UnknownEvent(String),

    #[error("Mouse modes: {0} not recognized, ignoring")]
    UnknownMode(String),

    #[error("Invalid mouse action: {0}")]
    Action(#[from] ActionError),
}

/// Compile a mouse directive such as `ctrl+left click ungrabbed close_tab`.
///
/// Produces one mapping per requested grab mode, in the order the modes are
/// first named.
pub fn compile_mouse_map(val: &str) -> Result<Vec<MouseMapping>, MouseMapError> {
    let parts = split_max(val, 3);
    let [button_spec, event, modes, action] = parts.as_slice() else {
        return Err(MouseMapError::FieldCount(val.to_string()));
    };

    let (mods, button_name) = match button_spec.rsplit_once('+') {
        Some((mod_spec, button)) => {
            let mods = parse_mods(mod_spec.split('+'), button_spec)
                .map_err(|_| MouseMapError::InvalidModifier(button_spec.to_string()))?;
            (mods, button.to_lowercase())
        }
        None => (ModMask::NONE, button_spec.to_lowercase()),
    };
    let button = mouse_button_code(&button_name)
        .ok_or_else(|| MouseMapError::UnknownButton(button_spec.to_string()))?;

    let repeat_count = MouseEventKind::from_str(event)
        .map_err(|_| MouseMapError::UnknownEvent(event.to_string()))?
        .repeat_count();

    let mut grab_modes: Vec<GrabMode> = Vec::with_capacity(2);
    for mode in modes.to_lowercase().split(',') {
        let mode = GrabMode::from_str(mode)
            .map_err(|_| MouseMapError::UnknownMode(modes.to_string()))?;
        if !grab_modes.contains(&mode) {
            grab_modes.push(mode);
        }
    }

    let action = parse_key_action(action)?;

    Ok(grab_modes
        .into_iter()
        .map(|mode| MouseMapping {
            button,
            mods,
            repeat_count,
            grabbed: mode == GrabMode::Grabbed,
            action: action.clone(),
        })
        .collect())
}

/// Compile a mouse directive, logging and dropping it if it is invalid
pub fn parse_mouse_map(val: &str) -> Vec<MouseMapping> {
    match compile_mouse_map(val) {
        Ok(mappings) => mappings,
        Err(MouseMapError::InvalidModifier(_)) => Vec::new(),
        Err(err) => {
            log::warn!("{}", err);
            Vec::new()
        }
    }
}
