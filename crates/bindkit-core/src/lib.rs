// Bindkit Core Library
// Compiles key and mouse binding directives into trigger -> action tables

pub mod action;
pub mod bindings;
pub mod config;
pub mod definition;
pub mod key;
pub mod kitten;
pub mod modifier;
pub mod mouse;
pub mod sequence;
pub mod trigger;

mod util;

pub use action::{parse_key_action, Action, ActionError, ActionKind, ArgsError};
pub use bindings::{BindingError, BindingTable};
pub use config::{BindingConfig, ConfigError};
pub use definition::{compile_map, parse_map, BindingDefinition, KeyDefinition, MapError, MapParser};
pub use key::{KeyNameLookup, KeysymNames};
pub use kitten::{expand_kitten_alias, parse_kitten_alias, KittenAliases};
pub use modifier::{parse_mods, to_modifiers, ModMask, Modifier, ModifierError};
pub use mouse::{
    compile_mouse_map, parse_mouse_map, GrabMode, MouseEvent, MouseEventKind, MouseMapError,
    MouseMapping,
};
pub use sequence::{parse_sequence, KeySequence, SequenceTail, DEFAULT_SEQUENCE_SEPARATOR};
pub use trigger::{parse_shortcut, ShortcutError, Trigger};
