// Bindkit Action Kinds
// Closed set of argument parsers, looked up by function name

use std::sync::OnceLock;

use indexmap::IndexMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::args::{self, ParsedArgs};

/// How the argument text of an action is interpreted.
///
/// Every function name maps to exactly one kind; names outside the registry
/// are `Opaque` and keep their argument text verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ActionKind {
    CommandLine,
    Kitten,
    SendText,
    GotoTab,
    NthWindow,
    SetFontSize,
    ChangeFontSize,
    ClearTerminal,
    NeighboringWindow,
    MoveWindow,
    ResizeWindow,
    DetachWindow,
    DetachTab,
    SignalChild,
    Pipe,
    DisableLigatures,
    LayoutAction,
    SingleArgument,
    Opaque,
}

impl ActionKind {
    /// Function names handled by this kind
    pub fn function_names(self) -> &'static [&'static str] {
        match self {
            ActionKind::CommandLine => &[
                "launch",
                "new_window",
                "new_tab",
                "new_os_window",
                "new_window_with_cwd",
                "new_tab_with_cwd",
                "new_os_window_with_cwd",
                "pass_selection_to_program",
                "remote_control",
            ],
            ActionKind::Kitten => &["kitten", "run_kitten", "run_simple_kitten"],
            ActionKind::SendText => &["send_text"],
            ActionKind::GotoTab => &["goto_tab"],
            ActionKind::NthWindow => &["nth_window"],
            ActionKind::SetFontSize => &["set_font_size"],
            ActionKind::ChangeFontSize => &["change_font_size"],
            ActionKind::ClearTerminal => &["clear_terminal"],
            ActionKind::NeighboringWindow => &["neighboring_window"],
            ActionKind::MoveWindow => &["move_window"],
            ActionKind::ResizeWindow => &["resize_window"],
            ActionKind::DetachWindow => &["detach_window"],
            ActionKind::DetachTab => &["detach_tab"],
            ActionKind::SignalChild => &["signal_child"],
            ActionKind::Pipe => &["pipe"],
            ActionKind::DisableLigatures => &["disable_ligatures_in"],
            ActionKind::LayoutAction => &["layout_action"],
            ActionKind::SingleArgument => &[
                "set_background_opacity",
                "goto_layout",
                "toggle_layout",
                "kitty_shell",
                "copy_to_buffer",
                "paste_from_buffer",
            ],
            ActionKind::Opaque => &[],
        }
    }

    /// Kind registered for `func`, `Opaque` when none is
    pub fn for_function(func: &str) -> ActionKind {
        registry().get(func).copied().unwrap_or(ActionKind::Opaque)
    }

    /// Parse `rest` (non-empty) into a canonical function name and arguments
    pub(crate) fn parse(self, func: &str, rest: &str) -> ParsedArgs {
        match self {
            ActionKind::CommandLine => args::command_line(func, rest),
            ActionKind::Kitten => args::kitten(func, rest),
            ActionKind::SendText => args::send_text(func, rest),
            ActionKind::GotoTab => args::goto_tab(func, rest),
            ActionKind::NthWindow => args::nth_window(func, rest),
            ActionKind::SetFontSize => args::set_font_size(func, rest),
            ActionKind::ChangeFontSize => args::change_font_size(func, rest),
            ActionKind::ClearTerminal => args::clear_terminal(func, rest),
            ActionKind::NeighboringWindow => args::neighboring_window(func, rest),
            ActionKind::MoveWindow => args::move_window(func, rest),
            ActionKind::ResizeWindow => args::resize_window(func, rest),
            ActionKind::DetachWindow => args::detach_window(func, rest),
            ActionKind::DetachTab => args::detach_tab(func, rest),
            ActionKind::SignalChild => args::signal_child(func, rest),
            ActionKind::Pipe => args::pipe(func, rest),
            ActionKind::DisableLigatures => args::disable_ligatures_in(func, rest),
            ActionKind::LayoutAction => args::layout_action(func, rest),
            ActionKind::SingleArgument | ActionKind::Opaque => args::single(func, rest),
        }
    }
}

/// Function name -> kind, built once on first use
fn registry() -> &'static IndexMap<&'static str, ActionKind> {
    static REGISTRY: OnceLock<IndexMap<&'static str, ActionKind>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        ActionKind::iter()
            .flat_map(|kind| kind.function_names().iter().map(move |name| (*name, kind)))
            .collect()
    })
}

/// All function names with a registered argument parser
pub fn registered_functions() -> impl Iterator<Item = &'static str> {
    registry().keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(ActionKind::for_function("launch"), ActionKind::CommandLine);
        assert_eq!(ActionKind::for_function("run_kitten"), ActionKind::Kitten);
        assert_eq!(ActionKind::for_function("goto_layout"), ActionKind::SingleArgument);
        assert_eq!(ActionKind::for_function("close_tab"), ActionKind::Opaque);
    }

    #[test]
    fn test_function_names_unique() {
        let names: Vec<&str> = ActionKind::iter()
            .flat_map(|kind| kind.function_names().iter().copied())
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert_eq!(registered_functions().count(), names.len());
    }

    #[test]
    fn test_opaque_keeps_text() {
        assert_eq!(
            ActionKind::Opaque.parse("some_func", "a  b").unwrap(),
            ("some_func".to_string(), vec!["a  b".to_string()])
        );
    }
}
