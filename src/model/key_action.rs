//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `config::KeyBindings`. Text editing inside the input bar (character
/// insertion, backspace, cursor movement) is deliberately NOT an action:
/// while the input bar captures typing, those keys go straight to the edit
/// handlers, the same way the bindings table is bypassed for printable
/// characters in any text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Quit the application. Default: q (outside text capture), Ctrl+C (always).
    Quit,
    /// Context-dependent activation: submit the typed query, select the
    /// focused suggestion chip, or toggle the selected match's detail.
    /// Default: Enter (Space also toggles match detail).
    Activate,
    /// Cycle focus between the input bar and the suggestion row. Default: Tab.
    CycleFocus,
    /// Dismiss the visible notice, or clear the typed input when no notice
    /// is showing. Default: Esc.
    Dismiss,
    /// Ask why the current matches taste similar. Default: w.
    RequestExplanation,
    /// Clear the session back to the initial prompt ("try another
    /// ingredient"). Default: t.
    ResetSession,
    /// Move down: next match while results are shown, else scroll the
    /// transcript one line. Default: Down.
    NextItem,
    /// Move up: previous match while results are shown, else scroll the
    /// transcript one line. Default: Up.
    PrevItem,
    /// Focus the next suggestion chip. Default: Right (while the suggestion
    /// row has focus).
    NextChip,
    /// Focus the previous suggestion chip. Default: Left (while the
    /// suggestion row has focus).
    PrevChip,
    /// Scroll the transcript up by a page. Default: Page Up.
    PageUp,
    /// Scroll the transcript down by a page. Default: Page Down.
    PageDown,
    /// Toggle the help overlay. Default: ?.
    ToggleHelp,
}
