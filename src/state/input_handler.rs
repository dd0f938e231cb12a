//! Text editing transitions for the query input bar.
//!
//! The cursor is a char index into `session.query`, kept in `AppState`
//! because it is presentation state, not session state. All edits go
//! through these handlers so the cursor can never point past the text.

use crate::state::AppState;

/// Byte offset of the `char_idx`-th character, or the end of the string.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Inserts a character at the cursor and advances it.
pub fn handle_char_input(app: &mut AppState, ch: char) {
    let offset = byte_offset(&app.session.query, app.input_cursor);
    app.session.query.insert(offset, ch);
    app.input_cursor += 1;
}

/// Removes the character before the cursor, if any.
pub fn handle_backspace(app: &mut AppState) {
    if app.input_cursor == 0 {
        return;
    }
    app.input_cursor -= 1;
    let offset = byte_offset(&app.session.query, app.input_cursor);
    app.session.query.remove(offset);
}

/// Removes the character under the cursor, if any.
pub fn handle_delete(app: &mut AppState) {
    if app.input_cursor >= app.session.query.chars().count() {
        return;
    }
    let offset = byte_offset(&app.session.query, app.input_cursor);
    app.session.query.remove(offset);
}

/// Moves the cursor one character left, saturating at the start.
pub fn handle_cursor_left(app: &mut AppState) {
    app.input_cursor = app.input_cursor.saturating_sub(1);
}

/// Moves the cursor one character right, saturating at the end.
pub fn handle_cursor_right(app: &mut AppState) {
    let len = app.session.query.chars().count();
    app.input_cursor = (app.input_cursor + 1).min(len);
}

/// Jumps the cursor to the start of the input.
pub fn handle_cursor_home(app: &mut AppState) {
    app.input_cursor = 0;
}

/// Jumps the cursor to the end of the input.
pub fn handle_cursor_end(app: &mut AppState) {
    app.input_cursor = app.session.query.chars().count();
}

/// Clears the input text and resets the cursor.
pub fn handle_clear_input(app: &mut AppState) {
    app.session.query.clear();
    app.input_cursor = 0;
}

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
