//! Tests for query input editing.

use super::*;

fn app() -> AppState {
    AppState::new(vec!["Miso".to_string(), "Garlic".to_string()])
}

#[test]
fn chars_append_at_end() {
    let mut app = app();
    for ch in "Miso".chars() {
        handle_char_input(&mut app, ch);
    }
    assert_eq!(app.session.query, "Miso");
    assert_eq!(app.input_cursor, 4);
}

#[test]
fn char_inserts_at_cursor_position() {
    let mut app = app();
    for ch in "Mso".chars() {
        handle_char_input(&mut app, ch);
    }
    app.input_cursor = 1;
    handle_char_input(&mut app, 'i');
    assert_eq!(app.session.query, "Miso");
    assert_eq!(app.input_cursor, 2);
}

#[test]
fn multibyte_chars_keep_cursor_on_char_boundaries() {
    let mut app = app();
    for ch in "crème".chars() {
        handle_char_input(&mut app, ch);
    }
    assert_eq!(app.session.query, "crème");
    assert_eq!(app.input_cursor, 5);

    handle_backspace(&mut app);
    handle_backspace(&mut app);
    assert_eq!(app.session.query, "crè");
    assert_eq!(app.input_cursor, 3);
}

#[test]
fn backspace_removes_before_cursor() {
    let mut app = app();
    for ch in "Kale".chars() {
        handle_char_input(&mut app, ch);
    }
    app.input_cursor = 2;
    handle_backspace(&mut app);
    assert_eq!(app.session.query, "Kle");
    assert_eq!(app.input_cursor, 1);
}

#[test]
fn backspace_at_start_is_noop() {
    let mut app = app();
    handle_char_input(&mut app, 'K');
    app.input_cursor = 0;
    handle_backspace(&mut app);
    assert_eq!(app.session.query, "K");
    assert_eq!(app.input_cursor, 0);
}

#[test]
fn delete_removes_under_cursor() {
    let mut app = app();
    for ch in "Kale".chars() {
        handle_char_input(&mut app, ch);
    }
    app.input_cursor = 1;
    handle_delete(&mut app);
    assert_eq!(app.session.query, "Kle");
    assert_eq!(app.input_cursor, 1);
}

#[test]
fn delete_at_end_is_noop() {
    let mut app = app();
    handle_char_input(&mut app, 'K');
    handle_delete(&mut app);
    assert_eq!(app.session.query, "K");
}

#[test]
fn cursor_moves_clamp_to_text_bounds() {
    let mut app = app();
    for ch in "Soy".chars() {
        handle_char_input(&mut app, ch);
    }

    handle_cursor_right(&mut app);
    assert_eq!(app.input_cursor, 3, "Right at end stays at end");

    handle_cursor_home(&mut app);
    assert_eq!(app.input_cursor, 0);
    handle_cursor_left(&mut app);
    assert_eq!(app.input_cursor, 0, "Left at start stays at start");

    handle_cursor_end(&mut app);
    assert_eq!(app.input_cursor, 3);
}

#[test]
fn clear_empties_text_and_cursor() {
    let mut app = app();
    for ch in "Kombu".chars() {
        handle_char_input(&mut app, ch);
    }
    handle_clear_input(&mut app);
    assert_eq!(app.session.query, "");
    assert_eq!(app.input_cursor, 0);
}
