//! Query input bar.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::view::Palette;

/// Placeholder shown while nothing has been typed.
const PLACEHOLDER: &str = "Or type one…";

/// Renders the bordered input bar and positions the terminal cursor.
///
/// The border picks up the accent color while the bar has keyboard focus,
/// so it is visible at a glance whether typing goes here or to the chips.
pub fn render_input(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let focused = app.focus == Focus::Input;
    let border_style = if focused { palette.accent } else { palette.muted };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" ingredient ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = if app.session.query.is_empty() {
        Span::styled(PLACEHOLDER, palette.muted)
    } else {
        Span::styled(app.session.query.clone(), Style::default())
    };
    frame.render_widget(Paragraph::new(content), inner);

    if focused {
        let cursor_x: usize = app
            .session
            .query
            .chars()
            .take(app.input_cursor)
            .collect::<String>()
            .width();
        let x = inner.x + (cursor_x as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
