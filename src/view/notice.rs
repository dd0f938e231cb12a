//! Transient error notice band.
//!
//! One line, one message, last-write-wins: the session state holds at most
//! one notice at a time, so there is no queue to render.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::view::Palette;

/// Renders the notice with its dismissal hint.
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {message}"),
            palette.notice.add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc to dismiss)", palette.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn notice_shows_message_and_dismiss_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| {
                render_notice(
                    frame,
                    frame.area(),
                    "Oops! We don't have that one yet.",
                    &Palette::default(),
                );
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Oops! We don't have that one yet."));
        assert!(text.contains("Esc to dismiss"));
    }
}
