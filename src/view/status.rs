//! Status bar with phase-dependent key hints.

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Focus, ViewPhase};
use crate::view::Palette;

/// The hint line for the current phase. Pure, for testability.
pub fn status_hints(app: &AppState) -> String {
    match app.session.phase() {
        ViewPhase::Idle => {
            if app.focus == Focus::Suggestions {
                "←/→ pick a chip · Enter search it · Tab type instead · ? help · q quit".to_string()
            } else {
                "Enter search · Tab suggestions · ? help · Ctrl+C quit".to_string()
            }
        }
        ViewPhase::Searching => "searching… · Ctrl+C quit".to_string(),
        ViewPhase::Results => {
            "↑/↓ select · Enter details · w why similar · t try another · q quit".to_string()
        }
        ViewPhase::Explaining => "thinking… · q quit".to_string(),
        ViewPhase::Explained => "t try another · ↑/↓ select · Enter details · q quit".to_string(),
    }
}

/// Renders the status bar.
pub fn render_status(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let hints = format!(" {}", status_hints(app));
    frame.render_widget(Paragraph::new(Span::styled(hints, palette.muted)), area);
}
