//! Help overlay listing keyboard shortcuts.
//!
//! Centered modal, toggled with '?', dismissed with Esc, '?', or q.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::view::Palette;

const POPUP_WIDTH_PERCENT: u16 = 60;
const POPUP_HEIGHT_PERCENT: u16 = 70;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        popup_width,
        popup_height,
    )
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let heading = palette.accent.add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let mut group = |title: &str, entries: &[(&str, &str)]| {
        lines.push(Line::from(Span::styled(title.to_string(), heading)));
        for (key, what) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), palette.accent),
                Span::raw(what.to_string()),
            ]));
        }
        lines.push(Line::raw(""));
    };

    group(
        "While typing",
        &[
            ("Enter", "Search the typed ingredient"),
            ("Tab", "Switch to the suggestion chips"),
            ("Esc", "Dismiss the notice, or clear the input"),
            ("←/→ Home End", "Move the cursor"),
        ],
    );
    group(
        "Suggestion chips",
        &[
            ("←/→ or h/l", "Pick a chip"),
            ("Enter", "Search the picked chip"),
            ("Tab", "Back to typing"),
        ],
    );
    group(
        "Results",
        &[
            ("↑/↓ or k/j", "Select a match"),
            ("Enter/Space", "Expand or collapse the match detail"),
            ("w", "Ask why the matches taste similar"),
            ("t", "Try another ingredient (reset)"),
        ],
    );
    group(
        "Anywhere",
        &[
            ("PgUp/PgDn", "Scroll the transcript"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    );

    lines
}
