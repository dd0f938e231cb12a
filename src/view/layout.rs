//! Vertical screen layout.
//!
//! Pure split logic: which horizontal bands exist depends only on two
//! derived flags (input shown, notice present), so the layout is trivially
//! testable without rendering anything.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::view::Palette;

/// The horizontal bands of one frame, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenAreas {
    /// One-line title bar.
    pub header: Rect,
    /// Chat transcript, takes all remaining height.
    pub transcript: Rect,
    /// One-line notice band, present only while an error is displayed.
    pub notice: Option<Rect>,
    /// One-line suggestion chip row, present while the input is shown.
    pub chips: Option<Rect>,
    /// Three-line bordered input bar, present while the input is shown.
    pub input: Option<Rect>,
    /// One-line status bar with key hints.
    pub status: Rect,
}

/// Splits the frame into bands.
///
/// The input bar and the chip row appear and disappear together: both are
/// tied to the session's `shows_input` derivation, mirroring how the web
/// layout swapped the form for a reset affordance once results landed.
pub fn split(area: Rect, shows_input: bool, has_notice: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(1), // header
        Constraint::Min(3),    // transcript
    ];
    if has_notice {
        constraints.push(Constraint::Length(1));
    }
    if shows_input {
        constraints.push(Constraint::Length(1)); // chips
        constraints.push(Constraint::Length(3)); // input
    }
    constraints.push(Constraint::Length(1)); // status

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 2;
    let mut take = || {
        let rect = chunks[next];
        next += 1;
        rect
    };

    let notice = if has_notice { Some(take()) } else { None };
    let (chips, input) = if shows_input {
        (Some(take()), Some(take()))
    } else {
        (None, None)
    };
    let status = take();

    ScreenAreas {
        header: chunks[0],
        transcript: chunks[1],
        notice,
        chips,
        input,
        status,
    }
}

/// Renders the one-line title bar.
pub fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(" cousins ", palette.accent.add_modifier(Modifier::BOLD)),
        Span::styled("find your ingredient's chemical cousins", palette.muted),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}
