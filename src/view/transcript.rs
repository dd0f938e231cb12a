//! Chat transcript rendering.
//!
//! The transcript is rebuilt from `AppState` on every draw: asked-query
//! bubble, loading line, ranked match list, and explanation, newest at the
//! bottom. Lines are wrapped here (not by the widget) so the exact content
//! height is known and the scroll offset can be clamped precisely.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::SearchMatch;
use crate::state::AppState;
use crate::view::Palette;

/// Descriptions longer than this are cut off until the match is expanded.
pub const DESCRIPTION_TRUNCATE: usize = 80;

/// Shortens a description to the truncation threshold, appending an
/// ellipsis, matching how collapsed match pills display.
pub fn truncated_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_TRUNCATE {
        return description.to_string();
    }
    let short: String = description.chars().take(DESCRIPTION_TRUNCATE).collect();
    format!("{}…", short.trim_end())
}

/// A match's score as the percentage label shown next to its name.
///
/// No clamping: the service does not guarantee a 0..1 range and this
/// client does not editorialize.
pub fn score_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// hard so a long token cannot push the line past the viewport.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let current_width = current.width();
        let needed = if current.is_empty() {
            word.width()
        } else {
            current_width + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // Hard-split oversized words
        let mut rest = word;
        while rest.width() > width {
            let mut cut = 0;
            let mut acc = 0;
            for (offset, ch) in rest.char_indices() {
                let ch_width = ch.width().unwrap_or(0);
                if acc + ch_width > width {
                    break;
                }
                acc += ch_width;
                cut = offset + ch.len_utf8();
            }
            if cut == 0 {
                break;
            }
            lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        current = rest.to_string();
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Builds the full transcript as styled lines for the given width.
pub fn transcript_lines(app: &AppState, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let session = &app.session;

    // Opening bubble, always present
    for wrapped in wrap_text(
        "Hi! Name an ingredient and I'll find the ones it secretly tastes like.",
        width,
    ) {
        lines.push(Line::from(Span::raw(wrapped)));
    }

    let Some(current_query) = session.current_query.as_ref() else {
        return lines;
    };

    // The asked bubble, right-aligned like an outgoing chat message
    lines.push(Line::raw(""));
    let asked = current_query.as_str().to_string();
    let pad = width.saturating_sub(asked.width());
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(asked, palette.user),
    ]));

    if session.loading {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Finding your umami cousins…",
            palette.muted,
        )));
        return lines;
    }

    if let Some(result) = session.result.as_ref() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("You found {} umami cousins!", result.matches.len()),
            palette.accent.add_modifier(Modifier::BOLD),
        )));
        for (index, m) in result.matches.iter().enumerate() {
            let selected = app.match_cursor == Some(index);
            push_match(
                &mut lines,
                m,
                index,
                selected,
                app.is_expanded(&m.id),
                width,
                palette,
            );
        }

        if session.explain_loading {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Thinking…", palette.muted)));
        } else if session.offers_explain() {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("[w] ", palette.accent),
                Span::raw("Why do they taste similar?"),
            ]));
        }
    }

    if let Some(explanation) = session.explanation.as_ref() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Here's the science:",
            palette.accent.add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(explanation, width) {
            lines.push(Line::from(Span::raw(wrapped)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[t] ", palette.accent),
            Span::raw("Try another ingredient"),
        ]));
    }

    lines
}

/// One match entry: rank, name, score, then description (and compounds
/// once expanded).
fn push_match(
    lines: &mut Vec<Line<'static>>,
    m: &SearchMatch,
    index: usize,
    selected: bool,
    expanded: bool,
    width: usize,
    palette: &Palette,
) {
    let marker = if selected { "› " } else { "  " };
    let name_style = if selected {
        palette.selected
    } else {
        ratatui::style::Style::default()
    };
    lines.push(Line::from(vec![
        Span::styled(marker.to_string(), palette.accent),
        Span::styled(format!("{}. {}", index + 1, m.name), name_style),
        Span::raw("  "),
        Span::styled(score_percent(m.score), palette.accent),
    ]));

    let description = if expanded {
        m.description.clone()
    } else {
        truncated_description(&m.description)
    };
    let body_width = width.saturating_sub(4);
    for wrapped in wrap_text(&description, body_width) {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(wrapped, palette.muted),
        ]));
    }
    if expanded && !m.compounds.is_empty() {
        for wrapped in wrap_text(&format!("Compounds: {}", m.compounds), body_width) {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(wrapped, palette.muted),
            ]));
        }
    }
}

/// Renders the transcript band, pinned to the bottom chat-style.
///
/// Clamps the scroll offset to the measured overflow, so this needs
/// `&mut AppState`; nothing else is mutated.
pub fn render_transcript(frame: &mut Frame, area: Rect, app: &mut AppState, palette: &Palette) {
    let width = area.width.saturating_sub(2) as usize;
    let lines = transcript_lines(app, width, palette);

    let height = area.height as usize;
    let overflow = lines.len().saturating_sub(height);
    app.clamp_scroll(overflow);
    let skip = overflow - app.transcript_scroll.min(overflow);

    let visible: Vec<Line> = lines.into_iter().skip(skip).take(height).collect();
    let inner = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(visible), inner);
}
