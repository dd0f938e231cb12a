//! Suggestion chip row.
//!
//! Renders the configured candidate ingredients as a single row of
//! selectable chips and records each chip's rect so mouse clicks can be
//! mapped back to an index. Chips that do not fit the width are simply not
//! drawn (and therefore not clickable).

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::view::Palette;

/// Horizontal gap between chips, in cells.
const CHIP_GAP: u16 = 1;

/// Renders the chip row, returning the rect of each drawn chip in display
/// order.
///
/// Chips are dimmed while a search is loading; selection of a dimmed chip
/// is already ignored at the state layer, this just makes the disablement
/// visible. The focused chip is highlighted only while the row has
/// keyboard focus.
pub fn render_chips(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) -> Vec<Rect> {
    let mut areas = Vec::new();
    let mut x = area.x + 1;
    let focused = app.focus == Focus::Suggestions;

    for (index, label) in app.suggestions.iter().enumerate() {
        let text = format!(" {label} ");
        let chip_width = text.width() as u16;
        if x + chip_width > area.x + area.width {
            break;
        }

        let mut style = if focused && index == app.suggestion_cursor {
            palette.chip_selected
        } else {
            palette.chip
        };
        if app.session.loading {
            style = style.add_modifier(Modifier::DIM);
        }

        let chip_area = Rect {
            x,
            y: area.y,
            width: chip_width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(text, style)), chip_area);
        areas.push(chip_area);
        x += chip_width + CHIP_GAP;
    }
    areas
}

/// Maps a click position to the chip under it, if any.
pub fn chip_at(chips: &[Rect], column: u16, row: u16) -> Option<usize> {
    chips.iter().position(|rect| {
        row == rect.y && column >= rect.x && column < rect.x + rect.width
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 4)).unwrap()
    }

    fn app(labels: &[&str]) -> AppState {
        AppState::new(labels.iter().map(|s| s.to_string()).collect())
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn chips_display_their_labels() {
        let mut terminal = terminal();
        let app = app(&["Miso", "Kombu"]);
        terminal
            .draw(|frame| {
                render_chips(frame, frame.area(), &app, &Palette::default());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Miso"));
        assert!(text.contains("Kombu"));
    }

    #[test]
    fn one_area_is_recorded_per_drawn_chip() {
        let mut terminal = terminal();
        let app = app(&["Miso", "Kombu", "Garlic"]);
        let mut recorded = Vec::new();
        terminal
            .draw(|frame| {
                recorded = render_chips(frame, frame.area(), &app, &Palette::default());
            })
            .unwrap();

        assert_eq!(recorded.len(), 3);
        // Left to right, non-overlapping
        assert!(recorded.windows(2).all(|w| w[0].x + w[0].width <= w[1].x));
    }

    #[test]
    fn chips_past_the_width_are_dropped() {
        let mut terminal = Terminal::new(TestBackend::new(14, 2)).unwrap();
        let app = app(&["Miso", "Parmesan cheese", "Garlic"]);
        let mut recorded = Vec::new();
        terminal
            .draw(|frame| {
                recorded = render_chips(frame, frame.area(), &app, &Palette::default());
            })
            .unwrap();

        assert!(recorded.len() < 3);
    }

    #[test]
    fn empty_suggestion_list_renders_nothing() {
        let mut terminal = terminal();
        let app = app(&[]);
        let mut recorded = Vec::new();
        terminal
            .draw(|frame| {
                recorded = render_chips(frame, frame.area(), &app, &Palette::default());
            })
            .unwrap();

        assert!(recorded.is_empty());
    }

    #[test]
    fn click_inside_a_chip_maps_to_its_index() {
        let chips = vec![
            Rect::new(1, 0, 6, 1),
            Rect::new(8, 0, 7, 1),
        ];
        assert_eq!(chip_at(&chips, 1, 0), Some(0));
        assert_eq!(chip_at(&chips, 6, 0), None); // gap
        assert_eq!(chip_at(&chips, 10, 0), Some(1));
        assert_eq!(chip_at(&chips, 10, 1), None); // wrong row
    }
}
