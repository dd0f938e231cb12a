//! Full-frame render tests over the TestBackend.

use super::*;
use crate::model::{SearchMatch, SearchResult};
use ratatui::backend::TestBackend;

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

fn draw(app: &mut AppState) -> (String, RenderedAreas) {
    let mut terminal = terminal();
    let mut areas = RenderedAreas::default();
    terminal
        .draw(|frame| {
            areas = render_app(frame, app);
        })
        .unwrap();
    let text = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    (text, areas)
}

fn app() -> AppState {
    AppState::new(vec!["Miso".to_string(), "Kombu".to_string()])
}

fn resolve_search(app: &mut AppState, query: &str, names: &[&str]) {
    app.apply_event(SessionEvent::Submit(query.to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchResolved {
        generation,
        result: SearchResult {
            query: query.to_string(),
            matches: names
                .iter()
                .enumerate()
                .map(|(i, name)| SearchMatch {
                    id: format!("m{i}"),
                    score: 0.9 - i as f64 * 0.1,
                    name: name.to_string(),
                    description: "savory overlap".to_string(),
                    compounds: String::new(),
                })
                .collect(),
        },
    });
}

#[test]
fn idle_frame_shows_greeting_chips_and_input() {
    let mut app = app();
    let (text, areas) = draw(&mut app);
    assert!(text.contains("Name an ingredient"));
    assert!(text.contains("Miso"));
    assert!(text.contains("Kombu"));
    assert!(text.contains("Or type one…"));
    assert_eq!(areas.chips.len(), 2);
}

#[test]
fn loading_frame_hides_input_and_chips() {
    let mut app = app();
    app.apply_event(SessionEvent::Submit("Garlic".to_string()));
    let (text, areas) = draw(&mut app);
    assert!(text.contains("Finding your umami cousins…"));
    assert!(!text.contains("Or type one…"));
    assert!(areas.chips.is_empty());
}

#[test]
fn results_frame_lists_matches_without_input() {
    let mut app = app();
    resolve_search(&mut app, "Garlic", &["Onion", "Leek", "Chive"]);
    let (text, areas) = draw(&mut app);
    assert!(text.contains("You found 3 umami cousins!"));
    assert!(text.contains("Onion"));
    assert!(!text.contains("Or type one…"));
    assert!(areas.chips.is_empty());
}

#[test]
fn failed_search_frame_shows_notice_and_input_again() {
    let mut app = app();
    app.apply_event(SessionEvent::Submit("Unobtainium".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchFailed {
        generation,
        error: crate::api::ApiError::NotFound { message: None },
    });
    let (text, areas) = draw(&mut app);
    assert!(text.contains("Oops! We don't have that one yet."));
    assert!(text.contains("Or type one…"));
    assert!(!areas.chips.is_empty());
}

#[test]
fn help_overlay_draws_on_top() {
    let mut app = app();
    app.toggle_help();
    let (text, _) = draw(&mut app);
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app();
    resolve_search(&mut app, "Garlic", &["Onion"]);
    let mut terminal = Terminal::new(TestBackend::new(10, 7)).unwrap();
    let result = terminal.draw(|frame| {
        render_app(frame, &mut app);
    });
    assert!(result.is_ok());
}
