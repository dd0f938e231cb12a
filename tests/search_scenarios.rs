//! Acceptance tests: end-to-end search conversations over the pure
//! controller, with network resolutions played back as events.

use cousins::model::{SearchMatch, SearchResult};
use cousins::state::{ApiCommand, AppState, SessionEvent, ViewPhase};

fn suggestions() -> Vec<String> {
    vec!["Miso".to_string(), "Garlic".to_string()]
}

fn a_match(id: &str, name: &str, score: f64, description: &str, compounds: &str) -> SearchMatch {
    SearchMatch {
        id: id.to_string(),
        score,
        name: name.to_string(),
        description: description.to_string(),
        compounds: compounds.to_string(),
    }
}

#[test]
fn successful_search_shows_the_ranked_matches() {
    // A user asks about Miso and the service knows one cousin
    let mut app = AppState::new(suggestions());
    let command = app.apply_event(SessionEvent::Submit("Miso".to_string()));

    let Some(ApiCommand::Search { generation, query }) = command else {
        panic!("submit should issue a search command");
    };
    assert_eq!(query.as_str(), "Miso");
    assert!(app.session.loading);
    assert_eq!(app.session.phase(), ViewPhase::Searching);
    assert!(!app.session.shows_input());

    let result = SearchResult {
        query: "Miso".to_string(),
        matches: vec![a_match(
            "m1",
            "Parmesan cheese",
            0.92,
            "aged cheese with deep savory notes",
            "glutamate",
        )],
    };
    let follow_up = app.apply_event(SessionEvent::SearchResolved { generation, result });
    assert!(follow_up.is_none());

    assert_eq!(app.session.phase(), ViewPhase::Results);
    let shown = app.session.result.as_ref().unwrap();
    assert_eq!(shown.matches.len(), 1);
    assert_eq!(shown.matches[0].name, "Parmesan cheese");
    assert_eq!(shown.matches[0].score, 0.92);
    assert_eq!(app.match_cursor, Some(0));
}

#[test]
fn unknown_ingredient_surfaces_the_not_found_notice() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Unobtainium".to_string()));
    let generation = app.session.generation();

    app.apply_event(SessionEvent::SearchFailed {
        generation,
        error: cousins::api::ApiError::NotFound {
            message: Some("Not found".to_string()),
        },
    });

    assert_eq!(
        app.session.transient_error.as_deref(),
        Some("Oops! We don't have that one yet.")
    );
    assert!(app.session.result.is_none());
    // Input affordance reappears for a retry
    assert!(app.session.shows_input());
    // The asked bubble stays visible
    assert_eq!(
        app.session.current_query.as_ref().map(|q| q.as_str()),
        Some("Unobtainium")
    );
}

#[test]
fn explanation_chains_off_the_displayed_result() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Garlic".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchResolved {
        generation,
        result: SearchResult {
            query: "Garlic".to_string(),
            matches: vec![
                a_match("m1", "Onion", 0.91, "pungent allium", "allicin"),
                a_match("m2", "Leek", 0.85, "milder allium", ""),
                a_match("m3", "Chive", 0.80, "delicate allium", ""),
            ],
        },
    });
    assert!(app.session.offers_explain());

    let command = app.apply_event(SessionEvent::RequestExplanation);
    let Some(ApiCommand::Explain {
        generation,
        query,
        matches,
    }) = command
    else {
        panic!("explanation request should issue an explain command");
    };
    assert_eq!(query.as_str(), "Garlic");
    // The full match set is forwarded exactly as returned
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].id, "m1");
    assert_eq!(app.session.phase(), ViewPhase::Explaining);

    app.apply_event(SessionEvent::ExplainResolved {
        generation,
        explanation: "They all share sulfur compounds from the allium family.".to_string(),
    });

    assert_eq!(app.session.phase(), ViewPhase::Explained);
    assert!(app.session.explanation.is_some());
    // Ask-why affordance is gone once an explanation is displayed
    assert!(!app.session.offers_explain());
}

#[test]
fn late_response_for_a_superseded_query_is_discarded() {
    // Submit A, then B before A resolves; A's response lands last
    let mut app = AppState::new(suggestions());

    let Some(ApiCommand::Search {
        generation: generation_a,
        ..
    }) = app.apply_event(SessionEvent::Submit("A".to_string()))
    else {
        panic!("first submit should issue a search");
    };
    let Some(ApiCommand::Search {
        generation: generation_b,
        ..
    }) = app.apply_event(SessionEvent::Submit("B".to_string()))
    else {
        panic!("second submit should issue a search");
    };
    assert_ne!(generation_a, generation_b);

    app.apply_event(SessionEvent::SearchResolved {
        generation: generation_b,
        result: SearchResult {
            query: "B".to_string(),
            matches: vec![a_match("b1", "B cousin", 0.7, "fresh", "")],
        },
    });
    // A's slow response arrives after B's
    app.apply_event(SessionEvent::SearchResolved {
        generation: generation_a,
        result: SearchResult {
            query: "A".to_string(),
            matches: vec![a_match("a1", "A cousin", 0.9, "stale", "")],
        },
    });

    let shown = app.session.result.as_ref().unwrap();
    assert_eq!(shown.query, "B");
    assert_eq!(shown.matches[0].name, "B cousin");
    assert!(!app.session.loading);
}

#[test]
fn reset_after_a_full_conversation_returns_to_idle() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Garlic".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchResolved {
        generation,
        result: SearchResult {
            query: "Garlic".to_string(),
            matches: vec![a_match("m1", "Onion", 0.9, "allium", "")],
        },
    });
    app.apply_event(SessionEvent::RequestExplanation);
    app.apply_event(SessionEvent::ExplainResolved {
        generation,
        explanation: "Allium chemistry.".to_string(),
    });

    let command = app.apply_event(SessionEvent::Reset);
    assert!(command.is_none());

    assert_eq!(app.session.phase(), ViewPhase::Idle);
    assert_eq!(app.session.query, "");
    assert!(app.session.current_query.is_none());
    assert!(app.session.result.is_none());
    assert!(app.session.explanation.is_none());
    assert!(app.session.shows_input());
    assert_eq!(app.match_cursor, None);
}

#[test]
fn whitespace_only_submission_is_a_complete_no_op() {
    let mut app = AppState::new(suggestions());
    let before = format!("{:?}", app.session);

    let command = app.apply_event(SessionEvent::Submit("   \t ".to_string()));

    assert!(command.is_none());
    assert_eq!(format!("{:?}", app.session), before);
}

#[test]
fn new_submission_clears_result_and_explanation_together() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Garlic".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchResolved {
        generation,
        result: SearchResult {
            query: "Garlic".to_string(),
            matches: vec![a_match("m1", "Onion", 0.9, "allium", "")],
        },
    });
    app.apply_event(SessionEvent::RequestExplanation);
    app.apply_event(SessionEvent::ExplainResolved {
        generation,
        explanation: "Allium chemistry.".to_string(),
    });

    app.apply_event(SessionEvent::Submit("Kombu".to_string()));

    assert!(app.session.result.is_none());
    assert!(app.session.explanation.is_none());
    assert!(app.session.loading);
}

#[test]
fn explain_failure_restores_the_ask_why_affordance() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Kale".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchResolved {
        generation,
        result: SearchResult {
            query: "Kale".to_string(),
            matches: vec![a_match("m1", "Cabbage", 0.8, "brassica", "")],
        },
    });
    app.apply_event(SessionEvent::RequestExplanation);

    app.apply_event(SessionEvent::ExplainFailed { generation });

    assert_eq!(
        app.session.transient_error.as_deref(),
        Some("Couldn't load this time. Try again!")
    );
    assert!(app.session.explanation.is_none());
    assert!(app.session.offers_explain());
}

#[test]
fn dismissing_a_notice_touches_nothing_else() {
    let mut app = AppState::new(suggestions());
    app.apply_event(SessionEvent::Submit("Kale".to_string()));
    let generation = app.session.generation();
    app.apply_event(SessionEvent::SearchFailed {
        generation,
        error: cousins::api::ApiError::RateLimited,
    });
    assert!(app.session.transient_error.is_some());
    let query_before = app.session.query.clone();

    app.apply_event(SessionEvent::DismissError);

    assert!(app.session.transient_error.is_none());
    assert_eq!(app.session.query, query_before);
    assert!(app.session.result.is_none());
    assert!(app.session.explanation.is_none());
}
