//! Explanation request and resolution transitions.
//!
//! Explanations chain off a displayed result: the request carries the
//! result's own query and full match set, tagged with the current
//! generation. A new submission or a reset advances the generation, so an
//! in-flight explanation for replaced results lands as a stale no-op.

use tracing::{debug, info};

use crate::model::IngredientQuery;
use crate::state::event::ApiCommand;
use crate::state::SessionState;

/// Notice shown whenever an explanation request fails, regardless of cause.
pub const EXPLAIN_FAILED_NOTICE: &str = "Couldn't load this time. Try again!";

/// Starts an explanation request for the current result.
///
/// No-op (no state change, no command) when there is no result or the
/// result has no matches. Clearing `explanation` up front means a
/// re-request after a failure never shows leftover text while loading.
pub fn handle_request_explanation(state: &mut SessionState) -> Option<ApiCommand> {
    let (query, matches) = match state.result.as_ref() {
        Some(result) if result.has_matches() => {
            match IngredientQuery::new(result.query.as_str()) {
                Some(query) => (query, result.matches.clone()),
                None => return None,
            }
        }
        _ => return None,
    };
    let generation = state.generation();
    info!(query = %query, generation, "requesting explanation");

    state.explain_loading = true;
    state.explanation = None;

    Some(ApiCommand::Explain {
        generation,
        query,
        matches,
    })
}

/// Applies a successful explanation, unless it is stale.
pub fn handle_explain_resolved(state: &mut SessionState, generation: u64, explanation: String) {
    if !state.accepts_generation(generation) {
        debug!(
            generation,
            current = state.generation(),
            "discarding stale explanation"
        );
        return;
    }
    info!(chars = explanation.len(), "explanation resolved");
    state.explain_loading = false;
    state.explanation = Some(explanation);
}

/// Applies a failed explanation, unless it is stale.
///
/// Every failure kind collapses to the same retry notice; `explanation`
/// stays absent so the ask-why affordance comes back.
pub fn handle_explain_failed(state: &mut SessionState, generation: u64) {
    if !state.accepts_generation(generation) {
        debug!(
            generation,
            current = state.generation(),
            "discarding stale explanation failure"
        );
        return;
    }
    info!("explanation failed");
    state.explain_loading = false;
    state.transient_error = Some(EXPLAIN_FAILED_NOTICE.to_string());
}

#[cfg(test)]
#[path = "explain_flow_tests.rs"]
mod tests;
