//! Submission and search-resolution transitions.
//!
//! The submit path is the only place a new generation is minted for a
//! search, and the resolution handlers are the only place search responses
//! touch state. Both ends check the generation tag so a superseded request
//! can never overwrite newer state.

use tracing::{debug, info};

use crate::api::ApiError;
use crate::model::{IngredientQuery, SearchResult};
use crate::state::event::ApiCommand;
use crate::state::SessionState;

/// Notice shown when the ingredient is not in the similarity corpus.
pub const NOT_FOUND_NOTICE: &str = "Oops! We don't have that one yet.";

/// Notice shown when the service rate-limits the client.
pub const RATE_LIMITED_NOTICE: &str = "Slow down. Try again in a minute.";

/// Fallback notice for failures that carry no usable message.
pub const UNEXPECTED_FALLBACK: &str = "Please try again.";

/// Handles a submission, starting a search when the text survives trimming.
///
/// # Behavior
///
/// - Whitespace-only text: no state change, no command (the guard lives in
///   `IngredientQuery::new`).
/// - Otherwise: the trimmed text becomes both the input value and the
///   submitted query; result, explanation and notice are cleared together
///   so nothing stale survives into the new search; a fresh generation is
///   minted and returned inside the search command.
pub fn handle_submit(state: &mut SessionState, text: &str) -> Option<ApiCommand> {
    let query = IngredientQuery::new(text)?;
    let generation = state.next_generation();
    info!(query = %query, generation, "submitting search");

    state.query = query.as_str().to_string();
    state.current_query = Some(query.clone());
    state.result = None;
    state.explanation = None;
    state.transient_error = None;
    state.explain_loading = false;
    state.loading = true;

    Some(ApiCommand::Search { generation, query })
}

/// Applies a successful search resolution, unless it is stale.
pub fn handle_search_resolved(state: &mut SessionState, generation: u64, result: SearchResult) {
    if !state.accepts_generation(generation) {
        debug!(
            generation,
            current = state.generation(),
            "discarding stale search result"
        );
        return;
    }
    info!(query = %result.query, matches = result.matches.len(), "search resolved");
    state.loading = false;
    state.result = Some(result);
}

/// Applies a failed search resolution, unless it is stale.
///
/// The failed query stays in `current_query` so the transcript keeps
/// showing what was asked; the notice plus the absent result are what
/// bring the input affordance back.
pub fn handle_search_failed(state: &mut SessionState, generation: u64, error: &ApiError) {
    if !state.accepts_generation(generation) {
        debug!(
            generation,
            current = state.generation(),
            "discarding stale search failure"
        );
        return;
    }
    info!(%error, "search failed");
    state.loading = false;
    state.transient_error = Some(notice_for(error));
}

/// Maps an API failure kind to its user-facing notice copy.
///
/// `NotFound` and `RateLimited` use fixed copy regardless of what the
/// server said; `Unexpected` passes the extracted message through when
/// there is one.
pub fn notice_for(error: &ApiError) -> String {
    match error {
        ApiError::NotFound { .. } => NOT_FOUND_NOTICE.to_string(),
        ApiError::RateLimited => RATE_LIMITED_NOTICE.to_string(),
        ApiError::Unexpected { message } => message
            .clone()
            .unwrap_or_else(|| UNEXPECTED_FALLBACK.to_string()),
    }
}

#[cfg(test)]
#[path = "search_flow_tests.rs"]
mod tests;
