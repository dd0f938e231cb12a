//! Events consumed by the session state machine and the commands it emits.

use crate::api::ApiError;
use crate::model::{IngredientQuery, SearchMatch, SearchResult};

/// One discrete input to the session state machine.
///
/// User intent (submit, explain, dismiss, reset) and network resolutions
/// share this type so every transition flows through the same
/// `SessionState::apply` seam. Resolution variants echo the generation tag
/// their request was issued with; mismatched tags are discarded.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The user submitted text, from the input bar or a suggestion chip.
    /// Whitespace-only text makes this a no-op.
    Submit(String),
    /// A search request came back successfully.
    SearchResolved {
        /// Tag the request was issued with.
        generation: u64,
        /// Parsed response body.
        result: SearchResult,
    },
    /// A search request failed.
    SearchFailed {
        /// Tag the request was issued with.
        generation: u64,
        /// Failure kind, mapped to notice copy by the controller.
        error: ApiError,
    },
    /// The user asked why the current matches are similar.
    RequestExplanation,
    /// An explanation request came back successfully.
    ExplainResolved {
        /// Tag the request was issued with.
        generation: u64,
        /// Free-form explanation text.
        explanation: String,
    },
    /// An explanation request failed. The kind is deliberately not carried;
    /// every explain failure maps to the same retry notice.
    ExplainFailed {
        /// Tag the request was issued with.
        generation: u64,
    },
    /// The user dismissed the transient error notice.
    DismissError,
    /// The user cleared the session back to the initial prompt.
    Reset,
}

/// A side effect requested by a transition, executed outside the state
/// machine.
///
/// Commands carry everything the HTTP layer needs, including the
/// generation tag to echo back in the resolution event.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Perform a similarity search.
    Search {
        /// Tag to echo in the resolution.
        generation: u64,
        /// Validated query text.
        query: IngredientQuery,
    },
    /// Request an explanation for an existing result.
    Explain {
        /// Tag to echo in the resolution.
        generation: u64,
        /// The query the result was produced for.
        query: IngredientQuery,
        /// The full match set as returned by search, not re-filtered.
        matches: Vec<SearchMatch>,
    },
}
