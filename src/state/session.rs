//! Session state for the search conversation.
//!
//! `SessionState` is the single source of truth for the chat-like search
//! flow: what was asked, what is in flight, what came back. All transitions
//! are pure and run through [`SessionState::apply`]; network calls are
//! requested as [`ApiCommand`](crate::state::ApiCommand) values and executed
//! elsewhere, with their resolutions fed back in as further events.

use crate::model::{IngredientQuery, SearchResult};
use crate::state::event::{ApiCommand, SessionEvent};
use crate::state::{explain_flow, search_flow};

// ===== SessionState =====

/// All mutable state of one search session. Pure data, no side effects.
///
/// # State Machine
///
/// The session moves through derived phases (see [`ViewPhase`]); none are
/// stored. Idle is initial; none are terminal. Every phase can return to
/// Searching via a new submission, and Explained/Errored can return to Idle
/// via reset.
///
/// A transient notice (the user-facing error line) is orthogonal to the
/// phase: it can overlay any of them and has its own dismissal event.
///
/// # Staleness
///
/// Responses arrive asynchronously and out of order. Every outgoing request
/// is tagged with the `generation` current at issue time; resolution events
/// echo the tag and are discarded wholesale when it no longer matches.
/// `generation` only ever increases (on every accepted submission and on
/// reset), so a superseded request can never overwrite newer state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current text-input value, mutable by typing.
    pub query: String,
    /// The last submitted query. Distinct from `query`: the input may be
    /// edited after submission.
    pub current_query: Option<IngredientQuery>,
    /// True while a search request is outstanding.
    pub loading: bool,
    /// True while an explanation request is outstanding.
    pub explain_loading: bool,
    /// Last successful search result, if any.
    pub result: Option<SearchResult>,
    /// Last successful explanation text, if any. Never present without
    /// `result`.
    pub explanation: Option<String>,
    /// At most one pending user-facing error message.
    pub transient_error: Option<String>,
    /// Monotonic request tag. Private so it can only move forward.
    generation: u64,
}

/// Derived presentation phase of a [`SessionState`].
///
/// Not stored; recomputed from the state bag on demand. The transient
/// notice is deliberately absent here, since it overlays any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing submitted yet (or session was reset): prompt and suggestions.
    Idle,
    /// A search is in flight.
    Searching,
    /// A result is displayed, no explanation yet.
    Results,
    /// An explanation is in flight below the result.
    Explaining,
    /// Result plus explanation are displayed.
    Explained,
}

impl SessionState {
    /// Fresh session: all fields empty/false, generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning the API command it requires, if any.
    ///
    /// This is the only transition entry point. Unknown-tag resolutions,
    /// guarded no-ops (empty submission, explain without matches) and
    /// dismissals all pass through here so the whole contract is testable
    /// without any I/O.
    pub fn apply(&mut self, event: SessionEvent) -> Option<ApiCommand> {
        match event {
            SessionEvent::Submit(text) => search_flow::handle_submit(self, &text),
            SessionEvent::SearchResolved { generation, result } => {
                search_flow::handle_search_resolved(self, generation, result);
                None
            }
            SessionEvent::SearchFailed { generation, error } => {
                search_flow::handle_search_failed(self, generation, &error);
                None
            }
            SessionEvent::RequestExplanation => explain_flow::handle_request_explanation(self),
            SessionEvent::ExplainResolved {
                generation,
                explanation,
            } => {
                explain_flow::handle_explain_resolved(self, generation, explanation);
                None
            }
            SessionEvent::ExplainFailed { generation } => {
                explain_flow::handle_explain_failed(self, generation);
                None
            }
            SessionEvent::DismissError => {
                self.dismiss_error();
                None
            }
            SessionEvent::Reset => {
                self.reset();
                None
            }
        }
    }

    // ===== Derived view state =====

    /// The derived presentation phase.
    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Searching
        } else if self.explain_loading {
            ViewPhase::Explaining
        } else if self.explanation.is_some() {
            ViewPhase::Explained
        } else if self.result.is_some() {
            ViewPhase::Results
        } else {
            ViewPhase::Idle
        }
    }

    /// Whether the input affordance is shown.
    ///
    /// Shown iff no search is in flight and no result is displayed. A
    /// transient error after a failed search satisfies this on its own,
    /// which is how the input reappears for a retry.
    pub fn shows_input(&self) -> bool {
        !self.loading && self.result.is_none()
    }

    /// Whether the "why do they taste similar" affordance is shown.
    pub fn offers_explain(&self) -> bool {
        !self.explain_loading
            && self.explanation.is_none()
            && self.result.as_ref().is_some_and(SearchResult::has_matches)
    }

    /// Current request tag.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a resolution tagged `generation` is still current.
    pub fn accepts_generation(&self, generation: u64) -> bool {
        self.generation == generation
    }

    // ===== Small transitions =====

    /// Advances the request tag, invalidating every in-flight request.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Clears the session back to Idle.
    ///
    /// Drops input text, submitted query, result and explanation, and stops
    /// tracking in-flight work by advancing the generation. A pending
    /// transient error is left in place; it has its own dismissal.
    pub fn reset(&mut self) {
        self.query.clear();
        self.current_query = None;
        self.result = None;
        self.explanation = None;
        self.loading = false;
        self.explain_loading = false;
        self.next_generation();
    }

    /// Clears the transient error, touching nothing else.
    pub fn dismiss_error(&mut self) {
        self.transient_error = None;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
