//! Application state and transitions.
//!
//! `AppState` is the root state type: the session state machine plus the
//! UI-only state around it (focus, cursors, expansion, scroll). All
//! transitions are pure functions; network effects are returned as
//! commands, never performed here.

use std::collections::HashSet;

use crate::state::event::{ApiCommand, SessionEvent};
use crate::state::{input_handler, SessionState};

// ===== Focus =====

/// Which affordance has keyboard focus while the input is shown.
///
/// Only meaningful in phases that show the input bar; once results are
/// displayed the input and chips disappear and match navigation takes
/// over without a focus notion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text input bar captures typing.
    #[default]
    Input,
    /// The suggestion chip row captures arrows and Enter.
    Suggestions,
}

// ===== AppState =====

/// Root application state. Pure data, no side effects.
///
/// The `session` field is the domain contract (what was asked, what came
/// back); everything else is presentation state layered on top. UI state
/// is re-normalized after every session transition so it can never point
/// at data that is no longer there (a match cursor without a result, a
/// cursor past the end of the input).
#[derive(Debug, Clone)]
pub struct AppState {
    /// The search session state machine.
    pub session: SessionState,
    /// Suggestion chip labels, in display order.
    pub suggestions: Vec<String>,
    /// Keyboard focus while the input bar is shown.
    pub focus: Focus,
    /// Selected suggestion chip index.
    pub suggestion_cursor: usize,
    /// Char index of the edit cursor within `session.query`.
    pub input_cursor: usize,
    /// Selected match index within the current result, if any.
    pub match_cursor: Option<usize>,
    /// Ids of matches expanded to show full detail.
    pub expanded: HashSet<String>,
    /// Transcript scroll offset in lines up from the bottom. Zero sticks
    /// to the newest content, chat style.
    pub transcript_scroll: usize,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Set when the user asked to quit; the event loop exits on seeing it.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state with the given suggestion labels.
    pub fn new(suggestions: Vec<String>) -> Self {
        Self {
            session: SessionState::new(),
            suggestions,
            focus: Focus::Input,
            suggestion_cursor: 0,
            input_cursor: 0,
            match_cursor: None,
            expanded: HashSet::new(),
            transcript_scroll: 0,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Applies a session event and re-normalizes the UI state around it.
    ///
    /// Returns the API command the transition requires, if any. This is
    /// the only mutation path for `session` so every entry point gets the
    /// same normalization.
    pub fn apply_event(&mut self, event: SessionEvent) -> Option<ApiCommand> {
        let command = self.session.apply(event);
        self.normalize();
        command
    }

    /// Clamps UI state to whatever the session now holds.
    fn normalize(&mut self) {
        match self.session.result.as_ref() {
            None => {
                self.match_cursor = None;
                self.expanded.clear();
            }
            Some(result) if result.matches.is_empty() => {
                self.match_cursor = None;
            }
            Some(result) => {
                let last = result.matches.len() - 1;
                self.match_cursor = Some(self.match_cursor.unwrap_or(0).min(last));
            }
        }
        let input_len = self.session.query.chars().count();
        self.input_cursor = self.input_cursor.min(input_len);
        if !self.suggestions.is_empty() {
            self.suggestion_cursor = self.suggestion_cursor.min(self.suggestions.len() - 1);
        }
        if self.session.loading {
            self.transcript_scroll = 0;
        }
        if !self.session.shows_input() {
            self.focus = Focus::Input;
        }
    }

    // ===== Focus and suggestion navigation =====

    /// Toggles focus between the input bar and the suggestion row.
    ///
    /// No-op when the input is not shown or there are no suggestions.
    pub fn cycle_focus(&mut self) {
        if !self.session.shows_input() || self.suggestions.is_empty() {
            return;
        }
        self.focus = match self.focus {
            Focus::Input => Focus::Suggestions,
            Focus::Suggestions => Focus::Input,
        };
    }

    /// Moves the chip selection right, wrapping at the end.
    pub fn next_chip(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.suggestion_cursor = (self.suggestion_cursor + 1) % self.suggestions.len();
    }

    /// Moves the chip selection left, wrapping at the start.
    pub fn prev_chip(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.suggestion_cursor = self
            .suggestion_cursor
            .checked_sub(1)
            .unwrap_or(self.suggestions.len() - 1);
    }

    /// The submission for the selected chip, unless selection is disabled.
    ///
    /// Selection is ignored, not queued, while a search is loading.
    pub fn select_suggestion(&self) -> Option<SessionEvent> {
        if self.session.loading {
            return None;
        }
        self.suggestions
            .get(self.suggestion_cursor)
            .map(|text| SessionEvent::Submit(text.clone()))
    }

    /// The submission for a specific chip index (mouse path), with the
    /// same loading guard as keyboard selection.
    pub fn select_suggestion_at(&self, index: usize) -> Option<SessionEvent> {
        if self.session.loading {
            return None;
        }
        self.suggestions
            .get(index)
            .map(|text| SessionEvent::Submit(text.clone()))
    }

    // ===== Match navigation =====

    /// Selects the next match, clamping at the last.
    pub fn next_match(&mut self) {
        let Some(result) = self.session.result.as_ref() else {
            return;
        };
        if result.matches.is_empty() {
            return;
        }
        let last = result.matches.len() - 1;
        self.match_cursor = Some(match self.match_cursor {
            Some(current) => (current + 1).min(last),
            None => 0,
        });
    }

    /// Selects the previous match, clamping at the first.
    pub fn prev_match(&mut self) {
        if self.session.result.is_none() {
            return;
        }
        self.match_cursor = self.match_cursor.map(|c| c.saturating_sub(1));
    }

    /// Expands or collapses the selected match's detail.
    pub fn toggle_selected_detail(&mut self) {
        let id = self
            .match_cursor
            .and_then(|idx| self.session.result.as_ref()?.matches.get(idx))
            .map(|m| m.id.clone());
        if let Some(id) = id {
            if !self.expanded.remove(&id) {
                self.expanded.insert(id);
            }
        }
    }

    /// Whether the match with this id is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    // ===== Transcript scrolling =====

    /// Scrolls the transcript up (towards older content) by `lines`.
    ///
    /// The ceiling depends on rendered heights, so the view clamps after
    /// measuring via [`AppState::clamp_scroll`].
    pub fn scroll_up(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_add(lines);
    }

    /// Scrolls the transcript down (towards newest content) by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_sub(lines);
    }

    /// Clamps the scroll offset to the measured overflow.
    pub fn clamp_scroll(&mut self, max: usize) {
        self.transcript_scroll = self.transcript_scroll.min(max);
    }

    // ===== Application =====

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Marks the application for exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the input bar currently captures printable keys.
    pub fn input_captures_keys(&self) -> bool {
        self.session.shows_input() && self.focus == Focus::Input && !self.help_visible
    }

    /// Clears typed input text (Esc while editing).
    pub fn clear_input(&mut self) {
        input_handler::handle_clear_input(self);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
