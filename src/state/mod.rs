//! Session and UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI or
//! network. Effects are returned as [`ApiCommand`] values for the shell to
//! execute.

pub mod app_state;
pub mod event;
pub mod explain_flow;
pub mod input_handler;
pub mod search_flow;
pub mod session;

// Re-export for convenience
pub use app_state::{AppState, Focus};
pub use event::{ApiCommand, SessionEvent};
pub use session::{SessionState, ViewPhase};
