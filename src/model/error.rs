//! Application-level error taxonomy.
//!
//! This module defines the top-level [`AppError`] composed from the
//! module-local error types via `thiserror` and `From` conversions. Remote
//! API failures (`api::ApiError`) deliberately do NOT appear here: they
//! never propagate past the session controller, which maps them to
//! user-facing notice text instead (see `state::search_flow`).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - unified failure type for startup and the event loop
//!   - `ConfigError` - config file discovery/parse/validation failures
//!   - `LoggingError` - log file setup and subscriber installation failures
//!   - `reqwest::Error` - HTTP client construction failure at startup
//!   - `std::io::Error` - terminal setup, draw, and restore failures
//!
//! # Recovery Behavior
//!
//! All `AppError` cases are fatal: they abort startup (or tear down the
//! TUI) with a message on stderr and a non-zero exit code. Everything
//! recoverable in this application is session state, not an error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error encompassing all fatal failure modes.
///
/// Returned from `run` and the startup path in `main`. Module-local error
/// types convert via `From`, so call sites compose with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or tracing subscriber could not be set up.
    #[error("Logging setup error: {0}")]
    Logging(#[from] LoggingError),

    /// The HTTP client could not be constructed at startup.
    ///
    /// Request-level failures are not represented here; they surface as
    /// session notices via the controller's error mapping.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
