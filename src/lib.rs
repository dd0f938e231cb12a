//! cousins
//!
//! Terminal client for exploring ingredient flavor similarity: type an
//! ingredient, get its "chemical cousins" from a remote similarity
//! service, and optionally ask why they taste alike.
//!
//! The crate follows a pure-core / impure-shell split: `model` and
//! `state` are pure data and transitions, `api` and `view` hold the HTTP
//! and terminal I/O, and `config`/`logging` are the usual binary plumbing.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
