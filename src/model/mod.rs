//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors. The wire
//! representation of the search service lives here too, since the JSON
//! bodies map one-to-one onto the domain values.

pub mod error;
pub mod ingredient;
pub mod key_action;

// Re-export for convenience
pub use error::AppError;
pub use ingredient::{IngredientQuery, SearchMatch, SearchResult};
pub use key_action::KeyAction;
