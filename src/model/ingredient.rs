//! Core domain values for the flavor-similarity search flow.
//!
//! These types double as the wire representation: `SearchMatch` and
//! `SearchResult` deserialize directly from the search endpoint's JSON, and
//! `SearchMatch` serializes back out in the explain request body. Queries are
//! smart-constructed so that every submission path carries a trimmed,
//! non-empty string by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One ingredient returned by the similarity search.
///
/// Immutable once received. Ranking lives in the enclosing
/// [`SearchResult`]'s order, not in this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Opaque unique identifier, stable per ingredient.
    pub id: String,
    /// Similarity score, higher is more similar. The service does not
    /// guarantee a range; the presentation assumes roughly 0..1 and renders
    /// it as a percentage.
    pub score: f64,
    /// Display label for the ingredient.
    pub name: String,
    /// Free-text description. May exceed the display truncation threshold.
    pub description: String,
    /// Shared flavor compounds, free text. Absent or empty means "do not
    /// display"; deserialization defaults it to empty.
    #[serde(default)]
    pub compounds: String,
}

/// A successful search response: the server-echoed query and its matches.
///
/// Match order is authoritative (descending similarity as ranked by the
/// service) and must be preserved as received. Nothing in this crate
/// re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Trimmed echo of the submitted query text.
    pub query: String,
    /// Ranked matches, best first, possibly empty.
    pub matches: Vec<SearchMatch>,
}

impl SearchResult {
    /// True when the result carries at least one match.
    ///
    /// The explain affordance is only offered for non-empty results.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// A validated search query: trimmed and non-empty by construction.
///
/// NEVER constructed from raw text except through [`IngredientQuery::new`],
/// which is where the whitespace-only-submission no-op guard lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientQuery(String);

impl IngredientQuery {
    /// Smart constructor: trims the input and rejects empty results.
    ///
    /// # Arguments
    ///
    /// * `raw` - Untrimmed user input.
    ///
    /// # Returns
    ///
    /// `None` if the trimmed input is empty, `Some` otherwise.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed))
        }
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the query, yielding the trimmed text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for IngredientQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
