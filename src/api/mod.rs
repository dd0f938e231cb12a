//! HTTP gateway to the flavor-similarity service.
//!
//! Two remote operations, one shared `reqwest::Client`, no state beyond
//! the base URL. Failures are collapsed into the three-kind [`ApiError`]
//! taxonomy here so the rest of the crate never sees transport types.

pub mod bridge;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{IngredientQuery, SearchMatch, SearchResult};

// ===== Error taxonomy =====

/// Failure kinds at the API boundary.
///
/// Everything the transport or the service can do wrong maps onto these
/// three kinds; the session controller turns them into notice copy.
/// Transport errors are stringified at the boundary so the type stays
/// `Clone` and flows through events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The ingredient is not in the similarity corpus (status 404).
    #[error("ingredient not found: {}", .message.as_deref().unwrap_or("no detail"))]
    NotFound {
        /// Server-provided detail, when the body carried one. Logged, not
        /// shown; the notice copy for this kind is fixed.
        message: Option<String>,
    },
    /// The service rate-limited the client (status 429).
    #[error("rate limited by the service")]
    RateLimited,
    /// Any other failure: transport error, malformed body, server error.
    #[error("unexpected failure: {}", .message.as_deref().unwrap_or("no detail"))]
    Unexpected {
        /// Best-effort human-readable detail for the notice.
        message: Option<String>,
    },
}

// ===== Wire shapes =====

/// Request body for the explain endpoint.
#[derive(Debug, Serialize)]
struct ExplainRequest<'a> {
    query: &'a str,
    matches: &'a [SearchMatch],
}

/// The slice of the explain response this client reads.
#[derive(Debug, Deserialize)]
struct ExplainResponse {
    explanation: String,
}

/// The slice of a non-2xx body this client mines for a message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Pulls a human message out of an error body, preferring `message` over
/// `error`, tolerating non-JSON bodies.
fn message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|m| !m.is_empty()))
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Unexpected {
        message: Some(err.without_url().to_string()),
    }
}

// ===== Client =====

/// Client for the two remote operations: search and explain.
///
/// Cheap to clone is not needed; one instance lives behind the bridge for
/// the whole session. No retries, no timeout beyond the transport
/// default; every call is at-most-once.
#[derive(Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Builds a client targeting `base_url` as the endpoint root.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying TLS/connection machinery cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cousins/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint root this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a similarity search for `query`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] on status 404.
    /// - [`ApiError::RateLimited`] on status 429.
    /// - [`ApiError::Unexpected`] on any other non-2xx status, transport
    ///   failure, or unparseable success body.
    pub async fn search(&self, query: &IngredientQuery) -> Result<SearchResult, ApiError> {
        let url = format!("{}/search", self.base_url);
        debug!(%url, query = query.as_str(), "GET search");
        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<SearchResult>().await.map_err(|err| {
                ApiError::Unexpected {
                    message: Some(format!("malformed search response: {}", err.without_url())),
                }
            });
        }

        let message = message_from_body(&response.text().await.unwrap_or_default());
        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            _ => ApiError::Unexpected {
                message: message.or_else(|| Some(format!("service returned {status}"))),
            },
        })
    }

    /// Requests an explanation for `matches`, as returned for `query`.
    ///
    /// The match set is forwarded exactly as received from search, not
    /// re-filtered.
    ///
    /// # Errors
    ///
    /// Always [`ApiError::Unexpected`]: explain failures are deliberately
    /// coarsened, the caller maps them all to one retry notice anyway.
    pub async fn explain(
        &self,
        query: &IngredientQuery,
        matches: &[SearchMatch],
    ) -> Result<String, ApiError> {
        let url = format!("{}/explain", self.base_url);
        debug!(%url, query = query.as_str(), matches = matches.len(), "POST explain");
        let response = self
            .http
            .post(&url)
            .json(&ExplainRequest {
                query: query.as_str(),
                matches,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = message_from_body(&response.text().await.unwrap_or_default());
            return Err(ApiError::Unexpected {
                message: message.or_else(|| Some(format!("service returned {status}"))),
            });
        }

        response
            .json::<ExplainResponse>()
            .await
            .map(|body| body.explanation)
            .map_err(|err| ApiError::Unexpected {
                message: Some(format!("malformed explain response: {}", err.without_url())),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_message_field_over_error() {
        let body = r#"{"error":"Not found","message":"Try a whole ingredient"}"#;
        assert_eq!(
            message_from_body(body),
            Some("Try a whole ingredient".to_string())
        );
    }

    #[test]
    fn message_falls_back_to_error_field() {
        let body = r#"{"error":"Not found","query":"Unobtainium"}"#;
        assert_eq!(message_from_body(body), Some("Not found".to_string()));
    }

    #[test]
    fn message_ignores_empty_and_non_json_bodies() {
        assert_eq!(message_from_body(""), None);
        assert_eq!(message_from_body("<html>oops</html>"), None);
        assert_eq!(message_from_body(r#"{"message":""}"#), None);
    }

    #[test]
    fn error_display_carries_detail() {
        let err = ApiError::Unexpected {
            message: Some("embedding service down".to_string()),
        };
        assert!(err.to_string().contains("embedding service down"));
        assert_eq!(
            ApiError::RateLimited.to_string(),
            "rate limited by the service"
        );
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = SearchClient::new("http://127.0.0.1:8787/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8787");
    }
}
