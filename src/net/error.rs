//! Failure taxonomy for annotation fetches.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint call resolves to `Result<_, FetchError>` so panels can show
//! a distinct message per failure class instead of a stuck loading
//! placeholder. Panels stay responsible for wording; this module only
//! classifies.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the `net::api` fetch functions.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (transport failure, or a
    /// non-browser build where no transport exists).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("unexpected response status: {0}")]
    Status(u16),
    /// The response body did not decode into the expected payload shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// The payload decoded but carried nothing renderable (empty record
    /// list, absent group, empty sequence).
    #[error("no data for this feature")]
    EmptyResult,
}

impl FetchError {
    /// Stub error for builds without a browser transport.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }

    /// Whether this failure means "the feature has no such annotation"
    /// rather than "the request went wrong".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::EmptyResult)
    }
}
