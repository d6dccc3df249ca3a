//! Error types for the unified LLM interface.

use thiserror::Error;

/// All failure modes surfaced by this crate.
///
/// Only [`LlmError::ConfigurationError`] can escape client construction;
/// every other variant is returned from an operation method after the retry
/// budget is spent, wrapped in [`LlmError::RetryExhausted`].
#[derive(Debug, Error)]
pub enum LlmError {
    /// Invalid client configuration (unknown provider, empty API key, ...).
    /// Never retried.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection, TLS or timeout failure below the HTTP layer.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-2xx response from the vendor API. The message carries the
    /// JSON-decoded body when it parses, the raw body text otherwise.
    #[error("API error (status {code}): {message}")]
    ApiError {
        /// HTTP status code.
        code: u16,
        /// Vendor-supplied error body.
        message: String,
    },

    /// Response body was not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// All attempts in the retry budget failed; wraps the last failure.
    #[error("Request failed after {retries} retries: {source}")]
    RetryExhausted {
        /// Total attempt budget that was spent.
        retries: u32,
        /// The final attempt's error.
        #[source]
        source: Box<LlmError>,
    },
}

impl LlmError {
    /// True for errors raised before any request was issued.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }
}
