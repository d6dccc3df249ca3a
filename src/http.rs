//! Blocking HTTP transport shared by the operation clients.

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::config::HttpConfig;
use crate::error::LlmError;

/// Thin wrapper around [`reqwest::blocking::Client`] that normalizes every
/// failure mode into [`LlmError`].
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with the configured per-attempt timeouts.
    pub fn new(config: &HttpConfig) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.open_timeout)
            .timeout(config.read_timeout)
            .build()
            .map_err(|e| LlmError::HttpError(e.to_string()))?;
        Ok(Self { client })
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// Non-2xx statuses become [`LlmError::ApiError`] carrying the
    /// JSON-decoded body when it parses, the raw body text otherwise.
    pub fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &Value,
    ) -> Result<Value, LlmError> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<Value>(&text) {
                Ok(decoded) => decoded.to_string(),
                Err(_) => text,
            };
            return Err(LlmError::ApiError {
                code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| LlmError::ParseError(e.to_string()))
    }
}
