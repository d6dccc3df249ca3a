//! Text embedding against any supported provider.

pub mod providers;

use std::time::Duration;

use secrecy::SecretString;

use crate::config::HttpConfig;
use crate::error::LlmError;
use crate::http::HttpTransport;
use crate::retry::with_retry;
use crate::types::{EmbeddingRequest, EmbeddingResponse};

use self::providers::EmbeddingProvider;

/// Caller-facing embedding client.
///
/// Same construction and retry model as
/// [`CompletionClient`](crate::completion::CompletionClient); a shared
/// instance is safe for concurrent use.
pub struct EmbeddingClient {
    provider: Box<dyn EmbeddingProvider>,
    transport: HttpTransport,
    retry_count: u32,
}

impl std::fmt::Debug for EmbeddingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingClient")
            .field("provider", &self.provider.provider_id())
            .field("transport", &self.transport)
            .field("retry_count", &self.retry_count)
            .finish()
    }
}

impl EmbeddingClient {
    /// Start building a client.
    pub fn builder() -> EmbeddingClientBuilder {
        EmbeddingClientBuilder::default()
    }

    /// Build a client with default timeouts and retry budget.
    pub fn new(
        api_key: impl Into<String>,
        provider: impl Into<String>,
    ) -> Result<Self, LlmError> {
        Self::builder().api_key(api_key).provider(provider).build()
    }

    /// Embed a piece of text and return the normalized vector plus token
    /// usage.
    pub fn post_embedding(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, LlmError> {
        tracing::debug!(
            provider = self.provider.provider_id(),
            model = %request.model_name,
            "dispatching embedding request"
        );
        with_retry(self.retry_count, || {
            let url = self.provider.url();
            let headers = self.provider.headers()?;
            let body = self.provider.build_request(request);

            let response = self.transport.post_json(&url, headers, &body)?;
            Ok(EmbeddingResponse {
                embedding: self.provider.extract_embedding(&response),
                tokens: self.provider.extract_tokens(&response),
            })
        })
    }
}

/// Builder for [`EmbeddingClient`].
#[derive(Default)]
pub struct EmbeddingClientBuilder {
    api_key: Option<String>,
    provider: Option<String>,
    base_url: Option<String>,
    http: HttpConfig,
}

impl EmbeddingClientBuilder {
    /// API key for the selected provider. Required, non-empty.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Provider identifier (`openai`), case-insensitive. Required.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Override the provider's base URL (mainly for testing against a mock
    /// server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Connect/open timeout per attempt.
    pub fn open_timeout(mut self, timeout: Duration) -> Self {
        self.http.open_timeout = timeout;
        self
    }

    /// Read timeout per attempt.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http.read_timeout = timeout;
        self
    }

    /// Total attempt budget; 1 means a single attempt with no retry.
    pub fn retry_count(mut self, retry_count: u32) -> Self {
        self.http.retry_count = retry_count;
        self
    }

    /// Resolve the adapter and build the client.
    pub fn build(self) -> Result<EmbeddingClient, LlmError> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| LlmError::ConfigurationError("API key is required".to_string()))?;
        let provider_id = self
            .provider
            .ok_or_else(|| LlmError::ConfigurationError("Provider is required".to_string()))?;
        self.http.validate()?;

        let provider =
            providers::create_provider(&provider_id, SecretString::from(api_key), self.base_url)?;
        let transport = HttpTransport::new(&self.http)?;

        Ok(EmbeddingClient {
            provider,
            transport,
            retry_count: self.http.retry_count,
        })
    }
}
