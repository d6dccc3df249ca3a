//! Embedding provider adapters and their registry.

mod openai;

pub use openai::OpenAiProvider;

use std::collections::HashMap;
use std::sync::OnceLock;

use reqwest::header::HeaderMap;
use secrecy::SecretString;
use serde_json::Value;

use crate::error::LlmError;
use crate::types::{EmbeddingRequest, TokenUsage};

/// Per-vendor translation between the unified embedding request/response
/// shape and the vendor's wire format. Same contract as the completion
/// family, with `extract_embedding` as the extraction target.
pub trait EmbeddingProvider: Send + Sync {
    /// Canonical identifier, e.g. `"openai"`.
    fn provider_id(&self) -> &'static str;

    /// Endpoint URL.
    fn url(&self) -> String;

    /// Vendor authentication headers.
    fn headers(&self) -> Result<HeaderMap, LlmError>;

    /// Build the vendor request body, with caller option params merged in
    /// last-writer-wins.
    fn build_request(&self, request: &EmbeddingRequest) -> Value;

    /// Pull the embedding vector out of a vendor response.
    fn extract_embedding(&self, response: &Value) -> Option<Vec<f32>>;

    /// Pull normalized token usage out of a vendor response.
    fn extract_tokens(&self, response: &Value) -> TokenUsage;
}

impl std::fmt::Debug for dyn EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProvider")
            .field("provider_id", &self.provider_id())
            .finish()
    }
}

type ProviderCtor = fn(SecretString, Option<String>) -> Box<dyn EmbeddingProvider>;

static REGISTRY: OnceLock<HashMap<&'static str, ProviderCtor>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ProviderCtor> {
    REGISTRY.get_or_init(|| {
        let mut providers: HashMap<&'static str, ProviderCtor> = HashMap::new();
        providers.insert("openai", |key, base| Box::new(OpenAiProvider::new(key, base)));
        providers
    })
}

/// Resolve an embedding adapter by provider identifier.
///
/// Lookup is case-insensitive; an identifier absent from the registry is a
/// construction-time [`LlmError::ConfigurationError`] naming the offending
/// identifier.
pub fn create_provider(
    provider_id: &str,
    api_key: SecretString,
    base_url: Option<String>,
) -> Result<Box<dyn EmbeddingProvider>, LlmError> {
    let canonical = provider_id.trim().to_ascii_lowercase();
    registry()
        .get(canonical.as_str())
        .map(|ctor| ctor(api_key, base_url))
        .ok_or_else(|| {
            LlmError::ConfigurationError(format!("Unknown embedding provider: {provider_id}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let provider = create_provider("OpenAI", key(), None).unwrap();
        assert_eq!(provider.provider_id(), "openai");
    }

    #[test]
    fn unknown_identifier_names_the_offender() {
        let error = create_provider("unsupported", key(), None).unwrap_err();
        assert!(error.is_configuration_error());
        assert!(error.to_string().contains("unsupported"));
    }
}
