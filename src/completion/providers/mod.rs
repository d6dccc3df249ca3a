//! Completion provider adapters and their registry.

mod anthropic;
mod deepseek;
mod google;
mod openai;

pub use anthropic::AnthropicProvider;
pub use deepseek::DeepSeekProvider;
pub use google::GoogleProvider;
pub use openai::OpenAiProvider;

use std::collections::HashMap;
use std::sync::OnceLock;

use reqwest::header::HeaderMap;
use secrecy::SecretString;
use serde_json::Value;

use crate::error::LlmError;
use crate::types::{CompletionRequest, TokenUsage};

/// Per-vendor translation between the unified completion request/response
/// shape and the vendor's wire format.
///
/// Implementations are stateless apart from the API key and base URL; they
/// own no mutable state across calls. Extraction methods must tolerate
/// missing or malformed fields by returning `None`, never by failing.
pub trait CompletionProvider: Send + Sync {
    /// Canonical identifier, e.g. `"openai"`.
    fn provider_id(&self) -> &'static str;

    /// Endpoint URL. Some vendors embed the model name in the URL; the
    /// others ignore the parameter.
    fn url(&self, model_name: &str) -> String;

    /// Vendor authentication headers.
    fn headers(&self) -> Result<HeaderMap, LlmError>;

    /// Build the vendor request body, with caller option params merged in
    /// last-writer-wins.
    fn build_request(&self, request: &CompletionRequest) -> Value;

    /// Pull the answer text out of a vendor response.
    fn extract_answer(&self, response: &Value) -> Option<String>;

    /// Pull normalized token usage out of a vendor response.
    fn extract_tokens(&self, response: &Value) -> TokenUsage;
}

impl std::fmt::Debug for dyn CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("provider_id", &self.provider_id())
            .finish()
    }
}

type ProviderCtor = fn(SecretString, Option<String>) -> Box<dyn CompletionProvider>;

static REGISTRY: OnceLock<HashMap<&'static str, ProviderCtor>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ProviderCtor> {
    REGISTRY.get_or_init(|| {
        let mut providers: HashMap<&'static str, ProviderCtor> = HashMap::new();
        providers.insert("openai", |key, base| Box::new(OpenAiProvider::new(key, base)));
        providers.insert("anthropic", |key, base| {
            Box::new(AnthropicProvider::new(key, base))
        });
        providers.insert("deepseek", |key, base| {
            Box::new(DeepSeekProvider::new(key, base))
        });
        providers.insert("google", |key, base| {
            Box::new(GoogleProvider::new(key, base))
        });
        providers
    })
}

/// Resolve a completion adapter by provider identifier.
///
/// Lookup is case-insensitive; an identifier absent from the registry is a
/// construction-time [`LlmError::ConfigurationError`] naming the offending
/// identifier.
pub fn create_provider(
    provider_id: &str,
    api_key: SecretString,
    base_url: Option<String>,
) -> Result<Box<dyn CompletionProvider>, LlmError> {
    let canonical = provider_id.trim().to_ascii_lowercase();
    registry()
        .get(canonical.as_str())
        .map(|ctor| ctor(api_key, base_url))
        .ok_or_else(|| {
            LlmError::ConfigurationError(format!("Unknown completion provider: {provider_id}"))
        })
}

/// Identifiers accepted by [`create_provider`].
pub fn provider_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = registry().keys().copied().collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    #[test]
    fn registry_holds_all_four_providers() {
        assert_eq!(
            provider_ids(),
            vec!["anthropic", "deepseek", "google", "openai"]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let provider = create_provider("OpenAI", key(), None).unwrap();
        assert_eq!(provider.provider_id(), "openai");

        let provider = create_provider("  ANTHROPIC  ", key(), None).unwrap();
        assert_eq!(provider.provider_id(), "anthropic");
    }

    #[test]
    fn unknown_identifier_names_the_offender() {
        let error = create_provider("unsupported", key(), None).unwrap_err();
        assert!(error.is_configuration_error());
        assert!(error.to_string().contains("unsupported"));
    }
}
