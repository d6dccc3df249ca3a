//! OpenAI embeddings adapter.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::error::LlmError;
use crate::params::merge_option_params;
use crate::types::{EmbeddingRequest, TokenUsage};

use super::EmbeddingProvider;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Adapter for the OpenAI embeddings API.
pub struct OpenAiProvider {
    api_key: SecretString,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl EmbeddingProvider for OpenAiProvider {
    fn provider_id(&self) -> &'static str {
        "openai"
    }

    fn url(&self) -> String {
        format!("{}/embeddings", self.base_url)
    }

    fn headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", self.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|_| {
                LlmError::ConfigurationError(
                    "API key contains characters not valid in a header".to_string(),
                )
            })?,
        );
        Ok(headers)
    }

    fn build_request(&self, request: &EmbeddingRequest) -> Value {
        let base = json!({
            "model": request.model_name,
            "input": request.text,
        });
        merge_option_params(base, &request.option_params)
    }

    fn extract_embedding(&self, response: &Value) -> Option<Vec<f32>> {
        let data = response.get("data")?.as_array()?;
        let values = data.first()?.get("embedding")?.as_array()?;
        values
            .iter()
            .map(|v| v.as_f64().map(|f| f as f32))
            .collect()
    }

    fn extract_tokens(&self, response: &Value) -> TokenUsage {
        let usage = response.get("usage");
        TokenUsage {
            total_tokens: TokenUsage::count(usage, "total_tokens"),
            prompt_tokens: TokenUsage::count(usage, "prompt_tokens"),
            completion_tokens: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAiProvider {
        OpenAiProvider::new(SecretString::from("sk-test".to_string()), None)
    }

    #[test]
    fn url_is_the_fixed_embeddings_endpoint() {
        assert_eq!(provider().url(), "https://api.openai.com/v1/embeddings");
    }

    #[test]
    fn request_body_pairs_model_and_input() {
        let request = EmbeddingRequest::new("hello", "text-embedding-3-small");
        let body = provider().build_request(&request);
        assert_eq!(body["model"], "text-embedding-3-small");
        assert_eq!(body["input"], "hello");
    }

    #[test]
    fn option_params_pass_through() {
        let request = EmbeddingRequest::new("hello", "text-embedding-3-small")
            .with_option("dimensions", json!(256));
        let body = provider().build_request(&request);
        assert_eq!(body["dimensions"], json!(256));
    }

    #[test]
    fn extracts_embedding_and_tokens_from_documented_shape() {
        let response = json!({
            "data": [{ "embedding": [0.1, 0.2] }],
            "usage": { "prompt_tokens": 3, "total_tokens": 3 }
        });
        let provider = provider();

        assert_eq!(
            provider.extract_embedding(&response),
            Some(vec![0.1_f32, 0.2_f32])
        );
        assert_eq!(
            provider.extract_tokens(&response),
            TokenUsage {
                total_tokens: Some(3),
                prompt_tokens: Some(3),
                completion_tokens: None,
            }
        );
    }

    #[test]
    fn missing_or_empty_data_degrades_to_none() {
        let provider = provider();
        assert_eq!(provider.extract_embedding(&json!({})), None);
        assert_eq!(provider.extract_embedding(&json!({ "data": [] })), None);
    }
}
