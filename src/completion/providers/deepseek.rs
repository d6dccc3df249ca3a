//! DeepSeek chat completion adapter.
//!
//! DeepSeek exposes an OpenAI-compatible API, so this adapter wraps the
//! OpenAI translator and only supplies its own endpoint.

use reqwest::header::HeaderMap;
use secrecy::SecretString;
use serde_json::Value;

use crate::error::LlmError;
use crate::types::{CompletionRequest, TokenUsage};

use super::{CompletionProvider, OpenAiProvider};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Adapter for the DeepSeek chat completions API.
pub struct DeepSeekProvider {
    inner: OpenAiProvider,
}

impl DeepSeekProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            inner: OpenAiProvider::new(api_key, Some(base_url)),
        }
    }
}

impl CompletionProvider for DeepSeekProvider {
    fn provider_id(&self) -> &'static str {
        "deepseek"
    }

    fn url(&self, model_name: &str) -> String {
        self.inner.url(model_name)
    }

    fn headers(&self) -> Result<HeaderMap, LlmError> {
        self.inner.headers()
    }

    fn build_request(&self, request: &CompletionRequest) -> Value {
        self.inner.build_request(request)
    }

    fn extract_answer(&self, response: &Value) -> Option<String> {
        self.inner.extract_answer(response)
    }

    fn extract_tokens(&self, response: &Value) -> TokenUsage {
        self.inner.extract_tokens(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    fn provider() -> DeepSeekProvider {
        DeepSeekProvider::new(SecretString::from("ds-test".to_string()), None)
    }

    #[test]
    fn only_the_endpoint_differs_from_openai() {
        assert_eq!(
            provider().url("deepseek-chat"),
            "https://api.deepseek.com/v1/chat/completions"
        );
    }

    #[test]
    fn translation_is_openai_shaped() {
        let provider = provider();
        let headers = provider.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer ds-test");

        let request = CompletionRequest::new("sys", "hi", "deepseek-chat");
        let body = provider.build_request(&request);
        assert_eq!(body["messages"][0]["role"], "system");

        let response = json!({
            "choices": [{ "message": { "content": "hey" } }],
            "usage": { "total_tokens": 5, "prompt_tokens": 4, "completion_tokens": 1 }
        });
        assert_eq!(provider.extract_answer(&response).as_deref(), Some("hey"));
        assert_eq!(provider.extract_tokens(&response).total_tokens, Some(5));
    }
}
