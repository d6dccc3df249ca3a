//! Anthropic messages adapter.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::error::LlmError;
use crate::params::merge_option_params;
use crate::types::{CompletionRequest, TokenUsage};

use super::CompletionProvider;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Adapter for the Anthropic messages API.
pub struct AnthropicProvider {
    api_key: SecretString,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl CompletionProvider for AnthropicProvider {
    fn provider_id(&self) -> &'static str {
        "anthropic"
    }

    fn url(&self, _model_name: &str) -> String {
        format!("{}/messages", self.base_url)
    }

    fn headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(self.api_key.expose_secret()).map_err(|_| {
                LlmError::ConfigurationError(
                    "API key contains characters not valid in a header".to_string(),
                )
            })?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }

    fn build_request(&self, request: &CompletionRequest) -> Value {
        let base = json!({
            "model": request.model_name,
            "max_tokens": 1024,
            "temperature": 0.2,
            "system": request.system_prompt,
            "messages": [
                { "role": "user", "content": request.content },
            ],
        });
        merge_option_params(base, &request.option_params)
    }

    fn extract_answer(&self, response: &Value) -> Option<String> {
        response
            .pointer("/content/0/text")?
            .as_str()
            .map(str::to_owned)
    }

    fn extract_tokens(&self, response: &Value) -> TokenUsage {
        let usage = response.get("usage");
        let input = TokenUsage::count(usage, "input_tokens");
        let output = TokenUsage::count(usage, "output_tokens");
        TokenUsage {
            // Anthropic reports no total; missing counts are summed as 0.
            total_tokens: Some(input.unwrap_or(0) + output.unwrap_or(0)),
            prompt_tokens: input,
            completion_tokens: output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new(SecretString::from("ak-test".to_string()), None)
    }

    #[test]
    fn url_is_the_fixed_messages_endpoint() {
        assert_eq!(
            provider().url("claude-sonnet-4-0"),
            "https://api.anthropic.com/v1/messages"
        );
    }

    #[test]
    fn headers_carry_api_key_and_version() {
        let headers = provider().headers().unwrap();
        assert_eq!(headers["x-api-key"], "ak-test");
        assert_eq!(headers["anthropic-version"], "2023-06-01");
    }

    #[test]
    fn request_body_puts_system_prompt_in_its_own_field() {
        let request = CompletionRequest::new("sys prompt", "hello", "claude-sonnet-4-0");
        let body = provider().build_request(&request);

        assert_eq!(body["system"], "sys prompt");
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn option_params_override_base_fields() {
        let request = CompletionRequest::new("sys", "hi", "claude-sonnet-4-0")
            .with_option("max_tokens", json!(4096));
        let body = provider().build_request(&request);
        assert_eq!(body["max_tokens"], json!(4096));
    }

    #[test]
    fn total_tokens_is_the_sum_of_input_and_output() {
        let response = json!({
            "content": [{ "type": "text", "text": "hello there" }],
            "usage": { "input_tokens": 12, "output_tokens": 6 }
        });
        let provider = provider();

        assert_eq!(
            provider.extract_answer(&response).as_deref(),
            Some("hello there")
        );
        assert_eq!(
            provider.extract_tokens(&response),
            TokenUsage {
                total_tokens: Some(18),
                prompt_tokens: Some(12),
                completion_tokens: Some(6),
            }
        );
    }

    #[test]
    fn missing_counts_are_summed_as_zero() {
        let tokens = provider().extract_tokens(&json!({}));
        assert_eq!(tokens.total_tokens, Some(0));
        assert_eq!(tokens.prompt_tokens, None);
        assert_eq!(tokens.completion_tokens, None);

        let tokens = provider().extract_tokens(&json!({ "usage": { "input_tokens": 7 } }));
        assert_eq!(tokens.total_tokens, Some(7));
        assert_eq!(tokens.prompt_tokens, Some(7));
        assert_eq!(tokens.completion_tokens, None);
    }

    #[test]
    fn missing_content_degrades_to_none() {
        assert_eq!(provider().extract_answer(&json!({ "content": [] })), None);
        assert_eq!(provider().extract_answer(&json!({})), None);
    }
}
