//! OpenAI chat completion adapter.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::error::LlmError;
use crate::params::merge_option_params;
use crate::types::{CompletionRequest, TokenUsage};

use super::CompletionProvider;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Adapter for the OpenAI chat completions API.
///
/// Also serves as the translation core for OpenAI-compatible vendors (see
/// [`super::DeepSeekProvider`]).
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

impl CompletionProvider for OpenAiProvider {
    fn provider_id(&self) -> &'static str {
        "openai"
    }

    fn url(&self, _model_name: &str) -> String {
        format!("{}/chat/completions", self.base_url)
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

    fn build_request(&self, request: &CompletionRequest) -> Value {
        let base = json!({
            "model": request.model_name,
            "n": 1,
            "temperature": 0.2,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.content },
            ],
        });
        merge_option_params(base, &request.option_params)
    }

    fn extract_answer(&self, response: &Value) -> Option<String> {
        let choices = response.get("choices")?.as_array()?;
        choices
            .first()?
            .pointer("/message/content")?
            .as_str()
            .map(str::to_owned)
    }

    fn extract_tokens(&self, response: &Value) -> TokenUsage {
        let usage = response.get("usage");
        TokenUsage {
            total_tokens: TokenUsage::count(usage, "total_tokens"),
            prompt_tokens: TokenUsage::count(usage, "prompt_tokens"),
            completion_tokens: TokenUsage::count(usage, "completion_tokens"),
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
    fn url_is_the_fixed_chat_completions_endpoint() {
        assert_eq!(
            provider().url("gpt-4o-mini"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn headers_carry_bearer_auth() {
        let headers = provider().headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
    }

    #[test]
    fn request_body_has_system_and_user_messages() {
        let request = CompletionRequest::new(
            "You are a helpful assistant.",
            "What is 2+2?",
            "gpt-4o-mini",
        );
        let body = provider().build_request(&request);

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["n"], 1);
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a helpful assistant.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "What is 2+2?");
    }

    #[test]
    fn option_params_override_base_fields() {
        let request = CompletionRequest::new("sys", "hi", "gpt-4o-mini")
            .with_option("temperature", json!(0.9))
            .with_option("max_tokens", json!(64));
        let body = provider().build_request(&request);

        assert_eq!(body["temperature"], json!(0.9));
        assert_eq!(body["max_tokens"], json!(64));
    }

    #[test]
    fn extracts_answer_and_tokens_from_documented_shape() {
        let response = json!({
            "choices": [{ "message": { "content": "4" } }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11 }
        });
        let provider = provider();

        assert_eq!(provider.extract_answer(&response).as_deref(), Some("4"));
        assert_eq!(
            provider.extract_tokens(&response),
            TokenUsage {
                total_tokens: Some(11),
                prompt_tokens: Some(10),
                completion_tokens: Some(1),
            }
        );
    }

    #[test]
    fn missing_or_empty_choices_degrade_to_none() {
        let provider = provider();
        assert_eq!(provider.extract_answer(&json!({})), None);
        assert_eq!(provider.extract_answer(&json!({ "choices": [] })), None);
        assert_eq!(provider.extract_tokens(&json!({})), TokenUsage::default());
    }
}
