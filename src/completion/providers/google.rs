//! Google Gemini adapter.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::error::LlmError;
use crate::params::merge_option_params;
use crate::types::{CompletionRequest, TokenUsage};

use super::CompletionProvider;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Adapter for the Gemini `generateContent` API.
///
/// Gemini embeds the model name in the URL rather than the request body.
pub struct GoogleProvider {
    api_key: SecretString,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn generation_config(&self, request: &CompletionRequest) -> Value {
        let base = json!({
            "temperature": 0.2,
            "maxOutputTokens": 1024,
            "topP": 0.8,
            "topK": 40,
        });
        // Caller params land inside generationConfig, and only when present.
        if request.option_params.is_empty() {
            base
        } else {
            merge_option_params(base, &request.option_params)
        }
    }
}

impl CompletionProvider for GoogleProvider {
    fn provider_id(&self) -> &'static str {
        "google"
    }

    fn url(&self, model_name: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model_name)
    }

    fn headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(self.api_key.expose_secret()).map_err(|_| {
                LlmError::ConfigurationError(
                    "API key contains characters not valid in a header".to_string(),
                )
            })?,
        );
        Ok(headers)
    }

    fn build_request(&self, request: &CompletionRequest) -> Value {
        json!({
            "system_instruction": {
                "parts": [{ "text": request.system_prompt }],
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.content }],
            }],
            "generationConfig": self.generation_config(request),
        })
    }

    fn extract_answer(&self, response: &Value) -> Option<String> {
        response
            .pointer("/candidates/0/content/parts/0/text")?
            .as_str()
            .map(str::to_owned)
    }

    fn extract_tokens(&self, response: &Value) -> TokenUsage {
        let usage = response.get("usageMetadata");
        TokenUsage {
            total_tokens: TokenUsage::count(usage, "totalTokenCount"),
            prompt_tokens: TokenUsage::count(usage, "promptTokenCount"),
            completion_tokens: TokenUsage::count(usage, "candidatesTokenCount"),
        }
    }
}
