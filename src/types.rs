//! Unified request and response types shared by all providers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token accounting normalized across vendors.
///
/// Fields are `None` when the vendor response omits the corresponding count.
/// Embedding responses never carry `completion_tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Total tokens consumed by the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    /// Tokens in the prompt/input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    /// Tokens in the generated output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
}

impl TokenUsage {
    /// Read one token count out of a vendor `usage` object, tolerating a
    /// missing object, missing key, or non-integer value.
    pub(crate) fn count(usage: Option<&Value>, key: &str) -> Option<u64> {
        usage.and_then(|u| u.get(key)).and_then(Value::as_u64)
    }
}

/// A single-question completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt establishing the assistant's behavior.
    pub system_prompt: String,
    /// The user's question or content.
    pub content: String,
    /// Vendor model identifier, e.g. `gpt-4o-mini`.
    pub model_name: String,
    /// Vendor-passthrough fields merged into the built request body.
    /// Caller keys overwrite same-named adapter defaults; unknown keys pass
    /// through untouched.
    pub option_params: Map<String, Value>,
}

impl CompletionRequest {
    /// Create a request with no option params.
    pub fn new(
        system_prompt: impl Into<String>,
        content: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            content: content.into(),
            model_name: model_name.into(),
            option_params: Map::new(),
        }
    }

    /// Add a vendor-passthrough field.
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.option_params.insert(key.into(), value);
        self
    }
}

/// Normalized completion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The extracted answer, or `None` when the vendor response carried no
    /// usable content.
    pub answer: Option<String>,
    /// Token accounting reported by the vendor.
    pub tokens: TokenUsage,
}

/// A single-text embedding request.
#[derive(Debug, Clone)]
pub struct EmbeddingRequest {
    /// The text to embed.
    pub text: String,
    /// Vendor model identifier, e.g. `text-embedding-3-small`.
    pub model_name: String,
    /// Vendor-passthrough fields, same merge rule as completion.
    pub option_params: Map<String, Value>,
}

impl EmbeddingRequest {
    /// Create a request with no option params.
    pub fn new(text: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_name: model_name.into(),
            option_params: Map::new(),
        }
    }

    /// Add a vendor-passthrough field.
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.option_params.insert(key.into(), value);
        self
    }
}

/// Normalized embedding result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The embedding vector, or `None` when the vendor response carried no
    /// usable data.
    pub embedding: Option<Vec<f32>>,
    /// Token accounting reported by the vendor.
    pub tokens: TokenUsage,
}
