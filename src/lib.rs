//! # llm-hub
//!
//! A unified blocking client for heterogeneous LLM vendor HTTP APIs.
//!
//! Two logical operations — ask a single question, embed a piece of text —
//! against any supported provider through one call signature and one result
//! shape. Each provider adapter translates the unified request into the
//! vendor's wire format and normalizes the response back; the operation
//! clients wrap every call in a fixed-count retry loop and surface failures
//! as [`LlmError`] values rather than panics.
//!
//! ```rust,no_run
//! use llm_hub::prelude::*;
//!
//! fn main() -> Result<(), LlmError> {
//!     let client = CompletionClient::builder()
//!         .api_key(std::env::var("OPENAI_API_KEY").unwrap_or_default())
//!         .provider("openai")
//!         .build()?;
//!
//!     let request = CompletionRequest::new(
//!         "You are a helpful assistant.",
//!         "What is 2+2?",
//!         "gpt-4o-mini",
//!     );
//!     let response = client.ask_single_question(&request)?;
//!     println!("{:?}", response.answer);
//!     Ok(())
//! }
//! ```

pub mod completion;
pub mod config;
pub mod embedding;
pub mod error;
pub mod http;
pub mod params;
pub mod retry;
pub mod types;

pub use completion::{CompletionClient, CompletionClientBuilder};
pub use embedding::{EmbeddingClient, EmbeddingClientBuilder};
pub use error::LlmError;
pub use types::{
    CompletionRequest, CompletionResponse, EmbeddingRequest, EmbeddingResponse, TokenUsage,
};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::completion::{CompletionClient, CompletionClientBuilder};
    pub use crate::embedding::{EmbeddingClient, EmbeddingClientBuilder};
    pub use crate::error::LlmError;
    pub use crate::types::{
        CompletionRequest, CompletionResponse, EmbeddingRequest, EmbeddingResponse, TokenUsage,
    };
}
