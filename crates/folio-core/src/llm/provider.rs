//! LlmProvider trait definition.
//!
//! This is the core abstraction that every generation backend implements.
//! Uses native async fn in traits (RPITIT) for `complete`.

use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generation backends (Gemini, OpenAI-compatible, ...).
///
/// Implementations live in folio-infra. Tests in this crate use small
/// hand-written mocks.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Model identifier used when a request leaves `model` empty.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
