//! BoxLlmProvider -- object-safe dynamic dispatch wrapper for LlmProvider.
//!
//! 1. Define an object-safe `LlmProviderDyn` trait with boxed futures
//! 2. Blanket-impl `LlmProviderDyn` for all `T: LlmProvider`
//! 3. `BoxLlmProvider` wraps `Box<dyn LlmProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::provider::LlmProvider;

/// Object-safe version of [`LlmProvider`] with boxed futures.
pub trait LlmProviderDyn: Send + Sync {
    fn name_dyn(&self) -> &str;

    fn model_dyn(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>>;
}

impl<T: LlmProvider> LlmProviderDyn for T {
    fn name_dyn(&self) -> &str {
        LlmProvider::name(self)
    }

    fn model_dyn(&self) -> &str {
        LlmProvider::model(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.complete(request))
    }
}

/// Type-erased LLM provider for runtime provider selection.
///
/// Since `LlmProvider` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxLlmProvider` offers the same methods and delegates to the
/// inner `LlmProviderDyn` trait object. It also implements `LlmProvider`
/// itself, so generic code accepts it unchanged.
pub struct BoxLlmProvider {
    inner: Box<dyn LlmProviderDyn + Send + Sync>,
}

impl BoxLlmProvider {
    /// Wrap a concrete `LlmProvider` in a type-erased box.
    pub fn new<T: LlmProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }
}

impl LlmProvider for BoxLlmProvider {
    fn name(&self) -> &str {
        self.inner.name_dyn()
    }

    fn model(&self) -> &str {
        self.inner.model_dyn()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.inner.complete_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::llm::{StopReason, Usage};

    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "resp-1".to_string(),
                content: request.prompt().unwrap_or_default().to_string(),
                model: self.model().to_string(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }
    }

    #[tokio::test]
    async fn boxed_provider_delegates() {
        let provider = BoxLlmProvider::new(EchoProvider);
        assert_eq!(LlmProvider::name(&provider), "echo");
        assert_eq!(LlmProvider::model(&provider), "echo-1");

        let request = CompletionRequest::single_turn("", "ping", "sys", 8, None);
        let response = provider.complete(&request).await.unwrap();
        assert_eq!(response.content, "ping");
    }

    #[tokio::test]
    async fn boxed_provider_can_be_boxed_again() {
        let provider = BoxLlmProvider::new(BoxLlmProvider::new(EchoProvider));
        assert_eq!(LlmProvider::name(&provider), "echo");

        let request = CompletionRequest::single_turn("", "pong", "sys", 8, None);
        let response = provider.complete(&request).await.unwrap();
        assert_eq!(response.content, "pong");
    }
}
