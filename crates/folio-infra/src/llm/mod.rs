//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `folio-core`: the native Gemini client and the OpenAI-compatible client.
//!
//! Also provides a provider factory ([`create_provider`]) that constructs the
//! right client from a [`GenerationConfig`], and [`CredentialedProvider`],
//! which resolves the API credential on every request so a missing key only
//! fails the request at hand.

pub mod gemini;
pub mod openai_compat;

use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use folio_core::llm::box_provider::BoxLlmProvider;
use folio_core::llm::provider::LlmProvider;
use folio_types::config::GenerationConfig;
use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError, ProviderType};

use self::gemini::GeminiProvider;
use self::openai_compat::OpenAiCompatibleProvider;
use crate::secret::CredentialSource;

/// Create a [`BoxLlmProvider`] from a [`GenerationConfig`] and a resolved key.
///
/// `http` is reused by clients that take a `reqwest::Client` directly.
pub fn create_provider(
    config: &GenerationConfig,
    api_key: SecretString,
    http: &reqwest::Client,
) -> BoxLlmProvider {
    let base_url = config.base_url.as_deref().filter(|u| !u.trim().is_empty());

    match config.provider {
        ProviderType::Gemini => {
            let mut provider =
                GeminiProvider::with_client(http.clone(), api_key, config.model_name().to_string());
            if let Some(base_url) = base_url {
                provider = provider.with_base_url(base_url);
            }
            BoxLlmProvider::new(provider)
        }
        ProviderType::OpenAiCompatible => {
            let compat = openai_compat::config::compat_config(api_key, config.model_name(), base_url);
            BoxLlmProvider::new(OpenAiCompatibleProvider::new(compat))
        }
    }
}

/// Provider that looks up its credential on every call.
///
/// An absent credential yields [`LlmError::MissingCredential`] for that call
/// only. Every call is bounded by the configured request timeout; expiry is
/// reported as [`LlmError::Transport`].
pub struct CredentialedProvider<C: CredentialSource> {
    config: GenerationConfig,
    credentials: C,
    http: reqwest::Client,
    name: String,
    timeout: Duration,
}

impl<C: CredentialSource> CredentialedProvider<C> {
    pub fn new(config: GenerationConfig, credentials: C) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs.max(1));
        Self {
            name: config.provider.to_string(),
            config,
            credentials,
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl<C: CredentialSource> LlmProvider for CredentialedProvider<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        self.config.model_name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let api_key = self
            .credentials
            .resolve()
            .ok_or_else(|| LlmError::MissingCredential {
                variable: self.credentials.location().to_string(),
            })?;

        let provider = create_provider(&self.config, api_key, &self.http);
        debug!(provider = provider.name(), model = provider.model(), "dispatching generation request");

        match tokio::time::timeout(self.timeout, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Transport(format!(
                "request timed out after {} ms",
                self.timeout.as_millis()
            ))),
        }
    }
}
