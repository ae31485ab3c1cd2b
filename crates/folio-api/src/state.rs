//! Application state wiring the chat exchange, content and config together.
//!
//! AppState holds the concrete instances used by both the CLI and the REST
//! API. The exchange is generic over its provider; AppState pins it to
//! [`BoxLlmProvider`] so tests can swap in a mock.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use folio_core::chat::exchange::{ChatExchange, ExchangeSettings};
use folio_core::chat::registry::ConversationRegistry;
use folio_core::llm::box_provider::BoxLlmProvider;
use folio_infra::config::validate_config;
use folio_infra::content::load_portfolio;
use folio_infra::llm::CredentialedProvider;
use folio_infra::secret::EnvCredentialSource;
use folio_types::config::{FolioConfig, GenerationConfig};
use folio_types::content::Portfolio;

pub type ConcreteExchange = ChatExchange<BoxLlmProvider>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<ConcreteExchange>,
    pub conversations: Arc<ConversationRegistry>,
    pub config: Arc<FolioConfig>,
    /// The config file that was consulted, if any.
    pub config_path: Option<PathBuf>,
}

impl AppState {
    /// Load content, then wire the provider and exchange around `config`.
    ///
    /// Invalid content or config values are startup errors.
    pub async fn init(config: FolioConfig, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        validate_config(&config)?;

        let portfolio = load_portfolio(config.content_path.as_deref())
            .await
            .context("failed to load portfolio content")?;

        let provider = env_provider(&config.generation);

        tracing::debug!(
            config = ?config_path,
            provider = %config.generation.provider,
            model = %config.generation.model_name(),
            "application state initialized"
        );

        let mut state = Self::from_parts(config, portfolio, provider);
        state.config_path = config_path;
        Ok(state)
    }

    /// Assemble state from already-loaded parts.
    pub fn from_parts(config: FolioConfig, portfolio: Portfolio, provider: BoxLlmProvider) -> Self {
        let exchange = ChatExchange::new(
            provider,
            Arc::new(portfolio),
            exchange_settings(&config.generation),
        );
        let conversations = ConversationRegistry::new(config.server.max_conversations);

        Self {
            exchange: Arc::new(exchange),
            conversations: Arc::new(conversations),
            config: Arc::new(config),
            config_path: None,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        self.exchange.portfolio()
    }
}

/// Provider reading its key from the configured environment variable per call.
fn env_provider(generation: &GenerationConfig) -> BoxLlmProvider {
    let source = EnvCredentialSource::new(generation.api_key_env.clone());
    BoxLlmProvider::new(CredentialedProvider::new(generation.clone(), source))
}

fn exchange_settings(generation: &GenerationConfig) -> ExchangeSettings {
    ExchangeSettings {
        model: generation.model_name().to_string(),
        max_tokens: generation.max_tokens,
        temperature: generation.temperature,
    }
}
