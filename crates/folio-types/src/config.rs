//! Configuration types for Folio.
//!
//! `FolioConfig` represents `folio.toml`. Every field has a default, so an
//! empty or missing file yields a working local setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::llm::ProviderType;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// JSON file replacing the built-in portfolio content.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Directory served under `/assets` (résumé, images).
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on live in-memory conversations; the oldest is evicted.
    #[serde(default = "default_max_conversations")]
    pub max_conversations: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_conversations() -> usize {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_conversations: default_max_conversations(),
        }
    }
}

/// Which generation endpoint to call and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_provider")]
    pub provider: ProviderType,
    /// Model identifier. Empty means the provider's default, see
    /// [`GenerationConfig::model_name`].
    #[serde(default)]
    pub model: String,
    /// Environment variable holding the API credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Override the provider's default base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider() -> ProviderType {
    ProviderType::Gemini
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: String::new(),
            api_key_env: default_api_key_env(),
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    /// The configured model, or the provider's default when unset.
    pub fn model_name(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            self.provider.default_model()
        } else {
            model
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert!(config.content_path.is_none());
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_conversations, 1000);
        assert_eq!(config.generation.provider, ProviderType::Gemini);
        assert_eq!(config.generation.model_name(), "gemini-3-flash-preview");
        assert_eq!(config.generation.api_key_env, "API_KEY");
        assert!(!config.observability.otel);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let toml_str = r#"
content_path = "content/me.json"

[server]
port = 8080

[generation]
provider = "openai_compatible"
model = "gpt-4o-mini"
base_url = "https://api.mistral.ai/v1"
temperature = 0.2
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("content/me.json")));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.generation.provider, ProviderType::OpenAiCompatible);
        assert_eq!(config.generation.model_name(), "gpt-4o-mini");
        assert_eq!(config.generation.max_tokens, 1024);
        assert_eq!(config.generation.temperature, Some(0.2));
    }

    #[test]
    fn test_unset_model_follows_provider() {
        let config: FolioConfig =
            toml::from_str("[generation]\nprovider = \"openai_compatible\"\n").unwrap();
        assert_eq!(config.generation.model_name(), "gpt-4o-mini");

        let config: FolioConfig = toml::from_str("[generation]\nmodel = \"  \"\n").unwrap();
        assert_eq!(config.generation.model_name(), "gemini-3-flash-preview");
    }

    #[test]
    fn test_unknown_provider_fails_to_parse() {
        let toml_str = "[generation]\nprovider = \"bedrock\"\n";
        assert!(toml::from_str::<FolioConfig>(toml_str).is_err());
    }
}
