//! Configuration loader for Folio.
//!
//! Locates `folio.toml` and deserializes it into [`FolioConfig`]. Falls back
//! to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use folio_types::config::FolioConfig;
use folio_types::error::ConfigError;
use folio_types::llm::ProviderType;

use crate::llm::openai_compat::config::OPENAI_BASE_URL;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Resolve which config file to read.
///
/// Priority:
/// 1. The `--config` flag
/// 2. `$FOLIO_CONFIG`
/// 3. `{config_dir}/folio/folio.toml`
///
/// Returns `None` only when no explicit path is given and the platform has
/// no config directory.
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join("folio").join("folio.toml"))
}

/// Load configuration from `path`.
///
/// - If `path` is `None` or the file does not exist, returns [`FolioConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and returns the default.
pub async fn load_config(path: Option<&Path>) -> FolioConfig {
    let Some(config_path) = path else {
        tracing::debug!("No config location available, using defaults");
        return FolioConfig::default();
    };

    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No folio.toml found at {}, using defaults", config_path.display());
            return FolioConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return FolioConfig::default();
        }
    };

    match toml::from_str::<FolioConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            FolioConfig::default()
        }
    }
}

/// Reject values that parse but cannot work.
pub fn validate_config(config: &FolioConfig) -> Result<(), ConfigError> {
    // The OpenAI default model means nothing to other compatible endpoints.
    let custom_endpoint = config
        .generation
        .base_url
        .as_deref()
        .map(|url| url.trim().trim_end_matches('/'))
        .is_some_and(|url| !url.is_empty() && url != OPENAI_BASE_URL);
    if config.generation.provider == ProviderType::OpenAiCompatible
        && custom_endpoint
        && config.generation.model.trim().is_empty()
    {
        return Err(ConfigError::Invalid {
            field: "generation.model",
            message: "must be set when base_url points at a non-OpenAI endpoint".to_string(),
        });
    }
    if config.generation.api_key_env.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "generation.api_key_env",
            message: "must name an environment variable".to_string(),
        });
    }
    if config.generation.max_tokens == 0 {
        return Err(ConfigError::Invalid {
            field: "generation.max_tokens",
            message: "must be greater than zero".to_string(),
        });
    }
    if let Some(t) = config.generation.temperature
        && !(0.0..=2.0).contains(&t)
    {
        return Err(ConfigError::Invalid {
            field: "generation.temperature",
            message: format!("{t} is outside 0.0..=2.0"),
        });
    }
    if config.generation.request_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            field: "generation.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
