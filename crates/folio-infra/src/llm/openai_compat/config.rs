//! Configuration and well-known endpoints for OpenAI-compatible providers.

use secrecy::SecretString;

/// Configuration for an OpenAI-compatible provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "mistral").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model identifier used when a request leaves `model` empty.
    pub model: String,
}

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Pick a display name for a base URL so logs say who was called.
pub fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.contains("api.openai.com") {
        "openai"
    } else if base_url.contains("api.mistral.ai") {
        "mistral"
    } else if base_url.contains("generativelanguage.googleapis.com") {
        "gemini"
    } else {
        "openai_compatible"
    }
}

/// Build a config for `base_url`, defaulting to the OpenAI endpoint.
pub fn compat_config(api_key: SecretString, model: &str, base_url: Option<&str>) -> OpenAiCompatConfig {
    let base_url = base_url
        .filter(|u| !u.trim().is_empty())
        .unwrap_or(OPENAI_BASE_URL)
        .trim_end_matches('/')
        .to_string();

    OpenAiCompatConfig {
        provider_name: provider_name_for(&base_url).to_string(),
        base_url,
        api_key,
        model: model.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_openai() {
        let config = compat_config(SecretString::from("sk-test"), "gpt-4o-mini", None);
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, OPENAI_BASE_URL);
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn test_blank_base_url_is_ignored() {
        let config = compat_config(SecretString::from("k"), "m", Some("  "));
        assert_eq!(config.base_url, OPENAI_BASE_URL);
    }

    #[test]
    fn test_known_base_urls_are_named() {
        let config = compat_config(SecretString::from("k"), "mistral-small", Some("https://api.mistral.ai/v1/"));
        assert_eq!(config.provider_name, "mistral");
        assert_eq!(config.base_url, MISTRAL_BASE_URL);

        assert_eq!(provider_name_for("http://localhost:11434/v1"), "openai_compatible");
    }
}
