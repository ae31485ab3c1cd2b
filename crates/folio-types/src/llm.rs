//! LLM request/response types for Folio.
//!
//! These types model the data shapes exchanged with a generation endpoint:
//! completion requests, responses, usage tracking and errors. They are
//! provider-agnostic; each client in `folio-infra` maps them onto its own
//! wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in an LLM request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier. Empty means "use the provider's configured model".
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CompletionRequest {
    /// A single-turn request: one user prompt plus a system instruction.
    pub fn single_turn(
        model: impl Into<String>,
        prompt: impl Into<String>,
        system: impl Into<String>,
        max_tokens: u32,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt.into(),
            }],
            system: Some(system.into()),
            max_tokens,
            temperature,
        }
    }

    /// Text of the last user message, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Response from an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
    pub stop_reason: StopReason,
    pub usage: Usage,
}

/// Reason why the LLM stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    ContentFilter,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("credential environment variable '{variable}' is not set")]
    MissingCredential { variable: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Type of generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    Gemini,
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::Gemini => write!(f, "gemini"),
            ProviderType::OpenAiCompatible => write!(f, "openai_compatible"),
        }
    }
}

impl ProviderType {
    /// Model used when the config leaves `generation.model` unset.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderType::Gemini => "gemini-3-flash-preview",
            ProviderType::OpenAiCompatible => "gpt-4o-mini",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
        assert_eq!(MessageRole::User.to_string(), "user");
    }

    #[test]
    fn test_single_turn_request() {
        let req = CompletionRequest::single_turn("m", "What do you do?", "Be brief", 256, None);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.prompt(), Some("What do you do?"));
        assert_eq!(req.system.as_deref(), Some("Be brief"));
    }

    #[test]
    fn test_request_omits_absent_temperature() {
        let req = CompletionRequest::single_turn("m", "hi", "sys", 16, None);
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_provider_default_models() {
        assert_eq!(ProviderType::Gemini.default_model(), "gemini-3-flash-preview");
        assert_eq!(ProviderType::OpenAiCompatible.default_model(), "gpt-4o-mini");
    }

    #[test]
    fn test_provider_type_serde() {
        let json = serde_json::to_string(&ProviderType::OpenAiCompatible).unwrap();
        assert_eq!(json, "\"openai_compatible\"");
    }

    #[test]
    fn test_missing_credential_display_names_variable() {
        let err = LlmError::MissingCredential {
            variable: "API_KEY".to_string(),
        };
        assert!(err.to_string().contains("API_KEY"));
    }
}
