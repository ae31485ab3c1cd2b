use thiserror::Error;

use crate::llm::LlmError;

/// Errors detected while loading or validating the Content Store.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("skill '{skill}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { skill: String, level: u8 },

    #[error("duplicate id {id} in {section}")]
    DuplicateId { section: &'static str, id: u32 },

    #[error("content parse error: {0}")]
    Parse(String),

    #[error("content file error: {0}")]
    Io(String),
}

/// Why a single chat turn could not produce model text.
///
/// Every variant is handled the same way by the chat exchange (logged, then
/// replaced by the fallback message). The variants only exist so that the
/// logs say which of the three cases happened.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("no API credential available")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider error: {0}")]
    Provider(LlmError),

    #[error("model returned no text")]
    EmptyResponse,
}

impl From<LlmError> for GenerationFailure {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential { .. } => GenerationFailure::MissingCredential,
            LlmError::Transport(msg) => GenerationFailure::Transport(msg),
            other => GenerationFailure::Provider(other),
        }
    }
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}
