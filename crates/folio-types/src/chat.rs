//! Chat widget domain types.
//!
//! A conversation is an append-only list of [`ChatMessage`]s plus a
//! `pending` flag that is set while a generation request is in flight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the on-screen history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// History plus the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub history: Vec<ChatMessage>,
    pub pending: bool,
}

/// A conversation as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationView {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: ConversationState,
}

/// Why a submission was dropped without touching history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Input was empty after trimming.
    Empty,
    /// Another request is still in flight.
    Pending,
}

/// Result of submitting one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The model answered; the message is the appended assistant reply.
    Replied { message: ChatMessage },
    /// Generation failed; the message is the appended fallback reply.
    FellBack { message: ChatMessage },
    /// Nothing was appended and no request was made.
    Ignored { reason: IgnoreReason },
}

impl SubmitOutcome {
    /// The assistant message appended by this submission, if any.
    pub fn message(&self) -> Option<&ChatMessage> {
        match self {
            SubmitOutcome::Replied { message } | SubmitOutcome::FellBack { message } => {
                Some(message)
            }
            SubmitOutcome::Ignored { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Ignored { .. })
    }
}
