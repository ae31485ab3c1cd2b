//! The chat exchange: one user turn in, one assistant message out.
//!
//! Every accepted turn moves its conversation `idle -> pending -> idle`:
//!
//! 1. trim the input; blank input is ignored
//! 2. under the conversation lock: reject if `pending`, else append the user
//!    message and set `pending`
//! 3. without holding the lock: build the grounding context and system
//!    instruction, issue exactly one `complete` call
//! 4. under the lock again: append the model text, or the fixed fallback
//!    message on any [`GenerationFailure`], and clear `pending`
//!
//! There is no retry. If the `submit` future is dropped mid-call, the turn
//! resolves with the fallback message so the conversation never stays
//! pending. The model only ever sees the current question; on-screen
//! history is not replayed to it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use folio_types::chat::{
    ChatMessage, ConversationState, ConversationView, IgnoreReason, SubmitOutcome,
};
use folio_types::content::Portfolio;
use folio_types::error::GenerationFailure;
use folio_types::llm::CompletionRequest;

use crate::context::SystemInstruction;
use crate::llm::provider::LlmProvider;

/// Assistant text appended whenever generation fails.
pub const FALLBACK_MESSAGE: &str = "I apologize, but I'm having a little trouble thinking right now. \
Please try asking me again in a moment, or check the Contact section to reach out directly!";

/// First assistant message of every conversation.
pub fn greeting_for(name: &str) -> String {
    format!(
        "Hi! I'm an AI assistant for {name}. Ask me anything about their skills, projects, or experience."
    )
}

/// Request parameters that do not change between turns.
#[derive(Debug, Clone)]
pub struct ExchangeSettings {
    /// Model identifier; empty lets the provider pick its configured model.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            model: String::new(),
            max_tokens: 1024,
            temperature: None,
        }
    }
}

/// Packages user turns with the grounding context and calls the provider.
///
/// Generic over [`LlmProvider`]; the binary pins it to `BoxLlmProvider`.
pub struct ChatExchange<P: LlmProvider> {
    provider: P,
    portfolio: Arc<Portfolio>,
    settings: ExchangeSettings,
}

impl<P: LlmProvider> ChatExchange<P> {
    pub fn new(provider: P, portfolio: Arc<Portfolio>, settings: ExchangeSettings) -> Self {
        Self {
            provider,
            portfolio,
            settings,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn greeting(&self) -> String {
        greeting_for(&self.portfolio.profile.name)
    }

    /// Start a fresh conversation seeded with the greeting.
    pub fn start_conversation(&self) -> Conversation {
        Conversation::new(self.greeting())
    }

    /// Issue exactly one generation request for `prompt`.
    ///
    /// The system instruction (and the context document inside it) is built
    /// from the portfolio on every call.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        let request = CompletionRequest::single_turn(
            self.settings.model.clone(),
            prompt,
            SystemInstruction::build(&self.portfolio),
            self.settings.max_tokens,
            self.settings.temperature,
        );

        let response = self.provider.complete(&request).await?;

        if response.content.trim().is_empty() {
            return Err(GenerationFailure::EmptyResponse);
        }

        debug!(
            provider = self.provider.name(),
            model = %response.model,
            stop_reason = %response.stop_reason,
            output_tokens = response.usage.output_tokens,
            "generation completed"
        );

        Ok(response.content)
    }

    /// Submit one user turn to `conversation`.
    ///
    /// Blank input and input arriving while a request is in flight are
    /// no-ops. Otherwise the user message and exactly one assistant message
    /// are appended, in that order.
    pub async fn submit(&self, conversation: &Conversation, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored {
                reason: IgnoreReason::Empty,
            };
        }

        if let Err(reason) = conversation.begin_turn(text).await {
            debug!(conversation_id = %conversation.id(), "submission ignored while pending");
            return SubmitOutcome::Ignored { reason };
        }
        let guard = TurnGuard::arm(conversation);

        let outcome = match self.generate(text).await {
            Ok(reply) => SubmitOutcome::Replied {
                message: ChatMessage::assistant(reply),
            },
            Err(failure) => {
                warn!(
                    conversation_id = %conversation.id(),
                    provider = self.provider.name(),
                    error = %failure,
                    "generation failed, answering with fallback"
                );
                SubmitOutcome::FellBack {
                    message: ChatMessage::assistant(FALLBACK_MESSAGE),
                }
            }
        };

        if let Some(message) = outcome.message() {
            conversation.finish_turn(message.clone()).await;
        }
        guard.disarm();

        info!(
            conversation_id = %conversation.id(),
            replied = matches!(outcome, SubmitOutcome::Replied { .. }),
            "chat turn resolved"
        );

        outcome
    }
}

/// One browser session's worth of chat state.
#[derive(Debug)]
pub struct Conversation {
    id: Uuid,
    started_at: DateTime<Utc>,
    state: Arc<Mutex<ConversationState>>,
}

impl Conversation {
    /// New conversation whose history holds only `greeting`.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            state: Arc::new(Mutex::new(ConversationState {
                history: vec![ChatMessage::assistant(greeting)],
                pending: false,
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub async fn snapshot(&self) -> ConversationState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> ConversationView {
        ConversationView {
            id: self.id,
            started_at: self.started_at,
            state: self.snapshot().await,
        }
    }

    pub async fn is_pending(&self) -> bool {
        self.state.lock().await.pending
    }

    /// `idle -> pending`: append the user message unless a turn is in flight.
    async fn begin_turn(&self, text: &str) -> Result<(), IgnoreReason> {
        let mut state = self.state.lock().await;
        if state.pending {
            return Err(IgnoreReason::Pending);
        }
        state.history.push(ChatMessage::user(text));
        state.pending = true;
        Ok(())
    }

    /// `pending -> idle`: append the assistant message.
    async fn finish_turn(&self, message: ChatMessage) {
        let mut state = self.state.lock().await;
        state.history.push(message);
        state.pending = false;
    }
}

/// Resolves an abandoned turn with the fallback message.
///
/// Armed right after `begin_turn`. Dropping it while still armed means the
/// `submit` future was cancelled before `finish_turn` ran.
struct TurnGuard<'a> {
    conversation: Option<&'a Conversation>,
}

impl<'a> TurnGuard<'a> {
    fn arm(conversation: &'a Conversation) -> Self {
        Self {
            conversation: Some(conversation),
        }
    }

    fn disarm(mut self) {
        self.conversation = None;
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        let Some(conversation) = self.conversation.take() else {
            return;
        };
        warn!(
            conversation_id = %conversation.id(),
            "chat turn abandoned, answering with fallback"
        );

        fn resolve(state: &mut ConversationState) {
            if state.pending {
                state.history.push(ChatMessage::assistant(FALLBACK_MESSAGE));
                state.pending = false;
            }
        }

        if let Ok(mut state) = conversation.state.try_lock() {
            resolve(&mut state);
            return;
        }

        // Someone holds the lock for a snapshot; finish once they release it.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let state = Arc::clone(&conversation.state);
                handle.spawn(async move {
                    resolve(&mut *state.lock().await);
                });
            }
            Err(_) => {
                let mut state = conversation.state.blocking_lock();
                resolve(&mut state);
            }
        }
    }
}
