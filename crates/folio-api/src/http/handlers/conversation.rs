//! Chat conversation handlers.
//!
//! A conversation lives in the in-memory registry. Submitting a message
//! always answers 200 for a known conversation; the body says whether the
//! turn was replied to, fell back, or was ignored.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_core::chat::exchange::Conversation;
use folio_types::chat::{ConversationView, SubmitOutcome};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Body of `POST /conversations/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

/// Outcome of one submission plus the conversation afterwards.
#[derive(Debug, Serialize)]
pub struct SubmitMessageResponse {
    #[serde(flatten)]
    pub outcome: SubmitOutcome,
    pub state: ConversationView,
}

fn lookup(state: &AppState, id: &str) -> Result<Arc<Conversation>, AppError> {
    Uuid::parse_str(id)
        .ok()
        .and_then(|uuid| state.conversations.get(&uuid))
        .ok_or_else(|| AppError::ConversationNotFound(id.to_string()))
}

/// POST /api/v1/conversations - start a conversation seeded with the greeting.
pub async fn create_conversation(
    State(state): State<AppState>,
) -> Json<ApiResponse<ConversationView>> {
    let timer = RequestTimer::start();

    let conversation = state
        .conversations
        .insert(state.exchange.start_conversation());
    let view = conversation.view().await;
    tracing::debug!(conversation_id = %view.id, "conversation started");

    let href = format!("/api/v1/conversations/{}", view.id);
    Json(
        timer
            .finish(view)
            .with_link("self", &href)
            .with_link("messages", &format!("{href}/messages")),
    )
}

/// GET /api/v1/conversations/{id} - current history and pending flag.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ConversationView>>, AppError> {
    let timer = RequestTimer::start();
    let conversation = lookup(&state, &id)?;
    let view = conversation.view().await;
    Ok(Json(timer.finish(view)))
}

/// POST /api/v1/conversations/{id}/messages - submit one user turn.
///
/// The turn runs on its own task so a client that disconnects mid-request
/// cannot leave the conversation stuck in `pending`.
pub async fn submit_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SubmitMessageRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmitMessageResponse>>, AppError> {
    let timer = RequestTimer::start();
    let conversation = lookup(&state, &id)?;
    let Json(body) = body?;

    let exchange = Arc::clone(&state.exchange);
    let turn = Arc::clone(&conversation);
    let outcome = tokio::spawn(async move { exchange.submit(&turn, &body.text).await })
        .await
        .map_err(|e| AppError::Internal(format!("chat turn task failed: {e}")))?;

    let view = conversation.view().await;
    Ok(Json(timer.finish(SubmitMessageResponse {
        outcome,
        state: view,
    })))
}
