//! Read-only content handlers.

use axum::Json;
use axum::extract::State;

use folio_core::context::ContextDocument;
use folio_types::content::Portfolio;

use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/portfolio - the full Content Store.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<ApiResponse<Portfolio>> {
    let timer = RequestTimer::start();
    let resp = timer
        .finish(state.portfolio().clone())
        .with_link("self", "/api/v1/portfolio")
        .with_link("context", "/api/v1/context");
    Json(resp)
}

/// GET /api/v1/context - the grounding document sent with every chat turn.
pub async fn get_context(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    let timer = RequestTimer::start();
    // Serializing borrowed content into a Value cannot fail.
    let document = serde_json::to_value(ContextDocument::from_portfolio(state.portfolio()))
        .unwrap_or_default();
    Json(timer.finish(document).with_link("self", "/api/v1/context"))
}
