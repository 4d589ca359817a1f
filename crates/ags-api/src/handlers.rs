//! HTTP API handlers
//!
//! Request handlers for chat submission, polling and health checks. The
//! handlers are thin glue: parsing, status mapping and delegation to the
//! session service.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::server::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Chat submission payload
#[derive(Debug, Deserialize)]
pub struct SendChatRequest {
    /// User message
    pub text: String,
}

/// Chat submission response
#[derive(Debug, Serialize)]
pub struct SendChatResponse {
    /// Session id for polling the turn
    pub session_id: String,
}

/// Poll request payload
#[derive(Debug, Deserialize)]
pub struct GetChatRequest {
    /// Session id returned by send_chat
    pub session_id: String,
}

/// Poll response payload
#[derive(Debug, Serialize)]
pub struct GetChatResponse {
    /// Accumulated response text so far
    pub response: String,
    /// Finalized answer, empty until the turn completes
    pub answer: String,
    /// Whether the turn has finished
    pub chat_complete: bool,
}

// ============================================================================
// Handler functions
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Submit a chat turn; returns its session id immediately.
///
/// The turn runs in the background, so the response never waits on the
/// agent backend.
pub async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<SendChatRequest>,
) -> Json<SendChatResponse> {
    debug!("send_chat request: {:?}", req);

    let session_id = state.service.submit(&req.text).await;
    info!("Accepted chat turn: session_id={}", session_id);

    Json(SendChatResponse { session_id })
}

/// Poll the current state of a chat turn.
///
/// Returns 404 for an unknown session id; polling never blocks waiting for
/// completion.
pub async fn get_chat(
    State(state): State<AppState>,
    Json(req): Json<GetChatRequest>,
) -> Result<Json<GetChatResponse>, ApiError> {
    debug!("get_chat request: session_id={}", req.session_id);

    let snapshot = state
        .service
        .poll(&req.session_id)
        .await
        .ok_or_else(|| ApiError::SessionNotFound(req.session_id.clone()))?;

    Ok(Json(GetChatResponse {
        response: snapshot.response,
        answer: snapshot.answer,
        chat_complete: snapshot.complete,
    }))
}
