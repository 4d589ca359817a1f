//! Route definitions
//!
//! Defines all HTTP API endpoints.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{get_chat, health, send_chat};
use crate::server::AppState;

/// Routes that sit behind API-key authentication
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/send_chat", post(send_chat))
        .route("/api/get_chat", post(get_chat))
}

/// Routes that are always open
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
