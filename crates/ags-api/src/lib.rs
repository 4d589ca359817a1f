//! ags-api: HTTP API for the agentic chat-turn server
//!
//! REST binding over ags-core: submit a chat turn, poll its session.
//! Built with axum for async HTTP handling.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{AppState, app, start_server};
