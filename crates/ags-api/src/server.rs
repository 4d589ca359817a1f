//! HTTP API Server
//!
//! Builds the axum application and manages the listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tracing::info;

use ags_core::{Config, SessionService};

use crate::middleware::auth_middleware;
use crate::routes::{api_routes, public_routes};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: SessionService,
}

/// Build the application router for the given state
pub fn app(state: AppState) -> Router {
    let protected = api_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP API server
pub async fn start_server(config: Config, service: SessionService) -> anyhow::Result<()> {
    let port = config.api.port;
    let state = AppState {
        config: Arc::new(config),
        service,
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("HTTP API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
