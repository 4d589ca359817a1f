//! Turn execution
//!
//! Bridges one opaque backend turn onto the session store: each partial chunk
//! becomes a partial update, and exactly one terminal update fires whether
//! the backend succeeds or fails. A started turn never leaves its session
//! hanging incomplete.

use std::sync::Arc;

use async_trait::async_trait;

use tracing::{error, info, warn};

use crate::agent::{AgentBackend, TurnSink};
use crate::session::SessionStore;

/// Runs one agent turn and drives its output into the session store
pub struct TurnExecutor {
    store: Arc<SessionStore>,
    backend: Arc<dyn AgentBackend>,
}

/// Sink that maps partial chunks onto partial session updates
struct StoreSink<'a> {
    store: &'a SessionStore,
    session_id: &'a str,
}

#[async_trait]
impl TurnSink for StoreSink<'_> {
    async fn partial(&self, text: &str) {
        // The answer field only carries meaning at completion.
        if let Err(e) = self
            .store
            .update(self.session_id, text.to_string(), String::new(), false)
            .await
        {
            warn!("Dropping partial update for session {}: {}", self.session_id, e);
        }
    }
}

impl TurnExecutor {
    pub fn new(store: Arc<SessionStore>, backend: Arc<dyn AgentBackend>) -> Self {
        Self { store, backend }
    }

    /// Run one turn to completion.
    ///
    /// Partial updates are applied in the order the backend issues them; the
    /// terminal update fires exactly once. A backend failure is converted
    /// into a terminal update carrying an error description.
    pub async fn run(&self, session_id: &str, text: &str) {
        let sink = StoreSink {
            store: &self.store,
            session_id,
        };

        let (response, answer) = match self.backend.run_turn(text, &sink).await {
            Ok(outcome) => {
                info!("Turn complete for session: {}", session_id);
                (outcome.response, outcome.answer)
            }
            Err(e) => {
                error!("Agent backend failed for session {}: {}", session_id, e);
                (format!("Error during agent execution: {}", e), String::new())
            }
        };

        if let Err(e) = self.store.update(session_id, response, answer, true).await {
            error!("Failed to finalize session {}: {}", session_id, e);
        }
    }
}
