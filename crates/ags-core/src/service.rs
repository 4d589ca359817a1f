//! Session service
//!
//! Orchestrates session creation and fire-and-forget turn dispatch. No handle
//! to the spawned turn is returned; the only channel back to callers is the
//! session store, read through `poll`.

use std::sync::Arc;

use tracing::info;

use crate::agent::{AgentBackend, TurnExecutor};
use crate::session::{SessionSnapshot, SessionStore};

/// Submit/poll facade over the session store and turn executor
#[derive(Clone)]
pub struct SessionService {
    store: Arc<SessionStore>,
    executor: Arc<TurnExecutor>,
}

impl SessionService {
    /// Create a service with a fresh store around the given backend
    pub fn new(backend: Arc<dyn AgentBackend>) -> Self {
        let store = Arc::new(SessionStore::new());
        let executor = Arc::new(TurnExecutor::new(Arc::clone(&store), backend));
        Self { store, executor }
    }

    /// Create a session and dispatch its turn in the background.
    ///
    /// Returns as soon as the session exists; the spawned turn may not have
    /// started yet, let alone finished.
    pub async fn submit(&self, text: &str) -> String {
        let session_id = self.store.create().await;
        info!("Dispatching turn for session: {}", session_id);

        let executor = Arc::clone(&self.executor);
        let id = session_id.clone();
        let input = text.to_string();
        tokio::spawn(async move {
            executor.run(&id, &input).await;
        });

        session_id
    }

    /// Read the current snapshot of a session, or `None` for an unknown id
    pub async fn poll(&self, session_id: &str) -> Option<SessionSnapshot> {
        self.store.get(session_id).await
    }

    /// Number of tracked sessions
    pub async fn session_count(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::MockBackend;
    use std::time::Duration;

    fn service_with_delay(delay: Duration) -> SessionService {
        SessionService::new(Arc::new(MockBackend::with_delay(delay)))
    }

    async fn wait_for_completion(service: &SessionService, id: &str) -> SessionSnapshot {
        for _ in 0..200 {
            if let Some(snapshot) = service.poll(id).await {
                if snapshot.complete {
                    return snapshot;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("session {} did not complete in time", id);
    }

    #[tokio::test]
    async fn test_submit_returns_before_turn_completes() {
        // A turn this slow cannot have finished by the time submit returns.
        let service = service_with_delay(Duration::from_secs(60));

        let id = service.submit("What model are you?").await;

        let snapshot = service.poll(&id).await.unwrap();
        assert!(!snapshot.complete);
    }

    #[tokio::test]
    async fn test_poll_unknown_session_is_none() {
        let service = service_with_delay(Duration::ZERO);
        assert!(service.poll("no-such-session").await.is_none());
    }

    #[tokio::test]
    async fn test_turn_eventually_completes() {
        let service = service_with_delay(Duration::ZERO);

        let id = service.submit("What model are you?").await;
        let snapshot = wait_for_completion(&service, &id).await;

        assert!(!snapshot.response.is_empty());
        assert_eq!(snapshot.answer, snapshot.response);
    }

    #[tokio::test]
    async fn test_completion_is_stable_across_polls() {
        let service = service_with_delay(Duration::ZERO);

        let id = service.submit("What model are you?").await;
        let first = wait_for_completion(&service, &id).await;
        let second = service.poll(&id).await.unwrap();

        assert!(second.complete);
        assert_eq!(second.answer, first.answer);
    }

    #[tokio::test]
    async fn test_concurrent_sessions_do_not_interfere() {
        let service = service_with_delay(Duration::ZERO);

        let first = service.submit("What model are you?").await;
        let second = service.submit("What is the capital of China?").await;
        assert_ne!(first, second);

        let first_snapshot = wait_for_completion(&service, &first).await;
        let second_snapshot = wait_for_completion(&service, &second).await;

        assert!(first_snapshot.answer.contains("language model"));
        assert_eq!(second_snapshot.answer, "The capital of China is Beijing.");
        assert_eq!(service.session_count().await, 2);
    }
}
