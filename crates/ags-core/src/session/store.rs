//! In-memory session store
//!
//! A single map guarded by an RwLock. Every mutation replaces the
//! (response, answer, complete) triple under the write lock as one unit, so
//! pollers never observe a torn write. The store is constructed once at
//! startup and shared via `Arc`; it never evicts sessions.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::session::{Session, SessionSnapshot};

/// Concurrent store mapping session ids to session state
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty session and return its id
    pub async fn create(&self) -> String {
        let session = Session::new();
        let id = session.id.clone();

        let mut sessions = self.sessions.write().await;
        sessions.insert(id.clone(), session);
        debug!("Created session: {}", id);

        id
    }

    /// Snapshot the current state of a session, or `None` for an unknown id
    pub async fn get(&self, id: &str) -> Option<SessionSnapshot> {
        let sessions = self.sessions.read().await;
        sessions.get(id).map(Session::snapshot)
    }

    /// Replace a session's (response, answer, complete) triple atomically.
    ///
    /// Returns `Error::SessionNotFound` for an unknown id; a session is never
    /// created as a side effect of an update. Writes against an already
    /// completed session are ignored so `complete` never reverts.
    pub async fn update(
        &self,
        id: &str,
        response: String,
        answer: String,
        complete: bool,
    ) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;

        if session.complete {
            debug!("Ignoring late update for completed session: {}", id);
            return Ok(());
        }

        session.response = response;
        session.answer = answer;
        session.complete = complete;
        session.updated_at = chrono::Utc::now();

        Ok(())
    }

    /// Number of tracked sessions
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// Whether the store has no sessions
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_starts_empty_and_incomplete() {
        let store = SessionStore::new();
        let id = store.create().await;

        let snapshot = store.get(&id).await.unwrap();
        assert_eq!(snapshot.id, id);
        assert!(snapshot.response.is_empty());
        assert!(snapshot.answer.is_empty());
        assert!(!snapshot.complete);
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.get("no-such-session").await.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_triple() {
        let store = SessionStore::new();
        let id = store.create().await;

        store
            .update(&id, "partial".to_string(), String::new(), false)
            .await
            .unwrap();
        let snapshot = store.get(&id).await.unwrap();
        assert_eq!(snapshot.response, "partial");
        assert!(!snapshot.complete);

        store
            .update(&id, "full text".to_string(), "answer".to_string(), true)
            .await
            .unwrap();
        let snapshot = store.get(&id).await.unwrap();
        assert_eq!(snapshot.response, "full text");
        assert_eq!(snapshot.answer, "answer");
        assert!(snapshot.complete);
    }

    #[tokio::test]
    async fn test_update_unknown_session_fails() {
        let store = SessionStore::new();
        let result = store
            .update("no-such-session", "text".to_string(), String::new(), false)
            .await;
        assert!(matches!(result, Err(Error::SessionNotFound(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_complete_is_monotonic() {
        let store = SessionStore::new();
        let id = store.create().await;

        store
            .update(&id, "done".to_string(), "done".to_string(), true)
            .await
            .unwrap();

        // A straggling partial write after completion is tolerated but ignored.
        store
            .update(&id, "late partial".to_string(), String::new(), false)
            .await
            .unwrap();

        let snapshot = store.get(&id).await.unwrap();
        assert!(snapshot.complete);
        assert_eq!(snapshot.response, "done");
        assert_eq!(snapshot.answer, "done");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let first = store.create().await;
        let second = store.create().await;
        assert_ne!(first, second);

        store
            .update(&first, "first response".to_string(), String::new(), false)
            .await
            .unwrap();

        let untouched = store.get(&second).await.unwrap();
        assert!(untouched.response.is_empty());
        assert!(!untouched.complete);
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_distinct_ids() {
        let store = std::sync::Arc::new(SessionStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.create().await }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 16);
        assert_eq!(store.len().await, 16);
    }
}
