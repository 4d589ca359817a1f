//! Session types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracked state of a single chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// Accumulated response text so far (may include intermediate chatter)
    pub response: String,
    /// Finalized answer, populated only at completion
    pub answer: String,
    /// Whether the turn has finished; transitions false -> true exactly once
    pub complete: bool,
    /// Session creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new empty, incomplete session with a fresh id
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            response: String::new(),
            answer: String::new(),
            complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Take an immutable snapshot of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            response: self.response.clone(),
            answer: self.answer.clone(),
            complete: self.complete,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable read of a session's (response, answer, complete) state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub response: String,
    pub answer: String,
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = Session::new();
        assert!(!session.id.is_empty());
        assert!(session.response.is_empty());
        assert!(session.answer.is_empty());
        assert!(!session.complete);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = Session::new();
        session.response = "partial text".to_string();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.id, session.id);
        assert_eq!(snapshot.response, "partial text");
        assert!(!snapshot.complete);
    }
}
