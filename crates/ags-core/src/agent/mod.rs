//! Agent backends and turn execution
//!
//! The executor treats a backend as opaque: it may report any number of
//! partial chunks through a [`TurnSink`], then returns exactly one terminal
//! [`TurnOutcome`]. Exactly-once completion is enforced by the executor, not
//! by backend implementations.

mod executor;
mod llm;
mod mock;

pub use executor::TurnExecutor;
pub use llm::LlmBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Receiver for incremental turn output
#[async_trait]
pub trait TurnSink: Send + Sync {
    /// Report the cumulative response text produced so far
    async fn partial(&self, text: &str);
}

/// Terminal result of one agent turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Full accumulated response, including intermediate chatter
    pub response: String,
    /// Distilled final answer (may be empty)
    pub answer: String,
}

/// Opaque agent computation for a single turn
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Run one turn for the given input.
    ///
    /// Implementations may call `sink.partial` any number of times with the
    /// cumulative text so far before returning the terminal outcome.
    async fn run_turn(&self, input: &str, sink: &dyn TurnSink) -> Result<TurnOutcome>;
}
