//! ags-core: Agentic Server Core Library
//!
//! Session lifecycle, turn execution and the agent backend seam for the
//! asynchronous chat-turn service. A client submits text, gets a session id
//! back immediately, and polls for incremental and final output while the
//! turn runs in the background.

pub mod agent;
pub mod config;
pub mod error;
pub mod service;
pub mod session;

pub use agent::{AgentBackend, LlmBackend, MockBackend, TurnExecutor, TurnOutcome, TurnSink};
pub use config::{ApiConfig, Config, LlmConfig};
pub use error::{Error, Result};
pub use service::SessionService;
pub use session::{Session, SessionSnapshot, SessionStore};
