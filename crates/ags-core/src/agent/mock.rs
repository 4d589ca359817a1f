//! Deterministic mock backend
//!
//! Stands in whenever no LLM API key is configured, so the server comes up
//! and answers without a live backend. Replies are canned and streamed word
//! by word to exercise the partial-update path.

use std::time::Duration;

use async_trait::async_trait;

use crate::agent::{AgentBackend, TurnOutcome, TurnSink};
use crate::error::Result;

/// Canned-reply backend with a configurable inter-word delay
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    /// Create a mock backend with the default 100ms inter-word delay
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(100),
        }
    }

    /// Create a mock backend with a custom inter-word delay (zero in tests)
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn reply_for(input: &str) -> String {
        let lower = input.to_lowercase();
        if lower.contains("model") && lower.contains("are you") {
            "I am a language model assistant powered by AI. How can I help you?".to_string()
        } else if lower.contains("capital") && lower.contains("china") {
            "The capital of China is Beijing.".to_string()
        } else {
            format!("I understand you're asking: {}. I am an AI assistant ready to help.", input)
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentBackend for MockBackend {
    async fn run_turn(&self, input: &str, sink: &dyn TurnSink) -> Result<TurnOutcome> {
        let reply = Self::reply_for(input);

        let mut partial = String::new();
        for word in reply.split_whitespace() {
            if !partial.is_empty() {
                partial.push(' ');
            }
            partial.push_str(word);
            sink.partial(&partial).await;

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(TurnOutcome {
            response: reply.clone(),
            answer: reply,
        })
    }
}
