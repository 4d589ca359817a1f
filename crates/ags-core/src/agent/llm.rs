//! LLM backend over an OpenAI-compatible HTTP API
//!
//! Sends one non-streaming chat completion per turn; the completion text is
//! surfaced as the terminal outcome, with no partial chunks.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agent::{AgentBackend, TurnOutcome, TurnSink};
use crate::config::LlmConfig;
use crate::error::{Error, Result};

/// Backend driving an OpenAI-compatible `/chat/completions` endpoint
pub struct LlmBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

impl LlmBackend {
    /// Create a new LLM backend from configuration.
    ///
    /// Fails when no API key is configured; callers fall back to the mock
    /// backend in that case.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("LLM_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn chat_completion(&self, input: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!("Sending chat completion request to: {}", url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: input.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Http)?;

        if !status.is_success() {
            warn!("LLM API error: {} - {}", status, body);
            return Err(Error::Backend(format!("{}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Backend(format!("Failed to parse response: {} - {}", e, body)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Backend("Response contained no choices".to_string()))?;

        info!("LLM API response: {} bytes", text.len());

        Ok(text)
    }
}

#[async_trait]
impl AgentBackend for LlmBackend {
    async fn run_turn(&self, input: &str, _sink: &dyn TurnSink) -> Result<TurnOutcome> {
        let text = self.chat_completion(input).await?;
        Ok(TurnOutcome {
            response: text.clone(),
            answer: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let config = LlmConfig::default();
        assert!(matches!(LlmBackend::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = LlmConfig {
            api_key: Some("key".to_string()),
            base_url: "http://localhost:8321/v1/".to_string(),
            ..LlmConfig::default()
        };
        let backend = LlmBackend::new(&config).unwrap();
        assert_eq!(backend.base_url, "http://localhost:8321/v1");
    }

    #[test]
    fn test_parse_completion_response() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Beijing."}}
            ]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Beijing.");
    }
}
