//! Configuration management
//!
//! Settings are read from environment variables with sensible defaults.
//! The binary loads a `.env` file via dotenvy before calling `from_env`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// LLM backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; when absent the deterministic mock backend is used
    pub api_key: Option<String>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "ollama/qwen3:4b".to_string()
}

fn default_base_url() -> String {
    "http://0.0.0.0:8321/v1".to_string()
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key for HTTP API authentication; unset means open access
    pub key: Option<String>,

    /// Port for the HTTP API server
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            port: default_api_port(),
        }
    }
}

fn default_api_port() -> u16 {
    8000
}

/// Main configuration for the agentic server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// LLM backend configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// HTTP API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let llm = LlmConfig {
            api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("LLM_MODEL")
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(default_model),
            base_url: std::env::var("LLM_BASE_URL")
                .ok()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(default_base_url),
        };

        let port = match std::env::var("AGS_API_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid AGS_API_PORT: {}", raw)))?,
            Err(_) => default_api_port(),
        };

        let api = ApiConfig {
            key: std::env::var("AGS_API_KEY").ok().filter(|k| !k.is_empty()),
            port,
        };

        Ok(Config { llm, api })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.model, "ollama/qwen3:4b");
        assert_eq!(config.llm.base_url, "http://0.0.0.0:8321/v1");
        assert!(config.api.key.is_none());
        assert_eq!(config.api.port, 8000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"api": {"key": "secret"}}"#).unwrap();
        assert_eq!(parsed.api.key.as_deref(), Some("secret"));
        assert_eq!(parsed.api.port, 8000);
        assert_eq!(parsed.llm.model, "ollama/qwen3:4b");
    }
}
