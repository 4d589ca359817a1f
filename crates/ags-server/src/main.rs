//! ags-server: Agentic Chat-Turn Server Main Binary
//!
//! Usage:
//!   ags-server           - Start the HTTP API server
//!   ags-server --help    - Show help

use std::sync::Arc;

use ags_core::{AgentBackend, Config, LlmBackend, MockBackend, SessionService};
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// HTTP API server
    Server,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("ags-server {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting ags-server...");
    tracing::info!("Model: {}", config.llm.model);

    run_server(config).await
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("ags-server - Agentic Chat-Turn Server");
    println!();
    println!("Usage:");
    println!("  ags-server           Start the HTTP API server");
    println!("  ags-server --help    Show this help message");
    println!("  ags-server --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  LLM_API_KEY          LLM API key (unset: deterministic mock backend)");
    println!("  LLM_MODEL            Model name (default: ollama/qwen3:4b)");
    println!("  LLM_BASE_URL         OpenAI-compatible endpoint (default: http://0.0.0.0:8321/v1)");
    println!("  AGS_API_PORT         HTTP API port (default: 8000)");
    println!("  AGS_API_KEY          API key for the chat endpoints (optional)");
}

/// Run the HTTP API server until Ctrl+C
async fn run_server(config: Config) -> anyhow::Result<()> {
    let backend: Arc<dyn AgentBackend> = if config.llm.api_key.is_some() {
        tracing::info!("Using LLM backend at {}", config.llm.base_url);
        Arc::new(
            LlmBackend::new(&config.llm)
                .map_err(|e| anyhow::anyhow!("Failed to create LLM backend: {}", e))?,
        )
    } else {
        tracing::warn!("LLM_API_KEY not set, using deterministic mock backend");
        Arc::new(MockBackend::new())
    };

    let service = SessionService::new(backend);

    let api_port = config.api.port;
    let handle = tokio::spawn(async move {
        if let Err(e) = ags_api::start_server(config, service).await {
            tracing::error!("HTTP API error: {}", e);
        }
    });
    tracing::info!("HTTP API server started on port {}", api_port);

    tracing::info!("ags-server initialized successfully");
    tracing::info!("Press Ctrl+C to exit");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    handle.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}
