//! MCP server over stdio.
//!
//! stdout carries only JSON-RPC responses; logs and diagnostics go to stderr.

pub mod handler;
pub mod protocol;
pub mod transport;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use gemini_llm::GeminiProvider;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::catalog::ServerCatalog;
use crate::config::Config;
use crate::tools::Dispatcher;

pub use handler::McpHandler;
pub use transport::serve;

/// Entry point shared by both binaries.
pub async fn run_main(catalog: ServerCatalog) -> Result<()> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    info!(
        model = %config.llm.model,
        tools = catalog.registry.len(),
        "starting {} v{}",
        catalog.name,
        catalog.version
    );

    let provider = Arc::new(GeminiProvider::new(config.llm)?);
    let dispatcher = Dispatcher::new(catalog.registry, provider);
    let handler = Arc::new(McpHandler::new(catalog.name, catalog.version, dispatcher));

    info!("{} running on stdio", catalog.name);
    serve(handler, tokio::io::stdin(), tokio::io::stdout()).await?;

    info!("{} stopped", catalog.name);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
