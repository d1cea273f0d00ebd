// ABOUTME: Server binary wiring configuration, logging, and the HTTP listener
// ABOUTME: Runs the startup model-listing diagnostic before serving requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Solace backend server binary

use anyhow::Result;
use clap::Parser;
use solace_backend::{
    config::ServerConfig,
    llm::{GeminiClient, GenerationProvider},
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Solace wellness backend - mood/journal analysis and chat relay
#[derive(Debug, Parser)]
#[command(name = "solace-backend", version, about)]
struct Args {
    /// Bind port (overrides HTTP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Bind host (overrides HTTP_HOST)
    #[arg(long)]
    host: Option<String>,
}

/// Log which models the configured credential can generate with
///
/// Diagnostic only: a failure here is logged and does not prevent startup.
async fn check_models(client: &GeminiClient) {
    info!("checking available models for this API key");
    match client.list_models().await {
        Ok(models) => info!("available models: {models:?}"),
        Err(e) => error!("failed to list models: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }

    let provider: Option<Arc<dyn GenerationProvider>> =
        match GeminiClient::from_server_config(&config.gemini) {
            Some(client) => {
                info!(model = client.model(), "Gemini provider configured");
                check_models(&client).await;
                Some(Arc::new(client))
            }
            None => {
                error!("GEMINI_API_KEY is missing. Please check your environment.");
                None
            }
        };

    let resources = Arc::new(ServerResources::new(config, provider));
    server::serve(resources).await?;
    Ok(())
}
