// ABOUTME: Shared server resources, router assembly, and HTTP listener startup
// ABOUTME: Holds the startup configuration and the optional generation provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Server assembly
//!
//! [`ServerResources`] is constructed exactly once at startup and shared as
//! an `Arc` with every route. It carries the read-only configuration and the
//! optional generation provider; nothing in it mutates after construction,
//! so concurrent requests need no locking. Tests build resources with a fake
//! provider instead of touching the process environment.

use crate::{
    config::ServerConfig,
    errors::{AppError, AppResult},
    llm::GenerationProvider,
    routes::{AnalysisRoutes, ChatRoutes, HealthRoutes},
};
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Process-wide read-only state shared by all routes
pub struct ServerResources {
    /// Startup configuration
    pub config: ServerConfig,
    provider: Option<Arc<dyn GenerationProvider>>,
}

impl ServerResources {
    /// Create resources from configuration and an optional provider
    ///
    /// `provider` is `None` when no credential is configured; the POST
    /// endpoints then fail fast with a configuration error and never attempt
    /// an external call.
    #[must_use]
    pub fn new(config: ServerConfig, provider: Option<Arc<dyn GenerationProvider>>) -> Self {
        Self { config, provider }
    }

    /// Whether a generation provider is configured
    #[must_use]
    pub fn has_generation_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// The configured generation provider
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the credential was missing at
    /// startup.
    pub fn generation_provider(&self) -> AppResult<Arc<dyn GenerationProvider>> {
        self.provider
            .clone()
            .ok_or_else(|| AppError::config("GEMINI_API_KEY not configured"))
    }
}

/// Build the CORS layer from the configured origin list
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = cors_layer(&resources.config.cors_allowed_origins);
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AnalysisRoutes::routes(resources.clone()))
        .merge(ChatRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the HTTP listener and serve until the process is stopped
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server loop fails.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = format!(
        "{}:{}",
        resources.config.http_host, resources.config.http_port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("failed to bind {addr}: {e}")))?;

    info!("listening on {addr}");

    axum::serve(listener, router(resources))
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))
}
