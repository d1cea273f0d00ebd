// ABOUTME: Health check route reporting service liveness and provider configuration
// ABOUTME: Returns service name, version, and whether a generation credential is set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Health check route

use crate::server::ServerResources;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Liveness probe; also reports whether the model credential is configured
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> impl IntoResponse {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "model_configured": resources.has_generation_provider(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}
