// ABOUTME: Chat route handler relaying a single user message to the model
// ABOUTME: Applies chat generation parameters and the chat fallback on blocked output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Chat route
//!
//! `POST /chat` forwards the raw user message to the model — no
//! summarization, no prompt composition, no conversation history — with the
//! fixed chat sampling parameters. A blocked or empty reply becomes the chat
//! fallback string, never a missing field.

use crate::{
    errors::AppError,
    intelligence::insights::{resolve_text, CHAT_FALLBACK},
    llm::GenerationParams,
    models::{ChatRequest, ChatResponse},
    server::ServerResources,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Chat routes
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/chat", post(Self::handle_chat))
            .with_state(resources)
    }

    /// Handle a chat request
    async fn handle_chat(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ChatRequest>,
    ) -> Result<Response, AppError> {
        let provider = resources.generation_provider()?;

        info!(message_chars = request.message.len(), "chat request");

        let output = provider
            .generate(&request.message, Some(&GenerationParams::chat()))
            .await?;

        let response = ChatResponse {
            reply: resolve_text(output, CHAT_FALLBACK),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
