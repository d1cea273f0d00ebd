// ABOUTME: Analysis route handler turning mood/journal history into typed AI fields
// ABOUTME: Wires history summarizer, prompt composer, gateway calls, and response shaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Analysis route
//!
//! `POST /analyze` accepts the full mood/journal history and the requested
//! analysis mode. Simplified mode issues one model call; detailed mode issues
//! three independent calls (summary, mood analysis, insights) concurrently
//! and merges after all return. Each request is self-contained — nothing is
//! persisted and no conversation state exists.

use crate::{
    errors::AppError,
    intelligence::{
        history,
        insights::{
            resolve_text, shape_insights, MOOD_ANALYSIS_FALLBACK, SIMPLIFIED_SUMMARY_FALLBACK,
            WEEKLY_SUMMARY_FALLBACK,
        },
    },
    llm::prompts,
    models::{AnalysisMode, AnalysisRequest, AnalysisResponse},
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

/// Analysis routes
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create the analysis router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analyze", post(Self::handle_analyze))
            .with_state(resources)
    }

    /// Handle an analysis request
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AnalysisRequest>,
    ) -> Result<Response, AppError> {
        let provider = resources.generation_provider()?;

        info!(
            mode = ?request.mode,
            moods = request.mood_history.len(),
            journals = request.journal_history.len(),
            "analysis request"
        );

        let mood_block = history::mood_block(&request.mood_history);
        let journal_block = history::journal_block(&request.journal_history);

        let response = match request.mode {
            AnalysisMode::Simplified => {
                let prompt = prompts::simplified_summary_prompt(&mood_block, &journal_block);
                let output = provider.generate(&prompt, None).await?;
                AnalysisResponse {
                    weekly_summary: resolve_text(output, SIMPLIFIED_SUMMARY_FALLBACK),
                    mood_analysis: String::new(),
                    insights: Vec::new(),
                }
            }
            AnalysisMode::Detailed => {
                let summary_prompt = prompts::weekly_summary_prompt(&mood_block, &journal_block);
                let analysis_prompt = prompts::mood_analysis_prompt(&mood_block);
                let insights_prompt = prompts::insights_prompt(&mood_block, &journal_block);

                // The three calls carry no data dependency on each other;
                // results merge only after all return.
                let (summary, analysis, insights) = tokio::try_join!(
                    provider.generate(&summary_prompt, None),
                    provider.generate(&analysis_prompt, None),
                    provider.generate(&insights_prompt, None),
                )?;

                AnalysisResponse {
                    weekly_summary: resolve_text(summary, WEEKLY_SUMMARY_FALLBACK),
                    mood_analysis: resolve_text(analysis, MOOD_ANALYSIS_FALLBACK),
                    insights: shape_insights(insights),
                }
            }
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
