// ABOUTME: Gemini REST API client implementing the GenerationProvider trait
// ABOUTME: Reduces generateContent responses to ModelOutput and logs prompt feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Gemini API client
//!
//! Thin client over the Gemini REST API (`generateContent` plus the model
//! listing used as a startup diagnostic). The credential travels as the
//! `key` query parameter; one shared [`reqwest::Client`] serves all calls.
//!
//! Responses are reduced to [`ModelOutput`] here and nowhere else: a reply
//! with candidate text is `Text`, a reply with no candidates or no parts
//! (safety filtering) is `Empty` with the `promptFeedback` payload logged at
//! WARN and kept out of the caller-facing response.

use crate::config::environment::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::config::GeminiConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{GenerationParams, GenerationProvider, ModelOutput};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Service name used in error messages for upstream failures
const SERVICE: &str = "Gemini API";

/// Gemini client configuration
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Model name (e.g. `gemini-2.5-flash`)
    pub model: String,
    /// Base URL of the REST API
    pub base_url: String,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }
}

// ---- wire types -----------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<&'a GenerationParams>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}

// ---- client ---------------------------------------------------------------

/// Gemini REST API client
pub struct GeminiClient {
    config: GeminiClientConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create a new client
    #[must_use]
    pub fn new(config: GeminiClientConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Build a client from server configuration
    ///
    /// Returns `None` when no API key is configured; the caller decides how
    /// to surface the missing-credential state (the handlers fail fast with
    /// a configuration error).
    #[must_use]
    pub fn from_server_config(gemini: &GeminiConfig) -> Option<Self> {
        gemini.api_key.as_ref().map(|key| {
            Self::new(GeminiClientConfig {
                api_key: key.clone(),
                model: gemini.model.clone(),
                base_url: gemini.base_url.clone(),
            })
        })
    }

    /// Model name this client generates with
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// List the models this credential can call `generateContent` on
    ///
    /// Startup diagnostic only; the result is logged and never drives
    /// behavior.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing request fails or the response
    /// cannot be decoded.
    pub async fn list_models(&self) -> AppResult<Vec<String>> {
        let url = format!("{}/models", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("key", &self.config.api_key)])
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                SERVICE,
                format!("model listing failed with HTTP {status}"),
            ));
        }

        let listing: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service(SERVICE, format!("JSON parse error: {e}")))?;

        Ok(listing
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name)
            .collect())
    }

    /// Reduce a decoded response to [`ModelOutput`]
    ///
    /// Joins the text parts of the first candidate, the same reading of the
    /// response the official SDKs use for `.text`.
    fn reduce(response: GenerateContentResponse) -> ModelOutput {
        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            warn!(
                feedback = ?response.prompt_feedback,
                "response blocked or empty"
            );
            ModelOutput::Empty
        } else {
            ModelOutput::Text(text)
        }
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> AppResult<ModelOutput> {
        if prompt.trim().is_empty() {
            return Err(AppError::invalid_input("Prompt cannot be empty"));
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: params,
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "generateContent call");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", &self.config.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                SERVICE,
                format!("generateContent failed with HTTP {status}"),
            ));
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service(SERVICE, format!("JSON parse error: {e}")))?;

        Ok(Self::reduce(decoded))
    }
}
