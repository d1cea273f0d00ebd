// ABOUTME: LLM gateway contract shared by the Gemini client and test fakes
// ABOUTME: Defines ModelOutput, generation parameters, and the provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! LLM provider abstraction
//!
//! The rest of the crate never touches a raw API response. A provider call
//! has exactly three outcomes:
//!
//! - `Ok(ModelOutput::Text(_))` — usable text came back;
//! - `Ok(ModelOutput::Empty)` — the call succeeded but produced no usable
//!   content (e.g. safety filtering), a defined outcome rather than an error;
//! - `Err(AppError)` — the call itself failed (network, auth, quota) and is
//!   never silently degraded to `Empty`.
//!
//! [`GenerationProvider`] is the seam for test injection: handlers hold a
//! `dyn GenerationProvider` and tests swap in a scripted fake.

pub mod gemini;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiClientConfig};

use crate::errors::AppResult;
use async_trait::async_trait;
use serde::Serialize;

/// Outcome of a successful provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    /// Usable text returned by the model
    Text(String),
    /// No usable content (blocked or empty candidates)
    Empty,
}

/// Sampling parameters forwarded to the model
///
/// Serializes to the Gemini `generationConfig` wire shape. Analysis calls
/// pass no parameters and rely on model defaults; chat uses [`Self::chat`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: i32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Hard cap on generated tokens
    pub max_output_tokens: i32,
}

impl GenerationParams {
    /// Parameters used for every chat call
    #[must_use]
    pub const fn chat() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// A configured text-generation capability
///
/// Stateless per call: one `generate` maps to exactly one external
/// invocation, with no retry, caching, or rate limiting.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text for `prompt`, optionally with explicit sampling params
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying call fails outright; blocked or
    /// empty model output is `Ok(ModelOutput::Empty)`, not an error.
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> AppResult<ModelOutput>;
}
