// ABOUTME: Main library entry point for the Solace wellness backend
// ABOUTME: Relays mood/journal history and chat messages to the Gemini API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

#![deny(unsafe_code)]

//! # Solace Backend
//!
//! A small HTTP relay between the Solace wellness frontend and Google's
//! Gemini API. It accepts a user's mood and journal history (or a single
//! chat message), composes natural-language prompts, and shapes the model's
//! free-text replies into typed JSON fields with fixed fallback behavior
//! when the model declines to answer.
//!
//! ## Architecture
//!
//! - **`intelligence::history`**: bounds history to the recent window and
//!   renders the plain-text blocks embedded in prompts
//! - **`llm::prompts`**: deterministic prompt composition per analysis mode
//! - **`llm`**: the gateway contract (`ModelOutput`, `GenerationProvider`)
//!   and the Gemini REST client
//! - **`intelligence::insights`**: shapes raw model text into response
//!   fields, including dash-list insight extraction
//! - **`routes`**: the `/analyze` and `/chat` handlers and the uniform error
//!   contract
//!
//! Every request is self-contained: no conversation state, no persistence,
//! no cross-request shared mutable state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use solace_backend::config::ServerConfig;
//! use solace_backend::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Solace backend configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment-only)
pub mod config;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// History rendering and response shaping
pub mod intelligence;

/// LLM provider abstraction, prompt composition, and the Gemini client
pub mod llm;

/// Wire-level request and response records
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Shared resources, router assembly, and listener startup
pub mod server;
