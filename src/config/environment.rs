// ABOUTME: Environment-variable configuration loading for server and Gemini settings
// ABOUTME: Reads GEMINI_* and HTTP settings once at startup into typed config structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Environment configuration
//!
//! | Variable               | Default                                            |
//! |------------------------|----------------------------------------------------|
//! | `GEMINI_API_KEY`       | unset (endpoints fail fast with a config error)    |
//! | `GEMINI_MODEL`         | `gemini-2.5-flash`                                 |
//! | `GEMINI_BASE_URL`      | `https://generativelanguage.googleapis.com/v1beta` |
//! | `HTTP_HOST`            | `0.0.0.0`                                          |
//! | `HTTP_PORT`            | `8000`                                             |
//! | `CORS_ALLOWED_ORIGINS` | the local dev frontend ports                       |

use crate::errors::{AppError, AppResult};
use std::env;

/// Default Gemini model used for both analysis and chat
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Frontend dev-server origins allowed by default
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://localhost:3004",
];

/// Gemini API settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential; `None` disables the analysis and chat endpoints
    pub api_key: Option<String>,
    /// Model name requested for generation
    pub model: String,
    /// Base URL of the Gemini REST API
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }
}

/// Full server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    pub http_host: String,
    /// Bind port for the HTTP listener
    pub http_port: u16,
    /// Origins allowed by the CORS layer
    pub cors_allowed_origins: Vec<String>,
    /// Gemini settings
    pub gemini: GeminiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".to_owned(),
            http_port: 8000,
            cors_allowed_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .map(|&o| o.to_owned())
                .collect(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// An empty `GEMINI_API_KEY` is treated the same as an unset one: the
    /// server still starts, but both POST endpoints return a configuration
    /// error without attempting any external call.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `HTTP_PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("HTTP_PORT is not a valid port: {raw}")))?,
            Err(_) => defaults.http_port,
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").map_or(
            defaults.cors_allowed_origins,
            |raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_owned)
                    .collect()
            },
        );

        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port,
            cors_allowed_origins,
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini.base_url),
            },
        })
    }
}
