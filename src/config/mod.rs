// ABOUTME: Configuration module organization for the Solace backend
// ABOUTME: Exposes environment-variable based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Configuration management
//!
//! Configuration is environment-only: [`environment::ServerConfig::from_env`]
//! is called once at process start and the resulting value is passed into the
//! server resources explicitly. No component reads the environment after
//! startup.

pub mod environment;

pub use environment::{GeminiConfig, ServerConfig};
