// ABOUTME: Route module organization for the Solace backend HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers per route struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! HTTP routes
//!
//! Each domain module exposes a unit struct whose `routes()` constructor
//! returns an [`axum::Router`] over shared [`crate::server::ServerResources`].
//! Handlers stay thin: they validate configuration, delegate to the
//! intelligence and llm layers, and translate failures into the uniform
//! [`crate::errors::AppError`] contract.

/// Health check route
pub mod health;

/// Mood/journal analysis route
pub mod analysis;

/// Chat relay route
pub mod chat;

pub use analysis::AnalysisRoutes;
pub use chat::ChatRoutes;
pub use health::HealthRoutes;
