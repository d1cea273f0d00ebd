// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a scripted mock generation provider and JSON request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `solace_backend`
//!
//! The mock provider records every call (prompt and params) and answers from
//! a scripted responder, so tests can assert both what was sent to the
//! gateway and how its output was shaped.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use solace_backend::{
    config::ServerConfig,
    errors::{AppError, AppResult},
    llm::{GenerationParams, GenerationProvider, ModelOutput},
    server::ServerResources,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// One recorded gateway call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: Option<GenerationParams>,
}

type Responder = Box<dyn Fn(&str) -> AppResult<ModelOutput> + Send + Sync>;

/// Scripted in-memory generation provider
pub struct MockProvider {
    responder: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockProvider {
    /// Provider answering every prompt with the same text
    pub fn fixed(text: &str) -> Arc<Self> {
        let text = text.to_owned();
        Self::with_responder(move |_| Ok(ModelOutput::Text(text.clone())))
    }

    /// Provider answering every prompt with `ModelOutput::Empty`
    pub fn empty() -> Arc<Self> {
        Self::with_responder(|_| Ok(ModelOutput::Empty))
    }

    /// Provider failing every call with a gateway error
    pub fn failing(message: &str) -> Arc<Self> {
        let message = message.to_owned();
        Self::with_responder(move |_| Err(AppError::external_service("Gemini API", message.clone())))
    }

    /// Provider answering from a custom prompt-keyed responder
    pub fn with_responder(
        responder: impl Fn(&str) -> AppResult<ModelOutput> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Number of gateway calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of every recorded call
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: Option<&GenerationParams>,
    ) -> AppResult<ModelOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_owned(),
            params: params.copied(),
        });
        (self.responder)(prompt)
    }
}

/// Build server resources around an optional mock provider
pub fn test_resources(provider: Option<Arc<MockProvider>>) -> Arc<ServerResources> {
    let provider = provider.map(|p| p as Arc<dyn GenerationProvider>);
    Arc::new(ServerResources::new(ServerConfig::default(), provider))
}

/// GET a path and return the status plus decoded JSON response
pub async fn get_json(router: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// POST a JSON body and return the status plus decoded JSON response
pub async fn post_json(router: Router, path: &str, body: &Value) -> (StatusCode, Value) {
    let (status, bytes) = post_json_raw(router, path, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// POST a JSON body and return the status plus raw response bytes
pub async fn post_json_raw(router: Router, path: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}
