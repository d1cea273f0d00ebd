// ABOUTME: Request and response records for the analysis and chat endpoints
// ABOUTME: Mirrors the JSON contract consumed by the Solace web frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Wire-level data model
//!
//! Every entity here is constructed at request entry, consumed synchronously,
//! and discarded once the response is emitted; nothing persists across
//! requests. History entries are immutable caller-supplied records and their
//! ordering is trusted as arrival order.

use serde::{Deserialize, Serialize};

/// A single logged mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Short mood label (e.g. "calm", "anxious")
    pub mood: String,
    /// Numeric mood score
    pub score: i64,
    /// Caller-supplied timestamp string
    pub timestamp: String,
    /// Detected emotion label, if the frontend ran emotion scanning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_label: Option<String>,
    /// Detection confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_confidence: Option<f64>,
}

/// A single journal entry
///
/// The frontend stores these fields camelCase; the renames keep the wire
/// names intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry date string
    pub date: String,
    /// Full journal text
    pub content: String,
    /// Word count as computed by the editor
    #[serde(rename = "wordCount")]
    pub word_count: i64,
    /// Character count as computed by the editor
    #[serde(rename = "charCount")]
    pub char_count: i64,
    /// Last-modified timestamp string
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Requested depth of analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// One short weekly summary only
    Simplified,
    /// Weekly summary, mood analysis, and extracted insights
    #[default]
    Detailed,
}

/// Request body for `POST /analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Mood history in arrival order
    pub mood_history: Vec<MoodEntry>,
    /// Journal history in arrival order
    pub journal_history: Vec<JournalEntry>,
    /// Analysis depth, defaults to detailed when absent
    #[serde(default)]
    pub mode: AnalysisMode,
}

/// Response body for `POST /analyze`
///
/// All fields are always present: absent model output maps to a fixed
/// fallback string, never to null. `mood_analysis` is empty and `insights`
/// is empty in simplified mode; `insights` never exceeds five items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Compassionate summary of the recent week
    pub weekly_summary: String,
    /// Detailed mood-pattern analysis (empty string in simplified mode)
    pub mood_analysis: String,
    /// Up to five actionable insights (empty in simplified mode)
    pub insights: Vec<String>,
}

/// Request body for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw user message, forwarded to the model untouched
    pub message: String,
}

/// Response body for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model reply, or the chat fallback when output was blocked
    pub reply: String,
}
