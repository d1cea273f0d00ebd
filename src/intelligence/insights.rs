// ABOUTME: Response shaper converting raw model output into typed response fields
// ABOUTME: Holds the fixed per-field fallback strings and dash-list insight extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Response shaping
//!
//! The model returns free text (or nothing, when safety filtering blocks the
//! reply). Shaping is two separate stages and the distinction matters:
//!
//! 1. [`resolve_text`] turns [`ModelOutput`] into a string, substituting the
//!    field's fixed fallback only for [`ModelOutput::Empty`].
//! 2. [`extract_insights`] parses dash-marker lines out of resolved text. A
//!    text reply containing no dash lines extracts to an empty list, not to
//!    the fallback.
//!
//! The fallback strings are part of the observable API contract and must not
//! be reworded.
//!
//! The dash-prefix rule depends on the model obeying the formatting
//! instruction in the insights prompt. It is deliberately isolated here so a
//! structured-output mode could replace it without touching the handlers.

use crate::llm::ModelOutput;
use tracing::warn;

/// Fallback for the simplified weekly summary
pub const SIMPLIFIED_SUMMARY_FALLBACK: &str =
    "This week had its moments of growth and reflection.";

/// Fallback for the detailed weekly summary
pub const WEEKLY_SUMMARY_FALLBACK: &str = "Unable to generate summary this week.";

/// Fallback for the mood analysis field
pub const MOOD_ANALYSIS_FALLBACK: &str = "Unable to analyze mood patterns.";

/// Fallback text resolved for the insights field before extraction
pub const INSIGHTS_FALLBACK: &str = "No insights available.";

/// Fallback for the chat reply
pub const CHAT_FALLBACK: &str = "I'm sorry, I couldn't generate a response for that request.";

/// Maximum number of insights returned to the caller
pub const MAX_INSIGHTS: usize = 5;

/// Resolve model output to text, substituting `fallback` for blocked/empty output
#[must_use]
pub fn resolve_text(output: ModelOutput, fallback: &str) -> String {
    match output {
        ModelOutput::Text(text) => text,
        ModelOutput::Empty => {
            warn!("model returned no usable output, substituting fallback");
            fallback.to_owned()
        }
    }
}

/// Extract up to [`MAX_INSIGHTS`] dash-marker lines from resolved text
///
/// A line qualifies when its whitespace-trimmed form starts with `-`; kept
/// items are the trimmed lines, dash marker included. Zero qualifying lines
/// yield an empty list.
#[must_use]
pub fn extract_insights(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .map(str::to_owned)
        .take(MAX_INSIGHTS)
        .collect()
}

/// Shape the insights field from raw model output
///
/// `Empty` resolves to [`INSIGHTS_FALLBACK`] first and the extraction rule
/// then runs over the resolved text; since the fallback contains no dash
/// line, blocked output is observably an empty list, by a different path
/// than a text reply that simply contains no dash lines.
#[must_use]
pub fn shape_insights(output: ModelOutput) -> Vec<String> {
    extract_insights(&resolve_text(output, INSIGHTS_FALLBACK))
}
