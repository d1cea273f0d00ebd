// ABOUTME: Prompt composition for weekly summary, mood analysis, and insights
// ABOUTME: Deterministic text builders over the rendered history blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Prompt composition
//!
//! One builder per prompt the analysis pipeline sends. All builders are
//! deterministic over their inputs; any non-determinism in the pipeline
//! comes from the model, never from composition. Chat sends the raw user
//! message and has no builder here.
//!
//! The dash-format instruction in [`insights_prompt`] is load-bearing: the
//! response shaper extracts exactly the lines the model prefixes with `-`.

/// Prompt for the simplified (2-3 sentence) weekly summary
#[must_use]
pub fn simplified_summary_prompt(mood_block: &str, journal_block: &str) -> String {
    format!(
        "Based on this mood and journal data, provide a brief, compassionate \
         2-3 sentence weekly summary:\n\n\
         {mood_block}\n\
         {journal_block}\n\
         Keep it concise, warm, and encouraging. Focus on the overall emotional journey."
    )
}

/// Prompt for the detailed weekly summary
#[must_use]
pub fn weekly_summary_prompt(mood_block: &str, journal_block: &str) -> String {
    format!(
        "Based on this mood and journal data from the past week, provide a \
         compassionate weekly summary:\n\n\
         {mood_block}\n\
         {journal_block}\n\
         Focus on patterns, emotional journey, and gentle observations. \
         Be supportive and insightful."
    )
}

/// Prompt for the mood-pattern analysis (mood history only)
#[must_use]
pub fn mood_analysis_prompt(mood_block: &str) -> String {
    format!(
        "Analyze these mood patterns and provide detailed insights:\n\n\
         {mood_block}\n\
         Consider:\n\
         1. Overall emotional trends\n\
         2. Triggers or patterns\n\
         3. Areas of growth\n\
         4. Recommendations for well-being\n\n\
         Be specific and actionable but gentle. Provide deeper psychological insights."
    )
}

/// Prompt for the actionable-insights list
#[must_use]
pub fn insights_prompt(mood_block: &str, journal_block: &str) -> String {
    format!(
        "Based on this data, extract 3-5 key insights for personal growth:\n\n\
         {mood_block}\n\
         {journal_block}\n\
         Format as a list of actionable insights, one per line, \
         each line starting with a dash (-)."
    )
}
