// ABOUTME: Tests for deterministic prompt composition per analysis mode
// ABOUTME: Pins the load-bearing dash-format instruction in the insights prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use solace_backend::llm::prompts::{
    insights_prompt, mood_analysis_prompt, simplified_summary_prompt, weekly_summary_prompt,
};

const MOOD_BLOCK: &str = "Recent Moods:\n- 2026-08-01: calm (score: 7)\n";
const JOURNAL_BLOCK: &str = "Recent Journal Entries:\n- 2026-08-01: Slept well....\n";

#[test]
fn test_composition_is_deterministic() {
    assert_eq!(
        simplified_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK),
        simplified_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK)
    );
    assert_eq!(
        weekly_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK),
        weekly_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK)
    );
    assert_eq!(
        mood_analysis_prompt(MOOD_BLOCK),
        mood_analysis_prompt(MOOD_BLOCK)
    );
    assert_eq!(
        insights_prompt(MOOD_BLOCK, JOURNAL_BLOCK),
        insights_prompt(MOOD_BLOCK, JOURNAL_BLOCK)
    );
}

#[test]
fn test_simplified_prompt_requests_short_summary() {
    let prompt = simplified_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK);
    assert!(prompt.contains("2-3 sentence"));
    assert!(prompt.contains(MOOD_BLOCK));
    assert!(prompt.contains(JOURNAL_BLOCK));
}

#[test]
fn test_weekly_prompt_requests_patterns_and_support() {
    let prompt = weekly_summary_prompt(MOOD_BLOCK, JOURNAL_BLOCK);
    assert!(prompt.contains("patterns"));
    assert!(prompt.contains("emotional journey"));
    assert!(prompt.contains("supportive"));
    assert!(prompt.contains(MOOD_BLOCK));
    assert!(prompt.contains(JOURNAL_BLOCK));
}

#[test]
fn test_mood_analysis_prompt_covers_required_angles() {
    let prompt = mood_analysis_prompt(MOOD_BLOCK);
    assert!(prompt.contains("1. Overall emotional trends"));
    assert!(prompt.contains("2. Triggers or patterns"));
    assert!(prompt.contains("3. Areas of growth"));
    assert!(prompt.contains("4. Recommendations for well-being"));
    assert!(prompt.contains(MOOD_BLOCK));
    // Mood analysis works from mood history alone
    assert!(!prompt.contains("Recent Journal Entries:"));
}

#[test]
fn test_insights_prompt_carries_dash_format_instruction() {
    // The response shaper extracts exactly the dash-prefixed lines, so this
    // instruction is load-bearing
    let prompt = insights_prompt(MOOD_BLOCK, JOURNAL_BLOCK);
    assert!(prompt.contains("one per line"));
    assert!(prompt.contains("dash (-)"));
    assert!(prompt.contains("3-5 key insights"));
}
