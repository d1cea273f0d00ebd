// ABOUTME: History summarizer rendering mood and journal entries into text blocks
// ABOUTME: Bounds history to the last seven entries and truncates journal content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! History summarization
//!
//! Renders caller-supplied history into the plain-text blocks embedded in
//! prompts. Both renderers are pure: they take the last [`HISTORY_WINDOW`]
//! entries in arrival order (the caller's ordering is trusted, entries are
//! not re-sorted by timestamp) and produce one header line plus one line per
//! entry. Empty input produces the header line only.

use crate::models::{JournalEntry, MoodEntry};
use std::fmt::Write;

/// Number of recent entries included in each block
pub const HISTORY_WINDOW: usize = 7;

/// Journal content is cut to this many characters in the rendered line
pub const JOURNAL_PREVIEW_CHARS: usize = 200;

/// Last `HISTORY_WINDOW` elements of a slice, in place
fn recent<T>(entries: &[T]) -> &[T] {
    let start = entries.len().saturating_sub(HISTORY_WINDOW);
    &entries[start..]
}

/// Render the mood block: `- <timestamp>: <mood> (score: <score>)` per entry
#[must_use]
pub fn mood_block(entries: &[MoodEntry]) -> String {
    let mut block = String::from("Recent Moods:\n");
    for entry in recent(entries) {
        // Write into a String cannot fail
        let _ = writeln!(
            block,
            "- {}: {} (score: {})",
            entry.timestamp, entry.mood, entry.score
        );
    }
    block
}

/// Render the journal block: `- <date>: <first 200 chars>...` per entry
///
/// Truncation counts characters, not bytes, and is not word-aware. The `...`
/// marker is appended unconditionally, even when the content is shorter than
/// the preview length; the frontend renders the line as an elided preview
/// either way.
#[must_use]
pub fn journal_block(entries: &[JournalEntry]) -> String {
    let mut block = String::from("Recent Journal Entries:\n");
    for entry in recent(entries) {
        let preview: String = entry.content.chars().take(JOURNAL_PREVIEW_CHARS).collect();
        let _ = writeln!(block, "- {}: {preview}...", entry.date);
    }
    block
}
