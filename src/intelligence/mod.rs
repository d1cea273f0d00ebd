// ABOUTME: Intelligence module organization for history rendering and response shaping
// ABOUTME: Pure transformations between caller history, prompt text, and typed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Analysis intelligence
//!
//! Two pure halves of the pipeline live here: [`history`] renders caller
//! history into the bounded text blocks fed to the prompt composer, and
//! [`insights`] shapes raw model output back into the typed response fields.

pub mod history;
pub mod insights;
