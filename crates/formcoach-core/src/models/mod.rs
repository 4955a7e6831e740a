// ABOUTME: Core data models for exercise form analysis
// ABOUTME: Re-exports landmark, exercise, and feedback types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the analysis engine and its callers.
//!
//! Everything here is ephemeral: landmarks arrive once per frame from an external
//! pose model and feedback is consumed immediately by the presentation layer.

/// Tracked body points and per-frame landmark sets
mod landmark;

/// Exercise kinds and movement phases
mod exercise;

/// Per-frame form verdicts
mod feedback;

pub use exercise::{ExerciseKind, ExercisePhase};
pub use feedback::FeedbackResult;
pub use landmark::{Landmark, LandmarkFrame};
