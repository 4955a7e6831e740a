// ABOUTME: Exercise form analysis engine for FormCoach
// ABOUTME: Joint angle math, visibility gating, rule-based form verdicts, and rep counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormCoach` Analysis
//!
//! Pure, synchronous building blocks evaluated once per landmark frame:
//!
//! - **angles**: angle at a joint, point distance, and the visibility gate
//! - **rules**: table-driven form verdicts per exercise
//! - **`rep_counter`**: hysteresis state machine with a dwell-time debounce
//! - **config**: analysis configuration and its validation errors

/// Joint angle math and visibility gating
pub mod angles;

/// Analysis configuration (visibility threshold, rep-counting presets)
pub mod config;

/// Repetition counting state machine
pub mod rep_counter;

/// Table-driven exercise form rules
pub mod rules;

pub use angles::{angle_between, distance, is_visible, AngleMeasurement};
pub use config::{AnalysisConfig, ConfigError, RepCounterConfig};
pub use rep_counter::{RepCounter, RepCounterState};
pub use rules::{AngleBand, FormRule, FormRules};
