// ABOUTME: Analysis configuration: visibility gating and per-exercise rep-counting presets
// ABOUTME: Validated before use; environment loading lives in the formcoach crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! Defaults reproduce the calibrated thresholds; every field can be overridden and
//! the whole configuration is checked with [`AnalysisConfig::validate`].

/// Configuration error types
pub mod error;

/// Rep-counting thresholds and dwell times
pub mod rep_counting;

pub use error::ConfigError;
pub use rep_counting::RepCounterConfig;

use formcoach_core::constants::visibility;
use formcoach_core::models::ExerciseKind;
use serde::{Deserialize, Serialize};

/// Settings for form evaluation and rep counting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Visibility score a landmark must exceed to be used
    pub visibility_threshold: f64,
    /// Squat counter calibration
    pub squat: RepCounterConfig,
    /// Push-up counter calibration
    pub push_up: RepCounterConfig,
    /// Sit-up counter calibration
    pub sit_up: RepCounterConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: visibility::DEFAULT_THRESHOLD,
            squat: RepCounterConfig::squat(),
            push_up: RepCounterConfig::push_up(),
            sit_up: RepCounterConfig::sit_up(),
        }
    }
}

impl AnalysisConfig {
    /// Counter calibration for an exercise, if it counts reps
    #[must_use]
    pub const fn rep_counter_for(&self, kind: ExerciseKind) -> Option<RepCounterConfig> {
        match kind {
            ExerciseKind::Squat => Some(self.squat),
            ExerciseKind::PushUp => Some(self.push_up),
            ExerciseKind::Plank => None,
        }
    }

    /// Validate every field
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the visibility threshold is outside
    /// `[0, 1]`, or `ConfigError::InvalidThresholds` if a counter's thresholds are
    /// not ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "visibility_threshold must be between 0.0 and 1.0",
            ));
        }
        self.squat.validate()?;
        self.push_up.validate()?;
        self.sit_up.validate()
    }
}
