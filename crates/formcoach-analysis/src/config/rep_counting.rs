// ABOUTME: Rep-counting configuration: hysteresis thresholds and dwell time per exercise
// ABOUTME: Presets for squat, push-up and sit-up replace per-exercise counter subtypes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use chrono::TimeDelta;
use formcoach_core::constants::rep_counting;
use serde::{Deserialize, Serialize};

/// Calibration for one `RepCounter`
///
/// A rep is credited when the tracked angle drops below `down_threshold` and then
/// rises above `up_threshold`, with at least `min_phase_time_ms` between accepted
/// phase changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepCounterConfig {
    /// Angle (degrees) below which the movement is at the bottom
    pub down_threshold: f64,
    /// Angle (degrees) above which the movement is at the top
    pub up_threshold: f64,
    /// Minimum time between accepted phase changes
    pub min_phase_time_ms: u64,
}

impl RepCounterConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidThresholds` unless both thresholds are finite
    /// and `down_threshold < up_threshold`.
    pub fn new(
        down_threshold: f64,
        up_threshold: f64,
        min_phase_time_ms: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            down_threshold,
            up_threshold,
            min_phase_time_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Squat: knee angle, down < 100°, up > 160°, 600 ms
    #[must_use]
    pub const fn squat() -> Self {
        Self {
            down_threshold: rep_counting::SQUAT_DOWN_DEGREES,
            up_threshold: rep_counting::SQUAT_UP_DEGREES,
            min_phase_time_ms: rep_counting::SQUAT_MIN_PHASE_MS,
        }
    }

    /// Push-up: elbow angle, down < 90°, up > 160°, 500 ms
    #[must_use]
    pub const fn push_up() -> Self {
        Self {
            down_threshold: rep_counting::PUSH_UP_DOWN_DEGREES,
            up_threshold: rep_counting::PUSH_UP_UP_DEGREES,
            min_phase_time_ms: rep_counting::PUSH_UP_MIN_PHASE_MS,
        }
    }

    /// Sit-up: hip angle, down < 90°, up > 140°, 700 ms
    #[must_use]
    pub const fn sit_up() -> Self {
        Self {
            down_threshold: rep_counting::SIT_UP_DOWN_DEGREES,
            up_threshold: rep_counting::SIT_UP_UP_DEGREES,
            min_phase_time_ms: rep_counting::SIT_UP_MIN_PHASE_MS,
        }
    }

    /// Same thresholds with a different dwell time
    #[must_use]
    pub const fn with_min_phase_time_ms(mut self, min_phase_time_ms: u64) -> Self {
        self.min_phase_time_ms = min_phase_time_ms;
        self
    }

    /// Dwell time as a `TimeDelta`
    #[must_use]
    pub fn min_phase_time(&self) -> TimeDelta {
        i64::try_from(self.min_phase_time_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Check threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidThresholds` if a threshold is not finite or
    /// `down_threshold >= up_threshold`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.down_threshold.is_finite()
            && self.up_threshold.is_finite()
            && self.down_threshold < self.up_threshold;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                down: self.down_threshold,
                up: self.up_threshold,
            })
        }
    }
}
