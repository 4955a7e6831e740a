// ABOUTME: Repetition counting state machine with hysteresis thresholds and dwell-time debounce
// ABOUTME: A rep is credited only on the DOWN to UP transition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repetition counter
//!
//! | current | condition      | next | count |
//! |---------|----------------|------|-------|
//! | NEUTRAL | angle > up     | UP   |       |
//! | NEUTRAL | angle < down   | DOWN |       |
//! | DOWN    | angle > up     | UP   | +1    |
//! | UP      | angle < down   | DOWN |       |
//!
//! No transition is accepted within `min_phase_time` of the previous one (or of the
//! last reset). Timestamps come from the caller so replays and tests are
//! deterministic; a timestamp earlier than the last transition is ignored.

use crate::config::RepCounterConfig;
use chrono::{DateTime, Utc};
use formcoach_core::models::ExercisePhase;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepCounterState {
    /// Completed repetitions
    pub count: u32,
    /// Current movement phase
    pub phase: ExercisePhase,
    /// Time of the last accepted transition or reset
    pub last_phase_change: DateTime<Utc>,
}

impl RepCounterState {
    const fn initial(at: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            phase: ExercisePhase::Neutral,
            last_phase_change: at,
        }
    }
}

/// Counts repetitions of one tracked joint angle
#[derive(Debug, Clone)]
pub struct RepCounter {
    config: RepCounterConfig,
    state: RepCounterState,
}

impl RepCounter {
    /// Create a counter in the NEUTRAL phase, debounced from `started_at`
    #[must_use]
    pub const fn new(config: RepCounterConfig, started_at: DateTime<Utc>) -> Self {
        Self {
            config,
            state: RepCounterState::initial(started_at),
        }
    }

    /// Feed one angle measurement taken at `at`
    pub fn update(&mut self, angle: f64, at: DateTime<Utc>) {
        let elapsed = at.signed_duration_since(self.state.last_phase_change);
        if elapsed < self.config.min_phase_time() {
            return;
        }

        let next = match self.state.phase {
            ExercisePhase::Neutral | ExercisePhase::Up if angle < self.config.down_threshold => {
                ExercisePhase::Down
            }
            ExercisePhase::Neutral | ExercisePhase::Down if angle > self.config.up_threshold => {
                ExercisePhase::Up
            }
            _ => return,
        };

        if self.state.phase == ExercisePhase::Down && next == ExercisePhase::Up {
            self.state.count += 1;
            debug!(count = self.state.count, angle, "repetition completed");
        }

        debug!(from = %self.state.phase, to = %next, angle, "phase transition");
        self.state.phase = next;
        self.state.last_phase_change = at;
    }

    /// Completed repetitions
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.state.count
    }

    /// Current movement phase
    #[must_use]
    pub const fn phase(&self) -> ExercisePhase {
        self.state.phase
    }

    /// Copy of the full state
    #[must_use]
    pub const fn state(&self) -> RepCounterState {
        self.state
    }

    /// Calibration in use
    #[must_use]
    pub const fn config(&self) -> &RepCounterConfig {
        &self.config
    }

    /// Back to zero reps in the NEUTRAL phase, debounced from `at`
    pub fn reset(&mut self, at: DateTime<Utc>) {
        self.state = RepCounterState::initial(at);
    }
}
