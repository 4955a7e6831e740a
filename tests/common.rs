// ABOUTME: Shared fixtures for FormCoach integration tests
// ABOUTME: Builds deterministic timestamps and landmark poses with a chosen joint angle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `formcoach`

use chrono::{DateTime, TimeDelta, Utc};
use formcoach::constants::pose_landmarks;
use formcoach::models::{ExerciseKind, Landmark, LandmarkFrame};
use formcoach_analysis::rules::rule_for;

/// Fixed reference instant for reproducible sessions
pub fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_725_600, 0).unwrap()
}

/// `t0` shifted by `ms` milliseconds (negative values go back in time)
pub fn at_ms(ms: i64) -> DateTime<Utc> {
    t0() + TimeDelta::milliseconds(ms)
}

/// Full, confidently visible pose with the exercise's joint at `degrees`
pub fn pose(exercise: ExerciseKind, degrees: f64) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.5, 0.5).visible(0.9); pose_landmarks::LANDMARK_COUNT];
    let [first, vertex, last] = rule_for(exercise).landmarks;
    let theta = degrees.to_radians();
    landmarks[first] = Landmark::new(0.5, 0.3).visible(0.9);
    landmarks[vertex] = Landmark::new(0.5, 0.5).visible(0.9);
    landmarks[last] =
        Landmark::new(0.2_f64.mul_add(theta.sin(), 0.5), 0.2_f64.mul_add(-theta.cos(), 0.5))
            .visible(0.9);
    landmarks
}

/// Frames spaced `step_ms` apart starting at `t0`
pub fn frames(exercise: ExerciseKind, angles: &[f64], step_ms: i64) -> Vec<LandmarkFrame> {
    (0_i64..)
        .zip(angles)
        .map(|(i, &degrees)| LandmarkFrame::new(at_ms(i * step_ms), pose(exercise, degrees)))
        .collect()
}
