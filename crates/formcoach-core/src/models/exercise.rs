// ABOUTME: Exercise kinds with form rules and the phases of a repetitive movement
// ABOUTME: Parses exercise names with common aliases (push-up, pushup, push_up)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exercises that have a form rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Bodyweight squat, judged on knee flexion
    Squat,
    /// Push-up, judged on elbow flexion
    PushUp,
    /// Plank hold, judged on shoulder-hip-ankle alignment
    Plank,
}

impl ExerciseKind {
    /// Every exercise with a form rule
    pub const ALL: [Self; 3] = [Self::Squat, Self::PushUp, Self::Plank];

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::PushUp => "pushup",
            Self::Plank => "plank",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExerciseKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" | "squats" => Ok(Self::Squat),
            "pushup" | "push-up" | "push_up" | "pushups" | "push-ups" => Ok(Self::PushUp),
            "plank" => Ok(Self::Plank),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise: '{other}'. Valid options: squat, pushup, plank"
            ))),
        }
    }
}

/// Position class of a tracked repetitive movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExercisePhase {
    /// No confident position yet (initial state)
    #[default]
    Neutral,
    /// Bottom of the movement
    Down,
    /// Top of the movement
    Up,
}

impl fmt::Display for ExercisePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Neutral => "neutral",
            Self::Down => "down",
            Self::Up => "up",
        })
    }
}
