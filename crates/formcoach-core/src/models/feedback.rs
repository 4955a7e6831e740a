// ABOUTME: FeedbackResult model, the per-frame form verdict handed to the presentation layer
// ABOUTME: Carries pass/fail, a human-readable message, and rounded joint angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdict for a single frame
///
/// `measured_angles` is empty whenever analysis could not run (no pose,
/// insufficient visibility, unknown exercise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    /// Whether the form is acceptable
    pub correct: bool,
    /// Human-readable guidance
    pub message: String,
    /// Joint name to angle in whole degrees
    #[serde(default)]
    pub measured_angles: BTreeMap<String, f64>,
}

impl FeedbackResult {
    /// Verdict backed by a measured angle
    #[must_use]
    pub fn measured(
        correct: bool,
        message: impl Into<String>,
        joint: impl Into<String>,
        degrees: f64,
    ) -> Self {
        let mut measured_angles = BTreeMap::new();
        measured_angles.insert(joint.into(), degrees);
        Self {
            correct,
            message: message.into(),
            measured_angles,
        }
    }

    /// Negative verdict with no angle data
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            correct: false,
            message: message.into(),
            measured_angles: BTreeMap::new(),
        }
    }

    /// The frame contained no pose
    #[must_use]
    pub fn no_pose() -> Self {
        Self::rejected(messages::NO_POSE_DETECTED)
    }

    /// The exercise has no rule
    #[must_use]
    pub fn unknown_exercise() -> Self {
        Self::rejected(messages::UNKNOWN_EXERCISE)
    }

    /// Angle recorded for `joint`, if any
    #[must_use]
    pub fn angle(&self, joint: &str) -> Option<f64> {
        self.measured_angles.get(joint).copied()
    }
}
