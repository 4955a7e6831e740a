// ABOUTME: Table-driven exercise form rules mapping joint angles to graded feedback
// ABOUTME: Each exercise has a landmark triplet, a joint name, and three angle bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Form Rules
//!
//! Every exercise is described by a [`FormRule`] record in a static table instead of
//! a branch per exercise. Evaluation is stateless: the same landmarks always give
//! the same verdict.
//!
//! | exercise | angle                  | correct       | minor        | major   |
//! |----------|------------------------|---------------|--------------|---------|
//! | squat    | hip-knee-ankle         | < 90          | [90, 110)    | >= 110  |
//! | push-up  | shoulder-elbow-wrist   | < 90          | [90, 120)    | >= 120  |
//! | plank    | shoulder-hip-ankle     | (160, 180)    | > 150        | <= 150  |

use crate::angles::{is_visible, AngleMeasurement};
use crate::config::AnalysisConfig;
use formcoach_core::constants::{joint_names, pose_landmarks};
use formcoach_core::models::{ExerciseKind, FeedbackResult, Landmark};
use std::ops::Bound::{self, Excluded, Included, Unbounded};
use std::ops::RangeBounds;
use std::str::FromStr;
use tracing::trace;

/// A contiguous angle range mapped to one verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleBand {
    /// Lower bound in degrees
    pub lower: Bound<f64>,
    /// Upper bound in degrees
    pub upper: Bound<f64>,
    /// Whether angles in this band are good form
    pub correct: bool,
    /// Guidance shown for this band
    pub message: &'static str,
}

impl AngleBand {
    /// Whether `degrees` falls inside this band
    #[must_use]
    pub fn contains(&self, degrees: f64) -> bool {
        (self.lower, self.upper).contains(&degrees)
    }
}

/// Form rule for one exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRule {
    /// Exercise this rule judges
    pub exercise: ExerciseKind,
    /// Key under which the angle is reported
    pub joint: &'static str,
    /// Landmark indices `[first, vertex, last]`
    pub landmarks: [usize; 3],
    /// Message when any of the landmarks is not visible
    pub visibility_message: &'static str,
    /// Bands checked in order; the last one catches anything unmatched
    pub bands: [AngleBand; 3],
}

impl FormRule {
    /// First band containing `degrees`
    #[must_use]
    pub fn classify(&self, degrees: f64) -> &AngleBand {
        let [.., fallback] = &self.bands;
        self.bands
            .iter()
            .find(|band| band.contains(degrees))
            .unwrap_or(fallback)
    }
}

const fn band(
    lower: Bound<f64>,
    upper: Bound<f64>,
    correct: bool,
    message: &'static str,
) -> AngleBand {
    AngleBand {
        lower,
        upper,
        correct,
        message,
    }
}

static RULES: [FormRule; 3] = [
    FormRule {
        exercise: ExerciseKind::Squat,
        joint: joint_names::KNEE_ANGLE,
        landmarks: [
            pose_landmarks::LEFT_HIP,
            pose_landmarks::LEFT_KNEE,
            pose_landmarks::LEFT_ANKLE,
        ],
        visibility_message: "Position yourself fully in frame",
        bands: [
            band(Unbounded, Excluded(90.0), true, "✅ Good depth! Excellent form"),
            band(Included(90.0), Excluded(110.0), false, "⚠️ Go slightly lower"),
            band(Included(110.0), Unbounded, false, "❌ Squat deeper for full range"),
        ],
    },
    FormRule {
        exercise: ExerciseKind::PushUp,
        joint: joint_names::ELBOW_ANGLE,
        landmarks: [
            pose_landmarks::LEFT_SHOULDER,
            pose_landmarks::LEFT_ELBOW,
            pose_landmarks::LEFT_WRIST,
        ],
        visibility_message: "Ensure arms are visible",
        bands: [
            band(Unbounded, Excluded(90.0), true, "✅ Full range achieved!"),
            band(Included(90.0), Excluded(120.0), false, "⚠️ Lower your chest more"),
            band(Included(120.0), Unbounded, false, "❌ Go lower for proper form"),
        ],
    },
    FormRule {
        exercise: ExerciseKind::Plank,
        joint: joint_names::BODY_ANGLE,
        landmarks: [
            pose_landmarks::LEFT_SHOULDER,
            pose_landmarks::LEFT_HIP,
            pose_landmarks::LEFT_ANKLE,
        ],
        visibility_message: "Full body must be visible",
        // A perfectly straight 180° falls through to the second band
        bands: [
            band(Excluded(160.0), Excluded(180.0), true, "✅ Perfect straight line!"),
            band(Excluded(150.0), Unbounded, false, "⚠️ Keep core engaged"),
            band(Unbounded, Included(150.0), false, "❌ Straighten your back"),
        ],
    },
];

/// Rule record for an exercise
#[must_use]
pub fn rule_for(exercise: ExerciseKind) -> &'static FormRule {
    let [squat, push_up, plank] = &RULES;
    match exercise {
        ExerciseKind::Squat => squat,
        ExerciseKind::PushUp => push_up,
        ExerciseKind::Plank => plank,
    }
}

/// Stateless form evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRules {
    visibility_threshold: f64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl FormRules {
    /// Evaluator with an explicit visibility threshold
    #[must_use]
    pub const fn new(visibility_threshold: f64) -> Self {
        Self {
            visibility_threshold,
        }
    }

    /// Evaluator using the configured visibility threshold
    #[must_use]
    pub const fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.visibility_threshold)
    }

    /// Visibility threshold in use
    #[must_use]
    pub const fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Judge one frame of `exercise`
    ///
    /// Always returns a verdict: an empty landmark set gives "No pose detected". A
    /// hidden landmark, or a collapsed triplet with no measurable angle, gives the
    /// exercise's visibility message. Neither carries angles.
    #[must_use]
    pub fn evaluate(&self, exercise: ExerciseKind, landmarks: &[Landmark]) -> FeedbackResult {
        if landmarks.is_empty() {
            return FeedbackResult::no_pose();
        }

        let rule = rule_for(exercise);
        let [first, vertex, last] = rule.landmarks.map(|index| landmarks.get(index));

        let all_visible = [first, vertex, last]
            .into_iter()
            .all(|point| is_visible(point, self.visibility_threshold));
        let (true, Some(first), Some(vertex), Some(last)) = (all_visible, first, vertex, last)
        else {
            return FeedbackResult::rejected(rule.visibility_message);
        };

        let Some(measurement) = AngleMeasurement::measure(rule.joint, first, vertex, last)
        else {
            trace!(exercise = %exercise, joint = rule.joint, "degenerate joint geometry");
            return FeedbackResult::rejected(rule.visibility_message);
        };
        let verdict = rule.classify(measurement.degrees);
        trace!(
            exercise = %exercise,
            joint = rule.joint,
            degrees = measurement.degrees,
            correct = verdict.correct,
            "form evaluated"
        );

        FeedbackResult::measured(
            verdict.correct,
            verdict.message,
            rule.joint,
            measurement.rounded(),
        )
    }

    /// Judge one frame of an exercise given by name
    ///
    /// Unrecognized names yield an "Unknown exercise" verdict rather than an error.
    #[must_use]
    pub fn evaluate_named(&self, exercise: &str, landmarks: &[Landmark]) -> FeedbackResult {
        ExerciseKind::from_str(exercise).map_or_else(
            |_| FeedbackResult::unknown_exercise(),
            |kind| self.evaluate(kind, landmarks),
        )
    }
}
