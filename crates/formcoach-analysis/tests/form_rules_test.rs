// ABOUTME: Tests for per-exercise form verdicts computed from full landmark sets
// ABOUTME: Covers angle bands, visibility gating, missing poses, and unknown exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use formcoach_analysis::rules::rule_for;
use formcoach_analysis::{AnalysisConfig, FormRules};
use formcoach_core::constants::pose_landmarks;
use formcoach_core::models::{ExerciseKind, Landmark};

/// Full pose with the exercise's joint bent to `degrees`
fn pose(exercise: ExerciseKind, degrees: f64) -> Vec<Landmark> {
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

#[test]
fn test_squat_bands() {
    let rules = FormRules::default();

    let deep = rules.evaluate(ExerciseKind::Squat, &pose(ExerciseKind::Squat, 80.0));
    assert!(deep.correct);
    assert_eq!(deep.message, "✅ Good depth! Excellent form");
    assert_eq!(deep.angle("kneeAngle"), Some(80.0));

    let close = rules.evaluate(ExerciseKind::Squat, &pose(ExerciseKind::Squat, 100.0));
    assert!(!close.correct);
    assert_eq!(close.message, "⚠️ Go slightly lower");
    assert_eq!(close.angle("kneeAngle"), Some(100.0));

    let shallow = rules.evaluate(ExerciseKind::Squat, &pose(ExerciseKind::Squat, 130.0));
    assert!(!shallow.correct);
    assert_eq!(shallow.message, "❌ Squat deeper for full range");
}

#[test]
fn test_push_up_bands() {
    let rules = FormRules::default();
    let cases = [
        (70.0, true, "✅ Full range achieved!"),
        (105.0, false, "⚠️ Lower your chest more"),
        (150.0, false, "❌ Go lower for proper form"),
    ];
    for (degrees, correct, message) in cases {
        let feedback = rules.evaluate(ExerciseKind::PushUp, &pose(ExerciseKind::PushUp, degrees));
        assert_eq!(feedback.correct, correct, "{degrees}");
        assert_eq!(feedback.message, message);
        assert_eq!(feedback.angle("elbowAngle"), Some(degrees));
    }
}

#[test]
fn test_plank_bands() {
    let rules = FormRules::default();
    let cases = [
        (170.0, true, "✅ Perfect straight line!"),
        (155.0, false, "⚠️ Keep core engaged"),
        (140.0, false, "❌ Straighten your back"),
    ];
    for (degrees, correct, message) in cases {
        let feedback = rules.evaluate(ExerciseKind::Plank, &pose(ExerciseKind::Plank, degrees));
        assert_eq!(feedback.correct, correct, "{degrees}");
        assert_eq!(feedback.message, message);
        assert_eq!(feedback.angle("bodyAngle"), Some(degrees));
    }
}

#[test]
fn test_collapsed_pose_is_not_scored() {
    let rules = FormRules::default();
    let collapsed = vec![Landmark::new(0.5, 0.5).visible(0.9); pose_landmarks::LANDMARK_COUNT];

    for exercise in ExerciseKind::ALL {
        let feedback = rules.evaluate(exercise, &collapsed);
        assert!(!feedback.correct, "{exercise}");
        assert_eq!(feedback.message, rule_for(exercise).visibility_message);
        assert!(feedback.measured_angles.is_empty());
    }
}

#[test]
fn test_hidden_joint_is_rejected_without_angles() {
    let rules = FormRules::default();
    let mut landmarks = pose(ExerciseKind::Squat, 80.0);
    landmarks[pose_landmarks::LEFT_KNEE] = landmarks[pose_landmarks::LEFT_KNEE].visible(0.1);

    let feedback = rules.evaluate(ExerciseKind::Squat, &landmarks);
    assert!(!feedback.correct);
    assert_eq!(feedback.message, "Position yourself fully in frame");
    assert!(feedback.measured_angles.is_empty());
}

#[test]
fn test_visibility_messages_per_exercise() {
    let rules = FormRules::default();
    let partial = vec![Landmark::new(0.5, 0.5).visible(0.9); 12];

    assert_eq!(
        rules.evaluate(ExerciseKind::PushUp, &partial).message,
        "Ensure arms are visible"
    );
    assert_eq!(
        rules.evaluate(ExerciseKind::Plank, &partial).message,
        "Full body must be visible"
    );
}

#[test]
fn test_empty_landmarks_mean_no_pose() {
    let feedback = FormRules::default().evaluate(ExerciseKind::Plank, &[]);
    assert!(!feedback.correct);
    assert_eq!(feedback.message, "No pose detected");
    assert!(feedback.measured_angles.is_empty());
}

#[test]
fn test_unknown_exercise_by_name() {
    let rules = FormRules::default();
    let feedback = rules.evaluate_named("burpee", &pose(ExerciseKind::Squat, 80.0));
    assert!(!feedback.correct);
    assert_eq!(feedback.message, "Unknown exercise");
    assert!(feedback.measured_angles.is_empty());

    let squat = rules.evaluate_named("squat", &pose(ExerciseKind::Squat, 80.0));
    assert!(squat.correct);
}

#[test]
fn test_threshold_comes_from_config() {
    let config = AnalysisConfig {
        visibility_threshold: 0.95,
        ..AnalysisConfig::default()
    };
    let strict = FormRules::from_config(&config);
    assert!((strict.visibility_threshold() - 0.95).abs() < f64::EPSILON);

    let feedback = strict.evaluate(ExerciseKind::Squat, &pose(ExerciseKind::Squat, 80.0));
    assert_eq!(feedback.message, "Position yourself fully in frame");
}

#[test]
fn test_evaluation_is_stateless() {
    let rules = FormRules::default();
    let landmarks = pose(ExerciseKind::PushUp, 100.0);
    assert_eq!(
        rules.evaluate(ExerciseKind::PushUp, &landmarks),
        rules.evaluate(ExerciseKind::PushUp, &landmarks)
    );
}
