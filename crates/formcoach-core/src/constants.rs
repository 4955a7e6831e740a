// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Landmark indices, rep-counting presets, feedback messages, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list. Angle band
//! boundaries live with the rule table in `formcoach-analysis`; everything shared
//! between crates lives here.

/// Indices into the standard 33-point body-pose landmark array
pub mod pose_landmarks {
    /// Total number of landmarks produced per frame
    pub const LANDMARK_COUNT: usize = 33;
    /// Nose
    pub const NOSE: usize = 0;
    /// Left shoulder
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left elbow
    pub const LEFT_ELBOW: usize = 13;
    /// Right elbow
    pub const RIGHT_ELBOW: usize = 14;
    /// Left wrist
    pub const LEFT_WRIST: usize = 15;
    /// Right wrist
    pub const RIGHT_WRIST: usize = 16;
    /// Left hip
    pub const LEFT_HIP: usize = 23;
    /// Right hip
    pub const RIGHT_HIP: usize = 24;
    /// Left knee
    pub const LEFT_KNEE: usize = 25;
    /// Right knee
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle
    pub const RIGHT_ANKLE: usize = 28;
}

/// Landmark visibility gating
pub mod visibility {
    /// Default visibility score a landmark must exceed to be used
    pub const DEFAULT_THRESHOLD: f64 = 0.5;
}

/// Keys used in `FeedbackResult::measured_angles`
pub mod joint_names {
    /// Hip-knee-ankle angle
    pub const KNEE_ANGLE: &str = "kneeAngle";
    /// Shoulder-elbow-wrist angle
    pub const ELBOW_ANGLE: &str = "elbowAngle";
    /// Shoulder-hip-ankle angle
    pub const BODY_ANGLE: &str = "bodyAngle";
}

/// Hysteresis thresholds (degrees) and dwell times (ms) for rep counting
pub mod rep_counting {
    /// Squat: knee angle below which the user is at the bottom
    pub const SQUAT_DOWN_DEGREES: f64 = 100.0;
    /// Squat: knee angle above which the user is standing
    pub const SQUAT_UP_DEGREES: f64 = 160.0;
    /// Squat: minimum time between phase changes
    pub const SQUAT_MIN_PHASE_MS: u64 = 600;

    /// Push-up: elbow angle at the bottom
    pub const PUSH_UP_DOWN_DEGREES: f64 = 90.0;
    /// Push-up: elbow angle at lockout
    pub const PUSH_UP_UP_DEGREES: f64 = 160.0;
    /// Push-up: minimum time between phase changes
    pub const PUSH_UP_MIN_PHASE_MS: u64 = 500;

    /// Sit-up: hip angle when curled up
    pub const SIT_UP_DOWN_DEGREES: f64 = 90.0;
    /// Sit-up: hip angle when lying back
    pub const SIT_UP_UP_DEGREES: f64 = 140.0;
    /// Sit-up: minimum time between phase changes
    pub const SIT_UP_MIN_PHASE_MS: u64 = 700;
}

/// Feedback messages that are not tied to a specific angle band
pub mod messages {
    /// The frame contained no landmarks at all
    pub const NO_POSE_DETECTED: &str = "No pose detected";
    /// The requested exercise has no rule
    pub const UNKNOWN_EXERCISE: &str = "Unknown exercise";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Visibility threshold override (0.0-1.0)
    pub const VISIBILITY_THRESHOLD: &str = "FORMCOACH_VISIBILITY_THRESHOLD";
    /// Squat dwell time override in milliseconds
    pub const SQUAT_MIN_PHASE_MS: &str = "FORMCOACH_SQUAT_MIN_PHASE_MS";
    /// Push-up dwell time override in milliseconds
    pub const PUSH_UP_MIN_PHASE_MS: &str = "FORMCOACH_PUSHUP_MIN_PHASE_MS";
    /// Sit-up dwell time override in milliseconds
    pub const SIT_UP_MIN_PHASE_MS: &str = "FORMCOACH_SITUP_MIN_PHASE_MS";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Replay tool service name
    pub const FORMCOACH_REPLAY: &str = "formcoach-replay";
}
