// ABOUTME: Landmark and LandmarkFrame models produced by an external pose estimator
// ABOUTME: A landmark is a 2D/3D body point with an optional visibility score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked anatomical point
///
/// Coordinates are whatever the pose model emits (normalized image coordinates for
/// the common 33-point models). `z` and `visibility` are optional because not every
/// model reports depth or confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Depth coordinate, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Confidence that the point is visible (0.0-1.0), if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// 2D landmark without a visibility score
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// 3D landmark without a visibility score
    #[must_use]
    pub const fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            visibility: None,
        }
    }

    /// Set the visibility score
    #[must_use]
    pub const fn visible(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

/// One processed camera frame: a timestamp and its landmark set
///
/// `landmarks` is indexed by the 33-point convention in
/// [`crate::constants::pose_landmarks`]. An empty vector means no pose was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// When the frame was captured
    pub timestamp: DateTime<Utc>,
    /// Landmarks for this frame
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Create a frame
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp,
            landmarks,
        }
    }

    /// Landmark at `index`, if the model produced one
    #[must_use]
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }
}
