// ABOUTME: Joint angle and distance calculations over pose landmarks
// ABOUTME: Includes the visibility gate deciding whether a landmark can be trusted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::models::Landmark;
use serde::Serialize;

/// Vectors shorter than this are treated as zero-length
const MIN_VECTOR_LENGTH: f64 = 1e-9;

/// A named joint angle in degrees (0-180)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleMeasurement {
    /// Joint the angle was measured at
    pub joint: &'static str,
    /// Angle in degrees
    pub degrees: f64,
}

impl AngleMeasurement {
    /// Measure the angle at `vertex` between `first` and `last`
    ///
    /// `None` when the geometry is degenerate (a zero-length arm or non-finite
    /// coordinates), since no angle can be read from such a pose.
    #[must_use]
    pub fn measure(
        joint: &'static str,
        first: &Landmark,
        vertex: &Landmark,
        last: &Landmark,
    ) -> Option<Self> {
        checked_angle(first, vertex, last).map(|degrees| Self { joint, degrees })
    }

    /// Angle rounded to whole degrees, as reported to the presentation layer
    #[must_use]
    pub fn rounded(&self) -> f64 {
        self.degrees.round()
    }
}

/// Planar angle at vertex `b` between the vectors `b->a` and `b->c`, in degrees
///
/// Uses the dot-product formula `cos(θ) = (BA · BC) / (|BA| × |BC|)` on the x/y
/// coordinates. The cosine is clamped before `acos`, so the result is always in
/// `[0, 180]`. If either vector has zero length (coincident points) or the input
/// is not finite, returns `0.0` instead of `NaN`.
#[must_use]
pub fn angle_between(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    checked_angle(a, b, c).unwrap_or(0.0)
}

fn checked_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f64> {
    let ba = (a.x - b.x, a.y - b.y);
    let bc = (c.x - b.x, c.y - b.y);

    let mag_ba = ba.0.hypot(ba.1);
    let mag_bc = bc.0.hypot(bc.1);

    if !(mag_ba >= MIN_VECTOR_LENGTH && mag_bc >= MIN_VECTOR_LENGTH) {
        return None;
    }

    let dot = ba.0.mul_add(bc.0, ba.1 * bc.1);
    let cos_angle = dot / (mag_ba * mag_bc);
    cos_angle
        .is_finite()
        .then(|| cos_angle.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Euclidean distance between two landmarks; a missing `z` counts as zero
#[must_use]
pub fn distance(a: &Landmark, b: &Landmark) -> f64 {
    let dz = a.z.unwrap_or(0.0) - b.z.unwrap_or(0.0);
    (a.x - b.x).hypot(a.y - b.y).hypot(dz)
}

/// Whether a landmark exists and its visibility score strictly exceeds `threshold`
///
/// Landmarks without a visibility score are not trusted.
#[must_use]
pub fn is_visible(point: Option<&Landmark>, threshold: f64) -> bool {
    point
        .and_then(|landmark| landmark.visibility)
        .is_some_and(|visibility| visibility > threshold)
}
