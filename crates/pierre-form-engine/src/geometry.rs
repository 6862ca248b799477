// ABOUTME: 2D joint geometry over normalized pose landmarks
// ABOUTME: Vertex angles, vertical tilt, line tilt, and distances with degenerate-input sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Joint geometry.
//!
//! Every function returns an [`AngleResult`] whose confidence is the minimum
//! visibility of the landmarks involved. Zero-length vectors and non-finite
//! coordinates produce [`AngleResult::DEGENERATE`] so NaN never reaches scoring.

use pierre_pose_core::constants::pose::DEGENERATE_EPSILON;
use pierre_pose_core::models::{AngleResult, Landmark};

/// Minimum visibility over a set of landmarks
#[must_use]
pub fn min_confidence(points: &[&Landmark]) -> f64 {
    points
        .iter()
        .map(|p| p.confidence())
        .fold(1.0_f64, f64::min)
}

/// Euclidean distance in the image plane
#[must_use]
pub fn distance(a: &Landmark, b: &Landmark) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Angle at vertex `b` between rays `b -> a` and `b -> c`, in degrees within [0, 180]
#[must_use]
pub fn angle_at(a: &Landmark, b: &Landmark, c: &Landmark) -> AngleResult {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return AngleResult::DEGENERATE;
    }
    if distance(a, b) < DEGENERATE_EPSILON || distance(c, b) < DEGENERATE_EPSILON {
        return AngleResult::DEGENERATE;
    }

    let radians = ((c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x)).abs();
    let mut degrees = radians.to_degrees();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }

    AngleResult::new(degrees, min_confidence(&[a, b, c]))
}

/// Angle between the segment `base -> tip` and the upward image vertical
///
/// 0 means `tip` sits straight above `base`, 90 means level with it.
#[must_use]
pub fn tilt_from_vertical(base: &Landmark, tip: &Landmark) -> AngleResult {
    let above = Landmark {
        x: base.x,
        y: base.y - 1.0,
        z: None,
        visibility: base.visibility,
    };
    angle_at(tip, base, &above)
}

/// Tilt of the line through `a` and `b` from horizontal, in degrees within [0, 90]
#[must_use]
pub fn tilt_from_horizontal(a: &Landmark, b: &Landmark) -> AngleResult {
    if !(a.is_finite() && b.is_finite()) || distance(a, b) < DEGENERATE_EPSILON {
        return AngleResult::DEGENERATE;
    }
    let degrees = (b.y - a.y).abs().atan2((b.x - a.x).abs()).to_degrees();
    AngleResult::new(degrees, min_confidence(&[a, b]))
}

/// Average of the two sides of a bilateral feature
///
/// Confidence is the lower of the two sides.
#[must_use]
pub fn bilateral_mean(left: AngleResult, right: AngleResult) -> AngleResult {
    AngleResult::new(
        (left.value + right.value) / 2.0,
        left.confidence.min(right.confidence),
    )
}

/// The smaller of the two sides, for features driven by one leg at a time
#[must_use]
pub fn bilateral_min(left: AngleResult, right: AngleResult) -> AngleResult {
    AngleResult::new(
        left.value.min(right.value),
        left.confidence.min(right.confidence),
    )
}
