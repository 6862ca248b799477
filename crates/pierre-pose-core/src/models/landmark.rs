// ABOUTME: Pose landmark types produced by the external pose estimator
// ABOUTME: Defines Landmark, the 33-joint PoseLandmark enumeration, and timestamped PoseFrame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::pose::VISIBILITY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// A single tracked body joint in normalized image coordinates (0-1)
///
/// `z` and `visibility` are optional because not every estimator reports
/// them. All angle math is 2D, so `z` is carried through but never read.
/// A missing visibility is treated as zero confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0 = left edge of the image
    pub x: f64,
    /// Vertical position, 0 = top edge of the image
    pub y: f64,
    /// Depth relative to the hips (ignored)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Estimator confidence that the joint is visible (0-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Landmark with an explicit visibility score
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: Some(visibility),
        }
    }

    /// Visibility clamped into [0, 1], with a missing score read as 0
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.visibility
            .filter(|v| v.is_finite())
            .map_or(0.0, |v| v.clamp(0.0, 1.0))
    }

    /// Whether the joint is visible enough to trust
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(VISIBILITY_THRESHOLD)
    }

    /// Whether the joint's visibility exceeds `threshold`
    #[must_use]
    pub fn is_visible_at(&self, threshold: f64) -> bool {
        self.confidence() > threshold
    }

    /// Whether both coordinates are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Body joints in the order the pose estimator emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// Position of this joint in the estimator's output sequence
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shoulders, hips, knees, and ankles on both sides
    pub const LOWER_BODY_CHAIN: [Self; 8] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Heels and foot tips on both sides
    pub const FEET: [Self; 4] = [
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Shoulders, elbows, and wrists on both sides
    pub const ARMS: [Self; 6] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
    ];
}

/// One video frame worth of pose landmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Capture time in milliseconds since the start of the stream
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
    /// Landmarks in [`PoseLandmark`] order
    pub landmarks: Vec<Landmark>,
}

impl PoseFrame {
    /// Frame captured at `timestamp_ms`
    #[must_use]
    pub const fn at(timestamp_ms: u64, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp_ms: Some(timestamp_ms),
            landmarks,
        }
    }
}
