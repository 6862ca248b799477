// ABOUTME: Per-frame analysis output types shared by the engine and its consumers
// ABOUTME: Defines AngleResult, Phase, FormAssessment, and the ExerciseAnalysis sent to the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::ExerciseType;
use crate::constants::defaults::MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived joint measurement with the confidence of the landmarks it came from
///
/// Despite the name this also carries ratios (e.g. hip-knee depth ratio);
/// `value` is in degrees for angles and unitless for ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    /// Measured value
    pub value: f64,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl AngleResult {
    /// Sentinel returned for degenerate geometry: value 0, confidence 0
    pub const DEGENERATE: Self = Self {
        value: 0.0,
        confidence: 0.0,
    };

    /// Build a result, mapping non-finite values to the degenerate sentinel
    #[must_use]
    pub fn new(value: f64, confidence: f64) -> Self {
        if !value.is_finite() || !confidence.is_finite() {
            return Self::DEGENERATE;
        }
        Self {
            value,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Whether the result is trustworthy at `min_confidence`
    #[must_use]
    pub fn is_known(&self, min_confidence: f64) -> bool {
        self.confidence >= min_confidence && self.confidence > 0.0
    }
}

/// Position within a repetition cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Start/end position (standing, arms locked out, ...)
    #[default]
    Ready,
    /// Moving into the working position; holding, for hold exercises
    Contracting,
    /// Past the bottom of the movement, returning
    Relaxing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Contracting => write!(f, "contracting"),
            Self::Relaxing => write!(f, "relaxing"),
        }
    }
}

/// Form quality of a single frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAssessment {
    /// Heuristic quality score, 0-100
    pub score: u8,
    /// Problems detected, in rule priority order
    pub issues: Vec<String>,
    /// How to fix each issue, parallel to `issues`
    pub corrections: Vec<String>,
    /// Things done well
    pub strengths: Vec<String>,
}

impl FormAssessment {
    /// A perfect score with nothing to report
    #[must_use]
    pub const fn perfect() -> Self {
        Self {
            score: MAX_SCORE,
            issues: Vec::new(),
            corrections: Vec::new(),
            strengths: Vec::new(),
        }
    }

    /// Whether the score reaches `passing_score`
    #[must_use]
    pub const fn passes(&self, passing_score: u8) -> bool {
        self.score >= passing_score
    }
}

/// Final per-frame result consumed by the UI and session summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseAnalysis {
    /// Exercise being analyzed
    pub exercise_type: ExerciseType,
    /// Completed reps, or whole seconds held for hold exercises
    pub current_count: u32,
    /// Whether this frame's form score passes
    pub is_correct_form: bool,
    /// Highest-priority message for the user, localized
    pub feedback: String,
    /// Fraction of required joints visible in this frame, 0-1
    pub confidence: f64,
    /// Current phase of the repetition cycle
    pub phase: Phase,
    /// Completed sets
    pub set_count: u32,
    /// Form score of this frame; `None` when the frame was not assessed
    pub form_score: Option<u8>,
}
