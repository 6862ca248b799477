// ABOUTME: Exercise type enumeration for pose-based rep counting
// ABOUTME: Defines the supported exercises with parsing, display, and counting style
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exercises the form engine has analyzer profiles for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Bodyweight squat
    Squat,
    /// Forward or reverse lunge
    Lunge,
    /// Push-up
    PushUp,
    /// Isometric plank hold
    Plank,
    /// Standing calf raise
    CalfRaise,
    /// Burpee
    Burpee,
    /// Mountain climber
    MountainClimber,
}

/// How an exercise is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingStyle {
    /// Discrete repetitions
    Repetitions,
    /// Seconds held in position
    Hold,
}

impl ExerciseType {
    /// Every supported exercise, in display order
    pub const ALL: [Self; 7] = [
        Self::Squat,
        Self::Lunge,
        Self::PushUp,
        Self::Plank,
        Self::CalfRaise,
        Self::Burpee,
        Self::MountainClimber,
    ];

    /// Canonical identifier (matches the serde representation)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Lunge => "lunge",
            Self::PushUp => "push_up",
            Self::Plank => "plank",
            Self::CalfRaise => "calf_raise",
            Self::Burpee => "burpee",
            Self::MountainClimber => "mountain_climber",
        }
    }

    /// Get the human-readable name for this exercise
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Lunge => "lunge",
            Self::PushUp => "push-up",
            Self::Plank => "plank",
            Self::CalfRaise => "calf raise",
            Self::Burpee => "burpee",
            Self::MountainClimber => "mountain climber",
        }
    }

    /// Whether the exercise counts repetitions or hold time
    #[must_use]
    pub const fn counting_style(&self) -> CountingStyle {
        match self {
            Self::Plank => CountingStyle::Hold,
            _ => CountingStyle::Repetitions,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    /// Accepts the canonical identifiers plus the spellings UIs commonly send
    /// (`pushup`, `push-up`, `calfRaise`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "squat" | "squats" => Ok(Self::Squat),
            "lunge" | "lunges" => Ok(Self::Lunge),
            "pushup" | "pushups" => Ok(Self::PushUp),
            "plank" => Ok(Self::Plank),
            "calfraise" | "calfraises" => Ok(Self::CalfRaise),
            "burpee" | "burpees" => Ok(Self::Burpee),
            "mountainclimber" | "mountainclimbers" => Ok(Self::MountainClimber),
            _ => Err(AppError::unsupported_exercise(s)),
        }
    }
}
