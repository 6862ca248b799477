// ABOUTME: Analysis error types raised while extracting features or selecting profiles
// ABOUTME: Converts into the unified AppError from pierre-pose-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_pose_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Errors produced by the form engine
///
/// `MissingLandmark` is recovered inside the analyzer and never reaches the
/// caller of `analyze`; `UnsupportedExercise` is a setup-time error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A feature needs a landmark index the frame does not contain
    #[error("landmark {index} is missing from a frame of {available} landmarks")]
    MissingLandmark {
        /// Requested landmark index
        index: usize,
        /// Number of landmarks supplied
        available: usize,
    },

    /// No profile exists for the requested exercise name
    #[error("unsupported exercise: {0}")]
    UnsupportedExercise(String),
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        match &error {
            AnalysisError::MissingLandmark { index, .. } => {
                Self::new(ErrorCode::MissingLandmark, error.to_string())
                    .with_details(serde_json::json!({ "index": index }))
            }
            AnalysisError::UnsupportedExercise(name) => Self::unsupported_exercise(name.clone()),
        }
    }
}
