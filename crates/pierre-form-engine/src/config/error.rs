// ABOUTME: Configuration error types for analyzer settings and exercise profile validation
// ABOUTME: Defines error variants for invalid ranges, malformed tables, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for the form engine.

use pierre_pose_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a confidence not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A profile's rule or predicate table is malformed
    #[error("Invalid profile for {exercise}: {reason}")]
    InvalidProfile {
        /// Exercise whose profile failed validation
        exercise: String,
        /// What is wrong with it
        reason: String,
    },

    /// Failed to parse configuration value or file
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::InvalidProfile { .. } | ConfigError::Parse(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_by_variant() {
        let range = AppError::from(ConfigError::InvalidRange(
            "passing_score must be between 0 and 100",
        ));
        assert_eq!(range.code, ErrorCode::ValueOutOfRange);
        assert!(range.to_string().contains("passing_score"));

        let profile = AppError::from(ConfigError::InvalidProfile {
            exercise: "squat".to_owned(),
            reason: "no features".to_owned(),
        });
        assert_eq!(profile.code, ErrorCode::ConfigInvalid);
        assert!(profile.code.is_configuration());
    }
}
