// ABOUTME: Analyzer settings shared by every exercise profile
// ABOUTME: Passing score, confidence floors, frame clock, set size, and feedback locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analyzer Configuration
//!
//! Exercise-specific thresholds live in [`crate::profiles`]; the settings
//! here apply to every exercise and are usually loaded from the environment
//! by the application crate.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::feedback::Locale;
use pierre_pose_core::constants::{defaults, pose};
use serde::{Deserialize, Serialize};

/// Settings applied by [`crate::analyzer::ExerciseAnalyzer`] to every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Form score at or above which a frame counts as correct form (0-100)
    pub passing_score: u8,
    /// Feature confidence below which a feature is unknown (0-1)
    pub min_feature_confidence: f64,
    /// Visibility above which a required joint counts as seen (0-1)
    pub visibility_threshold: f64,
    /// Fraction of required joints that must be seen to drive the state machine (0-1)
    pub frame_confidence_floor: f64,
    /// Clock step for frames analyzed without a timestamp (milliseconds)
    pub frame_interval_ms: u64,
    /// Close a set automatically every N reps
    pub reps_per_set: Option<u32>,
    /// Language of feedback texts
    pub locale: Locale,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            passing_score: defaults::PASSING_SCORE,
            min_feature_confidence: defaults::MIN_FEATURE_CONFIDENCE,
            visibility_threshold: pose::VISIBILITY_THRESHOLD,
            frame_confidence_floor: defaults::FRAME_CONFIDENCE_FLOOR,
            frame_interval_ms: defaults::FRAME_INTERVAL_MS,
            reps_per_set: None,
            locale: Locale::default(),
        }
    }
}

impl AnalyzerSettings {
    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a score, confidence, or
    /// interval is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.passing_score > defaults::MAX_SCORE {
            return Err(ConfigError::InvalidRange(
                "passing_score must be between 0 and 100",
            ));
        }
        if !is_unit_interval(self.min_feature_confidence) {
            return Err(ConfigError::InvalidRange(
                "min_feature_confidence must be between 0.0 and 1.0",
            ));
        }
        if !is_unit_interval(self.visibility_threshold) {
            return Err(ConfigError::InvalidRange(
                "visibility_threshold must be between 0.0 and 1.0",
            ));
        }
        if !is_unit_interval(self.frame_confidence_floor) {
            return Err(ConfigError::InvalidRange(
                "frame_confidence_floor must be between 0.0 and 1.0",
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidRange(
                "frame_interval_ms must be greater than zero",
            ));
        }
        if self.reps_per_set == Some(0) {
            return Err(ConfigError::InvalidRange(
                "reps_per_set must be greater than zero when set",
            ));
        }
        Ok(())
    }

    /// Same settings with automatic sets of `reps` repetitions
    #[must_use]
    pub const fn with_reps_per_set(mut self, reps: u32) -> Self {
        self.reps_per_set = Some(reps);
        self
    }

    /// Same settings with feedback in `locale`
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AnalyzerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let settings = AnalyzerSettings {
            passing_score: 101,
            ..AnalyzerSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = AnalyzerSettings {
            frame_confidence_floor: 1.5,
            ..AnalyzerSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = AnalyzerSettings::default().with_reps_per_set(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AnalyzerSettings =
            serde_json::from_str(r#"{"passing_score": 80, "locale": "ko"}"#).unwrap();

        assert_eq!(settings.passing_score, 80);
        assert_eq!(settings.locale, Locale::Korean);
        assert_eq!(settings.frame_interval_ms, defaults::FRAME_INTERVAL_MS);
    }
}
