// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pose layout, default analysis thresholds, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Exercise-specific thresholds live with the exercise profiles in
//! `pierre-form-engine`; only values shared across exercises belong here.

/// Pose estimator output layout
pub mod pose {
    /// Number of landmarks produced per frame by the pose estimator
    pub const LANDMARK_COUNT: usize = 33;

    /// Visibility above which a joint counts as seen
    pub const VISIBILITY_THRESHOLD: f64 = 0.5;

    /// Vectors shorter than this are treated as degenerate
    pub const DEGENERATE_EPSILON: f64 = 1e-6;
}

/// Default analyzer settings
pub mod defaults {
    /// Form score at or above which a frame counts as correct form
    pub const PASSING_SCORE: u8 = 70;

    /// Feature confidence below which a feature is treated as unknown
    pub const MIN_FEATURE_CONFIDENCE: f64 = 0.5;

    /// Fraction of required joints that must be visible for a frame to drive the state machine
    pub const FRAME_CONFIDENCE_FLOOR: f64 = 0.6;

    /// Nominal frame interval used when frames carry no timestamp (~30 fps)
    pub const FRAME_INTERVAL_MS: u64 = 33;

    /// Largest gap between two frames credited to a hold
    pub const HOLD_MAX_FRAME_GAP_MS: u64 = 500;

    /// Maximum form score
    pub const MAX_SCORE: u8 = 100;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Passing form score (0-100)
    pub const PASSING_SCORE: &str = "FORM_PASSING_SCORE";
    /// Minimum feature confidence (0-1)
    pub const MIN_FEATURE_CONFIDENCE: &str = "FORM_MIN_FEATURE_CONFIDENCE";
    /// Joint visibility threshold (0-1)
    pub const VISIBILITY_THRESHOLD: &str = "FORM_VISIBILITY_THRESHOLD";
    /// Frame confidence floor (0-1)
    pub const FRAME_CONFIDENCE_FLOOR: &str = "FORM_FRAME_CONFIDENCE_FLOOR";
    /// Frame interval for untimed frames (milliseconds)
    pub const FRAME_INTERVAL_MS: &str = "FORM_FRAME_INTERVAL_MS";
    /// Repetitions per set (unset disables automatic sets)
    pub const REPS_PER_SET: &str = "FORM_REPS_PER_SET";
    /// Feedback locale (`en`, `ko`)
    pub const LOCALE: &str = "FORM_LOCALE";
    /// Path to a JSON file overriding exercise profiles
    pub const PROFILES_PATH: &str = "FORM_PROFILES_PATH";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Form coach service name
    pub const PIERRE_FORM_COACH: &str = "pierre-form-coach";
}
