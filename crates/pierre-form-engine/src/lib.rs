// ABOUTME: Exercise form analysis engine for the Pierre form coach
// ABOUTME: Feature extraction, form rules, rep/phase state machine, profiles, and the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Form Engine
//!
//! Turns a stream of 33-landmark pose frames into rep counts and form
//! feedback. One [`analyzer::ExerciseAnalyzer`] serves every exercise; the
//! per-exercise behavior lives in [`profiles::ExerciseProfile`] tables.
//!
//! ## Modules
//!
//! - **geometry**: vertex angles and tilts with degenerate-input sentinels
//! - **features**: named per-frame features extracted from landmarks
//! - **rules**: threshold comparisons, predicates, form rules, counting rules
//! - **assessment**: form scoring against a rule table
//! - **reps**: the rep/phase state machine
//! - **profiles**: built-in exercise tables and the profile catalog
//! - **analyzer**: the per-session analyzer composing all of the above

/// Analyzer settings and configuration errors
pub mod config;

/// Analysis error types
pub mod errors;

/// Joint geometry
pub mod geometry;

/// Per-frame feature extraction
pub mod features;

/// Localized feedback messages
pub mod feedback;

/// Declarative threshold rules
pub mod rules;

/// Form assessment
pub mod assessment;

/// Rep/phase state machine
pub mod reps;

/// Exercise profiles and catalog
pub mod profiles;

/// Generic exercise analyzer
pub mod analyzer;

pub use analyzer::{ExerciseAnalyzer, FrameAnalysisData};
pub use config::{AnalyzerSettings, ConfigError};
pub use errors::AnalysisError;
pub use feedback::Locale;
pub use profiles::{ExerciseProfile, ProfileCatalog};
