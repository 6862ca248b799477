// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, default catalogs, and frame stream helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_form_coach`

use pierre_form_engine::{AnalyzerSettings, ExerciseAnalyzer, ProfileCatalog};
use pierre_pose_core::models::{ExerciseAnalysis, ExerciseType, PoseFrame};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Built-in catalog behind an `Arc`, as sessions expect it
pub fn builtin_catalog() -> Arc<ProfileCatalog> {
    Arc::new(ProfileCatalog::builtin())
}

/// Fresh analyzer for `exercise` with default settings
pub fn analyzer(exercise: ExerciseType) -> ExerciseAnalyzer {
    analyzer_with(exercise, AnalyzerSettings::default())
}

/// Fresh analyzer for `exercise` with `settings`
pub fn analyzer_with(exercise: ExerciseType, settings: AnalyzerSettings) -> ExerciseAnalyzer {
    let profile = ProfileCatalog::builtin().profile(exercise).unwrap();
    ExerciseAnalyzer::checked(profile, settings).unwrap()
}

/// Run every frame through `analyzer`, returning each analysis
pub fn run_frames(analyzer: &mut ExerciseAnalyzer, frames: &[PoseFrame]) -> Vec<ExerciseAnalysis> {
    frames
        .iter()
        .map(|frame| analyzer.analyze_frame(frame))
        .collect()
}
