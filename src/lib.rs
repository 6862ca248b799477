// ABOUTME: Main library entry point for the Pierre form coach
// ABOUTME: Sessions, clip replay, synthetic poses, logging, and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Form Coach
//!
//! Pose-driven exercise coaching: a host hands 33 pose landmarks per video
//! frame to an analyzer, which counts repetitions and scores form.
//!
//! ## Architecture
//!
//! - **`pierre-pose-core`**: landmarks, exercise types, output types, errors
//! - **`pierre-form-engine`**: features, rules, rep state machine, profiles, analyzer
//! - **this crate**: sessions, replay, synthetic poses, logging, configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_form_coach::config::CoachConfig;
//! use pierre_form_coach::sessions::SessionRegistry;
//! use pierre_form_coach::synthetic;
//! use pierre_pose_core::models::ExerciseType;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CoachConfig::from_env()?;
//!     let registry = SessionRegistry::new(Arc::new(config.catalog()?), config.settings);
//!
//!     let session = registry.start(ExerciseType::Squat)?;
//!     for frame in synthetic::generate(ExerciseType::Squat, 30, 2.0, 1) {
//!         let analysis = registry.analyze(session, &frame.landmarks)?;
//!         println!("{} reps: {}", analysis.current_count, analysis.feedback);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Per-session analyzer registry
pub mod sessions;

/// Recorded clip replay
pub mod replay;

/// Synthetic skeletons and movement cycles
pub mod synthetic;
