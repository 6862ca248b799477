// ABOUTME: Core data models for pose-based exercise analysis
// ABOUTME: Re-exports landmarks, exercise types, and per-frame analysis output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures shared by the form engine, session layer, and CLI.
//!
//! ## Design Principles
//!
//! - **Estimator Agnostic**: Landmarks carry only normalized coordinates and
//!   an optional visibility, so any 33-point pose estimator can feed them
//! - **Immutable Input**: Landmarks are never mutated after a frame is built
//! - **Serializable**: Output types serialize to the camelCase JSON the UI consumes
//!
//! ## Core Models
//!
//! - `Landmark`, `PoseLandmark`, `PoseFrame`: estimator output
//! - `ExerciseType`: supported exercises
//! - `AngleResult`, `FormAssessment`, `ExerciseAnalysis`: analysis output

mod analysis;
mod exercise;
mod landmark;

pub use analysis::{AngleResult, ExerciseAnalysis, FormAssessment, Phase};
pub use exercise::{CountingStyle, ExerciseType};
pub use landmark::{Landmark, PoseFrame, PoseLandmark};
