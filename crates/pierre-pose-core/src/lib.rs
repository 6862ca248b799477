// ABOUTME: Core types and constants for the Pierre form coach
// ABOUTME: Foundation crate with error handling, pose landmarks, exercise types, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Pose Core
//!
//! Foundation crate providing shared types and constants for the form coach.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Pose, threshold, and environment constants organized by domain
//! - **models**: Landmarks, exercise types, and per-frame analysis output

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (landmarks, exercise types, analysis output)
pub mod models;
