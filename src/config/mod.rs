// ABOUTME: Configuration management module for the form coach
// ABOUTME: Environment-driven analyzer settings and profile override location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: analyzer settings and profile overrides from environment variables
//!
//! Exercise thresholds are data in `pierre_form_engine::profiles`; this module
//! only decides where they come from.

/// Environment configuration
pub mod environment;

pub use environment::{CoachConfig, Environment};
