// ABOUTME: Re-exports command modules for pierre-form-coach
// ABOUTME: Provides access to catalog, simulation, and replay commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod replay;
pub mod simulate;
