// ABOUTME: Catalog of exercise profiles keyed by exercise type
// ABOUTME: Starts from built-in tables and layers validated JSON overrides on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExerciseProfile;
use crate::config::ConfigError;
use crate::errors::AnalysisError;
use pierre_pose_core::models::ExerciseType;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared, read-only set of profiles
///
/// Profiles are handed out as `Arc` so many analyzers can share one table.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: BTreeMap<ExerciseType, Arc<ExerciseProfile>>,
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileCatalog {
    /// Catalog holding the built-in profile of every exercise
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = ExerciseType::ALL
            .into_iter()
            .map(|exercise| (exercise, Arc::new(ExerciseProfile::builtin(exercise))))
            .collect();
        Self { profiles }
    }

    /// Built-in catalog with the profiles in a JSON array replacing their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidProfile` for a profile that fails validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let overrides: Vec<ExerciseProfile> = serde_json::from_str(json)?;
        overrides
            .into_iter()
            .try_fold(Self::builtin(), Self::with_override)
    }

    /// Built-in catalog with overrides read from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file cannot be read, plus the
    /// errors of [`Self::from_json_str`]
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), "Loaded exercise profile overrides");
        Ok(catalog)
    }

    /// Replace one exercise's profile after validating it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProfile` if the profile fails validation
    pub fn with_override(mut self, profile: ExerciseProfile) -> Result<Self, ConfigError> {
        profile.validate()?;
        debug!(exercise = %profile.exercise, "Overriding built-in profile");
        self.profiles.insert(profile.exercise, Arc::new(profile));
        Ok(self)
    }

    /// Profile for `exercise`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::UnsupportedExercise` if the catalog has no entry
    pub fn profile(&self, exercise: ExerciseType) -> Result<Arc<ExerciseProfile>, AnalysisError> {
        self.profiles
            .get(&exercise)
            .cloned()
            .ok_or_else(|| AnalysisError::UnsupportedExercise(exercise.to_string()))
    }

    /// Profile for an exercise name such as `"push-up"` or `"Calf Raise"`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::UnsupportedExercise` for unknown names
    pub fn resolve(&self, name: &str) -> Result<Arc<ExerciseProfile>, AnalysisError> {
        let exercise = name
            .parse::<ExerciseType>()
            .map_err(|_| AnalysisError::UnsupportedExercise(name.to_owned()))?;
        self.profile(exercise)
    }

    /// Exercises in the catalog, in declaration order
    pub fn exercises(&self) -> impl Iterator<Item = ExerciseType> + '_ {
        self.profiles.keys().copied()
    }

    /// All profiles
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ExerciseProfile>> {
        self.profiles.values()
    }

    /// Validate every profile
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profiles.values().try_for_each(|p| p.validate())
    }
}
