// ABOUTME: Exercise catalog commands for pierre-form-coach
// ABOUTME: Lists supported exercises and prints their profiles

use anyhow::Result;
use pierre_form_engine::{ExerciseProfile, Locale, ProfileCatalog};
use pierre_pose_core::errors::AppError;
use pierre_pose_core::models::ExerciseType;
use std::sync::Arc;

use crate::helpers::display::{display_exercises, display_profile, Output};

/// List supported exercises
pub fn exercises(catalog: &ProfileCatalog, output: Output) -> Result<()> {
    let exercises: Vec<ExerciseType> = catalog.exercises().collect();
    output.emit(&exercises, || display_exercises(&exercises))
}

/// Print one profile, or all of them
pub fn profiles(
    catalog: &ProfileCatalog,
    exercise: Option<&str>,
    locale: Locale,
    output: Output,
) -> Result<()> {
    let selected: Vec<Arc<ExerciseProfile>> = match exercise {
        Some(name) => vec![catalog.resolve(name).map_err(AppError::from)?],
        None => catalog.iter().cloned().collect(),
    };
    let profiles: Vec<&ExerciseProfile> = selected.iter().map(AsRef::as_ref).collect();
    output.emit(&profiles, || {
        for profile in &profiles {
            display_profile(profile, locale);
        }
    })
}
