// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Validates FORM_* variable parsing, range checks, and profile override files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_form_coach::config::{CoachConfig, Environment};
use pierre_form_coach::synthetic::squat_pose;
use pierre_form_engine::{ExerciseAnalyzer, ExerciseProfile, Locale};
use pierre_pose_core::constants::env_config;
use pierre_pose_core::models::ExerciseType;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

const VARIABLES: [&str; 9] = [
    env_config::PASSING_SCORE,
    env_config::MIN_FEATURE_CONFIDENCE,
    env_config::VISIBILITY_THRESHOLD,
    env_config::FRAME_CONFIDENCE_FLOOR,
    env_config::FRAME_INTERVAL_MS,
    env_config::REPS_PER_SET,
    env_config::LOCALE,
    env_config::PROFILES_PATH,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for key in VARIABLES {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = CoachConfig::from_env().unwrap();

    assert_eq!(config, CoachConfig::default());
    assert_eq!(config.environment, Environment::Development);
    assert!(config.profiles_path.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::PASSING_SCORE, "85");
    env::set_var(env_config::FRAME_CONFIDENCE_FLOOR, " 0.75 ");
    env::set_var(env_config::REPS_PER_SET, "12");
    env::set_var(env_config::LOCALE, "ko");
    env::set_var(env_config::ENVIRONMENT, "production");

    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.settings.passing_score, 85);
    assert!((config.settings.frame_confidence_floor - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.settings.reps_per_set, Some(12));
    assert_eq!(config.settings.locale, Locale::Korean);
    assert!(config.environment.is_production());
    assert!(config.summary().contains("Reps Per Set: 12"));
}

#[test]
#[serial]
fn test_empty_reps_per_set_disables_sets() {
    clear_env();
    env::set_var(env_config::REPS_PER_SET, "");

    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.settings.reps_per_set, None);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    for (key, value) in [
        (env_config::PASSING_SCORE, "high"),
        (env_config::PASSING_SCORE, "150"),
        (env_config::MIN_FEATURE_CONFIDENCE, "1.5"),
        (env_config::FRAME_INTERVAL_MS, "0"),
        (env_config::REPS_PER_SET, "0"),
        (env_config::LOCALE, "klingon"),
    ] {
        clear_env();
        env::set_var(key, value);

        let result = CoachConfig::from_env();

        assert!(result.is_err(), "{key}={value} should be rejected");
    }
    clear_env();
}

#[test]
#[serial]
fn test_profile_override_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");
    let mut lenient = ExerciseProfile::builtin(ExerciseType::Squat);
    lenient.rules.clear();
    fs::write(&path, serde_json::to_string(&vec![lenient]).unwrap()).unwrap();
    env::set_var(env_config::PROFILES_PATH, &path);

    let config = CoachConfig::from_env().unwrap();
    let catalog = config.catalog().unwrap();
    clear_env();

    assert_eq!(config.profiles_path.as_deref(), Some(path.as_path()));
    let mut squat = ExerciseAnalyzer::new(
        catalog.profile(ExerciseType::Squat).unwrap(),
        config.settings.clone(),
    );
    assert_eq!(squat.analyze(&squat_pose(140.0)).form_score, Some(100));
    assert_eq!(
        catalog.profile(ExerciseType::Lunge).unwrap().as_ref(),
        &ExerciseProfile::builtin(ExerciseType::Lunge)
    );
}

#[test]
#[serial]
fn test_invalid_profile_override_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");
    let mut broken = ExerciseProfile::builtin(ExerciseType::Squat);
    broken.features.clear();
    fs::write(&path, serde_json::to_string(&vec![broken]).unwrap()).unwrap();
    env::set_var(env_config::PROFILES_PATH, &path);

    let config = CoachConfig::from_env().unwrap();
    let result = config.catalog();
    clear_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("profiles.json"), "{message}");
}
