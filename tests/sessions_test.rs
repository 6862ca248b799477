// ABOUTME: Integration tests for the session registry
// ABOUTME: Covers session isolation, summaries, exercise switching, and unknown sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{builtin_catalog, init_test_logging};
use pierre_form_coach::sessions::SessionRegistry;
use pierre_form_coach::synthetic::{self, squat_pose, with_visibility};
use pierre_form_engine::AnalyzerSettings;
use pierre_pose_core::errors::ErrorCode;
use pierre_pose_core::models::{ExerciseType, Phase};
use std::thread;
use uuid::Uuid;

fn registry() -> SessionRegistry {
    init_test_logging();
    SessionRegistry::new(builtin_catalog(), AnalyzerSettings::default())
}

fn feed(registry: &SessionRegistry, session: Uuid, exercise: ExerciseType, cycles: u32) {
    for frame in synthetic::generate(exercise, 30, 2.0 * f64::from(cycles), cycles) {
        registry
            .analyze_at(session, &frame.landmarks, frame.timestamp_ms.unwrap())
            .unwrap();
    }
}

#[test]
fn test_sessions_count_independently() {
    let registry = registry();
    let first = registry.start(ExerciseType::Squat).unwrap();
    let second = registry.start(ExerciseType::Squat).unwrap();

    feed(&registry, first, ExerciseType::Squat, 2);
    registry.analyze(second, &squat_pose(120.0)).unwrap();

    assert_eq!(registry.summary(first).unwrap().total_reps, 2);
    assert_eq!(registry.summary(second).unwrap().total_reps, 0);
    assert_eq!(registry.active_sessions(), 2);
}

#[test]
fn test_sessions_on_separate_threads() {
    let registry = registry();
    let sessions: Vec<(Uuid, u32)> = (1..=4)
        .map(|cycles| (registry.start(ExerciseType::PushUp).unwrap(), cycles))
        .collect();

    thread::scope(|scope| {
        for &(session, cycles) in &sessions {
            let registry = &registry;
            scope.spawn(move || feed(registry, session, ExerciseType::PushUp, cycles));
        }
    });

    for (session, cycles) in sessions {
        assert_eq!(registry.summary(session).unwrap().total_reps, cycles);
    }
}

#[test]
fn test_start_named_accepts_ui_spellings() {
    let registry = registry();
    let session = registry.start_named("Mountain-Climber").unwrap();

    assert_eq!(
        registry.summary(session).unwrap().exercise,
        ExerciseType::MountainClimber
    );

    let error = registry.start_named("yoga").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedExercise);
}

#[test]
fn test_summary_statistics() {
    let registry = registry();
    let session = registry.start(ExerciseType::Squat).unwrap();

    registry.analyze(session, &squat_pose(85.0)).unwrap();
    registry.analyze(session, &squat_pose(140.0)).unwrap();
    registry
        .analyze(session, &with_visibility(squat_pose(140.0), 0.0))
        .unwrap();

    let summary = registry.summary(session).unwrap();
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.low_confidence_frames, 1);
    let average = summary.average_form_score.unwrap();
    assert!((average - 82.5).abs() < 1e-9);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["lowConfidenceFrames"], 1);
    assert_eq!(json["exercise"], "squat");
}

#[test]
fn test_switch_exercise_starts_over() {
    let registry = registry();
    let session = registry.start(ExerciseType::Squat).unwrap();
    feed(&registry, session, ExerciseType::Squat, 1);

    registry
        .switch_exercise(session, ExerciseType::Plank)
        .unwrap();

    let summary = registry.summary(session).unwrap();
    assert_eq!(summary.exercise, ExerciseType::Plank);
    assert_eq!(summary.total_reps, 0);
    assert_eq!(summary.frames, 0);

    let analysis = registry
        .analyze(session, &synthetic::plank_pose(175.0))
        .unwrap();
    assert_eq!(analysis.exercise_type, ExerciseType::Plank);
    assert_eq!(analysis.phase, Phase::Contracting);
}

#[test]
fn test_reset_and_complete_set() {
    let registry = registry();
    let session = registry.start(ExerciseType::Lunge).unwrap();
    feed(&registry, session, ExerciseType::Lunge, 3);

    assert!(registry.complete_set(session).unwrap());
    assert!(!registry.complete_set(session).unwrap());
    assert_eq!(registry.summary(session).unwrap().sets, 1);

    registry.reset(session).unwrap();
    let summary = registry.summary(session).unwrap();
    assert_eq!(summary.total_reps, 0);
    assert_eq!(summary.sets, 0);
    assert_eq!(summary.average_form_score, None);
}

#[test]
fn test_end_removes_session() {
    let registry = registry();
    let session = registry.start(ExerciseType::Burpee).unwrap();
    feed(&registry, session, ExerciseType::Burpee, 1);

    let summary = registry.end(session).unwrap();
    assert_eq!(summary.session_id, session);
    assert_eq!(summary.total_reps, 1);
    assert_eq!(registry.active_sessions(), 0);

    let error = registry.summary(session).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(
        error.context.session_id.as_deref(),
        Some(session.to_string().as_str())
    );
}

#[test]
fn test_unknown_session_is_not_found() {
    let registry = registry();
    let unknown = Uuid::new_v4();

    assert_eq!(
        registry.analyze(unknown, &squat_pose(170.0)).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        registry.reset(unknown).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        registry.end(unknown).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_invalid_settings_refuse_to_start() {
    init_test_logging();
    let settings = AnalyzerSettings {
        frame_confidence_floor: f64::NAN,
        ..AnalyzerSettings::default()
    };
    let registry = SessionRegistry::new(builtin_catalog(), settings);

    let error = registry.start(ExerciseType::Squat).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.code.is_configuration());
    assert_eq!(registry.active_sessions(), 0);
}
