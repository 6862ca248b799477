// ABOUTME: Integration tests for clip loading and replay
// ABOUTME: Writes clips to temporary files and checks reports against direct analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{analyzer, init_test_logging, run_frames};
use pierre_form_coach::replay::{load_clip, replay_all, replay_clip, Clip};
use pierre_form_coach::synthetic;
use pierre_form_engine::{AnalyzerSettings, ProfileCatalog};
use pierre_pose_core::errors::ErrorCode;
use pierre_pose_core::models::{ExerciseType, Phase, PoseFrame};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_clip(dir: &TempDir, file_name: &str, clip: &Clip) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, serde_json::to_string(clip).unwrap()).unwrap();
    path
}

#[test]
fn test_replay_matches_direct_analysis() {
    init_test_logging();
    let frames = synthetic::generate(ExerciseType::Squat, 30, 6.0, 3);
    let clip = Clip::new(ExerciseType::Squat, frames.clone());

    let report = replay_clip(&clip, &ProfileCatalog::builtin(), &AnalyzerSettings::default())
        .unwrap();

    let mut direct = analyzer(ExerciseType::Squat);
    let analyses = run_frames(&mut direct, &frames);

    assert_eq!(report.count, 3);
    assert_eq!(report.frames, 180);
    assert_eq!(report.low_confidence_frames, 0);
    assert_eq!(report.final_phase, Phase::Ready);
    assert_eq!(report.last_analysis.as_ref(), analyses.last());
    assert_eq!(report.count_timestamps_ms.len(), 3);
    assert!(report
        .count_timestamps_ms
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_load_clip_from_file() {
    let dir = TempDir::new().unwrap();
    let clip = Clip::new(
        ExerciseType::PushUp,
        synthetic::generate(ExerciseType::PushUp, 30, 2.0, 1),
    );
    let path = write_clip(&dir, "morning_push_ups.json", &clip);

    let loaded = load_clip(&path).unwrap();

    assert_eq!(loaded.label(), "morning_push_ups");
    assert_eq!(loaded.frames, clip.frames);

    let report = replay_clip(&loaded, &ProfileCatalog::builtin(), &AnalyzerSettings::default())
        .unwrap();
    assert_eq!(report.clip, "morning_push_ups");
    assert_eq!(report.count, 1);
}

#[test]
fn test_untimed_clip_frames_use_frame_interval() {
    let json = serde_json::json!({
        "exercise": "plank",
        "frames": (0..31)
            .map(|_| serde_json::json!({ "landmarks": synthetic::plank_pose(175.0) }))
            .collect::<Vec<_>>(),
    });
    let clip: Clip = serde_json::from_value(json).unwrap();
    let settings = AnalyzerSettings {
        frame_interval_ms: 100,
        ..AnalyzerSettings::default()
    };

    let report = replay_clip(&clip, &ProfileCatalog::builtin(), &settings).unwrap();

    assert_eq!(report.exercise, ExerciseType::Plank);
    assert_eq!(report.count, 3);
    assert_eq!(report.count_timestamps_ms, vec![1000, 2000, 3000]);
}

#[test]
fn test_missing_clip_file() {
    let dir = TempDir::new().unwrap();

    let error = load_clip(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_malformed_clip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"exercise": "squat", "frames": [{"landmarks": 7}]}"#).unwrap();

    let error = load_clip(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_replay_all_keeps_order_and_isolates_failures() {
    init_test_logging();
    let mut unknown = Clip::new(
        ExerciseType::Squat,
        vec![PoseFrame::at(0, synthetic::squat_pose(170.0))],
    );
    unknown.exercise = "yoga".to_owned();
    let clips = vec![
        Clip::new(
            ExerciseType::CalfRaise,
            synthetic::generate(ExerciseType::CalfRaise, 30, 4.0, 2),
        ),
        unknown,
        Clip::new(
            ExerciseType::Lunge,
            synthetic::generate(ExerciseType::Lunge, 30, 6.0, 3),
        ),
    ];

    let results = replay_all(&clips, &ProfileCatalog::builtin(), &AnalyzerSettings::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().count, 2);
    assert_eq!(
        results[1].as_ref().unwrap_err().code,
        ErrorCode::UnsupportedExercise
    );
    let lunge = results[2].as_ref().unwrap();
    assert_eq!(lunge.exercise, ExerciseType::Lunge);
    assert_eq!(lunge.count, 3);
}
