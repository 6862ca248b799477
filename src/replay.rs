// ABOUTME: Replay of recorded landmark clips through a fresh analyzer per clip
// ABOUTME: Loads JSON clips, reports reps, sets, and form statistics; batches run in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Clip replay
//!
//! A clip is a JSON document:
//!
//! ```json
//! { "exercise": "squat", "frames": [{ "timestamp_ms": 0, "landmarks": [ ... ] }] }
//! ```
//!
//! Frames without `timestamp_ms` advance the analyzer's internal clock.

use pierre_form_engine::{AnalyzerSettings, ExerciseAnalyzer, ProfileCatalog};
use pierre_pose_core::errors::{AppError, AppResult, ErrorCode};
use pierre_pose_core::models::{ExerciseAnalysis, ExerciseType, Phase, PoseFrame};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A recorded landmark sequence for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Label used in reports; defaults to the file name when loaded from disk
    #[serde(default)]
    pub name: Option<String>,
    /// Exercise name, e.g. `"squat"` or `"push-up"`
    pub exercise: String,
    /// Frames in capture order
    pub frames: Vec<PoseFrame>,
}

impl Clip {
    /// Clip of already-built frames
    #[must_use]
    pub fn new(exercise: ExerciseType, frames: Vec<PoseFrame>) -> Self {
        Self {
            name: None,
            exercise: exercise.as_str().to_owned(),
            frames,
        }
    }

    /// Label for reports
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.exercise)
    }
}

/// Outcome of replaying one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    /// Clip label
    pub clip: String,
    /// Exercise analyzed
    pub exercise: ExerciseType,
    /// Frames replayed
    pub frames: usize,
    /// Frames rejected for insufficient visibility
    pub low_confidence_frames: usize,
    /// Final count: reps, or whole seconds held
    pub count: u32,
    /// Completed sets
    pub sets: u32,
    /// Phase after the last frame
    pub final_phase: Phase,
    /// Timestamps of the frames on which the count went up
    pub count_timestamps_ms: Vec<u64>,
    /// Mean form score over assessed frames
    pub average_form_score: Option<f64>,
    /// Analysis of the last frame
    pub last_analysis: Option<ExerciseAnalysis>,
}

/// Load a clip from a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file cannot be read and
/// `SerializationError` if it is not a valid clip
pub fn load_clip(path: &Path) -> AppResult<Clip> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::ResourceNotFound,
            format!("Cannot read clip {}", path.display()),
        )
        .with_resource_id(path.display().to_string())
        .with_source(e)
    })?;
    let mut clip: Clip = serde_json::from_str(&json)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    if clip.name.is_none() {
        clip.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }
    debug!(path = %path.display(), frames = clip.frames.len(), "Loaded clip");
    Ok(clip)
}

/// Replay a clip through a fresh analyzer
///
/// # Errors
///
/// Returns `UnsupportedExercise` if the clip names an unknown exercise
/// and `ValueOutOfRange` if `settings` are invalid
pub fn replay_clip(
    clip: &Clip,
    catalog: &ProfileCatalog,
    settings: &AnalyzerSettings,
) -> AppResult<ReplayReport> {
    let profile = catalog.resolve(&clip.exercise)?;
    let mut analyzer = ExerciseAnalyzer::checked(profile, settings.clone())?;

    let mut low_confidence_frames = 0;
    let mut score_total = 0_u64;
    let mut scored_frames = 0_u64;
    let mut count_timestamps_ms = Vec::new();
    let mut last_analysis: Option<ExerciseAnalysis> = None;

    for frame in &clip.frames {
        let previous_count = analyzer.current_count();
        let analysis = analyzer.analyze_frame(frame);
        if analysis.current_count > previous_count {
            if let Some(timestamp_ms) = analyzer.state().last_timestamp_ms {
                count_timestamps_ms.push(timestamp_ms);
            }
        }
        match analysis.form_score {
            Some(score) => {
                score_total += u64::from(score);
                scored_frames += 1;
            }
            None => low_confidence_frames += 1,
        }
        last_analysis = Some(analysis);
    }

    let state = analyzer.state();
    let report = ReplayReport {
        clip: clip.label().to_owned(),
        exercise: analyzer.profile().exercise,
        frames: clip.frames.len(),
        low_confidence_frames,
        count: analyzer.current_count(),
        sets: state.set_count,
        final_phase: state.phase,
        count_timestamps_ms,
        average_form_score: (scored_frames > 0)
            .then(|| score_total as f64 / scored_frames as f64),
        last_analysis,
    };
    info!(
        clip = %report.clip,
        exercise = %report.exercise,
        count = report.count,
        frames = report.frames,
        "Clip replayed"
    );
    Ok(report)
}

/// Replay several clips in parallel, one analyzer per clip
///
/// Results are in input order; one clip failing does not stop the others.
#[must_use]
pub fn replay_all(
    clips: &[Clip],
    catalog: &ProfileCatalog,
    settings: &AnalyzerSettings,
) -> Vec<AppResult<ReplayReport>> {
    clips
        .par_iter()
        .map(|clip| replay_clip(clip, catalog, settings))
        .collect()
}
