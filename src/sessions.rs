// ABOUTME: Per-session analyzer registry keyed by session id
// ABOUTME: Each session owns an independent analyzer plus running statistics for its summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout sessions
//!
//! Every session owns its own [`ExerciseAnalyzer`]; no counting state is ever
//! shared between sessions. The registry is a sharded concurrent map so
//! sessions driven from different threads only contend when they hash to the
//! same shard, and never on a shared state machine.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pierre_form_engine::{AnalyzerSettings, ExerciseAnalyzer, ProfileCatalog};
use pierre_pose_core::errors::{AppError, AppResult};
use pierre_pose_core::models::{ExerciseAnalysis, ExerciseType, Landmark};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Statistics of one session, as reported when it ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise currently analyzed
    pub exercise: ExerciseType,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Frames analyzed since the last reset or exercise switch
    pub frames: u64,
    /// Frames rejected for insufficient visibility
    pub low_confidence_frames: u64,
    /// Completed repetitions
    pub total_reps: u32,
    /// Completed sets
    pub sets: u32,
    /// Whole seconds held (hold exercises)
    pub held_seconds: u32,
    /// Mean form score over assessed frames
    pub average_form_score: Option<f64>,
}

#[derive(Debug)]
struct Session {
    analyzer: ExerciseAnalyzer,
    started_at: DateTime<Utc>,
    frames: u64,
    low_confidence_frames: u64,
    score_total: u64,
    scored_frames: u64,
}

impl Session {
    fn new(analyzer: ExerciseAnalyzer) -> Self {
        Self {
            analyzer,
            started_at: Utc::now(),
            frames: 0,
            low_confidence_frames: 0,
            score_total: 0,
            scored_frames: 0,
        }
    }

    fn record(&mut self, analysis: &ExerciseAnalysis) {
        self.frames += 1;
        match analysis.form_score {
            Some(score) => {
                self.score_total += u64::from(score);
                self.scored_frames += 1;
            }
            None => self.low_confidence_frames += 1,
        }
    }

    fn clear_statistics(&mut self) {
        self.frames = 0;
        self.low_confidence_frames = 0;
        self.score_total = 0;
        self.scored_frames = 0;
    }

    fn summary(&self, session_id: Uuid) -> SessionSummary {
        let state = self.analyzer.state();
        SessionSummary {
            session_id,
            exercise: self.analyzer.profile().exercise,
            started_at: self.started_at,
            frames: self.frames,
            low_confidence_frames: self.low_confidence_frames,
            total_reps: state.rep_count,
            sets: state.set_count,
            held_seconds: state.held_seconds(),
            average_form_score: (self.scored_frames > 0)
                .then(|| self.score_total as f64 / self.scored_frames as f64),
        }
    }
}

/// Registry of active sessions
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    catalog: Arc<ProfileCatalog>,
    settings: AnalyzerSettings,
    sessions: Arc<DashMap<Uuid, Session>>,
}

impl SessionRegistry {
    /// Registry creating analyzers from `catalog` with `settings`
    #[must_use]
    pub fn new(catalog: Arc<ProfileCatalog>, settings: AnalyzerSettings) -> Self {
        Self {
            catalog,
            settings,
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Start a session for `exercise`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedExercise` if the catalog has no profile for it
    /// and `ValueOutOfRange` if the registry's settings are invalid
    pub fn start(&self, exercise: ExerciseType) -> AppResult<Uuid> {
        let profile = self.catalog.profile(exercise)?;
        let analyzer = ExerciseAnalyzer::checked(profile, self.settings.clone())?;
        let session_id = Uuid::new_v4();
        self.sessions.insert(session_id, Session::new(analyzer));
        info!(%session_id, %exercise, "Session started");
        Ok(session_id)
    }

    /// Start a session for an exercise name such as `"push-up"`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedExercise` for unknown names
    pub fn start_named(&self, name: &str) -> AppResult<Uuid> {
        let exercise = self.catalog.resolve(name)?.exercise;
        self.start(exercise)
    }

    /// Analyze the next frame of a session
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn analyze(&self, session_id: Uuid, landmarks: &[Landmark]) -> AppResult<ExerciseAnalysis> {
        self.with_session(session_id, |session| {
            let analysis = session.analyzer.analyze(landmarks);
            session.record(&analysis);
            analysis
        })
    }

    /// Analyze a session frame captured at `timestamp_ms`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn analyze_at(
        &self,
        session_id: Uuid,
        landmarks: &[Landmark],
        timestamp_ms: u64,
    ) -> AppResult<ExerciseAnalysis> {
        self.with_session(session_id, |session| {
            let analysis = session.analyzer.analyze_at(landmarks, timestamp_ms);
            session.record(&analysis);
            analysis
        })
    }

    /// Switch a session to another exercise; counts and statistics start over
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions and
    /// `UnsupportedExercise` if the catalog has no profile for `exercise`
    pub fn switch_exercise(&self, session_id: Uuid, exercise: ExerciseType) -> AppResult<()> {
        let profile = self.catalog.profile(exercise)?;
        self.with_session(session_id, |session| {
            session.analyzer.switch_exercise(profile);
            session.clear_statistics();
        })
    }

    /// Clear a session's counts and statistics
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn reset(&self, session_id: Uuid) -> AppResult<()> {
        self.with_session(session_id, |session| {
            session.analyzer.reset();
            session.clear_statistics();
        })
    }

    /// Close the session's current partial set
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn complete_set(&self, session_id: Uuid) -> AppResult<bool> {
        self.with_session(session_id, |session| session.analyzer.complete_set())
    }

    /// Current summary of a session
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn summary(&self, session_id: Uuid) -> AppResult<SessionSummary> {
        self.sessions
            .get(&session_id)
            .map(|session| session.summary(session_id))
            .ok_or_else(|| not_found(session_id))
    }

    /// End a session and return its final summary
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn end(&self, session_id: Uuid) -> AppResult<SessionSummary> {
        let (_, session) = self
            .sessions
            .remove(&session_id)
            .ok_or_else(|| not_found(session_id))?;
        let summary = session.summary(session_id);
        info!(
            %session_id,
            exercise = %summary.exercise,
            total_reps = summary.total_reps,
            sets = summary.sets,
            frames = summary.frames,
            "Session ended"
        );
        Ok(summary)
    }

    /// Number of sessions in progress
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    fn with_session<T>(
        &self,
        session_id: Uuid,
        operation: impl FnOnce(&mut Session) -> T,
    ) -> AppResult<T> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| not_found(session_id))?;
        Ok(operation(entry.value_mut()))
    }
}

fn not_found(session_id: Uuid) -> AppError {
    AppError::not_found(format!("Session {session_id}")).with_session_id(session_id.to_string())
}
