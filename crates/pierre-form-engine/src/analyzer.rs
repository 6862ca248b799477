// ABOUTME: Generic exercise analyzer composing feature extraction, rep counting, and form scoring
// ABOUTME: One instance per session; parameterized by an exercise profile and analyzer settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Analyzer
//!
//! Per frame the analyzer:
//!
//! 1. measures how many of the profile's required joints are visible,
//! 2. extracts the profile's features,
//! 3. advances the rep/phase state machine (only on confident frames),
//! 4. scores form against the profile's rule table,
//! 5. combines everything into an [`ExerciseAnalysis`].
//!
//! Pose noise never surfaces as an error: a frame with too few visible joints
//! or missing landmarks yields an "insufficient visibility" analysis with the
//! count and phase unchanged. A visible but degenerate frame on which no form
//! rule can be judged gets the same unscored analysis.

use crate::assessment::FormAssessor;
use crate::config::{AnalyzerSettings, ConfigError};
use crate::errors::AnalysisError;
use crate::features::{self, FeatureSet, Skeleton};
use crate::feedback::MessageKey;
use crate::profiles::ExerciseProfile;
use crate::reps::{self, FrameContext, RepState, Transition};
use pierre_pose_core::models::{
    ExerciseAnalysis, ExerciseType, FormAssessment, Landmark, PoseFrame, PoseLandmark,
};
use std::sync::Arc;
use tracing::{debug, info};

/// One processed frame, borrowed from the caller for the duration of a call
#[derive(Debug, Clone)]
pub struct FrameAnalysisData<'a> {
    /// Raw landmarks of the frame
    pub landmarks: &'a [Landmark],
    /// Extracted features
    pub angles: FeatureSet,
    /// Frame time in milliseconds
    pub timestamp_ms: u64,
    /// Fraction of required joints visible
    pub confidence: f64,
    /// Exercise the frame is analyzed as
    pub exercise_type: ExerciseType,
}

/// Stateful analyzer for one exercise stream
#[derive(Debug, Clone)]
pub struct ExerciseAnalyzer {
    profile: Arc<ExerciseProfile>,
    required_joints: Vec<PoseLandmark>,
    settings: AnalyzerSettings,
    state: RepState,
}

impl ExerciseAnalyzer {
    /// Analyzer for `profile`, rejecting out-of-range settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if `settings` fail validation
    pub fn checked(
        profile: Arc<ExerciseProfile>,
        settings: AnalyzerSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::new(profile, settings))
    }

    /// Analyzer for `profile`
    ///
    /// Settings are used as given; see [`Self::checked`].
    #[must_use]
    pub fn new(profile: Arc<ExerciseProfile>, settings: AnalyzerSettings) -> Self {
        let required_joints = profile.required_joints();
        Self {
            profile,
            required_joints,
            settings,
            state: RepState::default(),
        }
    }

    /// Analyze a frame, timestamped `frame_interval_ms` after the previous one
    pub fn analyze(&mut self, landmarks: &[Landmark]) -> ExerciseAnalysis {
        let timestamp_ms = self
            .state
            .last_timestamp_ms
            .map_or(0, |last| last.saturating_add(self.settings.frame_interval_ms));
        self.analyze_at(landmarks, timestamp_ms)
    }

    /// Analyze a frame, using its timestamp when it has one
    pub fn analyze_frame(&mut self, frame: &PoseFrame) -> ExerciseAnalysis {
        match frame.timestamp_ms {
            Some(timestamp_ms) => self.analyze_at(&frame.landmarks, timestamp_ms),
            None => self.analyze(&frame.landmarks),
        }
    }

    /// Analyze a frame captured at `timestamp_ms`
    pub fn analyze_at(&mut self, landmarks: &[Landmark], timestamp_ms: u64) -> ExerciseAnalysis {
        match self.prepare(landmarks, timestamp_ms) {
            Ok(frame) if frame.confidence >= self.settings.frame_confidence_floor => {
                self.process(&frame)
            }
            Ok(frame) => {
                debug!(
                    exercise = %self.profile.exercise,
                    confidence = frame.confidence,
                    "Frame below confidence floor"
                );
                self.insufficient(frame.confidence, timestamp_ms)
            }
            Err(error) => {
                debug!(exercise = %self.profile.exercise, %error, "Frame missing landmarks");
                let confidence = self.visible_fraction(landmarks);
                self.insufficient(confidence, timestamp_ms)
            }
        }
    }

    /// Measure visibility and extract features without touching state
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingLandmark` if the frame is too short for
    /// one of the profile's features
    pub fn prepare<'a>(
        &self,
        landmarks: &'a [Landmark],
        timestamp_ms: u64,
    ) -> Result<FrameAnalysisData<'a>, AnalysisError> {
        let angles = features::extract(landmarks, &self.profile.features)?;
        Ok(FrameAnalysisData {
            landmarks,
            angles,
            timestamp_ms,
            confidence: self.visible_fraction(landmarks),
            exercise_type: self.profile.exercise,
        })
    }

    /// Score form on a frame without advancing the state machine
    #[must_use]
    pub fn assess(&self, features: &FeatureSet) -> FormAssessment {
        self.assessor().assess(features)
    }

    fn process(&mut self, frame: &FrameAnalysisData<'_>) -> ExerciseAnalysis {
        let (state, transition) = reps::advance(
            self.state,
            &self.profile.counting,
            &frame.angles,
            self.frame_context(true, frame.timestamp_ms),
        );
        self.state = state;
        self.log_transition(transition);

        let assessor = self.assessor();
        if !assessor.can_assess(&frame.angles) {
            debug!(exercise = %self.profile.exercise, "No form rule could be judged");
            return self.unassessed(frame.confidence);
        }
        let assessment = assessor.assess(&frame.angles);

        ExerciseAnalysis {
            exercise_type: frame.exercise_type,
            current_count: self.current_count(),
            is_correct_form: assessment.passes(self.settings.passing_score),
            feedback: assessor.headline(&assessment),
            confidence: frame.confidence,
            phase: self.state.phase,
            set_count: self.state.set_count,
            form_score: Some(assessment.score),
        }
    }

    fn insufficient(&mut self, confidence: f64, timestamp_ms: u64) -> ExerciseAnalysis {
        let (state, _) = reps::advance(
            self.state,
            &self.profile.counting,
            &FeatureSet::new(),
            self.frame_context(false, timestamp_ms),
        );
        self.state = state;
        self.unassessed(confidence)
    }

    fn unassessed(&self, confidence: f64) -> ExerciseAnalysis {
        ExerciseAnalysis {
            exercise_type: self.profile.exercise,
            current_count: self.current_count(),
            is_correct_form: false,
            feedback: MessageKey::InsufficientVisibility
                .text(self.settings.locale)
                .to_owned(),
            confidence,
            phase: self.state.phase,
            set_count: self.state.set_count,
            form_score: None,
        }
    }

    fn log_transition(&self, transition: Transition) {
        let exercise = self.profile.exercise;
        match transition {
            Transition::Ignored | Transition::Unchanged => {}
            Transition::Entered { from, to } => {
                debug!(%exercise, %from, %to, "Phase transition");
            }
            Transition::RepCompleted { rep_count } => {
                info!(%exercise, rep_count, "Repetition completed");
            }
            Transition::SetCompleted {
                rep_count,
                set_count,
            } => {
                info!(%exercise, rep_count, set_count, "Set completed");
            }
        }
    }

    const fn frame_context(&self, confident: bool, timestamp_ms: u64) -> FrameContext {
        FrameContext {
            confident,
            timestamp_ms,
            min_feature_confidence: self.settings.min_feature_confidence,
            reps_per_set: self.settings.reps_per_set,
        }
    }

    fn assessor(&self) -> FormAssessor<'_> {
        FormAssessor::new(
            &self.profile.rules,
            self.settings.min_feature_confidence,
            self.settings.locale,
        )
    }

    fn visible_fraction(&self, landmarks: &[Landmark]) -> f64 {
        Skeleton::new(landmarks)
            .visible_fraction(&self.required_joints, self.settings.visibility_threshold)
    }

    /// Reps completed, or whole seconds held for hold exercises
    #[must_use]
    pub fn current_count(&self) -> u32 {
        self.state.display_count(&self.profile.counting)
    }

    /// Clear counts and return to `Ready`
    pub fn reset(&mut self) {
        debug!(exercise = %self.profile.exercise, "Analyzer reset");
        self.state = RepState::default();
    }

    /// Change exercise; counts start over
    pub fn switch_exercise(&mut self, profile: Arc<ExerciseProfile>) {
        info!(
            from = %self.profile.exercise,
            to = %profile.exercise,
            "Switching exercise"
        );
        self.required_joints = profile.required_joints();
        self.profile = profile;
        self.state = RepState::default();
    }

    /// Close the current partial set; returns whether one was closed
    pub fn complete_set(&mut self) -> bool {
        let (state, closed) = self.state.close_set();
        self.state = state;
        if closed {
            info!(
                exercise = %self.profile.exercise,
                set_count = state.set_count,
                "Set completed"
            );
        }
        closed
    }

    /// Current counting state
    #[must_use]
    pub const fn state(&self) -> &RepState {
        &self.state
    }

    /// Profile in use
    #[must_use]
    pub const fn profile(&self) -> &Arc<ExerciseProfile> {
        &self.profile
    }

    /// Settings in use
    #[must_use]
    pub const fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Locale;
    use crate::profiles::ProfileCatalog;
    use pierre_pose_core::constants::pose::LANDMARK_COUNT;
    use pierre_pose_core::models::Phase;

    /// Side-view squat skeleton with the given knee angle
    fn squat_pose(knee_degrees: f64, visibility: f64) -> Vec<Landmark> {
        let theta = knee_degrees.to_radians();
        let hip = (0.5 - 0.2 * theta.sin(), 0.7 + 0.2 * theta.cos());
        let mut landmarks = vec![Landmark::new(0.5, 0.1, visibility); LANDMARK_COUNT];
        let mut place = |joint: PoseLandmark, (x, y): (f64, f64)| {
            landmarks[joint.index()] = Landmark::new(x, y, visibility);
        };
        for (shoulder, hip_joint, knee, ankle, heel, toe) in [
            (
                PoseLandmark::LeftShoulder,
                PoseLandmark::LeftHip,
                PoseLandmark::LeftKnee,
                PoseLandmark::LeftAnkle,
                PoseLandmark::LeftHeel,
                PoseLandmark::LeftFootIndex,
            ),
            (
                PoseLandmark::RightShoulder,
                PoseLandmark::RightHip,
                PoseLandmark::RightKnee,
                PoseLandmark::RightAnkle,
                PoseLandmark::RightHeel,
                PoseLandmark::RightFootIndex,
            ),
        ] {
            place(shoulder, (hip.0, hip.1 - 0.3));
            place(hip_joint, hip);
            place(knee, (0.5, 0.7));
            place(ankle, (0.5, 0.9));
            place(heel, (0.47, 0.92));
            place(toe, (0.56, 0.92));
        }
        landmarks
    }

    fn squat_analyzer_with(settings: AnalyzerSettings) -> ExerciseAnalyzer {
        let profile = ProfileCatalog::builtin().resolve("squat").unwrap();
        ExerciseAnalyzer::checked(profile, settings).unwrap()
    }

    fn squat_analyzer() -> ExerciseAnalyzer {
        squat_analyzer_with(AnalyzerSettings::default())
    }

    #[test]
    fn test_squat_cycle_counts_one_rep() {
        let mut analyzer = squat_analyzer();
        let mut last = None;
        for angle in [170.0, 150.0, 130.0, 115.0, 100.0, 120.0, 150.0, 170.0] {
            last = Some(analyzer.analyze(&squat_pose(angle, 0.9)));
        }
        let last = last.unwrap();
        assert_eq!(last.current_count, 1);
        assert_eq!(last.phase, Phase::Ready);
        assert!((last.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_depth_penalties() {
        let analyzer = squat_analyzer();

        let deep_frame = squat_pose(85.0, 0.9);
        let deep = analyzer.prepare(&deep_frame, 0).unwrap();
        let assessment = analyzer.assess(&deep.angles);
        assert_eq!(assessment.score, 85);
        assert_eq!(assessment.issues.first().map(String::as_str), Some("Squatting too deep"));

        let shallow_frame = squat_pose(140.0, 0.9);
        let shallow = analyzer.prepare(&shallow_frame, 0).unwrap();
        let assessment = analyzer.assess(&shallow.angles);
        assert_eq!(assessment.score, 80);
        assert_eq!(assessment.issues, vec!["Depth insufficient".to_owned()]);
    }

    #[test]
    fn test_invisible_frame_reports_insufficient_visibility() {
        let mut analyzer = squat_analyzer();
        analyzer.analyze(&squat_pose(170.0, 0.9));
        analyzer.analyze(&squat_pose(130.0, 0.9));
        let before = *analyzer.state();

        let analysis = analyzer.analyze(&squat_pose(175.0, 0.0));
        assert!(!analysis.is_correct_form);
        assert_eq!(
            analysis.feedback,
            MessageKey::InsufficientVisibility.text(Locale::English)
        );
        assert!(analysis.confidence.abs() < f64::EPSILON);
        assert_eq!(analysis.form_score, None);
        assert_eq!(analysis.phase, before.phase);
        assert_eq!(analyzer.state().rep_count, before.rep_count);
    }

    #[test]
    fn test_collapsed_frame_is_not_scored() {
        let mut analyzer = squat_analyzer();
        let collapsed = vec![Landmark::new(0.5, 0.5, 1.0); LANDMARK_COUNT];

        let analysis = analyzer.analyze(&collapsed);
        assert!((analysis.confidence - 1.0).abs() < 1e-9);
        assert_eq!(analysis.form_score, None);
        assert!(!analysis.is_correct_form);
        assert_eq!(
            analysis.feedback,
            MessageKey::InsufficientVisibility.text(Locale::English)
        );
        assert_eq!(analysis.current_count, 0);
    }

    #[test]
    fn test_truncated_frame_does_not_error() {
        let mut analyzer = squat_analyzer();
        let mut landmarks = squat_pose(170.0, 0.9);
        landmarks.truncate(20);

        let analysis = analyzer.analyze(&landmarks);
        assert_eq!(analysis.form_score, None);
        assert!(analysis.confidence < 0.5);
        assert_eq!(analysis.current_count, 0);
    }

    #[test]
    fn test_untimed_frames_advance_internal_clock() {
        let mut analyzer = squat_analyzer();
        analyzer.analyze(&squat_pose(170.0, 0.9));
        analyzer.analyze(&squat_pose(170.0, 0.9));
        assert_eq!(
            analyzer.state().last_timestamp_ms,
            Some(analyzer.settings().frame_interval_ms)
        );

        analyzer.analyze_frame(&PoseFrame::at(5_000, squat_pose(170.0, 0.9)));
        assert_eq!(analyzer.state().last_timestamp_ms, Some(5_000));
    }

    #[test]
    fn test_internal_clock_saturates_after_epoch_timestamps() {
        let mut analyzer = squat_analyzer();
        let frame = squat_pose(170.0, 0.9);
        analyzer.analyze_at(&frame, u64::MAX - 1);

        let analysis = analyzer.analyze(&frame);
        assert_eq!(analyzer.state().last_timestamp_ms, Some(u64::MAX));
        assert_eq!(analysis.current_count, 0);
    }

    #[test]
    fn test_switch_exercise_resets_counts() {
        let catalog = ProfileCatalog::builtin();
        let mut analyzer = squat_analyzer();
        for angle in [170.0, 130.0, 100.0, 170.0] {
            analyzer.analyze(&squat_pose(angle, 0.9));
        }
        assert_eq!(analyzer.current_count(), 1);
        assert!(analyzer.complete_set());
        assert_eq!(analyzer.state().set_count, 1);

        analyzer.switch_exercise(catalog.profile(ExerciseType::Lunge).unwrap());
        assert_eq!(analyzer.profile().exercise, ExerciseType::Lunge);
        assert_eq!(*analyzer.state(), RepState::default());
    }

    #[test]
    fn test_korean_feedback() {
        let settings = AnalyzerSettings::default().with_locale(Locale::Korean);
        let mut analyzer = squat_analyzer_with(settings);
        let analysis = analyzer.analyze(&squat_pose(140.0, 0.9));
        assert_eq!(analysis.feedback, MessageKey::DepthInsufficient.text(Locale::Korean));
    }

    #[test]
    fn test_checked_rejects_nan_confidence_floor() {
        let profile = ProfileCatalog::builtin()
            .profile(ExerciseType::Squat)
            .unwrap();
        let settings = AnalyzerSettings {
            frame_confidence_floor: f64::NAN,
            ..AnalyzerSettings::default()
        };
        assert!(matches!(
            ExerciseAnalyzer::checked(Arc::clone(&profile), settings),
            Err(ConfigError::InvalidRange(_))
        ));
        assert!(ExerciseAnalyzer::checked(profile, AnalyzerSettings::default()).is_ok());
    }
}
