// ABOUTME: Frame feature extraction from raw pose landmarks
// ABOUTME: Computes named joint angles and ratios (knee angle, hip-knee ratio, knee-over-toe, ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Frame Feature Extraction
//!
//! Converts one frame of landmarks into the named measurements an exercise
//! profile asks for. Extraction is a pure function of the landmarks.

use crate::errors::AnalysisError;
use crate::geometry::{
    angle_at, bilateral_mean, bilateral_min, distance, min_confidence, tilt_from_horizontal,
    tilt_from_vertical,
};
use pierre_pose_core::constants::pose::DEGENERATE_EPSILON;
use pierre_pose_core::models::{AngleResult, Landmark, PoseLandmark};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named measurements derived from a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Hip-knee-ankle angle, degrees
    KneeAngle,
    /// Shoulder-hip-knee angle, degrees
    HipAngle,
    /// Shoulder-elbow-wrist angle, degrees
    ElbowAngle,
    /// Shoulder-hip-ankle angle, degrees; 180 is a straight body
    BodyLine,
    /// Hip-to-shoulder segment against the vertical, degrees; 0 upright, 90 horizontal
    TorsoLean,
    /// Vertical hip-to-knee drop over vertical knee-to-ankle drop; ~1 standing, ~0 at parallel
    HipKneeRatio,
    /// How far the knee travels past the toes along the facing direction, in shin lengths
    KneeOverToe,
    /// Tilt of the ankle-to-ankle line from horizontal, degrees
    FootAlignment,
    /// Heel height above the toes, in shin lengths
    HeelLift,
    /// The more flexed of the two hip angles, degrees
    LeadHipAngle,
}

impl Feature {
    /// Canonical identifier (matches the serde representation)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KneeAngle => "knee_angle",
            Self::HipAngle => "hip_angle",
            Self::ElbowAngle => "elbow_angle",
            Self::BodyLine => "body_line",
            Self::TorsoLean => "torso_lean",
            Self::HipKneeRatio => "hip_knee_ratio",
            Self::KneeOverToe => "knee_over_toe",
            Self::FootAlignment => "foot_alignment",
            Self::HeelLift => "heel_lift",
            Self::LeadHipAngle => "lead_hip_angle",
        }
    }

    /// Landmarks this feature reads
    #[must_use]
    pub const fn landmarks(&self) -> &'static [PoseLandmark] {
        use PoseLandmark as P;
        match self {
            Self::KneeAngle => &[
                P::LeftHip,
                P::LeftKnee,
                P::LeftAnkle,
                P::RightHip,
                P::RightKnee,
                P::RightAnkle,
            ],
            Self::HipAngle | Self::LeadHipAngle => &[
                P::LeftShoulder,
                P::LeftHip,
                P::LeftKnee,
                P::RightShoulder,
                P::RightHip,
                P::RightKnee,
            ],
            Self::ElbowAngle => &[
                P::LeftShoulder,
                P::LeftElbow,
                P::LeftWrist,
                P::RightShoulder,
                P::RightElbow,
                P::RightWrist,
            ],
            Self::BodyLine => &[
                P::LeftShoulder,
                P::LeftHip,
                P::LeftAnkle,
                P::RightShoulder,
                P::RightHip,
                P::RightAnkle,
            ],
            Self::TorsoLean => &[P::LeftShoulder, P::LeftHip, P::RightShoulder, P::RightHip],
            Self::HipKneeRatio => &[
                P::LeftHip,
                P::LeftKnee,
                P::LeftAnkle,
                P::RightHip,
                P::RightKnee,
                P::RightAnkle,
            ],
            Self::KneeOverToe | Self::HeelLift => &[
                P::LeftKnee,
                P::LeftAnkle,
                P::LeftHeel,
                P::LeftFootIndex,
                P::RightKnee,
                P::RightAnkle,
                P::RightHeel,
                P::RightFootIndex,
            ],
            Self::FootAlignment => &[P::LeftAnkle, P::RightAnkle],
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature values for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeMap<Feature, AngleResult>);

impl FeatureSet {
    /// Empty feature set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value
    pub fn insert(&mut self, feature: Feature, result: AngleResult) {
        self.0.insert(feature, result);
    }

    /// Builder-style insert of a value with full confidence, handy in tests and tools
    #[must_use]
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.insert(feature, AngleResult::new(value, 1.0));
        self
    }

    /// Raw result, regardless of confidence
    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<AngleResult> {
        self.0.get(&feature).copied()
    }

    /// Value if present and at least `min_confidence` confident
    #[must_use]
    pub fn known(&self, feature: Feature, min_confidence: f64) -> Option<f64> {
        self.get(feature)
            .filter(|result| result.is_known(min_confidence))
            .map(|result| result.value)
    }

    /// Iterate over features in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, AngleResult)> + '_ {
        self.0.iter().map(|(feature, result)| (*feature, *result))
    }

    /// Number of features recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no feature was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Feature, AngleResult)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (Feature, AngleResult)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Indexed view over one frame's landmarks
#[derive(Debug, Clone, Copy)]
pub struct Skeleton<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> Skeleton<'a> {
    /// Wrap a frame's landmarks
    #[must_use]
    pub const fn new(landmarks: &'a [Landmark]) -> Self {
        Self { landmarks }
    }

    /// Landmark for `joint`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingLandmark` if the frame is too short
    pub fn get(&self, joint: PoseLandmark) -> Result<&'a Landmark, AnalysisError> {
        self.landmarks
            .get(joint.index())
            .ok_or(AnalysisError::MissingLandmark {
                index: joint.index(),
                available: self.landmarks.len(),
            })
    }

    /// Fraction of `joints` whose visibility exceeds `threshold`
    ///
    /// Joints missing from the frame count as not visible.
    #[must_use]
    pub fn visible_fraction(&self, joints: &[PoseLandmark], threshold: f64) -> f64 {
        if joints.is_empty() {
            return 0.0;
        }
        let visible = joints
            .iter()
            .filter(|joint| {
                self.landmarks
                    .get(joint.index())
                    .is_some_and(|landmark| landmark.is_visible_at(threshold))
            })
            .count();
        visible as f64 / joints.len() as f64
    }
}

/// One side of the body
#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    const fn shoulder(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftShoulder,
            Self::Right => PoseLandmark::RightShoulder,
        }
    }
    const fn elbow(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftElbow,
            Self::Right => PoseLandmark::RightElbow,
        }
    }
    const fn wrist(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftWrist,
            Self::Right => PoseLandmark::RightWrist,
        }
    }
    const fn hip(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftHip,
            Self::Right => PoseLandmark::RightHip,
        }
    }
    const fn knee(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftKnee,
            Self::Right => PoseLandmark::RightKnee,
        }
    }
    const fn ankle(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftAnkle,
            Self::Right => PoseLandmark::RightAnkle,
        }
    }
    const fn heel(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftHeel,
            Self::Right => PoseLandmark::RightHeel,
        }
    }
    const fn toe(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftFootIndex,
            Self::Right => PoseLandmark::RightFootIndex,
        }
    }
}

type SideMeasure = fn(&Skeleton<'_>, Side) -> Result<AngleResult, AnalysisError>;

/// Extract `features` from one frame
///
/// # Errors
///
/// Returns `AnalysisError::MissingLandmark` if a landmark a feature needs is
/// not in the frame. Low visibility is not an error; it lowers confidence.
pub fn extract(
    landmarks: &[Landmark],
    features: &[Feature],
) -> Result<FeatureSet, AnalysisError> {
    let skeleton = Skeleton::new(landmarks);
    features
        .iter()
        .map(|feature| Ok((*feature, measure(&skeleton, *feature)?)))
        .collect()
}

/// Compute a single feature
///
/// # Errors
///
/// Returns `AnalysisError::MissingLandmark` if a required landmark is absent
pub fn measure(skeleton: &Skeleton<'_>, feature: Feature) -> Result<AngleResult, AnalysisError> {
    match feature {
        Feature::KneeAngle => both_sides(skeleton, knee_angle),
        Feature::HipAngle => both_sides(skeleton, hip_angle),
        Feature::ElbowAngle => both_sides(skeleton, elbow_angle),
        Feature::BodyLine => both_sides(skeleton, body_line),
        Feature::TorsoLean => both_sides(skeleton, torso_lean),
        Feature::HipKneeRatio => both_sides(skeleton, hip_knee_ratio),
        Feature::KneeOverToe => both_sides(skeleton, knee_over_toe),
        Feature::HeelLift => both_sides(skeleton, heel_lift),
        Feature::FootAlignment => Ok(tilt_from_horizontal(
            skeleton.get(PoseLandmark::LeftAnkle)?,
            skeleton.get(PoseLandmark::RightAnkle)?,
        )),
        Feature::LeadHipAngle => Ok(bilateral_min(
            hip_angle(skeleton, Side::Left)?,
            hip_angle(skeleton, Side::Right)?,
        )),
    }
}

fn both_sides(skeleton: &Skeleton<'_>, side_measure: SideMeasure) -> Result<AngleResult, AnalysisError> {
    Ok(bilateral_mean(
        side_measure(skeleton, Side::Left)?,
        side_measure(skeleton, Side::Right)?,
    ))
}

fn knee_angle(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    Ok(angle_at(s.get(side.hip())?, s.get(side.knee())?, s.get(side.ankle())?))
}

fn hip_angle(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    Ok(angle_at(s.get(side.shoulder())?, s.get(side.hip())?, s.get(side.knee())?))
}

fn elbow_angle(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    Ok(angle_at(s.get(side.shoulder())?, s.get(side.elbow())?, s.get(side.wrist())?))
}

fn body_line(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    Ok(angle_at(s.get(side.shoulder())?, s.get(side.hip())?, s.get(side.ankle())?))
}

fn torso_lean(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    Ok(tilt_from_vertical(s.get(side.hip())?, s.get(side.shoulder())?))
}

fn hip_knee_ratio(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    let hip = s.get(side.hip())?;
    let knee = s.get(side.knee())?;
    let ankle = s.get(side.ankle())?;

    let shin_drop = ankle.y - knee.y;
    if shin_drop.abs() < DEGENERATE_EPSILON {
        return Ok(AngleResult::DEGENERATE);
    }
    Ok(AngleResult::new(
        (knee.y - hip.y) / shin_drop,
        min_confidence(&[hip, knee, ankle]),
    ))
}

fn knee_over_toe(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    let knee = s.get(side.knee())?;
    let ankle = s.get(side.ankle())?;
    let heel = s.get(side.heel())?;
    let toe = s.get(side.toe())?;

    let foot_dx = toe.x - heel.x;
    let shin = distance(knee, ankle);
    if foot_dx.abs() < DEGENERATE_EPSILON || shin < DEGENERATE_EPSILON {
        return Ok(AngleResult::DEGENERATE);
    }
    let facing = foot_dx.signum();
    Ok(AngleResult::new(
        (knee.x - toe.x) * facing / shin,
        min_confidence(&[knee, ankle, heel, toe]),
    ))
}

fn heel_lift(s: &Skeleton<'_>, side: Side) -> Result<AngleResult, AnalysisError> {
    let knee = s.get(side.knee())?;
    let ankle = s.get(side.ankle())?;
    let heel = s.get(side.heel())?;
    let toe = s.get(side.toe())?;

    let shin = distance(knee, ankle);
    if shin < DEGENERATE_EPSILON {
        return Ok(AngleResult::DEGENERATE);
    }
    Ok(AngleResult::new(
        (toe.y - heel.y) / shin,
        min_confidence(&[knee, ankle, heel, toe]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_pose_core::constants::pose::LANDMARK_COUNT;

    /// Side-view standing pose facing +x, both sides overlapping
    fn standing() -> Vec<Landmark> {
        let mut frame = vec![Landmark::new(0.5, 0.5, 0.9); LANDMARK_COUNT];
        let mut set = |joint: PoseLandmark, x: f64, y: f64| {
            frame[joint.index()] = Landmark::new(x, y, 0.9);
        };
        for (shoulder, hip, knee, ankle, heel, toe) in [
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
            set(shoulder, 0.5, 0.2);
            set(hip, 0.5, 0.5);
            set(knee, 0.5, 0.7);
            set(ankle, 0.5, 0.9);
            set(heel, 0.47, 0.92);
            set(toe, 0.56, 0.92);
        }
        frame
    }

    #[test]
    fn test_standing_features() {
        let features = extract(
            &standing(),
            &[
                Feature::KneeAngle,
                Feature::HipAngle,
                Feature::TorsoLean,
                Feature::HipKneeRatio,
                Feature::KneeOverToe,
                Feature::HeelLift,
            ],
        )
        .unwrap();

        let value = |f| features.known(f, 0.5).unwrap();
        assert!((value(Feature::KneeAngle) - 180.0).abs() < 1e-6);
        assert!((value(Feature::HipAngle) - 180.0).abs() < 1e-6);
        assert!(value(Feature::TorsoLean).abs() < 1e-6);
        assert!((value(Feature::HipKneeRatio) - 1.0).abs() < 1e-6);
        assert!((value(Feature::KneeOverToe) + 0.3).abs() < 1e-6);
        assert!(value(Feature::HeelLift).abs() < 1e-6);
    }

    #[test]
    fn test_overlapping_ankles_make_foot_alignment_unknown() {
        let features = extract(&standing(), &[Feature::FootAlignment]).unwrap();
        assert_eq!(features.get(Feature::FootAlignment), Some(AngleResult::DEGENERATE));
        assert_eq!(features.known(Feature::FootAlignment, 0.5), None);
    }

    #[test]
    fn test_short_frame_reports_missing_landmark() {
        let frame = &standing()[..20];
        let error = extract(frame, &[Feature::KneeAngle]).unwrap_err();
        assert_eq!(
            error,
            AnalysisError::MissingLandmark {
                index: PoseLandmark::LeftHip.index(),
                available: 20,
            }
        );
    }

    #[test]
    fn test_lead_hip_takes_more_flexed_side() {
        let mut frame = standing();
        // drive the left knee up towards the chest
        frame[PoseLandmark::LeftKnee.index()] = Landmark::new(0.7, 0.5, 0.9);

        let features = extract(&frame, &[Feature::LeadHipAngle, Feature::HipAngle]).unwrap();
        let lead = features.known(Feature::LeadHipAngle, 0.5).unwrap();
        let mean = features.known(Feature::HipAngle, 0.5).unwrap();
        assert!((lead - 90.0).abs() < 1e-6);
        assert!(lead < mean);
    }

    #[test]
    fn test_visible_fraction_counts_missing_joints_as_hidden() {
        let mut frame = standing();
        frame[PoseLandmark::LeftKnee.index()].visibility = None;
        let skeleton = Skeleton::new(&frame);

        let fraction = skeleton.visible_fraction(&PoseLandmark::LOWER_BODY_CHAIN, 0.5);
        assert!((fraction - 7.0 / 8.0).abs() < 1e-9);

        let short = Skeleton::new(&frame[..12]);
        let fraction = short.visible_fraction(&PoseLandmark::LOWER_BODY_CHAIN, 0.5);
        assert!((fraction - 1.0 / 8.0).abs() < 1e-9);
    }
}
