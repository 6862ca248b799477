// ABOUTME: Synthetic side-view skeletons and movement cycles for every supported exercise
// ABOUTME: Drives the simulate command, integration tests, and benchmarks without a camera
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic poses
//!
//! Skeletons are drawn in normalized image coordinates, seen from the side
//! with the athlete facing +x. Each exercise has a keyframed movement cycle
//! over one scalar (knee angle for squats, heel lift for calf raises, ...);
//! [`pose_for`] maps cycle progress in `[0, 1]` to a full 33-landmark frame.

use pierre_pose_core::constants::pose::LANDMARK_COUNT;
use pierre_pose_core::models::{ExerciseType, Landmark, PoseFrame, PoseLandmark};

/// Visibility given to every generated landmark
pub const DEFAULT_VISIBILITY: f64 = 0.9;

const SHIN: f64 = 0.2;
const THIGH: f64 = 0.2;
const TORSO: f64 = 0.3;
const FOREARM: f64 = 0.15;

type Point = (f64, f64);

/// Joint positions of one side of the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limbs {
    /// Shoulder
    pub shoulder: Point,
    /// Elbow
    pub elbow: Point,
    /// Wrist
    pub wrist: Point,
    /// Hip
    pub hip: Point,
    /// Knee
    pub knee: Point,
    /// Ankle
    pub ankle: Point,
    /// Heel
    pub heel: Point,
    /// Toe (foot index)
    pub toe: Point,
}

impl Limbs {
    /// Standing leg with the given knee angle and torso lean, both in degrees
    #[must_use]
    pub fn standing(knee_degrees: f64, torso_lean_degrees: f64) -> Self {
        let knee = (0.5, 0.7);
        let theta = knee_degrees.to_radians();
        let hip = (knee.0 - THIGH * theta.sin(), knee.1 + THIGH * theta.cos());
        let lean = torso_lean_degrees.to_radians();
        let shoulder = (hip.0 + TORSO * lean.sin(), hip.1 - TORSO * lean.cos());
        Self {
            shoulder,
            elbow: (shoulder.0, shoulder.1 + FOREARM),
            wrist: (shoulder.0 + 0.05, shoulder.1 + 2.0 * FOREARM),
            hip,
            knee,
            ankle: (0.5, knee.1 + SHIN),
            heel: (0.47, 0.92),
            toe: (0.56, 0.92),
        }
    }

    /// Horizontal body on the floor with straight legs
    #[must_use]
    pub fn horizontal(elbow_degrees: f64, hip_sag: f64) -> Self {
        let shoulder = (0.3, 0.5);
        let elbow = (0.3, 0.5 + FOREARM);
        let theta = elbow_degrees.to_radians();
        Self {
            shoulder,
            elbow,
            wrist: (
                elbow.0 + FOREARM * theta.sin(),
                elbow.1 - FOREARM * theta.cos(),
            ),
            hip: (0.55, 0.5 + hip_sag),
            knee: (0.675, 0.5 + hip_sag / 2.0),
            ankle: (0.8, 0.5),
            heel: (0.79, 0.47),
            toe: (0.83, 0.56),
        }
    }

    /// Lift the heel by `lift` shin lengths above the toes
    #[must_use]
    pub fn with_heel_lift(mut self, lift: f64) -> Self {
        self.heel.1 = self.toe.1 - lift * SHIN;
        self
    }

    /// Drive the knee toward the chest so the hip angle becomes `hip_degrees`
    #[must_use]
    pub fn with_knee_drive(mut self, hip_degrees: f64) -> Self {
        let phi = hip_degrees.to_radians();
        self.knee = (
            self.hip.0 - THIGH * phi.cos(),
            self.hip.1 + THIGH * phi.sin(),
        );
        self.ankle = (self.knee.0 + SHIN, self.knee.1 + 0.02);
        self.heel = (self.ankle.0 - 0.01, self.ankle.1 - 0.03);
        self.toe = (self.ankle.0 + 0.03, self.ankle.1 + 0.06);
        self
    }
}

/// Full frame from the two sides of the body
#[must_use]
pub fn skeleton(left: &Limbs, right: &Limbs, visibility: f64) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.3, 0.2, visibility); LANDMARK_COUNT];
    for (limbs, joints) in [(left, LEFT_JOINTS), (right, RIGHT_JOINTS)] {
        let points = [
            limbs.shoulder,
            limbs.elbow,
            limbs.wrist,
            limbs.hip,
            limbs.knee,
            limbs.ankle,
            limbs.heel,
            limbs.toe,
        ];
        for (joint, (x, y)) in joints.iter().zip(points) {
            landmarks[joint.index()] = Landmark::new(x, y, visibility);
        }
    }
    landmarks
}

const LEFT_JOINTS: [PoseLandmark; 8] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::LeftElbow,
    PoseLandmark::LeftWrist,
    PoseLandmark::LeftHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::LeftAnkle,
    PoseLandmark::LeftHeel,
    PoseLandmark::LeftFootIndex,
];

const RIGHT_JOINTS: [PoseLandmark; 8] = [
    PoseLandmark::RightShoulder,
    PoseLandmark::RightElbow,
    PoseLandmark::RightWrist,
    PoseLandmark::RightHip,
    PoseLandmark::RightKnee,
    PoseLandmark::RightAnkle,
    PoseLandmark::RightHeel,
    PoseLandmark::RightFootIndex,
];

fn symmetric(limbs: &Limbs) -> Vec<Landmark> {
    skeleton(limbs, limbs, DEFAULT_VISIBILITY)
}

/// Squat with both knees at `knee_degrees`, torso upright
#[must_use]
pub fn squat_pose(knee_degrees: f64) -> Vec<Landmark> {
    symmetric(&Limbs::standing(knee_degrees, 0.0))
}

/// Push-up with both elbows at `elbow_degrees`, body straight
#[must_use]
pub fn push_up_pose(elbow_degrees: f64) -> Vec<Landmark> {
    symmetric(&Limbs::horizontal(elbow_degrees, 0.0))
}

/// Forearm plank whose shoulder-hip-ankle angle is `body_line_degrees`
#[must_use]
pub fn plank_pose(body_line_degrees: f64) -> Vec<Landmark> {
    let half_bend = ((180.0 - body_line_degrees) / 2.0).to_radians();
    let sag = 0.25 * half_bend.tan();
    symmetric(&Limbs::horizontal(90.0, sag))
}

/// Standing calf raise with heels `lift` shin lengths above the toes
#[must_use]
pub fn calf_raise_pose(lift: f64) -> Vec<Landmark> {
    symmetric(&Limbs::standing(178.0, 0.0).with_heel_lift(lift))
}

/// Burpee frame from knee angle and torso lean
#[must_use]
pub fn burpee_pose(knee_degrees: f64, torso_lean_degrees: f64) -> Vec<Landmark> {
    symmetric(&Limbs::standing(knee_degrees, torso_lean_degrees))
}

/// Mountain climber with the left knee driven to `lead_hip_degrees`
#[must_use]
pub fn mountain_climber_pose(lead_hip_degrees: f64) -> Vec<Landmark> {
    let base = Limbs::horizontal(175.0, 0.0);
    skeleton(
        &base.with_knee_drive(lead_hip_degrees),
        &base,
        DEFAULT_VISIBILITY,
    )
}

/// Set every landmark's visibility, e.g. to simulate occlusion
#[must_use]
pub fn with_visibility(mut landmarks: Vec<Landmark>, visibility: f64) -> Vec<Landmark> {
    for landmark in &mut landmarks {
        landmark.visibility = Some(visibility);
    }
    landmarks
}

const SQUAT_CYCLE: [(f64, f64); 4] = [(0.0, 170.0), (0.25, 120.0), (0.5, 95.0), (1.0, 170.0)];
const LUNGE_CYCLE: [(f64, f64); 3] = [(0.0, 170.0), (0.5, 95.0), (1.0, 170.0)];
const PUSH_UP_CYCLE: [(f64, f64); 3] = [(0.0, 170.0), (0.5, 85.0), (1.0, 170.0)];
const CALF_RAISE_CYCLE: [(f64, f64); 3] = [(0.0, 0.0), (0.5, 0.3), (1.0, 0.0)];
const MOUNTAIN_CLIMBER_CYCLE: [(f64, f64); 3] = [(0.0, 170.0), (0.5, 70.0), (1.0, 170.0)];
// stand, squat, plank, squat, stand
const BURPEE_KNEE_CYCLE: [(f64, f64); 5] = [
    (0.0, 175.0),
    (0.2, 90.0),
    (0.5, 175.0),
    (0.8, 90.0),
    (1.0, 175.0),
];
const BURPEE_LEAN_CYCLE: [(f64, f64); 5] =
    [(0.0, 0.0), (0.2, 10.0), (0.5, 90.0), (0.8, 10.0), (1.0, 0.0)];

/// Piecewise-linear value of `keys` at `progress`
#[must_use]
pub fn interpolate(keys: &[(f64, f64)], progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    keys.windows(2)
        .find(|pair| t <= pair[1].0)
        .map_or_else(
            || keys.last().map_or(0.0, |key| key.1),
            |pair| {
                let (t0, v0) = pair[0];
                let (t1, v1) = pair[1];
                if t1 - t0 <= f64::EPSILON {
                    v1
                } else {
                    v0 + (v1 - v0) * (t - t0) / (t1 - t0)
                }
            },
        )
}

/// Frame at `progress` through one movement cycle of `exercise`
#[must_use]
pub fn pose_for(exercise: ExerciseType, progress: f64) -> Vec<Landmark> {
    match exercise {
        ExerciseType::Squat => squat_pose(interpolate(&SQUAT_CYCLE, progress)),
        ExerciseType::Lunge => squat_pose(interpolate(&LUNGE_CYCLE, progress)),
        ExerciseType::PushUp => push_up_pose(interpolate(&PUSH_UP_CYCLE, progress)),
        ExerciseType::Plank => plank_pose(175.0),
        ExerciseType::CalfRaise => calf_raise_pose(interpolate(&CALF_RAISE_CYCLE, progress)),
        ExerciseType::Burpee => burpee_pose(
            interpolate(&BURPEE_KNEE_CYCLE, progress),
            interpolate(&BURPEE_LEAN_CYCLE, progress),
        ),
        ExerciseType::MountainClimber => {
            mountain_climber_pose(interpolate(&MOUNTAIN_CLIMBER_CYCLE, progress))
        }
    }
}

/// Timestamped frames of `cycles` evenly spaced movement cycles
///
/// Produces `fps * seconds` frames; frame `i` is at `i * 1000 / fps` ms.
#[must_use]
pub fn generate(exercise: ExerciseType, fps: u32, seconds: f64, cycles: u32) -> Vec<PoseFrame> {
    if fps == 0 || seconds <= 0.0 {
        return Vec::new();
    }
    let total = (f64::from(fps) * seconds).round() as u64;
    (0..total)
        .map(|index| {
            let progress = (index as f64 / total as f64 * f64::from(cycles)).fract();
            PoseFrame::at(
                index * 1000 / u64::from(fps),
                pose_for(exercise, progress),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_form_engine::features::{extract, Feature};

    fn feature(landmarks: &[Landmark], feature: Feature) -> f64 {
        extract(landmarks, &[feature])
            .unwrap()
            .known(feature, 0.5)
            .unwrap()
    }

    #[test]
    fn test_squat_pose_knee_angle() {
        for angle in [95.0, 120.0, 170.0] {
            let measured = feature(&squat_pose(angle), Feature::KneeAngle);
            assert!((measured - angle).abs() < 1e-6, "{angle} -> {measured}");
        }
    }

    #[test]
    fn test_push_up_pose_is_horizontal() {
        let pose = push_up_pose(90.0);
        assert!((feature(&pose, Feature::ElbowAngle) - 90.0).abs() < 1e-6);
        assert!((feature(&pose, Feature::TorsoLean) - 90.0).abs() < 1e-6);
        assert!((feature(&pose, Feature::BodyLine) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_plank_body_line() {
        assert!((feature(&plank_pose(150.0), Feature::BodyLine) - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_mountain_climber_lead_hip() {
        let pose = mountain_climber_pose(80.0);
        assert!((feature(&pose, Feature::LeadHipAngle) - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_calf_raise_heel_lift() {
        assert!((feature(&calf_raise_pose(0.25), Feature::HeelLift) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_keyframes() {
        assert!((interpolate(&SQUAT_CYCLE, 0.125) - 145.0).abs() < 1e-9);
        assert!((interpolate(&SQUAT_CYCLE, 0.75) - 132.5).abs() < 1e-9);
        assert!((interpolate(&SQUAT_CYCLE, 2.0) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_timestamps() {
        let frames = generate(ExerciseType::Squat, 60, 2.0, 1);
        assert_eq!(frames.len(), 120);
        assert_eq!(frames[0].timestamp_ms, Some(0));
        assert_eq!(frames[60].timestamp_ms, Some(1000));
    }
}
