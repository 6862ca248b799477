// ABOUTME: Built-in squat profile: depth, knee tracking, torso, and stance rules
// ABOUTME: Counts reps on knee-angle hysteresis gated by hip-knee depth ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{all, rule, when, ExerciseProfile};
use crate::features::Feature;
use crate::feedback::MessageKey;
use crate::rules::{Comparison, CountingRules};
use pierre_pose_core::models::ExerciseType;

/// Knee angle below which the squat is deeper than intended (degrees)
pub const MIN_SQUAT_ANGLE: f64 = 90.0;
/// Knee angle above which the squat is not deep enough (degrees)
pub const IDEAL_DEPTH_ANGLE: f64 = 100.0;
/// Knee angle that starts a rep (degrees)
pub const CONTRACT_KNEE_ANGLE: f64 = 140.0;
/// Hip-knee ratio that must also be crossed to start a rep
pub const CONTRACT_HIP_KNEE_RATIO: f64 = 0.9;
/// Knee angle that marks the bottom of a rep (degrees)
pub const RELAX_KNEE_ANGLE: f64 = 110.0;
/// Knee angle that counts as standing again (degrees)
pub const STANDING_KNEE_ANGLE: f64 = 160.0;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::Squat,
        features: vec![
            Feature::KneeAngle,
            Feature::HipKneeRatio,
            Feature::KneeOverToe,
            Feature::TorsoLean,
            Feature::FootAlignment,
        ],
        rules: vec![
            rule(
                Feature::KneeAngle,
                Comparison::Below(MIN_SQUAT_ANGLE),
                15,
                MessageKey::TooDeep,
                MessageKey::ControlDepth,
                None,
            ),
            rule(
                Feature::KneeAngle,
                Comparison::Above(IDEAL_DEPTH_ANGLE),
                20,
                MessageKey::DepthInsufficient,
                MessageKey::GoLower,
                Some(MessageKey::GoodDepth),
            ),
            rule(
                Feature::KneeOverToe,
                Comparison::Above(0.3),
                15,
                MessageKey::KneesPastToes,
                MessageKey::KeepKneesBehindToes,
                Some(MessageKey::KneesTracking),
            ),
            rule(
                Feature::TorsoLean,
                Comparison::Above(45.0),
                15,
                MessageKey::LeaningForward,
                MessageKey::ChestUp,
                Some(MessageKey::UprightTorso),
            ),
            rule(
                Feature::FootAlignment,
                Comparison::Above(10.0),
                10,
                MessageKey::UnevenStance,
                MessageKey::EvenOutFeet,
                Some(MessageKey::StableStance),
            ),
        ],
        counting: CountingRules::Repetitions {
            contract: all(vec![
                when(Feature::KneeAngle, Comparison::Below(CONTRACT_KNEE_ANGLE)),
                when(
                    Feature::HipKneeRatio,
                    Comparison::Below(CONTRACT_HIP_KNEE_RATIO),
                ),
            ]),
            relax: all(vec![when(
                Feature::KneeAngle,
                Comparison::Below(RELAX_KNEE_ANGLE),
            )]),
            ready: all(vec![when(
                Feature::KneeAngle,
                Comparison::Above(STANDING_KNEE_ANGLE),
            )]),
        },
    }
}
