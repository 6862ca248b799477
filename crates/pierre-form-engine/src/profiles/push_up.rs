// ABOUTME: Built-in push-up profile: elbow range and body-line rules
// ABOUTME: Counts reps on elbow-angle hysteresis while the torso is near horizontal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{all, rule, when, ExerciseProfile};
use crate::features::Feature;
use crate::feedback::MessageKey;
use crate::rules::{Comparison, CountingRules};
use pierre_pose_core::models::ExerciseType;

/// Elbow angle above which the bottom of the rep is too shallow (degrees)
pub const SHALLOW_ELBOW_ANGLE: f64 = 100.0;
/// Shoulder-hip-ankle angle below which the hips sag or pike (degrees)
pub const MIN_BODY_LINE: f64 = 160.0;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::PushUp,
        features: vec![Feature::ElbowAngle, Feature::BodyLine, Feature::TorsoLean],
        rules: vec![
            rule(
                Feature::ElbowAngle,
                Comparison::Above(SHALLOW_ELBOW_ANGLE),
                20,
                MessageKey::ShallowRep,
                MessageKey::LowerChest,
                Some(MessageKey::FullRange),
            ),
            rule(
                Feature::BodyLine,
                Comparison::Below(MIN_BODY_LINE),
                20,
                MessageKey::HipsOutOfLine,
                MessageKey::BraceCore,
                Some(MessageKey::StraightBody),
            ),
        ],
        // torso lean gates out arm bends while standing
        counting: CountingRules::Repetitions {
            contract: all(vec![
                when(Feature::ElbowAngle, Comparison::Below(140.0)),
                when(Feature::TorsoLean, Comparison::Above(45.0)),
            ]),
            relax: all(vec![when(
                Feature::ElbowAngle,
                Comparison::Below(SHALLOW_ELBOW_ANGLE),
            )]),
            ready: all(vec![when(Feature::ElbowAngle, Comparison::Above(160.0))]),
        },
    }
}
