// ABOUTME: Built-in burpee profile: squat depth and stance rules
// ABOUTME: One rep is stand, drop to plank, return to squat, stand tall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{all, rule, when, ExerciseProfile};
use crate::features::Feature;
use crate::feedback::MessageKey;
use crate::rules::{Comparison, CountingRules};
use pierre_pose_core::models::ExerciseType;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::Burpee,
        features: vec![Feature::KneeAngle, Feature::TorsoLean, Feature::FootAlignment],
        rules: vec![
            rule(
                Feature::KneeAngle,
                Comparison::Below(60.0),
                10,
                MessageKey::TooDeep,
                MessageKey::ControlDepth,
                None,
            ),
            rule(
                Feature::FootAlignment,
                Comparison::Above(15.0),
                10,
                MessageKey::UnevenStance,
                MessageKey::EvenOutFeet,
                Some(MessageKey::StableStance),
            ),
        ],
        // contract: torso drops toward the plank
        // relax: back upright in the squat
        // ready: legs straight and torso vertical
        counting: CountingRules::Repetitions {
            contract: all(vec![when(Feature::TorsoLean, Comparison::Above(60.0))]),
            relax: all(vec![
                when(Feature::TorsoLean, Comparison::Below(30.0)),
                when(Feature::KneeAngle, Comparison::Below(150.0)),
            ]),
            ready: all(vec![
                when(Feature::KneeAngle, Comparison::Above(160.0)),
                when(Feature::TorsoLean, Comparison::Below(20.0)),
            ]),
        },
    }
}
