// ABOUTME: Built-in mountain climber profile: horizontal torso and straight-arm rules
// ABOUTME: Counts a rep per knee drive using the more flexed hip
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
        exercise: ExerciseType::MountainClimber,
        features: vec![Feature::LeadHipAngle, Feature::TorsoLean, Feature::ElbowAngle],
        rules: vec![
            rule(
                Feature::TorsoLean,
                Comparison::Below(50.0),
                20,
                MessageKey::NotHorizontal,
                MessageKey::GetIntoPosition,
                Some(MessageKey::SteadyPosition),
            ),
            rule(
                Feature::ElbowAngle,
                Comparison::Below(150.0),
                15,
                MessageKey::ArmsBent,
                MessageKey::StraightenArms,
                Some(MessageKey::StraightArms),
            ),
        ],
        counting: CountingRules::Repetitions {
            contract: all(vec![
                when(Feature::LeadHipAngle, Comparison::Below(120.0)),
                when(Feature::TorsoLean, Comparison::Above(45.0)),
            ]),
            relax: all(vec![when(Feature::LeadHipAngle, Comparison::Below(90.0))]),
            ready: all(vec![when(Feature::LeadHipAngle, Comparison::Above(150.0))]),
        },
    }
}
