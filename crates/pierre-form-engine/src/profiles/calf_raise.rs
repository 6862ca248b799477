// ABOUTME: Built-in calf raise profile: straight legs, stance, and torso rules
// ABOUTME: Counts reps on heel lift measured in shin lengths
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
        exercise: ExerciseType::CalfRaise,
        features: vec![
            Feature::HeelLift,
            Feature::KneeAngle,
            Feature::TorsoLean,
            Feature::FootAlignment,
        ],
        rules: vec![
            rule(
                Feature::KneeAngle,
                Comparison::Below(160.0),
                15,
                MessageKey::KneesBent,
                MessageKey::LockKnees,
                Some(MessageKey::StraightLegs),
            ),
            rule(
                Feature::TorsoLean,
                Comparison::Above(20.0),
                10,
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
            contract: all(vec![when(Feature::HeelLift, Comparison::Above(0.10))]),
            relax: all(vec![when(Feature::HeelLift, Comparison::Above(0.20))]),
            ready: all(vec![when(Feature::HeelLift, Comparison::Below(0.05))]),
        },
    }
}
