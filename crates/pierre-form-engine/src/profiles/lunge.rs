// ABOUTME: Built-in lunge profile: front-knee depth, torso, and knee tracking rules
// ABOUTME: Counts reps on knee-angle hysteresis of the averaged legs
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
        exercise: ExerciseType::Lunge,
        features: vec![Feature::KneeAngle, Feature::TorsoLean, Feature::KneeOverToe],
        rules: vec![
            rule(
                Feature::KneeAngle,
                Comparison::Below(80.0),
                15,
                MessageKey::TooDeep,
                MessageKey::ControlDepth,
                None,
            ),
            rule(
                Feature::KneeAngle,
                Comparison::Above(110.0),
                20,
                MessageKey::DepthInsufficient,
                MessageKey::GoLower,
                Some(MessageKey::GoodDepth),
            ),
            rule(
                Feature::TorsoLean,
                Comparison::Above(30.0),
                15,
                MessageKey::LeaningForward,
                MessageKey::ChestUp,
                Some(MessageKey::UprightTorso),
            ),
            rule(
                Feature::KneeOverToe,
                Comparison::Above(0.3),
                15,
                MessageKey::KneesPastToes,
                MessageKey::KeepKneesBehindToes,
                Some(MessageKey::KneesTracking),
            ),
        ],
        counting: CountingRules::Repetitions {
            contract: all(vec![when(Feature::KneeAngle, Comparison::Below(140.0))]),
            relax: all(vec![when(Feature::KneeAngle, Comparison::Below(110.0))]),
            ready: all(vec![when(Feature::KneeAngle, Comparison::Above(160.0))]),
        },
    }
}
