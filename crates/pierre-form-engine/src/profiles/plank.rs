// ABOUTME: Built-in plank profile: body-line and horizontal-torso rules
// ABOUTME: Counted as hold time while the body stays straight and horizontal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{all, rule, when, ExerciseProfile};
use crate::features::Feature;
use crate::feedback::MessageKey;
use crate::rules::{Comparison, CountingRules, Predicate};
use pierre_pose_core::constants::defaults::HOLD_MAX_FRAME_GAP_MS;
use pierre_pose_core::models::ExerciseType;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::Plank,
        features: vec![Feature::BodyLine, Feature::TorsoLean],
        rules: vec![
            rule(
                Feature::BodyLine,
                Comparison::Below(160.0),
                25,
                MessageKey::HipsOutOfLine,
                MessageKey::BraceCore,
                Some(MessageKey::StraightBody),
            ),
            rule(
                Feature::TorsoLean,
                Comparison::Below(60.0),
                20,
                MessageKey::NotHorizontal,
                MessageKey::GetIntoPosition,
                Some(MessageKey::SteadyPosition),
            ),
        ],
        counting: CountingRules::Hold {
            enter: all(vec![
                when(Feature::BodyLine, Comparison::Above(160.0)),
                when(Feature::TorsoLean, Comparison::Above(60.0)),
            ]),
            exit: Predicate::any(vec![
                when(Feature::BodyLine, Comparison::Below(150.0)),
                when(Feature::TorsoLean, Comparison::Below(50.0)),
            ]),
            max_frame_gap_ms: HOLD_MAX_FRAME_GAP_MS,
        },
    }
}
