// ABOUTME: Exercise profiles: per-exercise feature lists, form tables, and counting rules
// ABOUTME: Built-in threshold tables for all supported exercises plus profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Profiles
//!
//! One generic analyzer serves every exercise; what differs per exercise is
//! the [`ExerciseProfile`] value it is built with. Built-in tables live in
//! one module per exercise and can be overridden from JSON through
//! [`ProfileCatalog`].
//!
//! The literal thresholds in the built-in tables were tuned by hand against
//! recorded sessions and are kept as-is until reviewed with a coach. In
//! particular the squat hip-knee ratio (0.9) and knee-over-toe limit (0.3
//! shin lengths) have no documented derivation.

mod burpee;
mod calf_raise;
mod catalog;
mod lunge;
mod mountain_climber;
mod plank;
mod push_up;
mod squat;

pub use catalog::ProfileCatalog;

use crate::config::ConfigError;
use crate::features::Feature;
use crate::feedback::MessageKey;
use crate::rules::{Comparison, Condition, CountingRules, FormRule, Predicate};
use pierre_pose_core::constants::defaults::MAX_SCORE;
use pierre_pose_core::models::{CountingStyle, ExerciseType, PoseLandmark};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything that specializes the analyzer for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Exercise this profile analyzes
    pub exercise: ExerciseType,
    /// Features extracted every frame
    pub features: Vec<Feature>,
    /// Form rules in priority order
    pub rules: Vec<FormRule>,
    /// Phase predicates
    pub counting: CountingRules,
}

impl ExerciseProfile {
    /// Built-in profile for `exercise`
    #[must_use]
    pub fn builtin(exercise: ExerciseType) -> Self {
        match exercise {
            ExerciseType::Squat => squat::profile(),
            ExerciseType::Lunge => lunge::profile(),
            ExerciseType::PushUp => push_up::profile(),
            ExerciseType::Plank => plank::profile(),
            ExerciseType::CalfRaise => calf_raise::profile(),
            ExerciseType::Burpee => burpee::profile(),
            ExerciseType::MountainClimber => mountain_climber::profile(),
        }
    }

    /// Joints that must be visible for a frame to count, derived from the features
    #[must_use]
    pub fn required_joints(&self) -> Vec<PoseLandmark> {
        self.features
            .iter()
            .flat_map(Feature::landmarks)
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check the tables for mistakes that would silently break scoring or counting
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProfile` describing the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.features.is_empty() {
            return Err(self.invalid("no features to extract"));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if !self.features.contains(&rule.feature) {
                return Err(self.invalid(format!(
                    "rule {index} reads {} which is not extracted",
                    rule.feature
                )));
            }
            if !rule.comparison.is_well_formed() {
                return Err(self.invalid(format!("rule {index} has malformed bounds")));
            }
            if rule.penalty > MAX_SCORE {
                return Err(self.invalid(format!(
                    "rule {index} penalty {} exceeds {MAX_SCORE}",
                    rule.penalty
                )));
            }
        }

        let style_matches = matches!(
            (&self.counting, self.exercise.counting_style()),
            (CountingRules::Repetitions { .. }, CountingStyle::Repetitions)
                | (CountingRules::Hold { .. }, CountingStyle::Hold)
        );
        if !style_matches {
            return Err(self.invalid("counting mode does not match the exercise"));
        }
        if let CountingRules::Hold {
            max_frame_gap_ms: 0,
            ..
        } = self.counting
        {
            return Err(self.invalid("max_frame_gap_ms must be greater than zero"));
        }

        for (role, predicate) in self.counting.predicates() {
            if predicate.conditions.is_empty() {
                return Err(self.invalid(format!("{role} predicate has no conditions")));
            }
            for condition in &predicate.conditions {
                if !self.features.contains(&condition.feature) {
                    return Err(self.invalid(format!(
                        "{role} predicate reads {} which is not extracted",
                        condition.feature
                    )));
                }
                if !condition.comparison.is_well_formed() {
                    return Err(self.invalid(format!("{role} predicate has malformed bounds")));
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidProfile {
            exercise: self.exercise.to_string(),
            reason: reason.into(),
        }
    }
}

fn rule(
    feature: Feature,
    comparison: Comparison,
    penalty: u8,
    issue: MessageKey,
    correction: MessageKey,
    strength: Option<MessageKey>,
) -> FormRule {
    FormRule {
        feature,
        comparison,
        penalty,
        issue,
        correction,
        strength,
    }
}

const fn when(feature: Feature, comparison: Comparison) -> Condition {
    Condition::new(feature, comparison)
}

fn all(conditions: Vec<Condition>) -> Predicate {
    Predicate::all(conditions)
}
