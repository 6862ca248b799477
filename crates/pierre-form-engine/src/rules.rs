// ABOUTME: Declarative threshold rules shared by form assessment and phase detection
// ABOUTME: Comparison operators, feature conditions, predicates, form rules, and counting rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Threshold rules as data.
//!
//! Form rules and phase predicates are plain values so a profile can be
//! printed, serialized, overridden from JSON, and tested without running
//! the analyzer.

use crate::features::{Feature, FeatureSet};
use crate::feedback::MessageKey;
use pierre_pose_core::constants::defaults;
use serde::{Deserialize, Serialize};

/// Comparison applied to a feature value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `value < threshold`
    Below(f64),
    /// `value > threshold`
    Above(f64),
    /// `|value| > threshold`
    AbsAbove(f64),
    /// `value < min || value > max`
    Outside {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// `min <= value <= max`
    Within {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl Comparison {
    /// Whether `value` satisfies the comparison
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::Below(threshold) => value < threshold,
            Self::Above(threshold) => value > threshold,
            Self::AbsAbove(threshold) => value.abs() > threshold,
            Self::Outside { min, max } => value < min || value > max,
            Self::Within { min, max } => (min..=max).contains(&value),
        }
    }

    /// Whether the bounds are usable (finite, ordered)
    #[must_use]
    pub fn is_well_formed(self) -> bool {
        match self {
            Self::Below(t) | Self::Above(t) | Self::AbsAbove(t) => t.is_finite(),
            Self::Outside { min, max } | Self::Within { min, max } => {
                min.is_finite() && max.is_finite() && min <= max
            }
        }
    }
}

/// A comparison bound to a feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Feature to read
    pub feature: Feature,
    /// Comparison to apply
    pub comparison: Comparison,
}

impl Condition {
    /// Condition on `feature`
    #[must_use]
    pub const fn new(feature: Feature, comparison: Comparison) -> Self {
        Self {
            feature,
            comparison,
        }
    }

    /// `Some(result)` when the feature is known, `None` when it is not
    #[must_use]
    pub fn evaluate(&self, features: &FeatureSet, min_confidence: f64) -> Option<bool> {
        features
            .known(self.feature, min_confidence)
            .map(|value| self.comparison.holds(value))
    }
}

/// How a predicate combines its conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// Every condition must hold
    #[default]
    All,
    /// At least one condition must hold
    Any,
}

/// A phase predicate: conditions combined by [`Match`]
///
/// Conditions on unknown features never hold, so a predicate cannot be
/// satisfied by missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Combination mode
    #[serde(default)]
    pub matches: Match,
    /// Conditions
    pub conditions: Vec<Condition>,
}

impl Predicate {
    /// Predicate holding when every condition holds
    #[must_use]
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            matches: Match::All,
            conditions,
        }
    }

    /// Predicate holding when any condition holds
    #[must_use]
    pub fn any(conditions: Vec<Condition>) -> Self {
        Self {
            matches: Match::Any,
            conditions,
        }
    }

    /// Evaluate against a frame's features
    #[must_use]
    pub fn holds(&self, features: &FeatureSet, min_confidence: f64) -> bool {
        if self.conditions.is_empty() {
            return false;
        }
        let mut results = self
            .conditions
            .iter()
            .map(|condition| condition.evaluate(features, min_confidence) == Some(true));
        match self.matches {
            Match::All => results.all(|held| held),
            Match::Any => results.any(|held| held),
        }
    }

    /// Features this predicate reads
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.conditions.iter().map(|condition| condition.feature)
    }
}

/// One row of an exercise's form table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRule {
    /// Feature to read
    pub feature: Feature,
    /// Comparison that, when true, flags an issue
    pub comparison: Comparison,
    /// Points deducted when triggered
    pub penalty: u8,
    /// Issue reported when triggered
    pub issue: MessageKey,
    /// Correction reported with the issue
    pub correction: MessageKey,
    /// Strength reported when the rule is evaluated and not triggered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<MessageKey>,
}

/// How an exercise is counted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CountingRules {
    /// Discrete reps: Ready -> Contracting -> Relaxing -> Ready
    Repetitions {
        /// Leaves `Ready`
        contract: Predicate,
        /// Leaves `Contracting`
        relax: Predicate,
        /// Leaves `Relaxing`, completing a rep
        ready: Predicate,
    },
    /// Isometric hold: time spent between `enter` and `exit`
    Hold {
        /// Starts the hold from `Ready`
        enter: Predicate,
        /// Ends the hold
        exit: Predicate,
        /// Largest gap between frames credited to the hold (milliseconds)
        #[serde(default = "default_max_frame_gap_ms")]
        max_frame_gap_ms: u64,
    },
}

const fn default_max_frame_gap_ms() -> u64 {
    defaults::HOLD_MAX_FRAME_GAP_MS
}

impl CountingRules {
    /// Every predicate with its role name
    #[must_use]
    pub fn predicates(&self) -> Vec<(&'static str, &Predicate)> {
        match self {
            Self::Repetitions {
                contract,
                relax,
                ready,
            } => vec![("contract", contract), ("relax", relax), ("ready", ready)],
            Self::Hold { enter, exit, .. } => vec![("enter", enter), ("exit", exit)],
        }
    }
}
