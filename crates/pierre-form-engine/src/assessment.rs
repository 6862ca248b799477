// ABOUTME: Form assessment of a single frame against an exercise's ordered rule table
// ABOUTME: Applies every rule, skips unknown features, and renders localized issues and strengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::features::FeatureSet;
use crate::feedback::{Locale, MessageKey};
use crate::rules::FormRule;
use pierre_pose_core::constants::defaults::MAX_SCORE;
use pierre_pose_core::models::FormAssessment;
use serde::{Deserialize, Serialize};

/// Outcome of one rule on one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Feature unknown; rule neither penalized nor rewarded
    Skipped,
    /// Comparison held; penalty applied
    Triggered,
    /// Comparison did not hold
    Passed,
}

/// Scores frames against a rule table
#[derive(Debug, Clone, Copy)]
pub struct FormAssessor<'a> {
    rules: &'a [FormRule],
    min_feature_confidence: f64,
    locale: Locale,
}

impl<'a> FormAssessor<'a> {
    /// Assessor over `rules`, treating features below `min_feature_confidence` as unknown
    #[must_use]
    pub const fn new(rules: &'a [FormRule], min_feature_confidence: f64, locale: Locale) -> Self {
        Self {
            rules,
            min_feature_confidence,
            locale,
        }
    }

    /// Per-rule outcomes in table order
    #[must_use]
    pub fn outcomes(&self, features: &FeatureSet) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| self.outcome(rule, features))
            .collect()
    }

    fn outcome(&self, rule: &FormRule, features: &FeatureSet) -> RuleOutcome {
        match features.known(rule.feature, self.min_feature_confidence) {
            None => RuleOutcome::Skipped,
            Some(value) if rule.comparison.holds(value) => RuleOutcome::Triggered,
            Some(_) => RuleOutcome::Passed,
        }
    }

    /// Whether at least one rule can be judged on this frame
    ///
    /// An empty rule table always can; a frame whose features are all
    /// unknown cannot.
    #[must_use]
    pub fn can_assess(&self, features: &FeatureSet) -> bool {
        self.rules.is_empty()
            || self
                .rules
                .iter()
                .any(|rule| self.outcome(rule, features) != RuleOutcome::Skipped)
    }

    /// Score a frame: `max(0, 100 - sum of triggered penalties)`
    #[must_use]
    pub fn assess(&self, features: &FeatureSet) -> FormAssessment {
        let mut assessment = FormAssessment::perfect();
        let mut penalty_total: u32 = 0;

        for rule in self.rules {
            match self.outcome(rule, features) {
                RuleOutcome::Skipped => {}
                RuleOutcome::Triggered => {
                    penalty_total += u32::from(rule.penalty);
                    assessment.issues.push(self.render(rule.issue));
                    assessment.corrections.push(self.render(rule.correction));
                }
                RuleOutcome::Passed => {
                    if let Some(strength) = rule.strength {
                        assessment.strengths.push(self.render(strength));
                    }
                }
            }
        }

        assessment.score = u32::from(MAX_SCORE).saturating_sub(penalty_total) as u8;
        assessment
    }

    /// Top-priority message: first issue, else first strength, else encouragement
    #[must_use]
    pub fn headline(&self, assessment: &FormAssessment) -> String {
        assessment
            .issues
            .first()
            .or_else(|| assessment.strengths.first())
            .cloned()
            .unwrap_or_else(|| self.render(MessageKey::KeepGoing))
    }

    fn render(&self, key: MessageKey) -> String {
        key.text(self.locale).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Feature;
    use crate::rules::Comparison;
    use pierre_pose_core::models::AngleResult;

    fn rules() -> Vec<FormRule> {
        vec![
            FormRule {
                feature: Feature::KneeAngle,
                comparison: Comparison::Below(90.0),
                penalty: 15,
                issue: MessageKey::TooDeep,
                correction: MessageKey::ControlDepth,
                strength: None,
            },
            FormRule {
                feature: Feature::TorsoLean,
                comparison: Comparison::Above(45.0),
                penalty: 60,
                issue: MessageKey::LeaningForward,
                correction: MessageKey::ChestUp,
                strength: Some(MessageKey::UprightTorso),
            },
            FormRule {
                feature: Feature::KneeOverToe,
                comparison: Comparison::Above(0.3),
                penalty: 60,
                issue: MessageKey::KneesPastToes,
                correction: MessageKey::KeepKneesBehindToes,
                strength: Some(MessageKey::KneesTracking),
            },
        ]
    }

    #[test]
    fn test_penalties_accumulate_and_clamp_at_zero() {
        let rules = rules();
        let assessor = FormAssessor::new(&rules, 0.5, Locale::English);
        let features = FeatureSet::new()
            .with(Feature::KneeAngle, 80.0)
            .with(Feature::TorsoLean, 60.0)
            .with(Feature::KneeOverToe, 0.5);

        let assessment = assessor.assess(&features);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.issues.len(), 3);
        assert_eq!(assessment.corrections.len(), 3);
        assert!(assessment.strengths.is_empty());
    }

    #[test]
    fn test_low_confidence_feature_is_skipped() {
        let rules = rules();
        let assessor = FormAssessor::new(&rules, 0.5, Locale::English);
        let mut features = FeatureSet::new().with(Feature::KneeAngle, 120.0);
        features.insert(Feature::TorsoLean, AngleResult::new(70.0, 0.3));

        let outcomes = assessor.outcomes(&features);
        assert_eq!(
            outcomes,
            vec![RuleOutcome::Passed, RuleOutcome::Skipped, RuleOutcome::Skipped]
        );

        let assessment = assessor.assess(&features);
        assert_eq!(assessment.score, 100);
        assert!(assessment.issues.is_empty());
        assert!(assessment.strengths.is_empty());
    }

    #[test]
    fn test_headline_prefers_first_issue_then_strength() {
        let rules = rules();
        let assessor = FormAssessor::new(&rules, 0.5, Locale::English);

        let faulty = assessor.assess(&FeatureSet::new().with(Feature::KneeAngle, 85.0));
        assert_eq!(assessor.headline(&faulty), "Squatting too deep");

        let clean = assessor.assess(&FeatureSet::new().with(Feature::TorsoLean, 10.0));
        assert_eq!(assessor.headline(&clean), "Torso is upright");

        let empty = assessor.assess(&FeatureSet::new());
        assert_eq!(assessor.headline(&empty), "Keep going");
    }

    #[test]
    fn test_can_assess_needs_one_known_feature() {
        let rules = rules();
        let assessor = FormAssessor::new(&rules, 0.5, Locale::English);

        let mut unknown = FeatureSet::new();
        unknown.insert(Feature::KneeAngle, AngleResult::new(0.0, 0.0));
        assert!(!assessor.can_assess(&unknown));
        assert!(!assessor.can_assess(&FeatureSet::new()));
        assert!(assessor.can_assess(&FeatureSet::new().with(Feature::TorsoLean, 10.0)));

        let no_rules = FormAssessor::new(&[], 0.5, Locale::English);
        assert!(no_rules.can_assess(&FeatureSet::new()));
    }
}
