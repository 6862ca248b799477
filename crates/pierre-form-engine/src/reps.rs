// ABOUTME: Repetition and phase state machine with hysteresis thresholds
// ABOUTME: Pure transition function counting Ready-Contracting-Relaxing cycles, sets, and hold time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rep/Phase State Machine
//!
//! The only state that persists across frames. [`advance`] takes the current
//! [`RepState`] by value and returns the next one, so the analyzer owns a
//! single value and tests can drive transitions without landmarks.
//!
//! ```text
//! Ready --contract--> Contracting --relax--> Relaxing --ready--> Ready (+1 rep)
//! ```
//!
//! Each state only listens to its own exit predicate. Entry and exit
//! thresholds differ (e.g. squat: contract below 140 degrees, ready above
//! 160 degrees), so a knee hovering around one threshold cannot flicker the
//! phase or double count.

use crate::features::FeatureSet;
use crate::rules::CountingRules;
use pierre_pose_core::models::Phase;
use serde::{Deserialize, Serialize};

/// Cross-frame counting state of one analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepState {
    /// Current phase
    pub phase: Phase,
    /// Completed repetitions since the last reset
    pub rep_count: u32,
    /// Completed sets since the last reset
    pub set_count: u32,
    /// Repetitions in the current, unfinished set
    pub reps_in_set: u32,
    /// Accumulated hold time (hold exercises)
    pub held_ms: u64,
    /// Timestamp of the last frame seen, confident or not
    pub last_timestamp_ms: Option<u64>,
}

/// Per-frame inputs to the transition function besides features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Whether enough joints were visible to trust this frame
    pub confident: bool,
    /// Frame time in milliseconds
    pub timestamp_ms: u64,
    /// Feature confidence below which predicates treat a feature as unknown
    pub min_feature_confidence: f64,
    /// Close a set every N reps
    pub reps_per_set: Option<u32>,
}

/// What a call to [`advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Transition {
    /// Low-confidence frame; phase and counts held
    Ignored,
    /// Active exit predicate not satisfied
    Unchanged,
    /// Phase changed without completing a rep
    Entered {
        /// Previous phase
        from: Phase,
        /// New phase
        to: Phase,
    },
    /// A full cycle finished
    RepCompleted {
        /// Total reps after this one
        rep_count: u32,
    },
    /// A full cycle finished and closed a set
    SetCompleted {
        /// Total reps after this one
        rep_count: u32,
        /// Total sets after this one
        set_count: u32,
    },
}

impl RepState {
    /// Whole seconds held
    #[must_use]
    pub const fn held_seconds(&self) -> u32 {
        (self.held_ms / 1000) as u32
    }

    /// Value shown to the user: reps, or seconds held for hold exercises
    #[must_use]
    pub fn display_count(&self, rules: &CountingRules) -> u32 {
        match rules {
            CountingRules::Repetitions { .. } => self.rep_count,
            CountingRules::Hold { .. } => self.held_seconds(),
        }
    }

    /// Close the current set if it has at least one rep
    ///
    /// Returns the new state and whether a set was closed.
    #[must_use]
    pub fn close_set(mut self) -> (Self, bool) {
        if self.reps_in_set == 0 {
            return (self, false);
        }
        self.set_count += 1;
        self.reps_in_set = 0;
        (self, true)
    }
}

/// Advance the state machine by one frame
#[must_use]
pub fn advance(
    mut state: RepState,
    rules: &CountingRules,
    features: &FeatureSet,
    frame: FrameContext,
) -> (RepState, Transition) {
    let previous_timestamp = state.last_timestamp_ms.replace(frame.timestamp_ms);
    if !frame.confident {
        return (state, Transition::Ignored);
    }

    match rules {
        CountingRules::Repetitions {
            contract,
            relax,
            ready,
        } => {
            let exit = match state.phase {
                Phase::Ready => contract,
                Phase::Contracting => relax,
                Phase::Relaxing => ready,
            };
            if !exit.holds(features, frame.min_feature_confidence) {
                return (state, Transition::Unchanged);
            }

            match state.phase {
                Phase::Ready => enter(state, Phase::Contracting),
                Phase::Contracting => enter(state, Phase::Relaxing),
                Phase::Relaxing => complete_rep(state, frame.reps_per_set),
            }
        }
        CountingRules::Hold {
            enter: start,
            exit,
            max_frame_gap_ms,
        } => match state.phase {
            Phase::Contracting if exit.holds(features, frame.min_feature_confidence) => {
                enter(state, Phase::Ready)
            }
            Phase::Contracting => {
                let elapsed = previous_timestamp
                    .map_or(0, |last| frame.timestamp_ms.saturating_sub(last))
                    .min(*max_frame_gap_ms);
                state.held_ms = state.held_ms.saturating_add(elapsed);
                (state, Transition::Unchanged)
            }
            _ if start.holds(features, frame.min_feature_confidence) => {
                enter(state, Phase::Contracting)
            }
            _ => (state, Transition::Unchanged),
        },
    }
}

fn enter(mut state: RepState, to: Phase) -> (RepState, Transition) {
    let from = state.phase;
    state.phase = to;
    (state, Transition::Entered { from, to })
}

fn complete_rep(mut state: RepState, reps_per_set: Option<u32>) -> (RepState, Transition) {
    state.phase = Phase::Ready;
    state.rep_count += 1;
    state.reps_in_set += 1;

    if reps_per_set.is_some_and(|target| state.reps_in_set >= target) {
        let (closed, _) = state.close_set();
        return (
            closed,
            Transition::SetCompleted {
                rep_count: closed.rep_count,
                set_count: closed.set_count,
            },
        );
    }
    (
        state,
        Transition::RepCompleted {
            rep_count: state.rep_count,
        },
    )
}
