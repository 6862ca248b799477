// ABOUTME: Output formatting helpers for pierre-form-coach
// ABOUTME: Renders exercise catalogs, profiles, and replay reports as text or JSON

use anyhow::Result;
use pierre_form_coach::replay::ReplayReport;
use pierre_form_engine::features::Feature;
use pierre_form_engine::rules::{CountingRules, Match, Predicate};
use pierre_form_engine::{ExerciseProfile, Locale};
use pierre_pose_core::models::{CountingStyle, ExerciseType};
use serde::Serialize;

/// Output mode selected on the command line
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Pretty JSON instead of text
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON in JSON mode, otherwise run `text`
    pub fn emit<T: Serialize + ?Sized>(self, value: &T, text: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }
}

/// One line per exercise
pub fn display_exercises(exercises: &[ExerciseType]) {
    println!("\nSupported Exercises");
    println!("{}", "=".repeat(50));
    for exercise in exercises {
        let counting = match exercise.counting_style() {
            CountingStyle::Repetitions => "repetitions",
            CountingStyle::Hold => "seconds held",
        };
        println!(
            "   {:<18} {:<18} counts {counting}",
            exercise.as_str(),
            exercise.display_name()
        );
    }
}

/// Feature list, form table, and phase predicates of one profile
pub fn display_profile(profile: &ExerciseProfile, locale: Locale) {
    println!("\n{} ({})", profile.exercise.display_name(), profile.exercise);
    println!("{}", "=".repeat(50));

    let features: Vec<&str> = profile.features.iter().map(Feature::as_str).collect();
    println!("Features: {}", features.join(", "));

    println!("Form rules:");
    for rule in &profile.rules {
        println!(
            "   {} {:?}  -{}  {}",
            rule.feature,
            rule.comparison,
            rule.penalty,
            rule.issue.text(locale)
        );
    }

    println!("Counting:");
    match &profile.counting {
        CountingRules::Repetitions { .. } => println!("   mode: repetitions"),
        CountingRules::Hold {
            max_frame_gap_ms, ..
        } => println!("   mode: hold (max frame gap {max_frame_gap_ms} ms)"),
    }
    for (role, predicate) in profile.counting.predicates() {
        println!("   {role:<9} {}", describe_predicate(predicate));
    }
}

fn describe_predicate(predicate: &Predicate) -> String {
    let joiner = match predicate.matches {
        Match::All => " and ",
        Match::Any => " or ",
    };
    predicate
        .conditions
        .iter()
        .map(|condition| format!("{} {:?}", condition.feature, condition.comparison))
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Summary of one replayed clip or simulation
pub fn display_report(report: &ReplayReport) {
    println!("\n{} [{}]", report.clip, report.exercise.display_name());
    println!("{}", "-".repeat(50));
    let unit = match report.exercise.counting_style() {
        CountingStyle::Repetitions => "reps",
        CountingStyle::Hold => "seconds held",
    };
    println!("   Count: {} {unit}", report.count);
    println!("   Sets: {}", report.sets);
    println!("   Final phase: {}", report.final_phase);
    println!(
        "   Frames: {} ({} low confidence)",
        report.frames, report.low_confidence_frames
    );
    match report.average_form_score {
        Some(score) => println!("   Average form score: {score:.1}"),
        None => println!("   Average form score: n/a"),
    }
    if !report.count_timestamps_ms.is_empty() {
        let marks: Vec<String> = report
            .count_timestamps_ms
            .iter()
            .map(|ms| format!("{:.2}s", *ms as f64 / 1000.0))
            .collect();
        println!("   Counted at: {}", marks.join(", "));
    }
    if let Some(last) = &report.last_analysis {
        println!("   Last feedback: {}", last.feedback);
    }
}
