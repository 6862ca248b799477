// ABOUTME: Synthetic workout simulation for pierre-form-coach
// ABOUTME: Generates a movement cycle and reports what the analyzer counted

use anyhow::Result;
use pierre_form_coach::replay::{replay_clip, Clip};
use pierre_form_coach::synthetic;
use pierre_form_engine::{AnalyzerSettings, ProfileCatalog};
use pierre_pose_core::errors::AppError;
use tracing::info;

use crate::helpers::display::{display_report, Output};

/// Parameters of one simulated workout
pub struct SimulationRequest {
    pub exercise: String,
    pub fps: u32,
    pub seconds: f64,
    pub cycles: u32,
}

/// Simulate `request` and print the report
pub fn run(
    catalog: &ProfileCatalog,
    settings: &AnalyzerSettings,
    request: &SimulationRequest,
    output: Output,
) -> Result<()> {
    if request.fps == 0 {
        return Err(AppError::invalid_input("--fps must be positive").into());
    }
    if !(request.seconds.is_finite() && request.seconds > 0.0) {
        return Err(AppError::invalid_input("--seconds must be positive").into());
    }

    let exercise = catalog
        .resolve(&request.exercise)
        .map_err(AppError::from)?
        .exercise;
    info!(
        %exercise,
        fps = request.fps,
        seconds = request.seconds,
        cycles = request.cycles,
        "Simulating workout"
    );

    let frames = synthetic::generate(exercise, request.fps, request.seconds, request.cycles);
    let mut clip = Clip::new(exercise, frames);
    clip.name = Some(format!("synthetic {exercise} x{}", request.cycles));

    let report = replay_clip(&clip, catalog, settings)?;
    output.emit(&report, || display_report(&report))
}
