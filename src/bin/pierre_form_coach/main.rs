// ABOUTME: Pierre form coach CLI - inspect exercise profiles, simulate workouts, replay clips
// ABOUTME: Runs the rep counter over synthetic or recorded landmark streams from the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List supported exercises
//! pierre-form-coach exercises
//!
//! # Show the squat profile as JSON
//! pierre-form-coach profiles --exercise squat --json
//!
//! # Count reps over 10 seconds of synthetic push-ups at 30 fps
//! pierre-form-coach simulate --exercise push-up --seconds 10 --cycles 5
//!
//! # Replay recorded clips with Korean feedback
//! pierre-form-coach --locale ko replay session1.json session2.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_form_coach::config::CoachConfig;
use pierre_form_coach::logging::LoggingConfig;
use pierre_form_engine::Locale;
use pierre_pose_core::errors::{AppError, ErrorResponse};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-form-coach",
    about = "Pierre Form Coach CLI",
    long_about = "Count exercise repetitions and score form from pose landmark streams."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Feedback language override (en, ko)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Exercise profile override file (JSON array of profiles)
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List supported exercises and how they are counted
    Exercises,

    /// Show exercise profiles
    Profiles {
        /// Only this exercise (e.g. "squat", "push-up")
        #[arg(long, short = 'e')]
        exercise: Option<String>,
    },

    /// Run the analyzer over a synthetic movement
    Simulate {
        /// Exercise to simulate
        #[arg(long, short = 'e')]
        exercise: String,

        /// Frames per second
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Duration in seconds
        #[arg(long, default_value = "10")]
        seconds: f64,

        /// Movement cycles over the duration
        #[arg(long, default_value = "5")]
        cycles: u32,

        /// Close a set every N reps
        #[arg(long)]
        reps_per_set: Option<u32>,
    },

    /// Replay recorded landmark clips
    Replay {
        /// Clip files (JSON)
        #[arg(required = true)]
        clips: Vec<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // JSON consumers get structured application errors on stdout
        Err(e) if json => match e.downcast::<AppError>() {
            Ok(app_error) => {
                let response = ErrorResponse::from(app_error);
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(ExitCode::FAILURE)
            }
            Err(other) => Err(other),
        },
        Err(e) => Err(e),
    }
}

fn run(cli: Cli) -> Result<()> {
    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = CoachConfig::from_env()?;
    if let Some(locale) = cli.locale {
        config.settings.locale = locale;
    }
    if let Some(path) = cli.profiles {
        config.profiles_path = Some(path);
    }
    debug!("{}", config.summary());

    let catalog = config.catalog()?;
    let output = helpers::display::Output { json: cli.json };

    match cli.command {
        Command::Exercises => commands::catalog::exercises(&catalog, output),
        Command::Profiles { exercise } => commands::catalog::profiles(
            &catalog,
            exercise.as_deref(),
            config.settings.locale,
            output,
        ),
        Command::Simulate {
            exercise,
            fps,
            seconds,
            cycles,
            reps_per_set,
        } => {
            if reps_per_set.is_some() {
                config.settings.reps_per_set = reps_per_set;
                config.validate()?;
            }
            let request = commands::simulate::SimulationRequest {
                exercise,
                fps,
                seconds,
                cycles,
            };
            commands::simulate::run(&catalog, &config.settings, &request, output)
        }
        Command::Replay { clips } => {
            commands::replay::run(&catalog, &config.settings, &clips, output)
        }
    }
}
