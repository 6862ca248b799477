// ABOUTME: Clip replay command for pierre-form-coach
// ABOUTME: Loads recorded clips and replays them in parallel

use anyhow::{bail, Result};
use pierre_form_coach::replay::{load_clip, replay_all};
use pierre_form_engine::{AnalyzerSettings, ProfileCatalog};
use std::path::PathBuf;
use tracing::error;

use crate::helpers::display::{display_report, Output};

/// Replay every clip; fails if any clip failed
pub fn run(
    catalog: &ProfileCatalog,
    settings: &AnalyzerSettings,
    paths: &[PathBuf],
    output: Output,
) -> Result<()> {
    let clips = paths
        .iter()
        .map(|path| load_clip(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut reports = Vec::with_capacity(clips.len());
    let mut failures = 0_usize;
    for (clip, result) in clips.iter().zip(replay_all(&clips, catalog, settings)) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!(clip = %clip.label(), "Replay failed: {e}");
                failures += 1;
            }
        }
    }

    output.emit(&reports, || {
        for report in &reports {
            display_report(report);
        }
    })?;

    if failures > 0 {
        bail!("{failures} of {} clips failed to replay", clips.len());
    }
    Ok(())
}
