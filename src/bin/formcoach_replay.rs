// ABOUTME: formcoach-replay - runs a recorded landmark stream through an exercise session
// ABOUTME: Prints per-frame feedback and rep counts, then a session summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Human readable verdicts
//! formcoach-replay --exercise squat --input session.jsonl
//!
//! # One JSON object per frame plus a summary line; failures become an error object
//! formcoach-replay --exercise pushup --input session.jsonl --json
//!
//! # Stricter visibility gating
//! FORMCOACH_VISIBILITY_THRESHOLD=0.7 formcoach-replay -e plank -i plank.jsonl
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use formcoach::config::FormCoachConfig;
use formcoach::errors::{AppError, AppResult, ErrorResponse};
use formcoach::models::ExerciseKind;
use formcoach::replay::{read_recording, replay_frames, start_session};
use formcoach::session::{FrameOutcome, SessionSummary};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "formcoach-replay",
    about = "Replay recorded pose landmarks through the FormCoach analyzer",
    long_about = "Reads a JSON-lines landmark recording, evaluates form for every frame, \
                  and counts repetitions."
)]
struct Cli {
    /// Exercise to evaluate (squat, pushup, plank)
    #[arg(long, short = 'e')]
    exercise: ExerciseKind,

    /// JSON-lines recording of landmark frames
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match run(&cli) {
        Err(error) if cli.json => {
            let mut out = io::stdout().lock();
            serde_json::to_writer(&mut out, &ErrorResponse::from(error))?;
            writeln!(out)?;
            process::exit(1)
        }
        result => result.with_context(|| format!("replay of {} failed", cli.input.display())),
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = FormCoachConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.verbose()
    } else {
        config.logging
    };
    logging.init().map_err(|e| AppError::internal(e.to_string()))?;

    let frames = read_recording(&cli.input)?;
    let mut session = start_session(cli.exercise, config.analysis, &frames)?;
    info!(session_id = %session.id(), frames = frames.len(), "replaying recording");
    let outcomes = replay_frames(&mut session, &frames);
    let summary = session.finish();

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.json {
        write_json(&mut out, &outcomes, &summary)?;
    } else {
        write_text(&mut out, &outcomes, &summary)?;
    }
    out.flush()?;
    Ok(())
}

fn write_json(
    out: &mut impl Write,
    outcomes: &[FrameOutcome],
    summary: &SessionSummary,
) -> AppResult<()> {
    for outcome in outcomes {
        serde_json::to_writer(&mut *out, outcome)?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    outcomes: &[FrameOutcome],
    summary: &SessionSummary,
) -> AppResult<()> {
    for (index, outcome) in outcomes.iter().enumerate() {
        let angles = outcome
            .feedback
            .measured_angles
            .iter()
            .map(|(joint, degrees)| format!("{joint}={degrees}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "#{index:<5} {:<36} reps={:<3} phase={:<7} {angles}",
            outcome.feedback.message, outcome.count, outcome.phase
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Exercise:         {}", summary.exercise)?;
    writeln!(out, "Frames processed: {}", summary.frames_processed)?;
    writeln!(out, "Correct frames:   {}", summary.correct_frames)?;
    writeln!(out, "Repetitions:      {}", summary.reps)?;
    Ok(())
}
