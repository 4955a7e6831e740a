// ABOUTME: Recorded landmark frames stored as JSON lines and replay through a session
// ABOUTME: Parsing reports the offending line; timestamps must never go backwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Landmark recordings
//!
//! A recording holds one [`LandmarkFrame`] per line:
//!
//! ```text
//! {"timestamp":"2025-01-01T10:00:00Z","landmarks":[{"x":0.5,"y":0.2,"visibility":0.9}, ...]}
//! ```
//!
//! Blank lines are ignored.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{ExerciseKind, LandmarkFrame};
use crate::session::{ExerciseSession, FrameOutcome};
use chrono::{DateTime, Utc};
use formcoach_analysis::AnalysisConfig;
use serde_json::json;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Parse a recording from any buffered reader
///
/// # Errors
///
/// Returns an error if a line cannot be read, is not a valid frame, or has a
/// timestamp earlier than the frame before it.
pub fn parse_recording<R: BufRead>(reader: R) -> AppResult<Vec<LandmarkFrame>> {
    let mut frames: Vec<LandmarkFrame> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: LandmarkFrame = serde_json::from_str(&line).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("line {line_number}: invalid landmark frame"),
            )
            .with_details(json!({ "line": line_number, "column": e.column() }))
            .with_source(e)
        })?;

        if let Some(previous) = frames.last() {
            if frame.timestamp < previous.timestamp {
                return Err(AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("line {line_number}: timestamp goes backwards"),
                )
                .with_details(json!({
                    "line": line_number,
                    "previous": previous.timestamp,
                    "timestamp": frame.timestamp,
                })));
            }
        }
        frames.push(frame);
    }

    debug!(frames = frames.len(), "recording parsed");
    Ok(frames)
}

/// Read a recording from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or fails to parse.
pub fn read_recording(path: &Path) -> AppResult<Vec<LandmarkFrame>> {
    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("cannot open recording {}", path.display())).with_source(e)
    })?;
    let frames = parse_recording(BufReader::new(file))?;
    info!(path = %path.display(), frames = frames.len(), "recording loaded");
    Ok(frames)
}

/// Start a session for replaying `frames`
///
/// Tracking is taken to have started one dwell time before the first frame, so a
/// transition on the first frame of a recording is accepted.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn start_session(
    exercise: ExerciseKind,
    config: AnalysisConfig,
    frames: &[LandmarkFrame],
) -> AppResult<ExerciseSession> {
    let started_at = frames.first().map_or_else(Utc::now, |first| {
        config.rep_counter_for(exercise).map_or(first.timestamp, |counter| {
            first
                .timestamp
                .checked_sub_signed(counter.min_phase_time())
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        })
    });
    ExerciseSession::new(exercise, config, started_at)
}

/// Feed frames through a session in order
pub fn replay_frames(
    session: &mut ExerciseSession,
    frames: &[LandmarkFrame],
) -> Vec<FrameOutcome> {
    frames
        .iter()
        .map(|frame| session.process_frame(frame))
        .collect()
}
