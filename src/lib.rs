// ABOUTME: Main library entry point for FormCoach exercise form analysis
// ABOUTME: Wires landmark frames through form rules and rep counting into sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormCoach`
//!
//! Evaluates exercise form and counts repetitions from per-frame body-pose
//! landmarks supplied by an external pose estimator.
//!
//! ## Architecture
//!
//! - **`formcoach-core`**: errors, constants, landmark and feedback models
//! - **`formcoach-analysis`**: angle math, visibility gate, form rules, rep counter
//! - **session**: one exercise being tracked, frame by frame
//! - **config**: environment-only configuration
//! - **logging**: `tracing` subscriber setup
//! - **replay**: reading recorded landmark frames (used by `formcoach-replay`)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use formcoach::errors::AppResult;
//! use formcoach::models::{ExerciseKind, LandmarkFrame};
//! use formcoach::session::ExerciseSession;
//! use formcoach_analysis::AnalysisConfig;
//!
//! # fn example(frames: Vec<LandmarkFrame>) -> AppResult<()> {
//! let config = AnalysisConfig::default();
//! let mut session = ExerciseSession::new(ExerciseKind::Squat, config, Utc::now())?;
//! for frame in &frames {
//!     let outcome = session.process_frame(frame);
//!     println!("{} (reps: {})", outcome.feedback.message, outcome.count);
//! }
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recorded landmark frames and replay helpers
pub mod replay;

/// Per-exercise tracking sessions
pub mod session;

pub use formcoach_core::{constants, errors, models};
