// ABOUTME: Exercise session orchestrating form rules and rep counting for one tracked exercise
// ABOUTME: Processes landmark frames in arrival order and exposes feedback, count, and phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Session
//!
//! A session owns exactly one `RepCounter`. Frames are processed through
//! `&mut self`, so frames are handled one at a time in the order they arrive.
//! Switching exercise replaces the counter; counts never carry over.

use chrono::{DateTime, Utc};
use formcoach_analysis::rules::rule_for;
use formcoach_analysis::{AnalysisConfig, FormRules, RepCounter};
use formcoach_core::errors::AppResult;
use formcoach_core::models::{ExerciseKind, ExercisePhase, FeedbackResult, Landmark, LandmarkFrame};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// What the presentation layer receives for each frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutcome {
    /// Form verdict for the frame
    pub feedback: FeedbackResult,
    /// Repetitions completed so far
    pub count: u32,
    /// Current movement phase
    pub phase: ExercisePhase,
}

/// Totals for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise tracked when the summary was taken
    pub exercise: ExerciseKind,
    /// Frames processed since the last reset or exercise switch
    pub frames_processed: u64,
    /// Frames whose verdict was correct
    pub correct_frames: u64,
    /// Repetitions completed
    pub reps: u32,
}

/// One exercise being tracked from a camera feed
#[derive(Debug)]
pub struct ExerciseSession {
    id: Uuid,
    exercise: ExerciseKind,
    config: AnalysisConfig,
    rules: FormRules,
    counter: Option<RepCounter>,
    latest: Option<FeedbackResult>,
    frames_processed: u64,
    correct_frames: u64,
}

impl ExerciseSession {
    /// Start a session for `exercise` at `started_at`
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(
        exercise: ExerciseKind,
        config: AnalysisConfig,
        started_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        config.validate()?;

        let id = Uuid::new_v4();
        info!(session_id = %id, exercise = %exercise, "exercise session started");

        Ok(Self {
            id,
            exercise,
            rules: FormRules::from_config(&config),
            counter: config
                .rep_counter_for(exercise)
                .map(|counter_config| RepCounter::new(counter_config, started_at)),
            config,
            latest: None,
            frames_processed: 0,
            correct_frames: 0,
        })
    }

    /// Evaluate one frame and update the rep count
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        self.process(&frame.landmarks, frame.timestamp)
    }

    /// Evaluate a landmark set captured at `at`
    pub fn process(&mut self, landmarks: &[Landmark], at: DateTime<Utc>) -> FrameOutcome {
        let feedback = self.rules.evaluate(self.exercise, landmarks);

        if let (Some(counter), Some(angle)) = (
            self.counter.as_mut(),
            feedback.angle(rule_for(self.exercise).joint),
        ) {
            counter.update(angle, at);
        }

        self.frames_processed += 1;
        if feedback.correct {
            self.correct_frames += 1;
        }

        let outcome = FrameOutcome {
            feedback,
            count: self.count(),
            phase: self.phase(),
        };
        self.latest = Some(outcome.feedback.clone());
        outcome
    }

    /// Track a different exercise from `at`, discarding the previous count
    pub fn switch_exercise(&mut self, exercise: ExerciseKind, at: DateTime<Utc>) {
        info!(
            session_id = %self.id,
            from = %self.exercise,
            to = %exercise,
            reps = self.count(),
            "switching exercise"
        );
        self.exercise = exercise;
        self.counter = self
            .config
            .rep_counter_for(exercise)
            .map(|counter_config| RepCounter::new(counter_config, at));
        self.clear_progress();
    }

    /// Zero the count and statistics, keeping the exercise
    pub fn reset(&mut self, at: DateTime<Utc>) {
        debug!(session_id = %self.id, "session reset");
        if let Some(counter) = self.counter.as_mut() {
            counter.reset(at);
        }
        self.clear_progress();
    }

    /// End the session and return its totals
    #[must_use]
    pub fn finish(self) -> SessionSummary {
        let summary = self.summary();
        info!(
            session_id = %summary.session_id,
            exercise = %summary.exercise,
            frames = summary.frames_processed,
            correct_frames = summary.correct_frames,
            reps = summary.reps,
            "exercise session finished"
        );
        summary
    }

    /// Current totals
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            exercise: self.exercise,
            frames_processed: self.frames_processed,
            correct_frames: self.correct_frames,
            reps: self.count(),
        }
    }

    /// Repetitions completed; always zero for exercises without a counter
    #[must_use]
    pub fn count(&self) -> u32 {
        self.counter.as_ref().map_or(0, RepCounter::count)
    }

    /// Current movement phase
    #[must_use]
    pub fn phase(&self) -> ExercisePhase {
        self.counter
            .as_ref()
            .map_or(ExercisePhase::Neutral, RepCounter::phase)
    }

    /// Verdict of the most recent frame
    #[must_use]
    pub const fn latest_feedback(&self) -> Option<&FeedbackResult> {
        self.latest.as_ref()
    }

    /// Exercise being tracked
    #[must_use]
    pub const fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    /// Session identifier used in logs
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    fn clear_progress(&mut self) {
        self.latest = None;
        self.frames_processed = 0;
        self.correct_frames = 0;
    }
}
