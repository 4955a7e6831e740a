// ABOUTME: Core types and constants for the FormCoach exercise analysis workspace
// ABOUTME: Foundation crate with error handling, landmark models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormCoach` Core
//!
//! Foundation crate providing shared types and constants for exercise form
//! analysis. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Landmark indices, rep-counting presets, feedback messages, env var names
//! - **models**: Landmarks, frames, exercise kinds, phases, and feedback results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Landmark`, `LandmarkFrame`, `ExerciseKind`, `FeedbackResult`)
pub mod models;
