// ABOUTME: Configuration module for FormCoach runtime settings
// ABOUTME: Environment-only loading of analysis calibration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! There are no configuration files: every setting has a compiled-in default and
//! may be overridden by an environment variable.

/// Environment variable loading
pub mod environment;

pub use environment::{load_analysis_config, FormCoachConfig};
