// ABOUTME: Configuration error types for analysis settings validation
// ABOUTME: Defines error variants for threshold ordering, ranges, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analysis settings validation.

use formcoach_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Rep-counting thresholds are not ordered `down < up`
    #[error("Invalid thresholds: down ({down}) must be below up ({up})")]
    InvalidThresholds {
        /// Configured down threshold
        down: f64,
        /// Configured up threshold
        up: f64,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidThresholds { .. } => ErrorCode::ConfigInvalid,
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::Parse(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
