// ABOUTME: Environment configuration loading for analysis calibration and logging
// ABOUTME: Malformed variables fall back to defaults; out-of-range values are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::env_config;
use crate::logging::LoggingConfig;
use formcoach_analysis::{AnalysisConfig, ConfigError};
use formcoach_core::errors::AppResult;
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};

/// Everything the replay tool needs from the environment
#[derive(Debug, Clone)]
pub struct FormCoachConfig {
    /// Form evaluation and rep-counting calibration
    pub analysis: AnalysisConfig,
    /// Log level and output format
    pub logging: LoggingConfig,
}

impl FormCoachConfig {
    /// Load all settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a parsed value is semantically invalid, such as a
    /// visibility threshold outside `[0, 1]`.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            analysis: load_analysis_config()?,
            logging: LoggingConfig::from_env(),
        })
    }
}

/// Load analysis settings, starting from the calibrated defaults
///
/// - `FORMCOACH_VISIBILITY_THRESHOLD`
/// - `FORMCOACH_SQUAT_MIN_PHASE_MS`
/// - `FORMCOACH_PUSHUP_MIN_PHASE_MS`
/// - `FORMCOACH_SITUP_MIN_PHASE_MS`
///
/// # Errors
///
/// Returns an error if the resulting configuration fails validation.
pub fn load_analysis_config() -> AppResult<AnalysisConfig> {
    let defaults = AnalysisConfig::default();

    let config = AnalysisConfig {
        visibility_threshold: env_or_default(
            env_config::VISIBILITY_THRESHOLD,
            defaults.visibility_threshold,
        ),
        squat: defaults.squat.with_min_phase_time_ms(env_or_default(
            env_config::SQUAT_MIN_PHASE_MS,
            defaults.squat.min_phase_time_ms,
        )),
        push_up: defaults.push_up.with_min_phase_time_ms(env_or_default(
            env_config::PUSH_UP_MIN_PHASE_MS,
            defaults.push_up.min_phase_time_ms,
        )),
        sit_up: defaults.sit_up.with_min_phase_time_ms(env_or_default(
            env_config::SIT_UP_MIN_PHASE_MS,
            defaults.sit_up.min_phase_time_ms,
        )),
    };

    config.validate()?;
    debug!(?config, "analysis configuration loaded");
    Ok(config)
}

/// Parse an environment variable
///
/// `Ok(None)` when the variable is unset.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the variable is set but malformed.
pub fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    env::var(key).map_or(Ok(None), |raw| {
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{key}='{raw}'")))
    })
}

fn env_or_default<T: FromStr + Copy>(key: &str, default: T) -> T {
    match parse_env(key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            warn!("{e}; using default");
            default
        }
    }
}
