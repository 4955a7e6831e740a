// ABOUTME: Tests for the repetition counting state machine
// ABOUTME: Covers full reps, hysteresis, dwell-time debounce, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeDelta, Utc};
use formcoach_analysis::{ConfigError, RepCounter, RepCounterConfig};
use formcoach_core::models::ExercisePhase;

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_725_600, 0).unwrap()
}

fn at(ms: i64) -> DateTime<Utc> {
    start() + TimeDelta::milliseconds(ms)
}

#[test]
fn test_full_squat_counts_once() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());

    counter.update(170.0, at(600));
    assert_eq!(counter.phase(), ExercisePhase::Up);
    counter.update(80.0, at(1200));
    assert_eq!(counter.phase(), ExercisePhase::Down);
    assert_eq!(counter.count(), 0);
    counter.update(170.0, at(1800));
    assert_eq!(counter.phase(), ExercisePhase::Up);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_neutral_straight_to_down_then_up_counts() {
    let mut counter = RepCounter::new(RepCounterConfig::push_up(), start());
    counter.update(70.0, at(500));
    counter.update(165.0, at(1000));
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_repeated_down_readings_do_not_advance() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());
    counter.update(80.0, at(600));
    let entered = counter.state().last_phase_change;

    counter.update(75.0, at(1300));
    counter.update(70.0, at(2000));
    assert_eq!(counter.phase(), ExercisePhase::Down);
    assert_eq!(counter.state().last_phase_change, entered);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_hysteresis_band_holds_phase() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());
    counter.update(80.0, at(600));
    // Between 100 and 160: neither threshold crossed
    counter.update(130.0, at(1300));
    counter.update(160.0, at(2000));
    assert_eq!(counter.phase(), ExercisePhase::Down);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_transitions_inside_dwell_time_are_ignored() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());
    counter.update(80.0, at(599));
    assert_eq!(counter.phase(), ExercisePhase::Neutral);

    counter.update(80.0, at(600));
    assert_eq!(counter.phase(), ExercisePhase::Down);

    counter.update(170.0, at(1000));
    assert_eq!(counter.phase(), ExercisePhase::Down);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_jitter_around_thresholds_never_over_counts() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());
    let angles = [95.0, 165.0, 95.0, 165.0, 95.0, 165.0, 95.0, 165.0];
    for (i, angle) in (0_i64..).zip(angles) {
        counter.update(angle, at(600 + i * 70));
    }
    assert_eq!(counter.phase(), ExercisePhase::Down);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_count_never_decreases() {
    let mut counter = RepCounter::new(RepCounterConfig::sit_up(), start());
    let mut previous = 0;
    for (i, angle) in (1_i64..).zip([80.0, 150.0, 120.0, 80.0, 150.0, 85.0, 145.0]) {
        counter.update(angle, at(i * 700));
        assert!(counter.count() >= previous);
        previous = counter.count();
    }
    assert_eq!(counter.count(), 3);
}

#[test]
fn test_reset_restarts_debounce() {
    let mut counter = RepCounter::new(RepCounterConfig::squat(), start());
    counter.update(80.0, at(600));
    counter.update(170.0, at(1200));
    assert_eq!(counter.count(), 1);

    counter.reset(at(5000));
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.phase(), ExercisePhase::Neutral);

    counter.update(80.0, at(5100));
    assert_eq!(counter.phase(), ExercisePhase::Neutral);
    counter.update(80.0, at(5600));
    assert_eq!(counter.phase(), ExercisePhase::Down);
}

#[test]
fn test_presets() {
    let squat = RepCounterConfig::squat();
    assert!((squat.down_threshold - 100.0).abs() < f64::EPSILON);
    assert!((squat.up_threshold - 160.0).abs() < f64::EPSILON);
    assert_eq!(squat.min_phase_time(), TimeDelta::milliseconds(600));

    assert_eq!(RepCounterConfig::push_up().min_phase_time_ms, 500);
    assert_eq!(RepCounterConfig::sit_up().min_phase_time_ms, 700);
}

#[test]
fn test_unordered_thresholds_are_rejected() {
    assert_eq!(
        RepCounterConfig::new(160.0, 100.0, 600),
        Err(ConfigError::InvalidThresholds {
            down: 160.0,
            up: 100.0
        })
    );
    assert!(RepCounterConfig::new(f64::NAN, 100.0, 600).is_err());
    assert!(RepCounterConfig::new(90.0, 140.0, 0).is_ok());
}

#[test]
fn test_huge_dwell_time_does_not_overflow() {
    let config = RepCounterConfig::squat().with_min_phase_time_ms(u64::MAX);
    let mut counter = RepCounter::new(config, start());
    counter.update(80.0, at(10_000_000));
    assert_eq!(counter.phase(), ExercisePhase::Neutral);
}
