// ABOUTME: Criterion benchmarks for per-frame form analysis
// ABOUTME: Measures angle math, rule evaluation, and full session frame processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for form analysis.
//!
//! A camera feed delivers roughly 30 frames per second, so a frame must be
//! processed well inside 33 ms.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, TimeDelta, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use formcoach::constants::pose_landmarks;
use formcoach::models::{ExerciseKind, Landmark, LandmarkFrame};
use formcoach::session::ExerciseSession;
use formcoach_analysis::rules::rule_for;
use formcoach_analysis::{angle_between, AnalysisConfig, FormRules};

/// One recorded second at 30 fps
const FRAMES_PER_SECOND: usize = 30;

fn pose(exercise: ExerciseKind, degrees: f64) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.5, 0.5).visible(0.9); pose_landmarks::LANDMARK_COUNT];
    let [first, vertex, last] = rule_for(exercise).landmarks;
    let theta = degrees.to_radians();
    landmarks[first] = Landmark::new(0.5, 0.3).visible(0.9);
    landmarks[vertex] = Landmark::new(0.5, 0.5).visible(0.9);
    landmarks[last] =
        Landmark::new(0.2_f64.mul_add(theta.sin(), 0.5), 0.2_f64.mul_add(-theta.cos(), 0.5))
            .visible(0.9);
    landmarks
}

/// Squat-like oscillation between 80° and 170°
fn recording(exercise: ExerciseKind, seconds: usize) -> Vec<LandmarkFrame> {
    let start = DateTime::<Utc>::UNIX_EPOCH;
    (0..seconds * FRAMES_PER_SECOND)
        .map(|index| {
            let phase = (index as f64 / FRAMES_PER_SECOND as f64) * std::f64::consts::PI;
            let degrees = 45.0f64.mul_add(phase.cos(), 125.0);
            let offset = TimeDelta::milliseconds(i64::try_from(index).unwrap_or_default() * 33);
            LandmarkFrame::new(start + offset, pose(exercise, degrees))
        })
        .collect()
}

fn bench_angle_between(c: &mut Criterion) {
    let a = Landmark::new(0.41, 0.32);
    let b = Landmark::new(0.47, 0.58);
    let d = Landmark::new(0.52, 0.83);

    c.bench_function("angle_between", |bench| {
        bench.iter(|| angle_between(black_box(&a), black_box(&b), black_box(&d)));
    });
}

fn bench_rule_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_rules");
    let rules = FormRules::default();

    for exercise in ExerciseKind::ALL {
        let landmarks = pose(exercise, 95.0);
        group.bench_with_input(
            BenchmarkId::new("evaluate", exercise),
            &landmarks,
            |bench, landmarks| {
                bench.iter(|| rules.evaluate(black_box(exercise), black_box(landmarks)));
            },
        );
    }

    group.finish();
}

fn bench_session_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for seconds in [1_usize, 10, 60] {
        let frames = recording(ExerciseKind::Squat, seconds);
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("replay_squat", format!("{seconds}s")),
            &frames,
            |bench, frames| {
                bench.iter(|| {
                    let mut session = ExerciseSession::new(
                        ExerciseKind::Squat,
                        AnalysisConfig::default(),
                        DateTime::<Utc>::UNIX_EPOCH,
                    )
                    .ok()?;
                    for frame in frames {
                        black_box(session.process_frame(frame));
                    }
                    Some(session.count())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_angle_between,
    bench_rule_evaluation,
    bench_session_replay
);
criterion_main!(benches);
