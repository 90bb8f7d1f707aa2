// ABOUTME: Criterion benchmarks for the fall-risk analysis and synthesis pipeline
// ABOUTME: Measures analysis over growing histories, patient synthesis, and scenario runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

//! Criterion benchmarks for the fall-risk analysis and synthesis pipeline.
//!
//! Measures risk analysis over histories of increasing span, patient
//! synthesis, scripted scenario runs, and a full cohort monitoring cycle.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Days, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vigil_monitor::cohort::CohortManager;
use vigil_monitor::intelligence::RiskAnalyzer;
use vigil_monitor::models::{
    ActivityBaseline, DailyActivity, GaitMetrics, Gender, Patient, PatientBuilder, RiskLevel,
    TimeOfDay,
};
use vigil_monitor::synthesis::{ClinicalScenario, PatientGenerator};

/// Generate a deterministic history without touching the synthesizer RNG
#[allow(clippy::cast_possible_truncation)]
fn generate_history(count: usize) -> Vec<DailyActivity> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|index| DailyActivity {
            date: start + Days::new(index as u64),
            steps: 4600 + ((index * 137) % 800) as u32,
            standing_minutes: 140 + ((index * 31) % 20) as u32,
            movement_frequency: 32 + ((index * 7) % 6) as u32,
            sleep_quality: (6 + (index * 3) % 4) as u8,
            medications: Vec::new(),
            stair_use: ((index * 5) % 8) as u32,
            rapid_movements: ((index * 11) % 5) as u32,
            inactivity_periods: ((index * 13) % 4) as u32,
            time_of_day: match index % 4 {
                0 => TimeOfDay::Morning,
                1 => TimeOfDay::Afternoon,
                2 => TimeOfDay::Evening,
                _ => TimeOfDay::Night,
            },
            gait: GaitMetrics {
                speed: 1.0 + ((index * 17) % 20) as f64 / 100.0,
                stride_length: 0.6,
                step_symmetry: 0.9,
                balance_score: 7.5 + ((index * 19) % 10) as f64 / 10.0,
                turn_speed: 80.0,
                stride_length_variability: 0.12,
            },
        })
        .collect()
}

fn monitored_patient(history: Vec<DailyActivity>) -> Patient {
    PatientBuilder::new("B001", "Bench Resident", 78, Gender::Female)
        .risk_level(RiskLevel::Low)
        .baseline(ActivityBaseline {
            steps: 5000,
            standing_minutes: 150,
            movement_frequency: 35,
            sleep_quality: 8,
            gait_speed: 1.0,
            balance_score: 8.0,
        })
        .activity_history(history)
        .build()
}

/// Benchmark full risk analysis over histories of increasing span
#[allow(clippy::cast_possible_truncation)]
fn bench_risk_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_analysis");

    for days in [14_usize, 60, 365] {
        let patient = monitored_patient(generate_history(days));
        let analyzer = RiskAnalyzer::default();
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("analyze", days), &patient, |b, patient| {
            b.iter(|| analyzer.analyze(black_box(patient)));
        });
    }

    group.finish();
}

/// Benchmark patient synthesis and single-day simulation
fn bench_patient_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    group.bench_function("generate_patient", |b| {
        let mut generator = PatientGenerator::new(42);
        b.iter(|| {
            generator.generate_patient("B002", "Bench Enrollee", 82, Gender::Male, black_box(today))
        });
    });

    group.bench_function("simulate_day", |b| {
        let mut generator = PatientGenerator::new(42);
        let patient = generator.generate_patient("B003", "Bench Daily", 75, Gender::Female, today);
        let recorded_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        b.iter(|| generator.simulate_day(black_box(&patient), black_box(recorded_at)));
    });

    group.finish();
}

/// Benchmark scripted scenario runs over a two-week span
fn bench_scenario_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let scenarios = [
        ClinicalScenario::SubtleSlowdown,
        ClinicalScenario::HypertensiveCrisis,
        ClinicalScenario::DementiaEpisode,
    ];

    for scenario in scenarios {
        let mut generator = PatientGenerator::new(42);
        let patient =
            generator.generate_patient("B004", "Bench Scenario", 80, Gender::Female, today);
        group.bench_function(BenchmarkId::new("run", scenario.to_string()), |b| {
            b.iter(|| generator.run_scenario(black_box(scenario), black_box(&patient), 14, today));
        });
    }

    group.finish();
}

/// Benchmark one full monitoring cycle over the demonstration cohort
fn bench_monitoring_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("monitoring");
    group.sample_size(50);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    group.bench_function("enroll_and_advance", |b| {
        b.iter(|| {
            let mut cohort = CohortManager::with_sample_cohort(black_box(42), today);
            cohort.advance_day()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_risk_analysis,
    bench_patient_synthesis,
    bench_scenario_runs,
    bench_monitoring_cycle,
);
criterion_main!(benches);
