// ABOUTME: Integration tests driving clinical scenarios through synthesis and analysis
// ABOUTME: Verifies scripted declines round-trip into the expected alerts and risk levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use vigil_monitor::intelligence::RiskAnalyzer;
use vigil_monitor::models::{
    ActivityBaseline, AlertType, DailyActivity, GaitMetrics, Gender, Patient, PatientBuilder,
    RiskLevel, TimeOfDay, TrendDirection,
};
use vigil_monitor::synthesis::{ClinicalScenario, PatientGenerator};

// === Fixtures ===

/// First scripted day, right after the steady fixture history ends
fn scenario_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn reference_gait() -> GaitMetrics {
    GaitMetrics {
        speed: 1.0,
        stride_length: 0.6,
        step_symmetry: 0.9,
        balance_score: 8.0,
        turn_speed: 80.0,
        stride_length_variability: 0.12,
    }
}

/// Daily record pinned exactly to the fixture baseline
fn steady_day(offset: u64) -> DailyActivity {
    DailyActivity {
        date: NaiveDate::from_ymd_opt(2025, 5, 18)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap(),
        steps: 5000,
        standing_minutes: 150,
        movement_frequency: 35,
        sleep_quality: 8,
        medications: Vec::new(),
        stair_use: 2,
        rapid_movements: 1,
        inactivity_periods: 1,
        time_of_day: TimeOfDay::Morning,
        gait: reference_gait(),
    }
}

/// Medication-free patient with two steady weeks behind them
fn scripted_patient() -> Patient {
    PatientBuilder::new("P201", "Scenario Fixture", 75, Gender::Male)
        .risk_level(RiskLevel::Low)
        .baseline(ActivityBaseline {
            steps: 5000,
            standing_minutes: 150,
            movement_frequency: 35,
            sleep_quality: 8,
            gait_speed: 1.0,
            balance_score: 8.0,
        })
        .gait_metrics(reference_gait())
        .activity_history((0..14).map(steady_day).collect())
        .build()
}

// === Scenario Round Trips ===

#[test]
fn test_subtle_slowdown_round_trip_raises_mobility_alert() {
    let mut generator = PatientGenerator::new(21);
    let patient = scripted_patient();

    let run = generator.run_scenario(
        ClinicalScenario::SubtleSlowdown,
        &patient,
        30,
        scenario_start(),
    );
    // The slowdown script is a fixed week regardless of the requested span
    assert_eq!(run.len(), 7);

    let patient = patient.with_days(run);
    let analysis = RiskAnalyzer::default().analyze(&patient);

    assert!(analysis.alert);
    assert_eq!(analysis.alert_type, Some(AlertType::MobilityDecline));
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
    assert_eq!(analysis.trends.steps, TrendDirection::Declining);
    assert_eq!(analysis.trends.standing, TrendDirection::Declining);
    assert_eq!(analysis.trends.gait, TrendDirection::Stable);
}

#[test]
fn test_crisis_onset_round_trip_forces_high_risk() {
    let mut generator = PatientGenerator::new(33);
    let patient = scripted_patient();

    let run = generator.run_scenario(
        ClinicalScenario::HypertensiveCrisis,
        &patient,
        14,
        scenario_start(),
    );
    assert_eq!(run.len(), 14);

    // The crisis strikes at day four of a fourteen-day run
    let onset = 4;
    assert!(run[onset]
        .medications
        .iter()
        .any(|m| m == "Emergency Antihypertensive"));

    // History ending on the crisis day shows the overnight collapse
    let patient = patient.with_days(run.into_iter().take(onset + 1));
    let analysis = RiskAnalyzer::default().analyze(&patient);

    assert!(analysis.alert);
    assert_eq!(analysis.alert_type, Some(AlertType::MedicationEffect));
    assert_eq!(
        analysis.alert_message.as_deref(),
        Some("Sharp decline in mobility detected. Possible medication side effect.")
    );
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn test_generated_patient_crisis_still_alerts() {
    let mut generator = PatientGenerator::new(7);
    let today = scenario_start();
    let patient = generator.generate_patient("P202", "Rosa Delgado", 75, Gender::Female, today);

    let run = generator.run_scenario(ClinicalScenario::HypertensiveCrisis, &patient, 10, today);

    // Day three of a ten-day run is the onset; the collapse always lands
    // past the sharp-decline ratio, whatever the daily draws were
    let onset = 3;
    let patient = patient.with_days(run.into_iter().take(onset + 1));
    let analysis = RiskAnalyzer::default().analyze(&patient);

    assert!(analysis.alert);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn test_same_seed_reproduces_identical_runs() {
    let today = scenario_start();

    let mut first = PatientGenerator::new(99);
    let mut second = PatientGenerator::new(99);

    let patient_a = first.generate_patient("P203", "Nina Vasquez", 80, Gender::Female, today);
    let patient_b = second.generate_patient("P203", "Nina Vasquez", 80, Gender::Female, today);
    assert_eq!(patient_a, patient_b);

    let run_a = first.run_scenario(ClinicalScenario::DementiaEpisode, &patient_a, 12, today);
    let run_b = second.run_scenario(ClinicalScenario::DementiaEpisode, &patient_b, 12, today);
    assert_eq!(run_a, run_b);
}
