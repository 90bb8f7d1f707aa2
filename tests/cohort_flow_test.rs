// ABOUTME: End-to-end cohort lifecycle tests covering monitoring days, scenarios, and alerts
// ABOUTME: Drives the cohort manager the way the care dashboard backend would
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use uuid::Uuid;
use vigil_monitor::cohort::{CohortError, CohortManager};
use vigil_monitor::models::{Gender, RiskLevel};
use vigil_monitor::synthesis::ClinicalScenario;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

// === Daily Monitoring ===

#[test]
fn test_week_of_monitoring_accumulates_history_and_alerts() {
    let mut cohort = CohortManager::with_sample_cohort(42, today());

    for _ in 0..7 {
        cohort.advance_day();
    }

    assert_eq!(cohort.current_date(), today() + Days::new(7));
    for patient in cohort.patients() {
        let history = patient.activity_history();
        assert_eq!(history.len(), 21);
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    }
    // Nothing has been dismissed, so the active view matches the log
    assert_eq!(cohort.active_alerts().len(), cohort.alerts().len());
}

#[test]
fn test_late_enrollee_joins_the_daily_cycle() {
    let mut cohort = CohortManager::with_sample_cohort(12, today());
    for _ in 0..3 {
        cohort.advance_day();
    }

    cohort.add_patient("P010", "Ida Lang", 83, Gender::Female);
    let enrolled_on = cohort.current_date();
    assert_eq!(cohort.patient("P010").unwrap().activity_history().len(), 14);

    for _ in 0..2 {
        cohort.advance_day();
    }

    let late = cohort.patient("P010").unwrap();
    assert_eq!(late.activity_history().len(), 16);
    assert_eq!(
        late.activity_history().last().unwrap().date,
        enrolled_on + Days::new(2)
    );
    // Founding members kept their full span
    assert_eq!(cohort.patient("P001").unwrap().activity_history().len(), 19);
}

// === Scenario and Alert Lifecycle ===

#[test]
fn test_crisis_flow_from_scenario_to_dismissal() {
    let mut cohort = CohortManager::with_sample_cohort(5, today());

    let alert = cohort
        .run_scenario("P002", ClinicalScenario::HypertensiveCrisis, 1)
        .unwrap()
        .expect("a history ending mid-crisis should alert");

    assert_eq!(alert.patient_id, "P002");
    assert_eq!(alert.patient_name, "Margaret Johnson");
    assert_eq!(alert.date, today());
    assert_eq!(alert.severity, RiskLevel::High);
    assert_eq!(alert.recommendations.len(), 4);
    assert!(!alert.dismissed);

    assert_eq!(cohort.active_alerts().len(), 1);
    cohort.dismiss_alert(alert.id).unwrap();
    assert!(cohort.active_alerts().is_empty());
    // The record stays in the log for later review
    assert_eq!(cohort.alerts().len(), 1);
    assert!(cohort.alerts()[0].dismissed);
}

#[test]
fn test_unknown_identifiers_surface_descriptive_errors() {
    let mut cohort = CohortManager::with_sample_cohort(42, today());

    let err = cohort
        .run_scenario("P999", ClinicalScenario::SubtleSlowdown, 7)
        .unwrap_err();
    assert!(matches!(err, CohortError::UnknownPatient(_)));
    assert_eq!(err.to_string(), "unknown patient: P999");

    let missing = Uuid::new_v4();
    let err = cohort.dismiss_alert(missing).unwrap_err();
    assert!(matches!(err, CohortError::UnknownAlert(id) if id == missing));
}

#[test]
fn test_raised_alerts_serialize_for_downstream_consumers() {
    let mut cohort = CohortManager::with_sample_cohort(8, today());

    let alert = cohort
        .run_scenario("P003", ClinicalScenario::HypertensiveCrisis, 1)
        .unwrap()
        .expect("a history ending mid-crisis should alert");

    let json = serde_json::to_value(&alert).unwrap();
    assert_eq!(json["patient_id"], "P003");
    assert_eq!(json["patient_name"], "Robert Davis");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["dismissed"], false);
    assert_eq!(json["date"], "2025-07-01");
    assert!(json["alert_type"].is_string());
    assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(4));
}
