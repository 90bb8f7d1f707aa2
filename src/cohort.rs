// ABOUTME: Cohort manager owning enrolled patients, the simulation clock, and the alert log
// ABOUTME: Day advancement, scenario application, alert raising and dismissal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use chrono::{Days, NaiveDate};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use vigil_core::models::{Alert, Gender, Patient, TimeOfDay};
use vigil_intelligence::RiskAnalyzer;

use crate::logging::MonitorLogger;
use crate::synthesis::{ClinicalScenario, PatientGenerator};

/// Message used when a firing rule carries no message of its own
const FALLBACK_ALERT_MESSAGE: &str = "Potential risk detected";

/// Roster used to seed the demonstration cohort
const SAMPLE_COHORT: [(&str, &str, u32, Gender); 5] = [
    ("P001", "Thomas Williams", 78, Gender::Male),
    ("P002", "Margaret Johnson", 82, Gender::Female),
    ("P003", "Robert Davis", 75, Gender::Male),
    ("P004", "Elizabeth Brown", 85, Gender::Female),
    ("P005", "James Wilson", 79, Gender::Male),
];

/// Errors from cohort operations that reference enrolled state.
#[derive(Debug, Error)]
pub enum CohortError {
    /// The referenced patient is not enrolled
    #[error("unknown patient: {0}")]
    UnknownPatient(String),
    /// The referenced alert does not exist
    #[error("unknown alert: {0}")]
    UnknownAlert(Uuid),
}

/// Owner of the enrolled patients, the simulation clock, and the alert log.
///
/// Patients are held as immutable snapshots: each day advance or scenario run
/// replaces a snapshot with one produced by the consuming `with_*` methods.
/// Stored per-patient risk levels are written once at enrollment and never
/// rewritten; escalated levels live on the raised alerts.
pub struct CohortManager {
    patients: Vec<Patient>,
    alerts: Vec<Alert>,
    current_date: NaiveDate,
    generator: PatientGenerator,
    analyzer: RiskAnalyzer,
}

impl CohortManager {
    /// Create an empty cohort anchored to `today`
    #[must_use]
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            patients: Vec::new(),
            alerts: Vec::new(),
            current_date: today,
            generator: PatientGenerator::new(seed),
            analyzer: RiskAnalyzer::default(),
        }
    }

    /// Create a cohort pre-enrolled with the five-patient demonstration roster
    #[must_use]
    pub fn with_sample_cohort(seed: u64, today: NaiveDate) -> Self {
        let mut manager = Self::new(seed, today);
        for (id, name, age, gender) in SAMPLE_COHORT {
            manager.add_patient(id, name, age, gender);
        }
        manager
    }

    /// Synthesize and enroll a new patient anchored to the current date
    pub fn add_patient(&mut self, id: &str, name: &str, age: u32, gender: Gender) {
        let patient = self
            .generator
            .generate_patient(id, name, age, gender, self.current_date);
        debug!(patient_id = id, "Patient added to cohort");
        self.patients.push(patient);
    }

    /// Enrolled patients in enrollment order
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Look up a patient by identifier
    #[must_use]
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    /// The cohort's current simulation date
    #[must_use]
    pub const fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Every alert raised so far, including dismissed ones
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts not yet dismissed, oldest first
    #[must_use]
    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| !a.dismissed).collect()
    }

    /// Advance the simulation clock one day.
    ///
    /// Each patient gets a simulated day appended to their history and a
    /// fresh analysis pass over the result. Analyses that fire a detection
    /// rule raise alerts dated to the new day; the raised alerts are both
    /// appended to the alert log and returned.
    pub fn advance_day(&mut self) -> Vec<Alert> {
        let date = self.current_date + Days::new(1);
        self.current_date = date;

        let mut raised = Vec::new();
        let patients = std::mem::take(&mut self.patients);
        let mut advanced = Vec::with_capacity(patients.len());
        for patient in patients {
            let time_of_day = TimeOfDay::from_hour(self.generator.observation_hour());
            let day = self.generator.simulate_day_at(&patient, date, time_of_day);
            let patient = patient.with_day(day);
            let analysis = self.analyzer.analyze(&patient);
            if let Some(alert_type) = analysis.alert_type {
                MonitorLogger::log_alert_raised(patient.id(), alert_type, analysis.risk_level);
                raised.push(Alert {
                    id: Uuid::new_v4(),
                    patient_id: patient.id().to_owned(),
                    patient_name: patient.name().to_owned(),
                    date,
                    alert_type,
                    message: analysis
                        .alert_message
                        .unwrap_or_else(|| FALLBACK_ALERT_MESSAGE.to_owned()),
                    recommendations: analysis.recommendations,
                    severity: analysis.risk_level,
                    dismissed: false,
                });
            }
            advanced.push(patient);
        }
        self.patients = advanced;
        self.alerts.extend(raised.iter().cloned());
        MonitorLogger::log_day_advanced(date, self.patients.len(), raised.len());
        raised
    }

    /// Append a scripted scenario run to one patient's history and analyze
    /// the outcome.
    ///
    /// The run is dated so its final day lands on the cohort's current date.
    /// Returns the alert raised by the post-scenario analysis, if any; the
    /// alert is also appended to the alert log.
    ///
    /// # Errors
    ///
    /// Returns [`CohortError::UnknownPatient`] if `patient_id` is not
    /// enrolled.
    pub fn run_scenario(
        &mut self,
        patient_id: &str,
        scenario: ClinicalScenario,
        days: u32,
    ) -> Result<Option<Alert>, CohortError> {
        let index = self
            .patients
            .iter()
            .position(|p| p.id() == patient_id)
            .ok_or_else(|| CohortError::UnknownPatient(patient_id.to_owned()))?;

        let span = scenario.run_length(days);
        let start = self.current_date - Days::new(u64::from(span.saturating_sub(1)));
        let run = self
            .generator
            .run_scenario(scenario, &self.patients[index], days, start);

        let patient = self.patients.remove(index).with_days(run);
        let analysis = self.analyzer.analyze(&patient);
        let alert = analysis.alert_type.map(|alert_type| Alert {
            id: Uuid::new_v4(),
            patient_id: patient.id().to_owned(),
            patient_name: patient.name().to_owned(),
            date: self.current_date,
            alert_type,
            message: analysis
                .alert_message
                .unwrap_or_else(|| FALLBACK_ALERT_MESSAGE.to_owned()),
            recommendations: analysis.recommendations,
            severity: analysis.risk_level,
            dismissed: false,
        });
        self.patients.insert(index, patient);

        if let Some(alert) = &alert {
            MonitorLogger::log_alert_raised(&alert.patient_id, alert.alert_type, alert.severity);
            self.alerts.push(alert.clone());
        }
        MonitorLogger::log_scenario_run(patient_id, &scenario.to_string(), days as usize);
        Ok(alert)
    }

    /// Mark an alert dismissed. Dismissal is idempotent: dismissing an
    /// already-dismissed alert succeeds and leaves it dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`CohortError::UnknownAlert`] if no alert has this id.
    pub fn dismiss_alert(&mut self, id: Uuid) -> Result<(), CohortError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CohortError::UnknownAlert(id))?;
        alert.dismissed = true;
        MonitorLogger::log_alert_dismissed(id);
        Ok(())
    }
}
