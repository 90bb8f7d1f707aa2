// ABOUTME: Scripted clinical scenarios layered on top of simulated daily activity
// ABOUTME: Subtle mobility slowdown, hypertensive crisis with recovery, dementia episodes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vigil_core::models::{DailyActivity, Patient, TimeOfDay};

use super::generator::{scaled, PatientGenerator};

/// The subtle-slowdown script always spans a fixed week
const SLOWDOWN_DAYS: u32 = 7;

/// Per-day activity decline during the subtle slowdown
const SLOWDOWN_DAILY_DECLINE: f64 = 0.05;

/// Medication added on the crisis day and through recovery
const EMERGENCY_MEDICATION: &str = "Emergency Antihypertensive";

/// The crisis lands this far into the requested window
const CRISIS_ONSET_FRACTION: f64 = 0.3;

/// Step retention on the crisis day
const CRISIS_STEPS_FACTOR: f64 = 0.3;

/// Standing-time retention on the crisis day
const CRISIS_STANDING_FACTOR: f64 = 0.2;

/// Movement-frequency retention on the crisis day
const CRISIS_MOVEMENT_FACTOR: f64 = 0.3;

/// Gait-speed retention on the crisis day
const CRISIS_GAIT_SPEED_FACTOR: f64 = 0.5;

/// Balance retention on the crisis day
const CRISIS_BALANCE_FACTOR: f64 = 0.6;

/// Prolonged inactivity recorded on the crisis day
const CRISIS_INACTIVITY_PERIODS: u32 = 5;

/// Recovery tapers over this many days after the crisis
const RECOVERY_DAYS: u32 = 3;

/// Activity retention at the start of recovery
const RECOVERY_BASE_FACTOR: f64 = 0.4;

/// Daily gain in activity retention during recovery
const RECOVERY_DAILY_GAIN: f64 = 0.2;

/// Forgetful episodes land at these fractions of the window
const FORGETFUL_DAY_FRACTIONS: [f64; 3] = [0.2, 0.5, 0.8];

/// Restless surge applied to steps, standing time, and rapid movements
const FORGETFUL_ACTIVITY_SURGE: f64 = 1.5;

/// Restless surge applied to movement frequency
const FORGETFUL_MOVEMENT_SURGE: f64 = 1.8;

/// Sleep-score drop on a forgetful day
const FORGETFUL_SLEEP_DROP: u8 = 3;

/// Step-symmetry retention on a forgetful day
const FORGETFUL_SYMMETRY_FACTOR: f64 = 0.7;

/// Stride-variability surge on a forgetful day
const FORGETFUL_VARIABILITY_SURGE: f64 = 1.5;

/// Inactivity recorded on a restless forgetful day
const FORGETFUL_INACTIVITY_PERIODS: u32 = 1;

/// Step retention on the exhausted day after an episode
const AFTERMATH_STEPS_FACTOR: f64 = 0.7;

/// Standing-time retention on the day after an episode
const AFTERMATH_STANDING_FACTOR: f64 = 0.6;

/// Movement-frequency retention on the day after an episode
const AFTERMATH_MOVEMENT_FACTOR: f64 = 0.5;

/// Sleep-score drop on the day after an episode
const AFTERMATH_SLEEP_DROP: u8 = 2;

/// Inactivity recorded on the day after an episode
const AFTERMATH_INACTIVITY_PERIODS: u32 = 4;

/// Gait-speed retention on the day after an episode
const AFTERMATH_GAIT_SPEED_FACTOR: f64 = 0.8;

/// Balance retention on the day after an episode
const AFTERMATH_BALANCE_FACTOR: f64 = 0.7;

/// Sleep scores never drop below this floor
const MINIMUM_SLEEP_SCORE: u8 = 1;

/// Scripted clinical courses used to exercise the analysis engine.
///
/// Each scenario produces a run of daily activity with a known shape layered
/// over the patient's simulated days, so downstream detection behavior can be
/// demonstrated and tested against predictable trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClinicalScenario {
    /// Gradual week-long activity decline with unchanged gait
    SubtleSlowdown,
    /// Acute collapse partway through the window, then a three-day taper back
    HypertensiveCrisis,
    /// Restless medication-skipping episodes followed by exhausted aftermaths
    DementiaEpisode,
}

impl ClinicalScenario {
    /// Number of days a run of this scenario produces for a requested window.
    ///
    /// The subtle slowdown ignores the requested window and always spans its
    /// fixed week.
    #[must_use]
    pub const fn run_length(self, days: u32) -> u32 {
        match self {
            Self::SubtleSlowdown => SLOWDOWN_DAYS,
            Self::HypertensiveCrisis | Self::DementiaEpisode => days,
        }
    }
}

impl fmt::Display for ClinicalScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SubtleSlowdown => "subtle-slowdown",
            Self::HypertensiveCrisis => "hypertensive-crisis",
            Self::DementiaEpisode => "dementia-episode",
        };
        f.write_str(name)
    }
}

impl PatientGenerator {
    /// Produce a scenario's daily run for one patient.
    ///
    /// Days are dated consecutively from `start_date`. The subtle-slowdown
    /// script always spans seven days regardless of `days`; the other
    /// scenarios fill the requested window around their scripted episodes.
    #[must_use]
    pub fn run_scenario(
        &mut self,
        scenario: ClinicalScenario,
        patient: &Patient,
        days: u32,
        start_date: NaiveDate,
    ) -> Vec<DailyActivity> {
        debug!(
            patient_id = patient.id(),
            scenario = %scenario,
            days,
            "Running clinical scenario"
        );
        match scenario {
            ClinicalScenario::SubtleSlowdown => self.subtle_slowdown_days(patient, start_date),
            ClinicalScenario::HypertensiveCrisis => {
                self.hypertensive_crisis_days(patient, days, start_date)
            }
            ClinicalScenario::DementiaEpisode => {
                self.dementia_episode_days(patient, days, start_date)
            }
        }
    }

    /// A fixed week of linear decline with no daily variation, so each day's
    /// drop stays below the sharp-change detection thresholds
    fn subtle_slowdown_days(
        &mut self,
        patient: &Patient,
        start_date: NaiveDate,
    ) -> Vec<DailyActivity> {
        let baseline = patient.baseline();
        let mut result = Vec::with_capacity(SLOWDOWN_DAYS as usize);
        for i in 0..SLOWDOWN_DAYS {
            let retention = f64::from(i).mul_add(-SLOWDOWN_DAILY_DECLINE, 1.0);
            let (stair_use, rapid_movements, inactivity_periods) = self.incidental_counts();
            result.push(DailyActivity {
                date: start_date + Days::new(u64::from(i)),
                steps: scaled(baseline.steps, retention),
                standing_minutes: scaled(baseline.standing_minutes, retention),
                movement_frequency: scaled(baseline.movement_frequency, retention),
                sleep_quality: baseline.sleep_quality,
                medications: patient.medications().to_vec(),
                stair_use,
                rapid_movements,
                inactivity_periods,
                time_of_day: TimeOfDay::Morning,
                gait: patient.gait_metrics().clone(),
            });
        }
        result
    }

    fn hypertensive_crisis_days(
        &mut self,
        patient: &Patient,
        days: u32,
        start_date: NaiveDate,
    ) -> Vec<DailyActivity> {
        let crisis_day = (f64::from(days) * CRISIS_ONSET_FRACTION) as u32;
        let mut result = Vec::with_capacity(days as usize);
        for i in 0..days {
            let date = start_date + Days::new(u64::from(i));
            let mut day = self.scenario_base_day(patient, date);
            if i == crisis_day {
                day.steps = scaled(day.steps, CRISIS_STEPS_FACTOR);
                day.standing_minutes = scaled(day.standing_minutes, CRISIS_STANDING_FACTOR);
                day.movement_frequency = scaled(day.movement_frequency, CRISIS_MOVEMENT_FACTOR);
                day.medications.push(EMERGENCY_MEDICATION.to_owned());
                day.rapid_movements = 0;
                day.inactivity_periods = CRISIS_INACTIVITY_PERIODS;
                day.gait.speed *= CRISIS_GAIT_SPEED_FACTOR;
                day.gait.balance_score *= CRISIS_BALANCE_FACTOR;
            } else if i > crisis_day && i <= crisis_day + RECOVERY_DAYS {
                let offset = i - crisis_day;
                let retention = f64::from(offset).mul_add(RECOVERY_DAILY_GAIN, RECOVERY_BASE_FACTOR);
                day.steps = scaled(day.steps, retention);
                day.standing_minutes = scaled(day.standing_minutes, retention);
                day.movement_frequency = scaled(day.movement_frequency, retention);
                day.medications.push(EMERGENCY_MEDICATION.to_owned());
                day.rapid_movements = scaled(day.rapid_movements, retention);
                day.inactivity_periods = (CRISIS_INACTIVITY_PERIODS - offset).max(1);
            }
            result.push(day);
        }
        result
    }

    fn dementia_episode_days(
        &mut self,
        patient: &Patient,
        days: u32,
        start_date: NaiveDate,
    ) -> Vec<DailyActivity> {
        let forgetful_days =
            FORGETFUL_DAY_FRACTIONS.map(|fraction| (f64::from(days) * fraction) as u32);
        let mut result = Vec::with_capacity(days as usize);
        for i in 0..days {
            let date = start_date + Days::new(u64::from(i));
            let mut day = self.scenario_base_day(patient, date);
            if forgetful_days.contains(&i) {
                // Restless wandering with skipped medication
                day.steps = scaled(day.steps, FORGETFUL_ACTIVITY_SURGE);
                day.standing_minutes = scaled(day.standing_minutes, FORGETFUL_ACTIVITY_SURGE);
                day.movement_frequency = scaled(day.movement_frequency, FORGETFUL_MOVEMENT_SURGE);
                day.medications.clear();
                day.rapid_movements = scaled(day.rapid_movements, FORGETFUL_ACTIVITY_SURGE);
                day.inactivity_periods = FORGETFUL_INACTIVITY_PERIODS;
                day.sleep_quality = day
                    .sleep_quality
                    .saturating_sub(FORGETFUL_SLEEP_DROP)
                    .max(MINIMUM_SLEEP_SCORE);
                day.gait.step_symmetry *= FORGETFUL_SYMMETRY_FACTOR;
                day.gait.stride_length_variability *= FORGETFUL_VARIABILITY_SURGE;
            } else if i > 0 && forgetful_days.contains(&(i - 1)) {
                // Exhausted aftermath
                day.steps = scaled(day.steps, AFTERMATH_STEPS_FACTOR);
                day.standing_minutes = scaled(day.standing_minutes, AFTERMATH_STANDING_FACTOR);
                day.movement_frequency = scaled(day.movement_frequency, AFTERMATH_MOVEMENT_FACTOR);
                day.sleep_quality = day
                    .sleep_quality
                    .saturating_sub(AFTERMATH_SLEEP_DROP)
                    .max(MINIMUM_SLEEP_SCORE);
                day.inactivity_periods = AFTERMATH_INACTIVITY_PERIODS;
                day.gait.speed *= AFTERMATH_GAIT_SPEED_FACTOR;
                day.gait.balance_score *= AFTERMATH_BALANCE_FACTOR;
            }
            result.push(day);
        }
        result
    }

    /// Simulate an unscripted base day stamped with a drawn waking hour
    fn scenario_base_day(&mut self, patient: &Patient, date: NaiveDate) -> DailyActivity {
        let time_of_day = TimeOfDay::from_hour(self.observation_hour());
        self.simulate_day_at(patient, date, time_of_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::models::{ActivityBaseline, GaitMetrics, Gender, PatientBuilder};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn scripted_patient(medications: Vec<String>) -> vigil_core::models::Patient {
        PatientBuilder::new("P020", "Scenario Subject", 75, Gender::Female)
            .medications(medications)
            .baseline(ActivityBaseline {
                steps: 6000,
                standing_minutes: 180,
                movement_frequency: 40,
                sleep_quality: 8,
                gait_speed: 1.1,
                balance_score: 9.0,
            })
            .gait_metrics(GaitMetrics {
                speed: 1.1,
                stride_length: 0.55,
                step_symmetry: 0.9,
                balance_score: 9.0,
                turn_speed: 85.0,
                stride_length_variability: 0.15,
            })
            .build()
    }

    #[test]
    fn test_run_length_pins_the_slowdown_week() {
        assert_eq!(ClinicalScenario::SubtleSlowdown.run_length(30), 7);
        assert_eq!(ClinicalScenario::HypertensiveCrisis.run_length(14), 14);
        assert_eq!(ClinicalScenario::DementiaEpisode.run_length(10), 10);
    }

    #[test]
    fn test_scenario_names_serialize_as_kebab_case() {
        let json = serde_json::to_string(&ClinicalScenario::SubtleSlowdown).unwrap();
        assert_eq!(json, "\"subtle-slowdown\"");
        let parsed: ClinicalScenario = serde_json::from_str("\"hypertensive-crisis\"").unwrap();
        assert_eq!(parsed, ClinicalScenario::HypertensiveCrisis);
    }

    #[test]
    fn test_subtle_slowdown_always_runs_seven_days() {
        let mut generator = PatientGenerator::new(21);
        let patient = scripted_patient(vec!["Lisinopril".to_owned()]);
        let run = generator.run_scenario(ClinicalScenario::SubtleSlowdown, &patient, 30, start());

        assert_eq!(run.len(), 7);
        let expected_steps = [6000, 5700, 5400, 5100, 4800, 4500, 4200];
        for (i, day) in run.iter().enumerate() {
            assert_eq!(day.steps, expected_steps[i]);
            assert_eq!(day.sleep_quality, 8);
            assert_eq!(day.time_of_day, TimeOfDay::Morning);
            assert_eq!(day.date, start() + Days::new(i as u64));
            assert_eq!(&day.gait, patient.gait_metrics());
        }
    }

    #[test]
    fn test_crisis_day_shape_and_recovery_taper() {
        let mut generator = PatientGenerator::new(22);
        let patient = scripted_patient(Vec::new());
        let run =
            generator.run_scenario(ClinicalScenario::HypertensiveCrisis, &patient, 14, start());

        assert_eq!(run.len(), 14);
        let crisis = &run[4];
        assert_eq!(crisis.rapid_movements, 0);
        assert_eq!(crisis.inactivity_periods, 5);
        assert!(crisis
            .medications
            .iter()
            .any(|m| m == "Emergency Antihypertensive"));

        // Recovery tapers inactivity one notch per day
        assert_eq!(run[5].inactivity_periods, 4);
        assert_eq!(run[6].inactivity_periods, 3);
        assert_eq!(run[7].inactivity_periods, 2);
        for day in &run[5..=7] {
            assert!(day
                .medications
                .iter()
                .any(|m| m == "Emergency Antihypertensive"));
        }
        assert!(run[8].medications.is_empty());
    }

    #[test]
    fn test_crisis_days_are_dated_consecutively() {
        let mut generator = PatientGenerator::new(23);
        let patient = scripted_patient(Vec::new());
        let run =
            generator.run_scenario(ClinicalScenario::HypertensiveCrisis, &patient, 10, start());
        for (i, day) in run.iter().enumerate() {
            assert_eq!(day.date, start() + Days::new(i as u64));
        }
    }

    #[test]
    fn test_dementia_episodes_skip_medication_and_crash_after() {
        let mut generator = PatientGenerator::new(24);
        let patient = scripted_patient(vec!["Donepezil".to_owned()]);
        let run = generator.run_scenario(ClinicalScenario::DementiaEpisode, &patient, 14, start());

        assert_eq!(run.len(), 14);
        for i in [2_usize, 7, 11] {
            assert!(run[i].medications.is_empty());
            assert_eq!(run[i].inactivity_periods, 1);
        }
        for i in [3_usize, 8, 12] {
            assert_eq!(run[i].medications, vec!["Donepezil".to_owned()]);
            assert_eq!(run[i].inactivity_periods, 4);
        }
    }
}
