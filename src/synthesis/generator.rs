// ABOUTME: Seeded synthesis of complete patient records and simulated daily activity
// ABOUTME: Age-parameterized baselines, condition draws, and the daily-variation model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use vigil_core::models::{
    ActivityBaseline, ConditionRecord, ConditionSeverity, DailyActivity, EnvironmentalFactors,
    GaitMetrics, Gender, MedicalProfile, MedicationRecord, Patient, PatientBuilder, RiskLevel,
    TimeOfDay,
};
use vigil_intelligence::clinical_constants::{
    activity_baselines, age_risk, circadian, cognition, gait_reference, intake_scoring,
    medication_effects, prevalence,
};

use super::catalog;

/// Days of history synthesized for a brand-new patient
const HISTORY_BACKFILL_DAYS: u64 = 14;

/// Lower bound of the daily-variation multiplier band
const DAILY_VARIATION_MIN: f64 = 0.8;

/// Upper bound (exclusive) of the daily-variation multiplier band
const DAILY_VARIATION_MAX: f64 = 1.2;

/// Probability a drawn condition is graded severe
const SEVERE_SEVERITY_PROBABILITY: f64 = 0.3;

/// Threshold for the follow-up moderate-versus-mild draw
const MODERATE_SEVERITY_THRESHOLD: f64 = 0.6;

/// Longest condition duration assigned at synthesis, in years
const MAX_CONDITION_YEARS: u32 = 10;

/// Medication start dates fall within this many days before synthesis
const MEDICATION_HISTORY_DAYS: u64 = 365;

/// Clinical assessments fall within this many days before synthesis
const ASSESSMENT_HISTORY_DAYS: u64 = 90;

/// Hazard counts and room safety scores are drawn on a 0-3 scale
const MAX_HAZARD_COUNT: u32 = 3;

/// Previous falls recorded at synthesis are capped at two
const MAX_PREVIOUS_FALLS: u32 = 2;

/// Earliest hour an observation can be stamped with
const EARLIEST_OBSERVATION_HOUR: u32 = 6;

/// Latest hour an observation can be stamped with
const LATEST_OBSERVATION_HOUR: u32 = 21;

/// Upper bound for the daily stair-use draw
const STAIR_USE_SPAN: f64 = 10.0;

/// Upper bound for the daily rapid-movement draw
const RAPID_MOVEMENT_SPAN: f64 = 5.0;

/// Upper bound for the daily inactivity-period draw
const INACTIVITY_SPAN: f64 = 3.0;

/// Multipliers applied to baseline metrics for one simulated day
#[derive(Debug, Clone, Copy)]
struct DailyVariation {
    activity: f64,
    sleep: f64,
    gait: f64,
}

/// Seeded synthesizer for patient records and daily activity.
///
/// All randomness flows through the owned generator, so two instances built
/// from the same seed produce identical records draw for draw. Every date in
/// the output is anchored to a caller-supplied day; nothing reads the wall
/// clock.
pub struct PatientGenerator {
    rng: ChaCha8Rng,
}

impl PatientGenerator {
    /// Create a generator from an explicit seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Synthesize a complete patient record.
    ///
    /// `today` anchors every generated date: medication start dates and the
    /// last assessment fall within fixed windows before it, and the 14-day
    /// activity history ends the day before it. The initial risk level is
    /// scored from age, condition count, falls history, and home hazards.
    #[must_use]
    pub fn generate_patient(
        &mut self,
        id: &str,
        name: &str,
        age: u32,
        gender: Gender,
        today: NaiveDate,
    ) -> Patient {
        let baseline = baseline_for(age, gender);
        let conditions = self.draw_conditions(age);
        let medications = self.derive_medications(&conditions, today);
        let environmental_factors = self.draw_environment();
        let gait = gait_for(age, &conditions);
        let history = self.backfill_history(&baseline, &medications, &gait, today);
        let medical_profile = self.draw_medical_profile(age, conditions, medications, today);
        let risk_level = initial_risk_level(age, &medical_profile, &environmental_factors);

        debug!(
            patient_id = id,
            age,
            conditions = medical_profile.chronic_conditions.len(),
            risk_level = ?risk_level,
            "Synthesized patient record"
        );

        PatientBuilder::new(id, name, age, gender)
            .conditions(
                medical_profile
                    .chronic_conditions
                    .iter()
                    .map(|c| c.name.clone())
                    .collect(),
            )
            .medications(
                medical_profile
                    .medications
                    .iter()
                    .map(|m| m.name.clone())
                    .collect(),
            )
            .risk_level(risk_level)
            .baseline(baseline)
            .activity_history(history)
            .environmental_factors(environmental_factors)
            .medical_profile(medical_profile)
            .gait_metrics(gait)
            .build()
    }

    /// Simulate one day of activity for an existing patient.
    ///
    /// The day's date and time-of-day bucket both come from `recorded_at`, so
    /// replaying the same timestamp reproduces the same bucketing. Baseline
    /// metrics are scaled by the daily-variation model: an independent draw
    /// per metric group, damped by balance-affecting medication and by the
    /// time-of-day activity factor.
    #[must_use]
    pub fn simulate_day(&mut self, patient: &Patient, recorded_at: DateTime<Utc>) -> DailyActivity {
        self.simulate_day_at(
            patient,
            recorded_at.date_naive(),
            TimeOfDay::from_datetime(&recorded_at),
        )
    }

    /// Simulate a day for an already-resolved date and observation bucket
    pub(crate) fn simulate_day_at(
        &mut self,
        patient: &Patient,
        date: NaiveDate,
        time_of_day: TimeOfDay,
    ) -> DailyActivity {
        let variation = self.daily_variation(
            patient.medical_profile().any_medication_affects_balance(),
            time_of_day,
        );
        let (stair_use, rapid_movements, inactivity_periods) = self.incidental_counts();
        let baseline = patient.baseline();

        DailyActivity {
            date,
            steps: scaled(baseline.steps, variation.activity),
            standing_minutes: scaled(baseline.standing_minutes, variation.activity),
            movement_frequency: scaled(baseline.movement_frequency, variation.activity),
            sleep_quality: scaled_sleep(baseline.sleep_quality, variation.sleep),
            medications: patient.medications().to_vec(),
            stair_use,
            rapid_movements,
            inactivity_periods,
            time_of_day,
            gait: varied_gait(patient.gait_metrics(), variation.gait),
        }
    }

    /// Draw an observation hour in the waking window
    pub(crate) fn observation_hour(&mut self) -> u32 {
        self.rng
            .gen_range(EARLIEST_OBSERVATION_HOUR..=LATEST_OBSERVATION_HOUR)
    }

    /// Draw the incidental stair-use, rapid-movement, and inactivity counts
    pub(crate) fn incidental_counts(&mut self) -> (u32, u32, u32) {
        (
            (self.rng.gen::<f64>() * STAIR_USE_SPAN).round() as u32,
            (self.rng.gen::<f64>() * RAPID_MOVEMENT_SPAN).round() as u32,
            (self.rng.gen::<f64>() * INACTIVITY_SPAN).round() as u32,
        )
    }

    /// Draw chronic conditions with an age-derived per-entry probability
    fn draw_conditions(&mut self, age: u32) -> Vec<ConditionRecord> {
        let probability = ((f64::from(age) - prevalence::CONDITION_ONSET_AGE)
            * prevalence::CONDITION_PREVALENCE_PER_YEAR)
            .clamp(0.0, 1.0);

        let mut conditions = Vec::new();
        for name in catalog::CONDITION_CATALOG {
            if self.rng.gen::<f64>() >= probability {
                continue;
            }
            let severity = if self.rng.gen::<f64>() < SEVERE_SEVERITY_PROBABILITY {
                ConditionSeverity::Severe
            } else if self.rng.gen::<f64>() < MODERATE_SEVERITY_THRESHOLD {
                ConditionSeverity::Moderate
            } else {
                ConditionSeverity::Mild
            };
            conditions.push(ConditionRecord {
                name: name.to_owned(),
                severity,
                years_since_onset: self.rng.gen_range(1..=MAX_CONDITION_YEARS),
            });
        }
        conditions
    }

    /// Derive prescriptions from the drawn conditions via the fixed table
    fn derive_medications(
        &mut self,
        conditions: &[ConditionRecord],
        today: NaiveDate,
    ) -> Vec<MedicationRecord> {
        let mut medications = Vec::new();
        for condition in conditions {
            for name in catalog::medications_for(&condition.name) {
                medications.push(MedicationRecord {
                    name: (*name).to_owned(),
                    prescribed_for: condition.name.clone(),
                    affects_balance: self.rng.gen::<f64>()
                        < prevalence::BALANCE_AFFECTING_MEDICATION,
                    started: today - Days::new(self.rng.gen_range(0..MEDICATION_HISTORY_DAYS)),
                });
            }
        }
        medications
    }

    fn draw_environment(&mut self) -> EnvironmentalFactors {
        EnvironmentalFactors {
            loose_rugs: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            poor_lighting: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            cluttered_walkways: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            outdoor_hazards: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            bathroom_safety: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            bedroom_safety: self.rng.gen_range(0..=MAX_HAZARD_COUNT),
            missing_handrails: self.rng.gen::<f64>() < prevalence::MISSING_HANDRAILS,
            stairs_present: self.rng.gen::<f64>() < prevalence::STAIRS_PRESENT,
        }
    }

    fn draw_medical_profile(
        &mut self,
        age: u32,
        chronic_conditions: Vec<ConditionRecord>,
        medications: Vec<MedicationRecord>,
        today: NaiveDate,
    ) -> MedicalProfile {
        let age_offset = f64::from(age) - f64::from(age_risk::BASELINE_REFERENCE_AGE);
        MedicalProfile {
            previous_falls: self.rng.gen_range(0..=MAX_PREVIOUS_FALLS),
            chronic_conditions,
            medications,
            vision_impairment: self.rng.gen::<f64>() < prevalence::VISION_IMPAIRMENT,
            hearing_impairment: self.rng.gen::<f64>() < prevalence::HEARING_IMPAIRMENT,
            cognitive_score: age_offset
                .mul_add(-cognition::COGNITIVE_DECLINE_PER_YEAR, cognition::COGNITIVE_SCORE_MAX)
                .max(cognition::COGNITIVE_FLOOR),
            last_assessment: today - Days::new(self.rng.gen_range(0..ASSESSMENT_HISTORY_DAYS)),
        }
    }

    /// Back-fill the initial 14-day history, ending the day before `today`
    fn backfill_history(
        &mut self,
        baseline: &ActivityBaseline,
        medications: &[MedicationRecord],
        gait: &GaitMetrics,
        today: NaiveDate,
    ) -> Vec<DailyActivity> {
        let medication_names: Vec<String> = medications.iter().map(|m| m.name.clone()).collect();
        let balance_medication = medications.iter().any(|m| m.affects_balance);

        let mut history = Vec::with_capacity(HISTORY_BACKFILL_DAYS as usize);
        for days_back in (1..=HISTORY_BACKFILL_DAYS).rev() {
            let time_of_day = TimeOfDay::from_hour(self.observation_hour());
            let variation = self.daily_variation(balance_medication, time_of_day);
            let (stair_use, rapid_movements, inactivity_periods) = self.incidental_counts();

            history.push(DailyActivity {
                date: today - Days::new(days_back),
                steps: scaled(baseline.steps, variation.activity),
                standing_minutes: scaled(baseline.standing_minutes, variation.activity),
                movement_frequency: scaled(baseline.movement_frequency, variation.activity),
                sleep_quality: scaled_sleep(baseline.sleep_quality, variation.sleep),
                medications: medication_names.clone(),
                stair_use,
                rapid_movements,
                inactivity_periods,
                time_of_day,
                gait: varied_gait(gait, variation.gait),
            });
        }
        history
    }

    /// One multiplier per metric group, damped by medication and circadian effects
    fn daily_variation(&mut self, balance_medication: bool, time_of_day: TimeOfDay) -> DailyVariation {
        let medication_effect = if balance_medication {
            medication_effects::BALANCE_MEDICATION_ACTIVITY_FACTOR
        } else {
            1.0
        };
        let time_effect = circadian_factor(time_of_day);

        DailyVariation {
            activity: self.rng.gen_range(DAILY_VARIATION_MIN..DAILY_VARIATION_MAX)
                * medication_effect
                * time_effect,
            sleep: self.rng.gen_range(DAILY_VARIATION_MIN..DAILY_VARIATION_MAX),
            gait: self.rng.gen_range(DAILY_VARIATION_MIN..DAILY_VARIATION_MAX)
                * medication_effect
                * time_effect,
        }
    }
}

/// Age- and gender-parameterized reference baseline
fn baseline_for(age: u32, gender: Gender) -> ActivityBaseline {
    let age_offset = f64::from(age) - f64::from(age_risk::BASELINE_REFERENCE_AGE);

    let (steps_base, standing_base) = match gender {
        Gender::Male => (
            activity_baselines::MALE_DAILY_STEPS,
            activity_baselines::MALE_STANDING_MINUTES,
        ),
        Gender::Female | Gender::Other => (
            activity_baselines::FEMALE_DAILY_STEPS,
            activity_baselines::FEMALE_STANDING_MINUTES,
        ),
    };

    ActivityBaseline {
        steps: to_count(
            age_offset.mul_add(-activity_baselines::STEPS_DECLINE_PER_YEAR, steps_base),
        ),
        standing_minutes: to_count(
            age_offset.mul_add(-activity_baselines::STANDING_DECLINE_PER_YEAR, standing_base),
        ),
        movement_frequency: to_count(age_offset.mul_add(
            -activity_baselines::MOVEMENT_DECLINE_PER_YEAR,
            activity_baselines::DAILY_MOVEMENT_EPISODES,
        )),
        sleep_quality: to_sleep_score(age_offset.mul_add(
            -activity_baselines::SLEEP_DECLINE_PER_YEAR,
            activity_baselines::SLEEP_QUALITY_SCORE,
        )),
        gait_speed: age_offset
            .mul_add(
                -gait_reference::SPEED_DECLINE_PER_YEAR_MS,
                gait_reference::BASE_SPEED_MS,
            )
            .max(gait_reference::SPEED_FLOOR_MS),
        balance_score: age_offset
            .mul_add(
                -gait_reference::BALANCE_DECLINE_PER_YEAR,
                gait_reference::BALANCE_SCORE_MAX,
            )
            .max(gait_reference::BALANCE_FLOOR),
    }
}

/// Gait snapshot for a new patient; gait-impairing conditions lower the speed base
fn gait_for(age: u32, conditions: &[ConditionRecord]) -> GaitMetrics {
    let impaired = conditions.iter().any(|c| catalog::impairs_gait(&c.name));
    let base_speed = if impaired {
        gait_reference::IMPAIRED_BASE_SPEED_MS
    } else {
        gait_reference::UNIMPAIRED_BASE_SPEED_MS
    };
    let age_offset = f64::from(age) - f64::from(age_risk::BASELINE_REFERENCE_AGE);

    GaitMetrics {
        speed: age_offset
            .mul_add(-gait_reference::SPEED_DECLINE_PER_YEAR_MS, base_speed)
            .max(gait_reference::MINIMUM_SPEED_MS),
        stride_length: age_offset
            .mul_add(
                -gait_reference::STRIDE_DECLINE_PER_YEAR_M,
                gait_reference::STRIDE_LENGTH_M,
            )
            .max(gait_reference::STRIDE_FLOOR_M),
        step_symmetry: age_offset
            .mul_add(
                -gait_reference::SYMMETRY_DECLINE_PER_YEAR,
                gait_reference::STEP_SYMMETRY,
            )
            .max(gait_reference::SYMMETRY_FLOOR),
        balance_score: age_offset
            .mul_add(
                -gait_reference::BALANCE_DECLINE_PER_YEAR,
                gait_reference::BALANCE_SCORE_MAX,
            )
            .max(gait_reference::BALANCE_FLOOR),
        turn_speed: age_offset
            .mul_add(
                -gait_reference::TURN_DECLINE_PER_YEAR,
                gait_reference::TURN_SPEED_DEG_S,
            )
            .max(gait_reference::TURN_SPEED_FLOOR_DEG_S),
        stride_length_variability: age_offset
            .mul_add(
                gait_reference::VARIABILITY_INCREASE_PER_YEAR,
                gait_reference::STRIDE_VARIABILITY,
            )
            .min(gait_reference::VARIABILITY_CEILING),
    }
}

/// Intake risk score from age, condition count, falls, and home hazards
fn initial_risk_level(
    age: u32,
    profile: &MedicalProfile,
    environment: &EnvironmentalFactors,
) -> RiskLevel {
    let age_points = if age >= age_risk::ADVANCED_AGE_YEARS {
        3
    } else if age >= age_risk::ELEVATED_AGE_YEARS {
        2
    } else if age >= age_risk::BASELINE_REFERENCE_AGE {
        1
    } else {
        0
    };

    let condition_count = profile.chronic_conditions.len();
    let condition_points = if condition_count >= 3 {
        3
    } else if condition_count >= 2 {
        2
    } else if condition_count >= 1 {
        1
    } else {
        0
    };

    let hazard_score = environment.hazard_score();
    let hazard_points = if hazard_score >= intake_scoring::HAZARD_SCORE_SEVERE {
        3
    } else if hazard_score >= intake_scoring::HAZARD_SCORE_ELEVATED {
        2
    } else if hazard_score >= 1 {
        1
    } else {
        0
    };

    let total = age_points
        + condition_points
        + profile.previous_falls * intake_scoring::PREVIOUS_FALL_WEIGHT
        + hazard_points;

    if total >= intake_scoring::HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if total >= intake_scoring::MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Scale a baseline count by a variation multiplier, rounding to whole units
pub(crate) fn scaled(base: u32, factor: f64) -> u32 {
    (f64::from(base) * factor).round() as u32
}

/// Scale the baseline sleep score and clamp to the 1-10 scale
fn scaled_sleep(base: u8, factor: f64) -> u8 {
    (f64::from(base) * factor)
        .round()
        .clamp(
            activity_baselines::SLEEP_SCORE_MIN,
            activity_baselines::SLEEP_SCORE_MAX,
        ) as u8
}

/// Apply a gait multiplier; variability moves inversely to the other fields
fn varied_gait(gait: &GaitMetrics, factor: f64) -> GaitMetrics {
    GaitMetrics {
        speed: gait.speed * factor,
        stride_length: gait.stride_length * factor,
        step_symmetry: gait.step_symmetry * factor,
        balance_score: gait.balance_score * factor,
        turn_speed: gait.turn_speed * factor,
        stride_length_variability: gait.stride_length_variability * (2.0 - factor),
    }
}

/// Round to a whole count, flooring at zero for extreme ages
fn to_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Round to the 1-10 sleep score scale
fn to_sleep_score(value: f64) -> u8 {
    value
        .round()
        .clamp(
            activity_baselines::SLEEP_SCORE_MIN,
            activity_baselines::SLEEP_SCORE_MAX,
        ) as u8
}

/// Activity scaling for an observation bucket
const fn circadian_factor(time_of_day: TimeOfDay) -> f64 {
    match time_of_day {
        TimeOfDay::Morning => circadian::MORNING_ACTIVITY_FACTOR,
        TimeOfDay::Afternoon => circadian::AFTERNOON_ACTIVITY_FACTOR,
        TimeOfDay::Evening => circadian::EVENING_ACTIVITY_FACTOR,
        TimeOfDay::Night => circadian::NIGHT_ACTIVITY_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn condition(name: &str) -> ConditionRecord {
        ConditionRecord {
            name: name.to_owned(),
            severity: ConditionSeverity::Moderate,
            years_since_onset: 4,
        }
    }

    fn profile(previous_falls: u32, conditions: Vec<ConditionRecord>) -> MedicalProfile {
        MedicalProfile {
            previous_falls,
            chronic_conditions: conditions,
            medications: Vec::new(),
            vision_impairment: false,
            hearing_impairment: false,
            cognitive_score: 9.0,
            last_assessment: today(),
        }
    }

    fn tidy_home() -> EnvironmentalFactors {
        EnvironmentalFactors {
            loose_rugs: 0,
            poor_lighting: 0,
            cluttered_walkways: 0,
            outdoor_hazards: 0,
            bathroom_safety: 3,
            bedroom_safety: 3,
            missing_handrails: false,
            stairs_present: false,
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_same_patient() {
        let mut a = PatientGenerator::new(42);
        let mut b = PatientGenerator::new(42);
        assert_eq!(
            a.generate_patient("P010", "Alice Example", 80, Gender::Female, today()),
            b.generate_patient("P010", "Alice Example", 80, Gender::Female, today())
        );
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PatientGenerator::new(1);
        let mut b = PatientGenerator::new(2);
        let first = a.generate_patient("P010", "Alice Example", 80, Gender::Female, today());
        let second = b.generate_patient("P010", "Alice Example", 80, Gender::Female, today());
        assert_ne!(first.activity_history(), second.activity_history());
    }

    #[test]
    fn test_baseline_formulas_at_the_reference_age() {
        let mut generator = PatientGenerator::new(7);
        let patient = generator.generate_patient("P011", "Ref Male", 65, Gender::Male, today());
        let baseline = patient.baseline();
        assert_eq!(baseline.steps, 6000);
        assert_eq!(baseline.standing_minutes, 180);
        assert_eq!(baseline.movement_frequency, 40);
        assert_eq!(baseline.sleep_quality, 8);
        assert!((baseline.gait_speed - 1.2).abs() < f64::EPSILON);
        assert!((baseline.balance_score - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_baseline_declines_with_age_for_women() {
        let mut generator = PatientGenerator::new(7);
        let patient =
            generator.generate_patient("P012", "Aged Female", 80, Gender::Female, today());
        let baseline = patient.baseline();
        assert_eq!(baseline.steps, 4000);
        assert_eq!(baseline.standing_minutes, 130);
        assert_eq!(baseline.movement_frequency, 33);
    }

    #[test]
    fn test_under_sixty_draws_no_conditions() {
        let mut generator = PatientGenerator::new(3);
        let patient = generator.generate_patient("P013", "Young Control", 55, Gender::Male, today());
        assert!(patient.conditions().is_empty());
        assert!(patient.medications().is_empty());
    }

    #[test]
    fn test_extreme_age_clamps_instead_of_panicking() {
        let mut generator = PatientGenerator::new(3);
        let patient =
            generator.generate_patient("P014", "Supercentenarian", 200, Gender::Female, today());
        // Draw probability saturates at one, so every catalog entry is present
        assert_eq!(
            patient.conditions().len(),
            catalog::CONDITION_CATALOG.len()
        );
        let baseline = patient.baseline();
        assert_eq!(baseline.steps, 0);
        assert_eq!(baseline.sleep_quality, 1);
        assert!(patient.gait_metrics().speed >= gait_reference::MINIMUM_SPEED_MS);
    }

    #[test]
    fn test_history_backfills_fourteen_days_ending_yesterday() {
        let mut generator = PatientGenerator::new(11);
        let patient = generator.generate_patient("P015", "History Check", 75, Gender::Male, today());
        let history = patient.activity_history();
        assert_eq!(history.len(), 14);
        assert_eq!(history[0].date, today() - Days::new(14));
        assert_eq!(history[13].date, today() - Days::new(1));
    }

    #[test]
    fn test_simulated_day_stays_inside_the_variation_band() {
        let mut generator = PatientGenerator::new(5);
        let patient = generator.generate_patient("P016", "Band Check", 70, Gender::Male, today());
        let recorded_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let day = generator.simulate_day(&patient, recorded_at);

        assert_eq!(day.date, recorded_at.date_naive());
        assert_eq!(day.time_of_day, TimeOfDay::Morning);

        let base = f64::from(patient.baseline().steps);
        let floor =
            base * DAILY_VARIATION_MIN * medication_effects::BALANCE_MEDICATION_ACTIVITY_FACTOR;
        let ceiling = base * DAILY_VARIATION_MAX;
        assert!(f64::from(day.steps) >= floor - 1.0);
        assert!(f64::from(day.steps) <= ceiling + 1.0);
    }

    #[test]
    fn test_gait_variability_moves_against_gait_speed() {
        let mut generator = PatientGenerator::new(9);
        let patient = generator.generate_patient("P017", "Gait Check", 72, Gender::Male, today());
        let recorded_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let day = generator.simulate_day(&patient, recorded_at);

        let speed_ratio = day.gait.speed / patient.gait_metrics().speed;
        let variability_ratio =
            day.gait.stride_length_variability / patient.gait_metrics().stride_length_variability;
        assert!((speed_ratio + variability_ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_intake_scoring_bands() {
        let heavy = profile(
            2,
            vec![
                condition("Hypertension"),
                condition("Arthritis"),
                condition("Dementia"),
            ],
        );
        assert_eq!(
            initial_risk_level(90, &heavy, &tidy_home()),
            RiskLevel::High
        );

        let clear = profile(0, Vec::new());
        assert_eq!(
            initial_risk_level(60, &clear, &tidy_home()),
            RiskLevel::Low
        );

        // Two age points, one condition point, one hazard point
        let single = profile(0, vec![condition("Hypertension")]);
        let one_rug = EnvironmentalFactors {
            loose_rugs: 1,
            ..tidy_home()
        };
        assert_eq!(
            initial_risk_level(76, &single, &one_rug),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_gait_impairing_condition_lowers_speed() {
        let impaired = gait_for(70, &[condition("Parkinson's Disease")]);
        let unimpaired = gait_for(70, &[condition("Hypertension")]);
        assert!(impaired.speed < unimpaired.speed);
        assert!((unimpaired.speed - 0.95).abs() < f64::EPSILON);
    }
}
