// ABOUTME: Patient records with fixed baselines and append-only activity history
// ABOUTME: Private fields with accessor methods and PatientBuilder for construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use serde::{Deserialize, Serialize};

use super::{
    DailyActivity, EnvironmentalFactors, GaitMetrics, MedicalProfile, RiskLevel,
};

/// Patient gender, used to parameterize baseline formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male baseline parameterization
    Male,
    /// Female baseline parameterization
    Female,
    /// Uses the female baseline parameterization
    Other,
}

/// The six reference metrics fixed at patient creation.
///
/// Absolute comparisons (environmental and medical risk factors, the
/// deconditioning rule) measure against these values; trend comparisons use
/// rolling window averages instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBaseline {
    /// Reference daily steps
    pub steps: u32,
    /// Reference daily standing minutes
    pub standing_minutes: u32,
    /// Reference daily position changes
    pub movement_frequency: u32,
    /// Reference sleep quality (1–10)
    pub sleep_quality: u8,
    /// Reference gait speed in meters per second
    pub gait_speed: f64,
    /// Reference balance score (0–10)
    pub balance_score: f64,
}

/// One monitored individual.
///
/// Fields are private to protect two invariants: the baseline is fixed at
/// creation, and the activity history is append-only. History grows through
/// the consuming [`Patient::with_day`] / [`Patient::with_days`] methods,
/// which return a new snapshot for the owning collaborator to store in place
/// of the old one.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use vigil_core::models::{
///     ActivityBaseline, EnvironmentalFactors, GaitMetrics, Gender, MedicalProfile,
///     PatientBuilder, RiskLevel,
/// };
///
/// let patient = PatientBuilder::new("P001", "Thomas Williams", 78, Gender::Male)
///     .risk_level(RiskLevel::Medium)
///     .baseline(ActivityBaseline {
///         steps: 4700,
///         standing_minutes: 154,
///         movement_frequency: 34,
///         sleep_quality: 7,
///         gait_speed: 1.07,
///         balance_score: 8.7,
///     })
///     .environmental_factors(EnvironmentalFactors {
///         loose_rugs: 1,
///         poor_lighting: 0,
///         cluttered_walkways: 0,
///         outdoor_hazards: 2,
///         bathroom_safety: 2,
///         bedroom_safety: 3,
///         missing_handrails: false,
///         stairs_present: true,
///     })
///     .medical_profile(MedicalProfile {
///         previous_falls: 1,
///         chronic_conditions: Vec::new(),
///         medications: Vec::new(),
///         vision_impairment: false,
///         hearing_impairment: false,
///         cognitive_score: 8.1,
///         last_assessment: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     })
///     .gait_metrics(GaitMetrics {
///         speed: 0.87,
///         stride_length: 0.54,
///         step_symmetry: 0.87,
///         balance_score: 8.7,
///         turn_speed: 83.5,
///         stride_length_variability: 0.17,
///     })
///     .build();
///
/// assert_eq!(patient.id(), "P001");
/// assert_eq!(patient.age(), 78);
/// assert!(patient.activity_history().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Stable external identifier (e.g., "P001")
    id: String,
    /// Display name
    name: String,
    /// Age in years
    age: u32,
    /// Gender used for baseline parameterization
    gender: Gender,
    /// Names of diagnosed conditions (denormalized from the medical profile)
    conditions: Vec<String>,
    /// Names of current medications (denormalized from the medical profile)
    medications: Vec<String>,
    /// Risk classification computed at creation
    risk_level: RiskLevel,
    /// Reference metrics fixed at creation
    baseline: ActivityBaseline,
    /// Chronological, append-only daily records
    activity_history: Vec<DailyActivity>,
    /// Static home-hazard profile
    environmental_factors: EnvironmentalFactors,
    /// Medical background
    medical_profile: MedicalProfile,
    /// Current gait reference snapshot
    gait_metrics: GaitMetrics,
}

/// Accessor methods for Patient fields
impl Patient {
    /// Returns the stable external identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the gender used for baseline parameterization
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the names of diagnosed conditions
    #[must_use]
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Returns the names of current medications
    #[must_use]
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// Returns the risk classification computed at creation
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Returns the reference metrics fixed at creation
    #[must_use]
    pub const fn baseline(&self) -> &ActivityBaseline {
        &self.baseline
    }

    /// Returns the chronological daily activity records
    #[must_use]
    pub fn activity_history(&self) -> &[DailyActivity] {
        &self.activity_history
    }

    /// Returns the static home-hazard profile
    #[must_use]
    pub const fn environmental_factors(&self) -> &EnvironmentalFactors {
        &self.environmental_factors
    }

    /// Returns the medical background
    #[must_use]
    pub const fn medical_profile(&self) -> &MedicalProfile {
        &self.medical_profile
    }

    /// Returns the current gait reference snapshot
    #[must_use]
    pub const fn gait_metrics(&self) -> &GaitMetrics {
        &self.gait_metrics
    }

    /// Consumes the snapshot and returns a new one with `day` appended.
    #[must_use]
    pub fn with_day(self, day: DailyActivity) -> Self {
        self.with_days(std::iter::once(day))
    }

    /// Consumes the snapshot and returns a new one with `days` appended in
    /// order. The owning collaborator replaces its stored snapshot with the
    /// returned value.
    #[must_use]
    pub fn with_days<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = DailyActivity>,
    {
        self.activity_history.extend(days);
        self
    }
}

/// Builder for [`Patient`] records.
///
/// Identity fields are required up front; everything else defaults to an
/// empty or neutral value and is normally filled in by the synthesizer.
#[derive(Debug, Clone)]
pub struct PatientBuilder {
    id: String,
    name: String,
    age: u32,
    gender: Gender,
    conditions: Vec<String>,
    medications: Vec<String>,
    risk_level: RiskLevel,
    baseline: Option<ActivityBaseline>,
    activity_history: Vec<DailyActivity>,
    environmental_factors: Option<EnvironmentalFactors>,
    medical_profile: Option<MedicalProfile>,
    gait_metrics: Option<GaitMetrics>,
}

impl PatientBuilder {
    /// Starts a builder with the required identity fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender,
            conditions: Vec::new(),
            medications: Vec::new(),
            risk_level: RiskLevel::Low,
            baseline: None,
            activity_history: Vec::new(),
            environmental_factors: None,
            medical_profile: None,
            gait_metrics: None,
        }
    }

    /// Sets the denormalized condition name list
    #[must_use]
    pub fn conditions(mut self, conditions: Vec<String>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the denormalized medication name list
    #[must_use]
    pub fn medications(mut self, medications: Vec<String>) -> Self {
        self.medications = medications;
        self
    }

    /// Sets the creation-time risk classification
    #[must_use]
    pub const fn risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    /// Sets the fixed reference baseline
    #[must_use]
    pub fn baseline(mut self, baseline: ActivityBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Sets the initial activity history (chronological)
    #[must_use]
    pub fn activity_history(mut self, history: Vec<DailyActivity>) -> Self {
        self.activity_history = history;
        self
    }

    /// Sets the home-hazard profile
    #[must_use]
    pub fn environmental_factors(mut self, factors: EnvironmentalFactors) -> Self {
        self.environmental_factors = Some(factors);
        self
    }

    /// Sets the medical background
    #[must_use]
    pub fn medical_profile(mut self, profile: MedicalProfile) -> Self {
        self.medical_profile = Some(profile);
        self
    }

    /// Sets the gait reference snapshot
    #[must_use]
    pub fn gait_metrics(mut self, gait: GaitMetrics) -> Self {
        self.gait_metrics = Some(gait);
        self
    }

    /// Builds the patient record, substituting neutral defaults for any
    /// profile sections left unset.
    #[must_use]
    pub fn build(self) -> Patient {
        Patient {
            id: self.id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            conditions: self.conditions,
            medications: self.medications,
            risk_level: self.risk_level,
            baseline: self.baseline.unwrap_or(ActivityBaseline {
                steps: 0,
                standing_minutes: 0,
                movement_frequency: 0,
                sleep_quality: 5,
                gait_speed: 0.0,
                balance_score: 0.0,
            }),
            activity_history: self.activity_history,
            environmental_factors: self.environmental_factors.unwrap_or(EnvironmentalFactors {
                loose_rugs: 0,
                poor_lighting: 0,
                cluttered_walkways: 0,
                outdoor_hazards: 0,
                bathroom_safety: 3,
                bedroom_safety: 3,
                missing_handrails: false,
                stairs_present: false,
            }),
            medical_profile: self.medical_profile.unwrap_or(MedicalProfile {
                previous_falls: 0,
                chronic_conditions: Vec::new(),
                medications: Vec::new(),
                vision_impairment: false,
                hearing_impairment: false,
                cognitive_score: 10.0,
                last_assessment: chrono::NaiveDate::MIN,
            }),
            gait_metrics: self.gait_metrics.unwrap_or(GaitMetrics {
                speed: 0.0,
                stride_length: 0.0,
                step_symmetry: 0.0,
                balance_score: 0.0,
                turn_speed: 0.0,
                stride_length_variability: 0.0,
            }),
        }
    }
}
