// ABOUTME: Medical profile records including chronic conditions, medications, and falls history
// ABOUTME: Consulted read-only by the analysis engine and the daily-variation model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity grading for a chronic condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSeverity {
    /// Symptoms are present but well managed
    Mild,
    /// Symptoms interfere with some daily activities
    Moderate,
    /// Symptoms substantially limit daily activities
    Severe,
}

/// One diagnosed chronic condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Condition name (e.g., "Hypertension")
    pub name: String,
    /// Graded severity at the last assessment
    pub severity: ConditionSeverity,
    /// Years since onset
    pub years_since_onset: u32,
}

/// One prescribed medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Medication name (e.g., "Amlodipine")
    pub name: String,
    /// Condition this medication was prescribed for
    pub prescribed_for: String,
    /// Whether the medication is known to affect balance
    pub affects_balance: bool,
    /// Date the prescription started
    pub started: NaiveDate,
}

/// Medical background consulted by the risk analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalProfile {
    /// Number of falls recorded before monitoring began
    pub previous_falls: u32,
    /// Diagnosed chronic conditions
    pub chronic_conditions: Vec<ConditionRecord>,
    /// Current prescriptions
    pub medications: Vec<MedicationRecord>,
    /// Whether a vision impairment is on record
    pub vision_impairment: bool,
    /// Whether a hearing impairment is on record
    pub hearing_impairment: bool,
    /// Cognitive assessment score (0–10, higher is better)
    pub cognitive_score: f64,
    /// Date of the most recent clinical assessment
    pub last_assessment: NaiveDate,
}

impl MedicalProfile {
    /// Returns true when any current medication is flagged as affecting
    /// balance. Drives the medication effect in the daily-variation model.
    #[must_use]
    pub fn any_medication_affects_balance(&self) -> bool {
        self.medications.iter().any(|m| m.affects_balance)
    }
}
