// ABOUTME: Chronic condition catalog and the condition-derived medication table
// ABOUTME: Fixed reference data consulted by the patient generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

/// Chronic conditions a synthesized patient can carry.
///
/// Each entry is drawn independently with an age-derived probability, so
/// older synthesized patients accumulate more of them.
pub const CONDITION_CATALOG: [&str; 11] = [
    "Hypertension",
    "Arthritis",
    "Diabetes Type 2",
    "Mild Cognitive Impairment",
    "COPD",
    "Osteoporosis",
    "Chronic Pain",
    "Heart Disease",
    "Parkinson's Disease",
    "Depression",
    "Dementia",
];

/// Conditions that lower the gait-speed base from 1.0 to 0.6 m/s.
pub const GAIT_IMPAIRING_CONDITIONS: [&str; 3] = ["Parkinson's Disease", "Arthritis", "Dementia"];

/// Medications prescribed for a condition.
///
/// Conditions without an entry (currently Mild Cognitive Impairment)
/// contribute no medications.
#[must_use]
pub fn medications_for(condition: &str) -> &'static [&'static str] {
    match condition {
        "Hypertension" => &["Amlodipine", "Lisinopril", "Metoprolol"],
        "Diabetes Type 2" => &["Metformin", "Glipizide"],
        "Arthritis" => &["Ibuprofen", "Celebrex"],
        "Chronic Pain" => &["Gabapentin", "Tramadol"],
        "Depression" => &["Sertraline", "Escitalopram"],
        "Parkinson's Disease" => &["Levodopa", "Carbidopa"],
        "Osteoporosis" => &["Alendronate", "Calcium + Vitamin D"],
        "Heart Disease" => &["Metoprolol", "Aspirin"],
        "COPD" => &["Albuterol", "Tiotropium"],
        "Dementia" => &["Donepezil", "Memantine"],
        _ => &[],
    }
}

/// Whether a condition belongs to the gait-impairing set.
#[must_use]
pub fn impairs_gait(condition: &str) -> bool {
    GAIT_IMPAIRING_CONDITIONS.contains(&condition)
}
