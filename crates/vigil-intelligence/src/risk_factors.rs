// ABOUTME: Per-category risk factor findings assembled for care staff review
// ABOUTME: Summarizes activity, gait, medical, environmental, and age contributions to risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use crate::clinical_constants::age_risk::{ADVANCED_AGE_YEARS, ELEVATED_AGE_YEARS};
use vigil_core::models::{
    ActivityTrends, EnvironmentalRisk, Patient, RiskFactor, RiskFactorCategory, RiskLevel,
    TrendDirection,
};

/// Collect the per-category findings behind an analysis result.
///
/// Each category contributes at most one finding. Findings describe the
/// situation for care staff and never feed back into alert decisions.
#[must_use]
pub fn collect_risk_factors(
    patient: &Patient,
    trends: &ActivityTrends,
    environmental: &[EnvironmentalRisk],
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    // Activity
    if trends.steps == TrendDirection::Declining || trends.standing == TrendDirection::Declining {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Activity,
            level: RiskLevel::High,
            description: "Declining activity levels detected".to_owned(),
        });
    }

    // Gait
    if trends.gait == TrendDirection::Declining {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Gait,
            level: RiskLevel::High,
            description: "Changes in walking pattern detected".to_owned(),
        });
    }

    // Medical history
    let previous_falls = patient.medical_profile().previous_falls;
    if previous_falls > 0 {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Medical,
            level: RiskLevel::High,
            description: format!("History of {previous_falls} previous falls"),
        });
    }

    // Home environment
    if environmental
        .iter()
        .any(|risk| risk.risk_level == RiskLevel::High)
    {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Environmental,
            level: RiskLevel::High,
            description: "Multiple home hazards identified".to_owned(),
        });
    }

    // Age
    if patient.age() >= ADVANCED_AGE_YEARS {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Age,
            level: RiskLevel::High,
            description: "Advanced age increases fall risk".to_owned(),
        });
    } else if patient.age() >= ELEVATED_AGE_YEARS {
        factors.push(RiskFactor {
            category: RiskFactorCategory::Age,
            level: RiskLevel::Medium,
            description: "Age-related risk factors present".to_owned(),
        });
    }

    factors
}
