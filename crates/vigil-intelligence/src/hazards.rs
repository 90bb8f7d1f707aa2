// ABOUTME: Home environment hazard assessment producing per-location findings
// ABOUTME: Flags bathroom, bedroom, living space, and stair hazards with remediation steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use crate::config::EnvironmentThresholds;
use vigil_core::models::{EnvironmentalFactors, EnvironmentalRisk, RiskLevel};

/// Assess a patient's home environment for fall hazards.
///
/// Produces one finding per flagged location. Room safety ratings run 0-3
/// where higher is safer; a rating of zero escalates the finding to high.
#[must_use]
pub fn assess_environment(
    factors: &EnvironmentalFactors,
    thresholds: &EnvironmentThresholds,
) -> Vec<EnvironmentalRisk> {
    let mut risks = Vec::new();

    // Bathroom
    if factors.bathroom_safety < thresholds.safety_rating_floor {
        risks.push(EnvironmentalRisk {
            location: "Bathroom".to_owned(),
            risk_level: if factors.bathroom_safety == 0 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            recommendations: vec![
                "Install grab bars near toilet and shower".to_owned(),
                "Use non-slip mats".to_owned(),
                "Ensure adequate lighting".to_owned(),
            ],
        });
    }

    // Bedroom
    if factors.bedroom_safety < thresholds.safety_rating_floor {
        risks.push(EnvironmentalRisk {
            location: "Bedroom".to_owned(),
            risk_level: if factors.bedroom_safety == 0 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            },
            recommendations: vec![
                "Clear pathways to bathroom".to_owned(),
                "Install bedside lighting".to_owned(),
                "Consider bed rail or transfer pole".to_owned(),
            ],
        });
    }

    // General living space
    if factors.loose_rugs > thresholds.hazard_count_ceiling
        || factors.poor_lighting > thresholds.hazard_count_ceiling
        || factors.cluttered_walkways > thresholds.hazard_count_ceiling
    {
        risks.push(EnvironmentalRisk {
            location: "General Living Space".to_owned(),
            risk_level: RiskLevel::High,
            recommendations: vec![
                "Secure or remove loose rugs".to_owned(),
                "Improve lighting in dark areas".to_owned(),
                "Clear walkways of clutter".to_owned(),
            ],
        });
    }

    // Stairs
    if factors.stairs_present && factors.missing_handrails {
        risks.push(EnvironmentalRisk {
            location: "Stairs".to_owned(),
            risk_level: RiskLevel::High,
            recommendations: vec![
                "Install handrails on both sides".to_owned(),
                "Ensure adequate lighting".to_owned(),
                "Mark step edges clearly".to_owned(),
            ],
        });
    }

    risks
}
