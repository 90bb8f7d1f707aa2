// ABOUTME: Derived analysis result types produced by the risk analysis engine
// ABOUTME: Risk levels, trend classifications, risk factors, and time-based findings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// Overall fall-risk classification.
///
/// Ordered so that comparisons express escalation: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No elevated risk signals
    Low,
    /// Elevated risk, increased monitoring advised
    Medium,
    /// Immediate attention warranted
    High,
}

impl RiskLevel {
    /// Escalates one step; `High` stays `High`.
    #[must_use]
    pub const fn step_up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }
}

/// Direction of a metric trend over the comparison windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent average fell more than the threshold below the prior window
    Declining,
    /// Within the threshold either way, or no usable prior window
    #[default]
    Stable,
    /// Recent average rose more than the threshold above the prior window
    Improving,
}

/// Alert classification for a triggered detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertType {
    /// Gradual multi-metric mobility decline
    MobilityDecline,
    /// Sharp day-over-day drop suggesting a medication side effect
    MedicationEffect,
    /// Sustained low activity relative to baseline
    Deconditioning,
}

/// Per-dimension trend classification for one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTrends {
    /// Daily step counts
    pub steps: TrendDirection,
    /// Daily standing minutes
    pub standing: TrendDirection,
    /// Daily movement frequency
    pub movement: TrendDirection,
    /// Sleep quality
    pub sleep: TrendDirection,
    /// Combined gait trend (speed and balance)
    pub gait: TrendDirection,
}

impl ActivityTrends {
    /// All dimensions `Stable`, the neutral result for short histories.
    #[must_use]
    pub fn all_stable() -> Self {
        Self::default()
    }
}

/// Category tag for a displayed risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFactorCategory {
    /// Activity-level trends
    Activity,
    /// Gait pattern changes
    Gait,
    /// Medical history signals
    Medical,
    /// Home environment hazards
    Environmental,
    /// Age-related risk
    Age,
}

/// One contributing risk finding, for display context.
///
/// Risk factors inform the displayed risk picture but never gate the alert
/// decision on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Which aspect of the patient's situation this finding concerns
    pub category: RiskFactorCategory,
    /// Severity of this individual finding
    pub level: RiskLevel,
    /// Human-readable explanation
    pub description: String,
}

/// One environmental hazard finding with remediation guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalRisk {
    /// Location in the home (e.g., "Bathroom", "Stairs")
    pub location: String,
    /// Severity of the hazard
    pub risk_level: RiskLevel,
    /// Fixed remediation recommendations for this location
    pub recommendations: Vec<String>,
}

/// Time-of-day risk findings over the recent window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBasedRisk {
    /// Buckets that accumulated enough risky days to qualify
    pub high_risk_periods: Vec<TimeOfDay>,
    /// Guidance keyed to the qualifying buckets
    pub recommendations: Vec<String>,
}

/// The derived result of one analysis pass over a patient's history.
///
/// Computed fresh on every call and never persisted by the engine; always
/// fully populated. Short histories produce the documented neutral values,
/// never missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    /// Whether a detection rule fired
    pub alert: bool,
    /// Classification of the winning rule, when one fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AlertType>,
    /// Message of the winning rule, when one fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,
    /// Recommendations of the winning rule (empty without an alert)
    pub recommendations: Vec<String>,
    /// Output risk level after rule escalations
    pub risk_level: RiskLevel,
    /// Contributing findings for display
    pub risk_factors: Vec<RiskFactor>,
    /// Per-dimension trend classifications
    pub trends: ActivityTrends,
    /// Environmental hazard findings
    pub environmental_risks: Vec<EnvironmentalRisk>,
    /// Time-of-day risk findings
    pub time_based_risk: TimeBasedRisk,
}

impl ActivityAnalysis {
    /// The neutral no-alert result returned when history is too short to
    /// analyze: all trends stable, no findings, risk level echoed unchanged.
    #[must_use]
    pub fn neutral(risk_level: RiskLevel) -> Self {
        Self {
            alert: false,
            alert_type: None,
            alert_message: None,
            recommendations: Vec::new(),
            risk_level,
            risk_factors: Vec::new(),
            trends: ActivityTrends::all_stable(),
            environmental_risks: Vec::new(),
            time_based_risk: TimeBasedRisk::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_order_for_escalation() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn step_up_saturates_at_high() {
        assert_eq!(RiskLevel::Low.step_up(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Medium.step_up(), RiskLevel::High);
        assert_eq!(RiskLevel::High.step_up(), RiskLevel::High);
    }

    #[test]
    fn alert_types_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AlertType::MobilityDecline).unwrap(),
            "\"mobility-decline\""
        );
        assert_eq!(
            serde_json::to_string(&AlertType::MedicationEffect).unwrap(),
            "\"medication-effect\""
        );
        assert_eq!(
            serde_json::to_string(&AlertType::Deconditioning).unwrap(),
            "\"deconditioning\""
        );
    }

    #[test]
    fn neutral_result_is_fully_populated() {
        let analysis = ActivityAnalysis::neutral(RiskLevel::Medium);
        assert!(!analysis.alert);
        assert_eq!(analysis.alert_type, None);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.trends, ActivityTrends::all_stable());
        assert!(analysis.risk_factors.is_empty());
        assert!(analysis.environmental_risks.is_empty());
        assert!(analysis.time_based_risk.high_risk_periods.is_empty());
    }

    #[test]
    fn absent_alert_fields_are_omitted_from_json() {
        let analysis = ActivityAnalysis::neutral(RiskLevel::Low);
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(!json.contains("alert_type"));
        assert!(!json.contains("alert_message"));
    }
}
