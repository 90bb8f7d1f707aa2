// ABOUTME: Ordered alert rule table with explicit risk escalation semantics
// ABOUTME: Detects mobility decline, sharp drops, and deconditioning from recent history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use crate::config::TrendThresholds;
use crate::trends::WindowMeans;
use vigil_core::models::{
    ActivityBaseline, ActivityTrends, AlertType, DailyActivity, RiskLevel, TrendDirection,
};

/// How a firing rule moves the working risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskEscalation {
    /// Raise low to medium; medium and high stay where they are
    FloorMedium,
    /// Force the level to high outright
    ForceHigh,
    /// Raise the level by one step
    StepUp,
}

impl RiskEscalation {
    /// Apply this escalation to a working risk level
    #[must_use]
    pub const fn apply(self, level: RiskLevel) -> RiskLevel {
        match self {
            Self::FloorMedium => match level {
                RiskLevel::Low => RiskLevel::Medium,
                other => other,
            },
            Self::ForceHigh => RiskLevel::High,
            Self::StepUp => level.step_up(),
        }
    }
}

/// One entry in the ordered alert rule table
#[derive(Debug, Clone, Copy)]
pub struct AlertRule {
    /// Alert classification this rule produces
    pub alert_type: AlertType,
    /// Risk level adjustment applied when the rule fires
    pub escalation: RiskEscalation,
    /// Message attached to the resulting alert
    pub message: &'static str,
    /// Care recommendations attached to the resulting alert
    pub recommendations: &'static [&'static str],
}

/// Alert rules in evaluation order.
///
/// When several rules fire in one pass, every escalation applies in table
/// order, while the last firing rule supplies the alert type, message, and
/// recommendations.
pub const ALERT_RULES: [AlertRule; 3] = [
    AlertRule {
        alert_type: AlertType::MobilityDecline,
        escalation: RiskEscalation::FloorMedium,
        message: "Gradual decline in mobility detected. Increased fall risk.",
        recommendations: &[
            "Schedule a mobility assessment",
            "Review home environment for hazards",
            "Consider gentle strength and balance exercises",
            "Ensure regular movement throughout the day",
        ],
    },
    AlertRule {
        alert_type: AlertType::MedicationEffect,
        escalation: RiskEscalation::ForceHigh,
        message: "Sharp decline in mobility detected. Possible medication side effect.",
        recommendations: &[
            "Review recent medication changes",
            "Schedule medication review with doctor",
            "Monitor for dizziness or balance issues",
            "Ensure adequate hydration",
        ],
    },
    AlertRule {
        alert_type: AlertType::Deconditioning,
        escalation: RiskEscalation::StepUp,
        message: "Sustained low activity detected. Risk of deconditioning.",
        recommendations: &[
            "Implement a gradual activity increase plan",
            "Set small, achievable movement goals",
            "Encourage light activities of daily living",
            "Consider motivation factors and address barriers",
        ],
    },
];

/// Detection signals the alert rules consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSignals {
    /// Steps declining together with standing time or movement frequency
    pub mobility_decline: bool,
    /// Yesterday-to-today drop in steps or standing time past the ratio
    pub sharp_decline: bool,
    /// Whole recent window stuck well below the patient's baseline
    pub sustained_low_activity: bool,
}

impl AlertSignals {
    /// Derive the three alert signals from history and trends.
    ///
    /// `history` is the full chronological record, `recent` the trailing
    /// trend window, and `recent_means` its precomputed averages. A zero
    /// baseline can never be undercut, so empty baselines stay quiet.
    #[must_use]
    pub fn detect(
        history: &[DailyActivity],
        recent: &[DailyActivity],
        recent_means: &WindowMeans,
        baseline: &ActivityBaseline,
        trends: &ActivityTrends,
        thresholds: &TrendThresholds,
    ) -> Self {
        let mobility_decline = trends.steps == TrendDirection::Declining
            && (trends.standing == TrendDirection::Declining
                || trends.movement == TrendDirection::Declining);

        let sharp_decline = match history {
            [.., previous, last] => {
                f64::from(last.steps) < f64::from(previous.steps) * thresholds.sharp_decline_ratio
                    || f64::from(last.standing_minutes)
                        < f64::from(previous.standing_minutes) * thresholds.sharp_decline_ratio
            }
            _ => false,
        };

        let baseline_steps = f64::from(baseline.steps);
        let baseline_standing = f64::from(baseline.standing_minutes);
        let sustained_low_activity = recent_means.steps
            < baseline_steps * thresholds.sustained_low_ratio
            && recent_means.standing_minutes < baseline_standing * thresholds.sustained_low_ratio
            && recent.iter().all(|day| {
                f64::from(day.steps) < baseline_steps * thresholds.sustained_low_daily_ratio
            });

        Self {
            mobility_decline,
            sharp_decline,
            sustained_low_activity,
        }
    }

    /// Whether the signal backing the given rule is raised
    #[must_use]
    pub const fn triggers(&self, alert_type: AlertType) -> bool {
        match alert_type {
            AlertType::MobilityDecline => self.mobility_decline,
            AlertType::MedicationEffect => self.sharp_decline,
            AlertType::Deconditioning => self.sustained_low_activity,
        }
    }
}

/// Outcome of one pass over the alert rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvaluation {
    /// Whether any rule fired
    pub alert: bool,
    /// Classification from the last firing rule
    pub alert_type: Option<AlertType>,
    /// Message from the last firing rule
    pub message: Option<String>,
    /// Recommendations from the last firing rule
    pub recommendations: Vec<String>,
    /// Working risk level after every firing rule's escalation
    pub risk_level: RiskLevel,
}

/// Run the rule table against detected signals.
///
/// Starts the working risk level at the patient's stored classification
/// and folds each firing rule's escalation over it in table order.
#[must_use]
pub fn evaluate(signals: &AlertSignals, base_level: RiskLevel) -> AlertEvaluation {
    let mut risk_level = base_level;
    let mut fired: Option<&AlertRule> = None;

    for rule in &ALERT_RULES {
        if signals.triggers(rule.alert_type) {
            risk_level = rule.escalation.apply(risk_level);
            fired = Some(rule);
        }
    }

    fired.map_or_else(
        || AlertEvaluation {
            alert: false,
            alert_type: None,
            message: None,
            recommendations: Vec::new(),
            risk_level,
        },
        |rule| AlertEvaluation {
            alert: true,
            alert_type: Some(rule.alert_type),
            message: Some(rule.message.to_owned()),
            recommendations: rule
                .recommendations
                .iter()
                .map(|&rec| rec.to_owned())
                .collect(),
            risk_level,
        },
    )
}
