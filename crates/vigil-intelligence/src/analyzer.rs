// ABOUTME: Risk analysis orchestration producing a complete ActivityAnalysis per patient
// ABOUTME: Combines trends, hazards, time patterns, risk factors, and the alert rule table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use crate::alert_rules::{self, AlertSignals};
use crate::config::AnalysisConfig;
use crate::trends::{self, WindowMeans};
use crate::{hazards, risk_factors, time_patterns};
use tracing::{debug, info, warn};
use vigil_core::models::{ActivityAnalysis, ActivityTrends, DailyActivity, Patient, TrendDirection};

/// Main analyzer producing fall-risk assessments from patient history.
///
/// Holds validated configuration and nothing else; a single instance can
/// analyze any number of patients. Analysis never mutates the patient and
/// never consults the wall clock, so a given history always produces the
/// same result.
pub struct RiskAnalyzer {
    config: AnalysisConfig,
}

impl RiskAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a patient's history for fall-risk signals.
    ///
    /// Histories shorter than the configured minimum produce a neutral
    /// analysis carrying the patient's stored risk level, empty findings,
    /// and all-stable trends. The stored risk level is only ever raised by
    /// firing alert rules, never lowered.
    #[must_use]
    pub fn analyze(&self, patient: &Patient) -> ActivityAnalysis {
        let history = patient.activity_history();

        if !self.config.is_sufficient_history(history.len()) {
            debug!(
                patient_id = patient.id(),
                days = history.len(),
                required = self.config.windows.min_history_days,
                "Insufficient history for trend analysis, returning neutral result"
            );
            return ActivityAnalysis::neutral(patient.risk_level());
        }

        let window = self.config.windows.trend_window_days;
        let (recent, older) = match trends::split_windows(history, window) {
            Ok(windows) => windows,
            Err(e) => {
                warn!(
                    patient_id = patient.id(),
                    error = %e,
                    "Trend windows unavailable, returning neutral result"
                );
                return ActivityAnalysis::neutral(patient.risk_level());
            }
        };

        let Some(recent_means) = WindowMeans::from_days(recent) else {
            warn!(
                patient_id = patient.id(),
                "Recent window is empty, returning neutral result"
            );
            return ActivityAnalysis::neutral(patient.risk_level());
        };

        let activity_trends = self.compute_trends(patient.id(), recent, older, recent_means);

        let environmental_risks =
            hazards::assess_environment(patient.environmental_factors(), &self.config.environment);
        let time_based_risk =
            time_patterns::assess_time_patterns(recent, &self.config.time_patterns);
        let risk_factors =
            risk_factors::collect_risk_factors(patient, &activity_trends, &environmental_risks);

        let signals = AlertSignals::detect(
            history,
            recent,
            &recent_means,
            patient.baseline(),
            &activity_trends,
            &self.config.trends,
        );
        let outcome = alert_rules::evaluate(&signals, patient.risk_level());

        if outcome.alert {
            info!(
                patient_id = patient.id(),
                alert_type = ?outcome.alert_type,
                risk_level = ?outcome.risk_level,
                "Alert rule fired during analysis"
            );
        }

        ActivityAnalysis {
            alert: outcome.alert,
            alert_type: outcome.alert_type,
            alert_message: outcome.message,
            recommendations: outcome.recommendations,
            risk_level: outcome.risk_level,
            risk_factors,
            trends: activity_trends,
            environmental_risks,
            time_based_risk,
        }
    }

    /// Classify the five metric trends between the two windows
    fn compute_trends(
        &self,
        patient_id: &str,
        recent: &[DailyActivity],
        older: &[DailyActivity],
        recent_means: WindowMeans,
    ) -> ActivityTrends {
        let Some(older_means) = WindowMeans::from_days(older) else {
            debug!(
                patient_id,
                "Comparison window is empty, treating all trends as stable"
            );
            return ActivityTrends::default();
        };

        ActivityTrends {
            steps: self.trend_or_stable(patient_id, "steps", recent_means.steps, older_means.steps),
            standing: self.trend_or_stable(
                patient_id,
                "standing time",
                recent_means.standing_minutes,
                older_means.standing_minutes,
            ),
            movement: self.trend_or_stable(
                patient_id,
                "movement frequency",
                recent_means.movement_frequency,
                older_means.movement_frequency,
            ),
            sleep: self.trend_or_stable(
                patient_id,
                "sleep quality",
                recent_means.sleep_quality,
                older_means.sleep_quality,
            ),
            gait: self.gait_trend_or_stable(patient_id, recent, older),
        }
    }

    /// Classify one metric, treating degenerate comparisons as stable
    fn trend_or_stable(
        &self,
        patient_id: &str,
        metric: &'static str,
        recent: f64,
        older: f64,
    ) -> TrendDirection {
        trends::classify_trend(recent, older, self.config.trends.stability_threshold, metric)
            .unwrap_or_else(|e| {
                debug!(patient_id, metric, error = %e, "Trend treated as stable");
                TrendDirection::Stable
            })
    }

    /// Classify the gait trend, treating degenerate comparisons as stable
    fn gait_trend_or_stable(
        &self,
        patient_id: &str,
        recent: &[DailyActivity],
        older: &[DailyActivity],
    ) -> TrendDirection {
        trends::gait_trend(recent, older, self.config.trends.stability_threshold).unwrap_or_else(
            |e| {
                debug!(patient_id, error = %e, "Gait trend treated as stable");
                TrendDirection::Stable
            },
        )
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
