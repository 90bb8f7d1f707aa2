// ABOUTME: Configuration-driven parameters for fall-risk analysis replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable thresholds for all detection algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis configuration errors
#[derive(Debug, Error)]
pub enum AnalysisConfigError {
    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// History windows driving trend detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisWindows {
    /// Days in the recent window compared against the preceding window
    pub trend_window_days: usize,

    /// Days of history required before any trend analysis runs
    pub min_history_days: usize,
}

/// Thresholds classifying activity and gait trends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Relative change below which a metric is considered stable
    pub stability_threshold: f64,

    /// Day-over-day ratio under which mobility counts as sharply declined
    pub sharp_decline_ratio: f64,

    /// Fraction of baseline the weekly average must stay under for
    /// sustained low activity
    pub sustained_low_ratio: f64,

    /// Fraction of baseline every recent day must stay under for
    /// sustained low activity
    pub sustained_low_daily_ratio: f64,
}

/// Thresholds flagging risky days by time of day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePatternThresholds {
    /// Rapid position changes per day above which the day is flagged
    pub rapid_movement_threshold: u32,

    /// Extended inactivity periods per day above which the day is flagged
    pub inactivity_threshold: u32,

    /// Flagged days a time-of-day bucket needs to count as high risk
    pub min_risky_days: usize,
}

/// Thresholds flagging home environment hazards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentThresholds {
    /// Room safety ratings below this value are flagged
    pub safety_rating_floor: u32,

    /// Hazard counts above this value flag the general living space
    pub hazard_count_ceiling: u32,
}

/// Main analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub windows: AnalysisWindows,
    pub trends: TrendThresholds,
    pub time_patterns: TimePatternThresholds,
    pub environment: EnvironmentThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            windows: AnalysisWindows {
                trend_window_days: 7,
                min_history_days: 7,
            },
            trends: TrendThresholds {
                stability_threshold: 0.05,
                sharp_decline_ratio: 0.8,
                sustained_low_ratio: 0.7,
                sustained_low_daily_ratio: 0.8,
            },
            time_patterns: TimePatternThresholds {
                rapid_movement_threshold: 3,
                inactivity_threshold: 2,
                min_risky_days: 3,
            },
            environment: EnvironmentThresholds {
                safety_rating_floor: 2,
                hazard_count_ceiling: 1,
            },
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        if let Ok(val) = std::env::var("VIGIL_TREND_WINDOW_DAYS") {
            config.windows.trend_window_days = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidTimeframe("VIGIL_TREND_WINDOW_DAYS".into())
            })?;
        }

        if let Ok(val) = std::env::var("VIGIL_MIN_HISTORY_DAYS") {
            config.windows.min_history_days = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidTimeframe("VIGIL_MIN_HISTORY_DAYS".into())
            })?;
        }

        if let Ok(val) = std::env::var("VIGIL_STABILITY_THRESHOLD") {
            config.trends.stability_threshold = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("VIGIL_STABILITY_THRESHOLD".into())
            })?;
        }

        if let Ok(val) = std::env::var("VIGIL_SHARP_DECLINE_RATIO") {
            config.trends.sharp_decline_ratio = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("VIGIL_SHARP_DECLINE_RATIO".into())
            })?;
        }

        if let Ok(val) = std::env::var("VIGIL_SUSTAINED_LOW_RATIO") {
            config.trends.sustained_low_ratio = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("VIGIL_SUSTAINED_LOW_RATIO".into())
            })?;
        }

        if let Ok(val) = std::env::var("VIGIL_MIN_RISKY_DAYS") {
            config.time_patterns.min_risky_days = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("VIGIL_MIN_RISKY_DAYS".into())
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        // Validate windows
        if self.windows.trend_window_days == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "trend_window_days must be > 0".into(),
            ));
        }

        if self.windows.min_history_days < self.windows.trend_window_days {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_history_days should be >= trend_window_days".into(),
            ));
        }

        if self.windows.min_history_days < 2 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_history_days must be >= 2".into(),
            ));
        }

        // Validate trend thresholds
        if !(0.0..=1.0).contains(&self.trends.stability_threshold) {
            return Err(AnalysisConfigError::ValidationFailed(
                "stability_threshold must be between 0 and 1".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.trends.sharp_decline_ratio) {
            return Err(AnalysisConfigError::ValidationFailed(
                "sharp_decline_ratio must be between 0 and 1".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.trends.sustained_low_ratio) {
            return Err(AnalysisConfigError::ValidationFailed(
                "sustained_low_ratio must be between 0 and 1".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.trends.sustained_low_daily_ratio) {
            return Err(AnalysisConfigError::ValidationFailed(
                "sustained_low_daily_ratio must be between 0 and 1".into(),
            ));
        }

        if self.trends.sustained_low_ratio > self.trends.sustained_low_daily_ratio {
            return Err(AnalysisConfigError::ValidationFailed(
                "sustained_low_ratio should be <= sustained_low_daily_ratio".into(),
            ));
        }

        // Validate time pattern thresholds
        if self.time_patterns.min_risky_days == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_risky_days must be > 0".into(),
            ));
        }

        if self.time_patterns.min_risky_days > self.windows.trend_window_days {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_risky_days should be <= trend_window_days".into(),
            ));
        }

        Ok(())
    }

    /// Check if a history of the given length supports trend analysis
    #[must_use]
    pub const fn is_sufficient_history(&self, days: usize) -> bool {
        days >= self.windows.min_history_days
    }
}

impl TimePatternThresholds {
    /// Check if a single day's movement pattern counts as risky
    #[must_use]
    pub const fn flags_day(&self, rapid_movements: u32, inactivity_periods: u32) -> bool {
        rapid_movements > self.rapid_movement_threshold
            || inactivity_periods > self.inactivity_threshold
    }
}
