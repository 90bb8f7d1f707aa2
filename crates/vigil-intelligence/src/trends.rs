// ABOUTME: Windowed activity averages and trend classification with guarded arithmetic
// ABOUTME: Splits history into comparison windows and classifies each metric's direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use thiserror::Error;
use vigil_core::models::{DailyActivity, TrendDirection};

/// Errors raised while computing trends over activity history
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Insufficient history: {required} days required, {available} available")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Degenerate baseline for {metric}: comparison average is zero")]
    DegenerateBaseline { metric: String },

    #[error("Invalid activity data: {0}")]
    InvalidData(String),
}

/// Per-metric averages over one window of daily records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMeans {
    /// Average daily steps
    pub steps: f64,
    /// Average daily standing minutes
    pub standing_minutes: f64,
    /// Average daily movement episodes
    pub movement_frequency: f64,
    /// Average sleep quality score
    pub sleep_quality: f64,
}

impl WindowMeans {
    /// Average the four scalar activity metrics over a window
    ///
    /// Returns `None` for an empty window.
    #[must_use]
    pub fn from_days(days: &[DailyActivity]) -> Option<Self> {
        if days.is_empty() {
            return None;
        }

        let mut steps = 0.0;
        let mut standing = 0.0;
        let mut movement = 0.0;
        let mut sleep = 0.0;

        for day in days {
            steps += f64::from(day.steps);
            standing += f64::from(day.standing_minutes);
            movement += f64::from(day.movement_frequency);
            sleep += f64::from(day.sleep_quality);
        }

        #[allow(clippy::cast_precision_loss)]
        let count = days.len() as f64;

        Some(Self {
            steps: steps / count,
            standing_minutes: standing / count,
            movement_frequency: movement / count,
            sleep_quality: sleep / count,
        })
    }
}

/// Gait speed and balance averages over one window of daily records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitWindowMeans {
    /// Average walking speed in m/s
    pub speed: f64,
    /// Average balance score on the 0-10 scale
    pub balance_score: f64,
}

impl GaitWindowMeans {
    /// Average gait speed and balance over a window
    ///
    /// Returns `None` for an empty window.
    #[must_use]
    pub fn from_days(days: &[DailyActivity]) -> Option<Self> {
        if days.is_empty() {
            return None;
        }

        let mut speed = 0.0;
        let mut balance = 0.0;

        for day in days {
            speed += day.gait.speed;
            balance += day.gait.balance_score;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = days.len() as f64;

        Some(Self {
            speed: speed / count,
            balance_score: balance / count,
        })
    }
}

/// Split history into the recent window and the window preceding it.
///
/// The recent window always holds exactly `window` days. The older window
/// holds up to `window` days and shrinks (possibly to empty) when history
/// is shorter than two full windows.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientHistory`] when history cannot fill
/// the recent window, and [`AnalysisError::InvalidData`] for a zero-length
/// window.
pub fn split_windows(
    history: &[DailyActivity],
    window: usize,
) -> Result<(&[DailyActivity], &[DailyActivity]), AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidData(
            "trend window must be positive".into(),
        ));
    }

    if history.len() < window {
        return Err(AnalysisError::InsufficientHistory {
            required: window,
            available: history.len(),
        });
    }

    let split = history.len() - window;
    let older_start = split.saturating_sub(window);

    Ok((&history[split..], &history[older_start..split]))
}

/// Classify the direction of one metric between two window averages.
///
/// Relative change within `stability_threshold` of zero is stable; beyond
/// it the metric is declining or improving.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateBaseline`] when the older average is
/// zero or non-finite, since no meaningful relative change exists.
pub fn classify_trend(
    recent: f64,
    older: f64,
    stability_threshold: f64,
    metric: &str,
) -> Result<TrendDirection, AnalysisError> {
    if !older.is_finite() || older.abs() < f64::EPSILON {
        return Err(AnalysisError::DegenerateBaseline {
            metric: metric.to_owned(),
        });
    }

    let change = (recent - older) / older;

    if change < -stability_threshold {
        Ok(TrendDirection::Declining)
    } else if change > stability_threshold {
        Ok(TrendDirection::Improving)
    } else {
        Ok(TrendDirection::Stable)
    }
}

/// Classify the combined gait trend from speed and balance.
///
/// Gait declines when either speed or balance declines; it improves only
/// when speed improves while balance holds.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientHistory`] for an empty recent
/// window and [`AnalysisError::DegenerateBaseline`] when the older window
/// is empty or averages to zero.
pub fn gait_trend(
    recent: &[DailyActivity],
    older: &[DailyActivity],
    stability_threshold: f64,
) -> Result<TrendDirection, AnalysisError> {
    let recent_means =
        GaitWindowMeans::from_days(recent).ok_or(AnalysisError::InsufficientHistory {
            required: 1,
            available: 0,
        })?;

    let older_means =
        GaitWindowMeans::from_days(older).ok_or_else(|| AnalysisError::DegenerateBaseline {
            metric: "gait".to_owned(),
        })?;

    let speed = classify_trend(
        recent_means.speed,
        older_means.speed,
        stability_threshold,
        "gait speed",
    )?;
    let balance = classify_trend(
        recent_means.balance_score,
        older_means.balance_score,
        stability_threshold,
        "balance score",
    )?;

    if speed == TrendDirection::Declining || balance == TrendDirection::Declining {
        Ok(TrendDirection::Declining)
    } else if speed == TrendDirection::Improving {
        // balance is stable or improving here
        Ok(TrendDirection::Improving)
    } else {
        Ok(TrendDirection::Stable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigil_core::models::{GaitMetrics, TimeOfDay};

    fn day(steps: u32, speed: f64, balance: f64) -> DailyActivity {
        DailyActivity {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            steps,
            standing_minutes: 120,
            movement_frequency: 30,
            sleep_quality: 7,
            medications: Vec::new(),
            stair_use: 2,
            rapid_movements: 1,
            inactivity_periods: 1,
            time_of_day: TimeOfDay::Morning,
            gait: GaitMetrics {
                speed,
                stride_length: 0.6,
                step_symmetry: 0.9,
                balance_score: balance,
                turn_speed: 80.0,
                stride_length_variability: 0.12,
            },
        }
    }

    #[test]
    fn test_split_windows_full_history() {
        let history: Vec<DailyActivity> = (0..14).map(|i| day(5000 + i, 1.0, 8.0)).collect();
        let (recent, older) = split_windows(&history, 7).unwrap();

        assert_eq!(recent.len(), 7);
        assert_eq!(older.len(), 7);
        assert_eq!(recent[0].steps, 5007);
        assert_eq!(older[0].steps, 5000);
    }

    #[test]
    fn test_split_windows_partial_older() {
        let history: Vec<DailyActivity> = (0..10).map(|i| day(5000 + i, 1.0, 8.0)).collect();
        let (recent, older) = split_windows(&history, 7).unwrap();

        assert_eq!(recent.len(), 7);
        assert_eq!(older.len(), 3);
    }

    #[test]
    fn test_split_windows_exact_window_leaves_older_empty() {
        let history: Vec<DailyActivity> = (0..7).map(|i| day(5000 + i, 1.0, 8.0)).collect();
        let (recent, older) = split_windows(&history, 7).unwrap();

        assert_eq!(recent.len(), 7);
        assert!(older.is_empty());
    }

    #[test]
    fn test_split_windows_short_history_errors() {
        let history: Vec<DailyActivity> = (0..5).map(|i| day(5000 + i, 1.0, 8.0)).collect();
        let err = split_windows(&history, 7).unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::InsufficientHistory {
                required: 7,
                available: 5
            }
        ));
    }

    #[test]
    fn test_window_means_average_all_metrics() {
        let days = [day(4000, 1.0, 8.0), day(6000, 1.0, 8.0)];
        let means = WindowMeans::from_days(&days).unwrap();

        assert!((means.steps - 5000.0).abs() < f64::EPSILON);
        assert!((means.standing_minutes - 120.0).abs() < f64::EPSILON);
        assert!((means.movement_frequency - 30.0).abs() < f64::EPSILON);
        assert!((means.sleep_quality - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_means_empty_is_none() {
        assert!(WindowMeans::from_days(&[]).is_none());
        assert!(GaitWindowMeans::from_days(&[]).is_none());
    }

    #[test]
    fn test_classify_trend_directions() {
        assert_eq!(
            classify_trend(90.0, 100.0, 0.05, "steps").unwrap(),
            TrendDirection::Declining
        );
        assert_eq!(
            classify_trend(110.0, 100.0, 0.05, "steps").unwrap(),
            TrendDirection::Improving
        );
        assert_eq!(
            classify_trend(102.0, 100.0, 0.05, "steps").unwrap(),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_classify_trend_boundary_is_stable() {
        // Exactly +/- 5% sits on the threshold and stays stable
        assert_eq!(
            classify_trend(95.0, 100.0, 0.05, "steps").unwrap(),
            TrendDirection::Stable
        );
        assert_eq!(
            classify_trend(105.0, 100.0, 0.05, "steps").unwrap(),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_classify_trend_zero_baseline_errors() {
        let err = classify_trend(50.0, 0.0, 0.05, "steps").unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateBaseline { .. }));
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn test_gait_trend_declining_on_balance_alone() {
        // Speed holds but balance drops well past the threshold
        let recent: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 6.0)).collect();
        let older: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 8.0)).collect();

        assert_eq!(
            gait_trend(&recent, &older, 0.05).unwrap(),
            TrendDirection::Declining
        );
    }

    #[test]
    fn test_gait_trend_improving_needs_speed_gain() {
        let recent: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.2, 8.0)).collect();
        let older: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 8.0)).collect();

        assert_eq!(
            gait_trend(&recent, &older, 0.05).unwrap(),
            TrendDirection::Improving
        );

        // Balance gain alone is not an improvement
        let recent: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 9.0)).collect();
        let older: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 8.0)).collect();

        assert_eq!(
            gait_trend(&recent, &older, 0.05).unwrap(),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_gait_trend_empty_older_window_errors() {
        let recent: Vec<DailyActivity> = (0..7).map(|_| day(5000, 1.0, 8.0)).collect();
        let err = gait_trend(&recent, &[], 0.05).unwrap_err();

        assert!(matches!(err, AnalysisError::DegenerateBaseline { .. }));
    }
}
