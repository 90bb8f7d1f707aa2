// ABOUTME: Time-of-day risk concentration detection over recent activity windows
// ABOUTME: Flags daily-rhythm buckets where risky movement days accumulate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use crate::config::TimePatternThresholds;
use vigil_core::models::{DailyActivity, TimeBasedRisk, TimeOfDay};

/// All time-of-day buckets in chronological order
const ALL_PERIODS: [TimeOfDay; 4] = [
    TimeOfDay::Morning,
    TimeOfDay::Afternoon,
    TimeOfDay::Evening,
    TimeOfDay::Night,
];

/// Find time-of-day buckets where risky days concentrate.
///
/// A day is risky when rapid movements or extended inactivity exceed the
/// configured thresholds. A bucket qualifies once it accumulates
/// `min_risky_days` such days within the window. Qualifying buckets are
/// reported in chronological order regardless of record order.
#[must_use]
pub fn assess_time_patterns(
    recent: &[DailyActivity],
    thresholds: &TimePatternThresholds,
) -> TimeBasedRisk {
    let high_risk_periods: Vec<TimeOfDay> = ALL_PERIODS
        .into_iter()
        .filter(|period| {
            let risky_days = recent
                .iter()
                .filter(|day| {
                    day.time_of_day == *period
                        && thresholds.flags_day(day.rapid_movements, day.inactivity_periods)
                })
                .count();
            risky_days >= thresholds.min_risky_days
        })
        .collect();

    let mut recommendations = Vec::new();
    if high_risk_periods.contains(&TimeOfDay::Morning) {
        recommendations.push(
            "Take extra care during morning activities, especially when first getting up"
                .to_owned(),
        );
    }
    if high_risk_periods.contains(&TimeOfDay::Evening)
        || high_risk_periods.contains(&TimeOfDay::Night)
    {
        recommendations.push("Ensure adequate lighting for evening and nighttime movement".to_owned());
        recommendations.push("Consider using a nightlight in bathroom and hallways".to_owned());
    }

    TimeBasedRisk {
        high_risk_periods,
        recommendations,
    }
}
