// ABOUTME: Daily activity records including time-of-day bucketing for observation timestamps
// ABOUTME: One immutable entry per simulated day with a complete gait snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::GaitMetrics;

/// Time-of-day bucket for an observation.
///
/// Bucketing always derives from an explicit caller-supplied timestamp,
/// never from the ambient wall clock, so simulated history stays internally
/// consistent and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00–11:59
    Morning,
    /// 12:00–16:59
    Afternoon,
    /// 17:00–21:59
    Evening,
    /// 22:00–04:59
    Night,
}

impl TimeOfDay {
    /// Buckets an hour of day (0–23).
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Buckets an explicit observation timestamp.
    #[must_use]
    pub fn from_datetime(moment: &DateTime<Utc>) -> Self {
        Self::from_hour(moment.hour())
    }
}

/// One day of recorded activity for a patient.
///
/// Immutable once appended to a patient's history; the synthesizer produces a
/// fresh record per simulated day and the owning collaborator replaces the
/// patient snapshot with the record appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Calendar day this record covers
    pub date: NaiveDate,
    /// Steps taken
    pub steps: u32,
    /// Minutes spent standing
    pub standing_minutes: u32,
    /// Position changes over the day
    pub movement_frequency: u32,
    /// Self-reported sleep quality (1–10)
    pub sleep_quality: u8,
    /// Names of medications taken that day
    pub medications: Vec<String>,
    /// Stair ascents/descents
    pub stair_use: u32,
    /// Sudden position changes (a fall-risk signal)
    pub rapid_movements: u32,
    /// Prolonged inactivity periods (a deconditioning signal)
    pub inactivity_periods: u32,
    /// Bucket of the observation timestamp
    pub time_of_day: TimeOfDay,
    /// Gait snapshot measured that day
    pub gait: GaitMetrics,
}
