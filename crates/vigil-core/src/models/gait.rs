// ABOUTME: Gait measurement snapshot used in patient records and daily activity entries
// ABOUTME: Walking speed, stride geometry, symmetry, balance, and variability metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use serde::{Deserialize, Serialize};

/// A complete gait measurement snapshot.
///
/// Gait metrics are always produced as a full set; a snapshot is never
/// partially populated. Each `DailyActivity` carries its own snapshot, and the
/// `Patient` record holds the current reference snapshot used by the
/// synthesizer as the basis for daily variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaitMetrics {
    /// Walking speed in meters per second
    pub speed: f64,
    /// Average stride length in meters
    pub stride_length: f64,
    /// Left/right step symmetry ratio (0–1, 1 is perfectly symmetric)
    pub step_symmetry: f64,
    /// Clinical balance score (0–10, higher is steadier)
    pub balance_score: f64,
    /// Turning speed in degrees per second
    pub turn_speed: f64,
    /// Stride-length coefficient of variation (higher means less consistent)
    pub stride_length_variability: f64,
}
