// ABOUTME: Static home-environment hazard profile consulted by the risk analysis engine
// ABOUTME: Hazard counts, room safety scores, handrail and stair presence flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use serde::{Deserialize, Serialize};

/// Static home-hazard profile for a patient's living environment.
///
/// Captured once during onboarding and consulted read-only by the analysis
/// engine. Hazard counts use a 0–3 severity scale; room safety scores use a
/// 0–3 scale where higher is safer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    /// Number of loose rugs in walkways (0–3)
    pub loose_rugs: u32,
    /// Poorly lit areas (0–3)
    pub poor_lighting: u32,
    /// Cluttered walkways (0–3)
    pub cluttered_walkways: u32,
    /// Outdoor hazards such as uneven paths (0–3)
    pub outdoor_hazards: u32,
    /// Bathroom safety score (0–3, higher is safer)
    pub bathroom_safety: u32,
    /// Bedroom safety score (0–3, higher is safer)
    pub bedroom_safety: u32,
    /// Whether expected handrails are missing
    pub missing_handrails: bool,
    /// Whether the home has stairs
    pub stairs_present: bool,
}

impl EnvironmentalFactors {
    /// Combined walkway hazard score used for initial risk scoring.
    ///
    /// Sums the three indoor hazard counts and adds a two-point penalty when
    /// handrails are missing.
    #[must_use]
    pub const fn hazard_score(&self) -> u32 {
        self.loose_rugs
            + self.poor_lighting
            + self.cluttered_walkways
            + if self.missing_handrails { 2 } else { 0 }
    }
}
