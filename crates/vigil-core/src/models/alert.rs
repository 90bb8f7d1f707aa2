// ABOUTME: Owner-held alert records wrapping one triggered analysis result
// ABOUTME: Identity, patient attribution, severity, and a dismissal flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AlertType, RiskLevel};

/// An alert raised from one analysis pass.
///
/// Constructed and owned by the cohort manager when an analysis fires;
/// mutated only by toggling [`Alert::dismissed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identity
    pub id: Uuid,
    /// Identifier of the patient this alert concerns
    pub patient_id: String,
    /// Display name of the patient at the time the alert was raised
    pub patient_name: String,
    /// Simulation date the alert was raised on
    pub date: NaiveDate,
    /// Classification of the winning detection rule
    pub alert_type: AlertType,
    /// Message of the winning detection rule
    pub message: String,
    /// Recommendations attached to the winning rule
    pub recommendations: Vec<String>,
    /// Output risk level of the analysis that raised the alert
    pub severity: RiskLevel,
    /// Whether a caregiver has dismissed this alert
    pub dismissed: bool,
}
