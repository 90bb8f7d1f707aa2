// ABOUTME: Core data models for the Vigil fall-risk monitoring platform
// ABOUTME: Re-exports Patient, DailyActivity, GaitMetrics, analysis results, and alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

//! # Data Models
//!
//! Core data structures shared by the synthesizer, the risk analysis engine,
//! and the cohort manager.
//!
//! ## Design Principles
//!
//! - **Append-only history**: `Patient` snapshots are replaced wholesale when
//!   history grows; a `DailyActivity` is immutable once appended
//! - **Fixed baseline**: the six reference metrics are set at creation and
//!   never mutated afterwards
//! - **Serializable**: every model supports JSON serialization for export and
//!   structured logging
//!
//! ## Core Models
//!
//! - `Patient`: one record per monitored individual
//! - `DailyActivity`: one activity record per simulated day
//! - `GaitMetrics`: a complete gait snapshot
//! - `ActivityAnalysis`: the derived result of one analysis pass
//! - `Alert`: an owner-held record wrapping one triggered analysis

// Domain modules
mod activity;
mod alert;
mod analysis;
mod environment;
mod gait;
mod medical;
mod patient;

// Re-export all public types for convenience
// Patient domain
pub use patient::{ActivityBaseline, Gender, Patient, PatientBuilder};

// Daily activity domain
pub use activity::{DailyActivity, TimeOfDay};

// Gait domain
pub use gait::GaitMetrics;

// Home environment domain
pub use environment::EnvironmentalFactors;

// Medical profile domain
pub use medical::{ConditionRecord, ConditionSeverity, MedicalProfile, MedicationRecord};

// Analysis result domain
pub use analysis::{
    ActivityAnalysis, ActivityTrends, AlertType, EnvironmentalRisk, RiskFactor,
    RiskFactorCategory, RiskLevel, TimeBasedRisk, TrendDirection,
};

// Alert domain
pub use alert::Alert;
