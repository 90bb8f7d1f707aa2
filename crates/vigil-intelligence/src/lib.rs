// ABOUTME: Fall-risk analysis engine with trend detection, hazard assessment, and alerting
// ABOUTME: Pure computation over vigil-core models; no I/O, clocks, or persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

#![deny(unsafe_code)]

//! # Vigil Intelligence
//!
//! Analysis engine for the Vigil fall-risk monitoring platform. Consumes a
//! patient record with activity history and produces an [`ActivityAnalysis`]
//! describing trends, home hazards, time-of-day patterns, risk factors, and
//! at most one triggered alert.
//!
//! Every function here is deterministic: identical input always yields an
//! identical analysis. Nothing in this crate reads the wall clock or mutates
//! the patient record it inspects.
//!
//! ## Modules
//!
//! - **analyzer**: `RiskAnalyzer`, the single entry point orchestrating a pass
//! - **trends**: windowed averages and trend classification with guarded math
//! - **alert_rules**: the ordered alert rule table and risk escalation
//! - **hazards**: home environment assessment by location
//! - **time_patterns**: time-of-day risk concentration detection
//! - **risk_factors**: per-category findings for care staff review
//! - **config**: environment-tunable analysis parameters
//! - **clinical_constants**: citation-backed clinical reference values
//!
//! [`ActivityAnalysis`]: vigil_core::models::ActivityAnalysis

/// Ordered alert rule table and risk level escalation
pub mod alert_rules;

/// Risk analysis orchestration over a patient's history
pub mod analyzer;

/// Clinical reference values backed by geriatrics literature
pub mod clinical_constants;

/// Analysis configuration with environment variable overrides
pub mod config;

/// Home hazard assessment organized by location
pub mod hazards;

/// Per-category risk factor findings
pub mod risk_factors;

/// Time-of-day risk concentration detection
pub mod time_patterns;

/// Windowed averages and trend classification
pub mod trends;

pub use alert_rules::{AlertEvaluation, AlertRule, AlertSignals, RiskEscalation, ALERT_RULES};
pub use analyzer::RiskAnalyzer;
pub use config::{
    AnalysisConfig, AnalysisConfigError, AnalysisWindows, EnvironmentThresholds,
    TimePatternThresholds, TrendThresholds,
};
pub use trends::{AnalysisError, GaitWindowMeans, WindowMeans};
