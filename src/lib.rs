// ABOUTME: Main library entry point for the Vigil fall-risk monitoring core
// ABOUTME: Wires the patient synthesizer, risk analysis engine, and cohort manager together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy across the workspace
#![deny(unsafe_code)]

//! # Vigil Monitor
//!
//! Continuous fall-risk monitoring core for elderly patients living at home.
//! The crate synthesizes realistic patient cohorts, simulates their daily
//! activity, and analyzes every history for signals of elevated fall risk.
//!
//! ## Features
//!
//! - **Seeded synthesis**: Reproducible patient records and activity, anchored
//!   to caller-supplied dates rather than the wall clock
//! - **Risk analysis**: Trend windows, environmental and time-of-day findings,
//!   and an ordered alert rule list with last-match-wins semantics
//! - **Clinical scenarios**: Scripted trajectories (subtle slowdown,
//!   hypertensive crisis, dementia episodes) for exercising detection
//! - **Cohort management**: Day-by-day advancement with immutable patient
//!   snapshots and an owner-held alert log
//!
//! ## Architecture
//!
//! The core is split across three layers:
//! - **Models** ([`models`], from `vigil-core`): shared patient, activity, and
//!   analysis data structures
//! - **Intelligence** ([`intelligence`], from `vigil-intelligence`): the risk
//!   analysis engine and its clinical constants
//! - **Synthesis and cohort** ([`synthesis`], [`cohort`]): seeded data
//!   generation and the stateful cohort manager
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use vigil_monitor::cohort::CohortManager;
//!
//! fn main() -> anyhow::Result<()> {
//!     vigil_monitor::logging::init_default()?;
//!
//!     let today = NaiveDate::from_ymd_opt(2025, 4, 1)
//!         .ok_or_else(|| anyhow::anyhow!("invalid date"))?;
//!     let mut cohort = CohortManager::with_sample_cohort(42, today);
//!
//!     for alert in cohort.advance_day() {
//!         println!("{}: {}", alert.patient_name, alert.message);
//!     }
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by integration tests (tests/) and downstream
// consumers. They must remain `pub`.

/// Cohort management: enrollment, day advancement, scenario application
pub mod cohort;

/// Logging configuration and domain logging utilities
pub mod logging;

/// Patient data synthesizer: seeded records, daily simulation, scenarios
pub mod synthesis;

/// Shared patient, activity, and analysis data structures
pub use vigil_core::models;

/// Risk analysis engine and clinical reference constants
pub use vigil_intelligence as intelligence;
