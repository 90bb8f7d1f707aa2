// ABOUTME: Patient data synthesizer producing seeded cohorts and scripted clinical courses
// ABOUTME: Catalog of conditions and medications, daily simulation, scenario generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

//! # Patient Data Synthesizer
//!
//! Deterministic synthesis of patient records and daily activity for demos,
//! load tests, and analysis-engine validation. All randomness flows through a
//! seeded generator, and every produced date is anchored to a caller-supplied
//! day rather than the wall clock.

/// Condition catalog and condition-to-medication reference tables
pub mod catalog;
/// Seeded patient record synthesis and daily activity simulation
pub mod generator;
/// Scripted clinical scenarios with predictable trajectories
pub mod scenarios;

pub use catalog::{impairs_gait, medications_for, CONDITION_CATALOG, GAIT_IMPAIRING_CONDITIONS};
pub use generator::PatientGenerator;
pub use scenarios::ClinicalScenario;
