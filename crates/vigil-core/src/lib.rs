// ABOUTME: Core types for the Vigil fall-risk monitoring platform
// ABOUTME: Foundation crate with patient records, activity history, and analysis result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vigil Care Intelligence

#![deny(unsafe_code)]

//! # Vigil Core
//!
//! Foundation crate providing the shared data model for the Vigil fall-risk
//! monitoring platform. This crate holds data shapes only (synthesis lives in
//! the `vigil_monitor` root crate and analysis in `vigil-intelligence`), so it
//! changes infrequently and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **models**: `Patient`, `DailyActivity`, `GaitMetrics`, environmental and
//!   medical profile records, analysis results, and alerts

/// Core data models (`Patient`, `DailyActivity`, analysis results, alerts)
pub mod models;
