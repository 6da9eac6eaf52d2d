// ABOUTME: Core types and constants for the NutriSnap diet tracker
// ABOUTME: Foundation crate with error handling, body-metric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriSnap` Core
//!
//! Foundation crate providing shared types and constants for the `NutriSnap`
//! nutrition tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, metric validation domains, paywall limits
//! - **models**: Body metrics, nutrition targets, macro totals and violations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (metrics, targets, macro totals)
pub mod models;
