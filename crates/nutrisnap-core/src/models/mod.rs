// ABOUTME: Core data models for NutriSnap nutrition targets
// ABOUTME: Re-exports body metric inputs and calculator output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `UserMetrics`: complete calculator input
//! - `PartialUserMetrics`: subset submitted for validation
//! - `NutritionTargets`: daily calorie and macro targets
//! - `MacroTotals` / `MacroDeficit`: consumed grams and what is left

mod metrics;
mod targets;

pub use metrics::{
    ActivityLevel, Gender, Goal, MetricField, MetricViolation, PartialUserMetrics, UserMetrics,
};
pub use targets::{BmiCategory, MacroDeficit, MacroTotals, NutritionTargets};
