// ABOUTME: Configuration management module for nutrition calculation settings
// ABOUTME: Exposes the env-driven NutritionConfig singleton and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for `NutriSnap`
//!
//! Configuration is environment-only: compiled-in defaults, overridden by
//! `NUTRITION_*` variables, validated once and cached in a process-wide
//! singleton. Calculator functions take the relevant section by reference so
//! they remain pure.

/// Configuration error types
pub mod error;
/// Nutrition calculation, validation and paywall configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalParameters, GoalStrategiesConfig,
    MetricValidationConfig, NutritionConfig, PaywallConfig, RangeLimit,
};
