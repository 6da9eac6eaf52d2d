// ABOUTME: Main library entry point for the NutriSnap nutrition engine
// ABOUTME: Target calculation, food knowledge, recognition handling, daily tracking and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriSnap`
//!
//! Nutrition engine behind a photo-based food logging app. Given a user's body
//! metrics it computes daily calorie and macronutrient targets, and it keeps
//! track of what the user eats against those targets.
//!
//! ## Architecture
//!
//! - **Config**: tunable calculator constants, loaded from the environment once
//! - **Intelligence**: the target calculator, the food knowledge base and
//!   recognition reply handling
//! - **Tracking**: daily food log aggregation and per-session usage gating
//! - **Profile**: the stored profile record and its validated edits
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrisnap::config::NutritionConfig;
//! use nutrisnap::intelligence::calculate_nutrition_targets;
//! use nutrisnap::models::{ActivityLevel, Gender, Goal, UserMetrics};
//!
//! let metrics = UserMetrics {
//!     weight_kg: 55.0,
//!     height_cm: 164.0,
//!     age: 20,
//!     gender: Gender::Female,
//!     activity_level: ActivityLevel::LightlyActive,
//!     goal: Goal::LoseFat,
//!     body_fat_percent: None,
//! };
//!
//! let targets = calculate_nutrition_targets(&metrics, &NutritionConfig::default());
//! assert_eq!(targets.protein, 110);
//! ```

/// Environment-driven nutrition configuration
pub mod config;

/// Nutrition target calculator, food knowledge base and recognition handling
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Stored user profile record
pub mod profile;

/// Daily food log aggregation and session usage gate
pub mod tracking;

// Foundation types live in nutrisnap-core
pub use nutrisnap_core::{constants, errors, models};
