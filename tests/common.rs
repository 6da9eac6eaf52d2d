// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, seeded RNGs, sample metrics and log entry builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrisnap`

use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nutrisnap::intelligence::RecognizedFood;
use nutrisnap::models::{ActivityLevel, Gender, Goal, UserMetrics};
use nutrisnap::tracking::FoodLogEntry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic RNG for suggestion and fallback tests
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Reference user: 70 kg, 175 cm, 30 y male, moderately active, losing fat
pub fn reference_metrics() -> UserMetrics {
    UserMetrics {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: Goal::LoseFat,
        body_fat_percent: None,
    }
}

/// Metrics with a different goal
pub fn metrics_with_goal(goal: Goal) -> UserMetrics {
    UserMetrics {
        goal,
        ..reference_metrics()
    }
}

/// UTC timestamp helper
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Recognized food with the given energy and macros
pub fn recognized(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> RecognizedFood {
    RecognizedFood {
        name: name.to_owned(),
        weight_g: 100.0,
        calories,
        protein,
        carbs,
        fat,
        confidence: 0.9,
        tips: String::new(),
    }
}

/// Log entry saved by an anonymous device
pub fn device_entry(
    device_id: &str,
    food: &RecognizedFood,
    created_at: DateTime<Utc>,
) -> FoodLogEntry {
    FoodLogEntry::from_recognized(food, None, device_id, None, None, created_at)
}

/// Log entry saved by a signed-in user
pub fn user_entry(
    user_id: Uuid,
    device_id: &str,
    food: &RecognizedFood,
    created_at: DateTime<Utc>,
) -> FoodLogEntry {
    FoodLogEntry::from_recognized(food, Some(user_id), device_id, None, None, created_at)
}
