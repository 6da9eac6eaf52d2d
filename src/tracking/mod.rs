// ABOUTME: Tracking module for food logs and per-session usage state
// ABOUTME: Daily aggregation of saved foods and the free-allowance gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food log entries and daily aggregation
pub mod daily_log;
/// Session context and usage gate
pub mod session;

pub use daily_log::{
    calorie_progress_percent, daily_summary, logs_for_day, DailySummary, DailyTotals,
    FoodLogEntry, LogOwner,
};
pub use session::{FoodResult, SessionContext, UsageTracker};
