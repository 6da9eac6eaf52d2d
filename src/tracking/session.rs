// ABOUTME: Per-session state for usage counting, VIP status, today's totals and the current result
// ABOUTME: Decides when the free daily recognition allowance is exhausted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session context
//!
//! Each session owns one [`SessionContext`] value and passes it explicitly to
//! the operations that read or change it. Nothing here is global, so separate
//! sessions never observe each other's counters.

use chrono::NaiveDate;
use nutrisnap_core::constants::default_profile;
use nutrisnap_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::daily_log::DailyTotals;
use crate::config::PaywallConfig;
use crate::intelligence::food_database::Scenario;
use crate::intelligence::recognition::RecognizedFood;

/// Recognitions performed per calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTracker {
    /// Recognitions on `last_usage_date`
    pub daily_count: u32,
    /// Day of the most recent recognition
    pub last_usage_date: Option<NaiveDate>,
}

impl UsageTracker {
    /// Count one recognition on `today`, starting over on a new day
    ///
    /// Returns the count for `today` after recording.
    pub fn record_use(&mut self, today: NaiveDate) -> u32 {
        if self.last_usage_date == Some(today) {
            self.daily_count = self.daily_count.saturating_add(1);
        } else {
            if let Some(previous) = self.last_usage_date {
                info!(%previous, %today, "Usage counter reset for new day");
            }
            self.daily_count = 1;
            self.last_usage_date = Some(today);
        }
        self.daily_count
    }

    /// Recognitions already recorded on `today`
    #[must_use]
    pub fn count_on(&self, today: NaiveDate) -> u32 {
        if self.last_usage_date == Some(today) {
            self.daily_count
        } else {
            0
        }
    }
}

/// The recognition result currently shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodResult {
    /// Recognized foods
    pub foods: Vec<RecognizedFood>,
    /// Uploaded photo
    pub image_url: Option<String>,
    /// Scenario chosen for the photo
    pub context: Option<Scenario>,
}

/// Session-scoped state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Daily recognition counter
    pub usage: UsageTracker,
    /// Paid subscriber flag
    pub is_vip: bool,
    /// Totals consumed today
    pub today_totals: DailyTotals,
    /// Daily calorie target (kcal)
    pub calories_target: i32,
    /// Result awaiting confirmation
    pub current_result: Option<FoodResult>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            usage: UsageTracker::default(),
            is_vip: false,
            today_totals: DailyTotals::default(),
            calories_target: default_profile::CALORIES_TARGET,
            current_result: None,
        }
    }
}

impl SessionContext {
    /// Fresh session for an anonymous, non-VIP user
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one recognition
    pub fn record_analysis(&mut self, today: NaiveDate) -> u32 {
        let count = self.usage.record_use(today);
        info!(count, %today, vip = self.is_vip, "Recorded food analysis");
        count
    }

    /// Update VIP status
    pub const fn set_vip(&mut self, is_vip: bool) {
        self.is_vip = is_vip;
    }

    /// Replace the pending result
    pub fn set_food_result(
        &mut self,
        foods: Vec<RecognizedFood>,
        image_url: Option<String>,
        context: Option<Scenario>,
    ) {
        debug!(count = foods.len(), "Set pending food result");
        self.current_result = Some(FoodResult {
            foods,
            image_url,
            context,
        });
    }

    /// Drop the pending result
    pub fn clear_food_result(&mut self) {
        self.current_result = None;
    }

    /// Replace today's totals
    pub const fn update_today_totals(&mut self, totals: DailyTotals) {
        self.today_totals = totals;
    }

    /// Replace the daily calorie target
    pub const fn set_calories_target(&mut self, target: i32) {
        self.calories_target = target;
    }

    /// Whether the free allowance for `today` is used up
    ///
    /// Only recognitions recorded on `today` count, so a counter left over
    /// from a previous day never blocks the user.
    #[must_use]
    pub fn should_show_paywall(&self, today: NaiveDate, config: &PaywallConfig) -> bool {
        !self.is_vip && self.usage.count_on(today) >= config.free_trial_limit
    }

    /// Gate a new recognition request
    ///
    /// # Errors
    ///
    /// Returns `QuotaExceeded` when the paywall applies
    pub fn ensure_analysis_allowed(
        &self,
        today: NaiveDate,
        config: &PaywallConfig,
    ) -> AppResult<()> {
        if self.should_show_paywall(today, config) {
            return Err(AppError::quota_exceeded(config.free_trial_limit));
        }
        Ok(())
    }
}
