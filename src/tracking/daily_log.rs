// ABOUTME: Food log entries and per-day aggregation of consumed calories and macros
// ABOUTME: Filters entries by owner and UTC day, then summarizes progress against targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily food log aggregation
//!
//! A log entry is saved for every recognized food the user confirms. Entries
//! belong to a signed-in user when one is known, otherwise to the device that
//! created them. Days are UTC calendar days.

use chrono::{DateTime, NaiveDate, Utc};
use nutrisnap_core::models::{MacroDeficit, MacroTotals, NutritionTargets};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intelligence::food_database::Scenario;
use crate::intelligence::nutrition_calculator::calculate_macro_deficit;
use crate::intelligence::recognition::RecognizedFood;

/// Whose log is being read
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum LogOwner {
    /// Signed-in user
    User(Uuid),
    /// Anonymous device
    Device(String),
}

impl LogOwner {
    /// Whether `entry` belongs to this owner
    #[must_use]
    pub fn owns(&self, entry: &FoodLogEntry) -> bool {
        match self {
            Self::User(user_id) => entry.user_id == Some(*user_id),
            Self::Device(device_id) => entry.device_id == *device_id,
        }
    }
}

/// One saved food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owning user, if signed in when saved
    pub user_id: Option<Uuid>,
    /// Device that saved the entry
    pub device_id: String,
    /// Uploaded photo, if kept
    pub image_url: Option<String>,
    /// Food name
    pub food_name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Portion weight (g)
    pub weight_g: f64,
    /// Scenario chosen when the photo was taken
    pub context_tag: Option<Scenario>,
    /// Recognition confidence
    pub confidence: f64,
    /// Save time
    pub created_at: DateTime<Utc>,
}

impl FoodLogEntry {
    /// Create an entry from a confirmed recognition result
    #[must_use]
    pub fn from_recognized(
        food: &RecognizedFood,
        user_id: Option<Uuid>,
        device_id: impl Into<String>,
        context_tag: Option<Scenario>,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            device_id: device_id.into(),
            image_url,
            food_name: food.name.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            weight_g: food.weight_g,
            context_tag,
            confidence: food.confidence,
            created_at,
        }
    }

    /// Macro grams of the entry
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// UTC calendar day the entry was saved on
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Entries of `owner` saved on `day`, newest first
#[must_use]
pub fn logs_for_day<'a>(
    entries: &'a [FoodLogEntry],
    owner: &LogOwner,
    day: NaiveDate,
) -> Vec<&'a FoodLogEntry> {
    let mut logs: Vec<&FoodLogEntry> = entries
        .iter()
        .filter(|entry| owner.owns(entry) && entry.day() == day)
        .collect();
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    logs
}

/// Sum of calories and macros over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Number of entries summed
    pub entry_count: usize,
}

impl DailyTotals {
    /// Sum entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodLogEntry>,
    {
        entries.into_iter().fold(Self::default(), |mut totals, entry| {
            totals.add_food(entry.calories, &entry.macros());
            totals
        })
    }

    /// Add one food's energy and macros
    pub fn add_food(&mut self, calories: f64, macros: &MacroTotals) {
        self.calories += calories;
        self.protein += macros.protein;
        self.carbs += macros.carbs;
        self.fat += macros.fat;
        self.entry_count += 1;
    }

    /// Consumed macro grams
    #[must_use]
    pub const fn consumed(&self) -> MacroTotals {
        MacroTotals {
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// Share of the calorie target consumed, capped at 100
///
/// Returns 0 for a non-positive target.
#[must_use]
pub fn calorie_progress_percent(consumed_calories: f64, target_calories: i32) -> f64 {
    if target_calories <= 0 {
        return 0.0;
    }
    (consumed_calories / f64::from(target_calories) * 100.0).min(100.0)
}

/// Today's intake against the targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Consumed totals
    pub totals: DailyTotals,
    /// Remaining macro grams
    pub deficit: MacroDeficit,
    /// Calorie progress (0-100)
    pub calorie_progress_percent: f64,
    /// Calories left before reaching the target, never negative
    pub remaining_calories: f64,
}

/// Summarize a day's entries against the targets
#[must_use]
pub fn daily_summary<'a, I>(targets: &NutritionTargets, entries: I) -> DailySummary
where
    I: IntoIterator<Item = &'a FoodLogEntry>,
{
    let totals = DailyTotals::from_entries(entries);
    DailySummary {
        totals,
        deficit: calculate_macro_deficit(targets, &totals.consumed()),
        calorie_progress_percent: calorie_progress_percent(totals.calories, targets.calories),
        remaining_calories: (f64::from(targets.calories) - totals.calories).max(0.0),
    }
}
