// ABOUTME: Tests for food log ownership filtering, daily totals and progress summaries
// ABOUTME: Covers user vs device ownership, UTC day boundaries, ordering and capped progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::intelligence::food_database::Scenario;
use nutrisnap::models::NutritionTargets;
use nutrisnap::tracking::daily_log::{
    calorie_progress_percent, daily_summary, logs_for_day, DailyTotals, FoodLogEntry, LogOwner,
};
use uuid::Uuid;

mod common;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_entry_copies_recognized_food() {
    let food = common::recognized("Tea egg", 72.0, 6.5, 0.8, 5.0);
    let at = common::utc(2025, 3, 1, 8, 30);

    let entry = FoodLogEntry::from_recognized(
        &food,
        None,
        "device_abc",
        Some(Scenario::ConvenienceStore),
        Some("https://img.example/1.jpg".to_owned()),
        at,
    );

    assert_eq!(entry.food_name, "Tea egg");
    assert_eq!(entry.device_id, "device_abc");
    assert_eq!(entry.context_tag, Some(Scenario::ConvenienceStore));
    assert_eq!(entry.created_at, at);
    assert!(entry.user_id.is_none());
    assert!(close(entry.calories, 72.0));
}

#[test]
fn test_logs_for_day_filters_device_and_day() {
    let egg = common::recognized("Egg", 78.0, 6.5, 0.6, 5.5);
    let entries = vec![
        common::device_entry("device_a", &egg, common::utc(2025, 3, 1, 7, 0)),
        common::device_entry("device_a", &egg, common::utc(2025, 3, 1, 12, 0)),
        common::device_entry("device_b", &egg, common::utc(2025, 3, 1, 12, 0)),
        common::device_entry("device_a", &egg, common::utc(2025, 3, 2, 0, 0)),
    ];

    let owner = LogOwner::Device("device_a".to_owned());
    let logs = logs_for_day(&entries, &owner, common::date(2025, 3, 1));

    assert_eq!(logs.len(), 2);
    // Newest first
    assert_eq!(logs[0].created_at, common::utc(2025, 3, 1, 12, 0));
    assert_eq!(logs[1].created_at, common::utc(2025, 3, 1, 7, 0));
}

#[test]
fn test_day_boundary_is_utc_midnight() {
    let food = common::recognized("Banana", 89.0, 1.1, 23.0, 0.3);
    let entries = vec![
        common::device_entry("d", &food, common::utc(2025, 3, 1, 23, 59)),
        common::device_entry("d", &food, common::utc(2025, 3, 2, 0, 0)),
    ];
    let owner = LogOwner::Device("d".to_owned());

    assert_eq!(logs_for_day(&entries, &owner, common::date(2025, 3, 1)).len(), 1);
    assert_eq!(logs_for_day(&entries, &owner, common::date(2025, 3, 2)).len(), 1);
}

#[test]
fn test_user_owner_ignores_anonymous_entries_from_same_device() {
    let user_id = Uuid::new_v4();
    let food = common::recognized("Apple", 104.0, 0.6, 28.0, 0.4);
    let at = common::utc(2025, 3, 1, 10, 0);
    let entries = vec![
        common::user_entry(user_id, "device_a", &food, at),
        common::device_entry("device_a", &food, at),
        common::user_entry(Uuid::new_v4(), "device_a", &food, at),
    ];

    let logs = logs_for_day(&entries, &LogOwner::User(user_id), common::date(2025, 3, 1));

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, Some(user_id));
}

#[test]
fn test_totals_sum_entries() {
    let at = common::utc(2025, 3, 1, 12, 0);
    let entries = vec![
        common::device_entry("d", &common::recognized("A", 200.0, 20.0, 10.0, 5.0), at),
        common::device_entry("d", &common::recognized("B", 350.5, 12.5, 40.0, 10.0), at),
    ];

    let totals = DailyTotals::from_entries(&entries);

    assert_eq!(totals.entry_count, 2);
    assert!(close(totals.calories, 550.5));
    let consumed = totals.consumed();
    assert!(close(consumed.protein, 32.5));
    assert!(close(consumed.carbs, 50.0));
    assert!(close(consumed.fat, 15.0));
}

#[test]
fn test_totals_of_nothing_are_zero() {
    let totals = DailyTotals::from_entries(&[]);

    assert_eq!(totals, DailyTotals::default());
}

#[test]
fn test_progress_is_capped_and_guarded() {
    assert!(close(calorie_progress_percent(500.0, 2000), 25.0));
    assert!(close(calorie_progress_percent(2600.0, 2000), 100.0));
    assert!(close(calorie_progress_percent(500.0, 0), 0.0));
    assert!(close(calorie_progress_percent(500.0, -100), 0.0));
}

#[test]
fn test_daily_summary() {
    let targets = NutritionTargets {
        calories: 1537,
        protein: 110,
        carbs: 178,
        fat: 43,
    };
    let at = common::utc(2025, 3, 1, 12, 0);
    let entries = vec![
        common::device_entry("d", &common::recognized("Lunch", 600.0, 40.0, 60.0, 20.0), at),
        common::device_entry("d", &common::recognized("Snack", 200.0, 80.0, 10.0, 5.0), at),
    ];

    let summary = daily_summary(&targets, &entries);

    assert!(close(summary.totals.calories, 800.0));
    assert!(close(summary.remaining_calories, 737.0));
    assert!(close(summary.deficit.protein, 0.0));
    assert!(close(summary.deficit.carbs, 108.0));
    assert!(close(summary.deficit.fat, 18.0));
    assert!((summary.calorie_progress_percent - 52.049_446_974_625_9).abs() < 1e-6);
}

#[test]
fn test_daily_summary_over_target() {
    let targets = NutritionTargets {
        calories: 500,
        protein: 20,
        carbs: 50,
        fat: 10,
    };
    let at = common::utc(2025, 3, 1, 12, 0);
    let entries = vec![common::device_entry(
        "d",
        &common::recognized("Feast", 900.0, 30.0, 90.0, 40.0),
        at,
    )];

    let summary = daily_summary(&targets, &entries);

    assert!(close(summary.remaining_calories, 0.0));
    assert!(close(summary.calorie_progress_percent, 100.0));
}
