// ABOUTME: Criterion benchmarks for nutrition target calculation and intake aggregation
// ABOUTME: Measures target breakdowns, food search and daily summaries over growing logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition calculator and daily log.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrisnap::config::NutritionConfig;
use nutrisnap::intelligence::food_database::{search_food, FOOD_DATABASE};
use nutrisnap::intelligence::nutrition_calculator::{
    calculate_nutrition_targets, calculate_target_breakdown, validate_user_metrics,
};
use nutrisnap::intelligence::recognition::RecognizedFood;
use nutrisnap::models::{ActivityLevel, Gender, Goal, PartialUserMetrics, UserMetrics};
use nutrisnap::tracking::daily_log::{daily_summary, logs_for_day, FoodLogEntry, LogOwner};

const LOG_SIZES: [usize; 3] = [10, 100, 1000];

fn metrics(activity_level: ActivityLevel) -> UserMetrics {
    UserMetrics {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level,
        goal: Goal::LoseFat,
        body_fat_percent: None,
    }
}

#[allow(clippy::cast_possible_wrap)]
fn food_log(count: usize) -> Vec<FoodLogEntry> {
    let start = Utc
        .with_ymd_and_hms(2025, 3, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    (0..count)
        .map(|index| {
            let item = &FOOD_DATABASE[index % FOOD_DATABASE.len()];
            let food = RecognizedFood::from_food_item(item, 0.8);
            let device = if index % 3 == 0 { "device_b" } else { "device_a" };
            FoodLogEntry::from_recognized(
                &food,
                None,
                device,
                None,
                None,
                start + Duration::minutes((index % 1440) as i64),
            )
        })
        .collect()
}

fn bench_target_calculation(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let mut group = c.benchmark_group("nutrition_targets");

    for level in ActivityLevel::ALL {
        let input = metrics(level);
        group.bench_with_input(
            BenchmarkId::new("targets", level.as_str()),
            &input,
            |b, input| b.iter(|| calculate_nutrition_targets(black_box(input), &config)),
        );
    }

    let input = metrics(ActivityLevel::ModeratelyActive);
    group.bench_function("breakdown", |b| {
        b.iter(|| calculate_target_breakdown(black_box(&input), &config));
    });

    let partial = PartialUserMetrics {
        weight_kg: Some(500.0),
        height_cm: Some(175.0),
        age: Some(5),
    };
    group.bench_function("validate_invalid", |b| {
        b.iter(|| validate_user_metrics(black_box(&partial), &config.validation));
    });

    group.finish();
}

fn bench_food_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("food_search");

    for query in ["chicken", "鸡蛋", "high protein", "durian"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| search_food(black_box(query)));
        });
    }

    group.finish();
}

fn bench_daily_summary(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let targets = calculate_nutrition_targets(&metrics(ActivityLevel::ModeratelyActive), &config);
    let owner = LogOwner::Device("device_a".to_owned());
    let day = Utc
        .with_ymd_and_hms(2025, 3, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
        .date_naive();
    let mut group = c.benchmark_group("daily_summary");

    for size in LOG_SIZES {
        let entries = food_log(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let today = logs_for_day(black_box(entries), &owner, day);
                daily_summary(&targets, today)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_target_calculation,
    bench_food_search,
    bench_daily_summary
);
criterion_main!(benches);
