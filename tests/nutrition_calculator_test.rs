// ABOUTME: Algorithm tests for the nutrition target calculator
// ABOUTME: Covers BMI, BMR, TDEE, goal targets, carb saturation, validation and macro deficits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Algorithm tests for the nutrition calculator
//!
//! - BMI value and classification boundaries
//! - Mifflin-St Jeor BMR for both genders
//! - TDEE across all five activity tiers
//! - Goal-dependent targets with the protein → fat → carbs priority
//! - Carb remainder saturating at zero
//! - Batched metric validation
//! - Remaining macro deficits

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::config::NutritionConfig;
use nutrisnap::intelligence::nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_macro_deficit, calculate_nutrition_targets,
    calculate_target_breakdown, calculate_tdee, categorize_bmi, validate_user_metrics,
};
use nutrisnap::models::{
    ActivityLevel, BmiCategory, Gender, Goal, MacroTotals, MetricField, NutritionTargets,
    PartialUserMetrics, UserMetrics,
};

mod common;

/// 55 kg, 164 cm, 20 y female, moderately active
fn default_profile_metrics(goal: Goal) -> UserMetrics {
    UserMetrics {
        weight_kg: 55.0,
        height_cm: 164.0,
        age: 20,
        gender: Gender::Female,
        activity_level: ActivityLevel::ModeratelyActive,
        goal,
        body_fat_percent: None,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_reference_value() {
    let bmi = calculate_bmi(70.0, 175.0);

    assert_close(bmi, 22.9);
    assert_eq!(categorize_bmi(bmi), BmiCategory::Normal);
}

#[test]
fn test_bmi_rounds_to_one_decimal() {
    // 55 / 1.64² = 20.449...
    assert_close(calculate_bmi(55.0, 164.0), 20.4);
    // 100 / 1.5² = 44.444...
    assert_close(calculate_bmi(100.0, 150.0), 44.4);
}

#[test]
fn test_bmi_category_boundaries_are_lower_inclusive() {
    assert_eq!(categorize_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(categorize_bmi(18.5), BmiCategory::Normal);
    assert_eq!(categorize_bmi(23.9), BmiCategory::Normal);
    assert_eq!(categorize_bmi(24.0), BmiCategory::Overweight);
    assert_eq!(categorize_bmi(27.9), BmiCategory::Overweight);
    assert_eq!(categorize_bmi(28.0), BmiCategory::Obese);
    assert_eq!(categorize_bmi(45.0), BmiCategory::Obese);
}

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_bmr_female_reference() {
    let config = NutritionConfig::default();
    let metrics = default_profile_metrics(Goal::Maintain);

    // 10*55 + 6.25*164 - 5*20 - 161 = 550 + 1025 - 100 - 161 = 1314
    assert_eq!(calculate_bmr(&metrics, &config.bmr), 1314);
}

#[test]
fn test_bmr_male_rounds_to_nearest_kcal() {
    let config = NutritionConfig::default();
    let metrics = common::reference_metrics();

    // 700 + 1093.75 - 150 + 5 = 1648.75
    assert_eq!(calculate_bmr(&metrics, &config.bmr), 1649);
}

#[test]
fn test_bmr_gender_offset_difference() {
    let config = NutritionConfig::default();
    let male = common::reference_metrics();
    let female = UserMetrics {
        gender: Gender::Female,
        ..male
    };

    // 1648.75 - 166 = 1482.75
    assert_eq!(calculate_bmr(&female, &config.bmr), 1483);
}

#[test]
fn test_bmr_ignores_body_fat() {
    let config = NutritionConfig::default();
    let without = default_profile_metrics(Goal::Maintain);
    let with = UserMetrics {
        body_fat_percent: Some(22.0),
        ..without
    };

    assert_eq!(
        calculate_bmr(&with, &config.bmr),
        calculate_bmr(&without, &config.bmr)
    );
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_moderately_active_reference() {
    let config = NutritionConfig::default();
    let metrics = default_profile_metrics(Goal::Maintain);

    // round(1314 * 1.55) = round(2036.7)
    assert_eq!(
        calculate_tdee(&metrics, &config.bmr, &config.activity_factors),
        2037
    );
}

#[test]
fn test_tdee_all_activity_levels() {
    let config = NutritionConfig::default();
    let expected = [
        (ActivityLevel::Sedentary, 1577),
        (ActivityLevel::LightlyActive, 1807),
        (ActivityLevel::ModeratelyActive, 2037),
        (ActivityLevel::VeryActive, 2267),
        (ActivityLevel::ExtraActive, 2497),
    ];

    for (activity_level, tdee) in expected {
        let metrics = UserMetrics {
            activity_level,
            ..default_profile_metrics(Goal::Maintain)
        };
        assert_eq!(
            calculate_tdee(&metrics, &config.bmr, &config.activity_factors),
            tdee,
            "TDEE for {activity_level}"
        );
    }
}

// ============================================================================
// TARGETS
// ============================================================================

#[test]
fn test_lose_fat_reference_targets() {
    let config = NutritionConfig::default();
    let targets = calculate_nutrition_targets(&default_profile_metrics(Goal::LoseFat), &config);

    assert_eq!(
        targets,
        NutritionTargets {
            calories: 1537,
            protein: 110,
            carbs: 178,
            fat: 43,
        }
    );
}

#[test]
fn test_maintain_targets() {
    let config = NutritionConfig::default();
    let targets = calculate_nutrition_targets(&default_profile_metrics(Goal::Maintain), &config);

    // protein 66; fat round(509.25 / 9) = 57; carbs round(1263.75 / 4) = 316
    assert_eq!(
        targets,
        NutritionTargets {
            calories: 2037,
            protein: 66,
            carbs: 316,
            fat: 57,
        }
    );
}

#[test]
fn test_gain_muscle_targets() {
    let config = NutritionConfig::default();
    let targets =
        calculate_nutrition_targets(&default_profile_metrics(Goal::GainMuscle), &config);

    // protein 99; fat round(487.4 / 9) = 54; carbs round(1553.6 / 4) = 388
    assert_eq!(
        targets,
        NutritionTargets {
            calories: 2437,
            protein: 99,
            carbs: 388,
            fat: 54,
        }
    );
}

#[test]
fn test_male_lose_fat_targets() {
    let config = NutritionConfig::default();
    let targets = calculate_nutrition_targets(&common::reference_metrics(), &config);

    // TDEE round(1649 * 1.55) = 2556, target 2056, protein 140,
    // fat round(514 / 9) = 57, carbs round(982 / 4) = round(245.5) = 246
    assert_eq!(
        targets,
        NutritionTargets {
            calories: 2056,
            protein: 140,
            carbs: 246,
            fat: 57,
        }
    );
}

#[test]
fn test_goal_ordering_of_calories() {
    let config = NutritionConfig::default();
    let gain = calculate_nutrition_targets(&default_profile_metrics(Goal::GainMuscle), &config);
    let maintain = calculate_nutrition_targets(&default_profile_metrics(Goal::Maintain), &config);
    let lose = calculate_nutrition_targets(&default_profile_metrics(Goal::LoseFat), &config);

    assert_eq!(gain.calories - maintain.calories, 400);
    assert_eq!(maintain.calories - lose.calories, 500);
    assert!(lose.protein > maintain.protein);
}

#[test]
fn test_breakdown_exposes_intermediate_values() {
    let config = NutritionConfig::default();
    let breakdown = calculate_target_breakdown(&default_profile_metrics(Goal::LoseFat), &config);

    assert_close(breakdown.bmi, 20.4);
    assert_eq!(breakdown.bmi_category, BmiCategory::Normal);
    assert_eq!(breakdown.bmr, 1314);
    assert_eq!(breakdown.tdee, 2037);
    assert_eq!(breakdown.targets.calories, 1537);
}

#[test]
fn test_carbs_saturate_at_zero() {
    let mut config = NutritionConfig::default();
    config.goals.lose_fat.protein_per_kg = 4.0;
    let metrics = UserMetrics {
        weight_kg: 120.0,
        height_cm: 150.0,
        age: 90,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::LoseFat,
        body_fat_percent: None,
    };

    let targets = calculate_nutrition_targets(&metrics, &config);

    // BMR 1526.5 -> 1527, TDEE round(1832.4) = 1832, target 1332.
    // Protein 480 g (1920 kcal) already exceeds the target.
    assert_eq!(targets.carbs, 0);
    assert_eq!(targets.protein, 480);
    assert_eq!(targets.fat, 37);
    assert_eq!(targets.calories, 1332);
}

#[test]
fn test_carbs_saturate_at_zero_with_default_strategy() {
    let config = NutritionConfig::default();
    let metrics = UserMetrics {
        weight_kg: 200.0,
        height_cm: 100.0,
        age: 100,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::LoseFat,
        body_fat_percent: None,
    };

    let targets = calculate_nutrition_targets(&metrics, &config);

    // BMR 1964, TDEE round(2356.8) = 2357, target 1857.
    // Protein 400 g (1600 kcal) plus 464.25 kcal of fat overshoots the target.
    assert_eq!(
        targets,
        NutritionTargets {
            calories: 1857,
            protein: 400,
            carbs: 0,
            fat: 52,
        }
    );
}

#[test]
fn test_negative_target_only_clamps_carbs() {
    let config = NutritionConfig::default();
    let metrics = UserMetrics {
        weight_kg: 30.0,
        height_cm: 100.0,
        age: 100,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::LoseFat,
        body_fat_percent: None,
    };
    let partial = PartialUserMetrics::from(&metrics);
    assert!(validate_user_metrics(&partial, &config.validation).is_empty());

    let targets = calculate_nutrition_targets(&metrics, &config);

    // BMR 264, TDEE round(316.8) = 317, target 317 - 500 = -183.
    // Fat follows the target: round(-183 * 0.25 / 9) = -5.
    assert_eq!(
        targets,
        NutritionTargets {
            calories: -183,
            protein: 60,
            carbs: 0,
            fat: -5,
        }
    );
}

#[test]
fn test_reference_energy_gap_within_two_kcal() {
    let config = NutritionConfig::default();
    let cases = [
        default_profile_metrics(Goal::LoseFat),
        common::metrics_with_goal(Goal::GainMuscle),
        common::metrics_with_goal(Goal::LoseFat),
        common::metrics_with_goal(Goal::Maintain),
    ];

    for metrics in cases {
        let targets = calculate_nutrition_targets(&metrics, &config);
        assert!(
            targets.energy_gap().abs() <= 2.0,
            "gap {} for {targets:?}",
            targets.energy_gap()
        );
    }
}

#[test]
fn test_energy_gap_bounded_by_rounding() {
    let config = NutritionConfig::default();

    // Maintain: 66*4 + 57*9 + 316*4 = 2041 against 2037
    let maintain = calculate_nutrition_targets(&default_profile_metrics(Goal::Maintain), &config);
    assert_close(maintain.energy_gap(), 4.0);

    // Gain: 99*4 + 54*9 + 388*4 = 2434 against 2437
    let gain = calculate_nutrition_targets(&default_profile_metrics(Goal::GainMuscle), &config);
    assert_close(gain.energy_gap(), -3.0);
}

#[test]
fn test_targets_are_idempotent() {
    let config = NutritionConfig::default();
    let metrics = common::reference_metrics();

    let first = calculate_nutrition_targets(&metrics, &config);
    let second = calculate_nutrition_targets(&metrics, &config);

    assert_eq!(first, second);
}

#[test]
fn test_custom_goal_config_changes_targets() {
    let mut config = NutritionConfig::default();
    config.goals.maintain.calorie_adjustment = 100.0;

    let targets = calculate_nutrition_targets(&default_profile_metrics(Goal::Maintain), &config);

    assert_eq!(targets.calories, 2137);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_validate_reports_weight_violation() {
    let config = NutritionConfig::default();
    let violations = validate_user_metrics(
        &PartialUserMetrics {
            weight_kg: Some(500.0),
            ..PartialUserMetrics::default()
        },
        &config.validation,
    );

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, MetricField::Weight);
    assert_eq!(
        violations[0].to_string(),
        "Weight must be between 30-200 kg"
    );
}

#[test]
fn test_validate_valid_metrics_is_empty() {
    let config = NutritionConfig::default();
    let violations = validate_user_metrics(
        &PartialUserMetrics {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(30),
        },
        &config.validation,
    );

    assert!(violations.is_empty());
}

#[test]
fn test_validate_reports_every_violation() {
    let config = NutritionConfig::default();
    let violations = validate_user_metrics(
        &PartialUserMetrics {
            weight_kg: Some(10.0),
            height_cm: Some(300.0),
            age: Some(5),
        },
        &config.validation,
    );

    let fields: Vec<MetricField> = violations.iter().map(|v| v.field).collect();
    assert_eq!(
        fields,
        vec![MetricField::Weight, MetricField::Height, MetricField::Age]
    );
    assert_eq!(violations[2].to_string(), "Age must be between 10-100 years");
}

#[test]
fn test_validate_bounds_are_inclusive() {
    let config = NutritionConfig::default();
    for (weight, height, age) in [(30.0, 100.0, 10), (200.0, 250.0, 100)] {
        let violations = validate_user_metrics(
            &PartialUserMetrics {
                weight_kg: Some(weight),
                height_cm: Some(height),
                age: Some(age),
            },
            &config.validation,
        );
        assert!(violations.is_empty(), "{weight}/{height}/{age} should be valid");
    }
}

#[test]
fn test_validate_skips_absent_fields() {
    let config = NutritionConfig::default();

    assert!(validate_user_metrics(&PartialUserMetrics::default(), &config.validation).is_empty());

    let violations = validate_user_metrics(
        &PartialUserMetrics {
            height_cm: Some(99.0),
            ..PartialUserMetrics::default()
        },
        &config.validation,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, MetricField::Height);
}

// ============================================================================
// MACRO DEFICIT
// ============================================================================

#[test]
fn test_deficit_never_negative() {
    let targets = NutritionTargets {
        calories: 2000,
        protein: 100,
        carbs: 250,
        fat: 60,
    };
    let consumed = MacroTotals {
        protein: 120.0,
        carbs: 100.5,
        fat: 20.0,
    };

    let deficit = calculate_macro_deficit(&targets, &consumed);

    assert_close(deficit.protein, 0.0);
    assert_close(deficit.carbs, 149.5);
    assert_close(deficit.fat, 40.0);
}

#[test]
fn test_deficit_with_nothing_consumed_equals_targets() {
    let targets = NutritionTargets {
        calories: 1537,
        protein: 110,
        carbs: 178,
        fat: 43,
    };

    let deficit = calculate_macro_deficit(&targets, &MacroTotals::default());

    assert_close(deficit.protein, 110.0);
    assert_close(deficit.carbs, 178.0);
    assert_close(deficit.fat, 43.0);
}
