// ABOUTME: Nutrition target calculation using the Mifflin-St Jeor equation and goal strategies
// ABOUTME: BMI, BMR, TDEE, goal-adjusted calorie target, macro split, validation and deficits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure pipeline from body metrics to daily targets:
//! metrics → BMI → BMR → TDEE → goal-adjusted calories → protein → fat → carbs.
//!
//! Every function is a deterministic function of its explicit arguments. There
//! is no shared state, so concurrent callers need no coordination.
//!
//! Macro priority is fixed: protein is sized from body weight first, fat takes
//! a fixed share of target calories second, and carbohydrates receive whatever
//! energy remains. When an aggressive deficit leaves no remainder the carb
//! target saturates at zero instead of going negative.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use nutrisnap_core::constants::{bmi, energy};
use nutrisnap_core::models::{
    BmiCategory, MacroDeficit, MacroTotals, MetricField, MetricViolation, NutritionTargets,
    PartialUserMetrics, UserMetrics,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig, MetricValidationConfig, NutritionConfig};

/// Intermediate values of one target calculation, for display and auditing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBreakdown {
    /// Body Mass Index (1 decimal)
    pub bmi: f64,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i32,
    /// Final targets
    pub targets: NutritionTargets,
}

/// Calculate Body Mass Index
///
/// Formula: `weight_kg / (height_cm / 100)²`, rounded to one decimal place.
/// Inputs are assumed positive; range checks belong to [`validate_user_metrics`].
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / height_m.powi(2) * 10.0).round() / 10.0
}

/// Classify a BMI value
///
/// Lower bounds are inclusive: `< 18.5` underweight, `[18.5, 24)` normal,
/// `[24, 28)` overweight, `>= 28` obese.
#[must_use]
pub fn categorize_bmi(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi_value < bmi::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi_value < bmi::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is rounded to the nearest kcal. `body_fat_percent` is ignored;
/// this equation is the only supported BMR model.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(metrics: &UserMetrics, config: &BmrConfig) -> i32 {
    let weight_component = config.msj_weight_coef * metrics.weight_kg;
    let height_component = config.msj_height_coef * metrics.height_cm;
    let age_component = config.msj_age_coef * f64::from(metrics.age);

    let bmr = weight_component
        + height_component
        + age_component
        + config.gender_constant(metrics.gender);

    bmr.round() as i32
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x activity factor), where BMR is the already
/// rounded value from [`calculate_bmr`].
#[must_use]
pub fn calculate_tdee(
    metrics: &UserMetrics,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> i32 {
    let bmr = calculate_bmr(metrics, bmr_config);
    tdee_from_bmr(bmr, activity_config.factor(metrics.activity_level))
}

fn tdee_from_bmr(bmr: i32, activity_factor: f64) -> i32 {
    (f64::from(bmr) * activity_factor).round() as i32
}

/// Calculate personalized daily calorie and macronutrient targets
///
/// 1. TDEE from BMR and activity factor
/// 2. Target calories = TDEE + goal adjustment
/// 3. Protein = round(weight x protein per kg)
/// 4. Fat = round(target calories x fat ratio / 9)
/// 5. Carbs = max(0, round((target - protein kcal - unrounded fat kcal) / 4))
#[must_use]
pub fn calculate_nutrition_targets(
    metrics: &UserMetrics,
    config: &NutritionConfig,
) -> NutritionTargets {
    calculate_target_breakdown(metrics, config).targets
}

/// Calculate targets together with the intermediate BMI, BMR and TDEE
#[must_use]
pub fn calculate_target_breakdown(
    metrics: &UserMetrics,
    config: &NutritionConfig,
) -> TargetBreakdown {
    let bmi_value = calculate_bmi(metrics.weight_kg, metrics.height_cm);
    let bmr = calculate_bmr(metrics, &config.bmr);
    let tdee = tdee_from_bmr(bmr, config.activity_factors.factor(metrics.activity_level));

    let strategy = config.goals.for_goal(metrics.goal);
    let target_calories = f64::from(tdee) + strategy.calorie_adjustment;

    // Protein (priority 1)
    let protein = (metrics.weight_kg * strategy.protein_per_kg).round();
    let protein_calories = protein * energy::PROTEIN_KCAL_PER_G;

    // Fat (priority 2)
    let fat_calories = target_calories * strategy.fat_ratio;
    let fat = (fat_calories / energy::FAT_KCAL_PER_G).round();

    // Carbs (remainder, saturating at zero)
    let remaining_calories = target_calories - protein_calories - fat_calories;
    let carbs = (remaining_calories / energy::CARBS_KCAL_PER_G).round().max(0.0);

    let targets = NutritionTargets {
        calories: target_calories.round() as i32,
        protein: protein as i32,
        carbs: carbs as i32,
        fat: fat as i32,
    };

    debug!(
        goal = %metrics.goal,
        bmr,
        tdee,
        calories = targets.calories,
        protein = targets.protein,
        fat = targets.fat,
        carbs = targets.carbs,
        "Calculated nutrition targets"
    );

    TargetBreakdown {
        bmi: bmi_value,
        bmi_category: categorize_bmi(bmi_value),
        bmr,
        tdee,
        targets,
    }
}

/// Check the present numeric fields against their accepted domains
///
/// Every violation is reported, not just the first, so a form can show them
/// all at once. Absent fields are skipped. An empty vector means valid.
#[must_use]
pub fn validate_user_metrics(
    metrics: &PartialUserMetrics,
    config: &MetricValidationConfig,
) -> Vec<MetricViolation> {
    let checks = [
        (MetricField::Weight, metrics.weight_kg),
        (MetricField::Height, metrics.height_cm),
        (MetricField::Age, metrics.age.map(f64::from)),
    ];

    checks
        .into_iter()
        .filter_map(|(field, value)| {
            let value = value?;
            let range = config.range(field);
            (!range.contains(value)).then_some(MetricViolation {
                field,
                value,
                min: range.min,
                max: range.max,
            })
        })
        .collect()
}

/// Remaining grams of each macro for today: `max(0, target - consumed)`
#[must_use]
pub fn calculate_macro_deficit(targets: &NutritionTargets, consumed: &MacroTotals) -> MacroDeficit {
    MacroDeficit {
        protein: (f64::from(targets.protein) - consumed.protein).max(0.0),
        carbs: (f64::from(targets.carbs) - consumed.carbs).max(0.0),
        fat: (f64::from(targets.fat) - consumed.fat).max(0.0),
    }
}
