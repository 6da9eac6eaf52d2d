// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Target calculation commands for nutrisnap-cli
// ABOUTME: Prints daily targets, BMI and metric validation results

use nutrisnap::config::NutritionConfig;
use nutrisnap::errors::{AppError, AppResult};
use nutrisnap::intelligence::{
    calculate_bmi, calculate_target_breakdown, categorize_bmi, validate_user_metrics,
    TargetBreakdown,
};
use nutrisnap::models::{BmiCategory, MetricViolation, PartialUserMetrics, UserMetrics};
use serde::Serialize;
use tracing::info;

use crate::helpers::output::print_json;

#[derive(Serialize)]
struct TargetsOutput<'a> {
    metrics: &'a UserMetrics,
    #[serde(flatten)]
    breakdown: TargetBreakdown,
    macro_calories: f64,
}

#[derive(Serialize)]
struct BmiOutput {
    bmi: f64,
    category: BmiCategory,
}

#[derive(Serialize)]
struct ValidationOutput {
    valid: bool,
    violations: Vec<ViolationOutput>,
}

#[derive(Serialize)]
struct ViolationOutput {
    #[serde(flatten)]
    violation: MetricViolation,
    message: String,
}

fn reject(violations: &[MetricViolation]) -> AppError {
    let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
    AppError::value_out_of_range(messages.join("; "))
}

/// Validate metrics, then print the full target breakdown
pub fn targets(config: &NutritionConfig, metrics: &UserMetrics) -> AppResult<()> {
    let violations = validate_user_metrics(&PartialUserMetrics::from(metrics), &config.validation);
    if !violations.is_empty() {
        return Err(reject(&violations));
    }

    let breakdown = calculate_target_breakdown(metrics, config);
    info!(calories = breakdown.targets.calories, "Calculated targets");

    print_json(&TargetsOutput {
        metrics,
        breakdown,
        macro_calories: breakdown.targets.macro_calories(),
    })
}

/// Print BMI and its category
pub fn bmi(weight: f64, height: f64) -> AppResult<()> {
    if weight <= 0.0 || height <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight and height must be positive",
        ));
    }

    let bmi = calculate_bmi(weight, height);
    print_json(&BmiOutput {
        bmi,
        category: categorize_bmi(bmi),
    })
}

/// Print every out-of-range field among those given
pub fn validate(
    config: &NutritionConfig,
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
) -> AppResult<()> {
    let metrics = PartialUserMetrics {
        weight_kg: weight,
        height_cm: height,
        age,
    };
    let violations = validate_user_metrics(&metrics, &config.validation);

    print_json(&ValidationOutput {
        valid: violations.is_empty(),
        violations: violations
            .into_iter()
            .map(|violation| ViolationOutput {
                message: violation.to_string(),
                violation,
            })
            .collect(),
    })
}
