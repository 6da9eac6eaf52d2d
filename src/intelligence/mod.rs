// ABOUTME: Intelligence module for nutrition targets, food knowledge and food recognition
// ABOUTME: Groups the pure calculator, the curated food table and model reply handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition intelligence
//!
//! - [`nutrition_calculator`]: metrics to BMI, BMR, TDEE and daily macro targets
//! - [`food_database`]: curated foods with per-100g profiles and scenario advice
//! - [`recognition`]: parsing vision model replies, with a knowledge base fallback

/// Food knowledge base and scenario suggestions
pub mod food_database;
/// Nutrition target calculator
pub mod nutrition_calculator;
/// Vision model reply parsing and fallback
pub mod recognition;

pub use food_database::{
    food_by_id, foods_by_tag, nutrition_for_weight, search_food, suggested_foods, FoodItem,
    FoodTag, NutrientProfile, PortionNutrition, Scenario, ScenarioGuide, FOOD_DATABASE,
};
pub use nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_macro_deficit, calculate_nutrition_targets,
    calculate_target_breakdown, calculate_tdee, categorize_bmi, validate_user_metrics,
    TargetBreakdown,
};
pub use recognition::{
    parse_recognition_reply, recognize_or_fallback, RecognitionOutcome, RecognitionSource,
    RecognizedFood,
};
