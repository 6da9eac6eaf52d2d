// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Food knowledge base commands for nutrisnap-cli
// ABOUTME: Searches foods, shows portion nutrition and suggests foods per scenario

use nutrisnap::errors::{AppError, AppResult};
use nutrisnap::intelligence::{
    food_by_id, nutrition_for_weight, search_food, suggested_foods, FoodItem, PortionNutrition,
    Scenario, ScenarioGuide,
};
use serde::Serialize;
use tracing::debug;

use crate::helpers::output::print_json;

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    foods: Vec<&'static FoodItem>,
}

#[derive(Serialize)]
struct ShowOutput {
    food: &'static FoodItem,
    portion: PortionNutrition,
}

#[derive(Serialize)]
struct SuggestOutput {
    scenario: Option<Scenario>,
    guide: Option<&'static ScenarioGuide>,
    foods: Vec<&'static FoodItem>,
}

/// Print foods matching a query
pub fn search(query: &str) -> AppResult<()> {
    let foods = search_food(query);
    debug!(query, count = foods.len(), "Food search");
    print_json(&SearchOutput {
        query,
        count: foods.len(),
        foods,
    })
}

/// Print one food with nutrition for a portion
pub fn show(id: &str, grams: Option<f64>) -> AppResult<()> {
    let food = food_by_id(id)?;
    let weight = grams.unwrap_or(food.serving_size_g);
    if weight <= 0.0 {
        return Err(AppError::invalid_input("Portion weight must be positive"));
    }

    print_json(&ShowOutput {
        food,
        portion: nutrition_for_weight(food, weight),
    })
}

/// Print random suggestions and the scenario guide
pub fn suggest(scenario: Option<Scenario>, count: usize) -> AppResult<()> {
    let mut rng = rand::thread_rng();
    print_json(&SuggestOutput {
        scenario,
        guide: scenario.map(Scenario::guide),
        foods: suggested_foods(scenario, count, &mut rng),
    })
}
