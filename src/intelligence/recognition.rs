// ABOUTME: Parses vision model food recognition replies into typed food estimates
// ABOUTME: Falls back to knowledge base suggestions when the reply is missing or unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Recognition Results
//!
//! The vision model is asked to answer with a JSON object holding a `foods`
//! array. Models routinely wrap that object in prose or code fences, so the
//! parser takes the span from the first `{` to the last `}` before decoding.
//!
//! A recognition request never fails outright: when the reply is absent or
//! cannot be decoded, the caller gets one or two knowledge base foods for the
//! chosen scenario instead, marked with [`RecognitionSource::Fallback`].

use std::sync::LazyLock;

use nutrisnap_core::constants::recognition::{FALLBACK_CONFIDENCE, FALLBACK_MAX_FOODS};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::MacroTotals;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::food_database::{nutrition_for_weight, suggested_foods, FoodItem, Scenario};

/// Greedy match from the first opening brace to the last closing brace
static JSON_OBJECT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

/// One food identified in a photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFood {
    /// Food name as reported
    pub name: String,
    /// Estimated portion weight (g)
    pub weight_g: f64,
    /// Estimated energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Recognition confidence in `[0, 1]`
    pub confidence: f64,
    /// One-line nutrition remark
    #[serde(default)]
    pub tips: String,
}

impl RecognizedFood {
    /// Macro grams of this food
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// Build an estimate from a knowledge base entry at its standard serving
    #[must_use]
    pub fn from_food_item(item: &FoodItem, confidence: f64) -> Self {
        let portion = nutrition_for_weight(item, item.serving_size_g);
        let tags = item
            .tags
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: item.name.to_owned(),
            weight_g: portion.weight_g,
            calories: portion.calories,
            protein: portion.protein,
            carbs: portion.carbs,
            fat: portion.fat,
            confidence,
            tips: format!("{} - {tags}", item.category),
        }
    }
}

/// Where a recognition result came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecognitionSource {
    /// Decoded from the vision model reply
    Model,
    /// Knowledge base suggestions substituted for an unusable reply
    Fallback {
        /// Why the model reply was not used
        reason: String,
    },
}

/// Foods recognized for one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionOutcome {
    /// Recognized or suggested foods
    pub foods: Vec<RecognizedFood>,
    /// Origin of `foods`
    pub source: RecognitionSource,
}

impl RecognitionOutcome {
    /// Whether the knowledge base fallback produced this outcome
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, RecognitionSource::Fallback { .. })
    }
}

#[derive(Deserialize)]
struct RecognitionReply {
    foods: Vec<RecognizedFood>,
}

/// Decode the foods array from a raw model reply
///
/// # Errors
///
/// Returns `SerializationError` when the reply holds no JSON object, the JSON
/// is malformed, or the object has no `foods` array
pub fn parse_recognition_reply(text: &str) -> AppResult<Vec<RecognizedFood>> {
    let pattern = JSON_OBJECT_PATTERN
        .as_ref()
        .ok_or_else(|| AppError::internal("JSON object pattern failed to compile"))?;

    let json = pattern
        .find(text)
        .ok_or_else(|| AppError::serialization("Model reply contains no JSON object"))?
        .as_str();

    let reply: RecognitionReply = serde_json::from_str(json)?;
    debug!(count = reply.foods.len(), "Decoded recognition reply");
    Ok(reply.foods)
}

/// Recognized foods from the model reply, or knowledge base suggestions
///
/// `reply` is `None` when the model call itself failed. The fallback returns
/// one or two foods drawn from `scenario` (or the whole table) at their
/// standard serving with a fixed confidence.
pub fn recognize_or_fallback<R: Rng + ?Sized>(
    reply: Option<&str>,
    scenario: Option<Scenario>,
    rng: &mut R,
) -> RecognitionOutcome {
    let reason = match reply.map(parse_recognition_reply) {
        Some(Ok(foods)) => {
            return RecognitionOutcome {
                foods,
                source: RecognitionSource::Model,
            };
        }
        Some(Err(e)) => e.to_string(),
        None => "No reply from recognition model".to_owned(),
    };

    warn!(
        scenario = scenario.map(Scenario::as_str),
        reason = %reason,
        "Food recognition unavailable, using knowledge base suggestions"
    );

    let count = rng.gen_range(1..=FALLBACK_MAX_FOODS);
    let foods = suggested_foods(scenario, count, rng)
        .into_iter()
        .map(|item| RecognizedFood::from_food_item(item, FALLBACK_CONFIDENCE))
        .collect();

    RecognitionOutcome {
        foods,
        source: RecognitionSource::Fallback { reason },
    }
}
