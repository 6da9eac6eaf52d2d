// ABOUTME: Body metric models used as calculator input
// ABOUTME: Gender, ActivityLevel, Goal enums with stored-string parsing plus UserMetrics records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::metric_limits;
use crate::errors::AppError;

/// Biological sex used for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl Gender {
    /// Canonical stored identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Profiles written by the mobile client store the localized label
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown gender: '{other}'"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity tier, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 times per week
    LightlyActive,
    /// Exercise 3-5 times per week
    ModeratelyActive,
    /// Exercise 6-7 times per week
    VeryActive,
    /// Professional athlete
    ExtraActive,
}

impl ActivityLevel {
    /// Every tier in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Canonical stored identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sedentary" | "久坐 (几乎不运动)" => Ok(Self::Sedentary),
            "lightly_active" | "轻度活动 (每周1-3次)" => Ok(Self::LightlyActive),
            "moderately_active" | "中度活动 (每周3-5次)" => Ok(Self::ModeratelyActive),
            "very_active" | "高度活动 (每周6-7次)" => Ok(Self::VeryActive),
            "extra_active" | "专业运动员" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body composition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric surplus with elevated protein
    GainMuscle,
    /// Caloric deficit with protein preservation
    LoseFat,
    /// Energy balance
    Maintain,
}

impl Goal {
    /// Canonical stored identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GainMuscle => "gain_muscle",
            Self::LoseFat => "lose_fat",
            Self::Maintain => "maintain",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gain_muscle" | "增肌" => Ok(Self::GainMuscle),
            "lose_fat" | "减脂" => Ok(Self::LoseFat),
            "maintain" | "维持" => Ok(Self::Maintain),
            other => Err(AppError::invalid_input(format!("Unknown goal: '{other}'"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete body metrics for one target calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR offset
    pub gender: Gender,
    /// Activity tier for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Goal for calorie adjustment and macro split
    pub goal: Goal,
    /// Body fat percentage, stored but not used by any formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

/// Subset of metrics submitted for validation (e.g. a partial profile edit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialUserMetrics {
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
}

impl From<&UserMetrics> for PartialUserMetrics {
    fn from(metrics: &UserMetrics) -> Self {
        Self {
            weight_kg: Some(metrics.weight_kg),
            height_cm: Some(metrics.height_cm),
            age: Some(metrics.age),
        }
    }
}

/// A numeric metric that has a validation domain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    /// Body weight
    Weight,
    /// Height
    Height,
    /// Age
    Age,
}

impl MetricField {
    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height => "cm",
            Self::Age => "years",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Height => "Height",
            Self::Age => "Age",
        }
    }

    /// Default inclusive domain `(min, max)`
    #[must_use]
    pub fn default_range(self) -> (f64, f64) {
        match self {
            Self::Weight => (metric_limits::WEIGHT_MIN_KG, metric_limits::WEIGHT_MAX_KG),
            Self::Height => (metric_limits::HEIGHT_MIN_CM, metric_limits::HEIGHT_MAX_CM),
            Self::Age => (
                f64::from(metric_limits::AGE_MIN_YEARS),
                f64::from(metric_limits::AGE_MAX_YEARS),
            ),
        }
    }
}

/// One out-of-domain metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricViolation {
    /// Offending field
    pub field: MetricField,
    /// Submitted value
    pub value: f64,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl fmt::Display for MetricViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {}-{} {}",
            self.field.label(),
            self.min,
            self.max,
            self.field.unit()
        )
    }
}
