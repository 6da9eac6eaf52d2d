// ABOUTME: Calculator output models: daily nutrition targets, macro totals and deficits
// ABOUTME: Also defines the BMI category classification labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::constants::energy;

/// Daily calorie and macronutrient targets
///
/// Always recomputed from metrics; never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Target energy intake (kcal/day)
    pub calories: i32,
    /// Protein (g/day)
    pub protein: i32,
    /// Carbohydrates (g/day)
    pub carbs: i32,
    /// Fat (g/day)
    pub fat: i32,
}

impl NutritionTargets {
    /// Energy implied by the three macro targets (kcal)
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        energy::FAT_KCAL_PER_G.mul_add(
            f64::from(self.fat),
            energy::PROTEIN_KCAL_PER_G.mul_add(
                f64::from(self.protein),
                energy::CARBS_KCAL_PER_G * f64::from(self.carbs),
            ),
        )
    }

    /// Difference between macro energy and the calorie target (kcal)
    #[must_use]
    pub fn energy_gap(&self) -> f64 {
        self.macro_calories() - f64::from(self.calories)
    }
}

/// Macronutrient amounts in grams (consumed totals or food portions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Remaining grams of each macro before today's target is reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDeficit {
    /// Protein still needed (g), never negative
    pub protein: f64,
    /// Carbohydrates still needed (g), never negative
    pub carbs: f64,
    /// Fat still needed (g), never negative
    pub fat: f64,
}

/// Coarse BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 24)
    Normal,
    /// BMI in [24, 28)
    Overweight,
    /// BMI of 28 or more
    Obese,
}

impl BmiCategory {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
