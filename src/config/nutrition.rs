// ABOUTME: Nutrition configuration for target calculation, input validation, and usage limits
// ABOUTME: Configures BMR coefficients, activity factors, goal strategies, and paywall allowance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Provides the tunable constants behind the nutrition target calculator.
//! Defaults reproduce the product's published strategy exactly; environment
//! variables may override individual values at startup.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use nutrisnap_core::constants::{metric_limits, paywall};
use nutrisnap_core::models::{ActivityLevel, Gender, Goal, MetricField};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition configuration root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Per-goal calorie adjustment and macro parameters
    pub goals: GoalStrategiesConfig,
    /// Accepted input domains for body metrics
    pub validation: MetricValidationConfig,
    /// Free usage allowance
    pub paywall: PaywallConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
/// expenditure. American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Gender-specific constant
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Professional athlete: 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity tier
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Calorie adjustment and macro parameters for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalParameters {
    /// Added to TDEE (kcal/day); negative for a deficit
    pub calorie_adjustment: f64,
    /// Protein target per kg of body weight (g/kg)
    pub protein_per_kg: f64,
    /// Share of target calories allotted to fat (0-1)
    pub fat_ratio: f64,
}

/// Goal strategy table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStrategiesConfig {
    /// Muscle gain: TDEE + 400, 1.8 g/kg protein, 20% fat
    pub gain_muscle: GoalParameters,
    /// Fat loss: TDEE - 500, 2.0 g/kg protein, 25% fat
    pub lose_fat: GoalParameters,
    /// Maintenance: TDEE, 1.2 g/kg protein, 25% fat
    pub maintain: GoalParameters,
}

impl GoalStrategiesConfig {
    /// Parameters for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> &GoalParameters {
        match goal {
            Goal::GainMuscle => &self.gain_muscle,
            Goal::LoseFat => &self.lose_fat,
            Goal::Maintain => &self.maintain,
        }
    }
}

impl Default for GoalStrategiesConfig {
    fn default() -> Self {
        Self {
            gain_muscle: GoalParameters {
                calorie_adjustment: 400.0,
                protein_per_kg: 1.8,
                fat_ratio: 0.20,
            },
            lose_fat: GoalParameters {
                calorie_adjustment: -500.0,
                protein_per_kg: 2.0,
                fat_ratio: 0.25,
            },
            maintain: GoalParameters {
                calorie_adjustment: 0.0,
                protein_per_kg: 1.2,
                fat_ratio: 0.25,
            },
        }
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLimit {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl RangeLimit {
    /// Whether `value` lies within the bounds
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Accepted domains for user-entered metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValidationConfig {
    /// Body weight (kg)
    pub weight: RangeLimit,
    /// Height (cm)
    pub height: RangeLimit,
    /// Age (years)
    pub age: RangeLimit,
}

impl MetricValidationConfig {
    /// Bounds for a field
    #[must_use]
    pub const fn range(&self, field: MetricField) -> RangeLimit {
        match field {
            MetricField::Weight => self.weight,
            MetricField::Height => self.height,
            MetricField::Age => self.age,
        }
    }
}

impl Default for MetricValidationConfig {
    fn default() -> Self {
        Self {
            weight: RangeLimit {
                min: metric_limits::WEIGHT_MIN_KG,
                max: metric_limits::WEIGHT_MAX_KG,
            },
            height: RangeLimit {
                min: metric_limits::HEIGHT_MIN_CM,
                max: metric_limits::HEIGHT_MAX_CM,
            },
            age: RangeLimit {
                min: f64::from(metric_limits::AGE_MIN_YEARS),
                max: f64::from(metric_limits::AGE_MAX_YEARS),
            },
        }
    }
}

/// Free usage allowance before the paywall applies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaywallConfig {
    /// Food recognitions allowed per day for non-VIP users
    pub free_trial_limit: u32,
}

impl Default for PaywallConfig {
    fn default() -> Self {
        Self {
            free_trial_limit: paywall::FREE_TRIAL_LIMIT,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| factors.factor(pair[0]) < factors.factor(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        for goal in [Goal::GainMuscle, Goal::LoseFat, Goal::Maintain] {
            let params = self.goals.for_goal(goal);
            if params.protein_per_kg <= 0.0 || params.protein_per_kg > 4.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein per kg must be in (0, 4]",
                ));
            }
            if params.fat_ratio <= 0.0 || params.fat_ratio >= 1.0 {
                return Err(ConfigError::ValueOutOfRange("Fat ratio must be in (0, 1)"));
            }
        }

        for field in [MetricField::Weight, MetricField::Height, MetricField::Age] {
            let range = self.validation.range(field);
            if range.min >= range.max {
                return Err(ConfigError::InvalidRange(
                    "Metric validation minimum must be below maximum",
                ));
            }
        }

        if self.paywall.free_trial_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Free trial limit must be at least 1",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    fn apply_goal_env(prefix: &str, params: &mut GoalParameters) -> Result<(), ConfigError> {
        Self::apply_env_var(
            &format!("NUTRITION_{prefix}_CALORIE_ADJUSTMENT"),
            &mut params.calorie_adjustment,
        )?;
        Self::apply_env_var(
            &format!("NUTRITION_{prefix}_PROTEIN_PER_KG"),
            &mut params.protein_per_kg,
        )?;
        Self::apply_env_var(
            &format!("NUTRITION_{prefix}_FAT_RATIO"),
            &mut params.fat_ratio,
        )
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRITION_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_env_var("NUTRITION_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_env_var("NUTRITION_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_env_var(
            "NUTRITION_BMR_MALE_CONSTANT",
            &mut self.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "NUTRITION_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        Self::apply_env_var(
            "NUTRITION_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        Self::apply_goal_env("GAIN", &mut self.goals.gain_muscle)?;
        Self::apply_goal_env("LOSE", &mut self.goals.lose_fat)?;
        Self::apply_goal_env("MAINTAIN", &mut self.goals.maintain)?;

        Self::apply_env_var(
            "NUTRITION_PAYWALL_FREE_TRIAL_LIMIT",
            &mut self.paywall.free_trial_limit,
        )?;

        Ok(self)
    }
}
