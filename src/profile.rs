// ABOUTME: Stored user profile record with body metrics, VIP status and calorie target
// ABOUTME: Creates default device profiles, applies validated edits and links devices to accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User profile
//!
//! Profiles are created anonymously per device and may later be linked to a
//! signed-in account. Categorical fields keep their persisted string form and
//! are parsed on use; an unrecognized stored value is an error, never a
//! silent default.

use chrono::{DateTime, Utc};
use nutrisnap_core::constants::default_profile;
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::{
    ActivityLevel, Gender, Goal, MetricViolation, NutritionTargets, PartialUserMetrics,
    UserMetrics,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::NutritionConfig;
use crate::intelligence::nutrition_calculator::{
    calculate_nutrition_targets, validate_user_metrics,
};

/// Persisted profile row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile identifier
    pub id: Uuid,
    /// Linked account, once the user signs in
    pub user_id: Option<Uuid>,
    /// Device that created the profile
    pub device_id: String,
    /// Account email for display
    pub email: Option<String>,
    /// Paid subscriber flag
    pub is_vip: bool,
    /// End of the paid period
    pub vip_expiry: Option<DateTime<Utc>>,
    /// Daily calorie target (kcal)
    pub daily_calories_target: i32,
    /// Body weight (kg)
    pub weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Age (years)
    pub age: u32,
    /// Stored gender value
    pub gender: String,
    /// Stored activity level value
    pub activity_level: String,
    /// Stored goal value
    pub goal: String,
    /// Body fat percentage; stored only
    pub body_fat: Option<f64>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Fields a user may edit; absent fields stay unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Body weight (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height (cm)
    #[serde(default)]
    pub height: Option<f64>,
    /// Age (years)
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Goal
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat: Option<f64>,
}

impl ProfileUpdate {
    fn numeric_fields(&self) -> PartialUserMetrics {
        PartialUserMetrics {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
        }
    }
}

/// Why a profile edit was rejected
#[derive(Debug, Error)]
pub enum ProfileUpdateError {
    /// One or more submitted metrics are outside their domain
    #[error("{} metric value(s) out of range", .0.len())]
    InvalidMetrics(Vec<MetricViolation>),

    /// The stored profile holds a value that cannot be interpreted
    #[error(transparent)]
    Stored(#[from] AppError),
}

impl From<ProfileUpdateError> for AppError {
    fn from(error: ProfileUpdateError) -> Self {
        match error {
            ProfileUpdateError::InvalidMetrics(violations) => {
                let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
                Self::value_out_of_range(messages.join("; "))
                    .with_details(serde_json::json!({ "violations": violations }))
            }
            ProfileUpdateError::Stored(error) => error,
        }
    }
}

impl UserProfile {
    /// Default profile for a device that has never saved one
    #[must_use]
    pub fn new_for_device(device_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            device_id: device_id.into(),
            email: None,
            is_vip: false,
            vip_expiry: None,
            daily_calories_target: default_profile::CALORIES_TARGET,
            weight: default_profile::WEIGHT_KG,
            height: default_profile::HEIGHT_CM,
            age: default_profile::AGE_YEARS,
            gender: Gender::Female.as_str().to_owned(),
            activity_level: ActivityLevel::ModeratelyActive.as_str().to_owned(),
            goal: Goal::Maintain.as_str().to_owned(),
            body_fat: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Calculator input built from the stored values
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a stored gender, activity level or goal is not recognized
    pub fn metrics(&self) -> AppResult<UserMetrics> {
        Ok(UserMetrics {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            gender: self.gender.parse()?,
            activity_level: self.activity_level.parse()?,
            goal: self.goal.parse()?,
            body_fat_percent: self.body_fat,
        })
    }

    /// Validate and apply an edit, then recompute the calorie target
    ///
    /// The profile is left untouched when the edit is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetrics` with every out-of-range field, or `Stored` when
    /// an unchanged stored value cannot be parsed
    pub fn apply_update(
        &mut self,
        update: &ProfileUpdate,
        now: DateTime<Utc>,
        config: &NutritionConfig,
    ) -> Result<NutritionTargets, ProfileUpdateError> {
        let violations = validate_user_metrics(&update.numeric_fields(), &config.validation);
        if !violations.is_empty() {
            return Err(ProfileUpdateError::InvalidMetrics(violations));
        }

        let current = self.metrics()?;
        let merged = UserMetrics {
            weight_kg: update.weight.unwrap_or(current.weight_kg),
            height_cm: update.height.unwrap_or(current.height_cm),
            age: update.age.unwrap_or(current.age),
            gender: update.gender.unwrap_or(current.gender),
            activity_level: update.activity_level.unwrap_or(current.activity_level),
            goal: update.goal.unwrap_or(current.goal),
            body_fat_percent: update.body_fat.or(current.body_fat_percent),
        };
        let targets = calculate_nutrition_targets(&merged, config);

        self.weight = merged.weight_kg;
        self.height = merged.height_cm;
        self.age = merged.age;
        self.gender = merged.gender.as_str().to_owned();
        self.activity_level = merged.activity_level.as_str().to_owned();
        self.goal = merged.goal.as_str().to_owned();
        self.body_fat = merged.body_fat_percent;
        self.daily_calories_target = targets.calories;
        self.updated_at = now;

        info!(
            profile_id = %self.id,
            calories = targets.calories,
            "Profile metrics updated"
        );
        Ok(targets)
    }

    /// Attach an anonymous profile to a signed-in account
    ///
    /// Returns `false` and changes nothing if the profile is already linked.
    pub fn link_to_user(&mut self, user_id: Uuid, email: Option<String>) -> bool {
        if self.user_id.is_some() {
            return false;
        }
        self.user_id = Some(user_id);
        self.email = email;
        info!(profile_id = %self.id, %user_id, "Linked device profile to user");
        true
    }

    /// Whether the subscription is in effect at `now`
    ///
    /// A VIP flag without an expiry never lapses.
    #[must_use]
    pub fn has_active_vip(&self, now: DateTime<Utc>) -> bool {
        self.is_vip && self.vip_expiry.is_none_or(|expiry| expiry > now)
    }
}
