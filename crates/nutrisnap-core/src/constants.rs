// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, metric validation domains, paywall limits and default profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace. Values that operators may tune (activity factors, goal
//! strategies) live in the root crate's configuration instead.

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const NUTRISNAP: &str = "nutrisnap";
    /// CLI binary name
    pub const NUTRISNAP_CLI: &str = "nutrisnap-cli";
}

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein energy density
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Accepted input domains for body metrics (inclusive bounds)
pub mod metric_limits {
    /// Minimum body weight (kg)
    pub const WEIGHT_MIN_KG: f64 = 30.0;
    /// Maximum body weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 200.0;
    /// Minimum height (cm)
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const HEIGHT_MAX_CM: f64 = 250.0;
    /// Minimum age (years)
    pub const AGE_MIN_YEARS: u32 = 10;
    /// Maximum age (years)
    pub const AGE_MAX_YEARS: u32 = 100;
}

/// BMI classification cut-offs (lower bound inclusive)
pub mod bmi {
    /// At or above: normal
    pub const NORMAL_MIN: f64 = 18.5;
    /// At or above: overweight
    pub const OVERWEIGHT_MIN: f64 = 24.0;
    /// At or above: obese
    pub const OBESE_MIN: f64 = 28.0;
}

/// Paywall defaults
pub mod paywall {
    /// Free recognitions per day before the paywall shows
    pub const FREE_TRIAL_LIMIT: u32 = 3;
}

/// Values for a freshly created profile
pub mod default_profile {
    /// Weight (kg)
    pub const WEIGHT_KG: f64 = 55.0;
    /// Height (cm)
    pub const HEIGHT_CM: f64 = 164.0;
    /// Age (years)
    pub const AGE_YEARS: u32 = 20;
    /// Daily calorie target before the user fills in their metrics
    pub const CALORIES_TARGET: i32 = 2000;
}

/// Food recognition fallback
pub mod recognition {
    /// Confidence reported for knowledge-base fallback results
    pub const FALLBACK_CONFIDENCE: f64 = 0.6;
    /// Maximum number of fallback foods returned
    pub const FALLBACK_MAX_FOODS: usize = 2;
}
