// ABOUTME: NutriSnap CLI - command-line access to the nutrition calculator and food knowledge base
// ABOUTME: Computes targets, checks metrics and searches foods, printing JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily targets for a user
//! nutrisnap-cli targets --weight 70 --height 175 --age 30 --gender male \
//!     --activity moderately_active --goal lose_fat
//!
//! # BMI and its category
//! nutrisnap-cli bmi --weight 70 --height 175
//!
//! # Check metrics before saving a profile
//! nutrisnap-cli validate --weight 250 --age 5
//!
//! # Food knowledge base
//! nutrisnap-cli foods search egg
//! nutrisnap-cli foods show chicken_breast --grams 150
//! nutrisnap-cli foods suggest --scenario canteen --count 3
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutrisnap::config::NutritionConfig;
use nutrisnap::errors::{AppError, AppResult};
use nutrisnap::intelligence::Scenario;
use nutrisnap::logging::LoggingConfig;
use nutrisnap::models::{ActivityLevel, Gender, Goal, UserMetrics};

#[derive(Parser)]
#[command(
    name = "nutrisnap-cli",
    about = "NutriSnap nutrition calculator CLI",
    long_about = "Command-line access to the NutriSnap nutrition target calculator and food knowledge base. All output is JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate daily calorie and macro targets
    Targets {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Gender (male, female)
        #[arg(long)]
        gender: Gender,

        /// Activity level (sedentary, lightly_active, moderately_active, very_active, extra_active)
        #[arg(long)]
        activity: ActivityLevel,

        /// Goal (gain_muscle, lose_fat, maintain)
        #[arg(long)]
        goal: Goal,
    },

    /// Calculate BMI and its category
    Bmi {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,
    },

    /// Check body metrics against their accepted ranges
    Validate {
        /// Body weight (kg)
        #[arg(long)]
        weight: Option<f64>,

        /// Height (cm)
        #[arg(long)]
        height: Option<f64>,

        /// Age (years)
        #[arg(long)]
        age: Option<u32>,
    },

    /// Food knowledge base commands
    Foods {
        #[command(subcommand)]
        action: FoodsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodsCommand {
    /// Search foods by name, alias or tag
    Search {
        /// Search text
        query: String,
    },

    /// Show one food, optionally scaled to a portion
    Show {
        /// Food identifier (e.g., "`chicken_breast`")
        id: String,

        /// Portion weight in grams (defaults to the standard serving)
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Suggest random foods for an eating scenario
    Suggest {
        /// Scenario (`convenience_store`, canteen, takeout)
        #[arg(long)]
        scenario: Option<Scenario>,

        /// Number of suggestions
        #[arg(long, default_value = "3")]
        count: usize,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    let config = NutritionConfig::global();

    match cli.command {
        Command::Targets {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
        } => {
            let metrics = UserMetrics {
                weight_kg: weight,
                height_cm: height,
                age,
                gender,
                activity_level: activity,
                goal,
                body_fat_percent: None,
            };
            commands::targets::targets(config, &metrics)?;
        }
        Command::Bmi { weight, height } => {
            commands::targets::bmi(weight, height)?;
        }
        Command::Validate {
            weight,
            height,
            age,
        } => {
            commands::targets::validate(config, weight, height, age)?;
        }
        Command::Foods { action } => match action {
            FoodsCommand::Search { query } => {
                commands::foods::search(&query)?;
            }
            FoodsCommand::Show { id, grams } => {
                commands::foods::show(&id, grams)?;
            }
            FoodsCommand::Suggest { scenario, count } => {
                commands::foods::suggest(scenario, count)?;
            }
        },
    }

    Ok(())
}
