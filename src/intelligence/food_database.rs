// ABOUTME: Hand-authored food knowledge base for lookup, portion scaling and suggestions
// ABOUTME: Covers convenience store, canteen and takeout staples with per-100g nutrient profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Knowledge Base
//!
//! A small, curated table of foods commonly eaten by the app's users. It backs
//! fast text search, portion nutrition estimates, scenario-based suggestions and
//! the fallback path when the vision model cannot produce a usable answer.
//!
//! Each entry lists its localized name among the aliases so names returned by
//! the vision model can be matched directly.

use std::fmt;
use std::str::FromStr;

use nutrisnap_core::errors::{AppError, AppResult};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Descriptive tag attached to a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodTag {
    /// Protein-dense
    HighProtein,
    /// Some protein, not dense
    Protein,
    /// Low fat
    LowFat,
    /// Low carbohydrate
    LowCarb,
    /// Low energy density
    LowCalorie,
    /// Sold at convenience stores
    ConvenienceStore,
    /// Served in canteens
    Canteen,
    /// Available for takeout delivery
    Takeout,
    /// Suits a muscle gain plan
    MuscleGain,
    /// Suits a fat loss plan
    FatLoss,
    /// Breakfast item
    Breakfast,
    /// Carbohydrate staple
    Staple,
    /// Whole grain or coarse grain
    WholeGrain,
    /// Vegetable dish
    Vegetable,
    /// Vegetarian
    Vegetarian,
    /// Fruit
    Fruit,
    /// Pre/post workout snack
    Workout,
}

impl FoodTag {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighProtein => "high_protein",
            Self::Protein => "protein",
            Self::LowFat => "low_fat",
            Self::LowCarb => "low_carb",
            Self::LowCalorie => "low_calorie",
            Self::ConvenienceStore => "convenience_store",
            Self::Canteen => "canteen",
            Self::Takeout => "takeout",
            Self::MuscleGain => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::Breakfast => "breakfast",
            Self::Staple => "staple",
            Self::WholeGrain => "whole_grain",
            Self::Vegetable => "vegetable",
            Self::Vegetarian => "vegetarian",
            Self::Fruit => "fruit",
            Self::Workout => "workout",
        }
    }

    /// Human-readable label used in tips and search
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighProtein => "high protein",
            Self::Protein => "protein",
            Self::LowFat => "low fat",
            Self::LowCarb => "low carb",
            Self::LowCalorie => "low calorie",
            Self::ConvenienceStore => "convenience store",
            Self::Canteen => "canteen",
            Self::Takeout => "takeout",
            Self::MuscleGain => "muscle gain",
            Self::FatLoss => "fat loss",
            Self::Breakfast => "breakfast",
            Self::Staple => "staple",
            Self::WholeGrain => "whole grain",
            Self::Vegetable => "vegetable",
            Self::Vegetarian => "vegetarian",
            Self::Fruit => "fruit",
            Self::Workout => "workout",
        }
    }
}

impl fmt::Display for FoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy and macronutrients per 100 g
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProfile {
    /// kcal
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// One knowledge base entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Food group
    pub category: &'static str,
    /// Standard serving (g)
    pub serving_size_g: f64,
    /// Nutrients per 100 g
    pub per_100g: NutrientProfile,
    /// Descriptive tags
    pub tags: &'static [FoodTag],
    /// Alternative names, including localized ones
    pub aliases: &'static [&'static str],
}

impl FoodItem {
    /// Whether the item carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: FoodTag) -> bool {
        self.tags.contains(&tag)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(needle))
            || self
                .tags
                .iter()
                .any(|tag| tag.as_str().contains(needle) || tag.label().contains(needle))
    }
}

/// Nutrition of a specific portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionNutrition {
    /// Portion weight (g)
    pub weight_g: f64,
    /// kcal, rounded to whole kcal
    pub calories: f64,
    /// Protein (g, 1 decimal)
    pub protein: f64,
    /// Carbohydrates (g, 1 decimal)
    pub carbs: f64,
    /// Fat (g, 1 decimal)
    pub fat: f64,
}

/// Eating context chosen by the user before taking a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Convenience store shelf
    ConvenienceStore,
    /// Workplace or school canteen
    Canteen,
    /// Delivery order
    Takeout,
}

impl Scenario {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConvenienceStore => "convenience_store",
            Self::Canteen => "canteen",
            Self::Takeout => "takeout",
        }
    }

    /// Tag selecting the scenario's foods
    #[must_use]
    pub const fn tag(self) -> FoodTag {
        match self {
            Self::ConvenienceStore => FoodTag::ConvenienceStore,
            Self::Canteen => FoodTag::Canteen,
            Self::Takeout => FoodTag::Takeout,
        }
    }

    /// Static eating advice for the scenario
    #[must_use]
    pub const fn guide(self) -> &'static ScenarioGuide {
        match self {
            Self::ConvenienceStore => &CONVENIENCE_STORE_GUIDE,
            Self::Canteen => &CANTEEN_GUIDE,
            Self::Takeout => &TAKEOUT_GUIDE,
        }
    }
}

impl FromStr for Scenario {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "convenience_store" | "便利店" => Ok(Self::ConvenienceStore),
            "canteen" | "食堂" => Ok(Self::Canteen),
            "takeout" | "外卖" => Ok(Self::Takeout),
            other => Err(AppError::invalid_input(format!("Unknown scenario: '{other}'"))),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to pick and what to skip in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioGuide {
    /// Recommended choices
    pub recommended: &'static [&'static str],
    /// Practical tips
    pub tips: &'static [&'static str],
    /// Choices to avoid
    pub avoid: &'static [&'static str],
}

static CONVENIENCE_STORE_GUIDE: ScenarioGuide = ScenarioGuide {
    recommended: &[
        "Ready-to-eat chicken breast strips",
        "Tea eggs",
        "Unsweetened soy milk",
        "Skim milk",
        "Egg sandwich",
        "Oden (radish, konjac)",
        "Vegetable salad",
        "Unsweetened yogurt",
    ],
    tips: &[],
    avoid: &["Fried chicken", "Hot dogs", "Instant noodles", "Sweet buns"],
};

static CANTEEN_GUIDE: ScenarioGuide = ScenarioGuide {
    recommended: &[
        "Stir-fried seasonal greens",
        "Tomato and egg stir-fry",
        "Steamed fish",
        "Seaweed and egg soup",
        "Smashed cucumber salad",
    ],
    tips: &[
        "Skip braised and deep-fried dishes",
        "Choose mixed-grain rice or corn as the staple",
        "Ask for less oil",
        "Prefer clear soups",
    ],
    avoid: &[
        "Red-braised pork",
        "Fried chicken cutlet",
        "Spicy dry pot",
        "Heavy oil and salt dishes",
    ],
};

static TAKEOUT_GUIDE: ScenarioGuide = ScenarioGuide {
    recommended: &[
        "Light salad bowls",
        "Japanese sashimi or sushi",
        "Vietnamese rice noodles",
        "Grilled chicken burger",
    ],
    tips: &[
        "Choose steamed or boiled over fried",
        "Add a note asking for less oil and salt",
        "Halve the staple or switch to whole grains",
    ],
    avoid: &[
        "Fried chicken delivery",
        "Chongqing spicy noodles",
        "Oily spicy hot pot",
        "Milk tea and desserts",
    ],
};

const fn profile(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutrientProfile {
    NutrientProfile {
        calories,
        protein,
        carbs,
        fat,
    }
}

/// The knowledge base, in display order
pub static FOOD_DATABASE: &[FoodItem] = &[
    // Convenience store: protein sources
    FoodItem {
        id: "chicken_breast",
        name: "Chicken breast",
        category: "meat",
        serving_size_g: 200.0,
        per_100g: profile(110.0, 23.0, 0.0, 1.5),
        tags: &[
            FoodTag::HighProtein,
            FoodTag::LowFat,
            FoodTag::ConvenienceStore,
            FoodTag::MuscleGain,
        ],
        aliases: &["鸡胸肉", "鸡肉", "鸡胸", "chicken"],
    },
    FoodItem {
        id: "boiled_egg",
        name: "Boiled egg",
        category: "eggs",
        serving_size_g: 50.0,
        per_100g: profile(155.0, 13.0, 1.1, 11.0),
        tags: &[FoodTag::HighProtein, FoodTag::ConvenienceStore, FoodTag::Breakfast],
        aliases: &["水煮蛋", "鸡蛋", "煮鸡蛋", "白煮蛋", "egg"],
    },
    FoodItem {
        id: "tea_egg",
        name: "Tea egg",
        category: "eggs",
        serving_size_g: 50.0,
        per_100g: profile(144.0, 13.0, 1.5, 10.0),
        tags: &[FoodTag::HighProtein, FoodTag::ConvenienceStore],
        aliases: &["茶叶蛋", "卤蛋", "marbled egg"],
    },
    FoodItem {
        id: "milk",
        name: "Whole milk",
        category: "dairy",
        serving_size_g: 250.0,
        per_100g: profile(54.0, 3.4, 5.0, 3.2),
        tags: &[FoodTag::ConvenienceStore, FoodTag::Breakfast, FoodTag::Protein],
        aliases: &["纯牛奶", "牛奶", "鲜奶", "milk"],
    },
    FoodItem {
        id: "greek_yogurt",
        name: "Greek yogurt",
        category: "dairy",
        serving_size_g: 150.0,
        per_100g: profile(97.0, 10.0, 3.6, 5.0),
        tags: &[FoodTag::HighProtein, FoodTag::ConvenienceStore, FoodTag::LowCarb],
        aliases: &["希腊酸奶", "酸奶", "优格", "yogurt"],
    },
    // Convenience store: staples
    FoodItem {
        id: "whole_wheat_bread",
        name: "Whole wheat bread",
        category: "staple",
        serving_size_g: 100.0,
        per_100g: profile(247.0, 13.0, 41.0, 3.4),
        tags: &[FoodTag::ConvenienceStore, FoodTag::Staple, FoodTag::WholeGrain],
        aliases: &["全麦面包", "面包", "bread"],
    },
    FoodItem {
        id: "sweet_potato",
        name: "Roasted sweet potato",
        category: "staple",
        serving_size_g: 200.0,
        per_100g: profile(90.0, 2.0, 21.0, 0.2),
        tags: &[
            FoodTag::ConvenienceStore,
            FoodTag::Staple,
            FoodTag::LowFat,
            FoodTag::WholeGrain,
        ],
        aliases: &["烤红薯", "红薯", "地瓜", "yam"],
    },
    FoodItem {
        id: "corn",
        name: "Corn on the cob",
        category: "staple",
        serving_size_g: 200.0,
        per_100g: profile(96.0, 3.4, 21.0, 1.5),
        tags: &[FoodTag::ConvenienceStore, FoodTag::Staple, FoodTag::WholeGrain],
        aliases: &["玉米", "甜玉米", "水果玉米", "sweet corn"],
    },
    FoodItem {
        id: "instant_oats",
        name: "Instant oats",
        category: "staple",
        serving_size_g: 40.0,
        per_100g: profile(367.0, 13.0, 67.0, 6.9),
        tags: &[
            FoodTag::ConvenienceStore,
            FoodTag::Staple,
            FoodTag::WholeGrain,
            FoodTag::Breakfast,
        ],
        aliases: &["燕麦片", "麦片", "即食燕麦", "oatmeal"],
    },
    // Canteen: staples
    FoodItem {
        id: "white_rice",
        name: "Steamed white rice",
        category: "staple",
        serving_size_g: 200.0,
        per_100g: profile(130.0, 2.6, 28.0, 0.3),
        tags: &[FoodTag::Canteen, FoodTag::Staple],
        aliases: &["白米饭", "米饭", "大米饭", "rice"],
    },
    FoodItem {
        id: "brown_rice",
        name: "Brown rice",
        category: "staple",
        serving_size_g: 200.0,
        per_100g: profile(111.0, 2.6, 23.0, 0.9),
        tags: &[FoodTag::Canteen, FoodTag::Staple, FoodTag::WholeGrain],
        aliases: &["糙米饭", "糙米"],
    },
    FoodItem {
        id: "steamed_bun",
        name: "Steamed bun",
        category: "staple",
        serving_size_g: 100.0,
        per_100g: profile(221.0, 7.0, 47.0, 1.1),
        tags: &[FoodTag::Canteen, FoodTag::Staple],
        aliases: &["馒头", "白馒头", "mantou"],
    },
    // Canteen: dishes
    FoodItem {
        id: "stir_fry_veg",
        name: "Stir-fried greens",
        category: "vegetable",
        serving_size_g: 150.0,
        per_100g: profile(60.0, 2.0, 8.0, 2.0),
        tags: &[FoodTag::Canteen, FoodTag::LowCalorie, FoodTag::Vegetable],
        aliases: &["清炒时蔬", "青菜", "炒菜", "greens"],
    },
    FoodItem {
        id: "braised_tofu",
        name: "Braised tofu",
        category: "soy",
        serving_size_g: 150.0,
        per_100g: profile(120.0, 8.0, 4.0, 8.0),
        tags: &[FoodTag::Canteen, FoodTag::Protein, FoodTag::Vegetarian],
        aliases: &["红烧豆腐", "豆腐", "tofu"],
    },
    FoodItem {
        id: "steamed_fish",
        name: "Steamed fish",
        category: "seafood",
        serving_size_g: 150.0,
        per_100g: profile(100.0, 20.0, 0.0, 2.0),
        tags: &[FoodTag::Canteen, FoodTag::HighProtein, FoodTag::LowFat],
        aliases: &["清蒸鱼", "鱼", "蒸鱼", "fish"],
    },
    FoodItem {
        id: "chicken_drumstick",
        name: "Chicken drumstick",
        category: "meat",
        serving_size_g: 150.0,
        per_100g: profile(181.0, 18.0, 0.0, 12.0),
        tags: &[FoodTag::Canteen, FoodTag::HighProtein],
        aliases: &["鸡腿", "烤鸡腿", "炸鸡腿", "drumstick"],
    },
    // Takeout
    FoodItem {
        id: "chicken_salad",
        name: "Chicken breast salad",
        category: "light_meal",
        serving_size_g: 300.0,
        per_100g: profile(85.0, 12.0, 5.0, 2.5),
        tags: &[
            FoodTag::Takeout,
            FoodTag::FatLoss,
            FoodTag::HighProtein,
            FoodTag::LowCalorie,
        ],
        aliases: &["鸡胸肉沙拉", "沙拉", "轻食", "salad"],
    },
    FoodItem {
        id: "beef_noodles",
        name: "Beef noodle soup",
        category: "noodles",
        serving_size_g: 500.0,
        per_100g: profile(120.0, 8.0, 18.0, 2.0),
        tags: &[FoodTag::Takeout, FoodTag::Staple],
        aliases: &["牛肉面", "面条", "拉面", "noodles"],
    },
    FoodItem {
        id: "fried_rice",
        name: "Egg fried rice",
        category: "rice",
        serving_size_g: 350.0,
        per_100g: profile(180.0, 5.0, 28.0, 5.0),
        tags: &[FoodTag::Takeout, FoodTag::Staple],
        aliases: &["蛋炒饭", "炒饭"],
    },
    // Snacks
    FoodItem {
        id: "banana",
        name: "Banana",
        category: "fruit",
        serving_size_g: 100.0,
        per_100g: profile(89.0, 1.1, 23.0, 0.3),
        tags: &[FoodTag::ConvenienceStore, FoodTag::Fruit, FoodTag::Workout],
        aliases: &["香蕉", "芭蕉"],
    },
    FoodItem {
        id: "apple",
        name: "Apple",
        category: "fruit",
        serving_size_g: 200.0,
        per_100g: profile(52.0, 0.3, 14.0, 0.2),
        tags: &[FoodTag::ConvenienceStore, FoodTag::Fruit, FoodTag::LowCalorie],
        aliases: &["苹果"],
    },
    FoodItem {
        id: "protein_bar",
        name: "Protein bar",
        category: "supplement",
        serving_size_g: 60.0,
        per_100g: profile(380.0, 30.0, 40.0, 10.0),
        tags: &[
            FoodTag::ConvenienceStore,
            FoodTag::HighProtein,
            FoodTag::Workout,
            FoodTag::MuscleGain,
        ],
        aliases: &["蛋白棒", "能量棒", "energy bar"],
    },
];

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Search by name, alias or tag (case-insensitive substring match)
///
/// Results keep knowledge base order. An empty query matches every entry.
#[must_use]
pub fn search_food(query: &str) -> Vec<&'static FoodItem> {
    let needle = query.trim().to_lowercase();
    FOOD_DATABASE
        .iter()
        .filter(|item| item.matches(&needle))
        .collect()
}

/// Look up an entry by id
///
/// # Errors
///
/// Returns `ResourceNotFound` when no entry has this id
pub fn food_by_id(id: &str) -> AppResult<&'static FoodItem> {
    FOOD_DATABASE
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::not_found(format!("Food '{id}'")).with_resource_id(id))
}

/// Scale an entry's per-100g profile to a portion weight
///
/// Calories are rounded to whole kcal, macros to one decimal.
#[must_use]
pub fn nutrition_for_weight(item: &FoodItem, weight_g: f64) -> PortionNutrition {
    let factor = weight_g / 100.0;
    PortionNutrition {
        weight_g,
        calories: (item.per_100g.calories * factor).round(),
        protein: round_to_tenth(item.per_100g.protein * factor),
        carbs: round_to_tenth(item.per_100g.carbs * factor),
        fat: round_to_tenth(item.per_100g.fat * factor),
    }
}

/// All entries carrying a tag
#[must_use]
pub fn foods_by_tag(tag: FoodTag) -> Vec<&'static FoodItem> {
    FOOD_DATABASE.iter().filter(|item| item.has_tag(tag)).collect()
}

/// Random distinct suggestions for a scenario
///
/// Without a scenario the whole knowledge base is the pool. Returns
/// `min(count, pool size)` entries.
pub fn suggested_foods<R: Rng + ?Sized>(
    scenario: Option<Scenario>,
    count: usize,
    rng: &mut R,
) -> Vec<&'static FoodItem> {
    let pool: Vec<&'static FoodItem> =
        scenario.map_or_else(|| FOOD_DATABASE.iter().collect(), |s| foods_by_tag(s.tag()));
    pool.choose_multiple(rng, count).copied().collect()
}
