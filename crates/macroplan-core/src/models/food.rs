// ABOUTME: Food reference data model for the static catalog
// ABOUTME: FoodItem with per-unit macros and FoodCategory for catalog filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Catalog grouping used for search filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Meat, fish, eggs
    Protein,
    /// Grains, rice, bread, pasta, potatoes
    Carb,
    /// Fruit
    Fruit,
    /// Vegetables
    Vegetable,
    /// Milk, yogurt, cheese
    Dairy,
    /// Nut butters, oils, avocado, seeds
    Fat,
    /// Packaged snacks and bars
    Snack,
    /// Protein powders, hydration and creatine
    Supplement,
    /// Sweeteners, sauces and condiments
    Extra,
}

impl FoodCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 9] = [
        Self::Protein,
        Self::Carb,
        Self::Fruit,
        Self::Vegetable,
        Self::Dairy,
        Self::Fat,
        Self::Snack,
        Self::Supplement,
        Self::Extra,
    ];

    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Dairy => "dairy",
            Self::Fat => "fat",
            Self::Snack => "snack",
            Self::Supplement => "supplement",
            Self::Extra => "extra",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown food category '{s}'")))
    }
}

/// A catalog food with macros for exactly one unit of `unit`
///
/// Scaling is linear: two units carry twice the macros of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique catalog key (e.g. `p1`, `c21`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit label (`oz`, `cup`, `tbsp`, `scoop`, ...)
    pub unit: String,
    /// Catalog grouping
    pub category: FoodCategory,
    /// Energy per unit (kcal)
    pub calories: f64,
    /// Protein per unit (g)
    pub protein: f64,
    /// Carbohydrates per unit (g)
    pub carbs: f64,
    /// Fat per unit (g)
    pub fat: f64,
}

impl FoodItem {
    /// Create a catalog entry
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        category: FoodCategory,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            category,
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Whether every per-unit macro is finite and non-negative
    #[must_use]
    pub fn has_valid_macros(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}
