// ABOUTME: Macronutrient total types shared by the aggregation engine and exports
// ABOUTME: MacroTotals (additive running sums) and MacroAverage (rounded weekly figures)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Realized macros for an item, meal, or day
///
/// Calories are whole kilocalories; grams keep the one-decimal precision
/// produced by item scaling. Addition is plain field-wise addition, so totals
/// are independent of item order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: i64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl MacroTotals {
    /// The additive identity
    pub const ZERO: Self = Self {
        calories: 0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    /// Whether this total contributes any energy
    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.calories > 0
    }

    /// Value of one macro
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn get(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Calories => self.calories as f64,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
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

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Weekly average with every macro rounded to a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroAverage {
    /// Average energy (kcal)
    pub calories: i64,
    /// Average protein (g)
    pub protein: i64,
    /// Average carbohydrates (g)
    pub carbs: i64,
    /// Average fat (g)
    pub fat: i64,
}

impl MacroAverage {
    /// Value of one macro
    #[must_use]
    pub const fn get(&self, nutrient: Macro) -> i64 {
        match nutrient {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }
}

/// One of the four tracked macro quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    /// Energy
    Calories,
    /// Protein grams
    Protein,
    /// Carbohydrate grams
    Carbs,
    /// Fat grams
    Fat,
}

impl Macro {
    /// All macros in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fat => "Fat",
        }
    }
}
