// ABOUTME: Athlete biometric enumerations and the derived daily Targets record
// ABOUTME: Gender, ActivityLevel, Goal with strict tag parsing, plus Targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::macros::Macro;

/// Selects the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

/// Activity tier used for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Training 1-2x per week
    Light,
    /// Training 3-4x per week
    Moderate,
    /// Training 5-6x per week
    Active,
    /// Training twice a day
    VeryActive,
}

/// Body-composition goal carrying a signed daily calorie delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Aggressive cut
    LoseAggressive,
    /// Lean cut
    Lose,
    /// Hold weight
    Maintain,
    /// Lean gain
    Gain,
    /// Moderate bulk
    BulkModerate,
    /// Hard bulk
    BulkHard,
}

impl Gender {
    /// All variants
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ActivityLevel {
    /// All tiers from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "veryActive",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little/no exercise)",
            Self::Light => "Light (1-2x/week)",
            Self::Moderate => "Moderate (3-4x/week)",
            Self::Active => "Active (5-6x/week)",
            Self::VeryActive => "Very Active (2x/day)",
        }
    }
}

impl Goal {
    /// All tiers from deepest deficit to largest surplus
    pub const ALL: [Self; 6] = [
        Self::LoseAggressive,
        Self::Lose,
        Self::Maintain,
        Self::Gain,
        Self::BulkModerate,
        Self::BulkHard,
    ];

    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseAggressive => "loseAggressive",
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
            Self::BulkModerate => "bulkModerate",
            Self::BulkHard => "bulkHard",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoseAggressive => "Lose Weight (-500 cal)",
            Self::Lose => "Lean Cut (-300 cal)",
            Self::Maintain => "Maintain Weight",
            Self::Gain => "Lean Gain (+400 cal)",
            Self::BulkModerate => "Moderate Bulk (+500 cal)",
            Self::BulkHard => "Hard Bulk (+700 cal)",
        }
    }

    /// Protocol heading used on exported plans
    #[must_use]
    pub const fn protocol_label(&self) -> &'static str {
        match self {
            Self::Gain | Self::BulkModerate | Self::BulkHard => "Weight Gain Protocol",
            Self::Lose | Self::LoseAggressive => "Weight Loss Protocol",
            Self::Maintain => "Maintenance Protocol",
        }
    }
}

macro_rules! impl_tag_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| {
                        AppError::invalid_input(format!("Unknown {} '{s}'", $kind))
                            .with_details(serde_json::json!({
                                "accepted": Self::ALL.iter().map(Self::as_str).collect::<Vec<_>>(),
                            }))
                    })
            }
        }
    };
}

impl_tag_traits!(Gender, "gender");
impl_tag_traits!(ActivityLevel, "activity level");
impl_tag_traits!(Goal, "goal");

/// Daily calorie and macro targets derived from an athlete's biometrics
///
/// Each field is rounded independently, so `protein*4 + carbs*4 + fat*9`
/// may differ from `calories` by a few kcal. Carbs are not clamped and can
/// be negative for extreme inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    /// Basal metabolic rate (kcal/day)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i64,
    /// Goal-adjusted calorie target (kcal/day)
    pub calories: i64,
    /// Protein target (g/day)
    pub protein: i64,
    /// Carbohydrate target (g/day)
    pub carbs: i64,
    /// Fat target (g/day)
    pub fat: i64,
}

impl Targets {
    /// Target for one macro
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

/// The inputs every target calculation needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biometrics {
    /// Body weight (lb)
    pub weight_lbs: f64,
    /// Height in total inches
    pub height_inches: u32,
    /// Age in years
    pub age: u32,
    /// Selects the BMR constant
    pub gender: Gender,
    /// TDEE multiplier tier
    pub activity_level: ActivityLevel,
    /// Calorie delta tier
    pub goal: Goal,
}
