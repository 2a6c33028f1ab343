// ABOUTME: Nutrition configuration for target calculation and attainment grading
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, goal deltas, macro split, status bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Every tunable number used by the macro calculator and the aggregation
//! engine. Defaults are the published values; `MACROPLAN_*` environment
//! variables override individual fields.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use macroplan_core::constants::units::{CM_PER_INCH, KG_PER_LB};
use macroplan_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition configuration root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Signed daily calorie delta per goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Protein and fat allocation rules
    pub macro_split: MacroSplitConfig,
    /// Percent-of-target bands for status grading
    pub status_bands: StatusBandsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Pounds to kilograms
    pub kg_per_lb: f64,
    /// Inches to centimeters
    pub cm_per_inch: f64,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            kg_per_lb: KG_PER_LB,
            cm_per_inch: CM_PER_INCH,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-2x/week): 1.375
    pub light: f64,
    /// Moderate (3-4x/week): 1.55
    pub moderate: f64,
    /// Active (5-6x/week): 1.725
    pub active: f64,
    /// Very active (2x/day): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier applied to BMR for the given tier
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Daily calorie delta (kcal) added to TDEE for each goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Aggressive cut: -500
    pub lose_aggressive: i64,
    /// Lean cut: -300
    pub lose: i64,
    /// Maintenance: 0
    pub maintain: i64,
    /// Lean gain: +400
    pub gain: i64,
    /// Moderate bulk: +500
    pub bulk_moderate: i64,
    /// Hard bulk: +700
    pub bulk_hard: i64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            lose_aggressive: -500,
            lose: -300,
            maintain: 0,
            gain: 400,
            bulk_moderate: 500,
            bulk_hard: 700,
        }
    }
}

impl GoalAdjustmentsConfig {
    /// Signed calorie delta for the given goal
    #[must_use]
    pub const fn delta(&self, goal: Goal) -> i64 {
        match goal {
            Goal::LoseAggressive => self.lose_aggressive,
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
            Goal::BulkModerate => self.bulk_moderate,
            Goal::BulkHard => self.bulk_hard,
        }
    }
}

/// Protein and fat allocation; carbs take the remainder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein grams per pound of bodyweight: 1.25
    pub protein_g_per_lb: f64,
    /// Share of target calories allotted to fat: 0.28
    pub fat_calorie_share: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb: 1.25,
            fat_calorie_share: 0.28,
        }
    }
}

/// Inclusive percent-of-target bands used by status grading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBandsConfig {
    /// Lower bound of the "good" band: 95
    pub good_low: i64,
    /// Upper bound of the "good" band: 105
    pub good_high: i64,
    /// Lower bound of the "close" band: 90
    pub close_low: i64,
    /// Upper bound of the "close" band: 110
    pub close_high: i64,
}

impl Default for StatusBandsConfig {
    fn default() -> Self {
        Self {
            good_low: 95,
            good_high: 105,
            close_low: 90,
            close_high: 110,
        }
    }
}

impl NutritionConfig {
    /// Process-wide configuration, loaded once
    ///
    /// Falls back to defaults when the environment holds invalid overrides.
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
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
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_fields().iter().all(|value| value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition parameters must be finite numbers",
            ));
        }

        let bmr = &self.bmr;
        if bmr.kg_per_lb <= 0.0 || bmr.cm_per_inch <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Unit conversion factors must be positive",
            ));
        }
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.goal_adjustments;
        if goals.lose_aggressive > goals.lose
            || goals.lose > goals.maintain
            || goals.maintain > goals.gain
            || goals.gain > goals.bulk_moderate
            || goals.bulk_moderate > goals.bulk_hard
        {
            return Err(ConfigError::InvalidRange(
                "Goal adjustments must be ordered from deepest deficit to largest surplus",
            ));
        }

        let split = &self.macro_split;
        if split.protein_g_per_lb <= 0.0 || split.protein_g_per_lb > 3.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be between 0 and 3 g/lb",
            ));
        }
        if split.fat_calorie_share <= 0.0 || split.fat_calorie_share >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat calorie share must be between 0 and 1",
            ));
        }

        let bands = &self.status_bands;
        if bands.close_low > bands.good_low
            || bands.good_low > bands.good_high
            || bands.good_high > bands.close_high
        {
            return Err(ConfigError::InvalidRange(
                "Status bands must nest: close_low <= good_low <= good_high <= close_high",
            ));
        }

        Ok(())
    }

    fn float_fields(&self) -> [f64; 14] {
        let bmr = &self.bmr;
        let factors = &self.activity_factors;
        [
            bmr.kg_per_lb,
            bmr.cm_per_inch,
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
            self.macro_split.protein_g_per_lb,
            self.macro_split.fat_calorie_share,
        ]
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MACROPLAN_PROTEIN_G_PER_LB",
            &mut self.macro_split.protein_g_per_lb,
        )?;
        Self::apply_env_var(
            "MACROPLAN_FAT_CALORIE_SHARE",
            &mut self.macro_split.fat_calorie_share,
        )?;

        Self::apply_env_var("MACROPLAN_STATUS_GOOD_LOW", &mut self.status_bands.good_low)?;
        Self::apply_env_var("MACROPLAN_STATUS_GOOD_HIGH", &mut self.status_bands.good_high)?;
        Self::apply_env_var("MACROPLAN_STATUS_CLOSE_LOW", &mut self.status_bands.close_low)?;
        Self::apply_env_var(
            "MACROPLAN_STATUS_CLOSE_HIGH",
            &mut self.status_bands.close_high,
        )?;

        let factors = &mut self.activity_factors;
        Self::apply_env_var("MACROPLAN_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("MACROPLAN_ACTIVITY_LIGHT", &mut factors.light)?;
        Self::apply_env_var("MACROPLAN_ACTIVITY_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("MACROPLAN_ACTIVITY_ACTIVE", &mut factors.active)?;
        Self::apply_env_var("MACROPLAN_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;

        let goals = &mut self.goal_adjustments;
        Self::apply_env_var("MACROPLAN_GOAL_LOSE_AGGRESSIVE", &mut goals.lose_aggressive)?;
        Self::apply_env_var("MACROPLAN_GOAL_LOSE", &mut goals.lose)?;
        Self::apply_env_var("MACROPLAN_GOAL_MAINTAIN", &mut goals.maintain)?;
        Self::apply_env_var("MACROPLAN_GOAL_GAIN", &mut goals.gain)?;
        Self::apply_env_var("MACROPLAN_GOAL_BULK_MODERATE", &mut goals.bulk_moderate)?;
        Self::apply_env_var("MACROPLAN_GOAL_BULK_HARD", &mut goals.bulk_hard)?;

        Ok(self)
    }
}
