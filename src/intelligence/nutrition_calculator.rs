// ABOUTME: Nutrition calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: BMR, TDEE, goal-adjusted daily targets, and per-item realized macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Turns athlete biometrics into daily calorie and macro targets, and a food
//! quantity into realized macros. Every rounding step is half-up.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use macroplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{
    coerce_quantity, ActivityLevel, Biometrics, Gender, MacroTotals, Targets,
};
use tracing::debug;

use crate::catalog::FoodResolution;
use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use crate::utils::rounding::{round_half_up, round_to_tenth};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Imperial inputs are converted with the exact factors in `config`. The
/// result is rounded half-up.
///
/// # Errors
///
/// Returns `InvalidInput` if weight is not a positive finite number or age is zero
pub fn calculate_bmr(
    weight_lbs: f64,
    height_inches: u32,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<i64> {
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of pounds, got {weight_lbs}"
        )));
    }
    if age == 0 {
        return Err(AppError::invalid_input("Age must be at least 1 year"));
    }

    let weight_kg = weight_lbs * config.kg_per_lb;
    let height_cm = f64::from(height_inches) * config.cm_per_inch;

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    Ok(round_half_up(
        weight_component + height_component + age_component + gender_constant,
    ))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor, rounded half-up
#[must_use]
pub fn calculate_tdee(bmr: i64, level: ActivityLevel, config: &ActivityFactorsConfig) -> i64 {
    round_half_up(bmr as f64 * config.multiplier(level))
}

/// Calculate daily targets from biometrics
///
/// BMR, then TDEE, then the goal delta. Protein is a fixed grams-per-pound,
/// fat a fixed share of calories, carbs the remainder. Each figure is rounded
/// on its own, so the macro energy need not sum exactly to `calories`, and
/// carbs can go negative for extreme inputs.
///
/// # Errors
///
/// Returns `InvalidInput` if the biometrics fail [`calculate_bmr`] validation
pub fn calculate_targets(biometrics: &Biometrics, config: &NutritionConfig) -> AppResult<Targets> {
    let bmr = calculate_bmr(
        biometrics.weight_lbs,
        biometrics.height_inches,
        biometrics.age,
        biometrics.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, biometrics.activity_level, &config.activity_factors);
    let calories = tdee + config.goal_adjustments.delta(biometrics.goal);

    let split = &config.macro_split;
    let protein = round_half_up(biometrics.weight_lbs * split.protein_g_per_lb);
    let fat = round_half_up(calories as f64 * split.fat_calorie_share / KCAL_PER_GRAM_FAT);
    let protein_kcal = protein as f64 * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = fat as f64 * KCAL_PER_GRAM_FAT;
    let carbs = round_half_up((calories as f64 - protein_kcal - fat_kcal) / KCAL_PER_GRAM_CARBS);

    let targets = Targets {
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat,
    };
    debug!(
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat,
        goal = %biometrics.goal,
        "Computed daily targets"
    );
    Ok(targets)
}

/// Realized macros for `quantity` units of a food
///
/// Calories round to a whole number and grams to one decimal. A missing food
/// or an invalid quantity contributes zero.
#[must_use]
pub fn calculate_item_macros(resolution: FoodResolution<'_>, quantity: f64) -> MacroTotals {
    let FoodResolution::Resolved(food) = resolution else {
        return MacroTotals::ZERO;
    };
    let quantity = coerce_quantity(quantity);
    MacroTotals {
        calories: round_half_up(food.calories * quantity),
        protein: round_to_tenth(food.protein * quantity),
        carbs: round_to_tenth(food.carbs * quantity),
        fat: round_to_tenth(food.fat * quantity),
    }
}
