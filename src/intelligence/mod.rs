// ABOUTME: Nutrition intelligence: target calculation and plan aggregation
// ABOUTME: Pure, stateless functions driven by explicit configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Item, meal, day and week roll-ups with status grading
pub mod aggregation;
/// BMR, TDEE, targets and item macros
pub mod nutrition_calculator;

pub use aggregation::{
    attainment, item_macros, macro_status, status_for_percentage, sum_day_macros,
    sum_meal_macros, summarize_plan, target_percentage, weekly_average, DayAttainment,
    MacroAttainment, MacroStatus, MealTotals, PlanSummary,
};
pub use nutrition_calculator::{
    calculate_bmr, calculate_item_macros, calculate_targets, calculate_tdee,
};
