// ABOUTME: Aggregation engine rolling item macros up into meal, day and week totals
// ABOUTME: Target percentage, status grading and whole-plan summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation Engine
//!
//! Pure folds over a plan. Food data arrives through an injected
//! [`FoodLookup`]; unknown food ids contribute zero and are logged.

use std::fmt;

use macroplan_core::models::{
    DayPlan, Macro, MacroAverage, MacroTotals, MealPlan, MealSlotKind, PlanItem, Targets,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{FoodLookup, FoodResolution};
use crate::config::StatusBandsConfig;
use crate::intelligence::nutrition_calculator::calculate_item_macros;
use crate::utils::rounding::round_half_up;

/// Attainment grade for a percent-of-target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroStatus {
    /// Within the good band
    Good,
    /// Outside good but within the close band
    Close,
    /// Below the close band
    Under,
    /// Above the close band
    Over,
}

impl MacroStatus {
    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Close => "close",
            Self::Under => "under",
            Self::Over => "over",
        }
    }
}

impl fmt::Display for MacroStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macros of one plan item, resolving its food through `lookup`
#[must_use]
pub fn item_macros(item: &PlanItem, lookup: &dyn FoodLookup) -> MacroTotals {
    let resolution = lookup.resolve(&item.food_id);
    if matches!(resolution, FoodResolution::Missing) {
        warn!(
            food_id = %item.food_id,
            item_id = %item.id,
            "Unknown food reference, contributing zero"
        );
    }
    calculate_item_macros(resolution, item.quantity)
}

/// Sum of item macros for one meal slot; empty slots are zero
#[must_use]
pub fn sum_meal_macros(items: &[PlanItem], lookup: &dyn FoodLookup) -> MacroTotals {
    items.iter().map(|item| item_macros(item, lookup)).sum()
}

/// Sum of every slot in a day, in canonical slot order
#[must_use]
pub fn sum_day_macros(day: &DayPlan, lookup: &dyn FoodLookup) -> MacroTotals {
    day.slots()
        .map(|(_, items)| sum_meal_macros(items, lookup))
        .sum()
}

/// Average over days that carry any calories
///
/// Days with zero calories are excluded from the divisor. Each macro is
/// averaged and rounded on its own; with no qualifying day the result is zero.
#[must_use]
pub fn weekly_average(days: &[MacroTotals]) -> MacroAverage {
    let active: Vec<&MacroTotals> = days.iter().filter(|day| day.has_content()).collect();
    if active.is_empty() {
        return MacroAverage::default();
    }
    let count = active.len() as f64;
    let total: MacroTotals = active.into_iter().copied().sum();
    MacroAverage {
        calories: round_half_up(total.calories as f64 / count),
        protein: round_half_up(total.protein / count),
        carbs: round_half_up(total.carbs / count),
        fat: round_half_up(total.fat / count),
    }
}

/// `actual` as a whole-number percentage of `target`; 0 when target is 0
#[must_use]
pub fn target_percentage(actual: f64, target: f64) -> i64 {
    if target == 0.0 {
        return 0;
    }
    round_half_up(actual / target * 100.0)
}

/// Grade `actual` against `target`
///
/// Checked in order: good band, close band, under, otherwise over.
#[must_use]
pub fn macro_status(actual: f64, target: f64, bands: &StatusBandsConfig) -> MacroStatus {
    status_for_percentage(target_percentage(actual, target), bands)
}

/// Grade an already-computed percentage
#[must_use]
pub fn status_for_percentage(percentage: i64, bands: &StatusBandsConfig) -> MacroStatus {
    if (bands.good_low..=bands.good_high).contains(&percentage) {
        MacroStatus::Good
    } else if (bands.close_low..=bands.close_high).contains(&percentage) {
        MacroStatus::Close
    } else if percentage < bands.close_low {
        MacroStatus::Under
    } else {
        MacroStatus::Over
    }
}

/// One macro measured against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroAttainment {
    /// Which macro
    pub nutrient: Macro,
    /// Realized amount
    pub actual: f64,
    /// Daily target
    pub target: i64,
    /// Whole-number percent of target
    pub percentage: i64,
    /// Grade
    pub status: MacroStatus,
}

/// Grade all four macros of `actual` against `targets`
#[must_use]
pub fn attainment(
    actual: impl Fn(Macro) -> f64,
    targets: &Targets,
    bands: &StatusBandsConfig,
) -> Vec<MacroAttainment> {
    Macro::ALL
        .into_iter()
        .map(|nutrient| {
            let value = actual(nutrient);
            let target = targets.get(nutrient);
            let percentage = target_percentage(value, target as f64);
            MacroAttainment {
                nutrient,
                actual: value,
                target,
                percentage,
                status: status_for_percentage(percentage, bands),
            }
        })
        .collect()
}

/// Totals of one non-empty meal slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// Which slot
    pub slot: MealSlotKind,
    /// Sum of the slot's items
    pub totals: MacroTotals,
}

/// A day's totals paired with its per-macro attainment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAttainment {
    /// Day index, 0 = Monday
    pub day: usize,
    /// Non-empty slots in canonical order
    pub meals: Vec<MealTotals>,
    /// Realized totals
    pub totals: MacroTotals,
    /// Calories, protein, carbs, fat in that order
    pub macros: Vec<MacroAttainment>,
}

impl DayAttainment {
    /// Total and grade one day
    ///
    /// Every item is resolved exactly once.
    #[must_use]
    pub fn compute(
        day: usize,
        plan_day: &DayPlan,
        targets: &Targets,
        lookup: &dyn FoodLookup,
        bands: &StatusBandsConfig,
    ) -> Self {
        let meals: Vec<MealTotals> = plan_day
            .slots()
            .filter(|(_, items)| !items.is_empty())
            .map(|(slot, items)| MealTotals {
                slot,
                totals: sum_meal_macros(items, lookup),
            })
            .collect();
        let totals: MacroTotals = meals.iter().map(|meal| meal.totals).sum();
        Self {
            day,
            meals,
            totals,
            macros: attainment(|nutrient| totals.get(nutrient), targets, bands),
        }
    }
}

/// Whole-plan roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Targets snapshot the plan is graded against
    pub targets: Targets,
    /// Monday through Sunday
    pub days: Vec<DayAttainment>,
    /// Days that carried any calories
    pub active_days: usize,
    /// Average over active days
    pub weekly_average: MacroAverage,
    /// Weekly average graded against targets
    pub weekly_attainment: Vec<MacroAttainment>,
}

/// Summarize a plan against its own targets snapshot
#[must_use]
pub fn summarize_plan(
    plan: &MealPlan,
    lookup: &dyn FoodLookup,
    bands: &StatusBandsConfig,
) -> PlanSummary {
    let days: Vec<DayAttainment> = plan
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| DayAttainment::compute(index, day, &plan.targets, lookup, bands))
        .collect();
    let totals: Vec<MacroTotals> = days.iter().map(|day| day.totals).collect();
    let weekly = weekly_average(&totals);

    PlanSummary {
        targets: plan.targets,
        active_days: totals.iter().filter(|day| day.has_content()).count(),
        weekly_average: weekly,
        weekly_attainment: attainment(
            |nutrient| weekly.get(nutrient) as f64,
            &plan.targets,
            bands,
        ),
        days,
    }
}
