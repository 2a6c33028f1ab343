// ABOUTME: Tests for the aggregation engine
// ABOUTME: Meal, day and weekly roll-ups, percent-of-target and status grading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use macroplan::catalog::FoodCatalog;
use macroplan::config::StatusBandsConfig;
use macroplan::intelligence::{
    item_macros, macro_status, status_for_percentage, sum_day_macros, sum_meal_macros,
    summarize_plan, target_percentage, weekly_average, MacroStatus,
};
use macroplan::models::{
    DayPlan, ItemId, Macro, MacroAverage, MacroTotals, MealSlotKind, PlanItem,
};

mod common;

fn item(id: u64, food_id: &str, quantity: f64) -> PlanItem {
    PlanItem {
        id: ItemId(id),
        food_id: food_id.into(),
        quantity,
    }
}

fn day_totals(calories: i64, protein: f64, carbs: f64, fat: f64) -> MacroTotals {
    MacroTotals {
        calories,
        protein,
        carbs,
        fat,
    }
}

// ============================================================================
// MEAL AND DAY SUMS
// ============================================================================

#[test]
fn test_empty_meal_is_zero() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(sum_meal_macros(&[], &catalog), MacroTotals::ZERO);
}

#[test]
fn test_meal_sum_adds_items() {
    let catalog = FoodCatalog::builtin();
    let meal = [item(1, "p1", 6.0), item(2, "c1", 1.0)];

    let totals = sum_meal_macros(&meal, &catalog);
    assert_eq!(totals.calories, 282 + 205);
    assert!((totals.protein - 57.1).abs() < 1e-9);
    assert!((totals.carbs - 44.5).abs() < 1e-9);
    assert!((totals.fat - 6.4).abs() < 1e-9);
}

#[test]
fn test_meal_sum_is_order_independent() {
    let catalog = FoodCatalog::builtin();
    let forward = [item(1, "d2", 12.0), item(2, "cv1", 1.0), item(3, "f1", 1.0)];
    let reversed = [item(3, "f1", 1.0), item(2, "cv1", 1.0), item(1, "d2", 12.0)];

    let a = sum_meal_macros(&forward, &catalog);
    let b = sum_meal_macros(&reversed, &catalog);
    assert_eq!(a.calories, b.calories);
    assert!((a.protein - b.protein).abs() < 1e-9);
}

#[test]
fn test_unknown_food_contributes_zero() {
    common::init_test_logging();
    let catalog = FoodCatalog::builtin();

    assert_eq!(item_macros(&item(1, "zz99", 3.0), &catalog), MacroTotals::ZERO);

    let meal = [item(1, "p1", 6.0), item(2, "zz99", 3.0)];
    assert_eq!(sum_meal_macros(&meal, &catalog).calories, 282);
}

#[test]
fn test_day_sum_covers_every_slot() {
    let catalog = FoodCatalog::builtin();
    let day = DayPlan {
        preworkout: vec![item(1, "f1", 1.0)],
        lunch: vec![item(2, "p1", 6.0)],
        evening: vec![item(3, "d1", 8.0)],
        ..DayPlan::default()
    };

    let totals = sum_day_macros(&day, &catalog);
    assert_eq!(totals.calories, 105 + 282 + 152);
}

#[test]
fn test_empty_day_is_zero() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(sum_day_macros(&DayPlan::default(), &catalog), MacroTotals::ZERO);
}

// ============================================================================
// WEEKLY AVERAGE
// ============================================================================

#[test]
fn test_weekly_average_skips_empty_days() {
    let mut days = [MacroTotals::ZERO; 7];
    days[0] = day_totals(2000, 150.0, 200.0, 60.0);
    days[2] = day_totals(3000, 170.0, 300.0, 80.0);

    assert_eq!(
        weekly_average(&days),
        MacroAverage {
            calories: 2500,
            protein: 160,
            carbs: 250,
            fat: 70,
        }
    );
}

#[test]
fn test_weekly_average_rounds_each_macro() {
    let days = [
        day_totals(2001, 150.5, 200.0, 60.0),
        day_totals(2000, 150.0, 201.0, 61.0),
    ];

    // 2000.5, 150.25, 200.5, 60.5
    assert_eq!(
        weekly_average(&days),
        MacroAverage {
            calories: 2001,
            protein: 150,
            carbs: 201,
            fat: 61,
        }
    );
}

#[test]
fn test_weekly_average_of_empty_week_is_zero() {
    assert_eq!(weekly_average(&[MacroTotals::ZERO; 7]), MacroAverage::default());
    assert_eq!(weekly_average(&[]), MacroAverage::default());
}

// ============================================================================
// PERCENTAGE AND STATUS
// ============================================================================

#[test]
fn test_target_percentage() {
    assert_eq!(target_percentage(2450.0, 2500.0), 98);
    assert_eq!(target_percentage(0.0, 2500.0), 0);
    assert_eq!(target_percentage(3000.0, 2000.0), 150);
    // 199 / 200 = 99.5%
    assert_eq!(target_percentage(199.0, 200.0), 100);
}

#[test]
fn test_target_percentage_zero_target() {
    assert_eq!(target_percentage(0.0, 0.0), 0);
    assert_eq!(target_percentage(500.0, 0.0), 0);
}

#[test]
fn test_status_bands() {
    let bands = StatusBandsConfig::default();
    let cases = [
        (0, MacroStatus::Under),
        (89, MacroStatus::Under),
        (90, MacroStatus::Close),
        (94, MacroStatus::Close),
        (95, MacroStatus::Good),
        (100, MacroStatus::Good),
        (105, MacroStatus::Good),
        (106, MacroStatus::Close),
        (110, MacroStatus::Close),
        (111, MacroStatus::Over),
        (250, MacroStatus::Over),
    ];

    for (percentage, expected) in cases {
        assert_eq!(
            status_for_percentage(percentage, &bands),
            expected,
            "{percentage}%"
        );
    }
}

#[test]
fn test_macro_status_uses_rounded_percentage() {
    let bands = StatusBandsConfig::default();

    // 189 / 200 = 94.5% rounds to 95
    assert_eq!(macro_status(189.0, 200.0, &bands), MacroStatus::Good);
    assert_eq!(macro_status(2450.0, 2500.0, &bands), MacroStatus::Good);
    assert_eq!(macro_status(100.0, 0.0, &bands), MacroStatus::Under);
}

#[test]
fn test_macro_status_against_thousand() {
    let bands = StatusBandsConfig::default();
    let cases = [
        (1000.0, MacroStatus::Good),
        (900.0, MacroStatus::Close),
        (890.0, MacroStatus::Under),
        (1110.0, MacroStatus::Over),
        (1100.0, MacroStatus::Close),
        (1050.0, MacroStatus::Good),
        (1060.0, MacroStatus::Close),
        (940.0, MacroStatus::Close),
        (950.0, MacroStatus::Good),
    ];

    for (actual, expected) in cases {
        assert_eq!(macro_status(actual, 1000.0, &bands), expected, "{actual}");
    }
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&MacroStatus::Close).unwrap(), "\"close\"");
    assert_eq!(MacroStatus::Over.to_string(), "over");
}

// ============================================================================
// PLAN SUMMARY
// ============================================================================

#[test]
fn test_summarize_empty_plan() {
    let athlete = common::sample_athlete();
    let plan = common::empty_plan_for(&athlete);
    let catalog = FoodCatalog::builtin();

    let summary = summarize_plan(&plan, &catalog, &StatusBandsConfig::default());

    assert_eq!(summary.days.len(), 7);
    assert_eq!(summary.active_days, 0);
    assert_eq!(summary.weekly_average, MacroAverage::default());
    assert!(summary
        .weekly_attainment
        .iter()
        .all(|entry| entry.status == MacroStatus::Under));
}

#[test]
fn test_summarize_plan_grades_against_snapshot() {
    let athlete = common::sample_athlete();
    let mut plan = common::empty_plan_for(&athlete);
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(3, MealSlotKind::Dinner, "c1", 2.0).unwrap();
    let catalog = FoodCatalog::builtin();

    let summary = summarize_plan(&plan, &catalog, &StatusBandsConfig::default());

    assert_eq!(summary.targets, athlete.targets());
    assert_eq!(summary.active_days, 2);
    assert_eq!(summary.days[0].day, 0);
    assert_eq!(summary.days[0].totals.calories, 282);
    assert_eq!(summary.days[3].totals.calories, 410);
    assert_eq!(summary.days[1].totals, MacroTotals::ZERO);
    // (282 + 410) / 2
    assert_eq!(summary.weekly_average.calories, 346);

    let calories = &summary.days[0].macros[0];
    assert_eq!(calories.nutrient, Macro::Calories);
    assert_eq!(calories.target, athlete.targets().calories);
    assert_eq!(calories.status, MacroStatus::Under);
    let nutrients: Vec<Macro> = summary.days[0].macros.iter().map(|m| m.nutrient).collect();
    assert_eq!(nutrients, Macro::ALL);
}

#[test]
fn test_day_summary_carries_slot_totals() {
    let athlete = common::sample_athlete();
    let mut plan = common::empty_plan_for(&athlete);
    plan.add_item(1, MealSlotKind::Evening, "d1", 8.0).unwrap();
    plan.add_item(1, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(1, MealSlotKind::Lunch, "zz99", 2.0).unwrap();
    let catalog = FoodCatalog::builtin();

    let summary = summarize_plan(&plan, &catalog, &StatusBandsConfig::default());
    let day = &summary.days[1];

    let slots: Vec<MealSlotKind> = day.meals.iter().map(|meal| meal.slot).collect();
    assert_eq!(slots, [MealSlotKind::Lunch, MealSlotKind::Evening]);
    assert_eq!(day.meals[0].totals.calories, 282);
    assert_eq!(day.meals[1].totals.calories, 152);
    assert_eq!(day.totals, sum_day_macros(plan.day(1).unwrap(), &catalog));
    assert!(summary.days[0].meals.is_empty());
}

#[test]
fn test_summary_serializes_camel_case() {
    let athlete = common::sample_athlete();
    let plan = common::empty_plan_for(&athlete);
    let catalog = FoodCatalog::builtin();
    let summary = summarize_plan(&plan, &catalog, &StatusBandsConfig::default());

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("activeDays").is_some());
    assert!(json.get("weeklyAverage").is_some());
    assert!(json.get("weeklyAttainment").is_some());
}
