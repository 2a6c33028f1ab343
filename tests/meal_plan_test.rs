// ABOUTME: Tests for the meal plan document model
// ABOUTME: Item identity, slot mutations, day copying, template insertion and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::collections::HashSet;

use macroplan::catalog::{FoodCatalog, TemplateCatalog};
use macroplan::config::StatusBandsConfig;
use macroplan::errors::ErrorCode;
use macroplan::intelligence::{summarize_plan, MacroStatus};
use macroplan::models::{DayPlan, ItemId, MealPlan, MealSlotKind, Targets};
use uuid::Uuid;

mod common;

fn sample_plan() -> MealPlan {
    common::empty_plan_for(&common::sample_athlete())
}

fn all_ids(plan: &MealPlan) -> Vec<ItemId> {
    plan.days
        .iter()
        .flat_map(|day| day.items().map(|item| item.id))
        .collect()
}

#[test]
fn test_new_plan_is_seven_empty_days() {
    let athlete = common::sample_athlete();
    let plan = common::empty_plan_for(&athlete);

    assert_eq!(plan.days.len(), 7);
    assert!(plan.days.iter().all(|day| day.is_empty()));
    assert_eq!(plan.item_count(), 0);
    assert_eq!(plan.athlete_id, athlete.id);
    assert_eq!(plan.targets, athlete.targets());
}

#[test]
fn test_add_item_appends_to_slot() {
    let mut plan = sample_plan();

    let first = plan.add_item(1, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    let second = plan.add_item(1, MealSlotKind::Lunch, "c1", 1.5).unwrap();

    let lunch = plan.day(1).unwrap().slot(MealSlotKind::Lunch);
    assert_eq!(lunch.len(), 2);
    assert_eq!(lunch[0].id, first);
    assert_eq!(lunch[1].id, second);
    assert_eq!(lunch[1].food_id, "c1");
    assert_eq!(lunch[1].quantity, 1.5);
    assert_ne!(first, second);
}

#[test]
fn test_add_item_rejects_out_of_range_day() {
    let mut plan = sample_plan();

    let error = plan.add_item(7, MealSlotKind::Lunch, "p1", 6.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(plan.item_count(), 0);
}

#[test]
fn test_add_item_coerces_invalid_quantity() {
    let mut plan = sample_plan();

    plan.add_item(0, MealSlotKind::Dinner, "p1", -3.0).unwrap();
    plan.add_item(0, MealSlotKind::Dinner, "p1", f64::NAN).unwrap();

    let dinner = plan.day(0).unwrap().slot(MealSlotKind::Dinner);
    assert!(dinner.iter().all(|item| item.quantity == 0.0));
}

#[test]
fn test_add_then_remove_restores_slot() {
    let mut plan = sample_plan();
    plan.add_item(2, MealSlotKind::Breakfast, "p13", 3.0).unwrap();
    let before = plan.day(2).unwrap().clone();

    plan.add_item(2, MealSlotKind::Breakfast, "c8", 2.0).unwrap();
    let removed = plan.remove_item(2, MealSlotKind::Breakfast, 1).unwrap();

    assert_eq!(removed.food_id, "c8");
    assert_eq!(plan.day(2).unwrap(), &before);
}

#[test]
fn test_add_many_then_remove_in_reverse_empties_slot() {
    let mut plan = sample_plan();
    for food in ["p1", "c1", "v1", "fa1"] {
        plan.add_item(5, MealSlotKind::Dinner, food, 1.0).unwrap();
    }

    for index in (0..4).rev() {
        plan.remove_item(5, MealSlotKind::Dinner, index).unwrap();
    }

    assert_eq!(plan.day(5).unwrap(), &DayPlan::default());
}

#[test]
fn test_remove_item_keeps_order_of_the_rest() {
    let mut plan = sample_plan();
    for food in ["f1", "f3", "f5"] {
        plan.add_item(0, MealSlotKind::AmSnack, food, 1.0).unwrap();
    }

    plan.remove_item(0, MealSlotKind::AmSnack, 1).unwrap();

    let foods: Vec<&str> = plan
        .day(0)
        .unwrap()
        .slot(MealSlotKind::AmSnack)
        .iter()
        .map(|item| item.food_id.as_str())
        .collect();
    assert_eq!(foods, ["f1", "f5"]);
}

#[test]
fn test_remove_item_out_of_range() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();

    let error = plan.remove_item(0, MealSlotKind::Lunch, 1).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    let error = plan.remove_item(9, MealSlotKind::Lunch, 0).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_removed_ids_are_not_reused() {
    let mut plan = sample_plan();
    let first = plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.remove_item(0, MealSlotKind::Lunch, 0).unwrap();

    let next = plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    assert!(next > first);
}

#[test]
fn test_update_quantity() {
    let mut plan = sample_plan();
    plan.add_item(4, MealSlotKind::Evening, "d2", 12.0).unwrap();

    let stored = plan
        .update_item_quantity(4, MealSlotKind::Evening, 0, 16.0)
        .unwrap();
    assert_eq!(stored, 16.0);

    let stored = plan
        .update_item_quantity_text(4, MealSlotKind::Evening, 0, " 2.5 ")
        .unwrap();
    assert_eq!(stored, 2.5);

    let stored = plan
        .update_item_quantity_text(4, MealSlotKind::Evening, 0, "lots")
        .unwrap();
    assert_eq!(stored, 0.0);
    assert_eq!(
        plan.day(4).unwrap().slot(MealSlotKind::Evening)[0].quantity,
        0.0
    );
}

#[test]
fn test_update_quantity_missing_item() {
    let mut plan = sample_plan();

    let error = plan
        .update_item_quantity(0, MealSlotKind::Lunch, 0, 1.0)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_clear_slot_leaves_other_slots() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(0, MealSlotKind::Dinner, "p2", 6.0).unwrap();

    plan.clear_slot(0, MealSlotKind::Lunch).unwrap();

    let day = plan.day(0).unwrap();
    assert!(day.slot(MealSlotKind::Lunch).is_empty());
    assert_eq!(day.slot(MealSlotKind::Dinner).len(), 1);
}

#[test]
fn test_copy_day_to_all() {
    let mut plan = sample_plan();
    plan.add_item(2, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(2, MealSlotKind::Evening, "d2", 12.0).unwrap();
    plan.add_item(5, MealSlotKind::Dinner, "p5", 8.0).unwrap();

    plan.copy_day_to_all(2).unwrap();

    for day in &plan.days {
        let foods: Vec<&str> = day.items().map(|item| item.food_id.as_str()).collect();
        assert_eq!(foods, ["p1", "d2"]);
    }
    assert_eq!(plan.item_count(), 14);
}

#[test]
fn test_copied_days_are_independent() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.copy_day_to_all(0).unwrap();

    plan.update_item_quantity(3, MealSlotKind::Lunch, 0, 10.0)
        .unwrap();
    plan.add_item(4, MealSlotKind::Lunch, "c1", 1.0).unwrap();

    assert_eq!(plan.day(0).unwrap().slot(MealSlotKind::Lunch)[0].quantity, 6.0);
    assert_eq!(plan.day(3).unwrap().slot(MealSlotKind::Lunch)[0].quantity, 10.0);
    assert_eq!(plan.day(0).unwrap().slot(MealSlotKind::Lunch).len(), 1);
    assert_eq!(plan.day(4).unwrap().slot(MealSlotKind::Lunch).len(), 2);
}

#[test]
fn test_mutating_source_after_copy_leaves_copies() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Breakfast, "p13", 3.0).unwrap();
    plan.copy_day_to_all(0).unwrap();
    let copies: Vec<DayPlan> = plan.days[1..].to_vec();

    plan.update_item_quantity(0, MealSlotKind::Breakfast, 0, 4.0)
        .unwrap();
    plan.clear_slot(0, MealSlotKind::Breakfast).unwrap();

    assert_eq!(plan.days[1..].to_vec(), copies);
}

#[test]
fn test_item_ids_unique_after_copy() {
    let mut plan = sample_plan();
    plan.add_item(6, MealSlotKind::Breakfast, "p13", 3.0).unwrap();
    plan.add_item(6, MealSlotKind::Breakfast, "c13", 1.0).unwrap();
    plan.copy_day_to_all(6).unwrap();
    plan.add_item(1, MealSlotKind::PmSnack, "f5", 1.5).unwrap();

    let ids = all_ids(&plan);
    let unique: HashSet<ItemId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 15);
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_copy_day_out_of_range() {
    let mut plan = sample_plan();
    let error = plan.copy_day_to_all(7).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_insert_template_copies_items_in_order() {
    let templates = TemplateCatalog::builtin();
    let template = templates.get("mt1").unwrap();
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Evening, "f3", 1.0).unwrap();

    let ids = plan
        .insert_template(0, MealSlotKind::Evening, template)
        .unwrap();

    assert_eq!(ids.len(), template.items.len());
    let evening = plan.day(0).unwrap().slot(MealSlotKind::Evening);
    assert_eq!(evening[0].food_id, "f3");
    for (placed, source) in evening[1..].iter().zip(&template.items) {
        assert_eq!(placed.food_id, source.food_id);
        assert_eq!(placed.quantity, source.quantity);
    }
}

#[test]
fn test_insert_template_twice_gets_fresh_ids() {
    let templates = TemplateCatalog::builtin();
    let template = templates.get("mt4").unwrap();
    let mut plan = sample_plan();

    let first = plan.insert_template(1, MealSlotKind::PmSnack, template).unwrap();
    let second = plan.insert_template(1, MealSlotKind::PmSnack, template).unwrap();

    assert!(first.iter().all(|id| !second.contains(id)));
    assert_eq!(
        plan.day(1).unwrap().slot(MealSlotKind::PmSnack).len(),
        template.items.len() * 2
    );
}

#[test]
fn test_find_item() {
    let mut plan = sample_plan();
    plan.add_item(3, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    let id = plan.add_item(3, MealSlotKind::Lunch, "c1", 1.0).unwrap();

    assert_eq!(plan.find_item(id), Some((3, MealSlotKind::Lunch, 1)));
    assert_eq!(plan.find_item(ItemId(9999)), None);
}

#[test]
fn test_serde_round_trip_keeps_id_counter() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    let removed = plan.add_item(0, MealSlotKind::Lunch, "c1", 1.0).unwrap();
    plan.remove_item(0, MealSlotKind::Lunch, 1).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let mut restored: MealPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);

    let next = restored.add_item(0, MealSlotKind::Lunch, "c1", 1.0).unwrap();
    assert!(next > removed);
}

#[test]
fn test_legacy_document_without_counter() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(1, MealSlotKind::Lunch, "p1", 6.0).unwrap();

    let mut value = serde_json::to_value(&plan).unwrap();
    value.as_object_mut().unwrap().remove("nextItemId");
    let mut restored: MealPlan = serde_json::from_value(value).unwrap();

    restored.add_item(2, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    let ids = all_ids(&restored);
    let unique: HashSet<ItemId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_plan_json_uses_wire_tags() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::AmSnack, "f1", 1.0).unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert!(value.get("athleteId").is_some());
    assert_eq!(value["days"].as_array().unwrap().len(), 7);
    assert_eq!(value["days"][0]["am_snack"][0]["foodId"], "f1");
}

#[test]
fn test_set_targets_regrades_without_touching_items() {
    let mut plan = sample_plan();
    plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0).unwrap();
    plan.add_item(0, MealSlotKind::Dinner, "c1", 2.0).unwrap();
    let days_before = plan.days.clone();
    let ids_before = all_ids(&plan);
    let catalog = FoodCatalog::builtin();
    let bands = StatusBandsConfig::default();

    // 282 + 410 kcal on day 0
    let targets = Targets {
        bmr: 500,
        tdee: 600,
        calories: 692,
        protein: 100,
        carbs: 100,
        fat: 10,
    };
    let athlete_id = Uuid::new_v4();
    plan.set_targets(athlete_id, targets);

    assert_eq!(plan.athlete_id, athlete_id);
    assert_eq!(plan.targets, targets);
    assert_eq!(plan.days, days_before);
    assert_eq!(all_ids(&plan), ids_before);

    let summary = summarize_plan(&plan, &catalog, &bands);
    assert_eq!(summary.targets, targets);
    let calories = &summary.days[0].macros[0];
    assert_eq!(calories.target, 692);
    assert_eq!(calories.percentage, 100);
    assert_eq!(calories.status, MacroStatus::Good);

    let next = plan.add_item(0, MealSlotKind::Lunch, "v1", 1.0).unwrap();
    assert!(ids_before.iter().all(|id| next > *id));
}
