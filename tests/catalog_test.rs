// ABOUTME: Tests for the food catalog and meal template catalog
// ABOUTME: Lookup, search, custom foods, and template integrity against the food table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::collections::HashSet;

use macroplan::catalog::{FoodCatalog, FoodLookup, FoodResolution, TemplateCatalog};
use macroplan::errors::ErrorCode;
use macroplan::models::{FoodCategory, FoodItem, MealSlotKind};

mod common;

// ============================================================================
// FOOD CATALOG
// ============================================================================

#[test]
fn test_builtin_catalog_ids_are_unique() {
    let catalog = FoodCatalog::builtin();

    assert!(!catalog.is_empty());
    let ids: HashSet<&str> = catalog.all().iter().map(|food| food.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_builtin_foods_have_valid_macros() {
    let catalog = FoodCatalog::builtin();
    for food in catalog.all() {
        assert!(food.has_valid_macros(), "{}", food.id);
        assert!(!food.name.is_empty(), "{}", food.id);
        assert!(!food.unit.is_empty(), "{}", food.id);
    }
}

#[test]
fn test_get_and_resolve() {
    let catalog = FoodCatalog::builtin();

    let chicken = catalog.get("p1").unwrap();
    assert_eq!(chicken.unit, "oz");
    assert_eq!(chicken.category, FoodCategory::Protein);

    assert!(catalog.get("nope").is_none());
    assert_eq!(catalog.resolve("nope"), FoodResolution::Missing);
    assert_eq!(catalog.resolve("p1").food(), Some(chicken));
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = FoodCatalog::builtin();

    let ids: Vec<&str> = catalog
        .search("MILK", None)
        .into_iter()
        .map(|food| food.id.as_str())
        .collect();
    assert!(ids.contains(&"d1"));
    assert!(ids.contains(&"d2"));
}

#[test]
fn test_search_with_category() {
    let catalog = FoodCatalog::builtin();

    let fruit = catalog.search("", Some(FoodCategory::Fruit));
    assert!(!fruit.is_empty());
    assert!(fruit.iter().all(|food| food.category == FoodCategory::Fruit));

    let rice_carbs = catalog.search("rice", Some(FoodCategory::Carb));
    assert!(rice_carbs.iter().any(|food| food.id == "c1"));
    assert!(rice_carbs.iter().all(|food| food.category == FoodCategory::Carb));
}

#[test]
fn test_empty_search_returns_everything_in_order() {
    let catalog = FoodCatalog::builtin();

    let all = catalog.search("  ", None);
    assert_eq!(all.len(), catalog.len());
    assert_eq!(all[0].id, catalog.all()[0].id);
}

#[test]
fn test_search_without_match() {
    let catalog = FoodCatalog::builtin();
    assert!(catalog.search("dragonfruit smoothie", None).is_empty());
}

#[test]
fn test_add_custom_food() {
    let mut catalog = FoodCatalog::builtin();
    let before = catalog.len();

    catalog.add_custom(common::round_number_food("custom1")).unwrap();

    assert_eq!(catalog.len(), before + 1);
    assert_eq!(catalog.get("custom1").unwrap().calories, 100.0);
    assert!(catalog.resolve("custom1").food().is_some());
}

#[test]
fn test_add_custom_rejects_duplicate_id() {
    let mut catalog = FoodCatalog::builtin();

    let error = catalog.add_custom(common::round_number_food("p1")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(catalog.get("p1").unwrap().name, "Chicken Breast (grilled)");
}

#[test]
fn test_add_custom_rejects_negative_macros() {
    let mut catalog = FoodCatalog::new();
    let bad = FoodItem::new("bad", "Bad", "g", FoodCategory::Extra, -1.0, 0.0, 0.0, 0.0);

    let error = catalog.add_custom(bad).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(catalog.is_empty());
}

#[test]
fn test_from_foods_rejects_duplicates() {
    let foods = [
        common::round_number_food("x1"),
        common::round_number_food("x1"),
    ];

    let error = FoodCatalog::from_foods(foods).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_catalog_through_trait_object() {
    let catalog = FoodCatalog::from_foods([common::round_number_food("x1")]).unwrap();
    let lookup: &dyn FoodLookup = &catalog;

    assert!(lookup.resolve("x1").food().is_some());
    assert_eq!(lookup.resolve("p1"), FoodResolution::Missing);
}

// ============================================================================
// TEMPLATE CATALOG
// ============================================================================

#[test]
fn test_every_template_references_known_foods() {
    let foods = FoodCatalog::builtin();
    let templates = TemplateCatalog::builtin();

    for template in templates.all() {
        assert!(!template.items.is_empty(), "{}", template.id);
        for item in &template.items {
            assert!(
                foods.get(&item.food_id).is_some(),
                "template {} references unknown food {}",
                template.id,
                item.food_id
            );
            assert!(item.quantity > 0.0, "{}", template.id);
        }
    }
}

#[test]
fn test_template_ids_are_unique() {
    let templates = TemplateCatalog::builtin();
    let ids: HashSet<&str> = templates.all().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), templates.all().len());
}

#[test]
fn test_template_lookup() {
    let templates = TemplateCatalog::builtin();

    let shake = templates.get("mt1").unwrap();
    assert_eq!(shake.slot, MealSlotKind::Evening);
    assert_eq!(shake.items.len(), 4);
    assert_eq!(shake.items[0].food_id, "d2");

    let error = templates.get("mt999").unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_templates_for_slot() {
    let templates = TemplateCatalog::builtin();

    let breakfasts: Vec<&str> = templates
        .for_slot(MealSlotKind::Breakfast)
        .map(|t| t.id.as_str())
        .collect();
    assert!(breakfasts.contains(&"mt24"));
    assert!(!breakfasts.contains(&"mt1"));

    assert!(templates
        .for_slot(MealSlotKind::Preworkout)
        .next()
        .is_none());
}
