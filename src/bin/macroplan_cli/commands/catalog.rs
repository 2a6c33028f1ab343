// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Catalog browsing commands for macroplan-cli
// ABOUTME: Lists built-in foods and meal templates with optional filters

use macroplan::catalog::{FoodCatalog, TemplateCatalog};
use macroplan::errors::AppResult;
use macroplan::models::{FoodCategory, MealSlotKind, MealTemplate};

use crate::helpers::display::{display_foods, display_templates, print_json};

/// List foods matching a name filter and optional category
pub fn list_foods(search: &str, category: Option<FoodCategory>, json: bool) -> AppResult<()> {
    let catalog = FoodCatalog::builtin();
    let foods = catalog.search(search, category);
    if json {
        print_json(&foods)
    } else {
        display_foods(&foods);
        Ok(())
    }
}

/// List templates, optionally only those for one slot
pub fn list_templates(slot: Option<MealSlotKind>, json: bool) -> AppResult<()> {
    let templates = TemplateCatalog::builtin();
    let selected: Vec<&MealTemplate> = slot.map_or_else(
        || templates.all().iter().collect(),
        |slot| templates.for_slot(slot).collect(),
    );
    if json {
        print_json(&selected)
    } else {
        display_templates(&selected, &FoodCatalog::builtin());
        Ok(())
    }
}
