// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Meal plan file commands for macroplan-cli
// ABOUTME: Handles create, edit, copy, summary and export operations on plan JSON files

use std::path::Path;

use macroplan::athlete::AthleteProfile;
use macroplan::catalog::{FoodCatalog, TemplateCatalog};
use macroplan::config::NutritionConfig;
use macroplan::errors::{AppError, AppResult};
use macroplan::formatters::render_plan_text;
use macroplan::intelligence::summarize_plan;
use macroplan::models::{MealPlan, MealSlotKind};
use tracing::{info, warn};

use crate::helpers::display::{display_summary, print_json};
use crate::helpers::files::{read_json, write_json, write_text};

/// Load a plan, apply `edit`, and write it back
fn edit_plan<T>(file: &Path, edit: impl FnOnce(&mut MealPlan) -> AppResult<T>) -> AppResult<T> {
    let mut plan: MealPlan = read_json(file)?;
    let outcome = edit(&mut plan)?;
    write_json(file, &plan)?;
    Ok(outcome)
}

/// Create an empty plan seeded with the athlete's current targets
pub fn create(athlete_file: &Path, out: &Path) -> AppResult<()> {
    let mut athlete: AthleteProfile = read_json(athlete_file)?;
    let targets = athlete.refresh_targets(NutritionConfig::global())?;
    let plan = MealPlan::new(athlete.id, targets);
    write_json(out, &plan)?;
    info!(plan_id = %plan.id, athlete_id = %athlete.id, "Created plan");
    println!("Created plan {} for {}", plan.id, athlete.name);
    Ok(())
}

/// Replace a plan's targets snapshot with the athlete's current targets
pub fn retarget(file: &Path, athlete_file: &Path) -> AppResult<()> {
    let mut athlete: AthleteProfile = read_json(athlete_file)?;
    let targets = athlete.refresh_targets(NutritionConfig::global())?;
    edit_plan(file, |plan| {
        plan.set_targets(athlete.id, targets);
        Ok(())
    })?;
    info!(athlete_id = %athlete.id, calories = targets.calories, "Retargeted plan");
    println!(
        "Plan now targets {} kcal for {}",
        targets.calories, athlete.name
    );
    Ok(())
}

/// Add a catalog food to a slot
pub fn add(
    file: &Path,
    day: usize,
    slot: MealSlotKind,
    food_id: &str,
    quantity: f64,
) -> AppResult<()> {
    let catalog = FoodCatalog::builtin();
    let Some(food) = catalog.get(food_id) else {
        return Err(AppError::not_found(format!("Food '{food_id}'")).with_resource_id(food_id));
    };
    let item_id = edit_plan(file, |plan| plan.add_item(day, slot, food_id, quantity))?;
    info!(%item_id, food_id, day, %slot, "Added item");
    println!("Added {quantity} {} {} (item {item_id})", food.unit, food.name);
    Ok(())
}

/// Remove an item by position
pub fn remove(file: &Path, day: usize, slot: MealSlotKind, index: usize) -> AppResult<()> {
    let removed = edit_plan(file, |plan| plan.remove_item(day, slot, index))?;
    info!(item_id = %removed.id, day, %slot, "Removed item");
    println!("Removed item {} ({})", removed.id, removed.food_id);
    Ok(())
}

/// Update an item's quantity from raw text
pub fn set_quantity(
    file: &Path,
    day: usize,
    slot: MealSlotKind,
    index: usize,
    raw: &str,
) -> AppResult<()> {
    let stored = edit_plan(file, |plan| plan.update_item_quantity_text(day, slot, index, raw))?;
    if stored == 0.0 && raw.trim() != "0" {
        warn!(raw, "Quantity was not a positive number, stored 0");
    }
    println!("Quantity set to {stored}");
    Ok(())
}

/// Insert a template, into its own slot unless one is given
pub fn insert_template(
    file: &Path,
    day: usize,
    template_id: &str,
    slot: Option<MealSlotKind>,
) -> AppResult<()> {
    let templates = TemplateCatalog::builtin();
    let template = templates.get(template_id)?;
    let slot = slot.unwrap_or(template.slot);
    let ids = edit_plan(file, |plan| plan.insert_template(day, slot, template))?;
    info!(template_id, day, %slot, items = ids.len(), "Inserted template");
    println!(
        "Inserted '{}' into {} ({} items)",
        template.name,
        slot.label(),
        ids.len()
    );
    Ok(())
}

/// Empty one slot
pub fn clear(file: &Path, day: usize, slot: MealSlotKind) -> AppResult<()> {
    edit_plan(file, |plan| plan.clear_slot(day, slot))?;
    println!("Cleared {}", slot.label());
    Ok(())
}

/// Copy one day over the other six
pub fn copy_day(file: &Path, day: usize) -> AppResult<()> {
    edit_plan(file, |plan| plan.copy_day_to_all(day))?;
    info!(source_day = day, "Copied day to all");
    println!("Copied day {} to every day", day + 1);
    Ok(())
}

/// Print day totals, weekly average and attainment
pub fn summary(file: &Path, json: bool) -> AppResult<()> {
    let plan: MealPlan = read_json(file)?;
    let catalog = FoodCatalog::builtin();
    let summary = summarize_plan(&plan, &catalog, &NutritionConfig::global().status_bands);
    if json {
        print_json(&summary)
    } else {
        display_summary(&summary);
        Ok(())
    }
}

/// Render the plan as text to a file or stdout
pub fn export(file: &Path, athlete_file: &Path, out: Option<&Path>) -> AppResult<()> {
    let plan: MealPlan = read_json(file)?;
    let athlete: AthleteProfile = read_json(athlete_file)?;
    if athlete.id != plan.athlete_id {
        warn!(
            plan_athlete = %plan.athlete_id,
            athlete = %athlete.id,
            "Plan was built for a different athlete"
        );
    }
    let catalog = FoodCatalog::builtin();
    let text = render_plan_text(
        &plan,
        &athlete,
        &catalog,
        &NutritionConfig::global().status_bands,
    );
    let Some(path) = out else {
        print!("{text}");
        return Ok(());
    };
    write_text(path, &text)?;
    info!(path = %path.display(), "Exported plan");
    println!("Exported plan to {}", path.display());
    Ok(())
}
