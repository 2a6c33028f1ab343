// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for macroplan-cli
// ABOUTME: Provides consistent display functions for targets, catalog entries and plan summaries

use macroplan::athlete::AthleteProfile;
use macroplan::catalog::{FoodCatalog, FoodLookup, FoodResolution};
use macroplan::constants::plan::DAY_NAMES;
use macroplan::errors::AppResult;
use macroplan::formatters::format_macros;
use macroplan::intelligence::{MacroAttainment, PlanSummary};
use macroplan::models::{FoodItem, MealTemplate, Targets};
use serde::Serialize;

/// Print any record as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display daily targets
pub fn display_targets(targets: &Targets) {
    println!("DAILY TARGETS");
    println!("{}", "=".repeat(40));
    println!("   BMR:      {} kcal", targets.bmr);
    println!("   TDEE:     {} kcal", targets.tdee);
    println!("   Calories: {} kcal", targets.calories);
    println!("   Protein:  {} g", targets.protein);
    println!("   Carbs:    {} g", targets.carbs);
    println!("   Fat:      {} g", targets.fat);
}

/// Display an athlete profile with its targets
pub fn display_athlete(athlete: &AthleteProfile) {
    let biometrics = athlete.biometrics();
    println!("{} ({})", athlete.name, athlete.sport);
    println!("   Id:       {}", athlete.id);
    println!(
        "   Body:     {} lbs, {}, age {}, {}",
        biometrics.weight_lbs,
        athlete.height_display(),
        biometrics.age,
        biometrics.gender
    );
    println!("   Activity: {}", biometrics.activity_level.label());
    println!("   Goal:     {}", biometrics.goal.label());
    if !athlete.preferences.is_empty() {
        println!("   Likes:    {}", athlete.preferences);
    }
    if !athlete.restrictions.is_empty() {
        println!("   Avoid:    {}", athlete.restrictions);
    }
    println!();
    display_targets(&athlete.targets());
}

/// Display a food table
pub fn display_foods(foods: &[&FoodItem]) {
    println!(
        "{:<6} {:<32} {:<9} {:<10} {:>6} {:>6} {:>6} {:>6}",
        "ID", "NAME", "UNIT", "CATEGORY", "KCAL", "P", "C", "F"
    );
    for food in foods {
        println!(
            "{:<6} {:<32} {:<9} {:<10} {:>6} {:>6} {:>6} {:>6}",
            food.id,
            food.name,
            food.unit,
            food.category.as_str(),
            food.calories,
            food.protein,
            food.carbs,
            food.fat
        );
    }
    println!("\n{} foods", foods.len());
}

/// Display templates with their resolved items
pub fn display_templates(templates: &[&MealTemplate], catalog: &FoodCatalog) {
    for template in templates {
        println!("{} - {} [{}]", template.id, template.name, template.slot);
        println!("   {}", template.description);
        for item in &template.items {
            match catalog.resolve(&item.food_id) {
                FoodResolution::Resolved(food) => {
                    println!("     {} {} {}", item.quantity, food.unit, food.name);
                }
                FoodResolution::Missing => {
                    println!("     {} x unknown food '{}'", item.quantity, item.food_id);
                }
            }
        }
    }
    println!("\n{} templates", templates.len());
}

fn attainment_line(macros: &[MacroAttainment]) -> String {
    macros
        .iter()
        .map(|entry| format!("{} {}% {}", entry.nutrient.label(), entry.percentage, entry.status))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Display a plan summary
pub fn display_summary(summary: &PlanSummary) {
    let targets = &summary.targets;
    println!(
        "Targets: {} cal | {}P | {}C | {}F",
        targets.calories, targets.protein, targets.carbs, targets.fat
    );
    println!("{}", "=".repeat(60));
    for (day, name) in summary.days.iter().zip(DAY_NAMES) {
        if day.totals.has_content() {
            println!("{name}  {}", format_macros(&day.totals));
            println!("     {}", attainment_line(&day.macros));
        } else {
            println!("{name}  (empty)");
        }
    }
    println!("{}", "=".repeat(60));
    let average = &summary.weekly_average;
    println!(
        "Weekly average over {} day(s): {} cal | {}P | {}C | {}F",
        summary.active_days, average.calories, average.protein, average.carbs, average.fat
    );
    println!("     {}", attainment_line(&summary.weekly_attainment));
}
