// ABOUTME: Core data models for athletes, foods, macro totals, and meal plans
// ABOUTME: Plain serde records exchanged with persistence and export layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! All records serialize to JSON with numbers for numeric fields and string
//! tags for enumerations (`"male"`, `"veryActive"`, `"bulkHard"`, `"am_snack"`).

/// Athlete enumerations and derived targets
pub mod athlete;
/// Catalog food items
pub mod food;
/// Macro total and average records
pub mod macros;
/// Meal plan document, slots, items, and templates
pub mod plan;

pub use athlete::{ActivityLevel, Biometrics, Gender, Goal, Targets};
pub use food::{FoodCategory, FoodItem};
pub use macros::{Macro, MacroAverage, MacroTotals};
pub use plan::{
    coerce_quantity, parse_quantity, DayPlan, ItemId, MealPlan, MealSlotKind, MealTemplate,
    PlanItem, TemplateItem,
};
