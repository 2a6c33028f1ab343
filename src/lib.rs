// ABOUTME: Main library entry point for the macroplan meal-planning engine
// ABOUTME: Target calculation, plan aggregation, reference catalog and text export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macroplan
//!
//! Meal planning for coaches working with athletes: compute daily calorie
//! and macro targets from biometrics, assemble seven-day plans from a food
//! catalog, and roll the plan up into meal, day and week totals graded
//! against those targets.
//!
//! ## Architecture
//!
//! - **Core** (`macroplan-core`): errors, constants and the plain data models
//! - **Config**: tunable coefficients with environment overrides
//! - **Intelligence**: the macro calculator and the aggregation engine
//! - **Catalog**: foods and meal templates behind the [`catalog::FoodLookup`] seam
//! - **Formatters**: plain-text plan export
//!
//! ## Example Usage
//!
//! ```rust
//! use macroplan::catalog::FoodCatalog;
//! use macroplan::config::NutritionConfig;
//! use macroplan::intelligence::{calculate_targets, summarize_plan};
//! use macroplan::models::{ActivityLevel, Biometrics, Gender, Goal, MealPlan, MealSlotKind};
//! use macroplan::errors::AppResult;
//! use uuid::Uuid;
//!
//! fn main() -> AppResult<()> {
//!     let config = NutritionConfig::default();
//!     let targets = calculate_targets(
//!         &Biometrics {
//!             weight_lbs: 180.0,
//!             height_inches: 72,
//!             age: 25,
//!             gender: Gender::Male,
//!             activity_level: ActivityLevel::Active,
//!             goal: Goal::Gain,
//!         },
//!         &config,
//!     )?;
//!
//!     let mut plan = MealPlan::new(Uuid::new_v4(), targets);
//!     plan.add_item(0, MealSlotKind::Lunch, "p1", 6.0)?;
//!
//!     let catalog = FoodCatalog::builtin();
//!     let summary = summarize_plan(&plan, &catalog, &config.status_bands);
//!     assert_eq!(summary.active_days, 1);
//!     Ok(())
//! }
//! ```

pub use macroplan_core::{constants, errors, models};

/// Athlete profiles and height helpers
pub mod athlete;
/// Food and meal template reference data
pub mod catalog;
/// Tunable nutrition configuration
pub mod config;
/// Plan export formatting
pub mod formatters;
/// Target calculation and plan aggregation
pub mod intelligence;
/// Tracing subscriber setup
pub mod logging;
/// Shared numeric helpers
pub mod utils;
