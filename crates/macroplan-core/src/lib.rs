// ABOUTME: Core types and constants for the Macroplan athlete nutrition planner
// ABOUTME: Foundation crate with error handling, nutrition constants, and plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macroplan Core
//!
//! Foundation crate providing shared types and constants for the Macroplan
//! athlete nutrition planner. It changes rarely and carries no calculation
//! logic beyond the meal plan's own shape invariants.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions, Atwater factors, and plan shape
//! - **models**: Athlete enums, `Targets`, `FoodItem`, `MacroTotals`, and `MealPlan`

/// Unified error handling system with standard error codes
pub mod errors;

/// Physical constants and plan shape
pub mod constants;

/// Core data models (foods, targets, meal plans, templates)
pub mod models;
