// ABOUTME: Configuration module for tunable nutrition parameters
// ABOUTME: Re-exports the nutrition config tree and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Nutrition**: calculator coefficients, goal deltas, macro split and
//!   status bands, loaded once from defaults plus `MACROPLAN_*` overrides
//! - **Error**: validation and parsing failures, convertible into `AppError`

/// Configuration error types
pub mod error;
/// Nutrition calculation configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitConfig,
    NutritionConfig, StatusBandsConfig,
};
