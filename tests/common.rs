// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample biometrics, athletes and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macroplan`
//!
//! Common fixtures so each integration test builds athletes and plans the
//! same way.

use std::sync::Once;

use macroplan::athlete::{AthleteProfile, NewAthlete};
use macroplan::config::NutritionConfig;
use macroplan::models::{
    ActivityLevel, Biometrics, FoodCategory, FoodItem, Gender, Goal, MealPlan,
};
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another test binary thread may have installed one already
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// 180 lb, 6'0", 25 year old active male looking to gain
pub const fn male_gain_biometrics() -> Biometrics {
    Biometrics {
        weight_lbs: 180.0,
        height_inches: 72,
        age: 25,
        gender: Gender::Male,
        activity_level: ActivityLevel::Active,
        goal: Goal::Gain,
    }
}

/// 140 lb, 5'5", 16 year old moderately active female maintaining
pub const fn female_maintain_biometrics() -> Biometrics {
    Biometrics {
        weight_lbs: 140.0,
        height_inches: 65,
        age: 16,
        gender: Gender::Female,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
    }
}

/// A basketball player with notes, created under default configuration
pub fn sample_athlete() -> AthleteProfile {
    AthleteProfile::create(
        NewAthlete {
            name: "Jordan Miles".into(),
            sport: "Basketball".into(),
            biometrics: male_gain_biometrics(),
            preferences: "Loves rice bowls".into(),
            restrictions: "No shellfish".into(),
        },
        &NutritionConfig::default(),
    )
    .unwrap()
}

/// An empty plan seeded with the sample athlete's targets
pub fn empty_plan_for(athlete: &AthleteProfile) -> MealPlan {
    MealPlan::new(athlete.id, athlete.targets())
}

/// A custom food with round numbers for arithmetic checks
pub fn round_number_food(id: &str) -> FoodItem {
    FoodItem::new(id, "Test Food", "serving", FoodCategory::Extra, 100.0, 10.0, 5.0, 2.0)
}
