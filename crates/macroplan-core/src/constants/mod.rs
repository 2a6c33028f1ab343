// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, macronutrient energy densities, and plan shape constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable coefficients (activity
//! multipliers, goal deltas, macro split) live in the configuration layer;
//! the values here are physical facts that never change.

/// Imperial to metric conversion factors
pub mod units {
    /// Kilograms per pound (exact international avoirdupois pound)
    pub const KG_PER_LB: f64 = 0.453_592_37;

    /// Centimeters per inch (exact)
    pub const CM_PER_INCH: f64 = 2.54;

    /// Inches per foot
    pub const INCHES_PER_FOOT: u32 = 12;
}

/// Metabolizable energy of each macronutrient (Atwater factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Meal plan shape
pub mod plan {
    /// Every plan covers exactly one week
    pub const DAYS_PER_PLAN: usize = 7;

    /// Short day labels, Monday first
    pub const DAY_NAMES: [&str; DAYS_PER_PLAN] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    /// Full day labels used by exports
    pub const DAY_NAMES_LONG: [&str; DAYS_PER_PLAN] = [
        "MONDAY",
        "TUESDAY",
        "WEDNESDAY",
        "THURSDAY",
        "FRIDAY",
        "SATURDAY",
        "SUNDAY",
    ];
}
