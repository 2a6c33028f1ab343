// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Target calculation command for macroplan-cli
// ABOUTME: Converts biometric flags into a Biometrics record and prints the computed targets

use macroplan::athlete::height_from_feet_inches;
use macroplan::config::NutritionConfig;
use macroplan::errors::AppResult;
use macroplan::intelligence::calculate_targets;
use macroplan::models::Biometrics;
use tracing::info;

use crate::helpers::display::{display_targets, print_json};
use crate::BiometricArgs;

impl BiometricArgs {
    /// Biometrics record from command-line flags
    pub fn to_biometrics(&self) -> Biometrics {
        Biometrics {
            weight_lbs: self.weight,
            height_inches: height_from_feet_inches(&self.feet, &self.inches),
            age: self.age,
            gender: self.gender,
            activity_level: self.activity,
            goal: self.goal,
        }
    }
}

/// Compute and print targets
pub fn show(args: &BiometricArgs, json: bool) -> AppResult<()> {
    let biometrics = args.to_biometrics();
    let targets = calculate_targets(&biometrics, NutritionConfig::global())?;
    info!(calories = targets.calories, "Computed targets");
    if json {
        print_json(&targets)
    } else {
        display_targets(&targets);
        Ok(())
    }
}
