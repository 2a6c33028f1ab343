// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Athlete file commands for macroplan-cli
// ABOUTME: Handles create, show and goal change operations on athlete JSON files

use std::path::Path;

use macroplan::athlete::{AthleteProfile, NewAthlete};
use macroplan::config::NutritionConfig;
use macroplan::errors::AppResult;
use macroplan::models::Goal;
use tracing::info;

use crate::helpers::display::{display_athlete, display_targets, print_json};
use crate::helpers::files::{read_json, write_json};
use crate::BiometricArgs;

/// Flags for `athlete create`
pub struct CreateArgs<'a> {
    pub name: String,
    pub sport: String,
    pub biometrics: &'a BiometricArgs,
    pub preferences: String,
    pub restrictions: String,
}

/// Create an athlete file
pub fn create(args: CreateArgs<'_>, out: &Path) -> AppResult<()> {
    let athlete = AthleteProfile::create(
        NewAthlete {
            name: args.name,
            sport: args.sport,
            biometrics: args.biometrics.to_biometrics(),
            preferences: args.preferences,
            restrictions: args.restrictions,
        },
        NutritionConfig::global(),
    )?;
    write_json(out, &athlete)?;
    info!(athlete_id = %athlete.id, path = %out.display(), "Saved athlete");
    display_athlete(&athlete);
    Ok(())
}

/// Print an athlete file
pub fn show(file: &Path, json: bool) -> AppResult<()> {
    let athlete: AthleteProfile = read_json(file)?;
    if json {
        print_json(&athlete)
    } else {
        display_athlete(&athlete);
        Ok(())
    }
}

/// Change the goal and rewrite the file with fresh targets
pub fn set_goal(file: &Path, goal: Goal) -> AppResult<()> {
    let mut athlete: AthleteProfile = read_json(file)?;
    let targets = athlete.set_goal(goal, NutritionConfig::global())?;
    write_json(file, &athlete)?;
    info!(athlete_id = %athlete.id, %goal, "Updated goal");
    display_targets(&targets);
    Ok(())
}
