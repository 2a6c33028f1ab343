// ABOUTME: Athlete profile records with cached daily targets
// ABOUTME: Targets are recomputed on every biometric or goal change, never edited directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Athlete profiles
//!
//! An [`AthleteProfile`] owns its [`Targets`]. The only way to change them is
//! to change the biometrics or goal they derive from, which recomputes them
//! with the supplied configuration.

use chrono::{DateTime, Utc};
use macroplan_core::constants::units::INCHES_PER_FOOT;
use macroplan_core::errors::{AppError, AppResult, ErrorCode};
use macroplan_core::models::{Biometrics, Goal, Targets};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::NutritionConfig;
use crate::intelligence::calculate_targets;

/// Intake data for a new athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAthlete {
    /// Display name
    pub name: String,
    /// Sport played
    #[serde(default)]
    pub sport: String,
    /// Inputs to the target calculation
    #[serde(flatten)]
    pub biometrics: Biometrics,
    /// Foods the athlete likes
    #[serde(default)]
    pub preferences: String,
    /// Foods the athlete must avoid
    #[serde(default)]
    pub restrictions: String,
}

/// A stored athlete with derived targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Athlete identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Sport played
    pub sport: String,
    #[serde(flatten)]
    biometrics: Biometrics,
    /// Foods the athlete likes
    pub preferences: String,
    /// Foods the athlete must avoid
    pub restrictions: String,
    targets: Targets,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl AthleteProfile {
    /// Create a profile and compute its targets
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name and `InvalidInput` for
    /// biometrics the calculator rejects
    pub fn create(input: NewAthlete, config: &NutritionConfig) -> AppResult<Self> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Athlete name is required",
            ));
        }
        let targets = calculate_targets(&input.biometrics, config)?;
        let now = Utc::now();
        let profile = Self {
            id: Uuid::new_v4(),
            name,
            sport: input.sport.trim().to_owned(),
            biometrics: input.biometrics,
            preferences: input.preferences,
            restrictions: input.restrictions,
            targets,
            created_at: now,
            updated_at: now,
        };
        info!(athlete_id = %profile.id, calories = targets.calories, "Created athlete profile");
        Ok(profile)
    }

    /// Current biometrics
    #[must_use]
    pub const fn biometrics(&self) -> &Biometrics {
        &self.biometrics
    }

    /// Cached daily targets
    #[must_use]
    pub const fn targets(&self) -> Targets {
        self.targets
    }

    /// Replace biometrics and recompute targets
    ///
    /// On error the profile is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for biometrics the calculator rejects
    pub fn update_biometrics(
        &mut self,
        biometrics: Biometrics,
        config: &NutritionConfig,
    ) -> AppResult<Targets> {
        let targets = calculate_targets(&biometrics, config)?;
        self.biometrics = biometrics;
        self.targets = targets;
        self.updated_at = Utc::now();
        Ok(targets)
    }

    /// Change the goal and recompute targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for biometrics the calculator rejects
    pub fn set_goal(&mut self, goal: Goal, config: &NutritionConfig) -> AppResult<Targets> {
        self.update_biometrics(Biometrics { goal, ..self.biometrics }, config)
    }

    /// Recompute targets from the stored biometrics
    ///
    /// Used after loading a profile written under a different configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for biometrics the calculator rejects
    pub fn refresh_targets(&mut self, config: &NutritionConfig) -> AppResult<Targets> {
        self.update_biometrics(self.biometrics, config)
    }

    /// Height as feet and inches, e.g. `5'11"`
    #[must_use]
    pub fn height_display(&self) -> String {
        format_height(self.biometrics.height_inches)
    }

    /// Case-insensitive match on name or sport
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.sport.to_lowercase().contains(&needle)
    }
}

/// Render total inches as `feet'inches"`
#[must_use]
pub fn format_height(total_inches: u32) -> String {
    format!(
        "{}'{}\"",
        total_inches / INCHES_PER_FOOT,
        total_inches % INCHES_PER_FOOT
    )
}

/// Combine form-entered feet and inches into total inches
///
/// Each part is read up to its first non-digit; a part with no leading
/// digits counts as 0.
#[must_use]
pub fn height_from_feet_inches(feet: &str, inches: &str) -> u32 {
    leading_integer(feet)
        .saturating_mul(INCHES_PER_FOOT)
        .saturating_add(leading_integer(inches))
}

fn leading_integer(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}
