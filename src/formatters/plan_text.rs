// ABOUTME: Plain-text rendering of a weekly meal plan for printing or sharing
// ABOUTME: Every number comes from the aggregation engine; no arithmetic happens here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use macroplan_core::constants::plan::DAY_NAMES_LONG;
use macroplan_core::models::{MacroAverage, MacroTotals, MealPlan, PlanItem};

use crate::athlete::AthleteProfile;
use crate::catalog::{FoodLookup, FoodResolution};
use crate::config::StatusBandsConfig;
use crate::intelligence::aggregation::{summarize_plan, MacroAttainment, PlanSummary};
use crate::utils::rounding::round_half_up;

const RULE: &str = "------------------------------------------------------------";

/// One-line macro summary, e.g. `2450 cal | 180P | 260C | 75F`
///
/// Gram values are rounded to whole numbers for display.
#[must_use]
pub fn format_macros(totals: &MacroTotals) -> String {
    format!(
        "{} cal | {}P | {}C | {}F",
        totals.calories,
        round_half_up(totals.protein),
        round_half_up(totals.carbs),
        round_half_up(totals.fat)
    )
}

fn format_average(average: &MacroAverage) -> String {
    format!(
        "{} cal | {}P | {}C | {}F",
        average.calories, average.protein, average.carbs, average.fat
    )
}

/// Text export of one plan for one athlete
///
/// The protocol label follows the athlete's current goal while every target
/// comes from the plan's own snapshot. When the two disagree the header says
/// so. Render with `to_string()` or any `fmt::Write` sink.
pub struct PlanTextExport<'a> {
    plan: &'a MealPlan,
    athlete: &'a AthleteProfile,
    lookup: &'a dyn FoodLookup,
    summary: PlanSummary,
}

impl<'a> PlanTextExport<'a> {
    /// Prepare an export, running the aggregation once up front
    #[must_use]
    pub fn new(
        plan: &'a MealPlan,
        athlete: &'a AthleteProfile,
        lookup: &'a dyn FoodLookup,
        bands: &StatusBandsConfig,
    ) -> Self {
        Self {
            plan,
            athlete,
            lookup,
            summary: summarize_plan(plan, lookup, bands),
        }
    }

    /// The roll-up the export is rendered from
    #[must_use]
    pub const fn summary(&self) -> &PlanSummary {
        &self.summary
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let athlete = self.athlete;
        let targets = &self.plan.targets;
        writeln!(f, "NUTRITION PLAN FOR {}", athlete.name.to_uppercase())?;
        if athlete.sport.is_empty() {
            writeln!(f, "7-Day Performance Program")?;
        } else {
            writeln!(f, "7-Day {} Performance Program", athlete.sport)?;
        }
        writeln!(f, "{}", athlete.biometrics().goal.protocol_label())?;
        writeln!(f)?;
        writeln!(f, "DAILY TARGETS")?;
        writeln!(
            f,
            "{} Calories | {}g Protein | {}g Carbs | {}g Fat",
            targets.calories, targets.protein, targets.carbs, targets.fat
        )?;
        let current = athlete.targets();
        if current != *targets {
            writeln!(
                f,
                "Note: plan targets predate the athlete's current targets ({} Calories | {}g Protein | {}g Carbs | {}g Fat)",
                current.calories, current.protein, current.carbs, current.fat
            )?;
        }
        writeln!(f)
    }

    fn write_notes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let athlete = self.athlete;
        let preferences = athlete.preferences.trim();
        let restrictions = athlete.restrictions.trim();
        if preferences.is_empty() && restrictions.is_empty() {
            return Ok(());
        }
        writeln!(f, "NOTES - {}", athlete.name.to_uppercase())?;
        writeln!(f, "  * All meat and seafood weights are cooked weights")?;
        writeln!(f, "  * All rice and pasta are cooked measurements")?;
        if !preferences.is_empty() {
            writeln!(f, "  * Preferences: {preferences}")?;
        }
        if !restrictions.is_empty() {
            writeln!(f, "  * Avoid: {restrictions}")?;
        }
        writeln!(f)
    }

    fn write_item(&self, f: &mut fmt::Formatter<'_>, item: &PlanItem) -> fmt::Result {
        match self.lookup.resolve(&item.food_id) {
            FoodResolution::Resolved(food) => {
                writeln!(f, "    - {} {} {}", item.quantity, food.unit, food.name)
            }
            FoodResolution::Missing => {
                writeln!(f, "    - {} x unknown food '{}'", item.quantity, item.food_id)
            }
        }
    }

    fn write_days(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day_plan, (attainment, day_name)) in self
            .plan
            .days
            .iter()
            .zip(self.summary.days.iter().zip(DAY_NAMES_LONG))
        {
            writeln!(f, "{RULE}")?;
            writeln!(f, "{day_name}")?;
            if day_plan.is_empty() {
                writeln!(f, "  (no meals planned)")?;
                continue;
            }
            for meal in &attainment.meals {
                writeln!(f, "  {}", meal.slot.label())?;
                for item in day_plan.slot(meal.slot) {
                    self.write_item(f, item)?;
                }
                writeln!(f, "    => {}", format_macros(&meal.totals))?;
            }
            writeln!(
                f,
                "  {day_name} TOTAL: {}",
                format_macros(&attainment.totals)
            )?;
            write_attainment(f, &attainment.macros)?;
        }
        writeln!(f, "{RULE}")
    }

    fn write_weekly(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(
            f,
            "WEEKLY AVERAGE ({} of 7 days planned): {}",
            summary.active_days,
            format_average(&summary.weekly_average)
        )?;
        write_attainment(f, &summary.weekly_attainment)
    }
}

fn write_attainment(f: &mut fmt::Formatter<'_>, macros: &[MacroAttainment]) -> fmt::Result {
    let line = macros
        .iter()
        .map(|entry| {
            format!(
                "{} {}% ({})",
                entry.nutrient.label(),
                entry.percentage,
                entry.status
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "  {line}")
}

impl fmt::Display for PlanTextExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_notes(f)?;
        self.write_days(f)?;
        self.write_weekly(f)
    }
}

/// Render a plan to text
#[must_use]
pub fn render_plan_text(
    plan: &MealPlan,
    athlete: &AthleteProfile,
    lookup: &dyn FoodLookup,
    bands: &StatusBandsConfig,
) -> String {
    PlanTextExport::new(plan, athlete, lookup, bands).to_string()
}
