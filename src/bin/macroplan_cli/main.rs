// ABOUTME: macroplan-cli - command-line tool for athlete targets and weekly meal plans
// ABOUTME: Computes targets, browses the catalog, and edits plan files on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute daily targets
//! macroplan-cli targets --weight 180 --feet 6 --inches 0 --age 25 --gender male \
//!     --activity active --goal gain
//!
//! # Create an athlete file
//! macroplan-cli athlete create --name "Jordan" --sport Basketball --weight 180 \
//!     --feet 6 --inches 0 --age 25 --gender male --activity active --goal gain \
//!     --out jordan.json
//!
//! # Start a plan and fill it
//! macroplan-cli plan new --athlete jordan.json --out plan.json
//! macroplan-cli plan template plan.json --day 1 --template mt24
//! macroplan-cli plan add plan.json --day 1 --slot lunch --food p1 --quantity 6
//! macroplan-cli plan copy-day plan.json --day 1
//!
//! # After changing the athlete's goal
//! macroplan-cli plan retarget plan.json --athlete jordan.json
//!
//! # Review and export
//! macroplan-cli plan summary plan.json
//! macroplan-cli plan export plan.json --athlete jordan.json --out plan.txt
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use macroplan::errors::AppError;
use macroplan::logging::LoggingConfig;
use macroplan::models::{ActivityLevel, FoodCategory, Gender, Goal, MealSlotKind};

#[derive(Parser)]
#[command(
    name = "macroplan-cli",
    about = "Athlete macro targets and weekly meal plans",
    long_about = "Command-line tool for computing athlete calorie and macro targets and building seven-day meal plans stored as JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily targets from biometrics
    Targets {
        #[command(flatten)]
        biometrics: BiometricArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Athlete file commands
    Athlete {
        #[command(subcommand)]
        action: AthleteCommand,
    },

    /// Food catalog commands
    Foods {
        #[command(subcommand)]
        action: FoodsCommand,
    },

    /// Meal template commands
    Templates {
        #[command(subcommand)]
        action: TemplatesCommand,
    },

    /// Meal plan file commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

/// Biometric inputs shared by `targets` and `athlete create`
#[derive(Args)]
pub struct BiometricArgs {
    /// Body weight in pounds
    #[arg(long)]
    pub weight: f64,

    /// Height, feet part
    #[arg(long, default_value = "0")]
    pub feet: String,

    /// Height, inches part
    #[arg(long, default_value = "0")]
    pub inches: String,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// male or female
    #[arg(long)]
    pub gender: Gender,

    /// sedentary, light, moderate, active or veryActive
    #[arg(long)]
    pub activity: ActivityLevel,

    /// loseAggressive, lose, maintain, gain, bulkModerate or bulkHard
    #[arg(long)]
    pub goal: Goal,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AthleteCommand {
    /// Create an athlete file with computed targets
    Create {
        /// Athlete name
        #[arg(long)]
        name: String,

        /// Sport played
        #[arg(long, default_value = "")]
        sport: String,

        #[command(flatten)]
        biometrics: BiometricArgs,

        /// Foods the athlete likes
        #[arg(long, default_value = "")]
        preferences: String,

        /// Foods the athlete must avoid
        #[arg(long, default_value = "")]
        restrictions: String,

        /// Output file
        #[arg(long)]
        out: PathBuf,
    },

    /// Show an athlete file
    Show {
        /// Athlete file
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change an athlete's goal and recompute targets
    SetGoal {
        /// Athlete file
        file: PathBuf,

        /// New goal
        #[arg(long)]
        goal: Goal,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodsCommand {
    /// List catalog foods
    List {
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,

        /// Category filter
        #[arg(long)]
        category: Option<FoodCategory>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplatesCommand {
    /// List meal templates
    List {
        /// Only templates designed for this slot
        #[arg(long)]
        slot: Option<MealSlotKind>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Day number, Monday = 1
fn day_arg(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(day @ 1..=7) => Ok(day - 1),
        _ => Err(format!("'{raw}' is not a day number between 1 and 7")),
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Create an empty plan for an athlete
    New {
        /// Athlete file
        #[arg(long)]
        athlete: PathBuf,

        /// Output file
        #[arg(long)]
        out: PathBuf,
    },

    /// Re-snapshot the athlete's current targets into a plan
    Retarget {
        /// Plan file
        file: PathBuf,
        /// Athlete file
        #[arg(long)]
        athlete: PathBuf,
    },

    /// Add a food to a slot
    Add {
        /// Plan file
        file: PathBuf,
        /// Day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
        /// Meal slot
        #[arg(long)]
        slot: MealSlotKind,
        /// Catalog food id
        #[arg(long)]
        food: String,
        /// Amount in the food's unit
        #[arg(long, default_value = "1")]
        quantity: f64,
    },

    /// Remove the item at a position in a slot
    Remove {
        /// Plan file
        file: PathBuf,
        /// Day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
        /// Meal slot
        #[arg(long)]
        slot: MealSlotKind,
        /// Zero-based item position
        #[arg(long)]
        index: usize,
    },

    /// Change the quantity of an item
    SetQuantity {
        /// Plan file
        file: PathBuf,
        /// Day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
        /// Meal slot
        #[arg(long)]
        slot: MealSlotKind,
        /// Zero-based item position
        #[arg(long)]
        index: usize,
        /// New amount; unparsable text stores 0
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
    },

    /// Insert a meal template
    Template {
        /// Plan file
        file: PathBuf,
        /// Day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
        /// Template id
        #[arg(long)]
        template: String,
        /// Target slot; defaults to the template's own slot
        #[arg(long)]
        slot: Option<MealSlotKind>,
    },

    /// Empty one slot
    Clear {
        /// Plan file
        file: PathBuf,
        /// Day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
        /// Meal slot
        #[arg(long)]
        slot: MealSlotKind,
    },

    /// Copy one day over all the others
    CopyDay {
        /// Plan file
        file: PathBuf,
        /// Source day number, Monday = 1
        #[arg(long, value_parser = day_arg)]
        day: usize,
    },

    /// Show day totals, weekly average and attainment
    Summary {
        /// Plan file
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the plan as text
    Export {
        /// Plan file
        file: PathBuf,
        /// Athlete file for the header and notes
        #[arg(long)]
        athlete: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Warning: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Targets { biometrics, json } => commands::targets::show(&biometrics, json)?,
        Command::Athlete { action } => match action {
            AthleteCommand::Create {
                name,
                sport,
                biometrics,
                preferences,
                restrictions,
                out,
            } => commands::athlete::create(
                commands::athlete::CreateArgs {
                    name,
                    sport,
                    biometrics: &biometrics,
                    preferences,
                    restrictions,
                },
                &out,
            )?,
            AthleteCommand::Show { file, json } => commands::athlete::show(&file, json)?,
            AthleteCommand::SetGoal { file, goal } => commands::athlete::set_goal(&file, goal)?,
        },
        Command::Foods { action } => match action {
            FoodsCommand::List {
                search,
                category,
                json,
            } => commands::catalog::list_foods(&search, category, json)?,
        },
        Command::Templates { action } => match action {
            TemplatesCommand::List { slot, json } => commands::catalog::list_templates(slot, json)?,
        },
        Command::Plan { action } => run_plan(action)?,
    }
    Ok(())
}

fn run_plan(action: PlanCommand) -> anyhow::Result<()> {
    use commands::plan;

    match action {
        PlanCommand::New { athlete, out } => plan::create(&athlete, &out)?,
        PlanCommand::Retarget { file, athlete } => plan::retarget(&file, &athlete)?,
        PlanCommand::Add {
            file,
            day,
            slot,
            food,
            quantity,
        } => plan::add(&file, day, slot, &food, quantity)?,
        PlanCommand::Remove {
            file,
            day,
            slot,
            index,
        } => plan::remove(&file, day, slot, index)?,
        PlanCommand::SetQuantity {
            file,
            day,
            slot,
            index,
            quantity,
        } => plan::set_quantity(&file, day, slot, index, &quantity)?,
        PlanCommand::Template {
            file,
            day,
            template,
            slot,
        } => plan::insert_template(&file, day, &template, slot)?,
        PlanCommand::Clear { file, day, slot } => plan::clear(&file, day, slot)?,
        PlanCommand::CopyDay { file, day } => plan::copy_day(&file, day)?,
        PlanCommand::Summary { file, json } => plan::summary(&file, json)?,
        PlanCommand::Export { file, athlete, out } => {
            plan::export(&file, &athlete, out.as_deref())?;
        }
    }
    Ok(())
}
