// ABOUTME: Criterion benchmarks for target calculation and plan aggregation
// ABOUTME: Measures targets, weekly summaries over growing plans, and text export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calculator and aggregation engine.
//!
//! Plans are filled with the built-in templates so every lookup hits the
//! real catalog.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macroplan::athlete::{AthleteProfile, NewAthlete};
use macroplan::catalog::{FoodCatalog, TemplateCatalog};
use macroplan::config::NutritionConfig;
use macroplan::formatters::render_plan_text;
use macroplan::intelligence::{calculate_targets, summarize_plan};
use macroplan::models::{ActivityLevel, Biometrics, Gender, Goal, MealPlan};

fn biometrics() -> Biometrics {
    Biometrics {
        weight_lbs: 185.0,
        height_inches: 74,
        age: 21,
        gender: Gender::Male,
        activity_level: ActivityLevel::VeryActive,
        goal: Goal::BulkModerate,
    }
}

fn athlete() -> AthleteProfile {
    AthleteProfile::create(
        NewAthlete {
            name: "Bench Athlete".into(),
            sport: "Football".into(),
            biometrics: biometrics(),
            preferences: String::new(),
            restrictions: String::new(),
        },
        &NutritionConfig::default(),
    )
    .unwrap()
}

/// A plan with every template inserted `rounds` times into every day
fn filled_plan(athlete: &AthleteProfile, rounds: usize) -> MealPlan {
    let templates = TemplateCatalog::builtin();
    let mut plan = MealPlan::new(athlete.id, athlete.targets());
    for day in 0..7 {
        for _ in 0..rounds {
            for template in templates.all() {
                plan.insert_template(day, template.slot, template).unwrap();
            }
        }
    }
    plan
}

fn bench_targets(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let input = biometrics();

    c.bench_function("calculate_targets", |b| {
        b.iter(|| calculate_targets(black_box(&input), black_box(&config)));
    });
}

fn bench_summarize_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_plan");
    let athlete = athlete();
    let catalog = FoodCatalog::builtin();
    let bands = NutritionConfig::default().status_bands;

    for rounds in [1_usize, 4, 16] {
        let plan = filled_plan(&athlete, rounds);
        group.throughput(Throughput::Elements(plan.item_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &plan, |b, plan| {
            b.iter(|| summarize_plan(black_box(plan), &catalog, &bands));
        });
    }

    group.finish();
}

fn bench_text_export(c: &mut Criterion) {
    let athlete = athlete();
    let catalog = FoodCatalog::builtin();
    let bands = NutritionConfig::default().status_bands;
    let plan = filled_plan(&athlete, 1);

    c.bench_function("render_plan_text", |b| {
        b.iter(|| render_plan_text(black_box(&plan), &athlete, &catalog, &bands));
    });
}

criterion_group!(
    benches,
    bench_targets,
    bench_summarize_plan,
    bench_text_export
);
criterion_main!(benches);
