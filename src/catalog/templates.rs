// ABOUTME: Meal template catalog with the built-in template set
// ABOUTME: Lookup by id and filtering by slot hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{MealSlotKind, MealTemplate, TemplateItem};

use MealSlotKind::{AmSnack, Breakfast, Dinner, Evening, Lunch, PmSnack};

type TemplateRow = (
    &'static str,
    &'static str,
    &'static str,
    MealSlotKind,
    &'static [(&'static str, f64)],
);

const TEMPLATE_TABLE: &[TemplateRow] = &[
    (
        "mt1",
        "Evening Protein Shake",
        "Recovery shake before bed",
        Evening,
        &[("d2", 12.0), ("cv1", 1.0), ("f1", 1.0), ("fa2", 1.25)],
    ),
    (
        "mt2",
        "Morning Hydration Protocol",
        "Hydration mix plus creatine to start the day",
        Breakfast,
        &[("cv2", 1.0), ("cv3", 1.0)],
    ),
    (
        "mt24",
        "Apple Pie Overnight Oats (3:1)",
        "35g protein, made the night before a morning session",
        Breakfast,
        &[
            ("c21", 0.75),
            ("cv1", 1.0),
            ("d1", 4.0),
            ("d15", 0.25),
            ("f13", 1.0),
            ("fa10", 1.0),
            ("fa3", 1.0),
            ("e1", 2.0),
        ],
    ),
    (
        "mt25",
        "PB Banana Overnight Oats (3:1)",
        "36g protein, classic combo",
        Breakfast,
        &[
            ("c21", 0.75),
            ("cv1", 1.0),
            ("d1", 4.0),
            ("d15", 0.25),
            ("f1", 1.0),
            ("fa2", 2.0),
            ("e2", 1.0),
            ("fa10", 1.0),
        ],
    ),
    (
        "mt26",
        "Blueberry Muffin Overnight Oats (3:1)",
        "35g protein, tastes like dessert",
        Breakfast,
        &[
            ("c21", 0.75),
            ("cv1", 1.0),
            ("d1", 4.0),
            ("d15", 0.33),
            ("f7", 0.75),
            ("fa3", 1.0),
            ("e1", 2.0),
            ("fa10", 1.0),
        ],
    ),
    (
        "mt6",
        "Breakfast Burrito (3 eggs)",
        "Eggs, sausage and cheese in two tortillas",
        Breakfast,
        &[
            ("p13", 3.0),
            ("p15", 3.0),
            ("d6", 0.75),
            ("c10", 2.0),
            ("fa1", 0.2),
            ("f8", 12.0),
        ],
    ),
    (
        "mt15",
        "Bagel Breakfast Sandwich",
        "Hearty bagel sandwich with eggs and sausage",
        Breakfast,
        &[
            ("c13", 1.0),
            ("p13", 3.0),
            ("p15", 3.0),
            ("d6", 0.75),
            ("d10", 0.5),
            ("f8", 12.0),
        ],
    ),
    (
        "mt3",
        "PB&J Sandwich + Banana + Milk",
        "Easy calorie-dense snack",
        AmSnack,
        &[("fa2", 2.0), ("e5", 2.0), ("c8", 2.0), ("f1", 1.0), ("d1", 8.0)],
    ),
    (
        "mt4",
        "Apple + Almond Butter + Milk",
        "Light afternoon snack",
        PmSnack,
        &[("f3", 1.0), ("fa3", 1.5), ("d1", 8.0)],
    ),
    (
        "mt5",
        "Grapes + Milk Snack",
        "Quick carbs and protein",
        PmSnack,
        &[("f5", 1.5), ("d1", 8.0)],
    ),
    (
        "mt7",
        "Steak + Rice + Veggies",
        "Classic muscle-building lunch",
        Lunch,
        &[
            ("p5", 5.5),
            ("c1", 1.5),
            ("v1", 1.0),
            ("d10", 0.5),
            ("d2", 8.0),
        ],
    ),
    (
        "mt11",
        "Sushi Bowl (Shrimp)",
        "Light and protein-packed",
        Lunch,
        &[("p10", 7.0), ("r8", 1.75), ("fa1", 0.35), ("d2", 8.0)],
    ),
    (
        "mt8",
        "Grilled Chicken + Rice + Rolls",
        "Lean protein dinner",
        Dinner,
        &[("p1", 5.5), ("c1", 1.5), ("fa1", 0.3), ("c14", 2.0)],
    ),
    (
        "mt19",
        "Orange Chicken with Rice",
        "Takeout-style chicken over brown rice",
        Dinner,
        &[
            ("p1", 8.0),
            ("c2", 0.75),
            ("c27", 0.5),
            ("fa11", 0.5),
            ("v13", 1.0),
            ("f8", 1.5),
            ("e10", 1.0),
            ("e2", 0.5),
            ("v12", 1.0),
        ],
    ),
];

/// Read-only set of meal templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<MealTemplate>,
}

impl TemplateCatalog {
    /// Catalog preloaded with the built-in templates
    #[must_use]
    pub fn builtin() -> Self {
        let templates = TEMPLATE_TABLE
            .iter()
            .map(|&(id, name, description, slot, items)| MealTemplate {
                id: id.to_owned(),
                name: name.to_owned(),
                description: description.to_owned(),
                slot,
                items: items
                    .iter()
                    .map(|&(food_id, quantity)| TemplateItem::new(food_id, quantity))
                    .collect(),
            })
            .collect();
        Self { templates }
    }

    /// Catalog over caller-supplied templates
    #[must_use]
    pub const fn with_templates(templates: Vec<MealTemplate>) -> Self {
        Self { templates }
    }

    /// Template by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub fn get(&self, template_id: &str) -> AppResult<&MealTemplate> {
        self.templates
            .iter()
            .find(|template| template.id == template_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Meal template '{template_id}'"))
                    .with_resource_id(template_id)
            })
    }

    /// Templates designed for the given slot
    pub fn for_slot(&self, slot: MealSlotKind) -> impl Iterator<Item = &MealTemplate> {
        self.templates
            .iter()
            .filter(move |template| template.slot == slot)
    }

    /// All templates in catalog order
    #[must_use]
    pub fn all(&self) -> &[MealTemplate] {
        &self.templates
    }
}
