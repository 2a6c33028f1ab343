// ABOUTME: Reference data catalog for foods and meal templates
// ABOUTME: Defines the FoodLookup seam injected into the aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference catalog
//!
//! Foods and meal templates are shared, read-only reference data. The
//! aggregation engine never reaches for a global catalog; callers hand it
//! something implementing [`FoodLookup`].

use std::collections::HashMap;

use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{FoodCategory, FoodItem};
use tracing::debug;

/// Built-in food table
mod foods;
/// Meal template catalog
pub mod templates;

pub use templates::TemplateCatalog;

/// Outcome of resolving a food id
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodResolution<'a> {
    /// The id names a known food
    Resolved(&'a FoodItem),
    /// The id is unknown; the item renders as a ghost and contributes zero
    Missing,
}

impl<'a> FoodResolution<'a> {
    /// The resolved food, if any
    #[must_use]
    pub const fn food(self) -> Option<&'a FoodItem> {
        match self {
            Self::Resolved(food) => Some(food),
            Self::Missing => None,
        }
    }
}

/// Resolves food ids to catalog entries
pub trait FoodLookup {
    /// Look up a food by id
    fn resolve(&self, food_id: &str) -> FoodResolution<'_>;
}

/// In-memory food table with id index
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the built-in food table
    #[must_use]
    pub fn builtin() -> Self {
        let foods = foods::builtin_foods();
        let index = foods
            .iter()
            .enumerate()
            .map(|(position, food)| (food.id.clone(), position))
            .collect();
        Self { foods, index }
    }

    /// Build a catalog from a list of foods
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` on a duplicate id and `InvalidInput`
    /// on negative or non-finite macros
    pub fn from_foods(foods: impl IntoIterator<Item = FoodItem>) -> AppResult<Self> {
        let mut catalog = Self::new();
        for food in foods {
            catalog.add_custom(food)?;
        }
        Ok(catalog)
    }

    /// Add a coach-defined food
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken and `InvalidInput`
    /// on negative or non-finite macros
    pub fn add_custom(&mut self, food: FoodItem) -> AppResult<()> {
        if self.index.contains_key(&food.id) {
            return Err(AppError::already_exists(format!("Food '{}'", food.id))
                .with_resource_id(food.id));
        }
        if !food.has_valid_macros() {
            return Err(AppError::invalid_input(format!(
                "Food '{}' has negative or non-finite macros",
                food.id
            ))
            .with_resource_id(food.id));
        }
        debug!(food_id = %food.id, "Added custom food");
        self.index.insert(food.id.clone(), self.foods.len());
        self.foods.push(food);
        Ok(())
    }

    /// Food by id
    #[must_use]
    pub fn get(&self, food_id: &str) -> Option<&FoodItem> {
        self.index.get(food_id).and_then(|&position| self.foods.get(position))
    }

    /// All foods in insertion order
    #[must_use]
    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Case-insensitive name search, optionally restricted to a category
    ///
    /// An empty query matches every name.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<FoodCategory>) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|food| category.is_none_or(|wanted| food.category == wanted))
            .filter(|food| needle.is_empty() || food.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl FoodLookup for FoodCatalog {
    fn resolve(&self, food_id: &str) -> FoodResolution<'_> {
        self.get(food_id)
            .map_or(FoodResolution::Missing, FoodResolution::Resolved)
    }
}
