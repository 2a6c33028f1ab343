// ABOUTME: Meal plan document model with per-plan item identity and slot invariants
// ABOUTME: PlanItem, MealSlotKind, DayPlan, MealPlan, MealTemplate and their mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan document model
//!
//! A [`MealPlan`] is a targets snapshot plus exactly seven [`DayPlan`]s, each a
//! fixed mapping from the canonical [`MealSlotKind`] set to an ordered list of
//! [`PlanItem`]s. The plan owns every day and slot; foods and templates are
//! referenced by id only.
//!
//! Item ids are unique within one plan and are never reused while the plan
//! lives, including across a serialize/deserialize cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::plan::DAYS_PER_PLAN;
use crate::errors::{AppError, AppResult};
use crate::models::athlete::Targets;

/// Canonical meal slots, in display and summation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlotKind {
    /// Pre-workout breakfast
    Preworkout,
    /// Breakfast
    Breakfast,
    /// Mid-morning snack
    AmSnack,
    /// Lunch
    Lunch,
    /// Afternoon snack
    PmSnack,
    /// Dinner
    Dinner,
    /// Evening shake
    Evening,
}

impl MealSlotKind {
    /// Every slot in canonical order
    pub const ALL: [Self; 7] = [
        Self::Preworkout,
        Self::Breakfast,
        Self::AmSnack,
        Self::Lunch,
        Self::PmSnack,
        Self::Dinner,
        Self::Evening,
    ];

    /// Wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preworkout => "preworkout",
            Self::Breakfast => "breakfast",
            Self::AmSnack => "am_snack",
            Self::Lunch => "lunch",
            Self::PmSnack => "pm_snack",
            Self::Dinner => "dinner",
            Self::Evening => "evening",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Preworkout => "Pre-Workout Breakfast",
            Self::Breakfast => "Breakfast",
            Self::AmSnack => "AM Snack",
            Self::Lunch => "Lunch",
            Self::PmSnack => "PM Snack",
            Self::Dinner => "Dinner",
            Self::Evening => "Evening Shake",
        }
    }
}

impl fmt::Display for MealSlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlotKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown meal slot '{s}'")))
    }
}

/// Plan-scoped item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quantity of one catalog food inside a slot
///
/// `food_id` is a weak reference resolved against the catalog at calculation
/// time; the item never embeds a copy of the food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// Identifier unique within the owning plan
    pub id: ItemId,
    /// Catalog key
    pub food_id: String,
    /// Amount in the food's unit, never negative
    pub quantity: f64,
}

/// Clamp a quantity to a finite non-negative number; anything else becomes 0
#[must_use]
pub fn coerce_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    }
}

/// Parse user-entered quantity text, coercing invalid input to 0
#[must_use]
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, coerce_quantity)
}

/// One day of the plan: a list of items for every canonical slot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    /// Pre-workout breakfast items
    pub preworkout: Vec<PlanItem>,
    /// Breakfast items
    pub breakfast: Vec<PlanItem>,
    /// Mid-morning snack items
    pub am_snack: Vec<PlanItem>,
    /// Lunch items
    pub lunch: Vec<PlanItem>,
    /// Afternoon snack items
    pub pm_snack: Vec<PlanItem>,
    /// Dinner items
    pub dinner: Vec<PlanItem>,
    /// Evening shake items
    pub evening: Vec<PlanItem>,
}

impl DayPlan {
    /// Items of one slot
    #[must_use]
    pub fn slot(&self, kind: MealSlotKind) -> &[PlanItem] {
        match kind {
            MealSlotKind::Preworkout => &self.preworkout,
            MealSlotKind::Breakfast => &self.breakfast,
            MealSlotKind::AmSnack => &self.am_snack,
            MealSlotKind::Lunch => &self.lunch,
            MealSlotKind::PmSnack => &self.pm_snack,
            MealSlotKind::Dinner => &self.dinner,
            MealSlotKind::Evening => &self.evening,
        }
    }

    fn slot_mut(&mut self, kind: MealSlotKind) -> &mut Vec<PlanItem> {
        match kind {
            MealSlotKind::Preworkout => &mut self.preworkout,
            MealSlotKind::Breakfast => &mut self.breakfast,
            MealSlotKind::AmSnack => &mut self.am_snack,
            MealSlotKind::Lunch => &mut self.lunch,
            MealSlotKind::PmSnack => &mut self.pm_snack,
            MealSlotKind::Dinner => &mut self.dinner,
            MealSlotKind::Evening => &mut self.evening,
        }
    }

    /// Slots paired with their items, in canonical order
    pub fn slots(&self) -> impl Iterator<Item = (MealSlotKind, &[PlanItem])> {
        MealSlotKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.slot(kind)))
    }

    /// Every item of the day in canonical slot order
    pub fn items(&self) -> impl Iterator<Item = &PlanItem> {
        self.slots().flat_map(|(_, items)| items.iter())
    }

    /// Whether no slot holds an item
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// Number of items across all slots
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut PlanItem> {
        [
            &mut self.preworkout,
            &mut self.breakfast,
            &mut self.am_snack,
            &mut self.lunch,
            &mut self.pm_snack,
            &mut self.dinner,
            &mut self.evening,
        ]
        .into_iter()
        .flat_map(|items| items.iter_mut())
    }
}

/// One food reference inside a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    /// Catalog key
    pub food_id: String,
    /// Amount in the food's unit
    pub quantity: f64,
}

impl TemplateItem {
    /// Build a template entry
    #[must_use]
    pub fn new(food_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            food_id: food_id.into(),
            quantity,
        }
    }
}

/// Named reusable list of foods; inserting it copies the items by value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTemplate {
    /// Catalog key (e.g. `mt24`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Slot the template is designed for
    pub slot: MealSlotKind,
    /// Foods and quantities
    pub items: Vec<TemplateItem>,
}

/// A seven-day meal plan for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Athlete the plan was built for (weak reference)
    pub athlete_id: Uuid,
    /// Targets copied when the athlete was selected; not live-linked
    pub targets: Targets,
    /// Monday through Sunday
    pub days: [DayPlan; DAYS_PER_PLAN],
    #[serde(default)]
    next_item_id: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create an empty plan: seven days with every slot empty
    #[must_use]
    pub fn new(athlete_id: Uuid, targets: Targets) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            athlete_id,
            targets,
            days: Default::default(),
            next_item_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Borrow one day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` is not in `0..7`
    pub fn day(&self, day: usize) -> AppResult<&DayPlan> {
        self.days.get(day).ok_or_else(|| missing_day(day))
    }

    fn day_mut(&mut self, day: usize) -> AppResult<&mut DayPlan> {
        self.days.get_mut(day).ok_or_else(|| missing_day(day))
    }

    /// Total number of items in the plan
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.days.iter().map(DayPlan::item_count).sum()
    }

    /// Locate an item by id as `(day, slot, position)`
    #[must_use]
    pub fn find_item(&self, id: ItemId) -> Option<(usize, MealSlotKind, usize)> {
        self.days.iter().enumerate().find_map(|(day_index, day)| {
            day.slots().find_map(|(kind, items)| {
                items
                    .iter()
                    .position(|item| item.id == id)
                    .map(|position| (day_index, kind, position))
            })
        })
    }

    fn allocate_item_id(&mut self) -> ItemId {
        let highest = self
            .days
            .iter()
            .flat_map(DayPlan::items)
            .map(|item| item.id.0)
            .max()
            .unwrap_or(0);
        let id = self.next_item_id.max(highest + 1);
        self.next_item_id = id + 1;
        ItemId(id)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Append a food to a slot
    ///
    /// The quantity is coerced to a finite non-negative number.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` is out of range
    pub fn add_item(
        &mut self,
        day: usize,
        slot: MealSlotKind,
        food_id: impl Into<String>,
        quantity: f64,
    ) -> AppResult<ItemId> {
        self.day(day)?;
        let id = self.allocate_item_id();
        self.day_mut(day)?.slot_mut(slot).push(PlanItem {
            id,
            food_id: food_id.into(),
            quantity: coerce_quantity(quantity),
        });
        self.touch();
        Ok(id)
    }

    /// Copy every item of a template into a slot, after any existing items
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` is out of range
    pub fn insert_template(
        &mut self,
        day: usize,
        slot: MealSlotKind,
        template: &MealTemplate,
    ) -> AppResult<Vec<ItemId>> {
        self.day(day)?;
        template
            .items
            .iter()
            .map(|item| self.add_item(day, slot, item.food_id.clone(), item.quantity))
            .collect()
    }

    /// Remove the item at `index` in a slot and return it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` or `index` is out of range
    pub fn remove_item(
        &mut self,
        day: usize,
        slot: MealSlotKind,
        index: usize,
    ) -> AppResult<PlanItem> {
        let items = self.day_mut(day)?.slot_mut(slot);
        if index >= items.len() {
            return Err(missing_item(slot, index));
        }
        let removed = items.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Replace the quantity of the item at `index`, returning the stored value
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` or `index` is out of range
    pub fn update_item_quantity(
        &mut self,
        day: usize,
        slot: MealSlotKind,
        index: usize,
        quantity: f64,
    ) -> AppResult<f64> {
        let quantity = coerce_quantity(quantity);
        let item = self
            .day_mut(day)?
            .slot_mut(slot)
            .get_mut(index)
            .ok_or_else(|| missing_item(slot, index))?;
        item.quantity = quantity;
        self.touch();
        Ok(quantity)
    }

    /// Like [`MealPlan::update_item_quantity`] but from raw text input
    ///
    /// Unparsable text stores 0.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` or `index` is out of range
    pub fn update_item_quantity_text(
        &mut self,
        day: usize,
        slot: MealSlotKind,
        index: usize,
        raw: &str,
    ) -> AppResult<f64> {
        self.update_item_quantity(day, slot, index, parse_quantity(raw))
    }

    /// Empty one slot
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `day` is out of range
    pub fn clear_slot(&mut self, day: usize, slot: MealSlotKind) -> AppResult<()> {
        self.day_mut(day)?.slot_mut(slot).clear();
        self.touch();
        Ok(())
    }

    /// Replace all seven days with deep copies of `source`
    ///
    /// Every copy gets fresh item ids so ids stay unique within the plan; the
    /// source day keeps its own ids.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `source` is out of range
    pub fn copy_day_to_all(&mut self, source: usize) -> AppResult<()> {
        let source_day = self.day(source)?.clone();
        for day_index in (0..DAYS_PER_PLAN).filter(|index| *index != source) {
            let mut copy = source_day.clone();
            for item in copy.items_mut() {
                item.id = self.allocate_item_id();
            }
            self.days[day_index] = copy;
        }
        self.touch();
        Ok(())
    }

    /// Replace the targets snapshot (e.g. after re-selecting the athlete)
    pub fn set_targets(&mut self, athlete_id: Uuid, targets: Targets) {
        self.athlete_id = athlete_id;
        self.targets = targets;
        self.touch();
    }
}

fn missing_day(day: usize) -> AppError {
    AppError::not_found(format!("Day {day}"))
        .with_details(serde_json::json!({ "days": DAYS_PER_PLAN }))
}

fn missing_item(slot: MealSlotKind, index: usize) -> AppError {
    AppError::not_found(format!("Item {index} in slot {slot}"))
}
