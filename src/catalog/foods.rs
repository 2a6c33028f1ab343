// ABOUTME: Built-in food reference table with per-unit macros
// ABOUTME: USDA-derived values for proteins, carbs, produce, dairy, fats, supplements and extras
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan_core::models::{FoodCategory, FoodItem};

use FoodCategory::{Carb, Dairy, Extra, Fat, Fruit, Protein, Snack, Supplement, Vegetable};

/// `(id, name, unit, category, calories, protein, carbs, fat)` per one unit
type FoodRow = (
    &'static str,
    &'static str,
    &'static str,
    FoodCategory,
    f64,
    f64,
    f64,
    f64,
);

// Meat and seafood weights are cooked weights; rice and pasta are cooked volumes.
const FOOD_TABLE: &[FoodRow] = &[
    ("p1", "Chicken Breast (grilled)", "oz", Protein, 47.0, 8.8, 0.0, 1.0),
    ("p2", "Salmon (baked)", "oz", Protein, 58.0, 7.9, 0.0, 2.6),
    ("p3", "Ground Turkey 93/7", "oz", Protein, 48.0, 6.6, 0.0, 2.3),
    ("p5", "Filet Mignon", "oz", Protein, 64.0, 8.3, 0.0, 3.2),
    ("p10", "Shrimp", "oz", Protein, 28.0, 6.8, 0.1, 0.1),
    ("p13", "Egg (large)", "egg", Protein, 72.0, 6.3, 0.4, 4.8),
    ("p15", "Pork Breakfast Sausage", "oz", Protein, 92.0, 5.3, 0.4, 7.7),
    ("p22", "Ground Beef 90/10", "oz", Protein, 61.0, 7.5, 0.0, 3.2),
    ("c1", "White Rice", "cup", Carb, 205.0, 4.3, 44.5, 0.4),
    ("c2", "Brown Rice", "cup", Carb, 218.0, 4.5, 45.8, 1.6),
    ("c8", "Whole Wheat Bread", "slice", Carb, 81.0, 4.0, 13.8, 1.1),
    ("c10", "Flour Tortilla (10\")", "tortilla", Carb, 218.0, 5.8, 36.0, 5.4),
    ("c13", "Plain Bagel", "bagel", Carb, 277.0, 11.0, 55.0, 1.4),
    ("c14", "Dinner Roll", "roll", Carb, 84.0, 2.9, 14.1, 1.9),
    ("c18", "Tortilla Chips", "oz", Carb, 138.0, 2.0, 18.5, 6.6),
    ("c21", "Rolled Oats (dry)", "cup", Carb, 307.0, 10.7, 54.8, 5.3),
    ("c24", "Penne Pasta", "cup", Carb, 196.0, 7.2, 38.3, 1.2),
    ("c27", "Cornstarch", "tbsp", Carb, 30.0, 0.0, 7.3, 0.0),
    ("r8", "Sushi Rice", "cup", Carb, 240.0, 4.0, 53.0, 0.4),
    ("f1", "Banana", "medium", Fruit, 105.0, 1.3, 27.0, 0.4),
    ("f3", "Green Apple", "medium", Fruit, 95.0, 0.5, 25.1, 0.3),
    ("f5", "Grapes", "cup", Fruit, 104.0, 1.1, 27.3, 0.2),
    ("f6", "Strawberries", "cup", Fruit, 49.0, 1.0, 11.7, 0.5),
    ("f7", "Blueberries", "cup", Fruit, 84.0, 1.1, 21.4, 0.5),
    ("f8", "Orange Juice", "oz", Fruit, 14.0, 0.2, 3.2, 0.1),
    ("f13", "Honeycrisp Apple", "medium", Fruit, 95.0, 0.5, 25.1, 0.3),
    ("v1", "Bell Pepper", "medium", Vegetable, 24.0, 1.0, 5.5, 0.2),
    ("v2", "Broccoli (steamed)", "cup", Vegetable, 55.0, 3.7, 11.2, 0.6),
    ("v11", "Onion (diced)", "cup", Vegetable, 64.0, 1.8, 14.9, 0.2),
    ("v12", "Green Onion", "stalk", Vegetable, 5.0, 0.3, 1.1, 0.0),
    ("v13", "Garlic", "clove", Vegetable, 4.0, 0.2, 1.0, 0.0),
    ("d1", "Whole Milk", "oz", Dairy, 19.0, 1.0, 1.5, 1.0),
    ("d2", "Chocolate Milk (low-fat)", "oz", Dairy, 24.0, 1.0, 3.9, 0.3),
    ("d3", "Greek Yogurt (nonfat)", "cup", Dairy, 133.0, 23.0, 8.0, 0.7),
    ("d6", "Cheddar Cheese", "oz", Dairy, 114.0, 7.1, 0.4, 9.4),
    ("d10", "Butter", "tbsp", Dairy, 102.0, 0.1, 0.0, 11.5),
    ("d15", "Vanilla Yogurt", "cup", Dairy, 208.0, 12.1, 33.8, 3.1),
    ("d16", "Sour Cream", "tbsp", Dairy, 24.0, 0.3, 0.6, 2.3),
    ("fa1", "Avocado", "whole", Fat, 322.0, 4.0, 17.1, 29.5),
    ("fa2", "Peanut Butter", "tbsp", Fat, 94.0, 4.0, 3.1, 8.1),
    ("fa3", "Almond Butter", "tbsp", Fat, 98.0, 3.4, 3.0, 8.9),
    ("fa4", "Olive Oil", "tbsp", Fat, 119.0, 0.0, 0.0, 13.5),
    ("fa10", "Chia Seeds", "tbsp", Fat, 58.0, 2.0, 5.0, 3.7),
    ("fa11", "Vegetable Oil", "tbsp", Fat, 120.0, 0.0, 0.0, 13.6),
    ("s1", "Protein Bar", "bar", Snack, 200.0, 20.0, 22.0, 7.0),
    ("s2", "Granola Bar", "bar", Snack, 190.0, 4.0, 29.0, 7.0),
    ("cv1", "Protein + Collagen Shake Mix", "scoop", Supplement, 120.0, 25.0, 3.0, 1.0),
    ("cv2", "Electrolyte Hydration Mix", "packet", Supplement, 20.0, 0.0, 5.0, 0.0),
    ("cv3", "Creatine Monohydrate", "5g", Supplement, 0.0, 0.0, 0.0, 0.0),
    ("e1", "Maple Syrup", "tbsp", Extra, 52.0, 0.0, 13.4, 0.0),
    ("e2", "Honey", "tbsp", Extra, 64.0, 0.1, 17.3, 0.0),
    ("e5", "Grape Jelly", "tbsp", Extra, 56.0, 0.0, 14.7, 0.0),
    ("e8", "Ketchup", "tbsp", Extra, 20.0, 0.2, 5.3, 0.0),
    ("e10", "Soy Sauce", "tbsp", Extra, 9.0, 1.3, 0.8, 0.1),
];

pub(super) fn builtin_foods() -> Vec<FoodItem> {
    FOOD_TABLE
        .iter()
        .map(|&(id, name, unit, category, calories, protein, carbs, fat)| {
            FoodItem::new(id, name, unit, category, calories, protein, carbs, fat)
        })
        .collect()
}
