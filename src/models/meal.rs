use serde::{Deserialize, Serialize};

use crate::catalog::CatalogIngredient;
use crate::models::NutritionTotals;
use crate::nutrition::sanitize;

/// Fallback serving when neither the line item nor the catalog entry sets one.
pub const DEFAULT_QUANTITY_G: f64 = 100.0;

/// An ingredient line item: amount used plus per-100 g reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    #[serde(default)]
    pub quantity_g: f64,

    #[serde(default)]
    pub calories_per_100g: f64,

    #[serde(default)]
    pub protein_per_100g: f64,

    #[serde(default)]
    pub carbs_per_100g: f64,

    #[serde(default)]
    pub fat_per_100g: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity_g: f64) -> Self {
        Self {
            name: name.into(),
            quantity_g,
            calories_per_100g: 0.0,
            protein_per_100g: 0.0,
            carbs_per_100g: 0.0,
            fat_per_100g: 0.0,
        }
    }

    /// Reference values per 100 g, sanitized.
    pub fn per_100g(&self) -> NutritionTotals {
        NutritionTotals {
            calories: sanitize(self.calories_per_100g),
            protein_g: sanitize(self.protein_per_100g),
            carbs_g: sanitize(self.carbs_per_100g),
            fat_g: sanitize(self.fat_per_100g),
        }
    }

    /// Actual nutrition for the quantity used: `per_100g * quantity_g / 100`.
    pub fn actual(&self) -> NutritionTotals {
        self.per_100g().scale(sanitize(self.quantity_g) / 100.0)
    }

    pub fn actual_calories(&self) -> f64 {
        self.actual().calories
    }

    /// Replace name and reference values with a catalog entry.
    ///
    /// A quantity already set is kept; otherwise the entry's default serving
    /// is adopted.
    pub fn apply_catalog_entry(&mut self, entry: &CatalogIngredient) {
        self.name = entry.name.clone();
        self.calories_per_100g = entry.calories_per_100g;
        self.protein_per_100g = entry.protein_per_100g;
        self.carbs_per_100g = entry.carbs_per_100g;
        self.fat_per_100g = entry.fat_per_100g;

        if sanitize(self.quantity_g) <= 0.0 {
            self.quantity_g = entry.default_quantity_g.unwrap_or(DEFAULT_QUANTITY_G);
        }
    }
}

/// One alternative version of a meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealOption {
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub is_selected_for_summary: bool,
}

impl MealOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            is_selected_for_summary: false,
        }
    }

    /// Sum of the ingredients' actual values, regardless of selection.
    pub fn totals(&self) -> NutritionTotals {
        self.ingredients.iter().map(Ingredient::actual).sum()
    }
}

/// A meal slot (breakfast, lunch, ...) holding alternative options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,

    #[serde(default)]
    pub options: Vec<MealOption>,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl MealPlan {
    /// Every option of every meal, in display order.
    pub fn options(&self) -> impl Iterator<Item = &MealOption> {
        self.meals.iter().flat_map(|m| m.options.iter())
    }
}
