use serde::{Deserialize, Serialize};

/// Calories and macro grams, either a target or an actual sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl NutritionTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
            fat_g: self.fat_g * multiplier,
        }
    }

    /// Field-wise `self - other`. May be negative.
    pub fn difference(&self, other: &NutritionTotals) -> Self {
        Self {
            calories: self.calories - other.calories,
            protein_g: self.protein_g - other.protein_g,
            carbs_g: self.carbs_g - other.carbs_g,
            fat_g: self.fat_g - other.fat_g,
        }
    }
}

impl std::ops::Add for NutritionTotals {
    type Output = NutritionTotals;

    fn add(self, other: NutritionTotals) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }
}

impl std::iter::Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionTotals::zero(), |acc, n| acc + n)
    }
}

/// Intermediate energy values, each rounded before the next step uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    /// Positive for a deficit (lose), negative for a surplus (gain).
    pub daily_delta: f64,
    pub daily_calories: f64,
}

/// Full target: the energy chain plus the macro gram totals derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTarget {
    pub energy: EnergyBreakdown,
    pub totals: NutritionTotals,
}
