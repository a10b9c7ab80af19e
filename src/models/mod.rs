mod macros;
mod meal;
mod nutrition;
mod order;
mod patient;

pub use macros::{MacroDistribution, MacroField};
pub use meal::{DEFAULT_QUANTITY_G, Ingredient, Meal, MealOption, MealPlan};
pub use nutrition::{EnergyBreakdown, NutritionTarget, NutritionTotals};
pub use order::{CartItem, OrderSummary, PricingSettings};
pub use patient::{ActivityLevel, Gender, Goal, PatientMetrics, PatientRecord};
