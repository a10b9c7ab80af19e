pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod pricing;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{MacroDistribution, NutritionTotals, PatientMetrics};
pub use nutrition::{aggregate_actual_nutrition, compute_target_nutrition, rebalance_macros};
pub use pricing::compute_order_summary;
