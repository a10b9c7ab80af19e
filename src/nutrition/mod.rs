pub mod aggregate;
pub mod calculations;
pub mod constants;
pub mod rebalance;
pub mod sanitize;

pub use aggregate::{aggregate_actual_nutrition, aggregate_plan_nutrition, remaining_nutrition};
pub use calculations::{
    calculate_bmr, calculate_daily_delta, calculate_energy, calculate_macro_targets,
    calculate_tdee, compute_nutrition_target, compute_target_nutrition, macro_grams,
};
pub use constants::*;
pub use rebalance::rebalance_macros;
pub use sanitize::{parse_number, round_half_up, sanitize};
