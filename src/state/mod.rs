mod cart_state;
mod persistence;
mod plan_state;
mod target_state;

pub use cart_state::{CartState, SettingsField};
pub use persistence::{load_catalog, load_json, save_json};
pub use plan_state::MealPlanState;
pub use target_state::PatientTargetState;
