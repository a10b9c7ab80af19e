pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_activity_level, prompt_catalog_choice, prompt_gender, prompt_goal, prompt_macros,
    prompt_patient_metrics, prompt_patient_record, prompt_yes_no,
};
pub use render::{
    display_cart, display_macros, display_order_summary, display_plan, display_settings,
    display_target,
};
