pub mod engine;

pub use engine::{calculate_subtotal, compute_order_summary};
