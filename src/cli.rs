use clap::{Parser, Subcommand};

use crate::models::MacroField;

/// NutriDesk: nutrition targets, meal plan totals and order pricing for a nutrition practice.
#[derive(Parser, Debug)]
#[command(name = "nutri_desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log calculation details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show BMR, TDEE, daily calories and macro targets for a patient.
    Target {
        /// Path to the patient JSON document.
        #[arg(short, long, default_value = "patient.json")]
        file: String,
    },

    /// Enter or update a patient interactively.
    Intake {
        /// Path to the patient JSON document.
        #[arg(short, long, default_value = "patient.json")]
        file: String,
    },

    /// Change one macro percentage; the others are adjusted to keep 100%.
    Rebalance {
        /// Path to the patient JSON document.
        #[arg(short, long, default_value = "patient.json")]
        file: String,

        /// Macro to edit.
        #[arg(long, value_enum)]
        field: MacroField,

        /// New percentage.
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Show a meal plan with per-option totals and the selected-options summary.
    Plan {
        /// Path to the meal plan JSON document.
        #[arg(short, long, default_value = "plan.json")]
        file: String,

        /// Patient document to compare the plan against.
        #[arg(long)]
        patient: Option<String>,
    },

    /// Replace an ingredient's reference values with a catalog entry.
    Swap {
        /// Path to the meal plan JSON document.
        #[arg(short, long, default_value = "plan.json")]
        file: String,

        /// Path to the ingredient catalog CSV.
        #[arg(long, default_value = "catalog.csv")]
        catalog: String,

        #[arg(long)]
        meal: usize,

        #[arg(long)]
        option: usize,

        #[arg(long)]
        ingredient: usize,

        /// Catalog ingredient name (fuzzy matched).
        #[arg(long)]
        name: String,
    },

    /// Include or exclude a meal option from the plan summary.
    Select {
        /// Path to the meal plan JSON document.
        #[arg(short, long, default_value = "plan.json")]
        file: String,

        #[arg(long)]
        meal: usize,

        #[arg(long)]
        option: usize,

        /// Exclude the option instead of including it.
        #[arg(long)]
        off: bool,
    },

    /// Price a cart against the shop settings.
    Order {
        /// Path to the cart JSON document.
        #[arg(long, default_value = "cart.json")]
        cart: String,

        /// Path to the pricing settings JSON document.
        #[arg(long, default_value = "settings.json")]
        settings: String,
    },

    /// Show or update the pricing settings.
    Settings {
        /// Path to the pricing settings JSON document.
        #[arg(short, long, default_value = "settings.json")]
        file: String,

        #[arg(long)]
        shipping_fee: Option<f64>,

        #[arg(long)]
        free_shipping_threshold: Option<f64>,

        #[arg(long)]
        discount_threshold: Option<f64>,

        #[arg(long)]
        discount_amount: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rebalance() {
        let cli = Cli::try_parse_from([
            "nutri_desk", "rebalance", "--field", "protein", "--value", "35",
        ])
        .unwrap();
        match cli.command {
            Command::Rebalance { file, field, value } => {
                assert_eq!(file, "patient.json");
                assert_eq!(field, MacroField::Protein);
                assert_eq!(value, 35);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_settings_partial_update() {
        let cli = Cli::try_parse_from([
            "nutri_desk", "-v", "settings", "--shipping-fee", "120",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Settings {
                shipping_fee,
                discount_amount,
                ..
            } => {
                assert_eq!(shipping_fee, Some(120.0));
                assert_eq!(discount_amount, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
