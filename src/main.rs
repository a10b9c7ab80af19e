use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nutri_desk::cli::{Cli, Command};
use nutri_desk::error::{NutriError, Result};
use nutri_desk::interface::{
    display_cart, display_macros, display_order_summary, display_plan, display_settings,
    display_target, prompt_catalog_choice, prompt_patient_record, prompt_yes_no,
};
use nutri_desk::models::{CartItem, MacroField, MealPlan, PatientRecord, PricingSettings};
use nutri_desk::state::{
    CartState, MealPlanState, PatientTargetState, SettingsField, load_catalog, load_json,
    save_json,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the rendered report.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "nutri_desk=debug" } else { "nutri_desk=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Target { file } => cmd_target(&file),
        Command::Intake { file } => cmd_intake(&file),
        Command::Rebalance { file, field, value } => cmd_rebalance(&file, field, value),
        Command::Plan { file, patient } => cmd_plan(&file, patient.as_deref()),
        Command::Swap {
            file,
            catalog,
            meal,
            option,
            ingredient,
            name,
        } => cmd_swap(&file, &catalog, meal, option, ingredient, &name),
        Command::Select {
            file,
            meal,
            option,
            off,
        } => cmd_select(&file, meal, option, !off),
        Command::Order { cart, settings } => cmd_order(&cart, &settings),
        Command::Settings {
            file,
            shipping_fee,
            free_shipping_threshold,
            discount_threshold,
            discount_amount,
        } => cmd_settings(
            &file,
            [
                (SettingsField::ShippingFee, shipping_fee),
                (SettingsField::FreeShippingThreshold, free_shipping_threshold),
                (SettingsField::DiscountThreshold, discount_threshold),
                (SettingsField::DiscountAmount, discount_amount),
            ],
        ),
    }
}

fn require_file(file_path: &str, what: &str) -> Result<()> {
    if Path::new(file_path).exists() {
        Ok(())
    } else {
        Err(NutriError::NotFound(format!("{} file {}", what, file_path)))
    }
}

/// Show the nutrition target for a stored patient.
fn cmd_target(file_path: &str) -> Result<()> {
    require_file(file_path, "patient")?;
    let record: PatientRecord = load_json(file_path)?;
    let state = PatientTargetState::new(record.metrics.clone(), record.macros);

    display_target(&record.name, state.metrics(), state.macros(), state.target());
    Ok(())
}

/// Create or update a patient interactively.
fn cmd_intake(file_path: &str) -> Result<()> {
    let current: PatientRecord = if Path::new(file_path).exists() {
        load_json(file_path)?
    } else {
        PatientRecord::default()
    };

    let record = prompt_patient_record(&current)?;
    let state = PatientTargetState::new(record.metrics.clone(), record.macros);
    display_target(&record.name, state.metrics(), state.macros(), state.target());

    if prompt_yes_no("Save patient?", true)? {
        save_json(file_path, &record)?;
        println!("Patient saved to {}.", file_path);
    }
    Ok(())
}

/// Edit one macro percentage and save the rebalanced split.
fn cmd_rebalance(file_path: &str, field: MacroField, value: i64) -> Result<()> {
    require_file(file_path, "patient")?;
    let mut record: PatientRecord = load_json(file_path)?;
    let mut state = PatientTargetState::new(record.metrics.clone(), record.macros);

    let before = *state.macros();
    state.set_macro(field, value);
    info!(field = field.label(), value, ?before, after = ?state.macros(), "rebalanced macros");

    println!();
    println!("Set {} to {}%:", field.label(), state.macros().get(field));
    display_macros(state.macros(), &state.target().totals);

    record.macros = *state.macros();
    save_json(file_path, &record)?;
    println!("Patient saved to {}.", file_path);
    Ok(())
}

/// Show a meal plan, optionally against a patient's target.
fn cmd_plan(file_path: &str, patient_path: Option<&str>) -> Result<()> {
    require_file(file_path, "meal plan")?;
    let plan: MealPlan = load_json(file_path)?;
    let state = MealPlanState::new(plan);

    let target = match patient_path {
        Some(path) => {
            require_file(path, "patient")?;
            let record: PatientRecord = load_json(path)?;
            Some(PatientTargetState::new(record.metrics, record.macros).target().totals)
        }
        None => None,
    };

    display_plan(state.plan(), state.actual(), target.as_ref());
    Ok(())
}

/// Replace an ingredient with a catalog entry and save the plan.
fn cmd_swap(
    file_path: &str,
    catalog_path: &str,
    meal: usize,
    option: usize,
    ingredient: usize,
    name: &str,
) -> Result<()> {
    require_file(file_path, "meal plan")?;
    require_file(catalog_path, "catalog")?;

    let catalog = load_catalog(catalog_path)?;
    if catalog.is_empty() {
        println!("Catalog {} has no ingredients.", catalog_path);
        return Ok(());
    }

    let mut state = MealPlanState::new(load_json(file_path)?);
    let entry = prompt_catalog_choice(&catalog, name)?;
    state.replace_ingredient(meal, option, ingredient, entry)?;

    display_plan(state.plan(), state.actual(), None);
    save_json(file_path, state.plan())?;
    println!("Meal plan saved to {}.", file_path);
    Ok(())
}

/// Include or exclude an option from the plan summary and save.
fn cmd_select(file_path: &str, meal: usize, option: usize, selected: bool) -> Result<()> {
    require_file(file_path, "meal plan")?;
    let mut state = MealPlanState::new(load_json(file_path)?);
    state.set_selected(meal, option, selected)?;

    display_plan(state.plan(), state.actual(), None);
    save_json(file_path, state.plan())?;
    println!("Meal plan saved to {}.", file_path);
    Ok(())
}

/// Price the cart.
fn cmd_order(cart_path: &str, settings_path: &str) -> Result<()> {
    require_file(cart_path, "cart")?;
    let items: Vec<CartItem> = load_json(cart_path)?;
    let settings: PricingSettings = if Path::new(settings_path).exists() {
        load_json(settings_path)?
    } else {
        warn!(path = settings_path, "settings file not found, using zero settings");
        PricingSettings::default()
    };

    let state = CartState::new(items, settings);
    display_cart(state.items());
    display_order_summary(state.summary());
    Ok(())
}

/// Update any given settings fields, save, and show the result.
fn cmd_settings(file_path: &str, updates: [(SettingsField, Option<f64>); 4]) -> Result<()> {
    let mut settings: PricingSettings = if Path::new(file_path).exists() {
        load_json(file_path)?
    } else {
        PricingSettings::default()
    };

    let mut changed = false;
    for (field, value) in updates {
        if let Some(value) = value {
            field.apply(&mut settings, value);
            changed = true;
        }
    }

    if changed {
        save_json(file_path, &settings)?;
        println!("Settings saved to {}.", file_path);
    }

    display_settings(&settings);
    Ok(())
}
