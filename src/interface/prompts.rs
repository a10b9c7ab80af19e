use dialoguer::{Confirm, Input, Select};

use crate::catalog::{Catalog, CatalogIngredient, CatalogMatch};
use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, Gender, Goal, MacroDistribution, PatientMetrics, PatientRecord};
use crate::nutrition::parse_number;

/// Prompt for a number. Blank or unparsable input counts as 0.
fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(parse_number(&input))
}

fn prompt_percentage(prompt: &str, default: u32) -> Result<u32> {
    let value = prompt_number(prompt, &default.to_string())?;
    Ok(value.round().min(100.0) as u32)
}

pub fn prompt_gender(default: Gender) -> Result<Gender> {
    let options = vec!["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(if default == Gender::Male { 0 } else { 1 })
        .interact()?;

    Ok(if selection == 0 { Gender::Male } else { Gender::Female })
}

pub fn prompt_activity_level(default: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} (x{})", level.label(), level.factor()))
        .collect();
    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|l| *l == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal(default: Goal) -> Result<Goal> {
    let goals = [Goal::Lose, Goal::Maintain, Goal::Gain];
    let options: Vec<&str> = goals.iter().map(|g| g.label()).collect();
    let default_idx = goals.iter().position(|g| *g == default).unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(goals[selection])
}

/// Prompt for every patient attribute, starting from `current`.
pub fn prompt_patient_metrics(current: &PatientMetrics) -> Result<PatientMetrics> {
    let gender = prompt_gender(current.gender)?;
    let age = prompt_number("Age (years)", &current.age.to_string())?.round() as u32;
    let height_cm = prompt_number("Height (cm)", &current.height_cm.to_string())?;
    let weight_kg = prompt_number("Weight (kg)", &current.weight_kg.to_string())?;
    let activity_level = prompt_activity_level(current.activity_level)?;
    let goal = prompt_goal(current.goal)?;

    let monthly_weight_goal_kg = if goal == Goal::Maintain {
        0.0
    } else {
        prompt_number(
            "Monthly weight change goal (kg)",
            &current.monthly_weight_goal_kg.to_string(),
        )?
    };

    Ok(PatientMetrics {
        gender,
        age,
        height_cm,
        weight_kg,
        activity_level,
        goal,
        monthly_weight_goal_kg,
    })
}

/// Prompt for a macro split. Re-asks until the three add up to 100.
pub fn prompt_macros(current: &MacroDistribution) -> Result<MacroDistribution> {
    loop {
        let protein = prompt_percentage("Protein %", current.protein_pct())?;
        let carbs = prompt_percentage("Carbs %", current.carbs_pct())?;
        let fat = prompt_percentage("Fat %", current.fat_pct())?;

        match MacroDistribution::new(protein, carbs, fat) {
            Ok(macros) => return Ok(macros),
            Err(e) => println!("{}", e),
        }
    }
}

/// Collect a full patient record interactively.
pub fn prompt_patient_record(current: &PatientRecord) -> Result<PatientRecord> {
    let name: String = Input::new()
        .with_prompt("Patient name")
        .default(current.name.clone())
        .interact_text()?;

    let metrics = prompt_patient_metrics(&current.metrics)?;
    let macros = prompt_macros(&current.macros)?;

    Ok(PatientRecord {
        name,
        metrics,
        macros,
    })
}

/// Resolve a name against the catalog: exact match, otherwise let the user
/// confirm or pick among fuzzy candidates.
pub fn prompt_catalog_choice<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a CatalogIngredient> {
    let candidates = match catalog.lookup(name) {
        CatalogMatch::Exact(entry) => return Ok(entry),
        CatalogMatch::Fuzzy(candidates) => candidates,
        CatalogMatch::None => return Err(NutriError::IngredientNotFound(name.to_string())),
    };

    if candidates.len() == 1 {
        let entry = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", entry.name))
            .default(true)
            .interact()?;

        return if confirm {
            Ok(entry)
        } else {
            Err(NutriError::IngredientNotFound(name.to_string()))
        };
    }

    let mut options: Vec<String> = candidates.iter().map(|(e, _)| e.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    candidates
        .get(selection)
        .map(|(entry, _)| *entry)
        .ok_or_else(|| NutriError::IngredientNotFound(name.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
