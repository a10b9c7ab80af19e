use crate::models::{
    ActivityLevel, EnergyBreakdown, Gender, Goal, MacroDistribution, MacroField, NutritionTarget,
    NutritionTotals, PatientMetrics,
};
use crate::nutrition::constants::*;
use crate::nutrition::sanitize::{round_half_up, sanitize};

/// Basal metabolic rate (Mifflin-St Jeor), rounded to whole kcal.
pub fn calculate_bmr(gender: Gender, age: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    let raw = BMR_WEIGHT_COEFF * sanitize(weight_kg) + BMR_HEIGHT_COEFF * sanitize(height_cm)
        - BMR_AGE_COEFF * age as f64
        + offset;
    round_half_up(raw)
}

/// Total daily energy expenditure from an already rounded BMR.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    round_half_up(bmr * activity_level.factor())
}

/// Daily calorie delta for a goal: positive is a deficit, negative a surplus.
///
/// `monthly_kg * 7700 / 30`, rounded. Zero when maintaining.
pub fn calculate_daily_delta(goal: Goal, monthly_weight_goal_kg: f64) -> f64 {
    let magnitude =
        round_half_up(sanitize(monthly_weight_goal_kg) * KCAL_PER_KG_BODY_FAT / DAYS_PER_MONTH);
    match goal {
        Goal::Maintain => 0.0,
        Goal::Lose => magnitude,
        Goal::Gain => -magnitude,
    }
}

/// Energy chain: BMR -> TDEE -> delta -> daily calories.
///
/// Each step uses the rounded result of the previous one. Daily calories are
/// not floored and go negative for an extreme loss goal.
pub fn calculate_energy(metrics: &PatientMetrics) -> EnergyBreakdown {
    let bmr = calculate_bmr(
        metrics.gender,
        metrics.age,
        metrics.height_cm,
        metrics.weight_kg,
    );
    let tdee = calculate_tdee(bmr, metrics.activity_level);
    let daily_delta = calculate_daily_delta(metrics.goal, metrics.monthly_weight_goal_kg);

    EnergyBreakdown {
        bmr,
        tdee,
        daily_delta,
        daily_calories: tdee - daily_delta,
    }
}

/// Grams of one macro for a calorie budget and its percentage share.
pub fn macro_grams(daily_calories: f64, pct: u32, field: MacroField) -> f64 {
    round_half_up(daily_calories * pct as f64 / 100.0 / field.kcal_per_gram())
}

/// Calorie target and macro grams for a daily calorie budget.
pub fn calculate_macro_targets(daily_calories: f64, macros: &MacroDistribution) -> NutritionTotals {
    NutritionTotals {
        calories: daily_calories,
        protein_g: macro_grams(daily_calories, macros.protein_pct(), MacroField::Protein),
        carbs_g: macro_grams(daily_calories, macros.carbs_pct(), MacroField::Carbs),
        fat_g: macro_grams(daily_calories, macros.fat_pct(), MacroField::Fat),
    }
}

/// Energy chain and macro targets for a patient.
pub fn compute_nutrition_target(
    metrics: &PatientMetrics,
    macros: &MacroDistribution,
) -> NutritionTarget {
    let energy = calculate_energy(metrics);
    NutritionTarget {
        energy,
        totals: calculate_macro_targets(energy.daily_calories, macros),
    }
}

/// Daily calorie and macro gram targets for a patient.
pub fn compute_target_nutrition(
    metrics: &PatientMetrics,
    macros: &MacroDistribution,
) -> NutritionTotals {
    compute_nutrition_target(metrics, macros).totals
}
