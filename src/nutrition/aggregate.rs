use crate::models::{MealOption, MealPlan, NutritionTotals};

/// Sum actual nutrition over the summary-selected options.
///
/// Unselected options contribute nothing, whatever their ingredients.
pub fn aggregate_actual_nutrition(options: &[MealOption]) -> NutritionTotals {
    sum_selected(options.iter())
}

/// Plan-wide actual nutrition across every meal's selected options.
pub fn aggregate_plan_nutrition(plan: &MealPlan) -> NutritionTotals {
    sum_selected(plan.options())
}

/// What is left of the target after the actual intake. Negative means over.
pub fn remaining_nutrition(target: &NutritionTotals, actual: &NutritionTotals) -> NutritionTotals {
    target.difference(actual)
}

fn sum_selected<'a>(options: impl Iterator<Item = &'a MealOption>) -> NutritionTotals {
    options
        .filter(|o| o.is_selected_for_summary)
        .map(MealOption::totals)
        .sum()
}
