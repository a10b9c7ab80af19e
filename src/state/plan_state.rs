use tracing::debug;

use crate::catalog::CatalogIngredient;
use crate::error::{NutriError, Result};
use crate::models::{Ingredient, Meal, MealOption, MealPlan, NutritionTotals};
use crate::nutrition::aggregate_plan_nutrition;

/// A meal plan plus its aggregate actual nutrition.
///
/// Every successful mutation recomputes the aggregate from scratch. A failed
/// mutation (bad index) leaves both the plan and the aggregate untouched.
#[derive(Debug, Clone)]
pub struct MealPlanState {
    plan: MealPlan,
    actual: NutritionTotals,
}

impl MealPlanState {
    pub fn new(plan: MealPlan) -> Self {
        let actual = aggregate_plan_nutrition(&plan);
        Self { plan, actual }
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Aggregate over every summary-selected option.
    pub fn actual(&self) -> &NutritionTotals {
        &self.actual
    }

    pub fn into_plan(self) -> MealPlan {
        self.plan
    }

    pub fn add_meal(&mut self, meal: Meal) -> usize {
        self.plan.meals.push(meal);
        self.recompute();
        self.plan.meals.len() - 1
    }

    pub fn remove_meal(&mut self, meal: usize) -> Result<Meal> {
        self.meal_mut(meal)?;
        let removed = self.plan.meals.remove(meal);
        self.recompute();
        Ok(removed)
    }

    pub fn add_option(&mut self, meal: usize, option: MealOption) -> Result<usize> {
        let options = &mut self.meal_mut(meal)?.options;
        options.push(option);
        let idx = options.len() - 1;
        self.recompute();
        Ok(idx)
    }

    pub fn remove_option(&mut self, meal: usize, option: usize) -> Result<MealOption> {
        self.option_mut(meal, option)?;
        let removed = self.plan.meals[meal].options.remove(option);
        self.recompute();
        Ok(removed)
    }

    pub fn set_selected(&mut self, meal: usize, option: usize, selected: bool) -> Result<()> {
        self.option_mut(meal, option)?.is_selected_for_summary = selected;
        self.recompute();
        Ok(())
    }

    /// Flip the summary flag and return its new value.
    pub fn toggle_selected(&mut self, meal: usize, option: usize) -> Result<bool> {
        let opt = self.option_mut(meal, option)?;
        opt.is_selected_for_summary = !opt.is_selected_for_summary;
        let selected = opt.is_selected_for_summary;
        self.recompute();
        Ok(selected)
    }

    pub fn add_ingredient(&mut self, meal: usize, option: usize, ingredient: Ingredient) -> Result<usize> {
        let ingredients = &mut self.option_mut(meal, option)?.ingredients;
        ingredients.push(ingredient);
        let idx = ingredients.len() - 1;
        self.recompute();
        Ok(idx)
    }

    pub fn remove_ingredient(&mut self, meal: usize, option: usize, ingredient: usize) -> Result<Ingredient> {
        self.ingredient_mut(meal, option, ingredient)?;
        let removed = self.plan.meals[meal].options[option]
            .ingredients
            .remove(ingredient);
        self.recompute();
        Ok(removed)
    }

    pub fn set_ingredient_quantity(
        &mut self,
        meal: usize,
        option: usize,
        ingredient: usize,
        quantity_g: f64,
    ) -> Result<()> {
        self.ingredient_mut(meal, option, ingredient)?.quantity_g = quantity_g;
        self.recompute();
        Ok(())
    }

    /// Swap an ingredient's reference values for a catalog entry, keeping
    /// its quantity when one is set.
    pub fn replace_ingredient(
        &mut self,
        meal: usize,
        option: usize,
        ingredient: usize,
        entry: &CatalogIngredient,
    ) -> Result<()> {
        self.ingredient_mut(meal, option, ingredient)?
            .apply_catalog_entry(entry);
        self.recompute();
        Ok(())
    }

    fn meal_mut(&mut self, meal: usize) -> Result<&mut Meal> {
        self.plan
            .meals
            .get_mut(meal)
            .ok_or_else(|| NutriError::NotFound(format!("meal #{}", meal)))
    }

    fn option_mut(&mut self, meal: usize, option: usize) -> Result<&mut MealOption> {
        self.meal_mut(meal)?
            .options
            .get_mut(option)
            .ok_or_else(|| NutriError::NotFound(format!("option #{} of meal #{}", option, meal)))
    }

    fn ingredient_mut(&mut self, meal: usize, option: usize, ingredient: usize) -> Result<&mut Ingredient> {
        self.option_mut(meal, option)?
            .ingredients
            .get_mut(ingredient)
            .ok_or_else(|| {
                NutriError::NotFound(format!(
                    "ingredient #{} of option #{} of meal #{}",
                    ingredient, option, meal
                ))
            })
    }

    fn recompute(&mut self) {
        self.actual = aggregate_plan_nutrition(&self.plan);
        debug!(
            calories = self.actual.calories,
            protein_g = self.actual.protein_g,
            "recomputed plan nutrition"
        );
    }
}
