use tracing::debug;

use crate::models::{
    ActivityLevel, Goal, MacroDistribution, MacroField, NutritionTarget, PatientMetrics,
};
use crate::nutrition::{compute_nutrition_target, rebalance_macros};

/// Patient inputs plus the nutrition target derived from them.
///
/// Inputs are only reachable through setters, and every setter recomputes the
/// target before returning, so `target()` always reflects the current inputs.
#[derive(Debug, Clone)]
pub struct PatientTargetState {
    metrics: PatientMetrics,
    macros: MacroDistribution,
    target: NutritionTarget,
}

impl PatientTargetState {
    pub fn new(metrics: PatientMetrics, macros: MacroDistribution) -> Self {
        let target = compute_nutrition_target(&metrics, &macros);
        Self {
            metrics,
            macros,
            target,
        }
    }

    pub fn metrics(&self) -> &PatientMetrics {
        &self.metrics
    }

    pub fn macros(&self) -> &MacroDistribution {
        &self.macros
    }

    pub fn target(&self) -> &NutritionTarget {
        &self.target
    }

    pub fn set_metrics(&mut self, metrics: PatientMetrics) {
        self.metrics = metrics;
        self.recompute();
    }

    pub fn set_weight_kg(&mut self, weight_kg: f64) {
        self.metrics.weight_kg = weight_kg;
        self.recompute();
    }

    pub fn set_activity_level(&mut self, activity_level: ActivityLevel) {
        self.metrics.activity_level = activity_level;
        self.recompute();
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.metrics.goal = goal;
        self.recompute();
    }

    pub fn set_monthly_weight_goal_kg(&mut self, monthly_weight_goal_kg: f64) {
        self.metrics.monthly_weight_goal_kg = monthly_weight_goal_kg;
        self.recompute();
    }

    /// Edit one macro percentage; the others are rebalanced to keep 100.
    pub fn set_macro(&mut self, field: MacroField, value: i64) {
        self.macros = rebalance_macros(&self.macros, field, value);
        self.recompute();
    }

    pub fn set_macros(&mut self, macros: MacroDistribution) {
        self.macros = macros;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.target = compute_nutrition_target(&self.metrics, &self.macros);
        debug!(
            daily_calories = self.target.energy.daily_calories,
            protein_g = self.target.totals.protein_g,
            carbs_g = self.target.totals.carbs_g,
            fat_g = self.target.totals.fat_g,
            "recomputed nutrition target"
        );
    }
}
