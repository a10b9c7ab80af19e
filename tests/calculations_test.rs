use assert_float_eq::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nutri_desk::models::{
    ActivityLevel, CartItem, Gender, Goal, Ingredient, MacroDistribution, MacroField, MealOption,
    NutritionTotals, PatientMetrics, PricingSettings,
};
use nutri_desk::nutrition::{
    aggregate_actual_nutrition, calculate_bmr, calculate_daily_delta, calculate_macro_targets,
    calculate_tdee, compute_nutrition_target, compute_target_nutrition, rebalance_macros,
};
use nutri_desk::pricing::compute_order_summary;

fn reference_patient() -> PatientMetrics {
    PatientMetrics {
        gender: Gender::Male,
        age: 35,
        height_cm: 175.0,
        weight_kg: 75.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Lose,
        monthly_weight_goal_kg: 2.0,
    }
}

#[test]
fn test_bmr_follows_mifflin_st_jeor() {
    // 10*75 + 6.25*175 - 5*35 + 5 = 1673.75
    assert_eq!(calculate_bmr(Gender::Male, 35, 175.0, 75.0), 1674.0);
    // Same patient, female offset: 1673.75 - 166 = 1507.75
    assert_eq!(calculate_bmr(Gender::Female, 35, 175.0, 75.0), 1508.0);
}

#[test]
fn test_tdee_from_rounded_bmr() {
    // 1725 * 1.55 = 2673.75
    assert_eq!(calculate_tdee(1725.0, ActivityLevel::Moderate), 2674.0);
}

#[test]
fn test_weight_loss_deficit() {
    let delta = calculate_daily_delta(Goal::Lose, 2.0);
    assert_eq!(delta, 513.0);
    assert_eq!(2674.0 - delta, 2161.0);
}

#[test]
fn test_macro_grams_from_daily_calories() {
    let macros = MacroDistribution::new(30, 40, 30).unwrap();
    let totals = calculate_macro_targets(2161.0, &macros);
    assert_eq!(totals.protein_g, 162.0);
    assert_eq!(totals.carbs_g, 216.0);
    assert_eq!(totals.fat_g, 72.0);
}

#[test]
fn test_full_target_chain() {
    let macros = MacroDistribution::default();
    let target = compute_nutrition_target(&reference_patient(), &macros);

    assert_eq!(target.energy.bmr, 1674.0);
    assert_eq!(target.energy.tdee, 2595.0);
    assert_eq!(target.energy.daily_calories, 2082.0);
    assert_eq!(target.totals, compute_target_nutrition(&reference_patient(), &macros));
    // 2082 * 0.3 / 4 = 156.15, 2082 * 0.4 / 4 = 208.2, 2082 * 0.3 / 9 = 69.4
    assert_eq!(target.totals.protein_g, 156.0);
    assert_eq!(target.totals.carbs_g, 208.0);
    assert_eq!(target.totals.fat_g, 69.0);
}

#[test]
fn test_maintain_ignores_monthly_goal() {
    let mut patient = reference_patient();
    patient.goal = Goal::Maintain;
    let target = compute_nutrition_target(&patient, &MacroDistribution::default());
    assert_eq!(target.energy.daily_delta, 0.0);
    assert_eq!(target.energy.daily_calories, target.energy.tdee);
}

#[test]
fn test_rebalance_keeps_sum_for_random_edit_sequences() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut macros = MacroDistribution::default();

    for _ in 0..2000 {
        let field = MacroField::ORDER[rng.gen_range(0..3)];
        let value = rng.gen_range(-20..=130);
        macros = rebalance_macros(&macros, field, value);

        let sum = macros.protein_pct() + macros.carbs_pct() + macros.fat_pct();
        assert_eq!(sum, 100, "sum broken after setting {:?} to {}", field, value);
        assert_eq!(macros.get(field), value.clamp(0, 100) as u32);
    }
}

#[test]
fn test_unselected_option_contributes_nothing() {
    let heavy = Ingredient {
        name: "Peanut butter".to_string(),
        quantity_g: 500.0,
        calories_per_100g: 588.0,
        protein_per_100g: 25.0,
        carbs_per_100g: 20.0,
        fat_per_100g: 50.0,
    };
    let light = Ingredient {
        name: "Cucumber".to_string(),
        quantity_g: 200.0,
        calories_per_100g: 15.0,
        protein_per_100g: 0.7,
        carbs_per_100g: 3.6,
        fat_per_100g: 0.1,
    };

    let options = vec![
        MealOption {
            name: "Salad".to_string(),
            ingredients: vec![light.clone()],
            is_selected_for_summary: true,
        },
        MealOption {
            name: "Snack".to_string(),
            ingredients: vec![heavy, light],
            is_selected_for_summary: false,
        },
    ];

    let totals = aggregate_actual_nutrition(&options);
    assert_float_absolute_eq!(totals.calories, 30.0, 1e-9);
    assert_float_absolute_eq!(totals.protein_g, 1.4, 1e-9);
    assert_float_absolute_eq!(totals.carbs_g, 7.2, 1e-9);
    assert_float_absolute_eq!(totals.fat_g, 0.2, 1e-9);

    let none_selected: Vec<MealOption> = options
        .into_iter()
        .map(|mut o| {
            o.is_selected_for_summary = false;
            o
        })
        .collect();
    assert_eq!(aggregate_actual_nutrition(&none_selected), NutritionTotals::zero());
}

#[test]
fn test_empty_plan_is_all_zero() {
    assert_eq!(aggregate_actual_nutrition(&[]), NutritionTotals::zero());
}

fn shop_settings() -> PricingSettings {
    PricingSettings {
        shipping_fee: 100.0,
        free_shipping_threshold: 1000.0,
        discount_threshold: 1800.0,
        discount_amount: 300.0,
    }
}

#[test]
fn test_order_pricing_example() {
    let cart = vec![
        CartItem::new("box-a", "Weekly box", 900.0, 1),
        CartItem::new("box-b", "Snack pack", 300.0, 3),
    ];
    let summary = compute_order_summary(&cart, &shop_settings());
    assert_eq!(summary.subtotal, 1800.0);
    assert_eq!(summary.discount, 300.0);
    assert_eq!(summary.shipping_cost, 0.0);
    assert_eq!(summary.total, 1500.0);
}

#[test]
fn test_thresholds_are_inclusive() {
    let at_free_shipping = vec![CartItem::new("a", "Box", 500.0, 2)];
    let summary = compute_order_summary(&at_free_shipping, &shop_settings());
    assert_eq!(summary.subtotal, 1000.0);
    assert_eq!(summary.shipping_cost, 0.0);
    assert_eq!(summary.amount_to_next_free_shipping, 0.0);
    assert_eq!(summary.discount, 0.0);
    assert_eq!(summary.amount_to_next_discount, 800.0);

    let just_below = vec![CartItem::new("a", "Box", 999.99, 1)];
    let summary = compute_order_summary(&just_below, &shop_settings());
    assert_eq!(summary.shipping_cost, 100.0);
    assert_float_absolute_eq!(summary.amount_to_next_free_shipping, 0.01, 1e-9);
}

#[test]
fn test_order_summary_is_idempotent() {
    let cart = vec![
        CartItem::new("a", "Tea", 12.35, 3),
        CartItem::new("b", "Oats", 7.1, 5),
    ];
    let settings = shop_settings();
    let first = compute_order_summary(&cart, &settings);
    let second = compute_order_summary(&cart, &settings);
    assert_eq!(first.total.to_bits(), second.total.to_bits());
    assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
    assert_eq!(first, second);
}
