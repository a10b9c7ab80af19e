use crate::models::{
    CartItem, MacroDistribution, MealPlan, NutritionTarget, NutritionTotals, OrderSummary, PatientMetrics,
    PricingSettings,
};
use crate::nutrition::remaining_nutrition;

/// Display the energy chain and macro targets for a patient.
pub fn display_target(name: &str, metrics: &PatientMetrics, macros: &MacroDistribution, target: &NutritionTarget) {
    let energy = &target.energy;

    println!();
    println!("=== Nutrition Target: {} ===", name);
    println!();
    println!(
        "  {:?}, {} y, {:.1} cm, {:.1} kg, {} activity, goal: {}",
        metrics.gender,
        metrics.age,
        metrics.height_cm,
        metrics.weight_kg,
        metrics.activity_level.label(),
        metrics.goal.label()
    );
    println!();
    println!("  BMR:            {:>6.0} kcal", energy.bmr);
    println!(
        "  TDEE:           {:>6.0} kcal (x{})",
        energy.tdee,
        metrics.activity_level.factor()
    );

    if energy.daily_delta > 0.0 {
        println!("  Daily deficit:  {:>6.0} kcal", energy.daily_delta);
    } else if energy.daily_delta < 0.0 {
        println!("  Daily surplus:  {:>6.0} kcal", -energy.daily_delta);
    }

    println!("  Daily calories: {:>6.0} kcal", energy.daily_calories);
    if energy.daily_calories < energy.bmr {
        println!("  (below BMR)");
    }
    println!();
    display_macros(macros, &target.totals);
}

/// Display the macro split with its gram targets.
pub fn display_macros(macros: &MacroDistribution, totals: &NutritionTotals) {
    println!("  Protein {:>3}% => {:>4.0} g", macros.protein_pct(), totals.protein_g);
    println!("  Carbs   {:>3}% => {:>4.0} g", macros.carbs_pct(), totals.carbs_g);
    println!("  Fat     {:>3}% => {:>4.0} g", macros.fat_pct(), totals.fat_g);
    println!();
}

fn format_totals(totals: &NutritionTotals) -> String {
    format!(
        "{:>6.0} kcal | P {:>5.1} g | C {:>5.1} g | F {:>5.1} g",
        totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
    )
}

/// Display a meal plan option by option, then the summary of selected options.
pub fn display_plan(plan: &MealPlan, actual: &NutritionTotals, target: Option<&NutritionTotals>) {
    if plan.meals.is_empty() {
        println!("Meal plan is empty.");
        return;
    }

    println!();
    if plan.title.is_empty() {
        println!("=== Meal Plan ===");
    } else {
        println!("=== Meal Plan: {} ===", plan.title);
    }

    let max_name_len = plan
        .options()
        .map(|o| o.name.len())
        .max()
        .unwrap_or(10);

    for (m, meal) in plan.meals.iter().enumerate() {
        println!();
        println!("[{}] {}", m, meal.name);

        if meal.options.is_empty() {
            println!("    (no options)");
            continue;
        }

        for (o, option) in meal.options.iter().enumerate() {
            let mark = if option.is_selected_for_summary { "*" } else { " " };
            println!(
                "  {}{}. {:<width$}  {}",
                mark,
                o,
                option.name,
                format_totals(&option.totals()),
                width = max_name_len
            );
            for (i, ingredient) in option.ingredients.iter().enumerate() {
                println!(
                    "       {}. {} ({:.0} g, {:.0} kcal)",
                    i,
                    ingredient.name,
                    ingredient.quantity_g,
                    ingredient.actual_calories()
                );
            }
        }
    }

    println!();
    println!("--- Summary (* = counted) ---");
    println!("Actual:    {}", format_totals(actual));

    if let Some(target) = target {
        println!("Target:    {}", format_totals(target));
        println!("Remaining: {}", format_totals(&remaining_nutrition(target, actual)));
    }
    println!();
}

pub fn display_cart(items: &[CartItem]) {
    if items.is_empty() {
        println!("Cart is empty.");
        return;
    }

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Cart ({} items) ===", items.len());
    for item in items {
        println!(
            "  {:<width$}  {:>3} x {:>8.2} = {:>10.2}",
            item.name,
            item.quantity,
            item.unit_price,
            item.unit_price * item.quantity as f64,
            width = max_name_len
        );
    }
}

/// Display an order summary with guidance toward the next threshold.
pub fn display_order_summary(summary: &OrderSummary) {
    println!();
    println!("=== Order Summary ===");
    println!();
    println!("Subtotal: {:>10.2}", summary.subtotal);
    if summary.has_discount() {
        println!("Discount: {:>10.2}", -summary.discount);
    }
    if summary.has_free_shipping() {
        println!("Shipping: {:>10}", "free");
    } else {
        println!("Shipping: {:>10.2}", summary.shipping_cost);
    }
    println!("Total:    {:>10.2}", summary.total);
    println!();

    if summary.amount_to_next_discount > 0.0 {
        println!(
            "Add {:.2} more to unlock the discount.",
            summary.amount_to_next_discount
        );
    }
    if summary.amount_to_next_free_shipping > 0.0 {
        println!(
            "Add {:.2} more for free shipping.",
            summary.amount_to_next_free_shipping
        );
    }
}

pub fn display_settings(settings: &PricingSettings) {
    println!();
    println!("=== Pricing Settings ===");
    println!("  Shipping fee:            {:.2}", settings.shipping_fee);
    println!("  Free shipping threshold: {:.2}", settings.free_shipping_threshold);
    println!("  Discount threshold:      {:.2}", settings.discount_threshold);
    println!("  Discount amount:         {:.2}", settings.discount_amount);
    println!();
}
