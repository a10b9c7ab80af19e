use crate::models::{CartItem, OrderSummary, PricingSettings};
use crate::nutrition::sanitize;

/// Sum of `unit_price * quantity` over the cart.
pub fn calculate_subtotal(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| sanitize(item.unit_price) * item.quantity as f64)
        .sum()
}

/// Price a cart against the shop settings.
///
/// Both thresholds are inclusive: reaching the discount threshold grants the
/// full flat discount, reaching the free-shipping threshold waives the fee.
/// A threshold of 0 is always met.
pub fn compute_order_summary(items: &[CartItem], settings: &PricingSettings) -> OrderSummary {
    let shipping_fee = sanitize(settings.shipping_fee);
    let free_shipping_threshold = sanitize(settings.free_shipping_threshold);
    let discount_threshold = sanitize(settings.discount_threshold);
    let discount_amount = sanitize(settings.discount_amount);

    let subtotal = calculate_subtotal(items);

    let discount = if subtotal >= discount_threshold {
        discount_amount
    } else {
        0.0
    };

    let shipping_cost = if subtotal >= free_shipping_threshold {
        0.0
    } else {
        shipping_fee
    };

    OrderSummary {
        subtotal,
        discount,
        shipping_cost,
        total: subtotal - discount + shipping_cost,
        amount_to_next_free_shipping: (free_shipping_threshold - subtotal).max(0.0),
        amount_to_next_discount: (discount_threshold - subtotal).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PricingSettings {
        PricingSettings {
            shipping_fee: 100.0,
            free_shipping_threshold: 1000.0,
            discount_threshold: 1800.0,
            discount_amount: 300.0,
        }
    }

    #[test]
    fn test_discount_and_free_shipping() {
        let items = vec![
            CartItem::new("a", "Granola", 600.0, 2),
            CartItem::new("b", "Tea", 300.0, 2),
        ];
        let summary = compute_order_summary(&items, &settings());
        assert_eq!(summary.subtotal, 1800.0);
        assert_eq!(summary.discount, 300.0);
        assert_eq!(summary.shipping_cost, 0.0);
        assert_eq!(summary.total, 1500.0);
        assert_eq!(summary.amount_to_next_discount, 0.0);
        assert_eq!(summary.amount_to_next_free_shipping, 0.0);
    }

    #[test]
    fn test_below_both_thresholds() {
        let items = vec![CartItem::new("a", "Granola", 250.0, 2)];
        let summary = compute_order_summary(&items, &settings());
        assert_eq!(summary.subtotal, 500.0);
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.shipping_cost, 100.0);
        assert_eq!(summary.total, 600.0);
        assert_eq!(summary.amount_to_next_free_shipping, 500.0);
        assert_eq!(summary.amount_to_next_discount, 1300.0);
    }

    #[test]
    fn test_empty_cart_pays_shipping_only() {
        let summary = compute_order_summary(&[], &settings());
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.total, 100.0);
    }

    #[test]
    fn test_zero_thresholds_always_met() {
        let free = PricingSettings {
            shipping_fee: 100.0,
            discount_amount: 50.0,
            ..Default::default()
        };
        let summary = compute_order_summary(&[], &free);
        assert_eq!(summary.shipping_cost, 0.0);
        assert_eq!(summary.discount, 50.0);
        assert_eq!(summary.total, -50.0);
    }

    #[test]
    fn test_invalid_prices_sanitized() {
        let items = vec![
            CartItem::new("a", "Broken", f64::NAN, 3),
            CartItem::new("b", "Negative", -10.0, 1),
            CartItem::new("c", "Tea", 20.0, 1),
        ];
        assert_eq!(calculate_subtotal(&items), 20.0);
    }
}
