use serde::{Deserialize, Serialize};

/// A cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,

    pub name: String,

    #[serde(default)]
    pub unit_price: f64,

    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }
}

/// Singleton shop settings. The four values are independent; no ordering
/// between the thresholds is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSettings {
    #[serde(default)]
    pub shipping_fee: f64,

    #[serde(default)]
    pub free_shipping_threshold: f64,

    #[serde(default)]
    pub discount_threshold: f64,

    /// Flat amount granted once the subtotal reaches `discount_threshold`.
    #[serde(default)]
    pub discount_amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping_cost: f64,
    pub total: f64,
    pub amount_to_next_free_shipping: f64,
    pub amount_to_next_discount: f64,
}

impl OrderSummary {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_cost == 0.0
    }

    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_missing_fields_default_to_zero() {
        let settings: PricingSettings = serde_json::from_str(r#"{"shippingFee": 100}"#).unwrap();
        assert_eq!(settings.shipping_fee, 100.0);
        assert_eq!(settings.free_shipping_threshold, 0.0);
        assert_eq!(settings.discount_amount, 0.0);
    }

    #[test]
    fn test_cart_item_json_shape() {
        let item = CartItem::new("p-1", "Granola", 250.0, 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "p-1");
        assert_eq!(json["unitPrice"], 250.0);
    }
}
