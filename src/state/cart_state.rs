use clap::ValueEnum;
use tracing::debug;

use crate::error::{NutriError, Result};
use crate::models::{CartItem, OrderSummary, PricingSettings};
use crate::pricing::compute_order_summary;

/// One of the four independently editable pricing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsField {
    ShippingFee,
    FreeShippingThreshold,
    DiscountThreshold,
    DiscountAmount,
}

impl SettingsField {
    /// Write `value` into the matching field of `settings`.
    pub fn apply(self, settings: &mut PricingSettings, value: f64) {
        match self {
            SettingsField::ShippingFee => settings.shipping_fee = value,
            SettingsField::FreeShippingThreshold => settings.free_shipping_threshold = value,
            SettingsField::DiscountThreshold => settings.discount_threshold = value,
            SettingsField::DiscountAmount => settings.discount_amount = value,
        }
    }
}

/// Cart contents and pricing settings plus the order summary derived from them.
#[derive(Debug, Clone)]
pub struct CartState {
    items: Vec<CartItem>,
    settings: PricingSettings,
    summary: OrderSummary,
}

impl CartState {
    pub fn new(items: Vec<CartItem>, settings: PricingSettings) -> Self {
        let summary = compute_order_summary(&items, &settings);
        Self {
            items,
            settings,
            summary,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn settings(&self) -> &PricingSettings {
        &self.settings
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    /// Add an item. An existing line for the same product absorbs the quantity.
    pub fn add_item(&mut self, item: CartItem) -> Result<()> {
        if item.quantity == 0 {
            return Err(NutriError::InvalidInput(format!(
                "quantity for {} must be positive",
                item.name
            )));
        }

        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(item.quantity).ok_or_else(|| {
                    NutriError::InvalidInput(format!("quantity for {} is too large", item.name))
                })?;
            }
            None => self.items.push(item),
        }
        self.recompute();
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str) -> Result<CartItem> {
        let idx = self.position(product_id)?;
        let removed = self.items.remove(idx);
        self.recompute();
        Ok(removed)
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(NutriError::InvalidInput(format!(
                "quantity for {} must be positive, remove the item instead",
                product_id
            )));
        }
        let idx = self.position(product_id)?;
        self.items[idx].quantity = quantity;
        self.recompute();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    pub fn set_settings(&mut self, settings: PricingSettings) {
        self.settings = settings;
        self.recompute();
    }

    pub fn update_setting(&mut self, field: SettingsField, value: f64) {
        field.apply(&mut self.settings, value);
        self.recompute();
    }

    fn position(&self, product_id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or_else(|| NutriError::NotFound(format!("cart item {}", product_id)))
    }

    fn recompute(&mut self) {
        self.summary = compute_order_summary(&self.items, &self.settings);
        debug!(
            subtotal = self.summary.subtotal,
            discount = self.summary.discount,
            shipping = self.summary.shipping_cost,
            total = self.summary.total,
            "recomputed order summary"
        );
    }
}
