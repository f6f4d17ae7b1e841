//! Checkout summary: cart lines, totals and the (static) delivery form.

use serde::Serialize;
use uuid::Uuid;

use resto_shared::format_rupiah;

use crate::domain::{CartContext, CartEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutLine {
    pub item_id: Uuid,
    pub name: String,
    pub image: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
    pub unit_price_display: String,
    pub line_total_display: String,
}

impl From<&CartEntry> for CheckoutLine {
    fn from(entry: &CartEntry) -> Self {
        let line_total = entry.line_total();
        Self {
            item_id: entry.item.id,
            name: entry.item.name.clone(),
            image: entry.item.image.clone(),
            unit_price: entry.item.price,
            quantity: entry.quantity,
            line_total,
            unit_price_display: format_rupiah(entry.item.price),
            line_total_display: format_rupiah(line_total),
        }
    }
}

/// Delivery details shown under the order. Not submitted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeliveryForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<CheckoutLine>,
    pub total_items: u32,
    pub total_price: f64,
    pub total_price_display: String,
    pub delivery: DeliveryForm,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &CartContext) -> Self {
        let entries = cart.snapshot();
        let lines: Vec<CheckoutLine> = entries.iter().map(CheckoutLine::from).collect();
        let total_items = entries
            .iter()
            .fold(0u32, |count, e| count.saturating_add(e.quantity));
        let total_price: f64 = entries.iter().map(CartEntry::line_total).sum();

        Self {
            lines,
            total_items,
            total_price,
            total_price_display: format_rupiah(total_price),
            delivery: DeliveryForm::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
