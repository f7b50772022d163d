//! Cart read models.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Everything the cart page renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Total units, shown on the cart badge.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartSummary {
    /// Check if the cart was empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Badge text; empty when there is nothing to show.
    pub fn badge(&self) -> String {
        match self.item_count {
            0 => String::new(),
            n if n > 99 => "99+".to_string(),
            n => n.to_string(),
        }
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub item_id: ItemId,
    pub name: String,
    /// Snapshotted unit price.
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price * quantity.
    pub subtotal: Money,
}
