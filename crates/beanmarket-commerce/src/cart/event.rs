//! Events returned by cart mutations.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// What a cart mutation did.
///
/// The cart never notifies anyone itself; callers decide how to surface these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// An item was added, creating a line or bumping its quantity.
    Added {
        item_id: ItemId,
        name: String,
        /// Quantity of the line after the add.
        quantity: i64,
    },
    /// A line was deleted.
    Removed { item_id: ItemId, name: String },
    /// A line's quantity was set to a new positive value.
    QuantityChanged {
        item_id: ItemId,
        name: String,
        from: i64,
        to: i64,
    },
    /// Every line was dropped.
    Cleared { lines_removed: usize },
}

impl CartEvent {
    /// Text for a user-facing toast, if this event warrants one.
    ///
    /// Quantity edits are silent.
    pub fn notification(&self) -> Option<String> {
        match self {
            CartEvent::Added { name, .. } => Some(format!("Added {} to cart!", name)),
            CartEvent::Removed { .. } => Some("Item removed from cart".to_string()),
            CartEvent::Cleared { .. } => Some("Cart cleared".to_string()),
            CartEvent::QuantityChanged { .. } => None,
        }
    }

    /// Short event name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            CartEvent::Added { .. } => "added",
            CartEvent::Removed { .. } => "removed",
            CartEvent::QuantityChanged { .. } => "quantity_changed",
            CartEvent::Cleared { .. } => "cleared",
        }
    }
}
