//! Cart and cart line types.

use crate::cart::{CartEvent, CartSummary, LineSummary};
use crate::catalog::{CatalogItem, PackageWeight};
use crate::ids::{ItemId, SessionId};
use crate::money::{Currency, Money};
use crate::session::SessionContext;
use serde::Serialize;

/// A shopping cart for one session.
///
/// Holds at most one line per item, in first-add order. Every mutation is
/// total: missing lines are ignored rather than reported as errors.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    session_id: SessionId,
    currency: Currency,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart owned by `session`.
    pub fn new(session: &SessionContext) -> Self {
        Self {
            session_id: session.id.clone(),
            currency: session.currency,
            lines: Vec::new(),
        }
    }

    /// Add one unit of `item`.
    ///
    /// The first add snapshots the item's display fields and price; later adds
    /// only bump the quantity, leaving the line where it is.
    pub fn add_item(&mut self, item: &CatalogItem) -> CartEvent {
        let quantity = match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::snapshot(item));
                1
            }
        };

        tracing::debug!(session = %self.session_id, item = %item.id, quantity, "cart add");

        CartEvent::Added {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
        }
    }

    /// Delete the line for `item_id`. Returns `None` if there was none.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Option<CartEvent> {
        let position = self.position(item_id)?;
        let line = self.lines.remove(position);

        tracing::debug!(session = %self.session_id, item = %item_id, "cart remove");

        Some(CartEvent::Removed {
            item_id: line.item_id,
            name: line.name,
        })
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. A positive quantity for an
    /// item that is not in the cart does nothing, since there is no catalog
    /// data to build a line from.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: i64) -> Option<CartEvent> {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }

        let Some(line) = self.lines.iter_mut().find(|line| &line.item_id == item_id) else {
            tracing::debug!(session = %self.session_id, item = %item_id, "set quantity on missing line ignored");
            return None;
        };

        let from = line.quantity;
        line.quantity = quantity;

        tracing::debug!(session = %self.session_id, item = %item_id, from, to = quantity, "cart set quantity");

        Some(CartEvent::QuantityChanged {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            from,
            to: quantity,
        })
    }

    /// Add one to an existing line.
    pub fn increment(&mut self, item_id: &ItemId) -> Option<CartEvent> {
        let current = self.line(item_id)?.quantity;
        self.set_quantity(item_id, current.saturating_add(1))
    }

    /// Take one off an existing line, removing it when it reaches zero.
    pub fn decrement(&mut self, item_id: &ItemId) -> Option<CartEvent> {
        let current = self.line(item_id)?.quantity;
        self.set_quantity(item_id, current - 1)
    }

    /// Drop every line.
    pub fn clear(&mut self) -> CartEvent {
        let lines_removed = self.lines.len();
        self.lines.clear();

        tracing::debug!(session = %self.session_id, lines_removed, "cart clear");

        CartEvent::Cleared { lines_removed }
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of snapshotted unit price times quantity.
    pub fn total_price(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::subtotal), self.currency)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `item_id`, if present.
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item_id == item_id)
    }

    /// Get the owning session id.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get the cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Read model for rendering the cart page.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|line| LineSummary {
                    item_id: line.item_id.clone(),
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            item_count: self.item_count(),
            total: self.total_price(),
        }
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.item_id == item_id)
    }
}

/// One item in the cart.
///
/// Display fields and price are copied from the catalog on first add and are
/// not refreshed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Catalog item this line was created from.
    pub item_id: ItemId,
    pub name: String,
    pub roaster_name: String,
    /// Price at the time of the first add.
    pub unit_price: Money,
    pub package_weight: PackageWeight,
    pub image_ref: String,
    /// Always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn snapshot(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            roaster_name: item.roaster_name.clone(),
            unit_price: item.unit_price,
            package_weight: item.package_weight,
            image_ref: item.image_ref.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee(id: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(id, format!("Coffee {}", id), "Roaster", Money::usd(cents))
    }

    fn cart() -> Cart {
        Cart::new(&SessionContext::buyer())
    }

    #[test]
    fn test_cart_creation() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = cart();
        let a = coffee("a", 2499);

        cart.add_item(&a);
        let event = cart.add_item(&a);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(
            event,
            CartEvent::Added {
                item_id: ItemId::new("a"),
                name: "Coffee a".to_string(),
                quantity: 2,
            }
        );
    }

    #[test]
    fn test_add_preserves_first_add_order() {
        let mut cart = cart();
        let (a, b) = (coffee("a", 100), coffee("b", 200));
        cart.add_item(&a);
        cart.add_item(&b);
        cart.add_item(&a);

        let order: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = cart();
        cart.add_item(&coffee("a", 100));
        cart.add_item(&coffee("b", 200));

        let first = cart.remove_item(&ItemId::new("a"));
        let after_first = cart.clone();
        let second = cart.remove_item(&ItemId::new("a"));

        assert!(matches!(first, Some(CartEvent::Removed { .. })));
        assert_eq!(second, None);
        assert_eq!(cart, after_first);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = cart();
        cart.add_item(&coffee("a", 100));

        let event = cart.set_quantity(&ItemId::new("a"), 5);
        assert_eq!(cart.item_count(), 5);
        assert!(matches!(
            event,
            Some(CartEvent::QuantityChanged { from: 1, to: 5, .. })
        ));
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        let mut cart = cart();
        cart.add_item(&coffee("a", 100));
        cart.add_item(&coffee("b", 100));

        assert!(matches!(
            cart.set_quantity(&ItemId::new("a"), 0),
            Some(CartEvent::Removed { .. })
        ));
        assert!(matches!(
            cart.set_quantity(&ItemId::new("b"), -3),
            Some(CartEvent::Removed { .. })
        ));
        assert!(cart.is_empty());
        assert_eq!(cart.set_quantity(&ItemId::new("a"), 0), None);
    }

    #[test]
    fn test_set_quantity_on_missing_line_is_noop() {
        let mut cart = cart();
        cart.add_item(&coffee("a", 100));
        let before = cart.clone();

        assert_eq!(cart.set_quantity(&ItemId::new("zzz"), 4), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = cart();
        let id = ItemId::new("a");
        cart.add_item(&coffee("a", 100));

        cart.increment(&id);
        assert_eq!(cart.line(&id).unwrap().quantity, 2);

        cart.decrement(&id);
        let event = cart.decrement(&id);
        assert!(matches!(event, Some(CartEvent::Removed { .. })));
        assert!(cart.line(&id).is_none());

        assert_eq!(cart.increment(&id), None);
        assert_eq!(cart.decrement(&id), None);
    }

    #[test]
    fn test_clear_always_reports() {
        let mut cart = cart();
        assert_eq!(cart.clear(), CartEvent::Cleared { lines_removed: 0 });

        cart.add_item(&coffee("a", 100));
        cart.add_item(&coffee("b", 100));
        assert_eq!(cart.clear(), CartEvent::Cleared { lines_removed: 2 });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_count_and_total() {
        let mut cart = cart();
        let (a, b) = (coffee("a", 2499), coffee("b", 2250));
        cart.add_item(&a);
        cart.add_item(&b);
        cart.add_item(&b);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_price(), Money::usd(6999));

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price.amount_cents * l.quantity)
            .sum();
        assert_eq!(cart.total_price().amount_cents, expected);
    }

    #[test]
    fn test_price_snapshot_isolation() {
        let mut cart = cart();
        let mut item = coffee("a", 2499);
        cart.add_item(&item);

        item.unit_price = Money::usd(9999);
        item.name = "Renamed".to_string();
        cart.add_item(&item);

        let line = cart.line(&ItemId::new("a")).unwrap();
        assert_eq!(line.unit_price, Money::usd(2499));
        assert_eq!(line.name, "Coffee a");
        assert_eq!(cart.total_price(), Money::usd(4998));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = cart();
        let a = coffee("a", 1);
        cart.add_item(&a);
        cart.set_quantity(&a.id, i64::MAX);
        cart.add_item(&a);

        assert_eq!(cart.item_count(), i64::MAX);
        assert_eq!(cart.total_price().amount_cents, i64::MAX);
    }

    #[test]
    fn test_summary() {
        let mut cart = cart();
        let a = coffee("a", 1000);
        cart.add_item(&a);
        cart.add_item(&a);

        let summary = cart.summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].subtotal, Money::usd(2000));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, Money::usd(2000));
    }
}
