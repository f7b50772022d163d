//! Storefront session facade.
//!
//! Wires one catalog snapshot and one cart to a [`SessionContext`], resolves
//! item ids for "add to cart", and buffers cart events until the UI drains
//! them.

use crate::cart::{Cart, CartEvent, CartSummary};
use crate::catalog::{CatalogItem, CatalogStore};
use crate::error::CommerceError;
use crate::ids::{ItemId, SessionId};
use crate::money::Money;
use crate::search::{CatalogQuery, QueryResults};
use crate::session::{Role, SessionContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shopper's view of the marketplace for the lifetime of one session.
#[derive(Debug)]
pub struct Storefront {
    session: SessionContext,
    catalog: CatalogStore,
    cart: Cart,
    pending: Vec<CartEvent>,
}

impl Storefront {
    /// Open a storefront over `items` for `session`.
    pub fn open(session: SessionContext, items: Vec<CatalogItem>) -> Result<Self, CommerceError> {
        let catalog = CatalogStore::new(&session, items)?;
        let cart = Cart::new(&session);

        tracing::info!(
            session = %session.id,
            role = %session.role,
            items = catalog.len(),
            "storefront session opened"
        );

        Ok(Self {
            session,
            catalog,
            cart,
            pending: Vec::new(),
        })
    }

    /// Get the session context.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Get the catalog snapshot.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Run a catalog query.
    pub fn browse(&self, query: &CatalogQuery) -> QueryResults<'_> {
        self.catalog.query_with(query)
    }

    /// Look up a catalog item.
    pub fn item(&self, id: &ItemId) -> Result<&CatalogItem, CommerceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))
    }

    /// Add one unit of a catalog item to the cart.
    ///
    /// Unknown ids and out-of-stock items are refused; the cart is untouched.
    pub fn add_to_cart(&mut self, id: &ItemId) -> Result<CartEvent, CommerceError> {
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))?;
        if !item.in_stock {
            return Err(CommerceError::OutOfStock(id.to_string()));
        }

        let event = self.cart.add_item(item);
        Ok(self.record(event))
    }

    /// Remove a line from the cart.
    pub fn remove_from_cart(&mut self, id: &ItemId) -> Option<CartEvent> {
        let event = self.cart.remove_item(id)?;
        Some(self.record(event))
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> Option<CartEvent> {
        let event = self.cart.set_quantity(id, quantity)?;
        Some(self.record(event))
    }

    /// Add one to a line already in the cart.
    pub fn increment(&mut self, id: &ItemId) -> Option<CartEvent> {
        let event = self.cart.increment(id)?;
        Some(self.record(event))
    }

    /// Take one from a line; the line goes away at zero.
    pub fn decrement(&mut self, id: &ItemId) -> Option<CartEvent> {
        let event = self.cart.decrement(id)?;
        Some(self.record(event))
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> CartEvent {
        let event = self.cart.clear();
        self.record(event)
    }

    /// Snapshot the cart for display.
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Take every event produced since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.pending)
    }

    /// End the session.
    pub fn close(self) -> SessionReport {
        let report = SessionReport {
            session_id: self.session.id.clone(),
            role: self.session.role,
            item_count: self.cart.item_count(),
            line_count: self.cart.line_count(),
            total: self.cart.total_price(),
            opened_at: self.session.started_at,
            closed_at: Utc::now(),
        };

        tracing::info!(
            session = %report.session_id,
            item_count = report.item_count,
            total = %report.total,
            "storefront session closed"
        );

        report
    }

    fn record(&mut self, event: CartEvent) -> CartEvent {
        match event.notification() {
            Some(message) => {
                tracing::info!(session = %self.session.id, kind = event.kind(), "{}", message)
            }
            None => tracing::debug!(session = %self.session.id, kind = event.kind(), "cart updated"),
        }
        self.pending.push(event.clone());
        event
    }
}

/// State of the cart when a session ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionReport {
    pub session_id: SessionId,
    pub role: Role,
    pub item_count: i64,
    pub line_count: usize,
    pub total: Money,
    pub opened_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
}
