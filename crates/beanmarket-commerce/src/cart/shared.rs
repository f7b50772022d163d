//! Thread-safe cart handle.

use crate::cart::{Cart, CartEvent, CartSummary};
use crate::catalog::CatalogItem;
use crate::ids::ItemId;
use crate::money::Money;
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`Cart`] behind a mutex so concurrent callers are serialized.
///
/// Clones share the same cart. Each method holds the lock for exactly one
/// cart operation.
#[derive(Debug, Clone)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Wrap a cart for sharing across threads.
    pub fn new(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    /// Every cart operation leaves the cart valid, so a poisoned lock is
    /// still safe to use.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add one unit of an item.
    pub fn add_item(&self, item: &CatalogItem) -> CartEvent {
        self.lock().add_item(item)
    }

    /// Remove a line.
    pub fn remove_item(&self, item_id: &ItemId) -> Option<CartEvent> {
        self.lock().remove_item(item_id)
    }

    /// Set a line's quantity.
    pub fn set_quantity(&self, item_id: &ItemId, quantity: i64) -> Option<CartEvent> {
        self.lock().set_quantity(item_id, quantity)
    }

    /// Empty the cart.
    pub fn clear(&self) -> CartEvent {
        self.lock().clear()
    }

    /// Total number of units.
    pub fn item_count(&self) -> i64 {
        self.lock().item_count()
    }

    /// Total price of all lines.
    pub fn total_price(&self) -> Money {
        self.lock().total_price()
    }

    /// Snapshot the cart for display.
    pub fn summary(&self) -> CartSummary {
        self.lock().summary()
    }

    /// Copy of the current cart state.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Run several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }
}
