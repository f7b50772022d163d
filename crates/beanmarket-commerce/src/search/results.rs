//! Query results.

use crate::catalog::CatalogItem;
use serde::Serialize;

/// Visible subset of a catalog snapshot, in snapshot order.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResults<'a> {
    /// Matching items.
    pub items: Vec<&'a CatalogItem>,
    /// Size of the whole snapshot the query ran against.
    pub catalog_size: usize,
}

impl<'a> QueryResults<'a> {
    /// Create results.
    pub fn new(items: Vec<&'a CatalogItem>, catalog_size: usize) -> Self {
        Self {
            items,
            catalog_size,
        }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// "Showing N of M coffees".
    pub fn summary_line(&self) -> String {
        format!("Showing {} of {} coffees", self.len(), self.catalog_size)
    }
}
