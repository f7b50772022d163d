//! Catalog query builder.

use crate::catalog::CatalogItem;
use crate::search::{PriceFilter, StockFilter};
use serde::{Deserialize, Serialize};

/// Free-text search combined with the stock and price facets.
///
/// All three predicates must hold for an item to be visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Search text as typed. Empty matches everything.
    pub text: String,
    /// Stock facet.
    pub stock: StockFilter,
    /// Price facet.
    pub price: PriceFilter,
}

impl CatalogQuery {
    /// A query that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the stock facet.
    pub fn with_stock(mut self, stock: StockFilter) -> Self {
        self.stock = stock;
        self
    }

    /// Set the price facet.
    pub fn with_price(mut self, price: PriceFilter) -> Self {
        self.price = price;
        self
    }

    /// Whether no predicate narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.stock == StockFilter::All && self.price == PriceFilter::All
    }

    /// Build a matcher that lowercases the search text once.
    pub(crate) fn matcher(&self) -> impl Fn(&CatalogItem) -> bool + '_ {
        let needle = self.text.to_lowercase();
        move |item| {
            item.matches_text(&needle) && self.stock.matches(item) && self.price.matches(item)
        }
    }
}
