//! Read-only catalog snapshot.

use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Currency;
use crate::search::{CatalogQuery, PriceFilter, QueryResults, StockFilter};
use crate::session::SessionContext;
use std::collections::{HashMap, HashSet};

/// Number of flavor tags the storefront offers as quick filters.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Immutable list of sellable items for one session.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
    currency: Currency,
}

impl CatalogStore {
    /// Build a snapshot for `session`.
    ///
    /// Fails if an item is invalid, an id repeats, or a price is not in the
    /// session currency.
    pub fn new(session: &SessionContext, items: Vec<CatalogItem>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if item.unit_price.currency != session.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: session.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CommerceError::DuplicateItem(item.id.to_string()));
            }
        }

        tracing::debug!(session = %session.id, items = items.len(), "catalog snapshot loaded");

        Ok(Self {
            items,
            index,
            currency: session.currency,
        })
    }

    /// Items matching all three predicates, in snapshot order.
    pub fn query(
        &self,
        search_text: &str,
        stock: StockFilter,
        price: PriceFilter,
    ) -> Vec<&CatalogItem> {
        let query = CatalogQuery::new()
            .with_text(search_text)
            .with_stock(stock)
            .with_price(price);
        self.query_with(&query).items
    }

    /// Run a prepared query.
    pub fn query_with(&self, query: &CatalogQuery) -> QueryResults<'_> {
        let matches = query.matcher();
        let items: Vec<&CatalogItem> = self.items.iter().filter(|item| matches(*item)).collect();

        tracing::debug!(
            text = %query.text,
            stock = %query.stock,
            price = %query.price,
            matched = items.len(),
            "catalog query"
        );

        QueryResults::new(items, self.items.len())
    }

    /// Every flavor note in the catalog, first-seen order, no duplicates.
    pub fn distinct_flavor_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.flavor_notes.iter())
            .filter(|note| seen.insert(note.as_str()))
            .cloned()
            .collect()
    }

    /// The first `limit` distinct flavor tags.
    pub fn flavor_suggestions(&self, limit: usize) -> Vec<String> {
        let mut tags = self.distinct_flavor_tags();
        tags.truncate(limit);
        tags
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Iterate over the snapshot in order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the snapshot has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of every price in the snapshot.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::money::Money;

    fn store() -> CatalogStore {
        CatalogStore::new(&SessionContext::buyer(), sample_catalog()).unwrap()
    }

    #[test]
    fn test_unfiltered_query_keeps_order() {
        let store = store();
        let names: Vec<&str> = store
            .query("", StockFilter::All, PriceFilter::All)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Ethiopian Yirgacheffe",
                "Colombian Supremo",
                "Guatemala Antigua",
                "Brazilian Santos",
                "Kenya AA",
                "Costa Rica Tarrazú",
            ]
        );
    }

    #[test]
    fn test_search_matches_flavor_notes_case_insensitively() {
        let store = store();
        let names: Vec<&str> = store
            .query("choc", StockFilter::All, PriceFilter::All)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Colombian Supremo", "Brazilian Santos"]);
    }

    #[test]
    fn test_search_matches_roaster() {
        let store = store();
        let hits = store.query("HIGHLAND", StockFilter::All, PriceFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kenya AA");
    }

    #[test]
    fn test_search_handles_accents() {
        let store = store();
        let hits = store.query("TARRAZÚ", StockFilter::All, PriceFilter::All);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = store();
        assert!(store
            .query("decaf", StockFilter::All, PriceFilter::All)
            .is_empty());
        assert!(store
            .query("", StockFilter::All, "over-30".parse().unwrap())
            .is_empty());
    }

    #[test]
    fn test_in_stock_under_25() {
        let store = store();
        let hits = store.query("", StockFilter::InStockOnly, "under-25".parse().unwrap());
        let ids: Vec<&str> = hits.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
        assert!(hits
            .iter()
            .all(|item| item.in_stock && item.unit_price.amount_cents < 2500));
    }

    #[test]
    fn test_out_of_stock_only() {
        let store = store();
        let hits = store.query("", StockFilter::OutOfStockOnly, PriceFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Guatemala Antigua");
    }

    #[test]
    fn test_filter_conjunction() {
        let store = store();
        let stocks = [
            StockFilter::All,
            StockFilter::InStockOnly,
            StockFilter::OutOfStockOnly,
        ];
        for text in ["", "a", "bright", "roast", "zzz"] {
            let base = store.query(text, StockFilter::All, PriceFilter::All);
            for stock in stocks {
                for price in PriceFilter::buckets(Currency::USD) {
                    for item in store.query(text, stock, price) {
                        assert!(base.iter().any(|b| b.id == item.id));
                        assert!(stock.matches(item));
                        assert!(price.matches(item));
                    }
                }
            }
        }
    }

    #[test]
    fn test_query_results_report_catalog_size() {
        let store = store();
        let results = store.query_with(&CatalogQuery::new().with_text("citrus"));
        assert_eq!(results.summary_line(), "Showing 2 of 6 coffees");
    }

    #[test]
    fn test_distinct_flavor_tags_first_seen() {
        let store = store();
        let tags = store.distinct_flavor_tags();
        assert_eq!(tags.len(), 14);
        assert_eq!(&tags[..4], &["Floral", "Citrus", "Berry", "Chocolate"]);
        assert_eq!(
            store.flavor_suggestions(DEFAULT_SUGGESTION_LIMIT),
            vec!["Floral", "Citrus", "Berry", "Chocolate", "Nutty", "Caramel", "Smoky", "Spicy"]
        );
        assert_eq!(store.flavor_suggestions(100).len(), 14);
    }

    #[test]
    fn test_get_by_id() {
        let store = store();
        assert_eq!(store.get(&ItemId::new("5")).unwrap().name, "Kenya AA");
        assert!(store.get(&ItemId::new("99")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            CatalogItem::new("1", "A", "R", Money::usd(100)),
            CatalogItem::new("1", "B", "R", Money::usd(200)),
        ];
        let err = CatalogStore::new(&SessionContext::buyer(), items).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateItem("1".to_string()));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let items = vec![CatalogItem::new("1", "A", "R", Money::new(100, Currency::EUR))];
        let err = CatalogStore::new(&SessionContext::buyer(), items).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let store = CatalogStore::new(&SessionContext::buyer(), Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.distinct_flavor_tags().is_empty());
        assert!(store.query("", StockFilter::All, PriceFilter::All).is_empty());
    }
}
