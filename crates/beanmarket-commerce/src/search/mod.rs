//! Catalog search.
//!
//! Text search plus stock and price facets, evaluated in memory.

mod filter;
mod query;
mod results;

pub use filter::{PriceFilter, StockFilter};
pub use query::CatalogQuery;
pub use results::QueryResults;
