//! Coffee catalog.
//!
//! Items, the read-only per-session snapshot, and the demo data set.

mod item;
mod sample;
mod store;

pub use item::{CatalogItem, PackageWeight, MAX_RATING};
pub use sample::sample_catalog;
pub use store::{CatalogStore, DEFAULT_SUGGESTION_LIMIT};
