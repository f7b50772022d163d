//! Storefront core for the beanmarket coffee marketplace.
//!
//! Two engines carry the interesting state:
//!
//! - **Catalog**: a read-only snapshot of coffees with text search and
//!   stock/price facets
//! - **Cart**: one line per coffee, price snapshots, derived counts and totals
//!
//! Both are built from an explicit [`SessionContext`]; [`Storefront`] wires
//! them together for one session.
//!
//! # Example
//!
//! ```
//! use beanmarket_commerce::prelude::*;
//!
//! let session = SessionContext::buyer();
//! let mut store = Storefront::open(session, sample_catalog()).unwrap();
//!
//! let visible = store.browse(&CatalogQuery::new().with_text("choc"));
//! assert_eq!(visible.len(), 2);
//!
//! let id = ItemId::new("1");
//! store.add_to_cart(&id).unwrap();
//! store.add_to_cart(&id).unwrap();
//! assert_eq!(store.cart().item_count(), 2);
//! assert_eq!(store.cart().total_price().display(), "$49.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::{ItemId, SessionId};
pub use money::{Currency, Money};
pub use session::{Role, SessionContext};
pub use storefront::{SessionReport, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ItemId, SessionId};
    pub use crate::money::{Currency, Money};
    pub use crate::session::{Role, SessionContext};

    // Catalog
    pub use crate::catalog::{sample_catalog, CatalogItem, CatalogStore, PackageWeight};

    // Cart
    pub use crate::cart::{Cart, CartEvent, CartLine, CartSummary, LineSummary, SharedCart};

    // Search
    pub use crate::search::{CatalogQuery, PriceFilter, QueryResults, StockFilter};

    // Session
    pub use crate::storefront::{SessionReport, Storefront};
}
