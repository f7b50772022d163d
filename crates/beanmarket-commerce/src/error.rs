//! Commerce error types.
//!
//! Cart mutations and catalog queries never fail; these errors only surface
//! when a catalog snapshot is built or when the storefront resolves an item id.

use thiserror::Error;

/// Errors that can occur while assembling or operating a storefront session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A catalog item failed validation.
    #[error("Invalid catalog item {id}: {reason}")]
    InvalidItem { id: String, reason: String },

    /// The same item id appears twice in one catalog snapshot.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItem(String),

    /// Item priced in a different currency than the session.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Item not in the catalog snapshot.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Item exists but cannot be added to the cart.
    #[error("Item is out of stock: {0}")]
    OutOfStock(String),

    /// A filter string could not be parsed.
    #[error("Invalid {kind} filter: {value}")]
    InvalidFilter { kind: &'static str, value: String },

    /// A money amount could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A role name could not be parsed.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl CommerceError {
    pub(crate) fn invalid_item(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CommerceError::InvalidItem {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
