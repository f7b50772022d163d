//! Shopping cart module.
//!
//! Contains the cart engine, the events its mutations return, read models,
//! and a mutex-guarded handle for threaded hosts.

mod cart;
mod event;
mod shared;
mod summary;

pub use cart::{Cart, CartLine};
pub use event::CartEvent;
pub use shared::SharedCart;
pub use summary::{CartSummary, LineSummary};
