// src/lib.rs

//! shopcart: an in-memory product catalog and a per-session shopping cart.
//!
//! The crate provides:
//!  - A read-only `Catalog` with id lookup and case-insensitive name search.
//!  - A `Cart` state machine (add, update quantity, checkout-and-clear).
//!  - `Order` snapshots produced at checkout.
//!  - `SessionCart` / `SessionStore` handles so an HTTP layer can own and
//!    inject one cart per session.
//!
//! Everything is synchronous and in-memory. There is no persistence, stock
//! accounting, or payment step.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod order;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartItem, CartState, DEFAULT_ADD_QUANTITY};
pub use crate::catalog::{Catalog, Product};
pub use crate::error::{ShopError, ShopResult};
pub use crate::order::Order;
pub use crate::session::{SessionCart, SessionLimits, SessionStore};

// Re-exported so callers can build prices without naming the dependency.
pub use rust_decimal::Decimal;

/*
    Typical request flow:
    1. Build a `Catalog` once (`Catalog::default_seed()` or `Catalog::from_json_file`).
    2. Resolve the caller's `SessionCart` from a `SessionStore`.
    3. Take `session_cart.write()` and call `add`, `update_quantity` or `checkout`
       with the catalog.
    4. Drop the guard and serialize the returned items or `Order`.
*/
