// shopcart/src/order.rs

//! The ephemeral order produced by a successful checkout.

use crate::cart::CartItem;
use rust_decimal::Decimal;
use serde::Serialize;

/// A snapshot of the cart's lines at checkout time plus their total.
///
/// Orders are returned once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
  pub items: Vec<CartItem>,
  pub total: Decimal,
}

impl Order {
  pub fn from_items(items: Vec<CartItem>) -> Self {
    let total = total_of(&items);
    Self { items, total }
  }
}

/// Σ(price × quantity) over the given lines.
pub(crate) fn total_of(items: &[CartItem]) -> Decimal {
  items
    .iter()
    .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
}
