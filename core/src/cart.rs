// shopcart/src/cart.rs

//! The per-session cart and its state machine.
//!
//! A cart is either `Empty` or `NonEmpty`. The only transitions are:
//!  - `add`: appends a line or grows an existing one (Empty -> NonEmpty).
//!  - `update_quantity`: sets a line's quantity; a missing line is a no-op.
//!  - `checkout`: snapshots an `Order` and clears the cart (NonEmpty -> Empty).
//!
//! Quantities are not validated. Zero and negative values are stored as given.

use crate::catalog::Catalog;
use crate::error::{ShopError, ShopResult};
use crate::order::{self, Order};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{event, Level};

/// Quantity used by callers when an add request does not name one.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;

/// One line of a cart. `name` and `price` are copied from the catalog on first add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
  pub product_id: u64,
  pub name: String,
  pub price: Decimal,
  pub quantity: i64,
}

impl CartItem {
  pub fn line_total(&self) -> Decimal {
    self.price.saturating_mul(Decimal::from(self.quantity))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
  Empty,
  NonEmpty,
}

/// Ordered cart lines, unique by `product_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn empty() -> Self {
    Self { items: Vec::new() }
  }

  /// Adds `quantity` of a catalog product.
  ///
  /// An existing line for the product has its quantity incremented; otherwise a
  /// new line is appended with the product's current name and price.
  /// Fails with `ShopError::ProductNotFound` without touching the cart when the
  /// id is not in the catalog.
  pub fn add(&mut self, catalog: &Catalog, product_id: u64, quantity: i64) -> ShopResult<&[CartItem]> {
    let product = catalog.find_by_id(product_id).ok_or_else(|| {
      event!(Level::WARN, product_id, "Add to cart rejected: unknown product.");
      ShopError::ProductNotFound { product_id }
    })?;

    match self.line_mut(product_id) {
      Some(item) => {
        item.quantity = item.quantity.saturating_add(quantity);
        event!(Level::DEBUG, product_id, quantity = item.quantity, "Cart line incremented.");
      }
      None => {
        self.items.push(CartItem {
          product_id,
          name: product.name.clone(),
          price: product.price,
          quantity,
        });
        event!(Level::DEBUG, product_id, quantity, "Cart line appended.");
      }
    }
    Ok(&self.items)
  }

  /// Sets the absolute quantity of an existing line. Unknown ids leave the cart unchanged.
  pub fn update_quantity(&mut self, product_id: u64, quantity: i64) -> &[CartItem] {
    match self.line_mut(product_id) {
      Some(item) => {
        item.quantity = quantity;
        event!(Level::DEBUG, product_id, quantity, "Cart line quantity set.");
      }
      None => {
        event!(Level::DEBUG, product_id, "Quantity update ignored: product not in cart.");
      }
    }
    &self.items
  }

  /// Turns the cart into an `Order` and leaves it empty.
  /// Fails with `ShopError::EmptyCart` when there is nothing to check out.
  pub fn checkout(&mut self) -> ShopResult<Order> {
    if self.items.is_empty() {
      event!(Level::WARN, "Checkout rejected: cart is empty.");
      return Err(ShopError::EmptyCart);
    }
    let order = Order::from_items(std::mem::take(&mut self.items));
    event!(Level::INFO, lines = order.items.len(), total = %order.total, "Checkout completed.");
    Ok(order)
  }

  pub fn state(&self) -> CartState {
    if self.items.is_empty() {
      CartState::Empty
    } else {
      CartState::NonEmpty
    }
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn get(&self, product_id: u64) -> Option<&CartItem> {
    self.items.iter().find(|item| item.product_id == product_id)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Σ(price × quantity) over all lines.
  pub fn total(&self) -> Decimal {
    order::total_of(&self.items)
  }

  /// Sum of line quantities, as shown on the cart badge.
  pub fn item_count(&self) -> i64 {
    self.items.iter().fold(0i64, |acc, item| acc.saturating_add(item.quantity))
  }

  fn line_mut(&mut self, product_id: u64) -> Option<&mut CartItem> {
    self.items.iter_mut().find(|item| item.product_id == product_id)
  }
}
