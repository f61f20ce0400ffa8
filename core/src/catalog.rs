// shopcart/src/catalog.rs

//! The read-only product catalog.
//!
//! A `Catalog` is built once at startup, validated, and then only queried.
//! Lookups are linear scans; the catalog is expected to stay small.

use crate::error::{ShopError, ShopResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{event, instrument, Level};

/// A product offered by the shop.
///
/// `stock` is informational. No cart operation ever decrements it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: u64,
  pub name: String,
  pub price: Decimal,
  pub stock: u32,
}

impl Product {
  pub fn new(id: u64, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
    Self {
      id,
      name: name.into(),
      price,
      stock,
    }
  }
}

/// An ordered, immutable list of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// Builds a catalog, preserving the given order.
  ///
  /// Fails with `ShopError::InvalidCatalog` when an id is zero or repeated,
  /// a name is blank, or a price is negative.
  pub fn new(products: Vec<Product>) -> ShopResult<Self> {
    let mut seen_ids = HashSet::with_capacity(products.len());
    for product in &products {
      if product.id == 0 {
        return Err(ShopError::invalid_catalog(format!(
          "product '{}' has id 0; ids must be positive",
          product.name
        )));
      }
      if !seen_ids.insert(product.id) {
        return Err(ShopError::invalid_catalog(format!(
          "duplicate product id {}",
          product.id
        )));
      }
      if product.name.trim().is_empty() {
        return Err(ShopError::invalid_catalog(format!(
          "product {} has an empty name",
          product.id
        )));
      }
      if product.price < Decimal::ZERO {
        return Err(ShopError::invalid_catalog(format!(
          "product {} has negative price {}",
          product.id, product.price
        )));
      }
    }
    Ok(Self { products })
  }

  /// The four products the demo shop ships with.
  pub fn default_seed() -> Self {
    Self {
      products: vec![
        Product::new(1, "Laptop", Decimal::new(99999, 2), 10),
        Product::new(2, "Smartphone", Decimal::new(49999, 2), 15),
        Product::new(3, "Headphones", Decimal::new(9999, 2), 20),
        Product::new(4, "Tablet", Decimal::new(29999, 2), 8),
      ],
    }
  }

  /// Parses a JSON array of `{id, name, price, stock}` objects.
  pub fn from_json_str(json: &str) -> ShopResult<Self> {
    let products: Vec<Product> =
      serde_json::from_str(json).map_err(|source| ShopError::CatalogParse { source })?;
    Self::new(products)
  }

  #[instrument(name = "Catalog::from_json_file", skip_all, err(Display))]
  pub fn from_json_file(path: impl AsRef<Path>) -> ShopResult<Self> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ShopError::CatalogIo {
      path: path.to_path_buf(),
      source,
    })?;
    let catalog = Self::from_json_str(&raw)?;
    event!(Level::INFO, path = %path.display(), products = catalog.len(), "Catalog loaded from file.");
    Ok(catalog)
  }

  pub fn find_by_id(&self, id: u64) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Case-insensitive substring search on product names, in catalog order.
  /// An empty query matches every product.
  pub fn search(&self, query: &str) -> Vec<&Product> {
    let needle = query.to_lowercase();
    self
      .products
      .iter()
      .filter(|p| p.name.to_lowercase().contains(&needle))
      .collect()
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::default_seed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_zero_and_duplicate_ids() {
    let zero = Catalog::new(vec![Product::new(0, "Ghost", Decimal::ONE, 1)]);
    assert!(matches!(zero, Err(ShopError::InvalidCatalog { .. })));

    let dup = Catalog::new(vec![
      Product::new(7, "A", Decimal::ONE, 1),
      Product::new(7, "B", Decimal::ONE, 1),
    ]);
    match dup {
      Err(ShopError::InvalidCatalog { message }) => assert!(message.contains("duplicate product id 7")),
      other => panic!("Expected InvalidCatalog, got {:?}", other),
    }
  }

  #[test]
  fn rejects_blank_names_and_negative_prices() {
    let blank = Catalog::new(vec![Product::new(1, "   ", Decimal::ONE, 1)]);
    assert!(matches!(blank, Err(ShopError::InvalidCatalog { .. })));

    let negative = Catalog::new(vec![Product::new(1, "Refund", Decimal::new(-1, 2), 1)]);
    assert!(matches!(negative, Err(ShopError::InvalidCatalog { .. })));
  }

  #[test]
  fn free_products_are_allowed() {
    let catalog = Catalog::new(vec![Product::new(1, "Sticker", Decimal::ZERO, 100)]).unwrap();
    assert_eq!(catalog.len(), 1);
  }

  #[test]
  fn parses_json_seed() {
    let catalog = Catalog::from_json_str(r#"[{"id": 9, "name": "Mouse", "price": 19.5, "stock": 3}]"#).unwrap();
    let mouse = catalog.find_by_id(9).unwrap();
    assert_eq!(mouse.name, "Mouse");
    assert_eq!(mouse.price, Decimal::new(195, 1));
    assert_eq!(mouse.stock, 3);
  }

  #[test]
  fn malformed_json_is_a_parse_error() {
    let result = Catalog::from_json_str("[{\"id\": 1}");
    assert!(matches!(result, Err(ShopError::CatalogParse { .. })));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let result = Catalog::from_json_file("/definitely/not/here/catalog.json");
    match result {
      Err(ShopError::CatalogIo { path, .. }) => assert!(path.ends_with("catalog.json")),
      other => panic!("Expected CatalogIo, got {:?}", other),
    }
  }
}
