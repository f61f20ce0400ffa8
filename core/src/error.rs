// shopcart/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
  #[error("Product not found: {product_id}")]
  ProductNotFound { product_id: u64 },

  #[error("Cart is empty")]
  EmptyCart,

  #[error("Invalid catalog: {message}")]
  InvalidCatalog { message: String },

  #[error("Failed to read catalog file '{}'. Source: {source}", path.display())]
  CatalogIo {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse catalog JSON. Source: {source}")]
  CatalogParse {
    #[source]
    source: serde_json::Error,
  },
}

impl ShopError {
  pub(crate) fn invalid_catalog(message: impl Into<String>) -> Self {
    ShopError::InvalidCatalog {
      message: message.into(),
    }
  }
}

pub type ShopResult<T, E = ShopError> = std::result::Result<T, E>;
