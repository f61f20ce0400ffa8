// storefront/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use shopcart::ShopError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Template Error: {0}")]
  Template(#[from] tera::Error),

  // Catalog and cart failures from the core crate.
  #[error(transparent)]
  Shop(#[from] ShopError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl AppError {
  /// The message placed in the `{"error": ...}` body.
  fn public_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      AppError::Shop(ShopError::ProductNotFound { .. }) => "Product not found".to_string(),
      AppError::Shop(ShopError::EmptyCart) => "Cart is empty".to_string(),
      AppError::Shop(_) => "Catalog unavailable".to_string(),
      AppError::Config(_) => "Configuration issue".to_string(),
      AppError::Template(_) => "Failed to render page".to_string(),
      AppError::Internal(_) => "An internal error occurred".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Shop(ShopError::ProductNotFound { .. }) => StatusCode::NOT_FOUND,
      AppError::Shop(ShopError::EmptyCart) => StatusCode::BAD_REQUEST,
      AppError::Shop(_) | AppError::Config(_) | AppError::Template(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    HttpResponse::build(status).json(json!({ "error": self.public_message() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
