// storefront/src/web/routes.rs

use actix_web::{error, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, checkout_handlers, page_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Malformed bodies and query strings become `{"error": ...}` 400s instead of actix's plain-text ones.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    let message = format!("Invalid request body: {}", err);
    error::Error::from(AppError::Validation(message))
  })
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req| {
    let message = format!("Invalid query string: {}", err);
    error::Error::from(AppError::Validation(message))
  })
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|_err, _req| {
    error::Error::from(AppError::NotFound("Product not found".to_string()))
  })
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .app_data(path_config())
    // Page + assets
    .route("/", web::get().to(page_handlers::index_handler))
    .route("/static/script.js", web::get().to(page_handlers::script_handler))
    .route("/health", web::get().to(health_check_handler))
    // Catalog
    .route("/search", web::get().to(product_handlers::search_handler))
    .route("/products/{product_id}", web::get().to(product_handlers::get_product_handler))
    // Cart
    .route("/cart", web::get().to(cart_handlers::view_cart_handler))
    .route("/add_to_cart", web::post().to(cart_handlers::add_to_cart_handler))
    .route("/update_cart", web::post().to(cart_handlers::update_cart_handler))
    // Checkout
    .route("/checkout", web::post().to(checkout_handlers::checkout_handler));
}
