// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
  // Missing `q` behaves like the empty query and matches everything.
  #[serde(default)]
  pub q: String,
}

#[instrument(name = "handler::search", skip(app_state, query_params), fields(q = %query_params.q))]
pub async fn search_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
  let results = app_state.catalog.search(&query_params.q);
  info!("Search matched {} products.", results.len());
  Ok(HttpResponse::Ok().json(results))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.catalog.find_by_id(product_id) {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}
