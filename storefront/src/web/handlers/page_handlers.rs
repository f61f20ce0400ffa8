// storefront/src/web/handlers/page_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tera::Context;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::templates::INDEX_TEMPLATE;

const STOREFRONT_SCRIPT: &str = include_str!("../../../static/script.js");

// Prices are pre-formatted so the page always shows two decimals.
#[derive(Serialize)]
struct ProductCard<'a> {
  id: u64,
  name: &'a str,
  price: String,
  stock: u32,
}

#[instrument(name = "handler::index", skip(app_state))]
pub async fn index_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cards: Vec<ProductCard<'_>> = app_state
    .catalog
    .products()
    .iter()
    .map(|p| ProductCard {
      id: p.id,
      name: &p.name,
      price: format!("{:.2}", p.price),
      stock: p.stock,
    })
    .collect();

  let mut ctx = Context::new();
  ctx.insert("products", &cards);
  let html = app_state.templates.render(INDEX_TEMPLATE, &ctx)?;

  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

pub async fn script_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/javascript; charset=utf-8")
    .body(STOREFRONT_SCRIPT)
}
