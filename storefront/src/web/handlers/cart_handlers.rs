// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use shopcart::{CartItem, Decimal, DEFAULT_ADD_QUANTITY};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::session::CartSession;

// --- Request DTOs ---
// `product_id` is signed on the wire; ids that cannot name a catalog product
// are treated as unknown rather than malformed.
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product_id: i64,
  #[serde(default)]
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartRequestPayload {
  pub product_id: i64,
  pub quantity: i64,
}

// --- Response DTOs ---
#[derive(Serialize, Debug)]
pub struct CartView {
  pub items: Vec<CartItem>,
  pub total: Decimal,
  pub item_count: i64,
}

fn catalog_id(raw: i64) -> Option<u64> {
  u64::try_from(raw).ok()
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.id, product_id = req_payload.product_id, quantity = ?req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  mut session: CartSession,
) -> Result<HttpResponse, AppError> {
  let quantity = req_payload.quantity.unwrap_or(DEFAULT_ADD_QUANTITY);
  let product_id = catalog_id(req_payload.product_id).ok_or_else(|| {
    warn!("Add to cart rejected: product id is negative.");
    AppError::NotFound("Product not found".to_string())
  })?;
  let catalog = app_state.catalog.clone();

  let items = session.with_cart(&app_state, |cart| {
    cart.add(&catalog, product_id, quantity).map(<[CartItem]>::to_vec)
  })?;
  info!("Cart now holds {} lines.", items.len());

  let mut response = HttpResponse::Ok();
  session.attach_cookie(&mut response);
  Ok(response.json(items))
}

#[instrument(
    name = "handler::update_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.id, product_id = req_payload.product_id, quantity = req_payload.quantity)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<UpdateCartRequestPayload>,
  mut session: CartSession,
) -> Result<HttpResponse, AppError> {
  let items = match catalog_id(req_payload.product_id) {
    Some(product_id) => session.with_cart(&app_state, |cart| {
      Ok(cart.update_quantity(product_id, req_payload.quantity).to_vec())
    })?,
    // A negative id can never be in the cart.
    None => session.cart.read().items().to_vec(),
  };

  let mut response = HttpResponse::Ok();
  session.attach_cookie(&mut response);
  Ok(response.json(items))
}

#[instrument(name = "handler::view_cart", skip(session), fields(session_id = %session.id))]
pub async fn view_cart_handler(session: CartSession) -> Result<HttpResponse, AppError> {
  let view = {
    let cart = session.cart.read();
    CartView {
      items: cart.items().to_vec(),
      total: cart.total(),
      item_count: cart.item_count(),
    }
  };

  // Viewing never creates a session, so there is no cookie to hand out here.
  Ok(HttpResponse::Ok().json(view))
}
