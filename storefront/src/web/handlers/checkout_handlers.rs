// storefront/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::session::CartSession;

// No payment step: checkout snapshots the cart into an order and empties it.
#[instrument(name = "handler::checkout", skip(app_state, session), fields(session_id = %session.id))]
pub async fn checkout_handler(app_state: web::Data<AppState>, mut session: CartSession) -> Result<HttpResponse, AppError> {
  let order = session.with_cart(&app_state, |cart| cart.checkout())?;
  info!("Order placed with {} lines, total {}.", order.items.len(), order.total);

  let mut response = HttpResponse::Ok();
  session.attach_cookie(&mut response);
  Ok(response.json(json!({
      "message": "Order placed successfully",
      "order": order
  })))
}
