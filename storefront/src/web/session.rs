// storefront/src/web/session.rs

//! Cookie-backed cart sessions.
//!
//! The `CartSession` extractor resolves the session cookie against the
//! `SessionStore` in `AppState`. A missing, malformed or unknown id yields a
//! detached empty cart under a newly minted id. That cart only enters the
//! store once an operation leaves it non-empty, so reads and no-op updates
//! from cookie-less clients keep no server state. Handlers echo the cookie
//! back via `CartSession::attach_cookie`.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, FromRequest, HttpRequest, HttpResponseBuilder};
use futures_util::future::{ready, Ready};
use shopcart::{Cart, SessionCart, ShopError};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug)]
pub struct CartSession {
  pub id: Uuid,
  pub cart: SessionCart,
  pub is_new: bool,
  stored: bool,
  cookie_name: String,
}

impl CartSession {
  fn resolve(req: &HttpRequest) -> Result<Self, AppError> {
    let app_state = req
      .app_data::<web::Data<AppState>>()
      .ok_or_else(|| AppError::Internal("AppState is not registered with the application.".to_string()))?;
    let cookie_name = app_state.config.session_cookie_name.clone();

    let presented_id = req
      .cookie(&cookie_name)
      .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    if let Some(id) = presented_id {
      if let Some(cart) = app_state.sessions.get(&id) {
        return Ok(CartSession {
          id,
          cart,
          is_new: false,
          stored: true,
          cookie_name,
        });
      }
      debug!(session_id = %id, "Session cookie refers to an unknown session; starting a new one.");
    }

    Ok(CartSession {
      id: Uuid::new_v4(),
      cart: SessionCart::default(),
      is_new: true,
      stored: false,
      cookie_name,
    })
  }

  /// Runs a cart operation under the session's write lock.
  ///
  /// A new session is registered in the store only when the operation succeeds
  /// and leaves the cart non-empty.
  pub fn with_cart<T>(
    &mut self,
    app_state: &AppState,
    op: impl FnOnce(&mut Cart) -> Result<T, ShopError>,
  ) -> Result<T, AppError> {
    let (result, has_items) = {
      let mut cart = self.cart.write();
      let result = op(&mut cart);
      (result, !cart.is_empty())
    };
    if result.is_ok() && has_items && !self.stored {
      app_state.sessions.insert(self.id, self.cart.clone());
      self.stored = true;
      debug!(session_id = %self.id, "New session stored.");
    }
    result.map_err(AppError::from)
  }

  /// Sets the session cookie on the response when this request stored a new session.
  pub fn attach_cookie(&self, builder: &mut HttpResponseBuilder) {
    if self.is_new && self.stored {
      builder.cookie(
        Cookie::build(self.cookie_name.clone(), self.id.to_string())
          .path("/")
          .http_only(true)
          .same_site(SameSite::Lax)
          .finish(),
      );
    }
  }
}

impl FromRequest for CartSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let resolved = Self::resolve(req);
    if let Err(e) = &resolved {
      warn!(error = %e, "CartSession extractor failed.");
    }
    ready(resolved)
  }
}
