// storefront/src/web/extractors.rs

//! Request identities. Both are plain headers; issuing and authenticating
//! them is somebody else's job.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::errors::AppError;
use crate::ids::{SellerId, SessionId};
use crate::state::AppState;

pub const SESSION_HEADER: &str = "X-Session-ID";
pub const SELLER_HEADER: &str = "X-Seller-ID";

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
  req
    .headers()
    .get(name)
    .and_then(|v| v.to_str().ok())
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
  req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("AppState is not registered with the app.".to_string()))
}

/// The cart session of the caller. Falls back to the configured default
/// session when the header is missing.
#[derive(Debug, Clone)]
pub struct CartSession(pub SessionId);

impl FromRequest for CartSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let result = match header_value(req, SESSION_HEADER) {
      Some(id) => Ok(CartSession(SessionId::new(id))),
      None => app_state(req).map(|state| CartSession(SessionId::new(state.config.default_session_id.clone()))),
    };
    ready(result)
  }
}

/// The seller on whose behalf a seller-scoped request runs.
#[derive(Debug, Clone)]
pub struct SellerIdentity(pub SellerId);

impl FromRequest for SellerIdentity {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    if let Some(id) = header_value(req, SELLER_HEADER) {
      return ready(Ok(SellerIdentity(SellerId::new(id))));
    }
    let result = app_state(req).and_then(|state| match &state.config.default_seller_id {
      Some(id) => Ok(SellerIdentity(SellerId::new(id.clone()))),
      None => {
        warn!("Seller-scoped request without {} header.", SELLER_HEADER);
        Err(AppError::Unauthorized(format!(
          "Seller identity required. Missing {} header.",
          SELLER_HEADER
        )))
      }
    });
    ready(result)
  }
}
