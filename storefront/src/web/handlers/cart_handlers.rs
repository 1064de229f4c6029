// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::ids::{CartItemId, ProductId};
use crate::state::AppState;
use crate::web::extractors::CartSession;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: ProductId,
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemPayload {
  pub quantity: i64,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state, session), fields(session_id = %session.0))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let lines = app_state.cart.list_cart(&session.0).await?;
  Ok(HttpResponse::Ok().json(lines))
}

#[instrument(name = "handler::cart_summary", skip(app_state, session), fields(session_id = %session.0))]
pub async fn cart_summary_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let summary = app_state.cart.summary(&session.0).await?;
  Ok(HttpResponse::Ok().json(summary))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.0, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let AddToCartRequestPayload { product_id, quantity } = req_payload.into_inner();
  let item = app_state.cart.add_item(&session.0, &product_id, quantity).await?;
  info!(
    "Add to cart successful. Item ID: {}, Product ID: {}, New Quantity: {}",
    item.id, item.product_id, item.quantity
  );
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::update_cart_item", skip(app_state, session, path, req_payload), fields(session_id = %session.0, item_id = %path.as_ref()))]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
  path: web::Path<String>,
  req_payload: web::Json<UpdateCartItemPayload>,
) -> Result<HttpResponse, AppError> {
  let item_id = CartItemId::new(path.into_inner());
  let item = app_state
    .cart
    .update_quantity(&session.0, &item_id, req_payload.quantity)
    .await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, session, path), fields(session_id = %session.0, item_id = %path.as_ref()))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let item_id = CartItemId::new(path.into_inner());
  app_state.cart.remove_item(&session.0, &item_id).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::clear_cart", skip(app_state, session), fields(session_id = %session.0))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let removed = app_state.cart.clear_cart(&session.0).await?;
  Ok(HttpResponse::Ok().json(json!({ "removed": removed })))
}
