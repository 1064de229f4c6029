// storefront/src/web/handlers/seller_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SellerIdentity;

#[instrument(name = "handler::seller_products", skip(app_state, seller), fields(seller_id = %seller.0))]
pub async fn seller_products_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
) -> Result<HttpResponse, AppError> {
  let products = app_state.seller.list_seller_products(&seller.0).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::seller_orders", skip(app_state, seller), fields(seller_id = %seller.0))]
pub async fn seller_orders_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.seller.list_seller_orders(&seller.0).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::seller_stats", skip(app_state, seller), fields(seller_id = %seller.0))]
pub async fn seller_stats_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
) -> Result<HttpResponse, AppError> {
  let stats = app_state.seller.seller_stats(&seller.0).await?;
  Ok(HttpResponse::Ok().json(stats))
}
