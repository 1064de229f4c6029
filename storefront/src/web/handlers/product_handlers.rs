// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::ids::ProductId;
use crate::models::{CreateProductPayload, UpdateProductPayload};
use crate::services::{ProductFilter, RELATED_PRODUCTS_LIMIT};
use crate::state::AppState;
use crate::web::extractors::SellerIdentity;

#[derive(Deserialize, Debug)]
pub struct RelatedQuery {
  pub limit: Option<u32>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ProductFilter>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_products(query_params.into_inner()).await?;
  info!("Returning {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::new(path.into_inner());
  let product = app_state.catalog.get_product(&product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::related_products", skip(app_state, path, query), fields(product_id = %path.as_ref()))]
pub async fn related_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<RelatedQuery>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::new(path.into_inner());
  let limit = query.limit.unwrap_or(RELATED_PRODUCTS_LIMIT);
  let products = app_state.catalog.related_products(&product_id, limit).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::create_product", skip(app_state, seller, payload), fields(seller_id = %seller.0))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.seller.create_product(&seller.0, payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, seller, path, payload), fields(seller_id = %seller.0, product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
  path: web::Path<String>,
  payload: web::Json<UpdateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::new(path.into_inner());
  let product = app_state
    .seller
    .update_product(&seller.0, &product_id, payload.into_inner())
    .await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, seller, path), fields(seller_id = %seller.0, product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  seller: SellerIdentity,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId::new(path.into_inner());
  app_state.seller.delete_product(&seller.0, &product_id).await?;
  Ok(HttpResponse::NoContent().finish())
}
