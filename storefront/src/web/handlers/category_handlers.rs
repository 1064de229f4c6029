// storefront/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::ids::CategoryId;
use crate::models::NewCategoryPayload;
use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.catalog.list_categories().await?;
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = app_state
    .catalog
    .get_category(&CategoryId::new(path.into_inner()))
    .await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::get_category_by_slug", skip(app_state, path), fields(slug = %path.as_ref()))]
pub async fn get_category_by_slug_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.catalog.get_category_by_slug(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::create_category", skip(app_state, payload))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewCategoryPayload>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.catalog.create_category(payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(category))
}
