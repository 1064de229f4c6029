// storefront/src/web/routes.rs

use actix_web::{error, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, category_handlers, product_handlers, seller_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed bodies, query strings and path segments surface as validation
/// errors rather than actix's plain-text 400s.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    let message = err.to_string();
    error::Error::from(AppError::validation("body", message))
  })
}

pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req| {
    let message = err.to_string();
    error::Error::from(AppError::validation("query", message))
  })
}

pub fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, _req| {
    let message = err.to_string();
    error::Error::from(AppError::validation("path", message))
  })
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .app_data(path_config())
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_check_handler))
        // Catalog + seller product writes
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
            .route("/{product_id}", web::patch().to(product_handlers::update_product_handler))
            .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler))
            .route(
              "/{product_id}/related",
              web::get().to(product_handlers::related_products_handler),
            ),
        )
        .service(
          web::scope("/categories")
            .route("", web::get().to(category_handlers::list_categories_handler))
            .route("", web::post().to(category_handlers::create_category_handler))
            // Registered before "/{category_id}" so "slug" is not taken for an id.
            .route(
              "/slug/{slug}",
              web::get().to(category_handlers::get_category_by_slug_handler),
            )
            .route("/{category_id}", web::get().to(category_handlers::get_category_handler)),
        )
        // Session-scoped cart
        .service(
          web::scope("/cart")
            .route("", web::get().to(cart_handlers::get_cart_handler))
            .route("", web::post().to(cart_handlers::add_to_cart_handler))
            .route("", web::delete().to(cart_handlers::clear_cart_handler))
            .route("/summary", web::get().to(cart_handlers::cart_summary_handler))
            .route("/{item_id}", web::patch().to(cart_handlers::update_cart_item_handler))
            .route("/{item_id}", web::delete().to(cart_handlers::remove_cart_item_handler)),
        )
        // Seller console
        .service(
          web::scope("/seller")
            .route("/products", web::get().to(seller_handlers::seller_products_handler))
            .route("/orders", web::get().to(seller_handlers::seller_orders_handler))
            .route("/stats", web::get().to(seller_handlers::seller_stats_handler)),
        ),
    );
}
