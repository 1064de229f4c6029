// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use storefront::config::AppConfig;
use storefront::logging;
use storefront::state::AppState;
use storefront::store::{seed, MemoryStore, PgStore, Store};
use storefront::web;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration comes first so the log format can be chosen.
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  logging::init_tracing(app_config.log_format);

  tracing::info!("Starting storefront server...");

  let store: Arc<dyn Store> = match &app_config.database_url {
    Some(url) => {
      let pg = PgStore::connect(url, app_config.database_max_connections)
        .await
        .context("Database connection error")?;
      pg.migrate().await.context("Database migration error")?;
      Arc::new(pg)
    }
    None => {
      tracing::warn!("DATABASE_URL is not set; using the in-memory store. Data is lost on restart.");
      Arc::new(MemoryStore::new())
    }
  };

  if app_config.seed_db {
    seed::seed_demo_data(store.as_ref())
      .await
      .context("Failed to seed database")?;
  }

  let app_state = AppState::new(store, app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  tracing::info!("Server stopped.");
  Ok(())
}
