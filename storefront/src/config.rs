// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// `None` runs against the in-memory store.
  pub database_url: Option<String>,
  pub database_max_connections: u32,

  // Fallback identities for requests without the corresponding header.
  pub default_session_id: String,
  pub default_seller_id: Option<String>,

  pub seed_db: bool,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      database_url: None,
      database_max_connections: 10,
      default_session_id: "default-session".to_string(),
      default_seller_id: None,
      seed_db: false,
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source; unset and blank
  /// values fall back to the defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server_host = get("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match get("SERVER_PORT") {
      Some(v) => v
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", v, e)))?,
      None => defaults.server_port,
    };
    let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
      Some(v) => v
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS '{}'", v)))?,
      None => defaults.database_max_connections,
    };
    let seed_db = match get("SEED_DB") {
      Some(v) => v
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid SEED_DB value '{}': {}", v, e)))?,
      None => defaults.seed_db,
    };
    let log_format = match get("LOG_FORMAT").as_deref() {
      None | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url: get("DATABASE_URL"),
      database_max_connections,
      default_session_id: get("DEFAULT_SESSION_ID").unwrap_or(defaults.default_session_id),
      default_seller_id: get("DEFAULT_SELLER_ID"),
      seed_db,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
