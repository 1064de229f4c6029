// storefront/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

// SQLSTATE codes the store translates into client errors.
const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_NUMERIC_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {field}: {message}")]
  Validation { field: String, message: String },

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
    AppError::Validation {
      field: field.into(),
      message: message.into(),
    }
  }

  pub fn not_found(what: impl Into<String>) -> Self {
    AppError::NotFound(what.into())
  }
}

impl From<sqlx::Error> for AppError {
  fn from(err: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      match db_err.code().as_deref() {
        Some(PG_UNIQUE_VIOLATION) => {
          let constraint = db_err.constraint().unwrap_or("unique constraint").to_string();
          return AppError::Conflict(format!("Write conflicts with an existing row ({}).", constraint));
        }
        Some(PG_NUMERIC_OUT_OF_RANGE) => {
          return AppError::validation("quantity", "Value is out of range.");
        }
        _ => {}
      }
    }
    AppError::Sqlx(err)
  }
}

// Startup and seeding code composes with anyhow; keep whatever detail it carries.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<sqlx::Error>() {
      Ok(sqlx_err) => AppError::from(sqlx_err),
      Err(other) => AppError::Internal(format!("{:#}", other)),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation { .. } => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Conflict(_) => StatusCode::CONFLICT,
      AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    match self {
      AppError::Validation { field, message } => {
        tracing::warn!(field = %field, "Rejecting request: {}", message);
        HttpResponse::build(status).json(json!({"error": message, "field": field}))
      }
      AppError::NotFound(m) | AppError::Conflict(m) | AppError::Unauthorized(m) => {
        tracing::warn!(status = status.as_u16(), "Responding with client error: {}", m);
        HttpResponse::build(status).json(json!({"error": m}))
      }
      // Never leak storage or configuration detail to the caller.
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with internal error");
        HttpResponse::build(status).json(json!({"error": "Internal server error"}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
