// storefront/src/lib.rs

//! Storefront backend: product catalog, session carts and a seller console
//! over a relational store, exposed as a JSON API with actix-web.

pub mod config;
pub mod errors;
pub mod ids;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
pub mod web;

pub use errors::{AppError, Result};
pub use state::AppState;
