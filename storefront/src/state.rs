// storefront/src/state.rs
use crate::config::AppConfig;
use crate::services::{CartService, CatalogService, SellerService};
use crate::store::Store;
use std::sync::Arc;

/// Shared by every handler. Holds no per-request data; the store is the only
/// state that outlives a request.
#[derive(Clone)]
pub struct AppState {
  pub catalog: CatalogService,
  pub cart: CartService,
  pub seller: SellerService,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
    let catalog = CatalogService::new(store.clone());
    let cart = CartService::new(store.clone(), catalog.clone());
    let seller = SellerService::new(store, catalog.clone());
    Self {
      catalog,
      cart,
      seller,
      config,
    }
  }
}
