// storefront/src/services/cart.rs

//! Session-scoped shopping cart.
//!
//! Every mutation after the initial add is keyed by the cart line's own id
//! (`CartItemId`), never by the product it holds, and always filtered by the
//! caller's session so one session cannot touch another's lines.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::CatalogService;
use crate::errors::{AppError, Result};
use crate::ids::{CartItemId, ProductId, SessionId};
use crate::models::{CartItem, CartLine, Product};
use crate::store::Store;
use crate::validation::{self, round_money};

/// Sum of `price * quantity` over resolvable lines. Orphaned lines count as zero.
pub fn compute_subtotal(lines: &[CartLine]) -> Decimal {
  let total: Decimal = lines
    .iter()
    .filter_map(|line| match line {
      CartLine::Resolved { item, product } => Some(product.price * Decimal::from(item.quantity)),
      CartLine::Orphaned { .. } => None,
    })
    .sum();
  round_money(total)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
  /// Total units across resolvable lines.
  pub item_count: i64,
  pub subtotal: Decimal,
  pub orphaned_items: usize,
}

#[derive(Clone)]
pub struct CartService {
  store: Arc<dyn Store>,
  catalog: CatalogService,
}

impl CartService {
  pub fn new(store: Arc<dyn Store>, catalog: CatalogService) -> Self {
    Self { store, catalog }
  }

  /// Adds `quantity` units of a product. A second add of the same product in
  /// the same session grows the existing line.
  #[instrument(name = "cart::add_item", skip(self, session_id, product_id), fields(session_id = %session_id, product_id = %product_id))]
  pub async fn add_item(&self, session_id: &SessionId, product_id: &ProductId, quantity: i64) -> Result<CartItem> {
    let quantity = validation::validate_quantity(quantity)?;
    if self.catalog.find_product(product_id).await?.is_none() {
      warn!("Add to cart rejected: product {} does not exist.", product_id);
      return Err(AppError::validation(
        "productId",
        format!("Product {} does not exist.", product_id),
      ));
    }

    let item = self.store.add_cart_quantity(session_id, product_id, quantity).await?;
    info!(item_id = %item.id, quantity = item.quantity, "Cart line saved.");
    Ok(item)
  }

  /// Sets a line's quantity. Quantities below one are rejected rather than
  /// treated as a removal; use `remove_item` for that.
  #[instrument(name = "cart::update_quantity", skip(self, session_id, item_id), fields(session_id = %session_id, item_id = %item_id))]
  pub async fn update_quantity(&self, session_id: &SessionId, item_id: &CartItemId, quantity: i64) -> Result<CartItem> {
    let quantity = validation::validate_quantity(quantity)?;
    self
      .store
      .set_cart_quantity(session_id, item_id, quantity)
      .await?
      .ok_or_else(|| AppError::not_found(format!("Cart item {} not found.", item_id)))
  }

  /// Idempotent: removing a line that is not there succeeds.
  #[instrument(name = "cart::remove_item", skip(self, session_id, item_id), fields(session_id = %session_id, item_id = %item_id))]
  pub async fn remove_item(&self, session_id: &SessionId, item_id: &CartItemId) -> Result<()> {
    let removed = self.store.delete_cart_item(session_id, item_id).await?;
    if !removed {
      info!("Cart item {} was already absent.", item_id);
    }
    Ok(())
  }

  #[instrument(name = "cart::clear", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn clear_cart(&self, session_id: &SessionId) -> Result<u64> {
    let removed = self.store.clear_cart(session_id).await?;
    info!(removed, "Cart cleared.");
    Ok(removed)
  }

  /// Lines joined with their products, in the order they were first added.
  #[instrument(name = "cart::list", skip(self, session_id), fields(session_id = %session_id))]
  pub async fn list_cart(&self, session_id: &SessionId) -> Result<Vec<CartLine>> {
    let items = self.store.list_cart_items(session_id).await?;
    let ids: Vec<ProductId> = items.iter().map(|i| i.product_id.clone()).collect();
    let products: HashMap<ProductId, Product> = self
      .catalog
      .products_by_ids(&ids)
      .await?
      .into_iter()
      .map(|p| (p.id.clone(), p))
      .collect();

    let lines: Vec<CartLine> = items
      .into_iter()
      .map(|item| match products.get(&item.product_id) {
        Some(product) => CartLine::Resolved {
          product: product.clone(),
          item,
        },
        None => {
          warn!(item_id = %item.id, product_id = %item.product_id, "Cart line references a missing product.");
          CartLine::Orphaned { item }
        }
      })
      .collect();
    Ok(lines)
  }

  pub async fn summary(&self, session_id: &SessionId) -> Result<CartSummary> {
    let lines = self.list_cart(session_id).await?;
    Ok(CartSummary {
      item_count: lines
        .iter()
        .filter(|l| !l.is_orphaned())
        .map(|l| i64::from(l.item().quantity))
        .sum(),
      subtotal: compute_subtotal(&lines),
      orphaned_items: lines.iter().filter(|l| l.is_orphaned()).count(),
    })
  }
}
