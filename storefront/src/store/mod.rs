// storefront/src/store/mod.rs

//! The data-store seam.
//!
//! Services only see `dyn Store`. `PgStore` is the production backend;
//! `MemoryStore` backs local development without a database and the test
//! suite. Both enforce the cart invariant (one row per session and product)
//! inside the store, never by a read-then-write in the caller.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{AppError, Result};
use crate::ids::{CartItemId, CategoryId, ProductId, SellerId, SessionId};
use crate::models::{CartItem, Category, NewOrder, Order, Product};

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Result ordering for product listings. `Featured` keeps catalog (insertion)
/// order; the other keys fall back to catalog order on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
  #[default]
  Featured,
  PriceLow,
  PriceHigh,
  Rating,
}

impl FromStr for ProductSort {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "" | "featured" => Ok(ProductSort::Featured),
      "price-low" | "price_asc" => Ok(ProductSort::PriceLow),
      "price-high" | "price_desc" => Ok(ProductSort::PriceHigh),
      "rating" => Ok(ProductSort::Rating),
      other => Err(AppError::validation(
        "sort",
        format!("Unknown sort key '{}'. Use featured, price-low, price-high or rating.", other),
      )),
    }
  }
}

/// Product listing filter. All present conditions must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
  pub category_id: Option<CategoryId>,
  /// Case-insensitive substring of the product name.
  pub search: Option<String>,
  pub seller_id: Option<SellerId>,
  pub min_price: Option<Decimal>,
  pub max_price: Option<Decimal>,
  pub min_rating: Option<Decimal>,
  pub exclude_id: Option<ProductId>,
  pub sort: ProductSort,
  pub offset: Option<u32>,
  pub limit: Option<u32>,
}

impl ProductQuery {
  pub fn matches(&self, product: &Product) -> bool {
    if let Some(category_id) = &self.category_id {
      if &product.category_id != category_id {
        return false;
      }
    }
    if let Some(search) = &self.search {
      if !product.name.to_lowercase().contains(&search.to_lowercase()) {
        return false;
      }
    }
    if let Some(seller_id) = &self.seller_id {
      if &product.seller_id != seller_id {
        return false;
      }
    }
    if let Some(excluded) = &self.exclude_id {
      if &product.id == excluded {
        return false;
      }
    }
    if self.min_price.is_some_and(|min| product.price < min) {
      return false;
    }
    if self.max_price.is_some_and(|max| product.price > max) {
      return false;
    }
    if self.min_rating.is_some_and(|min| product.rating < min) {
      return false;
    }
    true
  }

  /// Sorts (stably) and slices rows that already passed `matches`.
  pub fn arrange(&self, mut products: Vec<Product>) -> Vec<Product> {
    match self.sort {
      ProductSort::Featured => {}
      ProductSort::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
      ProductSort::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
      ProductSort::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
    let offset = self.offset.unwrap_or(0) as usize;
    let limit = self.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    products.into_iter().skip(offset).take(limit).collect()
  }
}

#[async_trait]
pub trait Store: Send + Sync + 'static {
  async fn list_categories(&self) -> Result<Vec<Category>>;
  async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>>;
  async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
  /// Fails with `Conflict` when the slug is taken.
  async fn insert_category(&self, category: Category) -> Result<Category>;

  async fn query_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;
  async fn get_product(&self, id: &ProductId) -> Result<Option<Product>>;
  /// Missing ids are skipped, not reported.
  async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>>;
  async fn insert_product(&self, product: Product) -> Result<Product>;
  /// Replaces the row only when both id and seller match; `None` otherwise.
  async fn update_product(&self, product: Product) -> Result<Option<Product>>;
  async fn delete_product(&self, seller_id: &SellerId, id: &ProductId) -> Result<bool>;

  async fn list_cart_items(&self, session_id: &SessionId) -> Result<Vec<CartItem>>;
  /// Atomic upsert: creates the (session, product) row or adds `quantity` to it.
  async fn add_cart_quantity(&self, session_id: &SessionId, product_id: &ProductId, quantity: i32)
    -> Result<CartItem>;
  async fn set_cart_quantity(&self, session_id: &SessionId, item_id: &CartItemId, quantity: i32)
    -> Result<Option<CartItem>>;
  async fn delete_cart_item(&self, session_id: &SessionId, item_id: &CartItemId) -> Result<bool>;
  async fn clear_cart(&self, session_id: &SessionId) -> Result<u64>;

  async fn insert_order(&self, order: NewOrder) -> Result<Order>;
  /// Newest first.
  async fn list_orders(&self, seller_id: &SellerId) -> Result<Vec<Order>>;
}
