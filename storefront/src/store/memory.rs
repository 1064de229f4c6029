// storefront/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use super::{ProductQuery, Store};
use crate::errors::{AppError, Result};
use crate::ids::{CartItemId, CategoryId, OrderId, ProductId, SellerId, SessionId};
use crate::models::{CartItem, Category, NewOrder, Order, Product};

#[derive(Debug, Default)]
struct Tables {
  // Vecs keep insertion order, which is the catalog's "featured" order.
  categories: Vec<Category>,
  products: Vec<Product>,
  cart_items: Vec<CartItem>,
  orders: Vec<Order>,
}

/// Process-local store. Each operation takes the lock once and never holds it
/// across an `.await`, so every read-modify-write is atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
  tables: RwLock<Tables>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn list_categories(&self) -> Result<Vec<Category>> {
    Ok(self.tables.read().categories.clone())
  }

  async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>> {
    Ok(self.tables.read().categories.iter().find(|c| &c.id == id).cloned())
  }

  async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
    Ok(self.tables.read().categories.iter().find(|c| c.slug == slug).cloned())
  }

  async fn insert_category(&self, category: Category) -> Result<Category> {
    let mut tables = self.tables.write();
    if tables.categories.iter().any(|c| c.slug == category.slug) {
      return Err(AppError::Conflict(format!("Category slug '{}' is already taken.", category.slug)));
    }
    if tables.categories.iter().any(|c| c.id == category.id) {
      return Err(AppError::Conflict(format!("Category {} already exists.", category.id)));
    }
    tables.categories.push(category.clone());
    Ok(category)
  }

  async fn query_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
    let matching: Vec<Product> = {
      let tables = self.tables.read();
      tables.products.iter().filter(|p| query.matches(p)).cloned().collect()
    };
    Ok(query.arrange(matching))
  }

  async fn get_product(&self, id: &ProductId) -> Result<Option<Product>> {
    Ok(self.tables.read().products.iter().find(|p| &p.id == id).cloned())
  }

  async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
    let tables = self.tables.read();
    Ok(
      tables
        .products
        .iter()
        .filter(|p| ids.contains(&p.id))
        .cloned()
        .collect(),
    )
  }

  async fn insert_product(&self, product: Product) -> Result<Product> {
    let mut tables = self.tables.write();
    if tables.products.iter().any(|p| p.id == product.id) {
      return Err(AppError::Conflict(format!("Product {} already exists.", product.id)));
    }
    tables.products.push(product.clone());
    Ok(product)
  }

  async fn update_product(&self, product: Product) -> Result<Option<Product>> {
    let mut tables = self.tables.write();
    let slot = tables
      .products
      .iter_mut()
      .find(|p| p.id == product.id && p.seller_id == product.seller_id);
    Ok(slot.map(|existing| {
      *existing = product;
      existing.clone()
    }))
  }

  async fn delete_product(&self, seller_id: &SellerId, id: &ProductId) -> Result<bool> {
    let mut tables = self.tables.write();
    let before = tables.products.len();
    tables.products.retain(|p| !(&p.id == id && &p.seller_id == seller_id));
    Ok(tables.products.len() != before)
  }

  async fn list_cart_items(&self, session_id: &SessionId) -> Result<Vec<CartItem>> {
    let tables = self.tables.read();
    Ok(
      tables
        .cart_items
        .iter()
        .filter(|i| &i.session_id == session_id)
        .cloned()
        .collect(),
    )
  }

  async fn add_cart_quantity(
    &self,
    session_id: &SessionId,
    product_id: &ProductId,
    quantity: i32,
  ) -> Result<CartItem> {
    let mut tables = self.tables.write();
    let existing = tables
      .cart_items
      .iter_mut()
      .find(|i| &i.session_id == session_id && &i.product_id == product_id);

    if let Some(item) = existing {
      item.quantity = item
        .quantity
        .checked_add(quantity)
        .ok_or_else(|| AppError::validation("quantity", "Value is out of range."))?;
      debug!(item_id = %item.id, quantity = item.quantity, "Incremented existing cart line.");
      return Ok(item.clone());
    }

    let item = CartItem {
      id: CartItemId::generate(),
      session_id: session_id.clone(),
      product_id: product_id.clone(),
      quantity,
    };
    tables.cart_items.push(item.clone());
    debug!(item_id = %item.id, "Inserted new cart line.");
    Ok(item)
  }

  async fn set_cart_quantity(
    &self,
    session_id: &SessionId,
    item_id: &CartItemId,
    quantity: i32,
  ) -> Result<Option<CartItem>> {
    let mut tables = self.tables.write();
    let slot = tables
      .cart_items
      .iter_mut()
      .find(|i| &i.id == item_id && &i.session_id == session_id);
    Ok(slot.map(|item| {
      item.quantity = quantity;
      item.clone()
    }))
  }

  async fn delete_cart_item(&self, session_id: &SessionId, item_id: &CartItemId) -> Result<bool> {
    let mut tables = self.tables.write();
    let before = tables.cart_items.len();
    tables
      .cart_items
      .retain(|i| !(&i.id == item_id && &i.session_id == session_id));
    Ok(tables.cart_items.len() != before)
  }

  async fn clear_cart(&self, session_id: &SessionId) -> Result<u64> {
    let mut tables = self.tables.write();
    let before = tables.cart_items.len();
    tables.cart_items.retain(|i| &i.session_id != session_id);
    Ok((before - tables.cart_items.len()) as u64)
  }

  async fn insert_order(&self, order: NewOrder) -> Result<Order> {
    let order = Order {
      id: OrderId::generate(),
      seller_id: order.seller_id,
      buyer_name: order.buyer_name,
      buyer_email: order.buyer_email,
      total: order.total,
      status: order.status,
      created_at: Utc::now(),
    };
    self.tables.write().orders.push(order.clone());
    Ok(order)
  }

  async fn list_orders(&self, seller_id: &SellerId) -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = {
      let tables = self.tables.read();
      // Reversed first so equal timestamps still come out newest-inserted first.
      tables
        .orders
        .iter()
        .rev()
        .filter(|o| &o.seller_id == seller_id)
        .cloned()
        .collect()
    };
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
  }
}
