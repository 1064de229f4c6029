// storefront/src/services/seller.rs

//! Seller console: product CRUD and order reporting, always scoped to the
//! calling seller. Rows owned by somebody else are reported as not found.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::CatalogService;
use crate::errors::{AppError, Result};
use crate::ids::{CategoryId, ProductId, SellerId};
use crate::models::{Category, CreateProductPayload, Order, Product, ProductStatus, UpdateProductPayload};
use crate::store::{ProductQuery, Store};
use crate::validation::{self, round_money};

/// Aggregates over a list of orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
  pub total_revenue: Decimal,
  pub order_count: usize,
  pub avg_order_value: Decimal,
}

/// Pure: revenue, count and average order value. An empty list averages to zero.
pub fn compute_stats(orders: &[Order]) -> OrderStats {
  let total_revenue: Decimal = orders.iter().map(|o| o.total).sum();
  let order_count = orders.len();
  let avg_order_value = if order_count > 0 {
    round_money(total_revenue / Decimal::from(order_count as u64))
  } else {
    round_money(Decimal::ZERO)
  };
  OrderStats {
    total_revenue: round_money(total_revenue),
    order_count,
    avg_order_value,
  }
}

/// Dashboard numbers for one seller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
  pub revenue: Decimal,
  pub active_listings: usize,
  pub total_orders: usize,
  pub avg_order_value: Decimal,
}

#[derive(Clone)]
pub struct SellerService {
  store: Arc<dyn Store>,
  catalog: CatalogService,
}

impl SellerService {
  pub fn new(store: Arc<dyn Store>, catalog: CatalogService) -> Self {
    Self { store, catalog }
  }

  pub async fn list_seller_products(&self, seller_id: &SellerId) -> Result<Vec<Product>> {
    let query = ProductQuery {
      seller_id: Some(seller_id.clone()),
      ..Default::default()
    };
    self.catalog.query(&query).await
  }

  /// Category lookup for writes: a dangling reference is the caller's mistake.
  async fn resolve_category(&self, id: &CategoryId) -> Result<Category> {
    self.catalog.find_category(id).await?.ok_or_else(|| {
      warn!("Product write references unknown category {}.", id);
      AppError::validation("categoryId", format!("Category {} does not exist.", id))
    })
  }

  /// Loads a product only if `seller_id` owns it.
  async fn owned_product(&self, seller_id: &SellerId, product_id: &ProductId) -> Result<Product> {
    match self.catalog.find_product(product_id).await? {
      Some(product) if &product.seller_id == seller_id => Ok(product),
      _ => Err(AppError::not_found(format!("Product {} not found.", product_id))),
    }
  }

  #[instrument(name = "seller::create_product", skip(self, seller_id, payload), fields(seller_id = %seller_id))]
  pub async fn create_product(&self, seller_id: &SellerId, payload: CreateProductPayload) -> Result<Product> {
    let valid = validation::validate_new_product(payload)?;
    let category = self.resolve_category(&valid.category_id).await?;

    let product = self
      .store
      .insert_product(Product {
        id: ProductId::generate(),
        name: valid.name,
        description: valid.description,
        price: valid.price,
        category_id: category.id,
        category_name: category.name,
        image: valid.image,
        images: valid.images,
        seller_id: seller_id.clone(),
        seller_name: valid.seller_name,
        stock: valid.stock,
        status: valid.status,
        rating: Decimal::ZERO,
        review_count: 0,
      })
      .await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "seller::update_product", skip(self, seller_id, product_id, payload), fields(seller_id = %seller_id, product_id = %product_id))]
  pub async fn update_product(
    &self,
    seller_id: &SellerId,
    product_id: &ProductId,
    payload: UpdateProductPayload,
  ) -> Result<Product> {
    let patch = validation::validate_product_patch(payload)?;
    let mut product = self.owned_product(seller_id, product_id).await?;

    if let Some(category_id) = patch.category_id {
      // The name snapshot is only refreshed when the category actually changes.
      if category_id != product.category_id {
        let category = self.resolve_category(&category_id).await?;
        product.category_id = category.id;
        product.category_name = category.name;
      }
    }
    if let Some(name) = patch.name {
      product.name = name;
    }
    if let Some(description) = patch.description {
      product.description = description;
    }
    if let Some(price) = patch.price {
      product.price = price;
    }
    if let Some(seller_name) = patch.seller_name {
      product.seller_name = seller_name;
    }
    if let Some(image) = patch.image {
      product.image = image;
    }
    if let Some(images) = patch.images {
      product.images = images;
    }
    if let Some(stock) = patch.stock {
      product.stock = stock;
    }
    if let Some(status) = patch.status {
      product.status = status;
    }

    // The row can disappear between the read and the write.
    let updated = self
      .store
      .update_product(product)
      .await?
      .ok_or_else(|| AppError::not_found(format!("Product {} not found.", product_id)))?;
    info!("Product updated.");
    Ok(updated)
  }

  #[instrument(name = "seller::delete_product", skip(self, seller_id, product_id), fields(seller_id = %seller_id, product_id = %product_id))]
  pub async fn delete_product(&self, seller_id: &SellerId, product_id: &ProductId) -> Result<()> {
    if !self.store.delete_product(seller_id, product_id).await? {
      return Err(AppError::not_found(format!("Product {} not found.", product_id)));
    }
    info!("Product deleted.");
    Ok(())
  }

  pub async fn list_seller_orders(&self, seller_id: &SellerId) -> Result<Vec<Order>> {
    self.store.list_orders(seller_id).await
  }

  pub async fn seller_stats(&self, seller_id: &SellerId) -> Result<SellerStats> {
    let orders = self.list_seller_orders(seller_id).await?;
    let products = self.list_seller_products(seller_id).await?;
    let stats = compute_stats(&orders);
    Ok(SellerStats {
      revenue: stats.total_revenue,
      active_listings: products.iter().filter(|p| p.status == ProductStatus::Active).count(),
      total_orders: stats.order_count,
      avg_order_value: stats.avg_order_value,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ids::OrderId;
  use crate::models::OrderStatus;
  use chrono::Utc;

  fn order(cents: i64) -> Order {
    Order {
      id: OrderId::generate(),
      seller_id: SellerId::new("seller-1"),
      buyer_name: "Buyer".to_string(),
      buyer_email: "buyer@example.com".to_string(),
      total: Decimal::new(cents, 2),
      status: OrderStatus::Pending,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn stats_of_no_orders_are_zero() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.order_count, 0);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.avg_order_value, Decimal::ZERO);
    assert_eq!(stats.avg_order_value.to_string(), "0.00");
    assert_eq!(stats.total_revenue.to_string(), "0.00");
  }

  #[test]
  fn stats_average_is_rounded_to_cents() {
    let stats = compute_stats(&[order(1000), order(1000), order(1001)]);
    assert_eq!(stats.order_count, 3);
    assert_eq!(stats.total_revenue, Decimal::new(3001, 2));
    assert_eq!(stats.avg_order_value, Decimal::new(1000, 2));
  }
}
