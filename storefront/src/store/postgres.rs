// storefront/src/store/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::str::FromStr;
use tracing::{error, info, instrument};

use super::{ProductQuery, ProductSort, Store};
use crate::errors::{AppError, Result};
use crate::ids::{CartItemId, CategoryId, OrderId, ProductId, SellerId, SessionId};
use crate::models::{CartItem, Category, NewOrder, Order, OrderStatus, Product, ProductStatus};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category_id, category_name, image, images, \
   seller_id, seller_name, stock, status, rating, review_count";
const CART_COLUMNS: &str = "id, session_id, product_id, quantity";
const ORDER_COLUMNS: &str = "id, seller_id, buyer_name, buyer_email, total, status, created_at";

#[derive(FromRow)]
struct CategoryRow {
  id: String,
  name: String,
  slug: String,
  image: String,
}

impl From<CategoryRow> for Category {
  fn from(row: CategoryRow) -> Self {
    Category {
      id: CategoryId::new(row.id),
      name: row.name,
      slug: row.slug,
      image: row.image,
    }
  }
}

#[derive(FromRow)]
struct ProductRow {
  id: String,
  name: String,
  description: String,
  price: Decimal,
  category_id: String,
  category_name: String,
  image: String,
  images: Vec<String>,
  seller_id: String,
  seller_name: String,
  stock: i32,
  status: String,
  rating: Decimal,
  review_count: i32,
}

impl TryFrom<ProductRow> for Product {
  type Error = AppError;

  fn try_from(row: ProductRow) -> Result<Self> {
    let status = ProductStatus::from_str(&row.status)
      .map_err(|e| AppError::Internal(format!("Corrupt product row {}: {}", row.id, e)))?;
    Ok(Product {
      id: ProductId::new(row.id),
      name: row.name,
      description: row.description,
      price: row.price,
      category_id: CategoryId::new(row.category_id),
      category_name: row.category_name,
      image: row.image,
      images: row.images,
      seller_id: SellerId::new(row.seller_id),
      seller_name: row.seller_name,
      stock: row.stock,
      status,
      rating: row.rating,
      review_count: row.review_count,
    })
  }
}

#[derive(FromRow)]
struct CartItemRow {
  id: String,
  session_id: String,
  product_id: String,
  quantity: i32,
}

impl From<CartItemRow> for CartItem {
  fn from(row: CartItemRow) -> Self {
    CartItem {
      id: CartItemId::new(row.id),
      session_id: SessionId::new(row.session_id),
      product_id: ProductId::new(row.product_id),
      quantity: row.quantity,
    }
  }
}

#[derive(FromRow)]
struct OrderRow {
  id: String,
  seller_id: String,
  buyer_name: String,
  buyer_email: String,
  total: Decimal,
  status: String,
  created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
  fn from(row: OrderRow) -> Self {
    Order {
      id: OrderId::new(row.id),
      seller_id: SellerId::new(row.seller_id),
      buyer_name: row.buyer_name,
      buyer_email: row.buyer_email,
      total: row.total,
      status: OrderStatus::from(row.status),
      created_at: row.created_at,
    }
  }
}

fn into_products(rows: Vec<ProductRow>) -> Result<Vec<Product>> {
  rows.into_iter().map(Product::try_from).collect()
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await
      .map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        AppError::from(e)
      })?;
    info!(max_connections, "Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  /// Applies the embedded migrations in `migrations/`.
  pub async fn migrate(&self) -> Result<()> {
    sqlx::migrate!("./migrations")
      .run(&self.pool)
      .await
      .map_err(|e| AppError::Internal(format!("Database migration failed: {}", e)))?;
    info!("Database migrations applied.");
    Ok(())
  }
}

#[async_trait]
impl Store for PgStore {
  async fn list_categories(&self) -> Result<Vec<Category>> {
    let rows: Vec<CategoryRow> = sqlx::query_as("SELECT id, name, slug, image FROM categories ORDER BY position ASC")
      .fetch_all(&self.pool)
      .await?;
    Ok(rows.into_iter().map(Category::from).collect())
  }

  async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>> {
    let row: Option<CategoryRow> = sqlx::query_as("SELECT id, name, slug, image FROM categories WHERE id = $1")
      .bind(id.as_str())
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(Category::from))
  }

  async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
    let row: Option<CategoryRow> = sqlx::query_as("SELECT id, name, slug, image FROM categories WHERE slug = $1")
      .bind(slug)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(Category::from))
  }

  async fn insert_category(&self, category: Category) -> Result<Category> {
    let row: CategoryRow = sqlx::query_as(
      "INSERT INTO categories (id, name, slug, image) VALUES ($1, $2, $3, $4) RETURNING id, name, slug, image",
    )
    .bind(category.id.as_str())
    .bind(&category.name)
    .bind(&category.slug)
    .bind(&category.image)
    .fetch_one(&self.pool)
    .await?;
    Ok(row.into())
  }

  #[instrument(name = "pg_store::query_products", skip(self))]
  async fn query_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!("SELECT {} FROM products WHERE TRUE", PRODUCT_COLUMNS));

    if let Some(category_id) = &query.category_id {
      qb.push(" AND category_id = ").push_bind(category_id.as_str().to_string());
    }
    if let Some(search) = &query.search {
      // strpos avoids having to escape LIKE wildcards in user input.
      qb.push(" AND strpos(lower(name), lower(")
        .push_bind(search.clone())
        .push(")) > 0");
    }
    if let Some(seller_id) = &query.seller_id {
      qb.push(" AND seller_id = ").push_bind(seller_id.as_str().to_string());
    }
    if let Some(excluded) = &query.exclude_id {
      qb.push(" AND id <> ").push_bind(excluded.as_str().to_string());
    }
    if let Some(min_price) = query.min_price {
      qb.push(" AND price >= ").push_bind(min_price);
    }
    if let Some(max_price) = query.max_price {
      qb.push(" AND price <= ").push_bind(max_price);
    }
    if let Some(min_rating) = query.min_rating {
      qb.push(" AND rating >= ").push_bind(min_rating);
    }

    qb.push(match query.sort {
      ProductSort::Featured => " ORDER BY position ASC",
      ProductSort::PriceLow => " ORDER BY price ASC, position ASC",
      ProductSort::PriceHigh => " ORDER BY price DESC, position ASC",
      ProductSort::Rating => " ORDER BY rating DESC, position ASC",
    });

    if let Some(limit) = query.limit {
      qb.push(" LIMIT ").push_bind(i64::from(limit));
    }
    if let Some(offset) = query.offset {
      qb.push(" OFFSET ").push_bind(i64::from(offset));
    }

    let rows: Vec<ProductRow> = qb.build_query_as().fetch_all(&self.pool).await?;
    into_products(rows)
  }

  async fn get_product(&self, id: &ProductId) -> Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(id.as_str())
      .fetch_optional(&self.pool)
      .await?;
    row.map(Product::try_from).transpose()
  }

  async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let keys: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
    let rows: Vec<ProductRow> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE id = ANY($1) ORDER BY position ASC",
      PRODUCT_COLUMNS
    ))
    .bind(keys)
    .fetch_all(&self.pool)
    .await?;
    into_products(rows)
  }

  async fn insert_product(&self, product: Product) -> Result<Product> {
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products (id, name, description, price, category_id, category_name, image, images, \
         seller_id, seller_name, stock, status, rating, review_count) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id.as_str())
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.category_id.as_str())
    .bind(&product.category_name)
    .bind(&product.image)
    .bind(&product.images)
    .bind(product.seller_id.as_str())
    .bind(&product.seller_name)
    .bind(product.stock)
    .bind(product.status.as_str())
    .bind(product.rating)
    .bind(product.review_count)
    .fetch_one(&self.pool)
    .await?;
    row.try_into()
  }

  async fn update_product(&self, product: Product) -> Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products SET name = $3, description = $4, price = $5, category_id = $6, category_name = $7, \
         image = $8, images = $9, seller_name = $10, stock = $11, status = $12 \
       WHERE id = $1 AND seller_id = $2 \
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id.as_str())
    .bind(product.seller_id.as_str())
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.category_id.as_str())
    .bind(&product.category_name)
    .bind(&product.image)
    .bind(&product.images)
    .bind(&product.seller_name)
    .bind(product.stock)
    .bind(product.status.as_str())
    .fetch_optional(&self.pool)
    .await?;
    row.map(Product::try_from).transpose()
  }

  async fn delete_product(&self, seller_id: &SellerId, id: &ProductId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1 AND seller_id = $2")
      .bind(id.as_str())
      .bind(seller_id.as_str())
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn list_cart_items(&self, session_id: &SessionId) -> Result<Vec<CartItem>> {
    let rows: Vec<CartItemRow> = sqlx::query_as(&format!(
      "SELECT {} FROM cart_items WHERE session_id = $1 ORDER BY created_at ASC, id ASC",
      CART_COLUMNS
    ))
    .bind(session_id.as_str())
    .fetch_all(&self.pool)
    .await?;
    Ok(rows.into_iter().map(CartItem::from).collect())
  }

  #[instrument(name = "pg_store::add_cart_quantity", skip(self, session_id, product_id), fields(session_id = %session_id, product_id = %product_id))]
  async fn add_cart_quantity(
    &self,
    session_id: &SessionId,
    product_id: &ProductId,
    quantity: i32,
  ) -> Result<CartItem> {
    // One statement: the unique (session_id, product_id) constraint arbitrates
    // concurrent adds, so two requests can never both insert.
    let row: CartItemRow = sqlx::query_as(&format!(
      "INSERT INTO cart_items (id, session_id, product_id, quantity) VALUES ($1, $2, $3, $4) \
       ON CONFLICT (session_id, product_id) DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity \
       RETURNING {}",
      CART_COLUMNS
    ))
    .bind(CartItemId::generate().as_str())
    .bind(session_id.as_str())
    .bind(product_id.as_str())
    .bind(quantity)
    .fetch_one(&self.pool)
    .await?;
    Ok(row.into())
  }

  async fn set_cart_quantity(
    &self,
    session_id: &SessionId,
    item_id: &CartItemId,
    quantity: i32,
  ) -> Result<Option<CartItem>> {
    let row: Option<CartItemRow> = sqlx::query_as(&format!(
      "UPDATE cart_items SET quantity = $3 WHERE id = $1 AND session_id = $2 RETURNING {}",
      CART_COLUMNS
    ))
    .bind(item_id.as_str())
    .bind(session_id.as_str())
    .bind(quantity)
    .fetch_optional(&self.pool)
    .await?;
    Ok(row.map(CartItem::from))
  }

  async fn delete_cart_item(&self, session_id: &SessionId, item_id: &CartItemId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND session_id = $2")
      .bind(item_id.as_str())
      .bind(session_id.as_str())
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn clear_cart(&self, session_id: &SessionId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
      .bind(session_id.as_str())
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }

  async fn insert_order(&self, order: NewOrder) -> Result<Order> {
    let row: OrderRow = sqlx::query_as(&format!(
      "INSERT INTO orders (id, seller_id, buyer_name, buyer_email, total, status) \
       VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
      ORDER_COLUMNS
    ))
    .bind(OrderId::generate().as_str())
    .bind(order.seller_id.as_str())
    .bind(&order.buyer_name)
    .bind(&order.buyer_email)
    .bind(order.total)
    .bind(order.status.as_str())
    .fetch_one(&self.pool)
    .await?;
    Ok(row.into())
  }

  async fn list_orders(&self, seller_id: &SellerId) -> Result<Vec<Order>> {
    let rows: Vec<OrderRow> = sqlx::query_as(&format!(
      "SELECT {} FROM orders WHERE seller_id = $1 ORDER BY created_at DESC, position DESC",
      ORDER_COLUMNS
    ))
    .bind(seller_id.as_str())
    .fetch_all(&self.pool)
    .await?;
    Ok(rows.into_iter().map(Order::from).collect())
  }
}
