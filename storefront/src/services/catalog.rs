// storefront/src/services/catalog.rs

//! Read side of the catalog: product listings, product pages, categories.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::ids::{CategoryId, ProductId};
use crate::models::{Category, NewCategoryPayload, Product};
use crate::store::{ProductQuery, ProductSort, Store};
use crate::validation;

/// How many products a product page shows under "related products".
pub const RELATED_PRODUCTS_LIMIT: u32 = 4;

/// Listing filter as it arrives from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
  /// A category id; `"all"` or empty means every category.
  pub category: Option<String>,
  pub search: Option<String>,
  pub limit: Option<i64>,
  pub offset: Option<i64>,
  pub min_price: Option<Decimal>,
  pub max_price: Option<Decimal>,
  pub min_rating: Option<Decimal>,
  pub sort: Option<String>,
}

fn non_negative(field: &str, value: Option<i64>) -> Result<Option<u32>> {
  value
    .map(|v| u32::try_from(v).map_err(|_| AppError::validation(field, format!("{} must be a non-negative integer.", field))))
    .transpose()
}

impl ProductFilter {
  pub fn into_query(self) -> Result<ProductQuery> {
    let category_id = self
      .category
      .map(|c| c.trim().to_string())
      .filter(|c| !c.is_empty() && c != "all")
      .map(CategoryId::new);
    let search = self
      .search
      .map(|s| s.trim().to_string())
      .filter(|s| !s.is_empty());
    let sort = match self.sort.as_deref() {
      Some(key) => ProductSort::from_str(key.trim())?,
      None => ProductSort::Featured,
    };
    if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
      if min > max {
        return Err(AppError::validation("minPrice", "minPrice must not exceed maxPrice."));
      }
    }

    Ok(ProductQuery {
      category_id,
      search,
      seller_id: None,
      min_price: self.min_price,
      max_price: self.max_price,
      min_rating: self.min_rating,
      exclude_id: None,
      sort,
      offset: non_negative("offset", self.offset)?,
      limit: non_negative("limit", self.limit)?,
    })
  }
}

#[derive(Clone)]
pub struct CatalogService {
  store: Arc<dyn Store>,
}

impl CatalogService {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self { store }
  }

  #[instrument(name = "catalog::list_products", skip(self))]
  pub async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>> {
    let query = filter.into_query()?;
    let products = self.store.query_products(&query).await?;
    debug!("Listed {} products.", products.len());
    Ok(products)
  }

  pub async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>> {
    self.store.query_products(query).await
  }

  #[instrument(name = "catalog::get_product", skip(self, id), fields(product_id = %id))]
  pub async fn get_product(&self, id: &ProductId) -> Result<Product> {
    match self.store.get_product(id).await? {
      Some(product) => Ok(product),
      None => {
        warn!("Product {} not found.", id);
        Err(AppError::not_found(format!("Product {} not found.", id)))
      }
    }
  }

  pub async fn find_product(&self, id: &ProductId) -> Result<Option<Product>> {
    self.store.get_product(id).await
  }

  /// Loads every listed product that still exists.
  pub async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
    self.store.get_products(ids).await
  }

  /// Other products from the same category, in catalog order.
  #[instrument(name = "catalog::related_products", skip(self, id), fields(product_id = %id))]
  pub async fn related_products(&self, id: &ProductId, limit: u32) -> Result<Vec<Product>> {
    let product = self.get_product(id).await?;
    let query = ProductQuery {
      category_id: Some(product.category_id),
      exclude_id: Some(product.id),
      limit: Some(limit),
      ..Default::default()
    };
    self.store.query_products(&query).await
  }

  pub async fn list_categories(&self) -> Result<Vec<Category>> {
    self.store.list_categories().await
  }

  pub async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>> {
    self.store.get_category(id).await
  }

  pub async fn get_category(&self, id: &CategoryId) -> Result<Category> {
    self
      .store
      .get_category(id)
      .await?
      .ok_or_else(|| AppError::not_found(format!("Category {} not found.", id)))
  }

  pub async fn get_category_by_slug(&self, slug: &str) -> Result<Category> {
    self
      .store
      .get_category_by_slug(slug)
      .await?
      .ok_or_else(|| AppError::not_found(format!("Category '{}' not found.", slug)))
  }

  #[instrument(name = "catalog::create_category", skip(self, payload), fields(slug = %payload.slug))]
  pub async fn create_category(&self, payload: NewCategoryPayload) -> Result<Category> {
    let payload = validation::validate_new_category(payload)?;
    let category = self
      .store
      .insert_category(Category {
        id: CategoryId::generate(),
        name: payload.name,
        slug: payload.slug,
        image: payload.image,
      })
      .await?;
    info!(category_id = %category.id, "Category created.");
    Ok(category)
  }
}
