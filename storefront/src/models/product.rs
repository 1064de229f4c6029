// storefront/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{CategoryId, ProductId, SellerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
  #[default]
  Active,
  Inactive,
}

impl ProductStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProductStatus::Active => "active",
      ProductStatus::Inactive => "inactive",
    }
  }
}

impl fmt::Display for ProductStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ProductStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "active" => Ok(ProductStatus::Active),
      "inactive" => Ok(ProductStatus::Inactive),
      other => Err(format!("unknown product status '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category_id: CategoryId,
  /// Snapshot of the category name taken when the product was last written.
  /// Renaming the category later does not touch it.
  pub category_name: String,
  pub image: String,
  pub images: Vec<String>,
  pub seller_id: SellerId,
  pub seller_name: String,
  pub stock: i32,
  pub status: ProductStatus,
  pub rating: Decimal,
  pub review_count: i32,
}

/// Prices arrive either as JSON strings (`"19.99"`) or JSON numbers (`19.99`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
  Text(String),
  Number(serde_json::Number),
}

impl PriceInput {
  pub fn as_text(&self) -> String {
    match self {
      PriceInput::Text(s) => s.trim().to_string(),
      PriceInput::Number(n) => n.to_string(),
    }
  }
}

impl From<&str> for PriceInput {
  fn from(s: &str) -> Self {
    PriceInput::Text(s.to_string())
  }
}

// Client payloads may carry `sellerId` and `categoryName`. Both are ignored:
// the caller's identity and the stored category name are used instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
  pub name: String,
  pub description: String,
  pub price: PriceInput,
  pub category_id: CategoryId,
  pub seller_name: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub images: Vec<String>,
  pub stock: i64,
  #[serde(default)]
  pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<PriceInput>,
  pub category_id: Option<CategoryId>,
  pub seller_name: Option<String>,
  pub image: Option<String>,
  pub images: Option<Vec<String>>,
  pub stock: Option<i64>,
  pub status: Option<String>,
}
