// storefront/src/validation.rs

//! Insert/update payload validation.
//!
//! Everything here is pure: payloads go in, typed values or a field-level
//! `AppError::Validation` come out. Nothing touches the store, so references
//! to other rows (category ids, product ids) are checked by the services.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::{AppError, Result};
use crate::ids::CategoryId;
use crate::models::{CreateProductPayload, NewCategoryPayload, PriceInput, ProductStatus, UpdateProductPayload};

/// Monetary columns are decimal(10,2).
pub const MONEY_SCALE: u32 = 2;

/// Largest value a decimal(10,2) column holds.
pub fn max_money() -> Decimal {
  Decimal::new(9_999_999_999, MONEY_SCALE)
}

/// Rounds to cents, half away from zero, and always carries exactly two
/// decimal places so every backend serializes the same text (`"30.00"`).
pub fn round_money(value: Decimal) -> Decimal {
  let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
  if rounded.is_zero() {
    rounded.set_sign_positive(true);
  }
  rounded.rescale(MONEY_SCALE);
  rounded
}

/// A create payload that passed validation. The category name is still
/// unresolved: the seller service looks it up.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category_id: CategoryId,
  pub seller_name: String,
  pub image: String,
  pub images: Vec<String>,
  pub stock: i32,
  pub status: ProductStatus,
}

/// A partial update that passed validation. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub category_id: Option<CategoryId>,
  pub seller_name: Option<String>,
  pub image: Option<String>,
  pub images: Option<Vec<String>>,
  pub stock: Option<i32>,
  pub status: Option<ProductStatus>,
}

pub fn required_text(field: &str, value: &str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(AppError::validation(field, format!("{} must not be empty.", field)));
  }
  Ok(trimmed.to_string())
}

/// Accepts `"19.99"` or `19.99`, rejects anything negative, non-numeric or too
/// large for decimal(10,2), and rounds to cents.
pub fn parse_price(input: &PriceInput) -> Result<Decimal> {
  let text = input.as_text();
  let value = Decimal::from_str(&text)
    .map_err(|_| AppError::validation("price", format!("'{}' is not a decimal number.", text)))?;
  if value.is_sign_negative() && !value.is_zero() {
    return Err(AppError::validation("price", "Price must not be negative."));
  }
  let value = round_money(value);
  if value > max_money() {
    return Err(AppError::validation(
      "price",
      format!("Price must not exceed {}.", max_money()),
    ));
  }
  Ok(value)
}

pub fn validate_stock(stock: i64) -> Result<i32> {
  if stock < 0 {
    return Err(AppError::validation("stock", "Stock must be a non-negative integer."));
  }
  i32::try_from(stock).map_err(|_| AppError::validation("stock", "Stock is too large."))
}

/// Cart quantities are at least one; there is no delete-on-zero.
pub fn validate_quantity(quantity: i64) -> Result<i32> {
  if quantity < 1 {
    return Err(AppError::validation("quantity", "Quantity must be at least 1."));
  }
  i32::try_from(quantity).map_err(|_| AppError::validation("quantity", "Quantity is too large."))
}

pub fn parse_status(value: &str) -> Result<ProductStatus> {
  ProductStatus::from_str(value.trim()).map_err(|e| AppError::validation("status", e))
}

pub fn validate_new_product(payload: CreateProductPayload) -> Result<ValidatedProduct> {
  let name = required_text("name", &payload.name)?;
  let description = required_text("description", &payload.description)?;
  let price = parse_price(&payload.price)?;
  let category_id = CategoryId::new(required_text("categoryId", payload.category_id.as_str())?);
  let seller_name = required_text("sellerName", &payload.seller_name)?;
  let stock = validate_stock(payload.stock)?;
  let status = match payload.status.as_deref() {
    Some(s) => parse_status(s)?,
    None => ProductStatus::default(),
  };

  Ok(ValidatedProduct {
    name,
    description,
    price,
    category_id,
    seller_name,
    image: payload.image.trim().to_string(),
    images: payload.images,
    stock,
    status,
  })
}

pub fn validate_product_patch(payload: UpdateProductPayload) -> Result<ProductPatch> {
  Ok(ProductPatch {
    name: payload.name.as_deref().map(|v| required_text("name", v)).transpose()?,
    description: payload
      .description
      .as_deref()
      .map(|v| required_text("description", v))
      .transpose()?,
    price: payload.price.as_ref().map(parse_price).transpose()?,
    category_id: payload
      .category_id
      .as_ref()
      .map(|v| required_text("categoryId", v.as_str()).map(CategoryId::new))
      .transpose()?,
    seller_name: payload
      .seller_name
      .as_deref()
      .map(|v| required_text("sellerName", v))
      .transpose()?,
    image: payload.image.map(|v| v.trim().to_string()),
    images: payload.images,
    stock: payload.stock.map(validate_stock).transpose()?,
    status: payload.status.as_deref().map(parse_status).transpose()?,
  })
}

pub fn validate_new_category(payload: NewCategoryPayload) -> Result<NewCategoryPayload> {
  let name = required_text("name", &payload.name)?;
  let slug = required_text("slug", &payload.slug)?;
  if !slug
    .chars()
    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
  {
    return Err(AppError::validation(
      "slug",
      "Slug may only contain lowercase letters, digits and hyphens.",
    ));
  }
  Ok(NewCategoryPayload {
    name,
    slug,
    image: payload.image.trim().to_string(),
  })
}
