// storefront/src/models/category.rs

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  pub id: CategoryId,
  pub name: String,
  /// Globally unique, used in storefront URLs.
  pub slug: String,
  pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryPayload {
  pub name: String,
  pub slug: String,
  #[serde(default)]
  pub image: String,
}
