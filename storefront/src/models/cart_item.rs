// storefront/src/models/cart_item.rs

use serde::{Serialize, Serializer};

use super::Product;
use crate::ids::{CartItemId, ProductId, SessionId};

/// One cart line. At most one exists per (session, product) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: CartItemId,
  pub session_id: SessionId,
  pub product_id: ProductId,
  pub quantity: i32,
}

/// A cart line joined against the catalog.
///
/// The product a line points at can be deleted by its seller while the line
/// still sits in somebody's cart. Such lines are kept as `Orphaned` so callers
/// decide whether to hide or flag them.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLine {
  Resolved { item: CartItem, product: Product },
  Orphaned { item: CartItem },
}

impl CartLine {
  pub fn item(&self) -> &CartItem {
    match self {
      CartLine::Resolved { item, .. } | CartLine::Orphaned { item } => item,
    }
  }

  pub fn product(&self) -> Option<&Product> {
    match self {
      CartLine::Resolved { product, .. } => Some(product),
      CartLine::Orphaned { .. } => None,
    }
  }

  pub fn is_orphaned(&self) -> bool {
    matches!(self, CartLine::Orphaned { .. })
  }
}

#[derive(Serialize)]
struct CartLineView<'a> {
  item: &'a CartItem,
  product: Option<&'a Product>,
}

// Wire shape is `{item, product}` with `product: null` for orphaned lines.
impl Serialize for CartLine {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    CartLineView {
      item: self.item(),
      product: self.product(),
    }
    .serialize(serializer)
  }
}
