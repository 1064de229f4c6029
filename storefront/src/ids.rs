//! Newtype identifiers.
//!
//! Every entity key is an opaque string, but the cart in particular handles
//! two of them side by side (the line id and the product it references).
//! Distinct types keep them from being swapped.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
      }

      /// A fresh random (UUID v4) identifier.
      pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }

      pub fn into_inner(self) -> String {
        self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        Self(s)
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        Self(s.to_string())
      }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str {
        &self.0
      }
    }
  };
}

define_id!(
  /// Primary key of a category.
  CategoryId
);
define_id!(
  /// Primary key of a catalog product.
  ProductId
);
define_id!(
  /// Primary key of a cart line. Not to be confused with the product it holds.
  CartItemId
);
define_id!(OrderId);
define_id!(
  /// Opaque browsing-session key that scopes an anonymous cart.
  SessionId
);
define_id!(
  /// Owner of products and orders.
  SellerId
);
