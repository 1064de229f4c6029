// storefront/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::ids::{OrderId, SellerId};

/// Orders are written by checkout and fulfilment, which live outside this
/// service. Here the status is only ever read, and those systems may use
/// values this service has no name for; they are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
  #[default]
  Pending,
  Paid,
  Shipped,
  Delivered,
  Cancelled,
  Other(String),
}

impl OrderStatus {
  pub fn as_str(&self) -> &str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Paid => "paid",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
      OrderStatus::Other(status) => status,
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<String> for OrderStatus {
  fn from(status: String) -> Self {
    match status.as_str() {
      "pending" => OrderStatus::Pending,
      "paid" => OrderStatus::Paid,
      "shipped" => OrderStatus::Shipped,
      "delivered" => OrderStatus::Delivered,
      "cancelled" => OrderStatus::Cancelled,
      _ => OrderStatus::Other(status),
    }
  }
}

impl From<OrderStatus> for String {
  fn from(status: OrderStatus) -> Self {
    match status {
      OrderStatus::Other(status) => status,
      known => known.as_str().to_string(),
    }
  }
}

impl FromStr for OrderStatus {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(OrderStatus::from(s.to_string()))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: OrderId,
  pub seller_id: SellerId,
  pub buyer_name: String,
  pub buyer_email: String,
  pub total: Decimal,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
}

/// Row data for an order about to be stored. Id and timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub seller_id: SellerId,
  pub buyer_name: String,
  pub buyer_email: String,
  pub total: Decimal,
  pub status: OrderStatus,
}
