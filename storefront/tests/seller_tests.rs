// tests/seller_tests.rs
mod common;
use common::*;

use rust_decimal::Decimal;
use storefront::errors::AppError;
use storefront::ids::{CategoryId, ProductId, SellerId};
use storefront::models::{NewOrder, OrderStatus, PriceInput, ProductStatus, UpdateProductPayload};
use storefront::store::Store;

fn seller(id: &str) -> SellerId {
  SellerId::new(id)
}

fn field_of(err: AppError) -> String {
  match err {
    AppError::Validation { field, .. } => field,
    other => panic!("expected a validation error, got {:?}", other),
  }
}

async fn place_order(fx: &Fixture, seller_id: &str, buyer: &str, cents: i64) {
  place_order_with_status(fx, seller_id, buyer, cents, OrderStatus::Pending).await;
}

async fn place_order_with_status(fx: &Fixture, seller_id: &str, buyer: &str, cents: i64, status: OrderStatus) {
  fx.store
    .insert_order(NewOrder {
      seller_id: seller(seller_id),
      buyer_name: buyer.to_string(),
      buyer_email: format!("{}@example.com", buyer.to_lowercase()),
      total: Decimal::new(cents, 2),
      status,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_seller_products_are_scoped() {
  let fx = catalog_fixture().await;
  let mine = fx.state.seller.list_seller_products(&seller("seller-1")).await.unwrap();
  assert_eq!(ids(&mine), vec!["p1", "p3"]);

  let nobody = fx.state.seller.list_seller_products(&seller("seller-9")).await.unwrap();
  assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_create_product_denormalizes_category_name() {
  let fx = catalog_fixture().await;
  let created = fx
    .state
    .seller
    .create_product(&seller("seller-1"), create_payload("Kettle", "24.50", "c1", 3))
    .await
    .unwrap();

  assert_eq!(created.seller_id, seller("seller-1"));
  assert_eq!(created.category_name, "Home");
  assert_eq!(created.price, Decimal::new(2450, 2));
  assert_eq!(created.stock, 3);
  assert_eq!(created.status, ProductStatus::Active);
  assert_eq!(created.rating, Decimal::ZERO);
  assert_eq!(created.review_count, 0);

  let listed = fx.state.catalog.get_product(&created.id).await.unwrap();
  assert_eq!(listed, created);
}

#[tokio::test]
async fn test_create_accepts_numeric_price() {
  let fx = catalog_fixture().await;
  let mut payload = create_payload("Kettle", "0", "c1", 0);
  payload.price = serde_json::from_str::<PriceInput>("12.5").unwrap();
  let created = fx.state.seller.create_product(&seller("seller-1"), payload).await.unwrap();
  assert_eq!(created.price, Decimal::new(1250, 2));
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
  let fx = catalog_fixture().await;
  let s1 = seller("seller-1");

  let err = fx
    .state
    .seller
    .create_product(&s1, create_payload("Kettle", "abc", "c1", 1))
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "price");

  let err = fx
    .state
    .seller
    .create_product(&s1, create_payload("Kettle", "-1.00", "c1", 1))
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "price");

  let err = fx
    .state
    .seller
    .create_product(&s1, create_payload("Kettle", "10.00", "c1", -1))
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "stock");

  let err = fx
    .state
    .seller
    .create_product(&s1, create_payload("   ", "10.00", "c1", 1))
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "name");

  let err = fx
    .state
    .seller
    .create_product(&s1, create_payload("Kettle", "10.00", "c404", 1))
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "categoryId");

  // Nothing was written by the rejected requests.
  assert_eq!(fx.state.seller.list_seller_products(&s1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_patches_only_given_fields() {
  let fx = catalog_fixture().await;
  let updated = fx
    .state
    .seller
    .update_product(
      &seller("seller-1"),
      &ProductId::new("p1"),
      UpdateProductPayload {
        price: Some(PriceInput::from("17.25")),
        stock: Some(0),
        ..Default::default()
      },
    )
    .await
    .unwrap();

  assert_eq!(updated.price, Decimal::new(1725, 2));
  assert_eq!(updated.stock, 0);
  assert_eq!(updated.name, "Lamp");
  assert_eq!(updated.category_name, "Home");
}

#[tokio::test]
async fn test_update_category_refreshes_category_name() {
  let fx = catalog_fixture().await;
  let updated = fx
    .state
    .seller
    .update_product(
      &seller("seller-1"),
      &ProductId::new("p1"),
      UpdateProductPayload {
        category_id: Some(CategoryId::new("c2")),
        ..Default::default()
      },
    )
    .await
    .unwrap();
  assert_eq!(updated.category_id, CategoryId::new("c2"));
  assert_eq!(updated.category_name, "Electronics");

  let err = fx
    .state
    .seller
    .update_product(
      &seller("seller-1"),
      &ProductId::new("p1"),
      UpdateProductPayload {
        category_id: Some(CategoryId::new("c404")),
        ..Default::default()
      },
    )
    .await
    .unwrap_err();
  assert_eq!(field_of(err), "categoryId");
}

#[tokio::test]
async fn test_update_and_delete_by_other_seller_are_not_found() {
  let fx = catalog_fixture().await;
  let intruder = seller("seller-2");
  let p1 = ProductId::new("p1");

  let update = fx
    .state
    .seller
    .update_product(
      &intruder,
      &p1,
      UpdateProductPayload {
        name: Some("Mine now".to_string()),
        ..Default::default()
      },
    )
    .await;
  assert!(matches!(update, Err(AppError::NotFound(_))));

  let delete = fx.state.seller.delete_product(&intruder, &p1).await;
  assert!(matches!(delete, Err(AppError::NotFound(_))));

  let untouched = fx.state.catalog.get_product(&p1).await.unwrap();
  assert_eq!(untouched.name, "Lamp");
}

#[tokio::test]
async fn test_delete_removes_product_from_catalog() {
  let fx = catalog_fixture().await;
  let p3 = ProductId::new("p3");
  fx.state.seller.delete_product(&seller("seller-1"), &p3).await.unwrap();

  assert!(matches!(fx.state.catalog.get_product(&p3).await, Err(AppError::NotFound(_))));
  let again = fx.state.seller.delete_product(&seller("seller-1"), &p3).await;
  assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_orders_are_scoped_and_newest_first() {
  let fx = catalog_fixture().await;
  place_order(&fx, "seller-1", "Ada", 1000).await;
  place_order(&fx, "seller-2", "Bob", 5000).await;
  place_order(&fx, "seller-1", "Cy", 2000).await;

  let orders = fx.state.seller.list_seller_orders(&seller("seller-1")).await.unwrap();
  let buyers: Vec<&str> = orders.iter().map(|o| o.buyer_name.as_str()).collect();
  assert_eq!(buyers, vec!["Cy", "Ada"]);
  assert!(orders[0].created_at >= orders[1].created_at);
}

#[tokio::test]
async fn test_stats_without_orders_are_zero() {
  let fx = catalog_fixture().await;
  let stats = fx.state.seller.seller_stats(&seller("seller-1")).await.unwrap();
  assert_eq!(stats.revenue, Decimal::ZERO);
  assert_eq!(stats.total_orders, 0);
  assert_eq!(stats.avg_order_value, Decimal::ZERO);
  assert_eq!(stats.active_listings, 2);
}

#[tokio::test]
async fn test_stats_count_active_listings_and_revenue() {
  let fx = catalog_fixture().await;
  let s1 = seller("seller-1");
  fx.state
    .seller
    .update_product(
      &s1,
      &ProductId::new("p3"),
      UpdateProductPayload {
        status: Some("inactive".to_string()),
        ..Default::default()
      },
    )
    .await
    .unwrap();
  place_order(&fx, "seller-1", "Ada", 1000).await;
  place_order(&fx, "seller-1", "Cy", 2001).await;
  place_order(&fx, "seller-2", "Bob", 9999).await;

  let stats = fx.state.seller.seller_stats(&s1).await.unwrap();
  assert_eq!(stats.active_listings, 1);
  assert_eq!(stats.total_orders, 2);
  assert_eq!(stats.revenue, Decimal::new(3001, 2));
  assert_eq!(stats.avg_order_value, Decimal::new(1501, 2));
}

#[tokio::test]
async fn test_orders_with_unfamiliar_status_still_list() {
  let fx = catalog_fixture().await;
  let s1 = seller("seller-1");
  place_order_with_status(&fx, "seller-1", "Ada", 1000, OrderStatus::Shipped).await;
  place_order_with_status(&fx, "seller-1", "Cy", 2000, "processing".parse().unwrap()).await;

  let orders = fx.state.seller.list_seller_orders(&s1).await.unwrap();
  assert_eq!(orders.len(), 2);
  assert_eq!(orders[0].status, OrderStatus::Other("processing".to_string()));
  assert_eq!(orders[1].status, OrderStatus::Shipped);

  let stats = fx.state.seller.seller_stats(&s1).await.unwrap();
  assert_eq!(stats.total_orders, 2);
  assert_eq!(stats.revenue.to_string(), "30.00");
}
