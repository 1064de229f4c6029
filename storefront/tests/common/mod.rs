// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

use storefront::config::AppConfig;
use storefront::ids::{CategoryId, ProductId, SellerId};
use storefront::models::{Category, CreateProductPayload, PriceInput, Product, ProductStatus};
use storefront::state::AppState;
use storefront::store::{MemoryStore, Store};

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

pub struct Fixture {
  pub store: Arc<MemoryStore>,
  pub state: AppState,
}

pub fn category(id: &str, name: &str, slug: &str) -> Category {
  Category {
    id: CategoryId::new(id),
    name: name.to_string(),
    slug: slug.to_string(),
    image: format!("https://img.example.com/{}.jpg", slug),
  }
}

pub fn product(id: &str, name: &str, cents: i64, category: &Category, seller: &str) -> Product {
  Product {
    id: ProductId::new(id),
    name: name.to_string(),
    description: format!("{} description", name),
    price: Decimal::new(cents, 2),
    category_id: category.id.clone(),
    category_name: category.name.clone(),
    image: String::new(),
    images: Vec::new(),
    seller_id: SellerId::new(seller),
    seller_name: format!("{} shop", seller),
    stock: 5,
    status: ProductStatus::Active,
    rating: Decimal::ZERO,
    review_count: 0,
  }
}

pub fn config() -> AppConfig {
  AppConfig::default()
}

/// Empty store plus the services wired on top of it.
pub fn empty_fixture() -> Fixture {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let state = AppState::new(store.clone() as Arc<dyn Store>, Arc::new(config()));
  Fixture { store, state }
}

/// Category `c1` ("Home", slug `home`) and product `p1` at 19.99 with stock 5.
pub async fn home_fixture() -> Fixture {
  let fixture = empty_fixture();
  let home = category("c1", "Home", "home");
  fixture.store.insert_category(home.clone()).await.unwrap();
  fixture
    .store
    .insert_product(product("p1", "Lamp", 1999, &home, "seller-1"))
    .await
    .unwrap();
  fixture
}

/// A small catalog over two categories and three sellers, in this catalog order:
/// p1 Lamp 19.99 (home, seller-1, rating 4.5), p2 Desk Lamp 89.00 (home, seller-2, 4.9),
/// p3 Headphones 199.99 (tech, seller-1, 4.2), p4 Rug 45.50 (home, seller-3, 4.9).
pub async fn catalog_fixture() -> Fixture {
  let fixture = empty_fixture();
  let home = category("c1", "Home", "home");
  let tech = category("c2", "Electronics", "electronics");
  fixture.store.insert_category(home.clone()).await.unwrap();
  fixture.store.insert_category(tech.clone()).await.unwrap();

  let rows = [
    ("p1", "Lamp", 1999, &home, "seller-1", 45),
    ("p2", "Desk Lamp", 8900, &home, "seller-2", 49),
    ("p3", "Headphones", 19999, &tech, "seller-1", 42),
    ("p4", "Rug", 4550, &home, "seller-3", 49),
  ];
  for (id, name, cents, cat, seller, rating) in rows {
    let mut p = product(id, name, cents, cat, seller);
    p.rating = Decimal::new(rating, 1);
    fixture.store.insert_product(p).await.unwrap();
  }
  fixture
}

pub fn create_payload(name: &str, price: &str, category_id: &str, stock: i64) -> CreateProductPayload {
  CreateProductPayload {
    name: name.to_string(),
    description: format!("{} description", name),
    price: PriceInput::from(price),
    category_id: CategoryId::new(category_id),
    seller_name: "Seller One".to_string(),
    image: String::new(),
    images: Vec::new(),
    stock,
    status: None,
  }
}

pub fn ids(products: &[Product]) -> Vec<&str> {
  products.iter().map(|p| p.id.as_str()).collect()
}
