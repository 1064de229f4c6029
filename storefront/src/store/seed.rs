// storefront/src/store/seed.rs

//! Demo catalog loaded when `SEED_DB=true`.

use rust_decimal::Decimal;
use tracing::info;

use super::Store;
use crate::errors::Result;
use crate::ids::{CategoryId, ProductId, SellerId};
use crate::models::{Category, NewOrder, OrderStatus, Product, ProductStatus};

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
  (
    "cat-1",
    "Fashion & Accessories",
    "fashion",
    "https://images.unsplash.com/photo-1558769132-cb1aea3c3e46?w=800",
  ),
  (
    "cat-2",
    "Home & Living",
    "home-decor",
    "https://images.unsplash.com/photo-1615529328331-f8917597711f?w=800",
  ),
  (
    "cat-3",
    "Electronics & Tech",
    "electronics",
    "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=800",
  ),
];

struct DemoProduct {
  id: &'static str,
  name: &'static str,
  description: &'static str,
  price_cents: i64,
  category: usize,
  image: &'static str,
  /// Second gallery shot; the gallery opens with `image`.
  gallery: &'static str,
  seller: (&'static str, &'static str),
  stock: i32,
  rating_tenths: i64,
  reviews: i32,
}

const PRODUCTS: &[DemoProduct] = &[
  DemoProduct {
    id: "prod-1",
    name: "Premium Bluetooth Speaker",
    description: "Wireless speaker with 360-degree sound, 12-hour battery life and a water-resistant body.",
    price_cents: 12999,
    category: 2,
    image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=800",
    gallery: "https://images.unsplash.com/photo-1589003077984-894e133dabab?w=800",
    seller: ("seller-1", "AudioPro"),
    stock: 45,
    rating_tenths: 48,
    reviews: 124,
  },
  DemoProduct {
    id: "prod-2",
    name: "Ceramic Vase",
    description: "Handcrafted minimalist vase finished in a sage green glaze.",
    price_cents: 4500,
    category: 1,
    image: "https://images.unsplash.com/photo-1578500494198-246f612d3b3d?w=800",
    gallery: "https://images.unsplash.com/photo-1603561591411-07134e71a2a9?w=800",
    seller: ("seller-2", "HomeStyle"),
    stock: 28,
    rating_tenths: 49,
    reviews: 87,
  },
  DemoProduct {
    id: "prod-3",
    name: "Leather Crossbody Bag",
    description: "Genuine leather bag with adjustable strap, gold hardware and several compartments.",
    price_cents: 18999,
    category: 0,
    image: "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=800",
    gallery: "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=800",
    seller: ("seller-3", "LuxeGoods"),
    stock: 15,
    rating_tenths: 47,
    reviews: 203,
  },
  DemoProduct {
    id: "prod-4",
    name: "Wireless Mechanical Keyboard",
    description: "RGB-backlit mechanical keyboard with an aluminium frame and hot-swappable switches.",
    price_cents: 14999,
    category: 2,
    image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=800",
    gallery: "https://images.unsplash.com/photo-1595225476474-87563907a212?w=800",
    seller: ("seller-4", "TechGear"),
    stock: 32,
    rating_tenths: 46,
    reviews: 156,
  },
  DemoProduct {
    id: "prod-5",
    name: "Artisanal Scented Candle",
    description: "Hand-poured soy wax candle with essential oils and a wooden wick.",
    price_cents: 2800,
    category: 1,
    image: "https://images.unsplash.com/photo-1602874801006-a7b7e740e39e?w=800",
    gallery: "https://images.unsplash.com/photo-1603006905003-be475563bc59?w=800",
    seller: ("seller-5", "CozyCraft"),
    stock: 67,
    rating_tenths: 50,
    reviews: 94,
  },
  DemoProduct {
    id: "prod-6",
    name: "Premium Headphones",
    description: "Over-ear noise-cancelling headphones with 30-hour battery life.",
    price_cents: 29999,
    category: 2,
    image: "https://images.unsplash.com/photo-1546435770-a3e426bf472b?w=800",
    gallery: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800",
    seller: ("seller-1", "AudioPro"),
    stock: 21,
    rating_tenths: 49,
    reviews: 267,
  },
  DemoProduct {
    id: "prod-7",
    name: "Stainless Steel Water Bottle",
    description: "Insulated bottle that keeps drinks cold for 24 hours or hot for 12.",
    price_cents: 3500,
    category: 1,
    image: "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=800",
    gallery: "https://images.unsplash.com/photo-1523362628745-0c100150b504?w=800",
    seller: ("seller-6", "EcoLife"),
    stock: 89,
    rating_tenths: 48,
    reviews: 178,
  },
  DemoProduct {
    id: "prod-8",
    name: "Macrame Wall Hanging",
    description: "Handcrafted cotton rope wall art, supplied with a wooden dowel.",
    price_cents: 6500,
    category: 1,
    image: "https://images.unsplash.com/photo-1617098900591-3f90928e8c54?w=800",
    gallery: "https://images.unsplash.com/photo-1618220924273-338d82d6f886?w=800",
    seller: ("seller-7", "HandmadeHome"),
    stock: 12,
    rating_tenths: 47,
    reviews: 52,
  },
];

const ORDERS: &[(&str, &str, i64, OrderStatus)] = &[
  ("Sarah Mitchell", "sarah@example.com", 12999, OrderStatus::Delivered),
  ("Michael Chen", "michael@example.com", 42998, OrderStatus::Shipped),
  ("Emma Rodriguez", "emma@example.com", 29999, OrderStatus::Pending),
];

/// Loads the demo data unless the store already has categories.
pub async fn seed_demo_data(store: &dyn Store) -> Result<()> {
  if !store.list_categories().await?.is_empty() {
    info!("Store already holds catalog data; skipping seed.");
    return Ok(());
  }

  let mut categories = Vec::with_capacity(CATEGORIES.len());
  for (id, name, slug, image) in CATEGORIES {
    let category = store
      .insert_category(Category {
        id: CategoryId::new(*id),
        name: name.to_string(),
        slug: slug.to_string(),
        image: image.to_string(),
      })
      .await?;
    categories.push(category);
  }

  for demo in PRODUCTS {
    let category = &categories[demo.category];
    store
      .insert_product(Product {
        id: ProductId::new(demo.id),
        name: demo.name.to_string(),
        description: demo.description.to_string(),
        price: Decimal::new(demo.price_cents, 2),
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        image: demo.image.to_string(),
        images: vec![demo.image.to_string(), demo.gallery.to_string()],
        seller_id: SellerId::new(demo.seller.0),
        seller_name: demo.seller.1.to_string(),
        stock: demo.stock,
        status: ProductStatus::Active,
        rating: Decimal::new(demo.rating_tenths, 1),
        review_count: demo.reviews,
      })
      .await?;
  }

  for (buyer_name, buyer_email, total_cents, status) in ORDERS {
    store
      .insert_order(NewOrder {
        seller_id: SellerId::new("seller-1"),
        buyer_name: buyer_name.to_string(),
        buyer_email: buyer_email.to_string(),
        total: Decimal::new(*total_cents, 2),
        status: status.clone(),
      })
      .await?;
  }

  info!(
    categories = CATEGORIES.len(),
    products = PRODUCTS.len(),
    orders = ORDERS.len(),
    "Seeded demo catalog."
  );
  Ok(())
}
