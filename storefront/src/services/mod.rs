// storefront/src/services/mod.rs

//! Business operations over the store. Handlers stay thin and call into these.

pub mod cart;
pub mod catalog;
pub mod seller;

pub use cart::{compute_subtotal, CartService, CartSummary};
pub use catalog::{CatalogService, ProductFilter, RELATED_PRODUCTS_LIMIT};
pub use seller::{compute_stats, OrderStats, SellerService, SellerStats};
