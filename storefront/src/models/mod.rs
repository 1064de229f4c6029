// storefront/src/models/mod.rs

//! Contains data structures representing database entities and the payloads
//! that create or modify them.

pub mod cart_item;
pub mod category;
pub mod order;
pub mod product;

pub use cart_item::{CartItem, CartLine};
pub use category::{Category, NewCategoryPayload};
pub use order::{NewOrder, Order, OrderStatus};
pub use product::{CreateProductPayload, PriceInput, Product, ProductStatus, UpdateProductPayload};
