//! `storefront-core` — catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod category;
pub mod entity;
pub mod error;
pub mod id;
pub mod price;

pub use category::Category;
pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use price::Price;
