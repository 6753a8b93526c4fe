//! Products domain module.
//!
//! This crate contains the catalog's records and the rules applied to them
//! (built-in dataset, filtering, detail lookup), implemented purely as
//! deterministic logic (no IO, no HTTP). It compiles for both the server and
//! the WASM client.

pub mod catalog;
pub mod fetch;
pub mod filter;
pub mod lookup;
pub mod product;

pub use catalog::catalog;
pub use fetch::FetchError;
pub use filter::{CatalogQuery, CategoryFilter};
pub use lookup::{find_by_id, parse_path_id, DetailOutcome};
pub use product::Product;
pub use storefront_core::Entity;
