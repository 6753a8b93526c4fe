//! `storefront-web`
//!
//! **Responsibility:** client-rendered catalog view.
//!
//! - `state`: the catalog's load/filter state machine (plain Rust, testable natively)
//! - `frontend`: Leptos components and the browser fetch, compiled for `wasm32` only
//!
//! The detail page is rendered by the API server; catalog cards link to it
//! with full page loads.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use state::{CatalogBody, CatalogState, LoadState};
