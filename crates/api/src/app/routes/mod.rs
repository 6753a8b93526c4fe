use axum::{routing::get, Router};

pub mod pages;
pub mod products;
pub mod system;

/// Router for the catalog: JSON list endpoint plus the two page routes.
pub fn router() -> Router {
    Router::new()
        .route(products::LIST_PATH, get(products::list_products))
        .route(pages::CATALOG_PATH, get(pages::catalog_page))
        .route("/products/", get(pages::trim_trailing_slash))
        .route("/products/:id", get(pages::product_detail))
        .route("/products/:id/", get(pages::trim_trailing_slash))
}
