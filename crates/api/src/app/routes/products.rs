use axum::Json;

use storefront_products::{catalog, Product};

pub use crate::client::LIST_PATH;

/// `GET /api/product`: the full, unfiltered product list.
pub async fn list_products() -> Json<&'static [Product]> {
    let products = catalog();
    tracing::debug!(count = products.len(), "serving product list");
    Json(products)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::config::ApiConfig;

    use super::*;

    fn test_app() -> axum::Router {
        build_app(ApiConfig::for_local_addr("127.0.0.1:0".parse().unwrap()))
    }

    async fn get_bytes(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, bytes)
    }

    #[tokio::test]
    async fn list_returns_full_catalog_as_json() {
        let (status, content_type, bytes) = get_bytes(test_app(), LIST_PATH).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let products: Vec<Product> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(products, catalog());
    }

    #[tokio::test]
    async fn list_is_stable_across_calls() {
        let app = test_app();
        let (_, _, first) = get_bytes(app.clone(), LIST_PATH).await;
        for _ in 0..5 {
            let (_, _, again) = get_bytes(app.clone(), LIST_PATH).await;
            assert_eq!(first, again);
        }
    }

    #[tokio::test]
    async fn query_parameters_are_ignored() {
        let (_, _, plain) = get_bytes(test_app(), LIST_PATH).await;
        let (status, _, with_query) = get_bytes(test_app(), "/api/product?category=Home&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain, with_query);
    }
}
