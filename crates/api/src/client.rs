//! HTTP client for the product list endpoint.
//!
//! The detail page is rendered server-side but still reads the catalog the
//! same way a browser would: one `GET /api/product` per page load, never cached.

use reqwest::header::CACHE_CONTROL;

use storefront_products::{FetchError, Product};

pub const LIST_PATH: &str = "/api/product";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LIST_PATH)
    }

    /// Fetch the full product list. Non-2xx responses are errors.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let resp = self
            .http
            .get(self.list_url())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| FetchError::decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_joins_without_double_slash() {
        assert_eq!(
            CatalogClient::new("http://localhost:3000/").list_url(),
            "http://localhost:3000/api/product"
        );
        assert_eq!(
            CatalogClient::new("http://localhost:3000").list_url(),
            "http://localhost:3000/api/product"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = CatalogClient::new(format!("http://{addr}"))
            .fetch_products()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
