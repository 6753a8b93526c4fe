use reqwest::StatusCode;

use storefront_api::config::ApiConfig;
use storefront_products::{catalog, Entity, Product};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, bound to an ephemeral port and fetching from itself.
    async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        Self::serve(listener, ApiConfig::for_local_addr(addr)).await
    }

    /// Server whose detail page fetches from an address with nothing listening.
    async fn spawn_with_dead_upstream() -> Self {
        let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_addr = dead.local_addr().unwrap();
        drop(dead);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ApiConfig::for_local_addr(listener.local_addr().unwrap());
        config.api_base_url = format!("http://{dead_addr}");
        Self::serve(listener, config).await
    }

    async fn serve(listener: tokio::net::TcpListener, config: ApiConfig) -> Self {
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let app = storefront_api::app::build_app(config);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base_url, handle }
    }

    async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let res = reqwest::get(format!("{}{}", self.base_url, path)).await.unwrap();
        let status = res.status();
        (status, res.text().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn list_endpoint_serves_the_catalog() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/product", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");

    let products: Vec<Product> = res.json().await.unwrap();
    assert_eq!(products, catalog());
}

#[tokio::test]
async fn list_endpoint_is_stable_within_a_process() {
    let srv = TestServer::spawn().await;

    let (_, first) = srv.get_text("/api/product").await;
    let (_, second) = srv.get_text("/api/product").await;
    assert_eq!(first, second);
    let parsed: Vec<Product> = serde_json::from_str(&first).unwrap();
    assert_eq!(parsed.len(), catalog().len());
}

#[tokio::test]
async fn detail_page_renders_every_known_product() {
    let srv = TestServer::spawn().await;

    for product in catalog() {
        let (status, html) = srv.get_text(&format!("/products/{}", product.id())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(product.title()), "missing title for {}", product.id());
        assert!(html.contains(&product.price().to_string()));
    }
}

#[tokio::test]
async fn detail_page_accepts_numeric_forms_of_an_id() {
    let srv = TestServer::spawn().await;
    let first = &catalog()[0];

    let (_, html) = srv.get_text(&format!("/products/{}.0", first.id())).await;
    assert!(html.contains(first.title()));
}

#[tokio::test]
async fn trailing_slash_detail_url_lands_on_the_product() {
    let srv = TestServer::spawn().await;
    let first = &catalog()[0];

    let (status, html) = srv.get_text(&format!("/products/{}/", first.id())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(first.title()));
}

#[tokio::test]
async fn hex_id_matches_like_a_number() {
    let srv = TestServer::spawn().await;
    let first = &catalog()[0];

    let (_, html) = srv.get_text(&format!("/products/0x{:x}", first.id().get())).await;
    assert!(html.contains(first.title()));
}

#[tokio::test]
async fn detail_page_reports_unknown_ids_as_not_found() {
    let srv = TestServer::spawn().await;

    for raw in ["9999", "0", "abc", "1.5", "-3"] {
        let (status, html) = srv.get_text(&format!("/products/{raw}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Product not found"), "id {raw}");
        assert!(!html.contains("Error fetching product data"));
    }
}

#[tokio::test]
async fn detail_page_reports_fetch_failure_distinctly() {
    let srv = TestServer::spawn_with_dead_upstream().await;

    let (status, html) = srv.get_text("/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Error fetching product data"));
    assert!(!html.contains("Product not found"));
}
