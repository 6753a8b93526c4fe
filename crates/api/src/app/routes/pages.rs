use axum::{
    extract::{Extension, Path},
    http::Uri,
    response::{Html, Redirect},
};

use storefront_products::DetailOutcome;

use crate::app::{render, AppState};

pub const CATALOG_PATH: &str = "/products";

/// `GET /products`: shell page for the client-rendered catalog.
pub async fn catalog_page() -> Html<String> {
    Html(render::catalog_shell())
}

/// Permanent redirect from a page path with a trailing slash to the bare path.
/// The query string is kept.
pub async fn trim_trailing_slash(uri: Uri) -> Redirect {
    let path = uri.path().trim_end_matches('/');
    let target = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    Redirect::permanent(&target)
}

/// `GET /products/:id`: fetch the list, then look the id up.
///
/// Always answers 200; fetch failures and unknown ids degrade to a placeholder.
pub async fn product_detail(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let fetched = state.client.fetch_products().await;
    if let Err(e) = &fetched {
        tracing::warn!(error = %e, url = %state.client.list_url(), "product list fetch failed");
    }

    let outcome = DetailOutcome::resolve(fetched, &id);
    if outcome == DetailOutcome::NotFound {
        tracing::debug!(id = %id, "product not found");
    }

    Html(render::detail_page(&outcome))
}
