//! Browser-side fetch of the product list.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use storefront_products::{FetchError, Product};

/// Same-origin list endpoint.
pub const LIST_PATH: &str = "/api/product";

/// Fetch the full product list once. Non-2xx responses are errors.
pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::transport("No window object"))?;

    let resp_value = JsFuture::from(window.fetch_with_str(LIST_PATH))
        .await
        .map_err(|e| FetchError::transport(js_message(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::decode("fetch did not yield a Response"))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let text_promise = resp.text().map_err(|e| FetchError::decode(js_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::decode(js_message(&e)))?
        .as_string()
        .ok_or_else(|| FetchError::decode("response body is not text"))?;

    serde_json::from_str(&text).map_err(|e| FetchError::decode(e.to_string()))
}

/// Best-effort message out of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default()
}
