//! Server-side HTML for the page routes.
//!
//! Markup is deliberately plain: no styling, no client script except the
//! catalog bundle loader.

use storefront_products::{DetailOutcome, Product};

pub const CATALOG_HEADING: &str = "Our Featured Products";
pub const BUNDLE_SCRIPT: &str = "/pkg/storefront_web.js";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Shell for the client-rendered catalog; the WASM bundle mounts into `<body>`.
pub fn catalog_shell() -> String {
    let body = format!(
        "<h1>{CATALOG_HEADING}</h1>\n\
         <noscript>Enable JavaScript to browse the catalog.</noscript>\n\
         <script type=\"module\">import init from \"{BUNDLE_SCRIPT}\"; init();</script>"
    );
    document("Products", &body)
}

pub fn detail_page(outcome: &DetailOutcome) -> String {
    match outcome {
        DetailOutcome::Found(product) => document(product.title(), &product_details(product)),
        DetailOutcome::NotFound => document(
            "Product",
            &format!("<p class=\"not-found\">{}</p>", DetailOutcome::NOT_FOUND_MESSAGE),
        ),
        DetailOutcome::FetchFailed => document(
            "Product",
            &format!("<p class=\"error\">{}</p>", DetailOutcome::FETCH_FAILED_MESSAGE),
        ),
    }
}

fn product_details(product: &Product) -> String {
    let title = escape(product.title());
    format!(
        "<a href=\"/products\">&lt;&lt;&lt; Back</a>\n\
         <h1>Product Details</h1>\n\
         <div class=\"product\">\n\
         <img src=\"{image}\" alt=\"{title}\">\n\
         <h2>{title}</h2>\n\
         <p>Price: <span class=\"price\">{price}</span></p>\n\
         <p>Category: <span class=\"category\">{category}</span></p>\n\
         </div>",
        image = escape(product.image()),
        price = product.price(),
        category = escape(product.category().as_str()),
    )
}
