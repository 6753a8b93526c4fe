//! Detail-page lookup: find one product by the id taken from the URL path.

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// First record with the given id (linear scan, source order).
pub fn find_by_id<T: Entity<Id = ProductId>>(records: &[T], id: ProductId) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

/// Interpret a raw path segment as a product id using numeric comparison:
/// surrounding whitespace is ignored, `"3.0"` and `"3e0"` are id 3, and
/// `0x`/`0o`/`0b` prefixed integers are read in their radix. Anything that is
/// not an integral, in-range number yields `None`.
pub fn parse_path_id(raw: &str) -> Option<ProductId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_number(trimmed).and_then(ProductId::from_numeric)
}

fn parse_number(text: &str) -> Option<f64> {
    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return text.parse::<f64>().ok(),
    };
    let digits = &text[2..];
    // `from_str_radix` tolerates a leading sign; a prefixed literal does not.
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// What the detail page shows after its fetch completes.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(Product),
    NotFound,
    FetchFailed,
}

impl DetailOutcome {
    pub const NOT_FOUND_MESSAGE: &'static str = "Product not found";
    pub const FETCH_FAILED_MESSAGE: &'static str = "Error fetching product data";

    /// Fetch failure wins over everything; an unparseable id is simply not found.
    pub fn resolve<E>(fetched: Result<Vec<Product>, E>, raw_id: &str) -> Self {
        let Ok(products) = fetched else {
            return Self::FetchFailed;
        };
        parse_path_id(raw_id)
            .and_then(|id| find_by_id(&products, id))
            .cloned()
            .map_or(Self::NotFound, Self::Found)
    }
}
