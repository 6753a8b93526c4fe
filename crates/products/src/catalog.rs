//! Built-in product dataset.
//!
//! The table is materialized once, on first access, and never mutated for the
//! lifetime of the process.

use std::sync::LazyLock;

use storefront_core::{Category, Price, ProductId};

use crate::product::Product;

/// (id, title, price in cents, category, image url)
const SEED: &[(u32, &str, u32, &str, &str)] = &[
    (1, "Smartphone", 69_999, Category::ELECTRONICS, "https://picsum.photos/seed/smartphone/600/400"),
    (2, "Wireless Headphones", 14_999, Category::ELECTRONICS, "https://picsum.photos/seed/headphones/600/400"),
    (3, "Laptop", 129_999, Category::ELECTRONICS, "https://picsum.photos/seed/laptop/600/400"),
    (4, "Smartwatch", 24_900, Category::ELECTRONICS, "https://picsum.photos/seed/smartwatch/600/400"),
    (5, "Denim Jacket", 8_950, Category::CLOTHING, "https://picsum.photos/seed/jacket/600/400"),
    (6, "Cotton T-Shirt", 1_999, Category::CLOTHING, "https://picsum.photos/seed/tshirt/600/400"),
    (7, "Running Shoes", 12_000, Category::CLOTHING, "https://picsum.photos/seed/shoes/600/400"),
    (8, "Wool Scarf", 2_499, Category::CLOTHING, "https://picsum.photos/seed/scarf/600/400"),
    (9, "Ceramic Coffee Mug", 1_299, Category::HOME, "https://picsum.photos/seed/mug/600/400"),
    (10, "Table Lamp", 4_500, Category::HOME, "https://picsum.photos/seed/lamp/600/400"),
    (11, "Throw Pillow", 2_999, Category::HOME, "https://picsum.photos/seed/pillow/600/400"),
    (12, "Bluetooth Speaker", 5_999, Category::ELECTRONICS, "https://picsum.photos/seed/speaker/600/400"),
];

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    SEED.iter()
        .map(|&(id, title, cents, category, image)| {
            Product::new(
                ProductId::new(id),
                title,
                Price::from_cents(cents),
                Category::new(category),
                image,
            )
        })
        .collect()
});

/// The full product list, in source order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use storefront_core::Entity;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn every_record_is_well_formed() {
        for p in catalog() {
            assert!(!p.title().is_empty());
            assert!(p.price().amount() >= 0.0);
            assert!(p.image().starts_with("https://"));
        }
    }

    #[test]
    fn every_well_known_category_is_populated() {
        for name in [Category::ELECTRONICS, Category::CLOTHING, Category::HOME] {
            assert!(catalog().iter().any(|p| p.category().as_str() == name), "{name} missing");
        }
    }

    #[test]
    fn repeated_access_returns_the_same_table() {
        let a = catalog();
        let b = catalog();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }
}
