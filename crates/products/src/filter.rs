//! Client-side catalog filtering.
//!
//! A product is kept iff it passes the category selection AND its lowercased
//! title contains the lowercased search text. Source order is preserved.

use storefront_core::Category;

use crate::product::Product;

/// Category selection in the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Sentinel: no category constraint.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL: &'static str = "All";

    /// `"All"` is the sentinel; every other label selects that exact category.
    pub fn parse(label: &str) -> Self {
        if label == Self::ALL {
            Self::All
        } else {
            Self::Only(Category::new(label))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn admits(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Selections offered as buttons by the storefront, in display order.
    pub fn choices() -> [CategoryFilter; 4] {
        [
            Self::All,
            Self::Only(Category::electronics()),
            Self::Only(Category::clothing()),
            Self::Only(Category::home()),
        ]
    }
}

/// Current filter inputs of the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl CatalogQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.admits(product.category())
            && product
                .title()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
