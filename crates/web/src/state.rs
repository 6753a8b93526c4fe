//! Catalog view state, shared by the Leptos components.
//!
//! Load lifecycle: `Loading -> Success | Error`, once per mount. There is no
//! way back to `Loading`; later resolutions are ignored.

use storefront_products::{CatalogQuery, CategoryFilter, FetchError, Product};

/// Placeholder shown instead of an empty grid.
pub const NOT_FOUND_PLACEHOLDER: &str = "Product not found.";

/// Result of the one-shot list fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    /// Settle a `Loading` state; settled states are returned unchanged.
    pub fn resolve(self, result: Result<T, FetchError>) -> Self {
        match self {
            Self::Loading => match result {
                Ok(value) => Self::Success(value),
                Err(e) => Self::Error(e.user_message()),
            },
            settled => settled,
        }
    }
}

/// What the catalog area renders right now.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBody {
    Loading,
    Error(String),
    /// Fetched fine but nothing passes the filter.
    NotFound,
    /// Never empty.
    Grid(Vec<Product>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    load: LoadState<Vec<Product>>,
    query: CatalogQuery,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load lifecycle without the payload; changes at most once.
    pub fn phase(&self) -> LoadState<()> {
        match &self.load {
            LoadState::Loading => LoadState::Loading,
            LoadState::Success(_) => LoadState::Success(()),
            LoadState::Error(message) => LoadState::Error(message.clone()),
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn resolve(&mut self, result: Result<Vec<Product>, FetchError>) {
        self.load = std::mem::take(&mut self.load).resolve(result);
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn body(&self) -> CatalogBody {
        match &self.load {
            LoadState::Loading => CatalogBody::Loading,
            LoadState::Error(message) => CatalogBody::Error(message.clone()),
            LoadState::Success(products) => {
                let visible: Vec<Product> = self.query.apply(products).into_iter().cloned().collect();
                if visible.is_empty() {
                    CatalogBody::NotFound
                } else {
                    CatalogBody::Grid(visible)
                }
            }
        }
    }
}
