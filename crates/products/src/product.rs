use serde::{Deserialize, Serialize};

use storefront_core::{Category, Entity, Price, ProductId};

/// A single catalog record.
///
/// Records are immutable once built; the JSON shape is
/// `{"id", "title", "price", "category", "image"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Price,
    category: Category,
    image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category,
            image: image.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Image URL.
    pub fn image(&self) -> &str {
        &self.image
    }
}

/// Identity is the only way to read a product's id.
impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
