//! Strongly-typed identifiers used across the catalog.

use serde::{Deserialize, Serialize};

/// Identifier of a product. Serialized as a plain JSON number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Convert a numeric value into an id when it denotes a representable
    /// integer (`3.0` is id 3; `3.5`, negatives and non-finite values are not ids).
    pub fn from_numeric(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < 0.0 || value > u32::MAX as f64 {
            return None;
        }
        Some(Self(value as u32))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}
