//! Product price value object.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Non-negative, finite price in the catalog's single currency.
///
/// Serialized as a plain JSON number; deserialization runs the same
/// validation as [`Price::new`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> CatalogResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        Ok(Self(amount))
    }

    /// Build a price from a whole number of cents; always valid.
    pub fn from_cents(cents: u32) -> Self {
        Self(f64::from(cents) / 100.0)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Dollar sign followed by exactly two decimals: `$199.99`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
