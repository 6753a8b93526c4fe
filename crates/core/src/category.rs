//! Product category value object.

use serde::{Deserialize, Serialize};

/// Coarse classification used for catalog filtering.
///
/// The set is open: any string is a valid category. The well-known values
/// the storefront offers as filter buttons are exposed as constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const ELECTRONICS: &'static str = "Electronics";
    pub const CLOTHING: &'static str = "Clothing";
    pub const HOME: &'static str = "Home";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn electronics() -> Self {
        Self::new(Self::ELECTRONICS)
    }

    pub fn clothing() -> Self {
        Self::new(Self::CLOTHING)
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
