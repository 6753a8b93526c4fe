//! Failure of a product-list fetch, shared by the server-side detail page
//! and the WASM catalog client.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not a product list.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    pub const API_ERROR_MESSAGE: &'static str = "Error in API";
    pub const FALLBACK_MESSAGE: &'static str = "Something went wrong";

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Message shown by the catalog view's error placeholder.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(_) => Self::API_ERROR_MESSAGE.to_string(),
            Self::Transport(msg) | Self::Decode(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => Self::FALLBACK_MESSAGE.to_string(),
        }
    }
}
