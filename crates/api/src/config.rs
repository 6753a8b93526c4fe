//! Process configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "STOREFRONT_BIND_ADDR";
pub const API_BASE_URL_ENV: &str = "STOREFRONT_API_BASE_URL";
pub const STATIC_DIR_ENV: &str = "STOREFRONT_STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Base URL the detail page fetches `/api/product` from.
    pub api_base_url: String,
    /// Directory holding the built WASM catalog bundle, served at `/pkg`.
    pub static_dir: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|e| ConfigError::Invalid {
            var: BIND_ADDR_ENV,
            reason: format!("{raw_addr:?}: {e}"),
        })?;

        let api_base_url = lookup(API_BASE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: API_BASE_URL_ENV,
                reason: format!("{api_base_url:?} must be an http(s) URL"),
            });
        }

        let static_dir = lookup(STATIC_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            api_base_url,
            static_dir,
        })
    }

    /// Configuration for a server already bound to `addr` that fetches from itself.
    pub fn for_local_addr(addr: SocketAddr) -> Self {
        Self {
            bind_addr: addr,
            api_base_url: format!("http://{addr}"),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
