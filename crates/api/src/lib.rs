//! HTTP API: server, routing, and page rendering for the storefront.

pub mod app;
pub mod client;
pub mod config;
