//! Application Layer - Desktop Service Integrations
//!
//! Discovers, filters, ranks and instantiates implementations of the
//! capability contracts defined in `dsi-domain`.
//!
//! ## Ports
//!
//! - `ports::registry`: provider metadata, link-time registration slices, the
//!   explicit [`ProviderRegistry`](ports::registry::ProviderRegistry) and the
//!   [`LoadingContext`](ports::registry::LoadingContext) that runs selection
//! - `ports::bundle`: read access to plugin archives
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `dsi-domain`: capability contracts and value objects
//! - `linkme` for link-time provider registration, `tracing`, `thiserror`

pub mod ports;

pub use ports::*;
