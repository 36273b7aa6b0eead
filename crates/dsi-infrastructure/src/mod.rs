//! # Infrastructure Layer
//!
//! Technical concerns around the provider registry: where plugins come from,
//! how the host is configured and how it logs.
//!
//! ## Module Categories
//!
//! ### Plugins
//! | Module | Description |
//! |--------|-------------|
//! | [`plugins`] | Plugin directory resolution, archive scan, zip bundles |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Facade
//! | Module | Description |
//! |--------|-------------|
//! | [`integrations`] | Typed accessors for every capability |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod integrations;
pub mod logging;
pub mod plugins;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use integrations::Integrations;
pub use plugins::{PluginSources, ZipBundle, find_plugin_archives, resolve_plugin_dir};
