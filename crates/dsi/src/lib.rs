//! # Desktop Service Integrations
//!
//! Pluggable access to operating system integrations (keychains, mounting,
//! tray icons, start-on-login and more). Each capability is a trait; providers
//! for it are discovered, filtered by platform and availability, ranked by
//! priority and instantiated on request.
//!
//! ## Example
//!
//! ```ignore
//! use dsi::Integrations;
//!
//! let integrations = Integrations::shared();
//! for keychain in integrations.keychains() {
//!     println!("{}", keychain.display_name());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability contracts, value objects and errors
//! - `application` - provider registry and selection pipeline
//! - `infrastructure` - plugin sources, configuration, logging and the facade
//! - `providers` - built-in fallback providers

pub mod cli;

/// Domain layer - capability contracts and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dsi_domain::*;
}

/// Application layer - provider registry and selection
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use dsi_application::*;
}

/// Infrastructure layer - config, logging, plugins and the facade
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dsi_infrastructure::*;
}

/// Built-in fallback providers
pub mod providers {
    pub use dsi_providers::*;
}

// Re-export commonly used types at the crate root
pub use application::{Capability, LoadingContext, ProviderEntry, ProviderRegistry};
pub use domain::{Error, OperatingSystem, Priority, Result};
pub use infrastructure::{AppConfig, ConfigLoader, Integrations};
