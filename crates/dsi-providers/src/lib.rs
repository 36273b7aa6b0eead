//! # Desktop Service Integrations - Built-in Providers
//!
//! Fallback implementations that register themselves into the capability
//! slices of `dsi-application` at link time. They run on every platform at
//! [`Priority::FALLBACK`](dsi_domain::Priority::FALLBACK), so any real
//! integration outranks them.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Keychain | `KeychainAccessProvider` | InMemory |
//! | UI Appearance | `UiAppearanceProvider` | Static |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! dsi-providers = { version = "0.1", default-features = false, features = ["keychain-memory"] }
//! ```
//!
//! Linking is what registers the providers; binaries that never name this
//! crate must force it with `extern crate dsi_providers;`.

pub use dsi_domain::error::{Error, Result};

/// Keychain provider implementations
#[cfg(feature = "keychain-memory")]
pub mod keychain;

/// UI appearance provider implementations
#[cfg(feature = "appearance-static")]
pub mod ui_appearance;
