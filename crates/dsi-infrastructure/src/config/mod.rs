//! Configuration
//!
//! Sources are merged in order, later ones winning:
//!
//! 1. [`AppConfig::default()`]
//! 2. a TOML file (explicit path, else the first default location found)
//! 3. `DSI_`-prefixed environment variables, `__` separating nested keys

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
