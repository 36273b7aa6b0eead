//! Application ports
//!
//! - **registry** - provider registration and selection
//! - **bundle** - resource access to plugin archives, implemented by infrastructure

pub mod bundle;
pub mod registry;

pub use bundle::ResourceBundle;
pub use registry::*;
