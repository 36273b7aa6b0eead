//! Domain Layer - Desktop Service Integrations
//!
//! Capability contracts the application loads implementations of, the value
//! objects they exchange, and the shared error type.
//!
//! - `ports`: one trait per capability (autostart, keychain, mount, ...)
//! - `value_objects`: priorities, operating systems, themes, mountpoints, tray menus
//! - `error`: the domain [`Error`](error::Error) and [`Result`](error::Result)

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
