//! Start-on-login integration

use crate::error::Result;

/// Toggles whether the application starts when the user logs in
pub trait AutoStartProvider: Send + Sync {
    /// Register the application to start on login
    fn enable(&self) -> Result<()>;

    /// Remove the start-on-login registration
    fn disable(&self) -> Result<()>;

    /// Whether the application is currently registered
    fn is_enabled(&self) -> bool;
}
