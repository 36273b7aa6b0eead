//! Platform-managed application updates

use crate::error::Result;

/// Delegates updates to a platform mechanism (e.g. an app store or updater framework)
pub trait AutoUpdateProvider: Send + Sync {
    /// Prepare the update mechanism
    fn init_auto_update(&self);

    /// Release resources held by the update mechanism
    fn clean_up_auto_update(&self);

    /// Turn automatic updates on; returns whether they are now enabled
    fn enable_auto_update(&self) -> Result<bool>;

    /// Turn automatic updates off; returns whether they are now disabled
    fn disable_auto_update(&self) -> Result<bool>;
}
