//! File manager sidebar / quick-access entries

use std::path::Path;

use crate::error::Result;

/// Adds locations to the file manager's quick-access area
pub trait QuickAccessService: Send + Sync {
    /// Pin `target` under `display_name`; may block
    fn add(&self, target: &Path, display_name: &str) -> Result<Box<dyn QuickAccessEntry>>;
}

/// A pinned location
pub trait QuickAccessEntry: Send {
    /// Unpin the location; may block
    fn remove(self: Box<Self>) -> Result<()>;
}
