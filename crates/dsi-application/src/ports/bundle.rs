//! Plugin bundle port
//!
//! A bundle is one plugin archive found in the plugin directory. The loading
//! context searches bundles in order when asked for a resource.

use std::path::Path;

use dsi_domain::error::Result;

/// Read-only view of one plugin archive
pub trait ResourceBundle: Send + Sync {
    /// Location of the archive on disk
    fn location(&self) -> &Path;

    /// Names of all resources in the archive
    fn resource_names(&self) -> Vec<String>;

    /// Whether the archive contains `name`
    fn contains(&self, name: &str) -> bool {
        self.resource_names().iter().any(|n| n == name)
    }

    /// Bytes of resource `name`, or `None` if the archive has no such entry
    fn read_resource(&self, name: &str) -> Result<Option<Vec<u8>>>;
}
