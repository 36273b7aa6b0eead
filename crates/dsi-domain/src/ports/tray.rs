//! System tray integration

use crate::error::Result;
use crate::value_objects::TrayMenuItem;

/// Reacts to the main window being hidden in or restored from the tray
pub trait TrayIntegrationProvider: Send + Sync {
    /// Called after the application minimized to the tray
    fn minimized_to_tray(&self);

    /// Called after the application was restored from the tray
    fn restored_from_tray(&self);
}

/// Draws the tray icon and its menu
pub trait TrayMenuController: Send + Sync {
    /// Show `icon` (encoded image bytes) in the tray
    fn show_tray_icon(&self, icon: &[u8], tooltip: &str) -> Result<()>;

    /// Replace the tray menu
    fn set_tray_menu(&self, items: Vec<TrayMenuItem>) -> Result<()>;
}
