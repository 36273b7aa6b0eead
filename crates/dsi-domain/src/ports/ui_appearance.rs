//! OS theme integration

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::Theme;

/// Notified when the system theme changes
pub trait UiAppearanceListener: Send + Sync {
    /// The system switched to `theme`
    fn system_appearance_changed(&self, theme: Theme);
}

/// Reads and follows the OS appearance
pub trait UiAppearanceProvider: Send + Sync {
    /// Best matching theme for the OS appearance; [`Theme::Light`] if unknown
    fn system_theme(&self) -> Theme;

    /// Adjust UI parts outside the application's control; best effort, never fails
    fn adjust_to_theme(&self, theme: Theme);

    /// Register a listener for theme changes
    fn add_listener(&self, listener: Arc<dyn UiAppearanceListener>) -> Result<()>;

    /// Remove a listener; removing an unknown listener is a no-op
    fn remove_listener(&self, listener: &Arc<dyn UiAppearanceListener>) -> Result<()>;
}
