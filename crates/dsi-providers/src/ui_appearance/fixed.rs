//! Static UI appearance

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dsi_application::ports::registry::{Availability, ProviderEntry, UI_APPEARANCE_PROVIDERS};
use dsi_domain::error::Result;
use dsi_domain::ports::{UiAppearanceListener, UiAppearanceProvider};
use dsi_domain::value_objects::{Priority, Theme};
use tracing::trace;

/// Appearance provider for systems without theme detection
///
/// Always reports [`Theme::Light`]. Listeners are kept so they can be removed
/// again, but the theme never changes and they are never notified.
#[derive(Default)]
pub struct StaticUiAppearance {
    listeners: Mutex<Vec<Arc<dyn UiAppearanceListener>>>,
}

impl StaticUiAppearance {
    /// Create a provider with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn UiAppearanceListener>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for StaticUiAppearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticUiAppearance")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl UiAppearanceProvider for StaticUiAppearance {
    fn system_theme(&self) -> Theme {
        Theme::Light
    }

    fn adjust_to_theme(&self, theme: Theme) {
        trace!(?theme, "Nothing to adjust");
    }

    fn add_listener(&self, listener: Arc<dyn UiAppearanceListener>) -> Result<()> {
        self.lock().push(listener);
        Ok(())
    }

    fn remove_listener(&self, listener: &Arc<dyn UiAppearanceListener>) -> Result<()> {
        self.lock().retain(|known| !Arc::ptr_eq(known, listener));
        Ok(())
    }
}

#[linkme::distributed_slice(UI_APPEARANCE_PROVIDERS)]
static STATIC_UI_APPEARANCE: ProviderEntry<dyn UiAppearanceProvider> = ProviderEntry {
    name: "static",
    description: "Fixed light theme without change notifications",
    priority: Priority::FALLBACK,
    platforms: &[],
    availability: Availability::Unchecked,
    factory: || Ok(Arc::new(StaticUiAppearance::new())),
};
