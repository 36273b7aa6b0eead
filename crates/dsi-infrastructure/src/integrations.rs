//! Integration facade
//!
//! [`Integrations`] is what application code talks to. It holds one
//! [`LoadingContext`] and turns each capability into a typed accessor. Every
//! call re-runs discovery, so accessors always see the current system state.

use std::sync::Arc;

use dsi_application::ports::registry::{LoadingContext, ProviderRegistry};
use dsi_domain::ports::{
    AutoStartProvider, AutoUpdateProvider, KeychainAccessProvider, MountService,
    QuickAccessService, RevealPathsService, SecondFactorProvider, TrayIntegrationProvider,
    TrayMenuController, UiAppearanceProvider,
};
use once_cell::sync::OnceCell;
use crate::config::{AppConfig, ConfigLoader};
use crate::plugins::{PluginSources, resolve_plugin_dir};

static SHARED: OnceCell<Integrations> = OnceCell::new();

/// Typed access to every desktop integration capability
#[derive(Debug, Clone)]
pub struct Integrations {
    context: LoadingContext,
    plugins: PluginSources,
}

impl Integrations {
    /// Facade over an existing context
    pub fn new(context: LoadingContext) -> Self {
        Self {
            context,
            plugins: PluginSources::empty(),
        }
    }

    /// Facade built from `config`, with built-in providers only
    pub fn from_config(config: &AppConfig) -> Self {
        Self::from_config_with_registry(config, Arc::new(ProviderRegistry::new()))
    }

    /// Facade built from `config`, adding the providers of `registry`
    pub fn from_config_with_registry(config: &AppConfig, registry: Arc<ProviderRegistry>) -> Self {
        let home = dirs::home_dir();
        let dir = resolve_plugin_dir(&config.plugin_dir, home.as_deref());
        let plugins = PluginSources::from_dir(&dir);
        Self {
            context: plugins.loading_context(registry),
            plugins,
        }
    }

    /// Facade built from the configuration found in files and the environment
    ///
    /// Invalid settings are logged and replaced by their defaults; see
    /// [`ConfigLoader::load_lenient`].
    pub fn from_env() -> Self {
        Self::from_config(&ConfigLoader::new().load_lenient())
    }

    /// Process-wide instance, built from the environment on first use
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::from_env)
    }

    /// The underlying loading context
    pub fn context(&self) -> &LoadingContext {
        &self.context
    }

    /// Plugin archives the context reads resources from
    pub fn plugins(&self) -> &PluginSources {
        &self.plugins
    }

    // ------------------------------------------------------------------
    // Single-provider capabilities
    // ------------------------------------------------------------------

    /// Start-on-login integration
    pub fn auto_start(&self) -> Option<Arc<dyn AutoStartProvider>> {
        self.context.select_best()
    }

    /// Tray icon integration
    pub fn tray_integration(&self) -> Option<Arc<dyn TrayIntegrationProvider>> {
        self.context.select_best()
    }

    /// Tray menu controller
    pub fn tray_menu(&self) -> Option<Arc<dyn TrayMenuController>> {
        self.context.select_best()
    }

    /// OS appearance integration
    pub fn ui_appearance(&self) -> Option<Arc<dyn UiAppearanceProvider>> {
        self.context.select_best()
    }

    /// Hardware second factor
    pub fn second_factor(&self) -> Option<Arc<dyn SecondFactorProvider>> {
        self.context.select_best()
    }

    /// Self-update integration
    pub fn auto_update(&self) -> Option<Arc<dyn AutoUpdateProvider>> {
        self.context.select_best()
    }

    // ------------------------------------------------------------------
    // Multi-provider capabilities
    // ------------------------------------------------------------------

    /// Supported keychains, highest priority first
    pub fn keychains(&self) -> Vec<Arc<dyn KeychainAccessProvider>> {
        self.context.select_supported()
    }

    /// Supported mount services, highest priority first
    pub fn mount_services(&self) -> Vec<Arc<dyn MountService>> {
        self.context.select_supported()
    }

    /// Supported reveal services, highest priority first
    pub fn reveal_services(&self) -> Vec<Arc<dyn RevealPathsService>> {
        self.context.select_supported()
    }

    /// Quick-access services, highest priority first
    pub fn quick_access_services(&self) -> Vec<Arc<dyn QuickAccessService>> {
        self.context.select_all()
    }

    /// Bytes of the first plugin resource named `name`
    pub fn resource(&self, name: &str) -> Option<Vec<u8>> {
        self.context.resource(name)
    }
}

impl Default for Integrations {
    fn default() -> Self {
        Self::new(LoadingContext::new())
    }
}
