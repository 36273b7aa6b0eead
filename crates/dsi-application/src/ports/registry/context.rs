//! Loading context
//!
//! A [`LoadingContext`] is everything a discovery request can see: the
//! providers linked into the host, providers registered explicitly, and the
//! plugin bundles found in the plugin directory. It is immutable once built
//! and can be shared between threads; each discovery request re-runs the
//! selection pipeline against it.

use std::fmt;
use std::sync::Arc;

use dsi_domain::ports::IntegrationService;
use dsi_domain::value_objects::{OperatingSystem, Priority};
use tracing::{debug, warn};

use super::capability::Capability;
use super::entry::ProviderEntry;
use super::provider_registry::ProviderRegistry;
use super::selection::{LoadedProvider, select};
use crate::ports::bundle::ResourceBundle;

/// Non-instantiating description of one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDescriptor {
    /// Provider name
    pub name: &'static str,
    /// Provider description
    pub description: &'static str,
    /// Declared priority
    pub priority: Priority,
    /// Declared platform restriction; empty means all
    pub platforms: &'static [OperatingSystem],
    /// Whether the platform restriction admits the context's OS
    pub platform_eligible: bool,
    /// Whether the provider declares availability probes
    pub availability_checked: bool,
    /// Whether the provider was registered at link time
    pub builtin: bool,
}

/// What a discovery request can see
#[derive(Clone)]
pub struct LoadingContext {
    operating_system: OperatingSystem,
    include_builtin: bool,
    registry: Arc<ProviderRegistry>,
    bundles: Vec<Arc<dyn ResourceBundle>>,
}

impl LoadingContext {
    /// Context with the host's built-in providers, running on the current OS
    pub fn new() -> Self {
        Self {
            operating_system: OperatingSystem::current(),
            include_builtin: true,
            registry: Arc::new(ProviderRegistry::new()),
            bundles: Vec::new(),
        }
    }

    /// Add explicitly registered providers
    pub fn with_registry(mut self, registry: Arc<ProviderRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Add plugin bundles, searched in the given order
    pub fn with_bundles(mut self, bundles: Vec<Arc<dyn ResourceBundle>>) -> Self {
        self.bundles = bundles;
        self
    }

    /// Evaluate platform restrictions against `os` instead of the current OS
    pub fn with_operating_system(mut self, os: OperatingSystem) -> Self {
        self.operating_system = os;
        self
    }

    /// Hide providers registered at link time
    pub fn without_builtin_providers(mut self) -> Self {
        self.include_builtin = false;
        self
    }

    /// Operating system platform restrictions are evaluated against
    pub fn operating_system(&self) -> OperatingSystem {
        self.operating_system
    }

    /// Explicitly registered providers
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Plugin bundles
    pub fn bundles(&self) -> &[Arc<dyn ResourceBundle>] {
        &self.bundles
    }

    /// Every declared provider of capability `C`: built-ins first, then explicit
    /// registrations
    pub fn candidates<C: Capability + ?Sized>(&self) -> impl Iterator<Item = &ProviderEntry<C>> {
        let builtin: &'static [ProviderEntry<C>] = if self.include_builtin {
            C::builtin_providers()
        } else {
            &[]
        };
        builtin.iter().chain(self.registry.entries::<C>())
    }

    /// All usable providers of `C`, highest priority first, with their names
    pub fn load_all<C: Capability + ?Sized>(&self) -> Vec<LoadedProvider<C>> {
        select(self.operating_system, self.candidates::<C>())
    }

    /// All usable providers of `C`, highest priority first
    ///
    /// Providers of equal priority come in no particular order.
    pub fn select_all<C: Capability + ?Sized>(&self) -> Vec<Arc<C>> {
        self.load_all::<C>()
            .into_iter()
            .map(|provider| provider.instance)
            .collect()
    }

    /// The highest priority usable provider of `C`, if any
    ///
    /// Lower ranked candidates are still constructed and probed.
    pub fn select_best<C: Capability + ?Sized>(&self) -> Option<Arc<C>> {
        self.select_all::<C>().into_iter().next()
    }

    /// [`select_all`](Self::select_all) restricted to instances reporting
    /// [`IntegrationService::is_supported`]
    pub fn select_supported<C>(&self) -> Vec<Arc<C>>
    where
        C: Capability + IntegrationService + ?Sized,
    {
        self.select_all::<C>()
            .into_iter()
            .filter(|instance| instance.is_supported())
            .collect()
    }

    /// Describe every candidate of `C` without constructing anything
    pub fn describe<C: Capability + ?Sized>(&self) -> Vec<CandidateDescriptor> {
        let builtin_count = if self.include_builtin {
            C::builtin_providers().len()
        } else {
            0
        };
        self.candidates::<C>()
            .enumerate()
            .map(|(index, entry)| CandidateDescriptor {
                name: entry.name,
                description: entry.description,
                priority: entry.priority,
                platforms: entry.platforms,
                platform_eligible: entry.supports_platform(self.operating_system),
                availability_checked: entry.availability.is_checked(),
                builtin: index < builtin_count,
            })
            .collect()
    }

    /// Bytes of the first bundle resource named `name`
    pub fn resource(&self, name: &str) -> Option<Vec<u8>> {
        self.bundles
            .iter()
            .find_map(|bundle| read_from(bundle.as_ref(), name))
    }

    /// Bytes of every bundle resource named `name`, in bundle order
    pub fn resources(&self, name: &str) -> Vec<Vec<u8>> {
        self.bundles
            .iter()
            .filter_map(|bundle| read_from(bundle.as_ref(), name))
            .collect()
    }
}

fn read_from(bundle: &dyn ResourceBundle, name: &str) -> Option<Vec<u8>> {
    match bundle.read_resource(name) {
        Ok(Some(bytes)) => {
            debug!(
                bundle = %bundle.location().display(),
                resource = name,
                size = bytes.len(),
                "Loaded plugin resource"
            );
            Some(bytes)
        }
        Ok(None) => None,
        Err(error) => {
            warn!(
                bundle = %bundle.location().display(),
                resource = name,
                %error,
                "Failed to read plugin resource, skipping bundle"
            );
            None
        }
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoadingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingContext")
            .field("operating_system", &self.operating_system)
            .field("include_builtin", &self.include_builtin)
            .field("registry", &self.registry)
            .field(
                "bundles",
                &self
                    .bundles
                    .iter()
                    .map(|b| b.location().display().to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
