//! Test-local capabilities
//!
//! `Greeter` is a capability that exists only in this test binary, with one
//! link-time provider of its own. `Service` additionally reports support.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dsi_application::ports::bundle::ResourceBundle;
use dsi_application::ports::registry::{
    Availability, Capability, ProviderEntry, ProviderFactory,
};
use dsi_domain::error::{Error, Result};
use dsi_domain::ports::IntegrationService;
use dsi_domain::value_objects::Priority;
use linkme::distributed_slice;

pub trait Greeter: Send + Sync {
    fn name(&self) -> &str;
}

pub struct Named(pub &'static str);

impl Greeter for Named {
    fn name(&self) -> &str {
        self.0
    }
}

#[distributed_slice]
pub static GREETERS: [ProviderEntry<dyn Greeter>] = [..];

impl Capability for dyn Greeter {
    const NAME: &'static str = "greeter";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        GREETERS.static_slice()
    }
}

#[distributed_slice(GREETERS)]
static LINKED_GREETER: ProviderEntry<dyn Greeter> = ProviderEntry {
    name: "linked",
    description: "registered at link time",
    priority: Priority::new(-1000),
    platforms: &[],
    availability: Availability::Unchecked,
    factory: || Ok(Arc::new(Named("linked"))),
};

/// Unchecked, unrestricted greeter entry
pub const fn greeter(
    name: &'static str,
    priority: i32,
    factory: ProviderFactory<dyn Greeter>,
) -> ProviderEntry<dyn Greeter> {
    ProviderEntry {
        name,
        description: "test greeter",
        priority: Priority::new(priority),
        platforms: &[],
        availability: Availability::Unchecked,
        factory,
    }
}

pub trait Service: IntegrationService {}

pub struct FakeService {
    pub name: &'static str,
    pub supported: bool,
}

impl IntegrationService for FakeService {
    fn display_name(&self) -> &str {
        self.name
    }

    fn is_supported(&self) -> bool {
        self.supported
    }
}

impl Service for FakeService {}

impl Capability for dyn Service {
    const NAME: &'static str = "service";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        &[]
    }
}

/// In-memory bundle; `broken` bundles fail every read
pub struct MemoryBundle {
    pub location: PathBuf,
    pub resources: Vec<(&'static str, &'static [u8])>,
    pub broken: bool,
}

impl MemoryBundle {
    pub fn new(location: &str, resources: Vec<(&'static str, &'static [u8])>) -> Arc<Self> {
        Arc::new(Self {
            location: PathBuf::from(location),
            resources,
            broken: false,
        })
    }

    pub fn broken(location: &str) -> Arc<Self> {
        Arc::new(Self {
            location: PathBuf::from(location),
            resources: Vec::new(),
            broken: true,
        })
    }
}

impl ResourceBundle for MemoryBundle {
    fn location(&self) -> &Path {
        &self.location
    }

    fn resource_names(&self) -> Vec<String> {
        self.resources.iter().map(|(n, _)| (*n).to_string()).collect()
    }

    fn read_resource(&self, name: &str) -> Result<Option<Vec<u8>>> {
        if self.broken {
            return Err(Error::io("bundle is unreadable"));
        }
        Ok(self
            .resources
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| bytes.to_vec()))
    }
}
