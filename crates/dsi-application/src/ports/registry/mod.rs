//! Provider Registry System
//!
//! Discovers, filters, ranks and instantiates implementations of capability
//! contracts. Providers are described by a [`ProviderEntry`] and become
//! visible in two ways:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Link time:  #[linkme::distributed_slice(KEYCHAIN_PROVIDERS)] │
//! │                 static ENTRY: ProviderEntry<dyn ...> = ...      │
//! │  2. Run time:   registry.register::<dyn ...>(entry)?            │
//! │                              ↓                                  │
//! │  3. Context:    LoadingContext::new().with_registry(registry)   │
//! │                              ↓                                  │
//! │  4. Selection:  context.select_best::<dyn AutoStartProvider>()  │
//! │                 context.select_all::<dyn KeychainAccessProvider>()│
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selection never fails: a missing capability yields `None` or an empty
//! list, and a provider whose probes or constructor fail (or panic) is
//! logged and skipped.
//!
//! ## Usage
//!
//! ```ignore
//! use dsi_application::ports::registry::LoadingContext;
//! use dsi_domain::ports::AutoStartProvider;
//!
//! let context = LoadingContext::new();
//! if let Some(autostart) = context.select_best::<dyn AutoStartProvider>() {
//!     autostart.enable()?;
//! }
//! ```

pub mod capability;
pub mod context;
pub mod entry;
pub mod probe;
pub mod provider_registry;
pub mod selection;

pub use capability::{
    AUTO_START_PROVIDERS, AUTO_UPDATE_PROVIDERS, CAPABILITY_NAMES, Capability, KEYCHAIN_PROVIDERS,
    MOUNT_PROVIDERS, QUICK_ACCESS_PROVIDERS, REVEAL_PATHS_PROVIDERS, SECOND_FACTOR_PROVIDERS,
    TRAY_INTEGRATION_PROVIDERS, TRAY_MENU_PROVIDERS, UI_APPEARANCE_PROVIDERS,
};
pub use context::{CandidateDescriptor, LoadingContext};
pub use entry::{
    Availability, InstanceProbe, ProviderEntry, ProviderError, ProviderFactory, StaticProbe,
};
pub use probe::{ProbeError, ProbeOutcome};
pub use provider_registry::{ProviderRegistry, RegistryError};
pub use selection::{
    LoadedProvider, instantiate, is_platform_eligible, passes_instance_availability,
    passes_static_availability,
};
