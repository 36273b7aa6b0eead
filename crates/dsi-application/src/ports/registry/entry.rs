//! Provider registration records
//!
//! A [`ProviderEntry`] is the declarative description of one implementation of
//! a capability: its priority, the operating systems it runs on, its
//! availability probes and a no-argument constructor. Entries only hold
//! `'static` data and plain function pointers, so they can be placed in
//! `linkme` distributed slices.

use std::fmt;
use std::sync::Arc;

use dsi_domain::value_objects::{OperatingSystem, Priority};
use thiserror::Error;

use super::probe::ProbeOutcome;

/// Check that runs before the provider is constructed
pub type StaticProbe = fn() -> ProbeOutcome;

/// Check that runs against a constructed provider
pub type InstanceProbe<C> = fn(&C) -> ProbeOutcome;

/// No-argument constructor of a provider
pub type ProviderFactory<C> = fn() -> Result<Arc<C>, ProviderError>;

/// Errors a provider factory may report
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider cannot be built in this environment
    #[error("cannot build provider: {0}")]
    Configuration(String),

    /// Construction started but failed
    #[error("provider initialization failed: {message}")]
    Initialization {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ProviderError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an initialization error
    pub fn initialization<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create an initialization error with source
    pub fn initialization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Initialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Availability checks of a provider
///
/// `Unchecked` providers pass both probe stages unconditionally. `Checked`
/// providers must pass every probe; probes that fail, error or panic exclude
/// the provider.
pub enum Availability<C: ?Sized + 'static> {
    /// No availability checks
    Unchecked,
    /// Probes run before and after construction
    Checked {
        /// Run in the static stage; a failure prevents construction
        before_construction: &'static [StaticProbe],
        /// Run against the constructed instance
        after_construction: &'static [InstanceProbe<C>],
    },
}

impl<C: ?Sized + 'static> Availability<C> {
    /// Only pre-construction probes
    pub const fn before(probes: &'static [StaticProbe]) -> Self {
        Self::Checked {
            before_construction: probes,
            after_construction: &[],
        }
    }

    /// Only post-construction probes
    pub const fn after(probes: &'static [InstanceProbe<C>]) -> Self {
        Self::Checked {
            before_construction: &[],
            after_construction: probes,
        }
    }

    /// Whether availability is checked at all
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked { .. })
    }

    pub(crate) fn static_probes(&self) -> &'static [StaticProbe] {
        match *self {
            Self::Unchecked => &[],
            Self::Checked {
                before_construction,
                ..
            } => before_construction,
        }
    }

    pub(crate) fn instance_probes(&self) -> &'static [InstanceProbe<C>] {
        match *self {
            Self::Unchecked => &[],
            Self::Checked {
                after_construction, ..
            } => after_construction,
        }
    }
}

impl<C: ?Sized + 'static> Clone for Availability<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized + 'static> Copy for Availability<C> {}

impl<C: ?Sized + 'static> fmt::Debug for Availability<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => f.write_str("Unchecked"),
            Self::Checked {
                before_construction,
                after_construction,
            } => f
                .debug_struct("Checked")
                .field("before_construction", &before_construction.len())
                .field("after_construction", &after_construction.len())
                .finish(),
        }
    }
}

/// Registry entry for one provider of capability `C`
///
/// # Example
///
/// ```ignore
/// use dsi_application::ports::registry::{Availability, ProviderEntry, KEYCHAIN_PROVIDERS};
///
/// #[linkme::distributed_slice(KEYCHAIN_PROVIDERS)]
/// static SECRET_SERVICE: ProviderEntry<dyn KeychainAccessProvider> = ProviderEntry {
///     name: "secret-service",
///     description: "freedesktop Secret Service keychain",
///     priority: Priority::new(900),
///     platforms: &[OperatingSystem::Linux],
///     availability: Availability::before(&[|| Ok(dbus_session_available())]),
///     factory: || Ok(Arc::new(SecretServiceKeychain::connect()?)),
/// };
/// ```
pub struct ProviderEntry<C: ?Sized + 'static> {
    /// Unique provider name within its capability
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Higher priorities are returned first
    pub priority: Priority,
    /// Operating systems the provider runs on; empty means all
    pub platforms: &'static [OperatingSystem],
    /// Availability probes
    pub availability: Availability<C>,
    /// Factory function to create the provider instance
    pub factory: ProviderFactory<C>,
}

impl<C: ?Sized + 'static> ProviderEntry<C> {
    /// Whether the provider may run on `os`
    pub fn supports_platform(&self, os: OperatingSystem) -> bool {
        os.satisfies(self.platforms)
    }
}

impl<C: ?Sized + 'static> Clone for ProviderEntry<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized + 'static> Copy for ProviderEntry<C> {}

impl<C: ?Sized + 'static> fmt::Debug for ProviderEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("platforms", &self.platforms)
            .field("availability", &self.availability)
            .finish_non_exhaustive()
    }
}
