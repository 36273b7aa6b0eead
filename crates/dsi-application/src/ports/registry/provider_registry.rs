//! Explicit provider registration
//!
//! Providers that are not linked into the host binary (or that are only
//! known at runtime) register here once at program initialization. The
//! registry maps a capability's type identity to its registration records.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::capability::Capability;
use super::entry::ProviderEntry;

/// Errors raised while registering providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A provider with the same name is already registered for the capability
    #[error("provider '{provider}' is already registered for capability '{capability}'")]
    DuplicateProvider {
        /// Capability name
        capability: &'static str,
        /// Provider name
        provider: &'static str,
    },
}

/// Registration records keyed by capability
#[derive(Default)]
pub struct ProviderRegistry {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for capability `C`
    ///
    /// Names must be unique per capability, across both explicit and
    /// link-time registrations.
    pub fn register<C: Capability + ?Sized>(
        &mut self,
        entry: ProviderEntry<C>,
    ) -> Result<(), RegistryError> {
        let taken = C::builtin_providers()
            .iter()
            .chain(self.entries::<C>())
            .any(|existing| existing.name == entry.name);
        if taken {
            return Err(RegistryError::DuplicateProvider {
                capability: C::NAME,
                provider: entry.name,
            });
        }

        debug!(
            capability = C::NAME,
            provider = entry.name,
            priority = %entry.priority,
            "Registered provider"
        );
        let slot = self
            .entries
            .entry(TypeId::of::<C>())
            .or_insert_with(|| Box::new(Vec::<ProviderEntry<C>>::new()));
        if let Some(list) = slot.downcast_mut::<Vec<ProviderEntry<C>>>() {
            list.push(entry);
        }
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<C: Capability + ?Sized>(
        mut self,
        entry: ProviderEntry<C>,
    ) -> Result<Self, RegistryError> {
        self.register(entry)?;
        Ok(self)
    }

    /// Explicitly registered providers of capability `C`, in registration order
    pub fn entries<C: Capability + ?Sized>(&self) -> &[ProviderEntry<C>] {
        self.entries
            .get(&TypeId::of::<C>())
            .and_then(|slot| slot.downcast_ref::<Vec<ProviderEntry<C>>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of capabilities with at least one explicit registration
    pub fn capability_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("capabilities", &self.entries.len())
            .finish()
    }
}
