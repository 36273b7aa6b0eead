//! In-memory keychain
//!
//! Passphrases live in a process-local map and are lost when the process
//! exits. Registered at fallback priority so hosts without a real credential
//! store still get a working keychain.

use std::sync::Arc;

use dashmap::DashMap;
use dsi_application::ports::registry::{Availability, KEYCHAIN_PROVIDERS, ProviderEntry};
use dsi_domain::error::{Error, Result};
use dsi_domain::ports::{IntegrationService, KeychainAccessProvider};
use dsi_domain::value_objects::Priority;
use tracing::debug;

/// Keychain backed by a concurrent map
///
/// # Example
///
/// ```rust
/// use dsi_domain::ports::KeychainAccessProvider;
/// use dsi_providers::keychain::InMemoryKeychain;
///
/// let keychain = InMemoryKeychain::new();
/// keychain.store_passphrase("vault-1", Some("Work"), "hunter2").unwrap();
/// assert_eq!(keychain.load_passphrase("vault-1").unwrap().as_deref(), Some("hunter2"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryKeychain {
    entries: DashMap<String, StoredPassphrase>,
}

#[derive(Debug, Clone)]
struct StoredPassphrase {
    display_name: Option<String>,
    passphrase: String,
}

impl InMemoryKeychain {
    /// Create an empty keychain
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored passphrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name recorded for `key`
    pub fn display_name_of(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .and_then(|stored| stored.display_name.clone())
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_argument("keychain key must not be empty"));
        }
        Ok(())
    }
}

impl IntegrationService for InMemoryKeychain {
    fn display_name(&self) -> &str {
        "In-Memory Keychain"
    }

    fn is_supported(&self) -> bool {
        true
    }
}

impl KeychainAccessProvider for InMemoryKeychain {
    fn store_passphrase(
        &self,
        key: &str,
        display_name: Option<&str>,
        passphrase: &str,
    ) -> Result<()> {
        Self::validate_key(key)?;
        self.entries.insert(
            key.to_string(),
            StoredPassphrase {
                display_name: display_name.map(str::to_string),
                passphrase: passphrase.to_string(),
            },
        );
        debug!(key, "Stored passphrase in memory");
        Ok(())
    }

    fn load_passphrase(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(key)
            .map(|stored| stored.passphrase.clone()))
    }

    fn delete_passphrase(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn change_passphrase(
        &self,
        key: &str,
        display_name: Option<&str>,
        passphrase: &str,
    ) -> Result<()> {
        match self.entries.get_mut(key) {
            Some(mut stored) => {
                stored.passphrase = passphrase.to_string();
                if let Some(name) = display_name {
                    stored.display_name = Some(name.to_string());
                }
                Ok(())
            }
            None => Err(Error::keychain(format!("no passphrase stored for '{key}'"))),
        }
    }

    fn is_locked(&self) -> bool {
        false
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(KEYCHAIN_PROVIDERS)]
static IN_MEMORY_KEYCHAIN: ProviderEntry<dyn KeychainAccessProvider> = ProviderEntry {
    name: "in-memory",
    description: "Process-local keychain, forgotten on exit",
    priority: Priority::FALLBACK,
    platforms: &[],
    availability: Availability::Unchecked,
    factory: || Ok(Arc::new(InMemoryKeychain::new())),
};
