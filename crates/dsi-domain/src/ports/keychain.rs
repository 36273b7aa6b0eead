//! Keychain access
//!
//! Several keychain backends may be usable at the same time (e.g. a system
//! keychain and a password manager), so keychains are selected as a list.

use crate::error::Result;
use crate::ports::integration::IntegrationService;

/// Stores vault passphrases in a credential store
pub trait KeychainAccessProvider: IntegrationService {
    /// Store a passphrase under `key`
    ///
    /// `display_name` is shown by credential stores that list entries.
    fn store_passphrase(
        &self,
        key: &str,
        display_name: Option<&str>,
        passphrase: &str,
    ) -> Result<()>;

    /// Load the passphrase stored under `key`, if any
    fn load_passphrase(&self, key: &str) -> Result<Option<String>>;

    /// Delete the passphrase stored under `key`; deleting a missing key is not an error
    fn delete_passphrase(&self, key: &str) -> Result<()>;

    /// Replace the passphrase stored under `key`
    fn change_passphrase(
        &self,
        key: &str,
        display_name: Option<&str>,
        passphrase: &str,
    ) -> Result<()>;

    /// Whether the credential store is locked and needs user interaction
    fn is_locked(&self) -> bool;
}
