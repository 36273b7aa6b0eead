//! Capabilities and their link-time registration slices
//!
//! Every capability contract from `dsi-domain::ports` gets a `linkme`
//! distributed slice. Built-in providers add themselves to these slices and
//! are visible to every [`LoadingContext`](super::LoadingContext) that
//! includes built-ins.
//!
//! ```text
//! provider crate:  #[linkme::distributed_slice(KEYCHAIN_PROVIDERS)]
//!                  static ENTRY: ProviderEntry<dyn KeychainAccessProvider> = ...
//!                        |
//!                        v
//! this module:     KEYCHAIN_PROVIDERS: [ProviderEntry<dyn KeychainAccessProvider>]
//!                        |
//!                        v
//! selection:       <dyn KeychainAccessProvider as Capability>::builtin_providers()
//! ```

use dsi_domain::ports::{
    AutoStartProvider, AutoUpdateProvider, KeychainAccessProvider, MountService,
    QuickAccessService, RevealPathsService, SecondFactorProvider, TrayIntegrationProvider,
    TrayMenuController, UiAppearanceProvider,
};
use linkme::distributed_slice;

use super::entry::ProviderEntry;

/// A capability contract that providers can be registered for
///
/// Implemented for the trait object type of each contract, e.g.
/// `dyn KeychainAccessProvider`. Implement it for your own trait objects to
/// run the selection pipeline over capabilities defined elsewhere.
pub trait Capability: 'static {
    /// Stable identifier used in logs and diagnostics
    const NAME: &'static str;

    /// Providers registered at link time
    fn builtin_providers() -> &'static [ProviderEntry<Self>];
}

/// Names of all capabilities defined by the domain contracts
pub const CAPABILITY_NAMES: &[&str] = &[
    "auto-start",
    "keychain",
    "mount",
    "reveal-paths",
    "quick-access",
    "tray-integration",
    "tray-menu",
    "ui-appearance",
    "second-factor",
    "auto-update",
];

/// Start-on-login providers
#[distributed_slice]
pub static AUTO_START_PROVIDERS: [ProviderEntry<dyn AutoStartProvider>] = [..];

impl Capability for dyn AutoStartProvider {
    const NAME: &'static str = "auto-start";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        AUTO_START_PROVIDERS.static_slice()
    }
}

/// Keychain backends
#[distributed_slice]
pub static KEYCHAIN_PROVIDERS: [ProviderEntry<dyn KeychainAccessProvider>] = [..];

impl Capability for dyn KeychainAccessProvider {
    const NAME: &'static str = "keychain";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        KEYCHAIN_PROVIDERS.static_slice()
    }
}

/// File system mount services
#[distributed_slice]
pub static MOUNT_PROVIDERS: [ProviderEntry<dyn MountService>] = [..];

impl Capability for dyn MountService {
    const NAME: &'static str = "mount";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        MOUNT_PROVIDERS.static_slice()
    }
}

/// "Reveal in file manager" services
#[distributed_slice]
pub static REVEAL_PATHS_PROVIDERS: [ProviderEntry<dyn RevealPathsService>] = [..];

impl Capability for dyn RevealPathsService {
    const NAME: &'static str = "reveal-paths";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        REVEAL_PATHS_PROVIDERS.static_slice()
    }
}

/// File manager quick-access services
#[distributed_slice]
pub static QUICK_ACCESS_PROVIDERS: [ProviderEntry<dyn QuickAccessService>] = [..];

impl Capability for dyn QuickAccessService {
    const NAME: &'static str = "quick-access";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        QUICK_ACCESS_PROVIDERS.static_slice()
    }
}

/// Tray minimize/restore hooks
#[distributed_slice]
pub static TRAY_INTEGRATION_PROVIDERS: [ProviderEntry<dyn TrayIntegrationProvider>] = [..];

impl Capability for dyn TrayIntegrationProvider {
    const NAME: &'static str = "tray-integration";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        TRAY_INTEGRATION_PROVIDERS.static_slice()
    }
}

/// Tray icon and menu controllers
#[distributed_slice]
pub static TRAY_MENU_PROVIDERS: [ProviderEntry<dyn TrayMenuController>] = [..];

impl Capability for dyn TrayMenuController {
    const NAME: &'static str = "tray-menu";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        TRAY_MENU_PROVIDERS.static_slice()
    }
}

/// OS theme providers
#[distributed_slice]
pub static UI_APPEARANCE_PROVIDERS: [ProviderEntry<dyn UiAppearanceProvider>] = [..];

impl Capability for dyn UiAppearanceProvider {
    const NAME: &'static str = "ui-appearance";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        UI_APPEARANCE_PROVIDERS.static_slice()
    }
}

/// Second factor authentication devices
#[distributed_slice]
pub static SECOND_FACTOR_PROVIDERS: [ProviderEntry<dyn SecondFactorProvider>] = [..];

impl Capability for dyn SecondFactorProvider {
    const NAME: &'static str = "second-factor";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        SECOND_FACTOR_PROVIDERS.static_slice()
    }
}

/// Platform auto-update mechanisms
#[distributed_slice]
pub static AUTO_UPDATE_PROVIDERS: [ProviderEntry<dyn AutoUpdateProvider>] = [..];

impl Capability for dyn AutoUpdateProvider {
    const NAME: &'static str = "auto-update";

    fn builtin_providers() -> &'static [ProviderEntry<Self>] {
        AUTO_UPDATE_PROVIDERS.static_slice()
    }
}
