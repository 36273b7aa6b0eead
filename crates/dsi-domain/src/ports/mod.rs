//! Capability contracts
//!
//! Each trait is one capability the application can load implementations of
//! through the provider registry. Implementations live outside this crate.

pub mod auto_update;
pub mod autostart;
pub mod integration;
pub mod keychain;
pub mod mount;
pub mod quick_access;
pub mod reveal;
pub mod second_factor;
pub mod tray;
pub mod ui_appearance;

pub use auto_update::AutoUpdateProvider;
pub use autostart::AutoStartProvider;
pub use integration::IntegrationService;
pub use keychain::KeychainAccessProvider;
pub use mount::{Mount, MountBuilder, MountService};
pub use quick_access::{QuickAccessEntry, QuickAccessService};
pub use reveal::RevealPathsService;
pub use second_factor::{SecondFactorCallback, SecondFactorOutcome, SecondFactorProvider};
pub use tray::{TrayIntegrationProvider, TrayMenuController};
pub use ui_appearance::{UiAppearanceListener, UiAppearanceProvider};
