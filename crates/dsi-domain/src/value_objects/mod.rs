//! Value objects shared by the capability contracts and the provider registry

pub mod mount;
pub mod platform;
pub mod priority;
pub mod theme;
pub mod tray;

pub use mount::{MountCapability, Mountpoint};
pub use platform::OperatingSystem;
pub use priority::Priority;
pub use theme::Theme;
pub use tray::{ActionItem, SubmenuItem, TrayAction, TrayMenuItem};
