//! UI Appearance Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`StaticUiAppearance`] | Fallback | Always light, never notifies |

pub mod fixed;

pub use fixed::StaticUiAppearance;
