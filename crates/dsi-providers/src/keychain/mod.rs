//! Keychain Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryKeychain`] | Fallback | Process-local map, forgotten on exit |

pub mod memory;

pub use memory::InMemoryKeychain;
