//! Plugin sources
//!
//! Turns the configured plugin directory into the bundles a
//! [`LoadingContext`](dsi_application::ports::registry::LoadingContext) can
//! read resources from:
//!
//! ```text
//! "~/plugins" ──► resolve_plugin_dir ──► find_plugin_archives ──► ZipBundle…
//! ```
//!
//! Nothing in here fails: a bad directory or a corrupt archive only shrinks
//! the set of bundles.

pub mod archive;
pub mod dir;
pub mod scan;
pub mod sources;

pub use archive::ZipBundle;
pub use dir::resolve_plugin_dir;
pub use scan::{find_plugin_archives, is_plugin_archive};
pub use sources::PluginSources;
