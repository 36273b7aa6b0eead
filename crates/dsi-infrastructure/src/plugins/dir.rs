//! Plugin directory resolution

use std::path::{Path, PathBuf};

use crate::constants::HOME_DIR_PREFIX;

/// Resolve the configured plugin directory value
///
/// Only a leading `~/` is expanded, against `home`. Without a known home
/// directory, and for every other form (`~`, `~user/…`, absolute or relative
/// paths), the value is used verbatim.
pub fn resolve_plugin_dir(value: &str, home: Option<&Path>) -> PathBuf {
    match (value.strip_prefix(HOME_DIR_PREFIX), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(value),
    }
}
