//! Plugin archive discovery

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::PLUGIN_ARCHIVE_SUFFIXES;

/// Whether `path` names a plugin archive, ignoring case
pub fn is_plugin_archive(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| {
            PLUGIN_ARCHIVE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
}

/// Every plugin archive below `dir`, sorted by path
///
/// Directory symlinks are not followed; symlinks to regular files are. A
/// `dir` that is itself an archive file yields just that file. An empty or
/// missing path yields nothing, and so does any error during the walk: a
/// partially scanned directory is never returned.
pub fn find_plugin_archives(dir: &Path) -> Vec<PathBuf> {
    if dir.as_os_str().is_empty() {
        debug!("No plugin directory configured");
        return Vec::new();
    }
    if !dir.exists() {
        debug!(dir = %dir.display(), "Plugin directory does not exist");
        return Vec::new();
    }

    let entries: Result<Vec<DirEntry>, walkdir::Error> =
        WalkDir::new(dir).follow_links(false).into_iter().collect();
    let entries = match entries {
        Ok(entries) => entries,
        Err(error) => {
            warn!(dir = %dir.display(), %error, "Failed to scan plugin directory");
            return Vec::new();
        }
    };

    let mut archives: Vec<PathBuf> = entries
        .into_iter()
        .filter(is_regular_file)
        .map(DirEntry::into_path)
        .filter(|path| is_plugin_archive(path))
        .collect();
    archives.sort();

    debug!(dir = %dir.display(), count = archives.len(), "Found plugin archives");
    archives
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
