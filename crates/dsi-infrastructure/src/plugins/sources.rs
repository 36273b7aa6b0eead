//! Plugin sources of one host

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dsi_application::ports::bundle::ResourceBundle;
use dsi_application::ports::registry::{LoadingContext, ProviderRegistry};
use tracing::{info, warn};

use super::archive::ZipBundle;
use super::scan::find_plugin_archives;

/// Archives found in the plugin directory and the bundles opened from them
#[derive(Clone, Default)]
pub struct PluginSources {
    dir: Option<PathBuf>,
    archives: Vec<PathBuf>,
    bundles: Vec<Arc<dyn ResourceBundle>>,
}

impl PluginSources {
    /// No plugins
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan `dir` and open every archive found
    ///
    /// Archives that cannot be opened are logged and left out of the bundles;
    /// they stay listed in [`archives`](Self::archives).
    pub fn from_dir(dir: &Path) -> Self {
        let archives = find_plugin_archives(dir);
        let bundles: Vec<Arc<dyn ResourceBundle>> = archives
            .iter()
            .filter_map(|path| match ZipBundle::open(path) {
                Ok(bundle) => Some(Arc::new(bundle) as Arc<dyn ResourceBundle>),
                Err(error) => {
                    warn!(archive = %path.display(), %error, "Skipping plugin archive");
                    None
                }
            })
            .collect();

        if !archives.is_empty() {
            info!(
                dir = %dir.display(),
                archives = archives.len(),
                bundles = bundles.len(),
                "Loaded plugin archives"
            );
        }

        Self {
            dir: Some(dir.to_path_buf()),
            archives,
            bundles,
        }
    }

    /// The scanned directory, if any
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Every archive path found, sorted
    pub fn archives(&self) -> &[PathBuf] {
        &self.archives
    }

    /// Bundles opened from the archives
    pub fn bundles(&self) -> &[Arc<dyn ResourceBundle>] {
        &self.bundles
    }

    /// Loading context over these bundles, the host's built-in providers and
    /// the providers in `registry`
    pub fn loading_context(&self, registry: Arc<ProviderRegistry>) -> LoadingContext {
        LoadingContext::new()
            .with_registry(registry)
            .with_bundles(self.bundles.clone())
    }
}

impl std::fmt::Debug for PluginSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginSources")
            .field("dir", &self.dir)
            .field("archives", &self.archives)
            .field("bundles", &self.bundles.len())
            .finish()
    }
}
