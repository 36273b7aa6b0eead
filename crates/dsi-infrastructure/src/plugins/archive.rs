//! Zip-backed plugin bundles

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use dsi_application::ports::bundle::ResourceBundle;
use dsi_domain::error::{Error, Result};
use zip::ZipArchive;
use zip::result::ZipError;

/// One plugin archive
///
/// The entry list is read once when the bundle is opened. Reading a resource
/// reopens the archive, so an open bundle holds no file handle.
#[derive(Debug, Clone)]
pub struct ZipBundle {
    path: PathBuf,
    names: Vec<String>,
}

impl ZipBundle {
    /// Open the archive at `path` and read its entry list
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let archive = open_archive(&path)?;
        let names = archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(str::to_string)
            .collect();
        Ok(Self { path, names })
    }
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)
        .map_err(|e| Error::plugin_archive(path, "cannot open archive", e))?;
    ZipArchive::new(file).map_err(|e| Error::plugin_archive(path, "not a valid zip archive", e))
}

impl ResourceBundle for ZipBundle {
    fn location(&self) -> &Path {
        &self.path
    }

    fn resource_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn read_resource(&self, name: &str) -> Result<Option<Vec<u8>>> {
        if !self.contains(name) {
            return Ok(None);
        }
        let mut archive = open_archive(&self.path)?;
        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(Error::plugin_archive(
                    &self.path,
                    format!("cannot read entry '{name}'"),
                    e,
                ));
            }
        };
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).map_err(|e| {
            Error::plugin_archive(&self.path, format!("cannot read entry '{name}'"), e)
        })?;
        Ok(Some(bytes))
    }
}
