//! "Reveal in file manager"

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ports::integration::IntegrationService;

/// Opens the system file manager at a given location
pub trait RevealPathsService: IntegrationService {
    /// Show `path` in the file manager, selecting it if it is a file
    ///
    /// Fails with [`Error::NoSuchFile`] if `path` does not exist.
    fn reveal(&self, path: &Path) -> Result<()>;

    /// Open `directory` and select `children` in it
    fn reveal_children(&self, _directory: &Path, _children: &[PathBuf]) -> Result<()> {
        Err(Error::unsupported("revealing multiple children"))
    }
}
