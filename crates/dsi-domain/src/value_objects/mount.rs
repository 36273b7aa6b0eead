//! Mount capabilities and mountpoints

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Optional features a mount service may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountCapability {
    /// The builder accepts a loopback host name
    LoopbackHostName,
    /// The builder accepts a loopback port
    LoopbackPort,
    /// The builder accepts raw mount flags
    MountFlags,
    /// Can mount onto an existing empty directory
    MountToExistingDir,
    /// Can create the mountpoint inside an existing parent directory
    MountWithinExistingParent,
    /// Can mount as a Windows drive letter
    MountAsDriveLetter,
    /// Lets the system choose the mountpoint
    MountToSystemChosenPath,
    /// Supports read-only mounts
    ReadOnly,
    /// Supports forced unmounts
    UnmountForced,
    /// The builder accepts a volume identifier
    VolumeId,
    /// The builder accepts a volume name
    VolumeName,
}

/// Where a mounted file system can be accessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mountpoint {
    /// A local directory or drive
    Path(PathBuf),
    /// A URI, e.g. a WebDAV location
    Uri(Url),
}

impl Mountpoint {
    /// Mountpoint for a local path
    pub fn for_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::Path(path.into())
    }

    /// Mountpoint for a URI
    pub fn for_uri(uri: Url) -> Self {
        Self::Uri(uri)
    }

    /// URI of this mountpoint; paths become `file://` URLs
    ///
    /// Relative paths are resolved against the working directory first.
    pub fn uri(&self) -> Result<Url> {
        match self {
            Self::Uri(uri) => Ok(uri.clone()),
            Self::Path(path) => {
                let absolute = std::path::absolute(path).map_err(|e| {
                    Error::io_with_source(format!("cannot resolve {}", path.display()), e)
                })?;
                Url::from_file_path(&absolute).map_err(|()| {
                    Error::invalid_argument(format!(
                        "{} cannot be expressed as a file URL",
                        absolute.display()
                    ))
                })
            }
        }
    }

    /// Local path, if this is a path mountpoint
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Uri(_) => None,
        }
    }
}
