//! File system mounting
//!
//! A [`MountService`] hands out a [`MountBuilder`] for a file system root. The
//! builder's setters correspond to [`MountCapability`] values; a service only
//! needs to implement the setters for the capabilities it advertises.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ports::integration::IntegrationService;
use crate::value_objects::{MountCapability, Mountpoint};

/// A mechanism for mounting a file system (FUSE, WebDAV, ...)
pub trait MountService: IntegrationService {
    /// Features this service supports
    fn supported_features(&self) -> BTreeSet<MountCapability>;

    /// Whether `feature` is among [`supported_features`](MountService::supported_features)
    fn supports_feature(&self, feature: MountCapability) -> bool {
        self.supported_features().contains(&feature)
    }

    /// Default mount flags for a volume named `mount_name`
    ///
    /// Only meaningful with [`MountCapability::MountFlags`].
    fn default_mount_flags(&self, _mount_name: &str) -> Result<String> {
        Err(Error::unsupported("default mount flags"))
    }

    /// Default loopback port
    ///
    /// Only meaningful with [`MountCapability::LoopbackPort`].
    fn default_loopback_port(&self) -> Result<u16> {
        Err(Error::unsupported("default loopback port"))
    }

    /// Start configuring a mount of the file system rooted at `root`
    fn for_file_system(&self, root: &Path) -> Box<dyn MountBuilder>;
}

/// Collects mount options before mounting
pub trait MountBuilder: Send {
    /// Set the file system name shown by the OS
    fn set_file_system_name(&mut self, _name: &str) -> Result<()> {
        Err(Error::unsupported("file system name"))
    }

    /// Set the loopback host name
    fn set_loopback_host_name(&mut self, _host_name: &str) -> Result<()> {
        Err(Error::unsupported("loopback host name"))
    }

    /// Set the loopback port
    fn set_loopback_port(&mut self, _port: u16) -> Result<()> {
        Err(Error::unsupported("loopback port"))
    }

    /// Set the mountpoint
    fn set_mountpoint(&mut self, _mountpoint: &Path) -> Result<()> {
        Err(Error::unsupported("mountpoint"))
    }

    /// Set raw mount flags
    fn set_mount_flags(&mut self, _flags: &str) -> Result<()> {
        Err(Error::unsupported("mount flags"))
    }

    /// Mount read-only
    fn set_read_only(&mut self, _read_only: bool) -> Result<()> {
        Err(Error::unsupported("read-only mounts"))
    }

    /// Set the volume identifier
    fn set_volume_id(&mut self, _volume_id: &str) -> Result<()> {
        Err(Error::unsupported("volume id"))
    }

    /// Set the volume name
    fn set_volume_name(&mut self, _volume_name: &str) -> Result<()> {
        Err(Error::unsupported("volume name"))
    }

    /// Mount with the collected options
    fn mount(self: Box<Self>) -> Result<Box<dyn Mount>>;
}

/// A mounted file system
pub trait Mount: Send {
    /// Where the file system is accessible
    fn mountpoint(&self) -> Mountpoint;

    /// Unmount gracefully
    fn unmount(self: Box<Self>) -> Result<()>;

    /// Unmount even if the file system is busy
    ///
    /// Only meaningful with [`MountCapability::UnmountForced`].
    fn unmount_forced(self: Box<Self>) -> Result<()> {
        Err(Error::unsupported("forced unmount"))
    }
}
