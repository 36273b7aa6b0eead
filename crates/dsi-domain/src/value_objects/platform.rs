//! Operating system detection
//!
//! Providers may restrict themselves to a set of operating systems. The
//! running system is classified by a case-insensitive substring match on its
//! name, checked in the order linux, mac, windows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating systems a provider can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// Any Linux distribution
    Linux,
    /// macOS
    Mac,
    /// Microsoft Windows
    Windows,
    /// Anything else; never satisfies a platform restriction
    Unknown,
}

impl OperatingSystem {
    /// Classify an OS name such as `"Linux"`, `"macos"` or `"Windows 11"`
    pub fn from_os_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("linux") {
            Self::Linux
        } else if name.contains("mac") {
            Self::Mac
        } else if name.contains("windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// The operating system this process runs on
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Whether a provider declaring `platforms` may run on `self`
    ///
    /// An empty restriction admits every system, including `Unknown`.
    pub fn satisfies(self, platforms: &[OperatingSystem]) -> bool {
        platforms.is_empty()
            || (self != Self::Unknown && platforms.iter().any(|os| *os == self))
    }

    /// Lowercase name used in logs and configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
