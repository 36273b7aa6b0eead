//! Error handling types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the context-bearing variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for desktop service integrations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The integration does not implement the requested optional operation
    #[error("Unsupported operation: {operation}")]
    Unsupported {
        /// Name of the operation
        operation: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A plugin archive could not be opened or read
    #[error("Plugin archive error at {}: {message}", path.display())]
    PluginArchive {
        /// Location of the archive
        path: PathBuf,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Enabling or disabling start-on-login failed
    #[error("Failed to toggle auto start: {message}")]
    AutoStart {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Keychain access failed
    #[error("Keychain access error: {message}")]
    Keychain {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Mounting a file system failed
    #[error("Mount failed: {message}")]
    Mount {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Unmounting a file system failed
    #[error("Unmount failed: {message}")]
    Unmount {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Revealing a path in the file manager failed
    #[error("Reveal failed: {message}")]
    Reveal {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The path to reveal does not exist
    #[error("No such file: {}", path.display())]
    NoSuchFile {
        /// The missing path
        path: PathBuf,
    },

    /// Adding or removing a quick-access entry failed
    #[error("Quick access error: {message}")]
    QuickAccess {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Tray menu operation failed
    #[error("Tray menu error: {message}")]
    TrayMenu {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// UI appearance listener registration failed
    #[error("UI appearance error: {message}")]
    UiAppearance {
        /// Description of the failure
        message: String,
    },

    /// Auto-update operation failed
    #[error("Auto update error: {message}")]
    AutoUpdate {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Second factor device error
    #[error("Second factor error: {message}")]
    SecondFactor {
        /// Description of the failure
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported<S: Into<String>>(operation: S) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Create a no-such-file error
    pub fn no_such_file<P: Into<PathBuf>>(path: P) -> Self {
        Self::NoSuchFile { path: path.into() }
    }

    /// Whether this error reports an optional operation the integration lacks
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a plugin archive error with source
    pub fn plugin_archive<P, S, E>(path: P, message: S, source: E) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PluginArchive {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Integration error creation methods
impl Error {
    /// Create an auto start error
    pub fn auto_start<S: Into<String>>(message: S) -> Self {
        Self::AutoStart {
            message: message.into(),
            source: None,
        }
    }

    /// Create a keychain error
    pub fn keychain<S: Into<String>>(message: S) -> Self {
        Self::Keychain {
            message: message.into(),
            source: None,
        }
    }

    /// Create a keychain error with source
    pub fn keychain_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Keychain {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a mount error
    pub fn mount<S: Into<String>>(message: S) -> Self {
        Self::Mount {
            message: message.into(),
            source: None,
        }
    }

    /// Create an unmount error
    pub fn unmount<S: Into<String>>(message: S) -> Self {
        Self::Unmount {
            message: message.into(),
            source: None,
        }
    }

    /// Create a reveal error
    pub fn reveal<S: Into<String>>(message: S) -> Self {
        Self::Reveal {
            message: message.into(),
            source: None,
        }
    }

    /// Create a quick access error
    pub fn quick_access<S: Into<String>>(message: S) -> Self {
        Self::QuickAccess {
            message: message.into(),
            source: None,
        }
    }

    /// Create a tray menu error
    pub fn tray_menu<S: Into<String>>(message: S) -> Self {
        Self::TrayMenu {
            message: message.into(),
            source: None,
        }
    }

    /// Create a UI appearance error
    pub fn ui_appearance<S: Into<String>>(message: S) -> Self {
        Self::UiAppearance {
            message: message.into(),
        }
    }

    /// Create an auto update error
    pub fn auto_update<S: Into<String>>(message: S) -> Self {
        Self::AutoUpdate {
            message: message.into(),
            source: None,
        }
    }

    /// Create a second factor error
    pub fn second_factor<S: Into<String>>(message: S) -> Self {
        Self::SecondFactor {
            message: message.into(),
        }
    }
}
