//! Authentication devices used as a second factor

/// Result of an authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondFactorOutcome {
    /// The user authenticated
    Authenticated,
    /// The user declined or the device rejected the attempt
    Rejected,
    /// The device reported an error
    Failed(String),
}

/// Callback receiving the outcome of [`SecondFactorProvider::authenticate`]
pub type SecondFactorCallback = Box<dyn FnOnce(SecondFactorOutcome) + Send>;

/// Requests confirmation from an authentication device
pub trait SecondFactorProvider: Send + Sync {
    /// Whether a device is present and ready
    fn is_device_supported(&self) -> bool;

    /// Ask the device to authenticate; `message` is displayed if the device can
    fn authenticate(&self, message: &str, callback: SecondFactorCallback);
}
