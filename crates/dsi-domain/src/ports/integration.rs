//! Common base of integrations that can report whether they work here

/// An integration that knows whether it is usable in the current environment
///
/// Callers that select every candidate of a capability usually keep only the
/// instances whose [`is_supported`](IntegrationService::is_supported) is true.
pub trait IntegrationService: Send + Sync {
    /// Human readable name of this implementation
    fn display_name(&self) -> &str;

    /// Whether this implementation can be used right now
    ///
    /// Must return quickly and must not block.
    fn is_supported(&self) -> bool;
}
