//! Availability probes
//!
//! Probes and factories are supplied by providers and are not trusted: every
//! call goes through [`guarded`], which turns a panic into an error so one
//! broken provider cannot abort discovery of the others.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{error, warn};

use super::entry::{InstanceProbe, StaticProbe};

/// Result of one probe call; `Ok(false)` and any error exclude the provider
pub type ProbeOutcome = Result<bool, ProbeError>;

/// Why a probe could not produce an answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The check itself failed
    #[error("availability check failed: {0}")]
    Failed(String),

    /// The provider's checks cannot run from this context (e.g. missing
    /// permissions or an unreachable backend); reported as an error
    #[error("availability check misconfigured: {0}")]
    Misconfigured(String),
}

impl ProbeError {
    /// Create a failed probe error
    pub fn failed<S: Into<String>>(cause: S) -> Self {
        Self::Failed(cause.into())
    }

    /// Create a misconfigured probe error
    pub fn misconfigured<S: Into<String>>(cause: S) -> Self {
        Self::Misconfigured(cause.into())
    }
}

/// Run provider code, converting a panic into its message
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Evaluate one probe result, logging failures against `provider`
fn accept(capability: &str, provider: &str, outcome: Result<ProbeOutcome, String>) -> bool {
    match outcome {
        Ok(Ok(available)) => available,
        Ok(Err(ProbeError::Misconfigured(cause))) => {
            error!(
                capability,
                provider, %cause, "Availability check is misconfigured, provider excluded"
            );
            false
        }
        Ok(Err(ProbeError::Failed(cause))) => {
            warn!(capability, provider, %cause, "Availability check failed");
            false
        }
        Err(panic) => {
            warn!(capability, provider, %panic, "Availability check panicked");
            false
        }
    }
}

/// Run every pre-construction probe; all must report `true`
pub(crate) fn passes_static_probes(
    capability: &str,
    provider: &str,
    probes: &[StaticProbe],
) -> bool {
    probes
        .iter()
        .all(|probe| accept(capability, provider, guarded(*probe)))
}

/// Run every post-construction probe against `instance`; all must report `true`
pub(crate) fn passes_instance_probes<C: ?Sized>(
    capability: &str,
    provider: &str,
    probes: &[InstanceProbe<C>],
    instance: &C,
) -> bool {
    probes
        .iter()
        .all(|probe| accept(capability, provider, guarded(|| probe(instance))))
}
