//! Candidate selection pipeline
//!
//! ```text
//! candidates ──► platform filter ──► static probes ──► sort by priority (desc)
//!                                                             │
//!        result ◄── instance probes ◄── construct (no-arg) ◄──┘
//! ```
//!
//! Each stage only sees the survivors of the previous one. A candidate that
//! fails a stage is dropped and never retried; nothing is cached between
//! calls.

use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

use dsi_domain::value_objects::{OperatingSystem, Priority};
use tracing::{debug, warn};

use super::capability::Capability;
use super::entry::ProviderEntry;
use super::probe::{guarded, passes_instance_probes, passes_static_probes};

/// A constructed provider together with the entry it came from
pub struct LoadedProvider<C: ?Sized + 'static> {
    /// Name of the provider entry
    pub name: &'static str,
    /// Priority of the provider entry
    pub priority: Priority,
    /// The instance handed to the caller
    pub instance: Arc<C>,
}

impl<C: ?Sized + 'static> Clone for LoadedProvider<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            priority: self.priority,
            instance: Arc::clone(&self.instance),
        }
    }
}

impl<C: ?Sized + 'static> fmt::Debug for LoadedProvider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedProvider")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Whether `entry` may run on `os`
pub fn is_platform_eligible<C: Capability + ?Sized>(
    entry: &ProviderEntry<C>,
    os: OperatingSystem,
) -> bool {
    let eligible = entry.supports_platform(os);
    if !eligible {
        debug!(
            capability = C::NAME,
            provider = entry.name,
            os = %os,
            platforms = ?entry.platforms,
            "Provider not eligible on this platform"
        );
    }
    eligible
}

/// Whether `entry` passes its pre-construction probes
///
/// Providers without availability checks always pass.
pub fn passes_static_availability<C: Capability + ?Sized>(entry: &ProviderEntry<C>) -> bool {
    passes_static_probes(C::NAME, entry.name, entry.availability.static_probes())
}

/// Whether a constructed `instance` of `entry` passes its post-construction probes
pub fn passes_instance_availability<C: Capability + ?Sized>(
    entry: &ProviderEntry<C>,
    instance: &C,
) -> bool {
    passes_instance_probes(
        C::NAME,
        entry.name,
        entry.availability.instance_probes(),
        instance,
    )
}

/// Construct `entry`, logging and swallowing construction failures
pub fn instantiate<C: Capability + ?Sized>(entry: &ProviderEntry<C>) -> Option<Arc<C>> {
    match guarded(entry.factory) {
        Ok(Ok(instance)) => Some(instance),
        Ok(Err(error)) => {
            warn!(
                capability = C::NAME,
                provider = entry.name,
                %error,
                "Provider construction failed, skipping"
            );
            None
        }
        Err(panic) => {
            warn!(
                capability = C::NAME,
                provider = entry.name,
                %panic,
                "Provider construction panicked, skipping"
            );
            None
        }
    }
}

/// Run the full pipeline over `candidates`
pub(crate) fn select<'a, C, I>(os: OperatingSystem, candidates: I) -> Vec<LoadedProvider<C>>
where
    C: Capability + ?Sized,
    I: IntoIterator<Item = &'a ProviderEntry<C>>,
{
    let candidates: Vec<&ProviderEntry<C>> = candidates.into_iter().collect();
    debug!(
        capability = C::NAME,
        os = %os,
        candidates = ?candidates.iter().map(|e| e.name).collect::<Vec<_>>(),
        "Discovered providers"
    );

    let mut eligible: Vec<&ProviderEntry<C>> = candidates
        .into_iter()
        .filter(|entry| is_platform_eligible(entry, os))
        .filter(|entry| passes_static_availability(entry))
        .collect();
    eligible.sort_by_key(|entry| Reverse(entry.priority));

    debug!(
        capability = C::NAME,
        candidates = ?eligible.iter().map(|e| e.name).collect::<Vec<_>>(),
        "Eligible providers"
    );

    let loaded: Vec<LoadedProvider<C>> = eligible
        .into_iter()
        .filter_map(|entry| {
            let instance = instantiate(entry)?;
            passes_instance_availability(entry, &instance).then(|| LoadedProvider {
                name: entry.name,
                priority: entry.priority,
                instance,
            })
        })
        .collect();

    debug!(
        capability = C::NAME,
        providers = ?loaded.iter().map(|p| p.name).collect::<Vec<_>>(),
        "Available providers"
    );
    loaded
}
