//! Selection Pipeline Tests
//!
//! Each test builds its own registry of `Greeter` providers and runs the
//! pipeline without link-time providers unless stated otherwise.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dsi_application::ports::registry::{
    Availability, InstanceProbe, LoadingContext, ProbeError, ProviderEntry, ProviderError,
    ProviderRegistry, StaticProbe,
};
use dsi_domain::value_objects::{OperatingSystem, Priority};

use crate::fixtures::{Greeter, Named, greeter};

fn context_with(entries: Vec<ProviderEntry<dyn Greeter>>) -> LoadingContext {
    let mut registry = ProviderRegistry::new();
    for entry in entries {
        registry.register(entry).unwrap();
    }
    LoadingContext::new()
        .with_registry(Arc::new(registry))
        .without_builtin_providers()
}

fn names(context: &LoadingContext) -> Vec<String> {
    context
        .select_all::<dyn Greeter>()
        .iter()
        .map(|g| g.name().to_string())
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_select_all_orders_by_descending_priority() {
    let context = context_with(vec![
        greeter("a", 5, || Ok(Arc::new(Named("a")))),
        greeter("b", -10, || Ok(Arc::new(Named("b")))),
        greeter("c", 5, || Ok(Arc::new(Named("c")))),
        greeter("d", i32::MIN, || Ok(Arc::new(Named("d")))),
    ]);

    let loaded = context.load_all::<dyn Greeter>();
    let priorities: Vec<i32> = loaded.iter().map(|p| p.priority.value()).collect();

    assert_eq!(priorities, vec![5, 5, -10, i32::MIN]);
    assert_eq!(loaded[2].name, "b");
    assert_eq!(loaded[3].name, "d");
    assert_eq!(loaded[3].priority, Priority::FALLBACK);
}

#[test]
fn test_select_best_returns_highest_priority() {
    let context = context_with(vec![
        greeter("low", 1, || Ok(Arc::new(Named("low")))),
        greeter("high", 100, || Ok(Arc::new(Named("high")))),
    ]);

    let best = context.select_best::<dyn Greeter>().unwrap();

    assert_eq!(best.name(), "high");
}

#[test]
fn test_select_best_without_candidates_is_none() {
    let context = context_with(vec![]);
    assert!(context.select_best::<dyn Greeter>().is_none());
    assert!(context.select_all::<dyn Greeter>().is_empty());
}

// ============================================================================
// Static availability
// ============================================================================

#[test]
fn test_failing_static_probe_prevents_construction() {
    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);
    static UNAVAILABLE: [StaticProbe; 1] = [|| Ok(false)];

    let context = context_with(vec![ProviderEntry {
        availability: Availability::before(&UNAVAILABLE),
        ..greeter("gated", 0, || {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Named("gated")))
        })
    }]);

    assert!(context.select_all::<dyn Greeter>().is_empty());
    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 0);
}

#[test]
fn test_all_static_probes_must_pass() {
    static MIXED: [StaticProbe; 2] = [|| Ok(true), || Ok(false)];
    static PASSING: [StaticProbe; 2] = [|| Ok(true), || Ok(true)];

    let context = context_with(vec![
        ProviderEntry {
            availability: Availability::before(&MIXED),
            ..greeter("mixed", 0, || Ok(Arc::new(Named("mixed"))))
        },
        ProviderEntry {
            availability: Availability::before(&PASSING),
            ..greeter("passing", 0, || Ok(Arc::new(Named("passing"))))
        },
    ]);

    assert_eq!(names(&context), vec!["passing"]);
}

#[test]
fn test_erroring_and_panicking_probes_exclude_only_their_provider() {
    static FAILED: [StaticProbe; 1] = [|| Err(ProbeError::failed("daemon not running"))];
    static MISCONFIGURED: [StaticProbe; 1] = [|| Err(ProbeError::misconfigured("denied"))];
    static PANICKING: [StaticProbe; 1] = [|| panic!("probe exploded")];

    let context = context_with(vec![
        ProviderEntry {
            availability: Availability::before(&FAILED),
            ..greeter("failed", 3, || Ok(Arc::new(Named("failed"))))
        },
        ProviderEntry {
            availability: Availability::before(&MISCONFIGURED),
            ..greeter("misconfigured", 2, || Ok(Arc::new(Named("misconfigured"))))
        },
        ProviderEntry {
            availability: Availability::before(&PANICKING),
            ..greeter("panicking", 1, || Ok(Arc::new(Named("panicking"))))
        },
        greeter("healthy", 0, || Ok(Arc::new(Named("healthy")))),
    ]);

    assert_eq!(names(&context), vec!["healthy"]);
}

// ============================================================================
// Construction and instance availability
// ============================================================================

#[test]
fn test_failing_instance_probe_excludes_constructed_provider() {
    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);
    static NOT_SHY: [InstanceProbe<dyn Greeter>; 1] = [|g| Ok(g.name() != "shy")];

    let context = context_with(vec![
        ProviderEntry {
            availability: Availability::after(&NOT_SHY),
            ..greeter("shy", 10, || {
                CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Named("shy")))
            })
        },
        ProviderEntry {
            availability: Availability::after(&NOT_SHY),
            ..greeter("bold", 0, || Ok(Arc::new(Named("bold"))))
        },
    ]);

    assert_eq!(names(&context), vec!["bold"]);
    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failing_constructor_does_not_block_others() {
    let context = context_with(vec![
        greeter("broken", 10, || Err(ProviderError::configuration("no backend"))),
        greeter("panicking", 5, || panic!("constructor exploded")),
        greeter("working", 0, || Ok(Arc::new(Named("working")))),
    ]);

    assert_eq!(names(&context), vec!["working"]);
    assert_eq!(
        context.select_best::<dyn Greeter>().map(|g| g.name().to_string()),
        Some("working".to_string())
    );
}

#[test]
fn test_unchecked_provider_always_passes() {
    let context = context_with(vec![greeter("plain", 0, || Ok(Arc::new(Named("plain"))))]);
    assert_eq!(names(&context), vec!["plain"]);
}

#[test]
fn test_each_request_constructs_new_instances() {
    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    let context = context_with(vec![greeter("counted", 0, || {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Named("counted")))
    })]);

    let first = context.select_best::<dyn Greeter>().unwrap();
    let second = context.select_best::<dyn Greeter>().unwrap();

    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 2);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_select_best_still_constructs_lower_candidates() {
    static LOWER_CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    let context = context_with(vec![
        greeter("top", 10, || Ok(Arc::new(Named("top")))),
        greeter("lower", 0, || {
            LOWER_CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Named("lower")))
        }),
    ]);

    assert_eq!(context.select_best::<dyn Greeter>().unwrap().name(), "top");
    assert_eq!(LOWER_CONSTRUCTED.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Platform eligibility
// ============================================================================

#[test]
fn test_platform_restriction_excludes_other_systems() {
    let linux_only = ProviderEntry {
        platforms: &[OperatingSystem::Linux],
        ..greeter("linux-only", 10, || Ok(Arc::new(Named("linux-only"))))
    };
    let everywhere = greeter("everywhere", 0, || Ok(Arc::new(Named("everywhere"))));

    let on_windows = context_with(vec![linux_only, everywhere])
        .with_operating_system(OperatingSystem::Windows);
    let on_linux = context_with(vec![linux_only, everywhere])
        .with_operating_system(OperatingSystem::Linux);

    assert_eq!(names(&on_windows), vec!["everywhere"]);
    assert_eq!(names(&on_linux), vec!["linux-only", "everywhere"]);
}

#[test]
fn test_unknown_system_only_gets_unrestricted_providers() {
    let restricted = ProviderEntry {
        platforms: &[
            OperatingSystem::Linux,
            OperatingSystem::Mac,
            OperatingSystem::Windows,
        ],
        ..greeter("restricted", 10, || Ok(Arc::new(Named("restricted"))))
    };
    let unrestricted = greeter("unrestricted", 0, || Ok(Arc::new(Named("unrestricted"))));

    let context = context_with(vec![restricted, unrestricted])
        .with_operating_system(OperatingSystem::Unknown);

    assert_eq!(names(&context), vec!["unrestricted"]);
}

#[test]
fn test_ineligible_provider_is_never_constructed() {
    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    let context = context_with(vec![ProviderEntry {
        platforms: &[OperatingSystem::Mac],
        ..greeter("mac-only", 0, || {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Named("mac-only")))
        })
    }])
    .with_operating_system(OperatingSystem::Linux);

    assert!(context.select_all::<dyn Greeter>().is_empty());
    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[derive(Clone, Default)]
struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_discovered_candidates_are_logged_before_filtering() {
    let windows_only = ProviderEntry {
        platforms: &[OperatingSystem::Windows],
        ..greeter("windows-only", 10, || Ok(Arc::new(Named("windows-only"))))
    };
    let everywhere = greeter("everywhere", 0, || Ok(Arc::new(Named("everywhere"))));
    let context = context_with(vec![windows_only, everywhere])
        .with_operating_system(OperatingSystem::Linux);

    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let selected = tracing::subscriber::with_default(subscriber, || names(&context));

    assert_eq!(selected, vec!["everywhere"]);
    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let discovered = output
        .lines()
        .find(|line| line.contains("Discovered providers"))
        .expect("discovery event");
    assert!(discovered.contains("windows-only"));
    assert!(discovered.contains("everywhere"));
}
