//! Loading Context Tests

use std::sync::Arc;

use dsi_application::ports::registry::{
    Availability, LoadingContext, ProviderEntry, ProviderError, ProviderFactory, ProviderRegistry,
    StaticProbe,
};
use dsi_domain::value_objects::{OperatingSystem, Priority};

use crate::fixtures::{FakeService, Greeter, MemoryBundle, Named, Service, greeter};

fn fast() -> Result<Arc<dyn Service>, ProviderError> {
    Ok(Arc::new(FakeService {
        name: "fast",
        supported: true,
    }))
}

fn offline() -> Result<Arc<dyn Service>, ProviderError> {
    Ok(Arc::new(FakeService {
        name: "offline",
        supported: false,
    }))
}

fn slow() -> Result<Arc<dyn Service>, ProviderError> {
    Ok(Arc::new(FakeService {
        name: "slow",
        supported: true,
    }))
}

fn service(
    name: &'static str,
    priority: i32,
    factory: ProviderFactory<dyn Service>,
) -> ProviderEntry<dyn Service> {
    ProviderEntry {
        name,
        description: "test service",
        priority: Priority::new(priority),
        platforms: &[],
        availability: Availability::Unchecked,
        factory,
    }
}

#[test]
fn test_builtin_providers_are_included_by_default() {
    let context = LoadingContext::new();
    let names: Vec<&str> = context.candidates::<dyn Greeter>().map(|e| e.name).collect();
    assert_eq!(names, vec!["linked"]);
}

#[test]
fn test_builtin_providers_come_before_registered_candidates() {
    let registry = ProviderRegistry::new()
        .with(greeter("explicit", 0, || Ok(Arc::new(Named("explicit")))))
        .unwrap();
    let context = LoadingContext::new().with_registry(Arc::new(registry));

    let names: Vec<&str> = context.candidates::<dyn Greeter>().map(|e| e.name).collect();
    assert_eq!(names, vec!["linked", "explicit"]);

    let selected: Vec<String> = context
        .select_all::<dyn Greeter>()
        .iter()
        .map(|g| g.name().to_string())
        .collect();
    assert_eq!(selected, vec!["explicit", "linked"]);
}

#[test]
fn test_without_builtin_providers_hides_linked_entries() {
    let context = LoadingContext::new().without_builtin_providers();
    assert_eq!(context.candidates::<dyn Greeter>().count(), 0);
    assert!(context.select_best::<dyn Greeter>().is_none());
}

#[test]
fn test_select_supported_filters_instances() {
    let registry = ProviderRegistry::new()
        .with(service("fast", 10, fast))
        .unwrap()
        .with(service("offline", 5, offline))
        .unwrap()
        .with(service("slow", 1, slow))
        .unwrap();
    let context = LoadingContext::new().with_registry(Arc::new(registry));

    let all: Vec<String> = context
        .select_all::<dyn Service>()
        .iter()
        .map(|s| s.display_name().to_string())
        .collect();
    let supported: Vec<String> = context
        .select_supported::<dyn Service>()
        .iter()
        .map(|s| s.display_name().to_string())
        .collect();

    assert_eq!(all, vec!["fast", "offline", "slow"]);
    assert_eq!(supported, vec!["fast", "slow"]);
}

#[test]
fn test_describe_does_not_construct() {
    static NEVER: [StaticProbe; 1] = [|| panic!("describe must not probe")];

    let registry = ProviderRegistry::new()
        .with(ProviderEntry {
            platforms: &[OperatingSystem::Windows],
            availability: Availability::before(&NEVER),
            ..greeter("windows", 7, || panic!("describe must not construct"))
        })
        .unwrap();
    let context = LoadingContext::new()
        .with_registry(Arc::new(registry))
        .with_operating_system(OperatingSystem::Linux);

    let described = context.describe::<dyn Greeter>();

    assert_eq!(described.len(), 2);
    assert_eq!(described[0].name, "linked");
    assert!(described[0].builtin);
    assert!(described[0].platform_eligible);
    assert!(!described[0].availability_checked);

    assert_eq!(described[1].name, "windows");
    assert!(!described[1].builtin);
    assert!(!described[1].platform_eligible);
    assert!(described[1].availability_checked);
    assert_eq!(described[1].priority, Priority::new(7));
}

#[test]
fn test_context_defaults_to_current_system() {
    let context = LoadingContext::default();
    assert_eq!(context.operating_system(), OperatingSystem::current());
    assert!(context.bundles().is_empty());
    assert!(context.registry().is_empty());
}

// ============================================================================
// Resources
// ============================================================================

#[test]
fn test_resource_comes_from_first_bundle_that_has_it() {
    let context = LoadingContext::new().with_bundles(vec![
        MemoryBundle::new("/plugins/a.jar", vec![("only-a.txt", b"a")]),
        MemoryBundle::new(
            "/plugins/b.jar",
            vec![("only-a.txt", b"shadowed"), ("only-b.txt", b"b")],
        ),
    ]);

    assert_eq!(context.resource("only-a.txt"), Some(b"a".to_vec()));
    assert_eq!(context.resource("only-b.txt"), Some(b"b".to_vec()));
    assert_eq!(context.resource("missing.txt"), None);
    assert_eq!(
        context.resources("only-a.txt"),
        vec![b"a".to_vec(), b"shadowed".to_vec()]
    );
}

#[test]
fn test_unreadable_bundle_is_skipped() {
    let context = LoadingContext::new().with_bundles(vec![
        MemoryBundle::broken("/plugins/broken.jar"),
        MemoryBundle::new("/plugins/ok.jar", vec![("x.txt", b"x")]),
    ]);

    assert_eq!(context.resource("x.txt"), Some(b"x".to_vec()));
    assert_eq!(context.bundles()[1].resource_names(), vec!["x.txt"]);
    assert!(context.bundles()[1].contains("x.txt"));
}

#[test]
fn test_context_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LoadingContext>();

    let context = Arc::new(LoadingContext::new());
    let worker = {
        let context = Arc::clone(&context);
        std::thread::spawn(move || context.candidates::<dyn Greeter>().count())
    };
    assert_eq!(worker.join().unwrap(), 1);
}
