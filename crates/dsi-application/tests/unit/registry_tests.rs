//! Provider Registry Tests

use std::sync::Arc;

use dsi_application::ports::registry::{
    Availability, Capability, ProviderEntry, ProviderRegistry, RegistryError,
};
use dsi_domain::value_objects::Priority;

use crate::fixtures::{FakeService, Greeter, Named, Service, greeter};

#[test]
fn test_new_registry_is_empty() {
    let registry = ProviderRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.entries::<dyn Greeter>().is_empty());
}

#[test]
fn test_entries_keep_registration_order() {
    let registry = ProviderRegistry::new()
        .with(greeter("first", 0, || Ok(Arc::new(Named("first")))))
        .unwrap()
        .with(greeter("second", 9, || Ok(Arc::new(Named("second")))))
        .unwrap();

    let names: Vec<&str> = registry
        .entries::<dyn Greeter>()
        .iter()
        .map(|e| e.name)
        .collect();

    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(registry.capability_count(), 1);
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(greeter("twin", 0, || Ok(Arc::new(Named("twin")))))
        .unwrap();

    let err = registry
        .register(greeter("twin", 5, || Ok(Arc::new(Named("other")))))
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::DuplicateProvider {
            capability: "greeter",
            provider: "twin",
        }
    );
    assert_eq!(registry.entries::<dyn Greeter>().len(), 1);
}

#[test]
fn test_name_of_link_time_provider_is_taken() {
    let mut registry = ProviderRegistry::new();
    let err = registry
        .register(greeter("linked", 0, || Ok(Arc::new(Named("impostor")))))
        .unwrap_err();

    assert!(err.to_string().contains("'linked'"));
    assert!(registry.is_empty());
}

#[test]
fn test_same_name_for_different_capabilities() {
    let registry = ProviderRegistry::new()
        .with(greeter("shared", 0, || Ok(Arc::new(Named("shared")))))
        .unwrap()
        .with::<dyn Service>(ProviderEntry {
            name: "shared",
            description: "service with a greeter's name",
            priority: Priority::DEFAULT,
            platforms: &[],
            availability: Availability::Unchecked,
            factory: || {
                Ok(Arc::new(FakeService {
                    name: "shared",
                    supported: true,
                }))
            },
        })
        .unwrap();

    assert_eq!(registry.capability_count(), 2);
    assert_eq!(<dyn Service as Capability>::NAME, "service");
}
