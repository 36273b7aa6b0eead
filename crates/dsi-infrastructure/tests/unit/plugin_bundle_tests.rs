//! Plugin Bundle Tests

use std::fs;
use std::sync::Arc;

use dsi_application::ports::bundle::ResourceBundle;
use dsi_application::ports::registry::ProviderRegistry;
use dsi_domain::error::Error;
use dsi_infrastructure::plugins::{PluginSources, ZipBundle};
use tempfile::TempDir;

use crate::test_utils::{two_plugin_dir, write_archive, write_binary_archive};

const BINARY_CONTENT: &[u8] = &[0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0xFF, b'\n', 0x80];

#[test]
fn test_bundle_lists_and_reads_entries() {
    let temp = TempDir::new().unwrap();
    let path = write_binary_archive(
        &temp.path().join("p.jar"),
        &[
            ("a.properties", b"a = 1".as_slice()),
            ("META-INF/b.txt", BINARY_CONTENT),
        ],
    );

    let bundle = ZipBundle::open(&path).unwrap();

    assert_eq!(bundle.location(), path.as_path());
    assert!(bundle.contains("a.properties"));
    assert!(bundle.contains("META-INF/b.txt"));
    assert_eq!(
        bundle.read_resource("a.properties").unwrap(),
        Some(b"a = 1".to_vec())
    );
    assert_eq!(
        bundle.read_resource("META-INF/b.txt").unwrap(),
        Some(BINARY_CONTENT.to_vec())
    );
    assert_eq!(bundle.read_resource("missing").unwrap(), None);
}

#[test]
fn test_corrupt_archive_fails_to_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.jar");
    fs::write(&path, b"definitely not a zip").unwrap();

    let err = ZipBundle::open(&path).unwrap_err();

    assert!(matches!(err, Error::PluginArchive { .. }));
}

#[test]
fn test_sources_load_resources_from_every_archive() {
    let temp = TempDir::new().unwrap();
    two_plugin_dir(temp.path());

    let sources = PluginSources::from_dir(temp.path());
    let context = sources.loading_context(Arc::new(ProviderRegistry::new()));

    assert_eq!(sources.archives().len(), 2);
    assert_eq!(context.resource("foo.properties"), Some(b"foo = 42".to_vec()));
    assert_eq!(context.resource("bar.properties"), Some(b"bar = 23".to_vec()));
    assert_eq!(context.resource("baz.properties"), None);
}

#[test]
fn test_corrupt_archive_does_not_hide_others() {
    let temp = TempDir::new().unwrap();
    two_plugin_dir(temp.path());
    fs::write(temp.path().join("aaa-broken.jar"), b"garbage").unwrap();

    let sources = PluginSources::from_dir(temp.path());

    assert_eq!(sources.archives().len(), 3);
    assert_eq!(sources.bundles().len(), 2);
    let context = sources.loading_context(Arc::new(ProviderRegistry::new()));
    assert_eq!(context.resource("foo.properties"), Some(b"foo = 42".to_vec()));
}

#[test]
fn test_resources_come_in_archive_order() {
    let temp = TempDir::new().unwrap();
    write_archive(&temp.path().join("a.jar"), &[("shared.txt", "first")]);
    write_archive(&temp.path().join("b.jar"), &[("shared.txt", "second")]);

    let context = PluginSources::from_dir(temp.path())
        .loading_context(Arc::new(ProviderRegistry::new()));

    assert_eq!(context.resource("shared.txt"), Some(b"first".to_vec()));
    assert_eq!(
        context.resources("shared.txt"),
        vec![b"first".to_vec(), b"second".to_vec()]
    );
}

#[test]
fn test_empty_sources_have_no_bundles() {
    let sources = PluginSources::empty();
    assert!(sources.dir().is_none());
    assert!(sources.bundles().is_empty());
}
