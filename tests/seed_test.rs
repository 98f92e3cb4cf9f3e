//! Tests for TOML seed file loading.

use std::io::Write as _;

use workitems::store::WorkItemStore;

fn write_seed(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write seed");
    file
}

#[test]
fn seed_loads_items_in_file_order() {
    let file = write_seed(
        r#"
        [[item]]
        title = "water the garden"

        [[item]]
        title = "sharpen shears"
        details = { urgency = "low" }
        "#,
    );

    let seeded = workitems::seed::load(file.path()).unwrap();
    assert_eq!(seeded.len(), 2);

    let mut store = WorkItemStore::new();
    for new in seeded {
        store.add(new);
    }

    assert_eq!(store.items()[0].title, "water the garden");
    assert_eq!(store.items()[1].title, "sharpen shears");
    assert_eq!(store.items()[1].details["urgency"], "low");
}

#[test]
fn empty_seed_file_yields_no_items() {
    let file = write_seed("");
    let seeded = workitems::seed::load(file.path()).unwrap();
    assert!(seeded.is_empty());
}

#[test]
fn missing_seed_file_errors_with_path() {
    let result = workitems::seed::load(std::path::Path::new("/nonexistent/seed.toml"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("/nonexistent/seed.toml"));
}

#[test]
fn malformed_seed_file_errors() {
    let file = write_seed("[[item]]\nnot-a-title = 3\n");
    assert!(workitems::seed::load(file.path()).is_err());
}
