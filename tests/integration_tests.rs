use item_pipeline::{Application, ItemStore, PipelineError, Task, VERSION};

fn emitted(app: Application<Vec<u8>>) -> Vec<String> {
    String::from_utf8(app.into_sink())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_end_to_end_run_emits_one_line_per_item() {
    let mut app = Application::with_sink(ItemStore::from_items(["alpha", "beta"]), Vec::new());
    app.add_item("gamma");
    app.add_item("alpha");
    app.run();

    assert_eq!(
        emitted(app),
        vec![
            "Processing: alpha",
            "Processing: beta",
            "Processing: gamma",
            "Processing: alpha",
        ]
    );
}

#[test]
fn test_snapshot_is_independent_of_store() {
    let mut app = Application::with_sink(ItemStore::from_items(["a", "b"]), Vec::new());

    let mut snapshot = app.items();
    snapshot.clear();
    assert_eq!(app.items(), vec!["a", "b"]);

    app.add_item("c");
    assert!(snapshot.is_empty());
    assert_eq!(app.items(), vec!["a", "b", "c"]);
}

#[test]
fn test_strict_add_keeps_store_unchanged_on_error() {
    let mut app = Application::with_sink(ItemStore::new(), Vec::new());
    app.try_add_item("x").unwrap();

    let err = app.try_add_item("").unwrap_err();
    assert!(matches!(err, PipelineError::InvalidArgument { .. }));
    assert_eq!(app.items(), vec!["x"]);

    app.run();
    assert_eq!(emitted(app), vec!["Processing: x"]);
}

#[test]
fn test_running_twice_emits_twice() {
    let mut app = Application::with_sink(ItemStore::from_items(["once"]), Vec::new());
    assert_eq!(app.process_items(), 1);
    assert_eq!(app.process_items(), 1);
    assert_eq!(emitted(app), vec!["Processing: once", "Processing: once"]);
}

#[test]
fn test_store_survives_json_snapshot() {
    let app = Application::with_sink(ItemStore::from_items(["a", "", "a"]), Vec::new());
    let json = serde_json::to_string(app.store()).unwrap();
    let restored: ItemStore = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.all_items(), app.items());
}

#[test]
fn test_version_constant() {
    assert_eq!(VERSION, "1.0.0");
    assert_eq!(ItemStore::version(), VERSION);
}
