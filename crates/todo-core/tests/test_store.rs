use todo_core::task::{Selection, TaskId};
use todo_core::{TaskStore, TodoConfig};

fn summary(selection: Selection<'_>) -> Vec<(i64, String, bool)> {
    selection
        .into_iter()
        .map(|task| (task.id.get(), task.text.clone(), task.done))
        .collect()
}

#[test]
fn test_session_scenario() {
    let mut store = TaskStore::new();
    store.add_task("Buy milk");
    store.add_task("Call mom");

    assert_eq!(
        summary(store.list_all()),
        vec![
            (1, "Buy milk".to_string(), false),
            (2, "Call mom".to_string(), false),
        ]
    );

    store.mark_done(TaskId(1)).expect("task 1 exists");
    assert_eq!(
        summary(store.list_complete()),
        vec![(1, "Buy milk".to_string(), true)]
    );
    assert_eq!(
        summary(store.list_incomplete()),
        vec![(2, "Call mom".to_string(), false)]
    );
    assert_eq!(
        summary(store.search("mom").expect("non-empty term")),
        vec![(2, "Call mom".to_string(), false)]
    );

    let before = store.tasks().to_vec();
    let err = store.mark_done(TaskId(99)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn test_fresh_stores_are_independent() {
    let mut first = TaskStore::new();
    first.add_task("a");
    first.add_task("b");

    let mut second = TaskStore::new();
    assert_eq!(second.add_task("c").id, TaskId(1));
}

#[test]
fn test_parsed_id_reaches_mark_done() {
    let mut store = TaskStore::new();
    store.add_task("a");

    let id: TaskId = "1".parse().expect("numeric id");
    assert!(store.mark_done(id).is_ok());

    let err = "one".parse::<TaskId>().unwrap_err();
    assert!(err.is_invalid_id());

    let negative: TaskId = "-1".parse().expect("negative ids are integers");
    assert!(store.mark_done(negative).unwrap_err().is_not_found());
}

#[test]
fn test_load_explicit_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[display]\ndone_glyph = \"x\"\npending_glyph = \" \"\n\n[logging]\nfilter = \"todo_core=debug\"\n",
    )
    .unwrap();

    let err = TodoConfig::load(Some(&config_path)).unwrap_err();
    assert!(err.is_config(), "whitespace glyph should be rejected");

    std::fs::write(&config_path, "[display]\ndone_glyph = \"x\"\npending_glyph = \"o\"\n").unwrap();
    let config = TodoConfig::load(Some(&config_path)).expect("Should load config");
    assert_eq!(config.display.done_glyph, "x");
    assert_eq!(config.display.pending_glyph, "o");
    assert_eq!(config.logging.filter, "warn");
}

#[test]
fn test_load_missing_explicit_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = TodoConfig::load(Some(&missing)).unwrap_err();
    assert!(err.is_config());
}
