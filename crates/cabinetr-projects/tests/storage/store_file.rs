use cabinetr_cutlist::{CabinetParams, OpeningKind};
use cabinetr_projects::{ProjectError, ProjectStore, STORE_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path().join(STORE_FILE_NAME)).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_save_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(STORE_FILE_NAME);

    let mut store = ProjectStore::open(&path).unwrap();
    let drawer_params = CabinetParams {
        kind: OpeningKind::Drawer,
        quantity: 3,
        ..CabinetParams::default()
    };
    let id = store.add("Kitchen", None).id.clone();
    store
        .add_configuration(&id, "Drawer bank", drawer_params.clone())
        .unwrap();
    store.save().unwrap();

    let reopened = ProjectStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    let cabinet = reopened.get(&id).unwrap();
    assert_eq!(cabinet.configurations()[0].params, drawer_params);
    assert_eq!(cabinet, &store.cabinets()[0]);
}

#[test]
fn test_store_file_is_plain_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(STORE_FILE_NAME);
    let mut store = ProjectStore::open(&path).unwrap();
    store.add("A", None);
    store.add("B", None);
    store.save().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[0]["name"], "A");
}

#[test]
fn test_corrupt_store_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(STORE_FILE_NAME);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        ProjectStore::open(&path),
        Err(ProjectError::Json(_))
    ));
}
