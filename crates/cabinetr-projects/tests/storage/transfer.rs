use cabinetr_cutlist::CabinetParams;
use cabinetr_projects::{export_all, import_projects, ProjectError, ProjectStore};
use tempfile::TempDir;

#[test]
fn test_backup_and_restore_through_file() {
    let mut store = ProjectStore::new();
    let id = store.add("Kitchen", None).id.clone();
    store
        .add_configuration(&id, "Uppers", CabinetParams::default())
        .unwrap();
    store.add("Bath", None);

    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");
    std::fs::write(&backup, export_all(store.cabinets()).unwrap()).unwrap();

    let imported = import_projects(&std::fs::read_to_string(&backup).unwrap()).unwrap();
    assert_eq!(imported.len(), 2);

    let names: Vec<&str> = imported.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Kitchen", "Bath"]);
    for (old, new) in store.cabinets().iter().zip(&imported) {
        assert_ne!(old.id, new.id);
        assert_eq!(old.params, new.params);
    }
    assert_ne!(
        imported[0].configurations()[0].id,
        store.cabinets()[0].configurations()[0].id
    );

    let count = store.import(imported);
    assert_eq!(count, 2);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_import_accepts_web_export() {
    let content = r#"{
      "version": "1.0",
      "exportDate": "2024-05-01T12:00:00.000Z",
      "projects": [{
        "id": "a1b2",
        "name": "Pantry",
        "params": {
          "openingWidth": 30, "openingHeight": 80,
          "topOverlap": 0.5, "bottomOverlap": 0.5, "leftOverlap": 0.5, "rightOverlap": 0.5,
          "gap": 0.125, "type": "door", "quantity": 2,
          "stileWidth": 2.25, "railWidth": 2.25, "routerDepth": 0.375
        },
        "configurations": [{
          "id": "c1", "name": "Tall",
          "params": {
            "openingWidth": 30, "openingHeight": 80,
            "topOverlap": 0.5, "bottomOverlap": 0.5, "leftOverlap": 0.5, "rightOverlap": 0.5,
            "gap": 0.125, "type": "drawer", "quantity": 2,
            "stileWidth": 2.25, "railWidth": 2.25, "routerDepth": 0.375,
            "drawerSplitMode": "custom", "drawerRatios": [40, 60]
          }
        }],
        "createdAt": "2024-05-01T11:00:00.000Z",
        "updatedAt": "2024-05-01T11:30:00.000Z"
      }]
    }"#;

    let imported = import_projects(content).unwrap();
    let cabinet = &imported[0];
    assert_eq!(cabinet.name, "Pantry");
    assert_ne!(cabinet.id, "a1b2");
    assert_ne!(cabinet.configurations()[0].id, "c1");
    assert_eq!(
        cabinet.configurations()[0].params.drawer_ratios,
        Some(vec![40.0, 60.0])
    );
}

#[test]
fn test_failed_import_leaves_store_alone() {
    let mut store = ProjectStore::new();
    store.add("Kitchen", None);

    let result = import_projects(r#"{"version": "1.0"}"#);
    assert!(matches!(result, Err(ProjectError::InvalidFormat)));
    assert_eq!(store.len(), 1);

    store.replace_all(vec![]);
    assert!(store.is_empty());
}
