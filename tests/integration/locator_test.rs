use std::path::Path;

use popup_formatter::{
    GisProject, LayerKind, PopupError, ProjectManifest, find_layer, find_table, locate,
};

const MANIFEST: &str = r#"{
    "name": "RH_MACP_PACP",
    "maps": [
        {
            "name": "Utility Viewer - Map",
            "layers": [
                { "name": "SewerMain", "fields": [{ "name": "assetid", "alias": "Asset" }] },
                { "name": "SewerManhole", "fields": [{ "name": "rimelev", "alias": "Rim" }] }
            ],
            "tables": [
                { "name": "SewerManhole - MACP_RehabRecommendation",
                  "fields": [{ "name": "recommendation", "alias": "Recommendation" }] }
            ]
        }
    ]
}"#;

fn project() -> ProjectManifest {
    ProjectManifest::from_json(MANIFEST, Path::new(".")).unwrap()
}

#[test]
fn test_find_layer_and_table() {
    let project = project();

    let layer = find_layer(&project, "Utility Viewer - Map", "SewerManhole").unwrap();
    assert_eq!(layer.kind, LayerKind::Feature);
    assert_eq!(layer.list_fields().unwrap()[0].name, "rimelev");

    let table = find_table(
        &project,
        "Utility Viewer - Map",
        "SewerManhole - MACP_RehabRecommendation",
    )
    .unwrap();
    assert_eq!(table.kind, LayerKind::Table);
}

#[test]
fn test_wrong_entry_point_is_not_found() {
    let project = project();
    let err = find_table(&project, "Utility Viewer - Map", "SewerMain").unwrap_err();
    assert!(matches!(
        err,
        PopupError::LayerNotFound {
            kind: LayerKind::Table,
            ..
        }
    ));
    assert!(err.to_string().contains("SewerMain"));
}

#[test]
fn test_missing_map_is_not_found() {
    let project = project();
    let err = locate(&project, "Utility Viewer", "SewerMain", LayerKind::Feature).unwrap_err();
    assert!(matches!(err, PopupError::MapNotFound { .. }));
}

#[test]
fn test_locate_through_trait_object() {
    let project = project();
    let dynamic: &dyn GisProject = &project;
    let layer = locate(dynamic, "Utility Viewer - Map", "SewerMain", LayerKind::Feature).unwrap();
    assert_eq!(layer.name, "SewerMain");
}
