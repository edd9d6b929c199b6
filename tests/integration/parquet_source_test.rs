use popup_formatter::project::parquet::read_field_descriptors;
use popup_formatter::{FieldDescriptor, Layer, LayerKind, PopupError};

use crate::utils::write_layer_parquet;

#[test]
fn test_read_aliases_from_parquet_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sewer_main.parquet");
    write_layer_parquet(
        &path,
        &[
            ("OBJECTID", None),
            ("assetid", Some("Asset Identifier")),
            ("material", Some("Material type")),
        ],
    );

    let fields = read_field_descriptors(&path).unwrap();
    assert_eq!(
        fields,
        vec![
            FieldDescriptor::new("OBJECTID", "OBJECTID"),
            FieldDescriptor::new("assetid", "Asset Identifier"),
            FieldDescriptor::new("material", "Material type"),
        ]
    );
}

#[test]
fn test_parquet_layer_lists_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("valves.parquet");
    write_layer_parquet(&path, &[("valvetype", Some("Valve Type"))]);

    let layer = Layer::parquet("Valves", LayerKind::Feature, &path);
    assert_eq!(layer.list_fields().unwrap().len(), 1);
}

#[test]
fn test_missing_parquet_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_field_descriptors(&dir.path().join("missing.parquet")).unwrap_err();
    assert!(matches!(err, PopupError::FileError { .. }));
}

#[test]
fn test_non_parquet_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_parquet.parquet");
    std::fs::write(&path, b"definitely not a parquet footer").unwrap();
    let err = read_field_descriptors(&path).unwrap_err();
    assert!(matches!(err, PopupError::ParquetError(_)));
}
