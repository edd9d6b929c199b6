use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use popup_formatter::project::parquet::ALIAS_METADATA_KEY;
use popup_formatter::{FieldDescriptor, FieldSelection, SelectedField};

/// Sewer main fields as a hosted layer reports them
#[must_use]
pub fn sewer_main_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("objectid", "OBJECTID"),
        FieldDescriptor::new("assetid", "Asset Identifier"),
        FieldDescriptor::new("material", "Material type"),
        FieldDescriptor::new("diameter", "DIAMETER"),
        FieldDescriptor::new("upstreammh", "UPSTREAMMH"),
        FieldDescriptor::new("downstreammh", "DOWNSTREAMMH"),
        FieldDescriptor::new("Shape__Length", "Shape__Length"),
        FieldDescriptor::new("globalid", "GlobalID"),
    ]
}

/// Build a selection from `(name, label)` pairs
#[must_use]
pub fn selection_of(pairs: &[(&str, &str)]) -> FieldSelection {
    pairs
        .iter()
        .map(|(name, label)| {
            SelectedField::from_descriptor(&FieldDescriptor::new(*name, *label), None)
        })
        .collect()
}

/// Write a Parquet file whose schema carries the given fields.
///
/// Fields with an alias get it as `alias` metadata.
pub fn write_layer_parquet(path: &Path, fields: &[(&str, Option<&str>)]) {
    let schema = Arc::new(Schema::new(
        fields
            .iter()
            .map(|(name, alias)| {
                let field = Field::new(*name, DataType::Utf8, true);
                match alias {
                    Some(alias) => field.with_metadata(HashMap::from([(
                        ALIAS_METADATA_KEY.to_string(),
                        (*alias).to_string(),
                    )])),
                    None => field,
                }
            })
            .collect::<Vec<_>>(),
    ));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    let file = File::create(path).expect("create parquet fixture");
    let writer = ArrowWriter::try_new(file, schema, None).expect("create parquet writer");
    writer.close().expect("close parquet writer");
}

/// Write a text fixture and return its path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Extract the `<tr ...>` rows of a rendered popup
#[must_use]
pub fn rows(html: &str) -> Vec<&str> {
    html.split("</tr>").filter(|chunk| chunk.contains("<tr")).collect()
}
