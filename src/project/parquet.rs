//! Field metadata from Parquet files
//!
//! Only the file footer is read. The Arrow schema stored there gives the field
//! names; a field's alias is taken from its `alias` metadata entry.

use std::path::Path;
use std::time::Instant;

use arrow::datatypes::Schema;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::schema::FieldDescriptor;
use crate::utils::logging::{log_read_complete, log_read_start};

/// Arrow field metadata key holding the human-readable alias
pub const ALIAS_METADATA_KEY: &str = "alias";

/// Read the field descriptors of a Parquet file in schema order
///
/// # Errors
/// Returns an error if the file cannot be opened or its footer cannot be parsed
pub fn read_field_descriptors(path: &Path) -> Result<Vec<FieldDescriptor>> {
    log_read_start("field metadata", path);
    let start = Instant::now();

    let file = safe_open_file(path, "layer field source")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let fields = descriptors_from_schema(builder.schema());

    log_read_complete(path, fields.len(), "fields", start.elapsed());
    Ok(fields)
}

/// Convert an Arrow schema into field descriptors.
///
/// Fields without an alias are labelled with their own name.
#[must_use]
pub fn descriptors_from_schema(schema: &Schema) -> Vec<FieldDescriptor> {
    schema
        .fields()
        .iter()
        .map(|field| match field.metadata().get(ALIAS_METADATA_KEY) {
            Some(alias) if !alias.is_empty() => FieldDescriptor::new(field.name(), alias),
            _ => FieldDescriptor::unaliased(field.name()),
        })
        .collect()
}
