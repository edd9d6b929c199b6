//! Access to GIS project contents
//!
//! A project holds named maps; each map lists spatial layers and standalone
//! tables, and each of those can report its attribute fields. The
//! [`GisProject`] trait is the seam the rest of the crate depends on,
//! [`ProjectManifest`] is the JSON-backed implementation.

pub mod locator;
pub mod manifest;
pub mod parquet;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FieldDescriptor;

pub use locator::{find_layer, find_table, locate};
pub use manifest::ProjectManifest;

/// Which list of a map an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Spatial feature layer
    #[default]
    Feature,
    /// Standalone, non-spatial table
    Table,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Feature => write!(f, "Feature layer"),
            LayerKind::Table => write!(f, "Table"),
        }
    }
}

/// Where a layer's field list comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerSource {
    /// Fields are read from the Arrow schema of a Parquet/GeoParquet file
    Parquet {
        /// Path to the file, resolved against the manifest directory on open
        source: PathBuf,
    },
    /// Fields are declared in the manifest
    Inline {
        /// Field descriptors in native field order
        fields: Vec<FieldDescriptor>,
    },
}

/// A feature layer or standalone table inside a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Display name of the layer in the map
    pub name: String,
    /// Set from the list the layer was declared in
    #[serde(skip)]
    pub kind: LayerKind,
    /// Field source
    #[serde(flatten)]
    pub source: LayerSource,
}

impl Layer {
    /// Create a layer with inline field descriptors
    pub fn inline(name: impl Into<String>, kind: LayerKind, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            kind,
            source: LayerSource::Inline { fields },
        }
    }

    /// Create a layer backed by a Parquet file
    pub fn parquet(name: impl Into<String>, kind: LayerKind, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            source: LayerSource::Parquet {
                source: source.into(),
            },
        }
    }

    /// List the layer's fields in native order
    pub fn list_fields(&self) -> Result<Vec<FieldDescriptor>> {
        match &self.source {
            LayerSource::Inline { fields } => Ok(fields.clone()),
            LayerSource::Parquet { source } => self::parquet::read_field_descriptors(source),
        }
    }

    /// Make a relative Parquet source path relative to `base_dir`
    pub(crate) fn resolve_source(&mut self, base_dir: &Path) {
        if let LayerSource::Parquet { source } = &mut self.source {
            if source.is_relative() {
                *source = base_dir.join(&*source);
            }
        }
    }
}

/// A named map with its layers and tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapFrame {
    /// Map name
    pub name: String,
    /// Spatial layers, in table-of-contents order
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Standalone tables, in table-of-contents order
    #[serde(default)]
    pub tables: Vec<Layer>,
}

impl MapFrame {
    /// Create an empty map
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a spatial layer
    #[must_use]
    pub fn with_layer(mut self, mut layer: Layer) -> Self {
        layer.kind = LayerKind::Feature;
        self.layers.push(layer);
        self
    }

    /// Add a standalone table
    #[must_use]
    pub fn with_table(mut self, mut table: Layer) -> Self {
        table.kind = LayerKind::Table;
        self.tables.push(table);
        self
    }

    /// Spatial layers of the map
    #[must_use]
    pub fn list_layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Standalone tables of the map
    #[must_use]
    pub fn list_tables(&self) -> &[Layer] {
        &self.tables
    }

    /// Layers or tables, depending on `kind`
    #[must_use]
    pub fn list(&self, kind: LayerKind) -> &[Layer] {
        match kind {
            LayerKind::Feature => self.list_layers(),
            LayerKind::Table => self.list_tables(),
        }
    }
}

/// Read access to a GIS project
pub trait GisProject: std::fmt::Debug {
    /// Project name, used in log output
    fn name(&self) -> &str;

    /// All maps in the project
    fn maps(&self) -> &[MapFrame];

    /// Maps whose name equals `name`, in project order
    fn list_maps(&self, name: &str) -> Vec<&MapFrame> {
        self.maps().iter().filter(|map| map.name == name).collect()
    }
}
