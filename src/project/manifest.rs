//! JSON project manifest
//!
//! The manifest stands in for the desktop project file: it names the project
//! and lists its maps, each with layers and tables.
//!
//! ```json
//! {
//!   "name": "RH_MACP_PACP",
//!   "maps": [{
//!     "name": "Utility Viewer - Map",
//!     "layers": [{ "name": "SewerMain", "source": "data/sewer_main.parquet" }],
//!     "tables": [{ "name": "Inspections", "fields": [{ "name": "assetid", "alias": "Asset" }] }]
//!   }]
//! }
//! ```

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::safe_read_to_string;
use crate::project::{GisProject, LayerKind, MapFrame};
use crate::utils::logging::{log_read_complete, log_read_start};

/// A GIS project described by a JSON manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Project name
    #[serde(default)]
    pub name: String,
    /// Maps in project order
    #[serde(default)]
    pub maps: Vec<MapFrame>,
}

impl ProjectManifest {
    /// Create an empty in-memory project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a map
    #[must_use]
    pub fn with_map(mut self, map: MapFrame) -> Self {
        self.maps.push(map);
        self
    }

    /// Open a project manifest from disk.
    ///
    /// Relative Parquet sources are resolved against the manifest's directory.
    pub fn open(path: &Path) -> Result<Self> {
        log_read_start("project manifest", path);
        let start = Instant::now();
        let contents = safe_read_to_string(path, "project manifest")?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let manifest = Self::from_json(&contents, base_dir)?;
        log_read_complete(path, manifest.maps.len(), "maps", start.elapsed());
        Ok(manifest)
    }

    /// Parse a manifest from a JSON string, resolving sources against `base_dir`
    pub fn from_json(json: &str, base_dir: &Path) -> Result<Self> {
        let mut manifest: Self = serde_json::from_str(json)?;
        if manifest.name.is_empty() {
            manifest.name = "untitled".to_string();
        }
        for map in &mut manifest.maps {
            for layer in &mut map.layers {
                layer.kind = LayerKind::Feature;
                layer.resolve_source(base_dir);
            }
            for table in &mut map.tables {
                table.kind = LayerKind::Table;
                table.resolve_source(base_dir);
            }
        }
        Ok(manifest)
    }
}

impl GisProject for ProjectManifest {
    fn name(&self) -> &str {
        &self.name
    }

    fn maps(&self) -> &[MapFrame] {
        &self.maps
    }
}
