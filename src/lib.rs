//! A Rust library for building popup templates from GIS layer field metadata:
//! locate a layer, select and order its fields, relabel well-known fields and
//! render a striped HTML table of `{field}` placeholders.

pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod project;
pub mod render;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ExclusionPreset, FeatureDictionary, PopupFormatterConfig, SelectionConfig};
pub use error::{PopupError, Result};
pub use formatter::PopupFormatter;
pub use schema::{FieldDescriptor, FieldSelection, SelectedField};

// Project access
pub use project::{
    GisProject, Layer, LayerKind, LayerSource, MapFrame, ProjectManifest, find_layer, find_table,
    locate,
};

// Selection and rendering
pub use filter::{
    ExcludeFields, FieldSelector, IncludeOrdered, InclusionOrderMap, LabelOverrides,
    selector_from_config,
};
pub use render::{DARK_GREY, LIGHT_GREY, placeholder, render_popup, render_row};
