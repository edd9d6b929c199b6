//! Configuration for `PopupFormatter`.

pub mod feature_dictionary;
pub mod presets;

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{PopupError, Result};
use crate::project::LayerKind;
use crate::render::LIGHT_GREY;

pub use feature_dictionary::FeatureDictionary;
pub use presets::ExclusionPreset;

/// How the fields of the located layer are selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionConfig {
    /// Drop the listed fields and every field of the listed presets
    Exclude {
        /// Field names to drop
        #[serde(default)]
        fields: Vec<String>,
        /// Built-in exclusion lists to drop as well
        #[serde(default)]
        presets: Vec<ExclusionPreset>,
    },
    /// Keep only the fields ranked for this layer in a feature dictionary
    Include {
        /// Feature dictionary file; may be omitted when a dictionary is supplied in code
        #[serde(default)]
        dictionary: Option<PathBuf>,
    },
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::Exclude {
            fields: Vec::new(),
            presets: vec![ExclusionPreset::SystemFields],
        }
    }
}

impl SelectionConfig {
    /// Every excluded field name, explicit ones first. Empty for include mode.
    #[must_use]
    pub fn excluded_fields(&self) -> Vec<String> {
        match self {
            Self::Exclude { fields, presets } => fields
                .iter()
                .cloned()
                .chain(
                    presets
                        .iter()
                        .flat_map(|preset| preset.fields().iter().map(|f| (*f).to_string())),
                )
                .collect(),
            Self::Include { .. } => Vec::new(),
        }
    }
}

/// Configuration for a single popup formatting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupFormatterConfig {
    /// Path to the project manifest
    pub project: PathBuf,
    /// Name of the map holding the layer
    pub map: String,
    /// Name of the layer or table
    pub layer: String,
    /// Whether `layer` names a spatial layer or a standalone table
    #[serde(default)]
    pub kind: LayerKind,
    /// Background color of even rows
    #[serde(default = "default_stripe_color")]
    pub stripe_color: String,
    /// Field selection strategy
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Extra field name to label pairs, applied after the built-in ones
    #[serde(default)]
    pub label_overrides: FxHashMap<String, String>,
    /// Whether the built-in label overrides are applied
    #[serde(default = "default_true")]
    pub use_default_overrides: bool,
}

fn default_stripe_color() -> String {
    LIGHT_GREY.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for PopupFormatterConfig {
    fn default() -> Self {
        Self {
            project: PathBuf::from("project.json"),
            map: "Utility Viewer - Map".to_string(),
            layer: String::new(),
            kind: LayerKind::Feature,
            stripe_color: default_stripe_color(),
            selection: SelectionConfig::default(),
            label_overrides: FxHashMap::default(),
            use_default_overrides: true,
        }
    }
}

impl PopupFormatterConfig {
    /// Load a run configuration from a JSON file.
    ///
    /// Relative project and dictionary paths are resolved against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = safe_read_to_string(path, "run configuration")?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json(&contents, base_dir)
    }

    /// Parse a run configuration, resolving relative paths against `base_dir`
    pub fn from_json(json: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        if config.project.is_relative() {
            config.project = base_dir.join(&config.project);
        }
        if let SelectionConfig::Include {
            dictionary: Some(dictionary),
        } = &mut config.selection
        {
            if dictionary.is_relative() {
                *dictionary = base_dir.join(&*dictionary);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that the names needed to locate a layer are present
    pub fn validate(&self) -> Result<()> {
        if self.map.trim().is_empty() {
            return Err(PopupError::ConfigError("map name is empty".to_string()));
        }
        if self.layer.trim().is_empty() {
            return Err(PopupError::ConfigError("layer name is empty".to_string()));
        }
        if self.stripe_color.trim().is_empty() {
            return Err(PopupError::ConfigError("stripe color is empty".to_string()));
        }
        Ok(())
    }
}
