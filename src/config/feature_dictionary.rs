//! Per-layer inclusion and ordering maps
//!
//! A feature dictionary maps a layer name to the fields that belong in its
//! popup and their rank:
//!
//! ```json
//! { "SewerMain": { "assetid": 1, "material": 2, "diameter": 3 } }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{PopupError, Result};
use crate::filter::{IncludeOrdered, InclusionOrderMap};

/// Layer name to inclusion/order map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureDictionary {
    layers: FxHashMap<String, InclusionOrderMap>,
}

impl FeatureDictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = safe_read_to_string(path, "feature dictionary")?;
        let dictionary: Self = serde_json::from_str(&contents)?;
        log::debug!(
            "Loaded feature dictionary with {} layers from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Add or replace the ranks for a layer
    #[must_use]
    pub fn with_layer<I, S>(mut self, layer: impl Into<String>, ranks: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.layers.insert(
            layer.into(),
            ranks.into_iter().map(|(name, rank)| (name.into(), rank)).collect(),
        );
        self
    }

    /// Ranks for a layer, if it has an entry
    #[must_use]
    pub fn get(&self, layer: &str) -> Option<&InclusionOrderMap> {
        self.layers.get(layer)
    }

    /// Number of layers with an entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layer has an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Build the inclusion selector for a layer
    ///
    /// # Errors
    /// Returns [`PopupError::DictionaryEntryNotFound`] if the layer has no entry
    pub fn selector_for(&self, layer: &str) -> Result<IncludeOrdered> {
        self.get(layer)
            .cloned()
            .map(IncludeOrdered::new)
            .ok_or_else(|| PopupError::DictionaryEntryNotFound {
                layer: layer.to_string(),
            })
    }
}
