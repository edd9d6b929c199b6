//! Friendly labels for well-known field names

use rustc_hash::FxHashMap;

use crate::schema::FieldSelection;

/// Built-in field name to label pairs for sewer and water utility layers
pub const DEFAULT_LABEL_OVERRIDES: &[(&str, &str)] = &[
    ("diameter", "Diameter"),
    ("Shape__Length", "Pipe Length (ft)"),
    ("upstreammh", "Upstream Manhole"),
    ("downstreammh", "Downstream Manhole"),
    ("upinvert", "Invert In"),
    ("downinvert", "Invert Out"),
    ("assetid", "Asset ID"),
    ("material", "Material"),
    ("lifecyclestatus", "Lifecycle Status"),
    ("ownedby", "Owner"),
    ("rimelev", "Rim Elevation"),
    ("invertelev", "Invert Elevation"),
];

/// Exact-name relabelling applied to a selection in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOverrides {
    labels: FxHashMap<String, String>,
}

impl Default for LabelOverrides {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABEL_OVERRIDES
                .iter()
                .map(|(name, label)| ((*name).to_string(), (*label).to_string()))
                .collect(),
        }
    }
}

impl LabelOverrides {
    /// No overrides at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            labels: FxHashMap::default(),
        }
    }

    /// Add or replace an override
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(name.into(), label.into());
        self
    }

    /// Label for a field name, if overridden
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    /// Number of overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no overrides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Relabel matching entries; others keep their alias
    #[must_use]
    pub fn apply(&self, mut selection: FieldSelection) -> FieldSelection {
        self.apply_in_place(&mut selection);
        selection
    }

    /// Relabel matching entries in place, returning how many were relabelled
    pub fn apply_in_place(&self, selection: &mut FieldSelection) -> usize {
        let mut relabelled = 0;
        for entry in selection.iter_mut() {
            if let Some(label) = self.labels.get(&entry.name) {
                if entry.display_label != *label {
                    entry.display_label.clone_from(label);
                    relabelled += 1;
                }
            }
        }
        relabelled
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for LabelOverrides {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.labels
            .extend(iter.into_iter().map(|(name, label)| (name.into(), label.into())));
    }
}
