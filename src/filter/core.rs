//! Core field selection
//!
//! This module defines the [`FieldSelector`] trait and its two strategies:
//! dropping an exclusion set, or keeping an inclusion map and ordering by rank.

use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::schema::{FieldDescriptor, FieldSelection, SelectedField};

/// Field name to rank; lower ranks render first
pub type InclusionOrderMap = FxHashMap<String, i64>;

/// Trait for strategies that turn a layer's fields into popup rows
pub trait FieldSelector: std::fmt::Debug {
    /// Select fields from a layer's descriptors
    ///
    /// # Arguments
    /// * `fields` - The layer's field descriptors in native order
    ///
    /// # Returns
    /// The ordered selection, labelled with each field's alias
    fn select(&self, fields: &[FieldDescriptor]) -> FieldSelection;

    /// Returns the set of field names this selector mentions
    fn referenced_fields(&self) -> FxHashSet<String>;
}

/// Keeps every field except the excluded ones, in native field order
#[derive(Debug, Clone, Default)]
pub struct ExcludeFields {
    excluded: FxHashSet<String>,
}

impl ExcludeFields {
    /// Create an exclusion selector
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is excluded (exact, case-sensitive)
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }
}

impl FieldSelector for ExcludeFields {
    fn select(&self, fields: &[FieldDescriptor]) -> FieldSelection {
        let selection: FieldSelection = fields
            .iter()
            .filter(|field| !self.is_excluded(&field.name))
            .map(|field| SelectedField::from_descriptor(field, None))
            .collect();

        debug!(
            "Excluded {} of {} fields",
            fields.len() - selection.len(),
            fields.len()
        );
        selection
    }

    fn referenced_fields(&self) -> FxHashSet<String> {
        self.excluded.clone()
    }
}

/// Keeps only ranked fields and orders them by rank.
///
/// Equal ranks keep the layer's native order. Ranked names the layer does not
/// have are ignored.
#[derive(Debug, Clone, Default)]
pub struct IncludeOrdered {
    ranks: InclusionOrderMap,
}

impl IncludeOrdered {
    /// Create an inclusion selector from a rank map
    #[must_use]
    pub fn new(ranks: InclusionOrderMap) -> Self {
        Self { ranks }
    }

    /// Rank of a field, if it is included
    #[must_use]
    pub fn rank(&self, name: &str) -> Option<i64> {
        self.ranks.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for IncludeOrdered {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().map(|(name, rank)| (name.into(), rank)).collect(),
        }
    }
}

impl FieldSelector for IncludeOrdered {
    fn select(&self, fields: &[FieldDescriptor]) -> FieldSelection {
        let mut selection: FieldSelection = fields
            .iter()
            .filter_map(|field| {
                self.rank(&field.name)
                    .map(|rank| SelectedField::from_descriptor(field, Some(rank)))
            })
            .collect();
        selection.sort_by_order();

        if selection.len() < self.ranks.len() {
            let missing = self
                .ranks
                .keys()
                .filter(|name| !selection.contains(name))
                .sorted()
                .join(", ");
            debug!("Ranked fields not present on layer: {missing}");
        }
        selection
    }

    fn referenced_fields(&self) -> FxHashSet<String> {
        self.ranks.keys().cloned().collect()
    }
}
