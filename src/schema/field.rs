//! Field descriptors and ordered field selections
//!
//! A [`FieldDescriptor`] is what the project reports for one attribute field of
//! a layer. A [`FieldSelection`] is the ordered subset of those fields that ends
//! up as rows in the popup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name and alias of one attribute field, as reported by the project.
///
/// A declared field without an alias (or with an empty one) is labelled with
/// its own name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DeclaredField")]
pub struct FieldDescriptor {
    /// System name of the field (unique within a layer)
    pub name: String,
    /// Human-readable label
    #[serde(rename = "alias")]
    pub alias_name: String,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    pub fn new(name: impl Into<String>, alias_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias_name: alias_name.into(),
        }
    }

    /// Create a descriptor whose alias is its name
    pub fn unaliased(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias_name: name.clone(),
            name,
        }
    }
}

/// Field as written in a manifest, alias optional
#[derive(Deserialize)]
struct DeclaredField {
    name: String,
    alias: Option<String>,
}

impl From<DeclaredField> for FieldDescriptor {
    fn from(field: DeclaredField) -> Self {
        match field.alias {
            Some(alias) if !alias.is_empty() => Self::new(field.name, alias),
            _ => Self::unaliased(field.name),
        }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alias_name)
    }
}

/// One row of a popup: the field's system name, the label shown next to it and
/// the rank it was sorted by, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedField {
    /// System name, rendered as the `{name}` placeholder
    pub name: String,
    /// Label rendered in the first cell
    pub display_label: String,
    /// Rank from the inclusion map, `None` for exclusion-based selections
    pub order: Option<i64>,
}

impl SelectedField {
    /// Select a descriptor under its own alias
    #[must_use]
    pub fn from_descriptor(descriptor: &FieldDescriptor, order: Option<i64>) -> Self {
        Self {
            name: descriptor.name.clone(),
            display_label: descriptor.alias_name.clone(),
            order,
        }
    }
}

/// Ordered sequence of selected fields; entry order is row order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    entries: Vec<SelectedField>,
}

impl FieldSelection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless a field with the same name is already selected.
    ///
    /// Returns `true` when the entry was added.
    pub fn push(&mut self, entry: SelectedField) -> bool {
        if self.contains(&entry.name) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Whether a field with this name is selected
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Look up an entry by field name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SelectedField> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Number of selected fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in row order
    pub fn iter(&self) -> std::slice::Iter<'_, SelectedField> {
        self.entries.iter()
    }

    /// Mutable access to entries, for relabelling in place
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SelectedField> {
        self.entries.iter_mut()
    }

    /// Field names in row order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// `(name, display_label)` pairs in row order
    #[must_use]
    pub fn labels(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.display_label.as_str()))
            .collect()
    }

    /// Stable sort by rank; unranked entries sort after ranked ones
    pub fn sort_by_order(&mut self) {
        self.entries
            .sort_by_key(|entry| (entry.order.is_none(), entry.order.unwrap_or_default()));
    }
}

impl FromIterator<SelectedField> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = SelectedField>>(iter: I) -> Self {
        let mut selection = Self::new();
        for entry in iter {
            selection.push(entry);
        }
        selection
    }
}

impl IntoIterator for FieldSelection {
    type Item = SelectedField;
    type IntoIter = std::vec::IntoIter<SelectedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSelection {
    type Item = &'a SelectedField;
    type IntoIter = std::slice::Iter<'a, SelectedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
