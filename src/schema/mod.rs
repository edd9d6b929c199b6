//! Module for layer field metadata.
//!
//! Field descriptors come from the project; selections are what the popup renders.

pub mod field;

pub use field::{FieldDescriptor, FieldSelection, SelectedField};
