//! Field selection for popups
//!
//! Selection happens in two steps: a [`FieldSelector`] chooses and orders the
//! layer's fields, then [`LabelOverrides`] swaps in friendly labels for
//! well-known field names.

pub mod core;
pub mod overrides;

pub use self::core::{ExcludeFields, FieldSelector, IncludeOrdered, InclusionOrderMap};
pub use self::overrides::{DEFAULT_LABEL_OVERRIDES, LabelOverrides};

use crate::config::{FeatureDictionary, SelectionConfig};
use crate::error::{PopupError, Result};

/// Build the selector described by a selection config
///
/// # Arguments
/// * `config` - Selection mode from the run configuration
/// * `layer_name` - Name of the located layer, the feature dictionary key
/// * `dictionary` - Dictionary supplied in code; takes precedence over the config's file
///
/// # Errors
/// Returns an error if include mode has no dictionary, the dictionary file
/// cannot be read, or it has no entry for the layer
pub fn selector_from_config(
    config: &SelectionConfig,
    layer_name: &str,
    dictionary: Option<&FeatureDictionary>,
) -> Result<Box<dyn FieldSelector>> {
    match config {
        SelectionConfig::Exclude { .. } => {
            Ok(Box::new(ExcludeFields::new(config.excluded_fields())))
        }
        SelectionConfig::Include { dictionary: path } => {
            let selector = match (dictionary, path) {
                (Some(dictionary), _) => dictionary.selector_for(layer_name)?,
                (None, Some(path)) => FeatureDictionary::from_path(path)?.selector_for(layer_name)?,
                (None, None) => {
                    return Err(PopupError::ConfigError(
                        "include mode needs a feature dictionary".to_string(),
                    ));
                }
            };
            Ok(Box::new(selector))
        }
    }
}
