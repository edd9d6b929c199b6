//! End-to-end popup formatting: locate, select, relabel, render.

use std::time::Instant;

use log::{info, warn};

use crate::config::{FeatureDictionary, PopupFormatterConfig};
use crate::error::Result;
use crate::filter::{LabelOverrides, selector_from_config};
use crate::project::{GisProject, Layer, ProjectManifest, locate};
use crate::render::render_popup;
use crate::schema::FieldSelection;
use crate::utils::logging::log_selection;

/// Runs the popup pipeline for one layer
#[derive(Debug, Clone)]
pub struct PopupFormatter {
    config: PopupFormatterConfig,
    dictionary: Option<FeatureDictionary>,
    overrides: LabelOverrides,
}

impl Default for PopupFormatter {
    fn default() -> Self {
        Self::new(PopupFormatterConfig::default())
    }
}

impl PopupFormatter {
    /// Create a formatter; label overrides are built from the config
    #[must_use]
    pub fn new(config: PopupFormatterConfig) -> Self {
        let mut overrides = if config.use_default_overrides {
            LabelOverrides::default()
        } else {
            LabelOverrides::empty()
        };
        overrides.extend(config.label_overrides.clone());

        Self {
            config,
            dictionary: None,
            overrides,
        }
    }

    /// Use this feature dictionary instead of the config's dictionary file
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: FeatureDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// The label overrides in effect
    #[must_use]
    pub fn overrides(&self) -> &LabelOverrides {
        &self.overrides
    }

    /// Open the configured project and format the configured layer
    pub fn run(&self) -> Result<String> {
        let start = Instant::now();
        let project = ProjectManifest::open(&self.config.project)?;
        let html = self.format_project(&project)?;
        info!("Formatted popup in {:?}", start.elapsed());
        Ok(html)
    }

    /// Locate the configured layer in `project` and format it
    pub fn format_project<P: GisProject + ?Sized>(&self, project: &P) -> Result<String> {
        let layer = locate(
            project,
            &self.config.map,
            &self.config.layer,
            self.config.kind,
        )?;
        self.format_layer(layer)
    }

    /// Format an already located layer
    pub fn format_layer(&self, layer: &Layer) -> Result<String> {
        let selection = self.select_fields(layer)?;
        Ok(render_popup(&selection, &self.config.stripe_color))
    }

    /// Select and relabel the fields of a layer without rendering them
    pub fn select_fields(&self, layer: &Layer) -> Result<FieldSelection> {
        let fields = layer.list_fields()?;
        info!("{} '{}' has {} fields", layer.kind, layer.name, fields.len());

        let selector =
            selector_from_config(&self.config.selection, &layer.name, self.dictionary.as_ref())?;
        let selection = self.overrides.apply(selector.select(&fields));

        if selection.is_empty() {
            warn!("No fields of '{}' were selected; the popup will be empty", layer.name);
        }
        log_selection("Selected", &selection);
        Ok(selection)
    }
}
