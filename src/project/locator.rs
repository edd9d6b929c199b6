//! Locating layers and tables by name

use log::debug;

use crate::error::{PopupError, Result};
use crate::project::{GisProject, Layer, LayerKind};

/// Find a spatial layer by exact name in the first map called `map_name`
pub fn find_layer<'p, P: GisProject + ?Sized>(
    project: &'p P,
    map_name: &str,
    layer_name: &str,
) -> Result<&'p Layer> {
    locate(project, map_name, layer_name, LayerKind::Feature)
}

/// Find a standalone table by exact name in the first map called `map_name`
pub fn find_table<'p, P: GisProject + ?Sized>(
    project: &'p P,
    map_name: &str,
    table_name: &str,
) -> Result<&'p Layer> {
    locate(project, map_name, table_name, LayerKind::Table)
}

/// Find the first entry named `name` in the layer or table list of a map.
///
/// Only the list selected by `kind` is searched, so asking for a table with
/// [`LayerKind::Feature`] is a [`PopupError::LayerNotFound`].
pub fn locate<'p, P: GisProject + ?Sized>(
    project: &'p P,
    map_name: &str,
    name: &str,
    kind: LayerKind,
) -> Result<&'p Layer> {
    let map = project
        .list_maps(map_name)
        .into_iter()
        .next()
        .ok_or_else(|| PopupError::MapNotFound {
            map: map_name.to_string(),
        })?;

    let layer = map
        .list(kind)
        .iter()
        .find(|layer| layer.name == name)
        .ok_or_else(|| PopupError::LayerNotFound {
            map: map_name.to_string(),
            name: name.to_string(),
            kind,
        })?;

    debug!(
        "Located {} '{}' in map '{}' of project '{}'",
        kind,
        name,
        map_name,
        project.name()
    );
    Ok(layer)
}
