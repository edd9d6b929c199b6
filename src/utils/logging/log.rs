//! Logging utilities
//!
//! Log lines for the project and field-source reads and for the final
//! selection. Everything goes through the `log` facade so the binary's stdout
//! only carries the fragment.

use std::path::Path;
use std::time::Duration;

use crate::schema::FieldSelection;

/// Log the start of a file read
pub fn log_read_start(what: &str, path: &Path) {
    log::debug!("Reading {what} from {}", path.display());
}

/// Log a finished file read and how long it took
///
/// # Arguments
/// * `path` - Path of the file that was read
/// * `count` - Number of entries the read produced
/// * `unit` - What was counted, e.g. `"maps"` or `"fields"`
/// * `elapsed` - Time spent reading and parsing
pub fn log_read_complete(path: &Path, count: usize, unit: &str, elapsed: Duration) {
    log::info!("{}", read_summary(path, count, unit, elapsed));
}

fn read_summary(path: &Path, count: usize, unit: &str, elapsed: Duration) -> String {
    format!("Read {count} {unit} from {} in {elapsed:?}", path.display())
}

/// Log the rows a selection will render, one debug line per field
pub fn log_selection(stage: &str, selection: &FieldSelection) {
    log::info!("{}: {} fields", stage, selection.len());
    for (index, entry) in selection.iter().enumerate() {
        match entry.order {
            Some(order) => log::debug!(
                "  {index:>3}. {} -> '{}' (rank {order})",
                entry.name,
                entry.display_label
            ),
            None => log::debug!("  {index:>3}. {} -> '{}'", entry.name, entry.display_label),
        }
    }
}
