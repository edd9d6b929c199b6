//! Utility functions for error handling
//!
//! This module provides helpers that attach the offending path to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PopupError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(PopupError::file_error(
            path,
            format!("File not found, needed for: {purpose}"),
        ));
    }

    if !path.is_file() {
        return Err(PopupError::file_error(
            path,
            format!("Path is not a file, expected a file for: {purpose}"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        PopupError::file_error_with_source(path, context, e)
    })
}

/// Read a whole file to a string with the same error context as [`safe_open_file`]
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;
    let mut contents = String::new();
    io::Read::read_to_string(&mut file, &mut contents).map_err(|e| {
        PopupError::file_error_with_source(path, format!("Failed to read file for: {purpose}"), e)
    })?;
    Ok(contents)
}
