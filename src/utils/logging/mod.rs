//! Logging utilities for pipeline progress
//!
//! This module provides utilities for consistent log output.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_read_complete, log_read_start, log_selection};
