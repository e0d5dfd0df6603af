//! Utility functions and helpers.
//!
//! - [`reader`] - Log file opening with gzip decompression
//! - [`format`] - Number and text formatting for report output
//! - [`time`] - Syslog timestamp parsing and span formatting

pub mod format;
pub mod reader;
pub mod time;
