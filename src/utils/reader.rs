//! Log file reader with gzip decompression support.
//!
//! Rotated auth logs are commonly shipped as `auth.log.2.gz`; this
//! module opens both plain and gzip-compressed files transparently.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens a log file, decompressing when the path names a gzip archive.
///
/// Detection is substring containment of `.gz` in the path, not magic
/// bytes, so rotation suffixes like `auth.log.2.gz` are handled.
pub fn open_log_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    if path.to_string_lossy().contains(".gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Reads an entire log file (plain or gzip) into memory as text.
pub fn read_log_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut reader = open_log_file(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(text)
}
