//! Aggregation of raw authentication log text into per-user records.
//!
//! [`parse_auth_log`] is a pure function over the full log text: it
//! classifies each line, extracts fields, and folds the result into a
//! map keyed by user identity. [`parse_auth_log_file`] wraps it with
//! gzip-aware file input.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use super::extract::{
    extract_command, extract_logname, extract_source_address, extract_user,
};
use super::types::{LineKind, UserRecord, UNKNOWN_USER};
use crate::utils::reader::read_log_text;

/// Parse authentication log text into a map of user identity to
/// [`UserRecord`].
///
/// One bounded pass over the input; no state survives the call. Lines
/// matching none of the four categories are skipped. Per-line extraction
/// misses degrade to absent fields and never abort the parse.
pub fn parse_auth_log(text: &str) -> HashMap<String, UserRecord> {
    let mut records: HashMap<String, UserRecord> = HashMap::new();

    for raw in text.split('\n') {
        let line = raw.trim_end_matches(|c| c == '\r' || c == '\n');
        let Some(kind) = LineKind::classify(line) else {
            continue;
        };

        match kind {
            LineKind::AcceptedPassword => {
                let record = record_for(&mut records, extract_user(line));
                if let Some(addr) = extract_source_address(line) {
                    record.record_source_address(addr);
                }
                record.success_lines.push(line.to_string());
                record.all_lines.push(line.to_string());
            }
            LineKind::FailedPassword => {
                let record = record_for(&mut records, extract_user(line));
                if let Some(addr) = extract_source_address(line) {
                    record.record_source_address(addr);
                }
                record.failure_lines.push(line.to_string());
                record.all_lines.push(line.to_string());
            }
            LineKind::AuthFailure => {
                // logname= is the generic candidate; for sshd PAM lines
                // the category-specific extraction supersedes it and the
                // source address is recorded as well.
                let from_sshd = line.contains("(sshd:auth)");
                let user = if from_sshd {
                    extract_user(line)
                } else {
                    extract_logname(line)
                };
                let record = record_for(&mut records, user);
                if from_sshd {
                    if let Some(addr) = extract_source_address(line) {
                        record.record_source_address(addr);
                    }
                }
                record.failure_lines.push(line.to_string());
                record.all_lines.push(line.to_string());
            }
            LineKind::Sudo => {
                let record = record_for(&mut records, extract_user(line));
                if let Some(command) = extract_command(line) {
                    record.record_command(command);
                }
                // sudo invocations are not authentication outcomes; the
                // line lands in all_lines only.
                record.all_lines.push(line.to_string());
            }
        }
    }

    records
}

/// Look up or lazily create the record for a (possibly unresolved) user.
fn record_for<'a>(
    records: &'a mut HashMap<String, UserRecord>,
    user: Option<&str>,
) -> &'a mut UserRecord {
    let user = user.unwrap_or(UNKNOWN_USER);
    records
        .entry(user.to_string())
        .or_insert_with(|| UserRecord::new(user))
}

/// Parse an authentication log file (plain text or gzip-compressed).
///
/// The file is read fully into memory and handed to [`parse_auth_log`].
/// A missing or unreadable file yields an error naming the path and the
/// underlying cause; no partial result is returned.
pub fn parse_auth_log_file(path: impl AsRef<Path>) -> Result<HashMap<String, UserRecord>> {
    let text = read_log_text(path)?;
    Ok(parse_auth_log(&text))
}
