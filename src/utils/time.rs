//! Syslog timestamp helpers.
//!
//! Auth log timestamps carry no year (`Mon DD HH:MM:SS`), so values are
//! interpreted against a caller-supplied year. Spans computed here are
//! only meaningful within a single log file and cannot span a year
//! boundary.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// Year injected when interpreting timestamps for span calculations.
/// Arbitrary leap year; it cancels out of same-year differences.
const REFERENCE_YEAR: i32 = 2000;

/// Parse a syslog-style timestamp (`Mon DD HH:MM:SS`) with an explicit
/// year.
pub fn parse_syslog_timestamp(ts: &str, year: i32) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{year} {ts}"), "%Y %b %e %H:%M:%S")
        .with_context(|| format!("Failed to parse timestamp: {ts}"))
}

/// Human-readable span between a user's first and last activity stamps.
///
/// `None` when either stamp fails to parse or the pair would wrap a year
/// boundary (last before first with no year to disambiguate).
pub fn activity_span(first: &str, last: &str) -> Option<String> {
    let start = parse_syslog_timestamp(first, REFERENCE_YEAR).ok()?;
    let end = parse_syslog_timestamp(last, REFERENCE_YEAR).ok()?;
    let seconds = end.signed_duration_since(start).num_seconds();
    if seconds < 0 {
        return None;
    }
    Some(duration_human(seconds))
}

/// Format a duration in seconds as a coarse human-readable string.
pub fn duration_human(seconds: i64) -> String {
    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        format!("{} minutes", seconds / 60)
    } else if seconds < 86400 {
        format!("{:.1} hours", seconds as f64 / 3600.0)
    } else {
        format!("{:.1} days", seconds as f64 / 86400.0)
    }
}
