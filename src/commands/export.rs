//! Export the per-user aggregate to JSON or CSV.
//!
//! JSON carries the full records (every line, address, and command);
//! CSV is one summary row per user for spreadsheet work.
//!
//! # Usage
//!
//! ```bash
//! # Full records as JSON on stdout
//! auth-audit export auth.log
//!
//! # Summary CSV to a file
//! auth-audit export auth.log --output users.csv --format csv
//! ```

use crate::authlog::parser::parse_auth_log_file;
use crate::authlog::types::UserRecord;
use crate::utils::format::format_number;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

/// One CSV row per user.
#[derive(Debug, Serialize)]
struct UserSummaryRow<'a> {
    user: &'a str,
    events: usize,
    failures: usize,
    successes: usize,
    first_seen: &'a str,
    last_seen: &'a str,
    source_addresses: String,
    commands: String,
}

pub fn run(log_file: &str, output: Option<&str>, format: &str) -> Result<()> {
    eprintln!("Processing: {}", log_file);
    let records = parse_auth_log_file(log_file)?;
    eprintln!("Exporting {} users as {}", format_number(records.len()), format);

    // Stable output ordering regardless of hash layout.
    let sorted: BTreeMap<&str, &UserRecord> = records
        .iter()
        .map(|(user, record)| (user.as_str(), record))
        .collect();

    match format {
        "json" => {
            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create output file: {}", path))?,
                ),
                None => Box::new(std::io::stdout()),
            };
            serde_json::to_writer_pretty(writer, &sorted)
                .context("Failed to serialize records to JSON")?;
        }
        "csv" => {
            let writer: Box<dyn Write> = match output {
                Some(path) => Box::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create output file: {}", path))?,
                ),
                None => Box::new(std::io::stdout()),
            };
            let mut csv_writer = csv::Writer::from_writer(writer);
            for record in sorted.values() {
                csv_writer.serialize(UserSummaryRow {
                    user: &record.user,
                    events: record.event_count(),
                    failures: record.failure_count(),
                    successes: record.success_count(),
                    first_seen: record.first_timestamp().unwrap_or(""),
                    last_seen: record.last_timestamp().unwrap_or(""),
                    source_addresses: record.source_addresses.join(" "),
                    commands: record.commands.join(" "),
                })?;
            }
            csv_writer.flush()?;
        }
        other => bail!("Unsupported format: {} (expected json or csv)", other),
    }

    if let Some(path) = output {
        eprintln!("Wrote {}", path);
    }

    Ok(())
}
