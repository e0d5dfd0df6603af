//! Per-user activity summary.
//!
//! Aggregates an auth log and prints one row per user: event counts,
//! failure/success split, distinct source addresses, sudo command count,
//! and first/last seen timestamps with the activity span between them.
//!
//! # Usage
//!
//! ```bash
//! # Full summary, busiest users first
//! auth-audit user-summary /var/log/auth.log
//!
//! # Rotated archive, top 10 users only
//! auth-audit user-summary auth.log.2.gz --top 10
//!
//! # Single user drill-down
//! auth-audit user-summary auth.log --user alice
//! ```

use crate::authlog::parser::parse_auth_log_file;
use crate::authlog::types::UserRecord;
use crate::utils::format::{format_number, truncate};
use crate::utils::time::activity_span;
use anyhow::Result;

pub fn run(log_file: &str, top: usize, user: Option<&str>) -> Result<()> {
    eprintln!("Processing: {}", log_file);
    let records = parse_auth_log_file(log_file)?;
    eprintln!("Found {} users", format_number(records.len()));

    let mut sorted: Vec<&UserRecord> = records
        .values()
        .filter(|r| user.map_or(true, |u| r.user == u))
        .collect();
    sorted.sort_by(|a, b| {
        b.event_count()
            .cmp(&a.event_count())
            .then_with(|| a.user.cmp(&b.user))
    });

    println!("\n{}", "=".repeat(110));
    println!("Authentication Activity by User");
    println!("{}", "=".repeat(110));
    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>8} {:>6}  {:<16} {:<16} {:<12}",
        "User", "Events", "Fail", "Success", "Sources", "Sudo", "First Seen", "Last Seen", "Span"
    );
    println!("{}", "-".repeat(110));

    for record in sorted.iter().take(top) {
        let first = record.first_timestamp().unwrap_or("N/A");
        let last = record.last_timestamp().unwrap_or("N/A");
        let span = record
            .first_timestamp()
            .zip(record.last_timestamp())
            .and_then(|(f, l)| activity_span(f, l))
            .unwrap_or_else(|| "N/A".to_string());

        println!(
            "{:<20} {:>8} {:>8} {:>8} {:>8} {:>6}  {:<16} {:<16} {:<12}",
            truncate(&record.user, 20),
            format_number(record.event_count()),
            format_number(record.failure_count()),
            format_number(record.success_count()),
            format_number(record.source_addresses.len()),
            format_number(record.commands.len()),
            first,
            last,
            span
        );
    }

    println!("{}", "=".repeat(110));

    let total_events: usize = records.values().map(UserRecord::event_count).sum();
    let total_failures: usize = records.values().map(UserRecord::failure_count).sum();
    println!("Total Users: {}", format_number(records.len()));
    println!("Total Events: {}", format_number(total_events));
    println!("Total Failures: {}", format_number(total_failures));

    Ok(())
}
