//! Failed login analysis with shared-source detection.
//!
//! Ranks users by authentication failures and surfaces source addresses
//! that attempted multiple accounts - the usual shape of a password
//! spray or brute-force run.
//!
//! # Usage
//!
//! ```bash
//! # All users with failures
//! auth-audit failed-logins /var/log/auth.log
//!
//! # Only users with 50+ failures
//! auth-audit failed-logins auth.log --min-failures 50
//! ```
//!
//! # Output
//!
//! Two sections:
//! - Users ranked by failure count, with their distinct source addresses
//! - Source addresses seen across more than one account

use crate::authlog::parser::parse_auth_log_file;
use crate::authlog::types::UserRecord;
use crate::utils::format::{format_number, truncate};
use anyhow::Result;
use std::collections::HashMap;

pub fn run(log_file: &str, min_failures: usize, top: usize) -> Result<()> {
    eprintln!("Processing: {}", log_file);
    let records = parse_auth_log_file(log_file)?;

    let mut failing: Vec<&UserRecord> = records
        .values()
        .filter(|r| r.failure_count() >= min_failures && r.failure_count() > 0)
        .collect();
    failing.sort_by(|a, b| {
        b.failure_count()
            .cmp(&a.failure_count())
            .then_with(|| a.user.cmp(&b.user))
    });

    println!("\n{}", "=".repeat(100));
    println!("Failed Logins by User (minimum {} failures)", min_failures);
    println!("{}", "=".repeat(100));
    println!(
        "{:<20} {:>10} {:>10}  {:<50}",
        "User", "Failures", "Sources", "Source Addresses"
    );
    println!("{}", "-".repeat(100));

    for record in failing.iter().take(top) {
        println!(
            "{:<20} {:>10} {:>10}  {:<50}",
            truncate(&record.user, 20),
            format_number(record.failure_count()),
            format_number(record.source_addresses.len()),
            truncate(&record.source_addresses.join(" "), 50)
        );
    }

    if failing.is_empty() {
        println!("No users at or above the failure threshold.");
    }

    // Addresses observed against more than one account.
    let mut users_by_source: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in records.values() {
        for addr in &record.source_addresses {
            users_by_source
                .entry(addr.as_str())
                .or_default()
                .push(record.user.as_str());
        }
    }

    let mut shared: Vec<(&str, Vec<&str>)> = users_by_source
        .into_iter()
        .filter(|(_, users)| users.len() > 1)
        .collect();
    shared.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));

    println!("\n{}", "-".repeat(100));
    println!("Source Addresses Seen Across Multiple Accounts");
    println!("{}", "-".repeat(100));

    if shared.is_empty() {
        println!("None.");
    } else {
        println!("{:<18} {:>8}  {:<60}", "Source", "Users", "Accounts");
        for (addr, mut users) in shared.into_iter().take(top) {
            users.sort_unstable();
            println!(
                "{:<18} {:>8}  {:<60}",
                addr,
                format_number(users.len()),
                truncate(&users.join(" "), 60)
            );
        }
    }

    println!("{}", "=".repeat(100));

    Ok(())
}
