//! Sudo command usage by user.
//!
//! Lists the distinct commands each user ran through sudo, in the order
//! they were first observed.
//!
//! # Usage
//!
//! ```bash
//! # Everyone who used sudo
//! auth-audit sudo-activity /var/log/auth.log
//!
//! # One user's command history
//! auth-audit sudo-activity auth.log --user bob
//! ```

use crate::authlog::parser::parse_auth_log_file;
use crate::authlog::types::UserRecord;
use crate::utils::format::format_number;
use anyhow::Result;

pub fn run(log_file: &str, user: Option<&str>) -> Result<()> {
    eprintln!("Processing: {}", log_file);
    let records = parse_auth_log_file(log_file)?;

    let mut sudoers: Vec<&UserRecord> = records
        .values()
        .filter(|r| !r.commands.is_empty())
        .filter(|r| user.map_or(true, |u| r.user == u))
        .collect();
    sudoers.sort_by(|a, b| {
        b.commands
            .len()
            .cmp(&a.commands.len())
            .then_with(|| a.user.cmp(&b.user))
    });

    println!("\n{}", "=".repeat(80));
    println!("Sudo Activity");
    println!("{}", "=".repeat(80));

    if sudoers.is_empty() {
        println!("No sudo activity recorded.");
    }

    for record in &sudoers {
        println!(
            "\n{} ({} distinct commands)",
            record.user,
            format_number(record.commands.len())
        );
        println!("{}", "-".repeat(80));
        for command in &record.commands {
            println!("  {}", command);
        }
    }

    println!("{}", "=".repeat(80));

    Ok(())
}
