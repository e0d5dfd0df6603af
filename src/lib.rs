//! # Auth Audit Tools
//!
//! Command-line tools for analyzing system authentication logs: SSH
//! password events, PAM authentication failures, and sudo activity,
//! aggregated per user.
//!
//! ## Overview
//!
//! The core is a parsing engine that classifies each log line into one
//! of four categories (successful password authentication, failed
//! password authentication, generic PAM failure, privilege escalation),
//! extracts the relevant fields, and folds everything into one record
//! per user identity. A small set of CLI commands renders reports over
//! that aggregate.
//!
//! Input is a single auth log file, plain text or gzip-compressed
//! (rotated archives like `auth.log.2.gz` work directly). The whole
//! file is materialized in memory and processed in one pass.
//!
//! ## Architecture
//!
//! - [`authlog`] - Core parsing: field extractors, line classification,
//!   and the per-user aggregation pass
//! - [`commands`] - Analysis command implementations
//! - [`utils`] - Shared utilities (file reading, formatting, timestamps)
//!
//! ## Example Usage
//!
//! ```bash
//! # Per-user overview
//! auth-audit user-summary /var/log/auth.log
//!
//! # Brute-force hunting
//! auth-audit failed-logins auth.log.1.gz --min-failures 20
//!
//! # Who ran what through sudo
//! auth-audit sudo-activity auth.log
//!
//! # Machine-readable export
//! auth-audit export auth.log --output users.json
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use auth_audit_tools::authlog::parser::parse_auth_log;
//!
//! let text = "Jan 2 10:00:00 host sshd[1]: Accepted password for alice from 10.0.0.1 port 1234 ssh2";
//! let records = parse_auth_log(text);
//! assert!(records["alice"].success_lines.len() == 1);
//! ```

pub mod authlog;
pub mod commands;
pub mod utils;
