//! Core authentication log parsing and aggregation.
//!
//! This module turns raw auth log text (SSH password events, PAM
//! authentication failures, sudo activity) into per-user records.
//!
//! ## Key Components
//!
//! - [`types`] - The [`UserRecord`](types::UserRecord) accumulator and
//!   line classification
//! - [`extract`] - Stateless per-line field extractors
//! - [`parser`] - The aggregation pass over the full log text
//!
//! ## Example
//!
//! ```
//! use auth_audit_tools::authlog::parser::parse_auth_log;
//!
//! let text = "Jan 2 10:00:00 host sshd[1]: Accepted password for alice from 10.0.0.1 port 1234 ssh2";
//! let records = parse_auth_log(text);
//! assert_eq!(records["alice"].source_addresses, vec!["10.0.0.1"]);
//! ```

pub mod extract;
pub mod parser;
pub mod types;
