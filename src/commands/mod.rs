//! Command implementations for analyzing authentication logs.
//!
//! Each module implements one subcommand over the parsed per-user
//! aggregate:
//!
//! - [`user_summary`] - Per-user activity table with first/last seen
//! - [`failed_logins`] - Failure ranking and shared-source detection
//! - [`sudo_activity`] - Distinct sudo commands per user
//! - [`export`] - JSON/CSV dump of the aggregate

pub mod export;
pub mod failed_logins;
pub mod sudo_activity;
pub mod user_summary;
