//! Data structures for aggregated authentication activity.
//!
//! A [`UserRecord`] accumulates every log line attributed to one user
//! identity, partitioned by outcome, plus the distinct source addresses
//! and sudo commands observed for that user.

use serde::Serialize;

use super::extract::extract_timestamp;

/// Fallback identity for lines whose username cannot be resolved.
///
/// Generic authentication failures without a `logname=` field land here,
/// as do failed-password lines for valid users (no extraction pattern
/// covers them). Unrelated failures can therefore share this bucket.
pub const UNKNOWN_USER: &str = "unknown";

/// The four mutually exclusive line categories, in priority order.
///
/// A line matches at most one category; the first substring hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Accepted password for` - successful password authentication.
    AcceptedPassword,
    /// `Failed password for` - rejected password authentication.
    FailedPassword,
    /// `:auth): authentication failure;` - generic PAM failure.
    AuthFailure,
    /// `sudo:` - privilege escalation. Not an authentication outcome.
    Sudo,
}

impl LineKind {
    /// Classify a raw line, or `None` when it matches no category.
    pub fn classify(line: &str) -> Option<Self> {
        if line.contains("Accepted password for") {
            Some(Self::AcceptedPassword)
        } else if line.contains("Failed password for") {
            Some(Self::FailedPassword)
        } else if line.contains(":auth): authentication failure;") {
            Some(Self::AuthFailure)
        } else if line.contains("sudo:") {
            Some(Self::Sudo)
        } else {
            None
        }
    }
}

/// Per-user accumulation record.
///
/// Created lazily on the first line attributed to a user and never
/// removed during a parse pass. Lines are stored in encounter order;
/// `failure_lines` and `success_lines` are ordered subsequences of
/// `all_lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Identity the events are grouped under.
    pub user: String,
    /// Every line attributed to this user, in encounter order.
    pub all_lines: Vec<String>,
    /// Lines recording a failed authentication.
    pub failure_lines: Vec<String>,
    /// Lines recording a successful authentication.
    pub success_lines: Vec<String>,
    /// Distinct source addresses, insertion order preserved.
    pub source_addresses: Vec<String>,
    /// Distinct sudo commands, insertion order preserved.
    pub commands: Vec<String>,
}

impl UserRecord {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            all_lines: Vec::new(),
            failure_lines: Vec::new(),
            success_lines: Vec::new(),
            source_addresses: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Timestamp of the first line that yields one, scanning `all_lines`
    /// in order. `None` when the record is empty or nothing parses.
    pub fn first_timestamp(&self) -> Option<&str> {
        self.all_lines.iter().find_map(|line| extract_timestamp(line))
    }

    /// Timestamp of the last line in `all_lines`, if it parses.
    pub fn last_timestamp(&self) -> Option<&str> {
        self.all_lines.last().and_then(|line| extract_timestamp(line))
    }

    pub fn event_count(&self) -> usize {
        self.all_lines.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failure_lines.len()
    }

    pub fn success_count(&self) -> usize {
        self.success_lines.len()
    }

    /// Record a source address, skipping duplicates.
    pub(crate) fn record_source_address(&mut self, addr: &str) {
        if !self.source_addresses.iter().any(|a| a == addr) {
            self.source_addresses.push(addr.to_string());
        }
    }

    /// Record a sudo command, skipping duplicates.
    pub(crate) fn record_command(&mut self, command: &str) {
        if !self.commands.iter().any(|c| c == command) {
            self.commands.push(command.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(
            LineKind::classify("sshd[1]: Accepted password for alice from 10.0.0.1"),
            Some(LineKind::AcceptedPassword)
        );
        assert_eq!(
            LineKind::classify("sshd[1]: Failed password for bob from 10.0.0.2"),
            Some(LineKind::FailedPassword)
        );
        assert_eq!(
            LineKind::classify("sshd(pam_unix)[2]: pam_unix(sshd:auth): authentication failure; logname= uid=0"),
            Some(LineKind::AuthFailure)
        );
        assert_eq!(
            LineKind::classify("sudo:  bob : COMMAND=/bin/ls"),
            Some(LineKind::Sudo)
        );
        assert_eq!(LineKind::classify("kernel: boot complete"), None);
    }

    #[test]
    fn test_sudo_auth_failure_classified_as_auth_failure() {
        // Contains both "sudo:" and the PAM failure marker; the failure
        // category is checked first and wins.
        let line = "sudo: pam_unix(sudo:auth): authentication failure; logname=bob uid=1000 USER=root";
        assert_eq!(LineKind::classify(line), Some(LineKind::AuthFailure));
    }

    #[test]
    fn test_source_address_dedup() {
        let mut record = UserRecord::new("alice");
        record.record_source_address("10.0.0.1");
        record.record_source_address("10.0.0.2");
        record.record_source_address("10.0.0.1");
        assert_eq!(record.source_addresses, vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_command_dedup() {
        let mut record = UserRecord::new("bob");
        record.record_command("/bin/ls");
        record.record_command("/bin/ls");
        record.record_command("/usr/bin/vim /etc/hosts");
        assert_eq!(record.commands, vec!["/bin/ls", "/usr/bin/vim /etc/hosts"]);
    }

    #[test]
    fn test_first_and_last_timestamp() {
        let mut record = UserRecord::new("alice");
        record.all_lines.push("Jan 1 00:00:01 host sshd[1]: a".to_string());
        record.all_lines.push("Jan 1 00:00:05 host sshd[1]: b".to_string());
        assert_eq!(record.first_timestamp(), Some("Jan 1 00:00:01"));
        assert_eq!(record.last_timestamp(), Some("Jan 1 00:00:05"));
    }

    #[test]
    fn test_first_timestamp_skips_unparseable_lines() {
        let mut record = UserRecord::new("alice");
        record.all_lines.push("no timestamp here".to_string());
        record.all_lines.push("Jan 2 03:04:05 host sshd[1]: a".to_string());
        assert_eq!(record.first_timestamp(), Some("Jan 2 03:04:05"));
    }

    #[test]
    fn test_timestamps_empty_record() {
        let record = UserRecord::new("alice");
        assert_eq!(record.first_timestamp(), None);
        assert_eq!(record.last_timestamp(), None);
    }
}
