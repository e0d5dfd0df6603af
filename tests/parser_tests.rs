//! Aggregation behavior over in-memory log text.

use auth_audit_tools::authlog::parser::parse_auth_log;
use auth_audit_tools::authlog::types::UNKNOWN_USER;

const SAMPLE_LOG: &str = "\
Jan 2 10:00:00 host sshd[100]: Accepted password for alice from 10.0.0.1 port 1234 ssh2
Jan 2 10:00:05 host sshd[101]: Failed password for invalid user admin from 203.0.113.9 port 2222 ssh2
Jan 2 10:00:06 host sshd[101]: Failed password for invalid user admin from 203.0.113.9 port 2223 ssh2
Jan 2 10:00:10 host sudo:   bob : TTY=pts/0 ; PWD=/home/bob ; USER=root ; COMMAND=/bin/ls
Jan 2 10:00:11 host sudo:   bob : TTY=pts/0 ; PWD=/home/bob ; USER=root ; COMMAND=/bin/ls
Jan 2 10:00:12 host sudo:   bob : TTY=pts/0 ; PWD=/home/bob ; USER=root ; COMMAND=/usr/bin/vim /etc/hosts
Jan 2 10:00:20 host sshd[102]: Accepted password for alice from 10.0.0.1 port 1300 ssh2
Jan 2 10:00:30 host su: pam_unix(su:auth): authentication failure; logname=carol uid=1000 euid=0 tty=pts/1
Jan 2 10:00:40 host kernel: audit: unrelated noise
";

#[test]
fn test_success_lines_partitioned_with_source() {
    let records = parse_auth_log(SAMPLE_LOG);
    let alice = &records["alice"];

    assert_eq!(alice.success_lines.len(), 2);
    assert_eq!(alice.all_lines.len(), 2);
    assert!(alice.failure_lines.is_empty());
    for line in &alice.success_lines {
        assert!(alice.all_lines.contains(line));
    }
    assert_eq!(alice.source_addresses, vec!["10.0.0.1"]);
}

#[test]
fn test_invalid_user_failures_grouped_under_that_user() {
    let records = parse_auth_log(SAMPLE_LOG);
    let admin = &records["admin"];

    assert_eq!(admin.failure_lines.len(), 2);
    assert!(admin.success_lines.is_empty());
    for line in &admin.failure_lines {
        assert!(admin.all_lines.contains(line));
    }
    // Two attempts from one address, recorded once.
    assert_eq!(admin.source_addresses, vec!["203.0.113.9"]);
}

#[test]
fn test_failed_password_valid_user_falls_into_unknown_bucket() {
    let text =
        "Jan 2 11:00:00 host sshd[103]: Failed password for bob from 198.51.100.7 port 4000 ssh2";
    let records = parse_auth_log(text);

    // No extraction pattern covers a failed password for a known user.
    assert!(!records.contains_key("bob"));
    let bucket = &records[UNKNOWN_USER];
    assert_eq!(bucket.failure_lines.len(), 1);
    assert_eq!(bucket.source_addresses, vec!["198.51.100.7"]);
}

#[test]
fn test_sudo_commands_deduplicated() {
    let records = parse_auth_log(SAMPLE_LOG);
    let bob = &records["bob"];

    assert_eq!(bob.commands, vec!["/bin/ls", "/usr/bin/vim /etc/hosts"]);
    assert_eq!(bob.all_lines.len(), 3);
    assert!(bob.success_lines.is_empty());
    assert!(bob.failure_lines.is_empty());
}

#[test]
fn test_generic_failure_uses_logname() {
    let records = parse_auth_log(SAMPLE_LOG);
    let carol = &records["carol"];

    assert_eq!(carol.failure_lines.len(), 1);
    assert_eq!(carol.all_lines.len(), 1);
}

#[test]
fn test_generic_failure_without_logname_uses_unknown_bucket() {
    let text = "Jan 3 09:00:00 host sshd[200]: pam_unix(sshd:auth): authentication failure; logname= uid=0 euid=0 tty=ssh ruser= rhost=203.0.113.5";
    let records = parse_auth_log(text);

    let bucket = &records[UNKNOWN_USER];
    assert_eq!(bucket.failure_lines.len(), 1);
}

#[test]
fn test_sshd_auth_failure_prefers_target_user_over_logname() {
    let text = "Jan 3 09:10:00 host sshd[201]: pam_unix(sshd:auth): authentication failure; logname=carol uid=0 euid=0 tty=ssh USER=root from 203.0.113.5";
    let records = parse_auth_log(text);

    assert!(records.contains_key("root"));
    assert!(!records.contains_key("carol"));
    // The sshd branch also records the source address.
    assert_eq!(records["root"].source_addresses, vec!["203.0.113.5"]);
}

#[test]
fn test_non_sshd_generic_failure_does_not_record_source() {
    let text = "Jan 3 09:20:00 host su: pam_unix(su:auth): authentication failure; logname=carol uid=1000 tty=pts/1 from 10.9.9.9";
    let records = parse_auth_log(text);

    assert!(records["carol"].source_addresses.is_empty());
}

#[test]
fn test_sudo_pam_failure_classified_as_failure_not_sudo() {
    // Contains both "sudo:" and the PAM failure marker; the failure
    // category wins, so no command is recorded.
    let text = "Jan 3 09:30:00 host sudo: pam_unix(sudo:auth): authentication failure; logname=bob uid=1000 euid=0 tty=pts/0 ruser=bob rhost= USER=root";
    let records = parse_auth_log(text);

    let root = &records["root"];
    assert_eq!(root.failure_lines.len(), 1);
    assert!(root.commands.is_empty());
}

#[test]
fn test_first_and_last_timestamps_from_all_lines() {
    let text = "\
Jan 1 00:00:01 host sshd[1]: Accepted password for alice from 10.0.0.1 port 1 ssh2
Jan 1 00:00:05 host sshd[2]: Accepted password for alice from 10.0.0.2 port 2 ssh2
";
    let records = parse_auth_log(text);
    let alice = &records["alice"];

    assert_eq!(alice.first_timestamp(), Some("Jan 1 00:00:01"));
    assert_eq!(alice.last_timestamp(), Some("Jan 1 00:00:05"));
}

#[test]
fn test_loose_ip_validation_preserved() {
    let text =
        "Jan 2 12:00:00 host sshd[104]: Accepted password for alice from 999.300.1.2 port 5 ssh2";
    let records = parse_auth_log(text);

    assert_eq!(records["alice"].source_addresses, vec!["999.300.1.2"]);
}

#[test]
fn test_idempotence() {
    let first = parse_auth_log(SAMPLE_LOG);
    let second = parse_auth_log(SAMPLE_LOG);
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    assert!(parse_auth_log("").is_empty());
}
