//! Field extractors for authentication log lines.
//!
//! Each extractor inspects a single raw line and pulls out one field,
//! returning `None` when its pattern does not match. Matching is
//! substring-oriented, not full-line validation: a line may carry
//! arbitrary content before and after the matched fragment.

use once_cell::sync::Lazy;
use regex::Regex;

static ACCEPTED_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfor\s(\w+)").expect("regex is valid"));
static SUDO_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"sudo:\s+(\w+)").expect("regex is valid"));
static PAM_TARGET_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"USER=(\w+)").expect("regex is valid"));
static INVALID_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\buser\s(\w+)").expect("regex is valid"));
static LOGNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blogname=(\w+)").expect("regex is valid"));
static SOURCE_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfrom\s((?:[0-9]{1,3}\.){3}[0-9]{1,3})\b").expect("regex is valid"));
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3}\s*[0-9]{1,2}\s[0-9]{1,2}:[0-9]{2}:[0-9]{2}").expect("regex is valid")
});
static COMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bCOMMAND=(.+)$").expect("regex is valid"));

/// Extract the username from a line, using the pattern that fits the
/// line's category.
///
/// - `Accepted password for` → word following `for`
/// - `sudo:` → identifier following `sudo:` and whitespace
/// - `authentication failure` → value following `USER=`
/// - `for invalid user` → word following `user`
///
/// Returns `None` when no pattern matches or the category is
/// unrecognized. Note that an ordinary `Failed password for <user>` line
/// (valid user, wrong password) matches none of these and resolves to
/// `None`; the aggregator buckets such lines under the fallback identity.
pub fn extract_user(line: &str) -> Option<&str> {
    let caps = if line.contains("Accepted password for") {
        ACCEPTED_USER.captures(line)
    } else if line.contains("sudo:") {
        SUDO_USER.captures(line)
    } else if line.contains("authentication failure") {
        PAM_TARGET_USER.captures(line)
    } else if line.contains("for invalid user") {
        INVALID_USER.captures(line)
    } else {
        None
    };
    caps.and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Extract the `logname=` value from a PAM authentication-failure line.
pub fn extract_logname(line: &str) -> Option<&str> {
    LOGNAME.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Extract the first dotted-quad source address preceded by the word
/// `from`.
///
/// Octets are matched as 1-3 digit runs without a <=255 bound, so
/// malformed-but-present addresses are still recorded rather than
/// silently dropped.
pub fn extract_source_address(line: &str) -> Option<&str> {
    SOURCE_ADDRESS
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract the leading syslog timestamp (`Mon DD HH:MM:SS`), anchored at
/// the start of the line. The source format carries no year.
pub fn extract_timestamp(line: &str) -> Option<&str> {
    TIMESTAMP.find(line).map(|m| m.as_str())
}

/// Extract everything following `COMMAND=` through the end of the line.
pub fn extract_command(line: &str) -> Option<&str> {
    COMMAND.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}
