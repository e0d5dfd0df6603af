//! Number and text formatting helpers for report output.

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use auth_audit_tools::utils::format::format_number;
///
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncates a value to fit a fixed-width table column, marking the cut
/// with `...`. Values at or under `width` characters pass through
/// unchanged. Cuts land on character boundaries, so multi-byte values
/// (non-ASCII usernames, sudo command arguments) are safe.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.extend("...".chars().take(width - keep));
    out
}
