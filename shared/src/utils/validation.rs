//! Email validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a plausible email address: local part, `@`, domain with
/// at least one dot. Deliberately loose; the delivery provider is the
/// final authority on deliverability.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Check if an email address has a valid format
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}****@{}", first, domain)
        }
        _ => "*".repeat(email.len()),
    }
}
