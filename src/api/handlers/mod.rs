//! API handlers and shared utilities.

pub mod auth;
pub mod events;
pub mod health;
pub mod inquiries;
pub mod pages;
pub mod root;

use regex::Regex;

/// Lightweight email sanity check used by the contact intake before
/// persisting data.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_simple() {
        assert!(valid_email("user@example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_at() {
        assert!(!valid_email("user.example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_domain() {
        assert!(!valid_email("user@"));
    }
}
