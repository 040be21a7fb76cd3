//! Field validators
//!
//! Pure predicates over a single credential field. None of them can fail;
//! malformed input simply yields `false`.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Local part, `@`, domain, `.`, suffix. No segment may hold whitespace or `@`.
/// U+FEFF is not in the regex crate's `\s` and is excluded explicitly.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("EMAIL_PATTERN is a valid regex pattern")
});

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z]{{{},}}$", MIN_USERNAME_LENGTH))
        .expect("USERNAME_PATTERN is a valid regex pattern")
});

// The regex crate has no lookahead, so the character-class requirements of a
// password are checked separately in `validate_password`.
static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9]{{{},}}$", MIN_PASSWORD_LENGTH))
        .expect("PASSWORD_PATTERN is a valid regex pattern")
});

/// Returns true if `email` has the shape `local@domain.suffix`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if `username` is at least three ASCII letters and nothing else.
pub fn validate_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// Returns true if `password` is at least eight ASCII letters or digits and
/// holds at least one uppercase letter, one lowercase letter and one digit.
pub fn validate_password(password: &str) -> bool {
    PASSWORD_PATTERN.is_match(password)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
