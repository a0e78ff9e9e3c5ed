//! Constants used throughout the validation system

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Local part, `@`, domain, `.`, top level. No whitespace anywhere, a single `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Names are made of ASCII letters only
pub const NAME_PATTERN: &str = r"^[A-Za-z]+$";
