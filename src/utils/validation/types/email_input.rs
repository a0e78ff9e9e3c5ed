//! Represents a validated email address.
//!
//! The address is trimmed, must be present and must look like
//! `local@domain.tld` without whitespace or a second `@`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::validation::{FieldValidator, ReasonCode, ValidationError, EMAIL_PATTERN};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

/// `required`, then `invalid`
pub fn email_rules() -> FieldValidator {
    FieldValidator::trimmed()
        .rule(ReasonCode::Required, |v| !v.is_empty())
        .rule(ReasonCode::Invalid, |v| EMAIL_REGEX.is_match(v))
}

/// An email address that passed [`email_rules`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    // The trimmed address
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided string.
    ///
    /// # Example
    /// ```
    /// use login_forms::utils::validation::EmailInput;
    ///
    /// let email = EmailInput::new("  user@example.com ").unwrap();
    /// assert_eq!(email.as_str(), "user@example.com");
    /// assert!(EmailInput::new("not-an-email").is_err());
    /// ```
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let email = email_rules().validate(email)?;
        Ok(Self {
            email: email.to_owned(),
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "USER@EXAMPLE.COM",
            "a@b.c",
            "user@sub.example.co.uk",
            "   user@example.com   ", // Trimmed before matching
        ];

        for email in valid_emails {
            let result = EmailInput::new(email);
            assert!(result.is_ok(), "Should accept valid email: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "userexample.com",
            "user@.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
            "user@example.",
        ];

        for email in invalid_emails {
            let result = EmailInput::new(email);
            assert_eq!(
                result.map_err(|e| e.reason),
                Err(ReasonCode::Invalid),
                "Should reject invalid email: {}",
                email
            );
        }
    }

    #[test]
    fn test_missing_email() {
        for email in ["", " ", "\t\n"] {
            assert_eq!(
                EmailInput::new(email).map_err(|e| e.reason),
                Err(ReasonCode::Required),
                "Should require an email for {:?}",
                email
            );
        }
    }

    #[test]
    fn test_display_and_asref() {
        let email = EmailInput::new("user@example.com").unwrap();

        assert_eq!(format!("{}", email), "user@example.com");

        let reference: &str = email.as_ref();
        assert_eq!(reference, "user@example.com");
    }
}
