//! Password rules and the validated password type.
//!
//! Passwords are checked exactly as typed: no trimming, and the confirmation
//! must be byte-for-byte identical.

use std::fmt;

use crate::utils::validation::{FieldValidator, ReasonCode, ValidationError, MIN_PASSWORD_LENGTH};

/// `required`, `minlength`, `uppercase`, `lowercase`, `digit`, `special`
pub fn password_rules() -> FieldValidator {
    FieldValidator::raw()
        .rule(ReasonCode::Required, |v| !v.is_empty())
        .rule(ReasonCode::MinLength, |v| v.chars().count() >= MIN_PASSWORD_LENGTH)
        .rule(ReasonCode::Uppercase, |v| v.chars().any(|c| c.is_ascii_uppercase()))
        .rule(ReasonCode::Lowercase, |v| v.chars().any(|c| c.is_ascii_lowercase()))
        .rule(ReasonCode::Digit, |v| v.chars().any(|c| c.is_ascii_digit()))
        .rule(ReasonCode::Special, |v| v.chars().any(|c| !c.is_ascii_alphanumeric()))
}

/// `mismatch` unless the value equals `expected`. There is no required
/// check: an empty confirmation of an empty password passes.
pub fn confirmation_rules(expected: &str) -> FieldValidator {
    let expected = expected.to_owned();
    FieldValidator::raw().rule(ReasonCode::Mismatch, move |v| v == expected)
}

/// A password that passed [`password_rules`]. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordInput(String);

impl PasswordInput {
    pub fn new(password: &str) -> Result<Self, ValidationError> {
        let password = password_rules().validate(password)?;
        Ok(Self(password.to_owned()))
    }

    /// Validates `password`, then checks that `confirmation` repeats it
    pub fn confirmed(password: &str, confirmation: &str) -> Result<Self, ValidationError> {
        let accepted = Self::new(password)?;
        confirmation_rules(password).validate(confirmation)?;
        Ok(accepted)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordInput(********)")
    }
}

impl fmt::Display for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}
