//! Generic rule pipeline shared by every field.
//!
//! A [`FieldValidator`] is an ordered list of predicates, each paired with the
//! reason code reported when it fails. Rules are evaluated in order and the
//! first failing one decides the outcome.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Identifies which rule rejected a value. The text form is the suffix of the
/// `data-msg-*` attribute holding the matching message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReasonCode {
    Required,
    Invalid,
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Mismatch,
}

/// A value rejected by a [`FieldValidator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input rejected: {reason}")]
pub struct ValidationError {
    pub reason: ReasonCode,
}

type Check = Box<dyn Fn(&str) -> bool>;

struct Rule {
    reason: ReasonCode,
    check: Check,
}

pub struct FieldValidator {
    trim: bool,
    rules: Vec<Rule>,
}

impl FieldValidator {
    /// Validator working on the value with surrounding whitespace removed
    pub fn trimmed() -> Self {
        Self {
            trim: true,
            rules: Vec::new(),
        }
    }

    /// Validator working on the value exactly as typed
    pub fn raw() -> Self {
        Self {
            trim: false,
            rules: Vec::new(),
        }
    }

    /// Appends a rule. `check` returns true when the value passes.
    pub fn rule(mut self, reason: ReasonCode, check: impl Fn(&str) -> bool + 'static) -> Self {
        self.rules.push(Rule {
            reason,
            check: Box::new(check),
        });
        self
    }

    /// Runs the rules in order and returns the value they were applied to.
    pub fn validate<'a>(&self, input: &'a str) -> Result<&'a str, ValidationError> {
        let value = if self.trim { input.trim() } else { input };

        match self.rules.iter().find(|rule| !(rule.check)(value)) {
            Some(rule) => Err(ValidationError {
                reason: rule.reason,
            }),
            None => Ok(value),
        }
    }

    /// Reason codes this validator can report, in evaluation order
    pub fn reasons(&self) -> impl Iterator<Item = ReasonCode> + '_ {
        self.rules.iter().map(|rule| rule.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_first_failure_wins() {
        let validator = FieldValidator::raw()
            .rule(ReasonCode::Required, |v| !v.is_empty())
            .rule(ReasonCode::Digit, |v| v.chars().any(|c| c.is_ascii_digit()))
            .rule(ReasonCode::Uppercase, |v| v.chars().any(|c| c.is_ascii_uppercase()));

        assert_eq!(validator.validate("").unwrap_err().reason, ReasonCode::Required);
        assert_eq!(validator.validate("abc").unwrap_err().reason, ReasonCode::Digit);
        assert_eq!(validator.validate("abc1").unwrap_err().reason, ReasonCode::Uppercase);
        assert_eq!(validator.validate("Abc1"), Ok("Abc1"));
    }

    #[test]
    fn test_trimmed_and_raw() {
        let trimmed = FieldValidator::trimmed().rule(ReasonCode::Required, |v| !v.is_empty());
        let raw = FieldValidator::raw().rule(ReasonCode::Required, |v| !v.is_empty());

        assert!(trimmed.validate("   ").is_err());
        assert_eq!(trimmed.validate("  a  "), Ok("a"));
        assert_eq!(raw.validate("   "), Ok("   "));
    }

    #[test]
    fn test_no_rules_accepts_everything() {
        assert!(FieldValidator::raw().validate("").is_ok());
    }

    #[test]
    fn test_reason_code_names() {
        let cases = vec![
            (ReasonCode::Required, "required"),
            (ReasonCode::Invalid, "invalid"),
            (ReasonCode::MinLength, "minlength"),
            (ReasonCode::Uppercase, "uppercase"),
            (ReasonCode::Lowercase, "lowercase"),
            (ReasonCode::Digit, "digit"),
            (ReasonCode::Special, "special"),
            (ReasonCode::Mismatch, "mismatch"),
        ];

        for (reason, name) in cases {
            assert_eq!(reason.to_string(), name);
            assert_eq!(ReasonCode::from_str(name), Ok(reason));
            assert_eq!(serde_yaml::to_string(&reason).unwrap().trim(), name);
        }
    }

    #[test]
    fn test_reasons_in_order() {
        let validator = FieldValidator::trimmed()
            .rule(ReasonCode::Required, |v| !v.is_empty())
            .rule(ReasonCode::Invalid, |_| true);
        let reasons: Vec<_> = validator.reasons().collect();
        assert_eq!(reasons, vec![ReasonCode::Required, ReasonCode::Invalid]);
    }
}
