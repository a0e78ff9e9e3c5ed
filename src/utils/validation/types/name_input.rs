//! Represents a validated first or last name.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::validation::{FieldValidator, ReasonCode, ValidationError, NAME_PATTERN};

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("Failed to compile name regex"));

/// `required`, then `invalid` unless the trimmed value is ASCII letters only
pub fn name_rules() -> FieldValidator {
    FieldValidator::trimmed()
        .rule(ReasonCode::Required, |v| !v.is_empty())
        .rule(ReasonCode::Invalid, |v| NAME_REGEX.is_match(v))
}

/// A name that passed [`name_rules`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameInput {
    name: String,
}

impl NameInput {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name_rules().validate(name)?;
        Ok(Self {
            name: name.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AsRef<str> for NameInput {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
