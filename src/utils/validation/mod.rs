//! Root module for the validation system.
//! Exposes the rule pipeline, the per-field rule sets and the validated input types.

mod constants;
mod messages;
mod rules;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use messages::FieldMessages;
pub use rules::{FieldValidator, ReasonCode, ValidationError};
pub use types::{
    confirmation_rules, email_rules, name_rules, password_rules, EmailInput, NameInput,
    PasswordInput,
};
