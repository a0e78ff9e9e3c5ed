//! Rule sets of every field kind and the validated input types built on them

mod email_input;
mod name_input;
mod password_input;

// Re-export commonly used types and functions
pub use email_input::{email_rules, EmailInput};
pub use name_input::{name_rules, NameInput};
pub use password_input::{confirmation_rules, password_rules, PasswordInput};
