pub mod error_messages;
pub mod errors;
pub mod validation;
