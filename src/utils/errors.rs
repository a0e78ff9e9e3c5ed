//! System faults. Rejected user input is not an error and never ends up here.

use std::io;
use thiserror::Error;

/// Failure to reach or use an element of the page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("No element with id `{0}` on the page")]
    MissingElement(String),
    #[error("Element `{id}` is not {expected}")]
    WrongKind { id: String, expected: &'static str },
    #[error("No handler attached to `{0}`")]
    Unbound(String),
}

impl PageError {
    pub fn wrong_kind(id: &str, expected: &'static str) -> Self {
        Self::WrongKind {
            id: id.to_owned(),
            expected,
        }
    }
}

/// Failure to load the forms configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown log level `{0}`")]
    LogLevel(String),
}
