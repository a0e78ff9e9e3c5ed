//! Forms configuration, read from a YAML file.
//!
//! Every key is optional. A missing file means "all defaults"; a file that
//! exists but cannot be parsed is an error.

use std::{
    collections::BTreeMap,
    env,
    fs::File,
    io::ErrorKind::NotFound,
    path::{Path, PathBuf},
};

use log::{info, LevelFilter};
use serde::Deserialize;

use crate::consts::{self, login, signup};
use crate::utils::error_messages::{LOGIN_SUCCESS, SIGNUP_SUCCESS};
use crate::utils::errors::ConfigError;
use crate::utils::validation::{FieldMessages, ReasonCode};

/// How a form runs its validators on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Every field is validated so all errors show at once
    ValidateAll,
    /// Fields are validated in order until one fails
    StopAtFirstFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub submit_policy: SubmitPolicy,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct FormsConfig {
    pub log_file: PathBuf,
    pub log_level: String,
    pub login: FormSettings,
    pub signup: FormSettings,
    messages: BTreeMap<String, FieldMessages>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log_file: Option<PathBuf>,
    log_level: Option<String>,
    login: RawFormSettings,
    signup: RawFormSettings,
    messages: BTreeMap<String, FieldMessages>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawFormSettings {
    submit_policy: Option<SubmitPolicy>,
    success_message: Option<String>,
}

impl RawFormSettings {
    fn resolve(self, policy: SubmitPolicy, message: &str) -> FormSettings {
        FormSettings {
            submit_policy: self.submit_policy.unwrap_or(policy),
            success_message: self.success_message.unwrap_or_else(|| message.to_owned()),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl From<RawConfig> for FormsConfig {
    fn from(raw: RawConfig) -> Self {
        let mut messages = default_messages();
        for (field, overrides) in &raw.messages {
            messages.entry(field.clone()).or_default().merge(overrides);
        }

        Self {
            log_file: raw
                .log_file
                .unwrap_or_else(|| PathBuf::from(consts::DEFAULT_LOG_FILE)),
            log_level: raw
                .log_level
                .unwrap_or_else(|| consts::DEFAULT_LOG_LEVEL.to_owned()),
            login: raw.login.resolve(SubmitPolicy::ValidateAll, LOGIN_SUCCESS),
            signup: raw
                .signup
                .resolve(SubmitPolicy::StopAtFirstFailure, SIGNUP_SUCCESS),
            messages,
        }
    }
}

impl FormsConfig {
    /// Reads the file named by `LOGIN_FORMS_CONFIG` (`.env` honoured), or
    /// `./forms.yaml` when the variable is not set.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let path = env::var(consts::CONFIG_ENV)
            .unwrap_or_else(|_| consts::DEFAULT_CONFIG_PATH.to_owned());
        Self::open(Path::new(&path))
    }

    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        match File::open(path) {
            Ok(f) => {
                let raw: RawConfig = serde_yaml::from_reader(f)?;
                info!("Loaded forms configuration from {}", path.display());
                Ok(raw.into())
            }

            Err(not_found) if not_found.kind() == NotFound => {
                info!(
                    "No configuration at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }

            Err(other) => Err(other.into()),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        Ok(raw.into())
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Message templates of the field with id `field`
    pub fn messages(&self, field: &str) -> FieldMessages {
        self.messages.get(field).cloned().unwrap_or_default()
    }
}

fn email_messages() -> FieldMessages {
    FieldMessages::new()
        .with(ReasonCode::Required, "Email is required.")
        .with(ReasonCode::Invalid, "Please enter a valid email address.")
}

fn password_messages() -> FieldMessages {
    FieldMessages::new()
        .with(ReasonCode::Required, "Password is required.")
        .with(
            ReasonCode::MinLength,
            "Password must be at least {{min_length}} characters long.",
        )
        .with(ReasonCode::Uppercase, "Password must contain an uppercase letter.")
        .with(ReasonCode::Lowercase, "Password must contain a lowercase letter.")
        .with(ReasonCode::Digit, "Password must contain a digit.")
        .with(ReasonCode::Special, "Password must contain a special character.")
}

fn name_messages(label: &str) -> FieldMessages {
    FieldMessages::new()
        .with(ReasonCode::Required, format!("{label} is required."))
        .with(ReasonCode::Invalid, format!("{label} may only contain letters."))
}

fn default_messages() -> BTreeMap<String, FieldMessages> {
    BTreeMap::from([
        (login::EMAIL.to_owned(), email_messages()),
        (login::PASSWORD.to_owned(), password_messages()),
        (signup::FIRST_NAME.to_owned(), name_messages("First name")),
        (signup::LAST_NAME.to_owned(), name_messages("Last name")),
        (signup::EMAIL.to_owned(), email_messages()),
        (signup::PASSWORD.to_owned(), password_messages()),
        (
            signup::CONFIRM_PASSWORD.to_owned(),
            FieldMessages::new().with(ReasonCode::Mismatch, "Passwords do not match."),
        ),
    ])
}
