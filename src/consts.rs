//! Global constants: element ids, class names and default paths.

pub const CONFIG_ENV: &str = "LOGIN_FORMS_CONFIG"; // Variable pointing to the YAML configuration.
pub const DEFAULT_CONFIG_PATH: &str = "./forms.yaml"; // Used when the variable is not set.
pub const DEFAULT_LOG_FILE: &str = "./login-forms.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ERROR_CLASS: &str = "my-b-error"; // Marks an input holding an invalid value.
pub const DISABLED_CLASS: &str = "disabled";
pub const TOGGLE_CLASS: &str = "togglePassword";
pub const DATA_MSG_PREFIX: &str = "data-msg-";

pub const INPUT_TYPE_PASSWORD: &str = "password";
pub const INPUT_TYPE_TEXT: &str = "text";

/// Ids of the view triggers and form containers
pub mod view {
    pub const LOGIN_TRIGGER: &str = "logIn";
    pub const SIGNUP_TRIGGER: &str = "signUp";
    pub const LOGIN_FORM: &str = "logIn-form";
    pub const SIGNUP_FORM: &str = "signUp-form";
}

/// Ids of the login form elements
pub mod login {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const EMAIL_ERROR: &str = "error-email";
    pub const PASSWORD_ERROR: &str = "error-password";
    pub const PASSWORD_TOGGLE: &str = "toggle-password";
    pub const SUBMIT: &str = "login-submit";
}

/// Ids of the signup form elements
pub mod signup {
    pub const FIRST_NAME: &str = "first-name";
    pub const LAST_NAME: &str = "last-name";
    pub const EMAIL: &str = "signup-email";
    pub const PASSWORD: &str = "signup-password";
    pub const CONFIRM_PASSWORD: &str = "confirm-password";
    pub const FIRST_NAME_ERROR: &str = "error-first-name";
    pub const LAST_NAME_ERROR: &str = "error-last-name";
    pub const EMAIL_ERROR: &str = "error-signup-email";
    pub const PASSWORD_ERROR: &str = "error-signup-password";
    pub const CONFIRM_PASSWORD_ERROR: &str = "error-confirm-password";
    pub const PASSWORD_TOGGLE: &str = "toggle-signup-password";
    pub const CONFIRM_PASSWORD_TOGGLE: &str = "toggleconfirmPassword";
    pub const TERMS: &str = "terms";
    pub const SUBMIT: &str = "signup-submit";
}
