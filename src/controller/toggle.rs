//! Stateless UI toggles. The state lives on the page and is read back on
//! every event.

use crate::consts::{DISABLED_CLASS, INPUT_TYPE_PASSWORD, INPUT_TYPE_TEXT};
use crate::page::{Page, PageResult};
use crate::utils::error_messages::{TOGGLE_HIDE, TOGGLE_SHOW};

/// Show/hide control of a password input
#[derive(Debug, Clone)]
pub struct PasswordToggle {
    control: String,
    input: String,
}

impl PasswordToggle {
    pub fn new(control: &str, input: &str) -> Self {
        Self {
            control: control.to_owned(),
            input: input.to_owned(),
        }
    }

    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Flips the input between masked and plain text. The control's label
    /// names the next action. Returns true when the password is now visible.
    pub fn flip<P: Page>(&self, page: &mut P) -> PageResult<bool> {
        let masked = page.attr(&self.input, "type")?.as_deref() == Some(INPUT_TYPE_PASSWORD);
        let (input_type, label) = if masked {
            (INPUT_TYPE_TEXT, TOGGLE_HIDE)
        } else {
            (INPUT_TYPE_PASSWORD, TOGGLE_SHOW)
        };

        page.set_attr(&self.input, "type", input_type)?;
        page.set_text(&self.control, label)?;
        Ok(masked)
    }
}

/// Keeps a submit control disabled while a checkbox is unticked
#[derive(Debug, Clone)]
pub struct TermsGate {
    checkbox: String,
    submit: String,
}

impl TermsGate {
    pub fn new(checkbox: &str, submit: &str) -> Self {
        Self {
            checkbox: checkbox.to_owned(),
            submit: submit.to_owned(),
        }
    }

    pub fn checkbox(&self) -> &str {
        &self.checkbox
    }

    /// Mirrors the checkbox onto the submit control. Returns true when enabled.
    pub fn apply<P: Page>(&self, page: &mut P) -> PageResult<bool> {
        let disabled = !page.is_checked(&self.checkbox)?;
        page.set_disabled(&self.submit, disabled)?;
        page.toggle_class(&self.submit, DISABLED_CLASS, disabled)?;
        Ok(!disabled)
    }
}
