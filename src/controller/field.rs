//! Blur handler of a single input: runs the field's rules and reflects the
//! outcome on the page.

use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::consts::{DATA_MSG_PREFIX, ERROR_CLASS};
use crate::page::{Page, PageResult};
use crate::utils::validation::{
    confirmation_rules, email_rules, name_rules, password_rules, FieldMessages, FieldValidator,
    ReasonCode,
};

/// Rule set of a bound input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRules {
    Email,
    Password,
    Name,
    /// Must repeat the raw value of the input with this id
    Matches(String),
}

impl FieldRules {
    fn validator<P: Page>(&self, page: &P) -> PageResult<FieldValidator> {
        Ok(match self {
            FieldRules::Email => email_rules(),
            FieldRules::Password => password_rules(),
            FieldRules::Name => name_rules(),
            FieldRules::Matches(other) => confirmation_rules(&page.value(other)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FieldBinding {
    input: String,
    error: String,
    rules: FieldRules,
    messages: FieldMessages,
    toggle: Option<String>,
}

impl FieldBinding {
    /// Binds `input` and resets its error display. Messages are read from the
    /// input's `data-msg-*` attributes once, here.
    pub fn attach<P: Page>(
        page: &mut P,
        input: &str,
        error: &str,
        rules: FieldRules,
        toggle: Option<&str>,
    ) -> PageResult<Self> {
        let messages = read_messages(&*page, input)?;

        let binding = Self {
            input: input.to_owned(),
            error: error.to_owned(),
            rules,
            messages,
            toggle: toggle.map(str::to_owned),
        };

        for reason in binding.rules.validator(&*page)?.reasons() {
            if binding.messages.get(reason).is_none() {
                warn!("Input `{input}` has no message for reason `{reason}`");
            }
        }

        binding.clear_error(page)?;
        Ok(binding)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Element showing the input's error message
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn toggle(&self) -> Option<&str> {
        self.toggle.as_deref()
    }

    /// Focus moving to the field's own visibility toggle does not validate it
    pub fn suppressed_by(&self, related: Option<&str>) -> bool {
        related.is_some() && related == self.toggle.as_deref()
    }

    /// Validates the current value, shows or clears the inline error and
    /// returns whether the value was accepted.
    pub fn validate<P: Page>(&self, page: &mut P) -> PageResult<bool> {
        let value = page.value(&self.input)?;
        let validator = self.rules.validator(&*page)?;

        self.clear_error(page)?;
        match validator.validate(&value) {
            Ok(_) => {
                debug!("`{}` accepted", self.input);
                Ok(true)
            }
            Err(e) => {
                debug!("`{}` rejected: {}", self.input, e.reason);
                self.show_error(page, e.reason)?;
                Ok(false)
            }
        }
    }

    fn show_error<P: Page>(&self, page: &mut P, reason: ReasonCode) -> PageResult<()> {
        page.set_text(&self.error, &self.messages.render(reason))?;
        page.set_visible(&self.error, true)?;
        page.toggle_class(&self.input, ERROR_CLASS, true)
    }

    fn clear_error<P: Page>(&self, page: &mut P) -> PageResult<()> {
        page.set_visible(&self.error, false)?;
        page.toggle_class(&self.input, ERROR_CLASS, false)
    }
}

fn read_messages<P: Page>(page: &P, input: &str) -> PageResult<FieldMessages> {
    let mut messages = FieldMessages::new();
    for reason in ReasonCode::iter() {
        if let Some(template) = page.attr(input, &format!("{DATA_MSG_PREFIX}{reason}"))? {
            messages.insert(reason, template);
        }
    }
    Ok(messages)
}
