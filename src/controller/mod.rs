//! Form controller.
//!
//! Reacts to page events for whichever form is currently shown:
//!
//! * blur of a bound input validates that input, unless focus went to the
//!   input's own show/hide control;
//! * clicks on show/hide controls flip password masking;
//! * changes of the terms checkbox gate the signup submit control;
//! * submit runs the form's validators following its [`SubmitPolicy`] and
//!   raises the success dialog when everything passed;
//! * clicks on the view triggers swap forms and re-attach handlers.

mod field;
mod login;
mod signup;
mod toggle;

pub use field::{FieldBinding, FieldRules};
pub use login::LoginData;
pub use signup::SignupData;
pub use toggle::{PasswordToggle, TermsGate};

use std::collections::HashMap;

use log::{debug, error, info};
use strum_macros::Display;

use crate::config::{FormSettings, FormsConfig, SubmitPolicy};
use crate::consts::view;
use crate::page::{Page, PageEvent, PageResult};
use crate::utils::errors::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum View {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldState {
    Untouched,
    Valid,
    Invalid,
}

/// Data produced by an accepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Login(LoginData),
    Signup(SignupData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    /// Ids of the inputs that failed, in validation order
    Rejected { failed: Vec<String> },
    /// The submit control is disabled
    Blocked,
}

/// What the controller did with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Ignored,
    Validated { field: String, valid: bool },
    Suppressed { field: String },
    Toggled { field: String, visible: bool },
    Gated { enabled: bool },
    Submitted(SubmitOutcome),
    Switched(View),
}

/// Handlers of the form currently shown
#[derive(Debug, Clone)]
pub(crate) struct AttachedForm {
    form: &'static str,
    submit: &'static str,
    fields: Vec<FieldBinding>,
    toggles: Vec<PasswordToggle>,
    terms: Option<TermsGate>,
}

pub struct FormController {
    login: FormSettings,
    signup: FormSettings,
    view: View,
    active: Option<AttachedForm>,
    states: HashMap<String, FieldState>,
}

impl FormController {
    pub fn new(config: &FormsConfig) -> Self {
        Self {
            login: config.login.clone(),
            signup: config.signup.clone(),
            view: View::Login,
            active: None,
            states: HashMap::new(),
        }
    }

    /// Shows the login view, as on page load
    pub fn start<P: Page>(&mut self, page: &mut P) -> PageResult<()> {
        self.switch(page, View::Login)
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// State of a bound input of the current form
    pub fn field_state(&self, input: &str) -> Option<FieldState> {
        self.states.get(input).copied()
    }

    /// Bound inputs of the current form, in page order
    pub fn fields(&self) -> impl Iterator<Item = &FieldBinding> {
        self.active.iter().flat_map(|form| form.fields.iter())
    }

    /// Show/hide controls of the current form
    pub fn toggles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields()
            .filter_map(|field| field.toggle().map(|toggle| (toggle, field.input())))
    }

    /// Id of the current form
    pub fn form(&self) -> Option<&'static str> {
        self.active.as_ref().map(|form| form.form)
    }

    /// Id of the current form's submit control
    pub fn submit_control(&self) -> Option<&'static str> {
        self.active.as_ref().map(|form| form.submit)
    }

    /// Id of the current form's terms checkbox
    pub fn terms_checkbox(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(|form| form.terms.as_ref())
            .map(TermsGate::checkbox)
    }

    pub fn dispatch<P: Page>(&mut self, page: &mut P, event: &PageEvent) -> PageResult<Dispatch> {
        debug!("Dispatching {event:?}");
        let outcome = match event {
            PageEvent::Blur { target, related } => self.on_blur(page, target, related.as_deref()),
            PageEvent::Click { target } => self.on_click(page, target),
            PageEvent::Change { target } => self.on_change(page, target),
            PageEvent::Submit { form } => self.on_submit(page, form),
        }?;
        debug!("Outcome {outcome:?}");
        Ok(outcome)
    }

    fn active(&self) -> Option<&AttachedForm> {
        self.active.as_ref()
    }

    fn on_blur<P: Page>(
        &mut self,
        page: &mut P,
        target: &str,
        related: Option<&str>,
    ) -> PageResult<Dispatch> {
        let Some(field) = self.fields().find(|field| field.input() == target) else {
            return Ok(Dispatch::Ignored);
        };

        if field.suppressed_by(related) {
            return Ok(Dispatch::Suppressed {
                field: target.to_owned(),
            });
        }

        let valid = self.validate(page, target)?;
        Ok(Dispatch::Validated {
            field: target.to_owned(),
            valid,
        })
    }

    fn on_click<P: Page>(&mut self, page: &mut P, target: &str) -> PageResult<Dispatch> {
        match target {
            view::LOGIN_TRIGGER => {
                self.switch(page, View::Login)?;
                return Ok(Dispatch::Switched(View::Login));
            }
            view::SIGNUP_TRIGGER => {
                self.switch(page, View::Signup)?;
                return Ok(Dispatch::Switched(View::Signup));
            }
            _ => {}
        }

        let Some(form) = self.active() else {
            return Ok(Dispatch::Ignored);
        };

        if let Some(toggle) = form.toggles.iter().find(|toggle| toggle.control() == target) {
            let field = toggle.input().to_owned();
            let visible = toggle.flip(page)?;
            return Ok(Dispatch::Toggled { field, visible });
        }

        if target == form.submit {
            let form = form.form;
            return self.on_submit(page, form);
        }

        Ok(Dispatch::Ignored)
    }

    fn on_change<P: Page>(&mut self, page: &mut P, target: &str) -> PageResult<Dispatch> {
        let Some(terms) = self.active().and_then(|form| form.terms.as_ref()) else {
            return Ok(Dispatch::Ignored);
        };
        if terms.checkbox() != target {
            return Ok(Dispatch::Ignored);
        }

        let enabled = terms.apply(page)?;
        Ok(Dispatch::Gated { enabled })
    }

    fn on_submit<P: Page>(&mut self, page: &mut P, form_id: &str) -> PageResult<Dispatch> {
        let Some(form) = self.active().filter(|form| form.form == form_id) else {
            return Ok(Dispatch::Ignored);
        };

        if page.is_disabled(form.submit)? {
            debug!("Submit of `{form_id}` blocked, control disabled");
            return Ok(Dispatch::Submitted(SubmitOutcome::Blocked));
        }

        let inputs: Vec<String> = form.fields.iter().map(|f| f.input().to_owned()).collect();
        let settings = match self.view {
            View::Login => self.login.clone(),
            View::Signup => self.signup.clone(),
        };

        let mut failed = Vec::new();
        for input in inputs {
            if !self.validate(page, &input)? {
                failed.push(input);
                if settings.submit_policy == SubmitPolicy::StopAtFirstFailure {
                    break;
                }
            }
        }

        if !failed.is_empty() {
            return Ok(Dispatch::Submitted(SubmitOutcome::Rejected { failed }));
        }

        let submission = match self.view {
            View::Login => LoginData::read(&*page)?.map(Submission::Login),
            View::Signup => SignupData::read(&*page)?.map(Submission::Signup),
        };

        match submission {
            Ok(submission) => {
                info!("{} form accepted", self.view);
                page.alert(&settings.success_message);
                Ok(Dispatch::Submitted(SubmitOutcome::Accepted(submission)))
            }
            Err(e) => {
                error!("{} form passed its fields but not its data: {e}", self.view);
                Ok(Dispatch::Submitted(SubmitOutcome::Rejected { failed: Vec::new() }))
            }
        }
    }

    /// Shows `target`, hides the other form and replaces the handlers
    fn switch<P: Page>(&mut self, page: &mut P, target: View) -> PageResult<()> {
        let (shown, hidden) = match target {
            View::Login => (view::LOGIN_FORM, view::SIGNUP_FORM),
            View::Signup => (view::SIGNUP_FORM, view::LOGIN_FORM),
        };
        page.set_visible(hidden, false)?;
        page.set_visible(shown, true)?;

        let form = match target {
            View::Login => login::attach(page)?,
            View::Signup => signup::attach(page)?,
        };

        self.states = form
            .fields
            .iter()
            .map(|field| (field.input().to_owned(), FieldState::Untouched))
            .collect();
        self.active = Some(form);
        self.view = target;
        info!("Switched to the {target} view");
        Ok(())
    }

    fn validate<P: Page>(&mut self, page: &mut P, input: &str) -> PageResult<bool> {
        let valid = self
            .fields()
            .find(|field| field.input() == input)
            .ok_or_else(|| PageError::Unbound(input.to_owned()))?
            .validate(page)?;

        let state = if valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        self.states.insert(input.to_owned(), state);
        Ok(valid)
    }
}
