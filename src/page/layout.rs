//! Elements of the login/signup page.
//!
//! Each validated input carries its messages as `data-msg-<reason>`
//! attributes and is followed by a hidden error element. The login view is
//! shown, the signup view hidden.

use super::{Document, Element, ElementKind};
use crate::config::FormsConfig;
use crate::consts::{
    login, signup, view, DATA_MSG_PREFIX, DISABLED_CLASS, INPUT_TYPE_PASSWORD, INPUT_TYPE_TEXT,
    TOGGLE_CLASS,
};
use crate::utils::error_messages::TOGGLE_SHOW;

/// Inputs of the login form, in page order
pub const LOGIN_INPUTS: [&str; 2] = [login::EMAIL, login::PASSWORD];

/// Inputs of the signup form, in page order
pub const SIGNUP_INPUTS: [&str; 5] = [
    signup::FIRST_NAME,
    signup::LAST_NAME,
    signup::EMAIL,
    signup::PASSWORD,
    signup::CONFIRM_PASSWORD,
];

/// Password inputs and the control toggling their visibility
pub const PASSWORD_TOGGLES: [(&str, &str); 3] = [
    (login::PASSWORD, login::PASSWORD_TOGGLE),
    (signup::PASSWORD, signup::PASSWORD_TOGGLE),
    (signup::CONFIRM_PASSWORD, signup::CONFIRM_PASSWORD_TOGGLE),
];

pub fn build(config: &FormsConfig) -> Document {
    let mut doc = Document::new();

    doc.insert(
        view::LOGIN_TRIGGER,
        Element::new(ElementKind::Button).with_text("Log in"),
    );
    doc.insert(
        view::SIGNUP_TRIGGER,
        Element::new(ElementKind::Button).with_text("Sign up"),
    );

    doc.insert(view::LOGIN_FORM, Element::new(ElementKind::Form));
    let mut form = FormBuilder {
        doc: &mut doc,
        form: view::LOGIN_FORM,
        config,
    };
    form.field(login::EMAIL, "email", "Email", login::EMAIL_ERROR);
    form.password(login::PASSWORD, "Password", login::PASSWORD_TOGGLE, login::PASSWORD_ERROR);
    form.button(login::SUBMIT, "Log in", false);

    doc.insert(view::SIGNUP_FORM, Element::new(ElementKind::Form).hidden());
    let mut form = FormBuilder {
        doc: &mut doc,
        form: view::SIGNUP_FORM,
        config,
    };
    form.field(signup::FIRST_NAME, INPUT_TYPE_TEXT, "First name", signup::FIRST_NAME_ERROR);
    form.field(signup::LAST_NAME, INPUT_TYPE_TEXT, "Last name", signup::LAST_NAME_ERROR);
    form.field(signup::EMAIL, "email", "Email", signup::EMAIL_ERROR);
    form.password(
        signup::PASSWORD,
        "Password",
        signup::PASSWORD_TOGGLE,
        signup::PASSWORD_ERROR,
    );
    form.password(
        signup::CONFIRM_PASSWORD,
        "Confirm password",
        signup::CONFIRM_PASSWORD_TOGGLE,
        signup::CONFIRM_PASSWORD_ERROR,
    );
    form.doc.insert(
        signup::TERMS,
        Element::new(ElementKind::Checkbox)
            .child_of(view::SIGNUP_FORM)
            .with_text("I accept the terms and conditions"),
    );
    form.button(signup::SUBMIT, "Create account", true);

    doc
}

struct FormBuilder<'a> {
    doc: &'a mut Document,
    form: &'static str,
    config: &'a FormsConfig,
}

impl FormBuilder<'_> {
    fn field(&mut self, id: &str, input_type: &str, label: &str, error_id: &str) {
        let mut input = Element::new(ElementKind::Input)
            .child_of(self.form)
            .with_attr("type", input_type)
            .with_attr("placeholder", label);
        for (reason, template) in self.config.messages(id).iter() {
            input = input.with_attr(&format!("{DATA_MSG_PREFIX}{reason}"), template);
        }
        self.doc.insert(id, input);

        self.doc.insert(
            error_id,
            Element::new(ElementKind::Text)
                .child_of(self.form)
                .hidden(),
        );
    }

    fn password(&mut self, id: &str, label: &str, toggle_id: &str, error_id: &str) {
        self.field(id, INPUT_TYPE_PASSWORD, label, error_id);
        self.doc.insert(
            toggle_id,
            Element::new(ElementKind::Button)
                .child_of(self.form)
                .with_class(TOGGLE_CLASS)
                .with_text(TOGGLE_SHOW),
        );
    }

    fn button(&mut self, id: &str, label: &str, disabled: bool) {
        let mut button = Element::new(ElementKind::Button)
            .child_of(self.form)
            .with_attr("type", "submit")
            .with_text(label);
        if disabled {
            button = button.disabled().with_class(DISABLED_CLASS);
        }
        self.doc.insert(id, button);
    }
}
