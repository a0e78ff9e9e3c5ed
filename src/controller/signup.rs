//! Signup form: names, email, password and its confirmation, terms checkbox.

use super::field::{FieldBinding, FieldRules};
use super::toggle::{PasswordToggle, TermsGate};
use super::AttachedForm;
use crate::consts::{signup, view};
use crate::page::{Page, PageResult};
use crate::utils::validation::{EmailInput, NameInput, PasswordInput, ValidationError};

/// Account details of an accepted signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupData {
    pub first_name: NameInput,
    pub last_name: NameInput,
    pub email: EmailInput,
    pub password: PasswordInput,
}

impl SignupData {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: NameInput::new(first_name)?,
            last_name: NameInput::new(last_name)?,
            email: EmailInput::new(email)?,
            password: PasswordInput::confirmed(password, confirmation)?,
        })
    }

    pub(super) fn read<P: Page>(page: &P) -> PageResult<Result<Self, ValidationError>> {
        Ok(Self::new(
            &page.value(signup::FIRST_NAME)?,
            &page.value(signup::LAST_NAME)?,
            &page.value(signup::EMAIL)?,
            &page.value(signup::PASSWORD)?,
            &page.value(signup::CONFIRM_PASSWORD)?,
        ))
    }
}

/// Binds the signup form, focuses its email input and applies the terms gate
pub(super) fn attach<P: Page>(page: &mut P) -> PageResult<AttachedForm> {
    let fields = vec![
        FieldBinding::attach(
            page,
            signup::FIRST_NAME,
            signup::FIRST_NAME_ERROR,
            FieldRules::Name,
            None,
        )?,
        FieldBinding::attach(
            page,
            signup::LAST_NAME,
            signup::LAST_NAME_ERROR,
            FieldRules::Name,
            None,
        )?,
        FieldBinding::attach(
            page,
            signup::EMAIL,
            signup::EMAIL_ERROR,
            FieldRules::Email,
            None,
        )?,
        FieldBinding::attach(
            page,
            signup::PASSWORD,
            signup::PASSWORD_ERROR,
            FieldRules::Password,
            Some(signup::PASSWORD_TOGGLE),
        )?,
        FieldBinding::attach(
            page,
            signup::CONFIRM_PASSWORD,
            signup::CONFIRM_PASSWORD_ERROR,
            FieldRules::Matches(signup::PASSWORD.to_owned()),
            Some(signup::CONFIRM_PASSWORD_TOGGLE),
        )?,
    ];

    let terms = TermsGate::new(signup::TERMS, signup::SUBMIT);
    page.focus(signup::EMAIL)?;
    terms.apply(page)?;

    Ok(AttachedForm {
        form: view::SIGNUP_FORM,
        submit: signup::SUBMIT,
        fields,
        toggles: vec![
            PasswordToggle::new(signup::PASSWORD_TOGGLE, signup::PASSWORD),
            PasswordToggle::new(signup::CONFIRM_PASSWORD_TOGGLE, signup::CONFIRM_PASSWORD),
        ],
        terms: Some(terms),
    })
}
