//! Login form: email and password.

use super::field::{FieldBinding, FieldRules};
use super::toggle::PasswordToggle;
use super::AttachedForm;
use crate::consts::{login, view};
use crate::page::{Page, PageResult};
use crate::utils::validation::{EmailInput, PasswordInput, ValidationError};

/// Credentials of an accepted login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginData {
    pub email: EmailInput,
    pub password: PasswordInput,
}

impl LoginData {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            email: EmailInput::new(email)?,
            password: PasswordInput::new(password)?,
        })
    }

    pub(super) fn read<P: Page>(page: &P) -> PageResult<Result<Self, ValidationError>> {
        Ok(Self::new(
            &page.value(login::EMAIL)?,
            &page.value(login::PASSWORD)?,
        ))
    }
}

pub(super) fn attach<P: Page>(page: &mut P) -> PageResult<AttachedForm> {
    let fields = vec![
        FieldBinding::attach(
            page,
            login::EMAIL,
            login::EMAIL_ERROR,
            FieldRules::Email,
            None,
        )?,
        FieldBinding::attach(
            page,
            login::PASSWORD,
            login::PASSWORD_ERROR,
            FieldRules::Password,
            Some(login::PASSWORD_TOGGLE),
        )?,
    ];

    Ok(AttachedForm {
        form: view::LOGIN_FORM,
        submit: login::SUBMIT,
        fields,
        toggles: vec![PasswordToggle::new(login::PASSWORD_TOGGLE, login::PASSWORD)],
        terms: None,
    })
}
