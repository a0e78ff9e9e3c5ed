//! User gestures on the page.
//!
//! A gesture becomes the sequence of events a browser would fire: focus
//! moving to a new element first blurs the previous one (with the new element
//! as related target), then the click or change itself is dispatched.

use crate::config::FormsConfig;
use crate::controller::{Dispatch, FormController};
use crate::page::{layout, Document, Page, PageEvent, PageResult};

pub struct Session<P: Page = Document> {
    page: P,
    controller: FormController,
}

impl Session<Document> {
    /// Builds the page from `config` and loads the login view
    pub fn open(config: &FormsConfig) -> PageResult<Self> {
        Self::new(layout::build(config), FormController::new(config))
    }
}

impl<P: Page> Session<P> {
    pub fn new(mut page: P, mut controller: FormController) -> PageResult<Self> {
        controller.start(&mut page)?;
        Ok(Self { page, controller })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Focuses `input` and replaces its content with `value`
    pub fn fill(&mut self, input: &str, value: &str) -> PageResult<Vec<Dispatch>> {
        let dispatched = self.move_focus(input)?;
        self.page.set_value(input, value)?;
        Ok(dispatched)
    }

    /// Clicks a button-like element. Disabled elements swallow the click.
    pub fn click(&mut self, target: &str) -> PageResult<Vec<Dispatch>> {
        if self.page.is_disabled(target)? {
            return Ok(Vec::new());
        }
        let mut dispatched = self.move_focus(target)?;
        dispatched.push(self.dispatch(PageEvent::click(target))?);
        Ok(dispatched)
    }

    /// Clicks a checkbox, flipping its checked state
    pub fn check(&mut self, checkbox: &str) -> PageResult<Vec<Dispatch>> {
        let mut dispatched = self.move_focus(checkbox)?;
        let checked = self.page.is_checked(checkbox)?;
        self.page.set_checked(checkbox, !checked)?;
        dispatched.push(self.dispatch(PageEvent::change(checkbox))?);
        Ok(dispatched)
    }

    /// Clicks an empty area of the page
    pub fn click_outside(&mut self) -> PageResult<Vec<Dispatch>> {
        match self.page.blur() {
            Some(previous) => Ok(vec![self.dispatch(PageEvent::blur(&previous, None))?]),
            None => Ok(Vec::new()),
        }
    }

    /// Presses Enter in the current form. Focus does not move.
    pub fn press_enter(&mut self) -> PageResult<Option<Dispatch>> {
        match self.controller.form() {
            Some(form) => self.dispatch(PageEvent::submit(form)).map(Some),
            None => Ok(None),
        }
    }

    fn move_focus(&mut self, target: &str) -> PageResult<Vec<Dispatch>> {
        match self.page.focus(target)? {
            Some(previous) if previous != target => {
                Ok(vec![self.dispatch(PageEvent::blur(&previous, Some(target)))?])
            }
            _ => Ok(Vec::new()),
        }
    }

    fn dispatch(&mut self, event: PageEvent) -> PageResult<Dispatch> {
        self.controller.dispatch(&mut self.page, &event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{login, signup, view, DISABLED_CLASS, ERROR_CLASS, INPUT_TYPE_TEXT};
    use crate::controller::{FieldState, Submission, SubmitOutcome, View};
    use crate::utils::error_messages::{LOGIN_SUCCESS, SIGNUP_SUCCESS, TOGGLE_HIDE};

    const GOOD_PASSWORD: &str = "Abc123!?";

    fn session() -> Session {
        Session::open(&FormsConfig::default()).unwrap()
    }

    fn signup_session() -> Session {
        let mut session = session();
        session.click(view::SIGNUP_TRIGGER).unwrap();
        session
    }

    fn error_text(session: &Session, error: &str) -> Option<String> {
        let page = session.page();
        page.is_visible(error)
            .unwrap()
            .then(|| page.text(error).unwrap())
    }

    fn fill_signup(session: &mut Session, confirmation: &str) {
        session.fill(signup::FIRST_NAME, "Ada").unwrap();
        session.fill(signup::LAST_NAME, "Lovelace").unwrap();
        session.fill(signup::EMAIL, "ada@example.com").unwrap();
        session.fill(signup::PASSWORD, GOOD_PASSWORD).unwrap();
        session.fill(signup::CONFIRM_PASSWORD, confirmation).unwrap();
    }

    #[test]
    fn test_login_submit_with_empty_email() {
        let mut session = session();
        session.fill(login::PASSWORD, GOOD_PASSWORD).unwrap();

        let dispatched = session.click(login::SUBMIT).unwrap();

        assert_eq!(
            dispatched.last(),
            Some(&Dispatch::Submitted(SubmitOutcome::Rejected {
                failed: vec![login::EMAIL.to_owned()]
            }))
        );
        assert_eq!(
            error_text(&session, login::EMAIL_ERROR).as_deref(),
            Some("Email is required.")
        );
        assert_eq!(error_text(&session, login::PASSWORD_ERROR), None);
        assert_eq!(session.controller().field_state(login::PASSWORD), Some(FieldState::Valid));
        assert!(session.page().alerts().is_empty());
    }

    #[test]
    fn test_login_submit_shows_every_error() {
        let mut session = session();
        session.fill(login::EMAIL, "nope").unwrap();
        session.fill(login::PASSWORD, "short").unwrap();

        let outcome = session.press_enter().unwrap();

        assert_eq!(
            outcome,
            Some(Dispatch::Submitted(SubmitOutcome::Rejected {
                failed: vec![login::EMAIL.to_owned(), login::PASSWORD.to_owned()]
            }))
        );
        assert_eq!(
            error_text(&session, login::EMAIL_ERROR).as_deref(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            error_text(&session, login::PASSWORD_ERROR).as_deref(),
            Some("Password must be at least 8 characters long.")
        );
    }

    #[test]
    fn test_login_success() {
        let mut session = session();
        session.fill(login::EMAIL, " ada@example.com ").unwrap();
        session.fill(login::PASSWORD, GOOD_PASSWORD).unwrap();

        let outcome = session.press_enter().unwrap();

        let Some(Dispatch::Submitted(SubmitOutcome::Accepted(Submission::Login(data)))) = &outcome
        else {
            panic!("Login was not accepted: {:?}", outcome);
        };
        assert_eq!(data.email.as_str(), "ada@example.com");
        assert_eq!(data.password.expose(), GOOD_PASSWORD);
        assert_eq!(session.page().alerts(), [LOGIN_SUCCESS]);
    }

    #[test]
    fn test_blur_validates_the_field_left() {
        let mut session = session();
        session.fill(login::EMAIL, "nope").unwrap();

        let dispatched = session.fill(login::PASSWORD, "x").unwrap();

        assert_eq!(
            dispatched,
            vec![Dispatch::Validated {
                field: login::EMAIL.to_owned(),
                valid: false
            }]
        );
        assert!(session.page().has_class(login::EMAIL, ERROR_CLASS).unwrap());
        assert_eq!(session.controller().field_state(login::EMAIL), Some(FieldState::Invalid));
        assert_eq!(
            session.controller().field_state(login::PASSWORD),
            Some(FieldState::Untouched)
        );
    }

    #[test]
    fn test_refocusing_the_same_field_does_not_validate() {
        let mut session = session();
        session.fill(login::EMAIL, "nope").unwrap();
        assert!(session.fill(login::EMAIL, "still nope").unwrap().is_empty());
        assert_eq!(error_text(&session, login::EMAIL_ERROR), None);
    }

    #[test]
    fn test_click_outside_validates() {
        let mut session = session();
        session.fill(login::PASSWORD, "abcdefgh").unwrap();

        session.click_outside().unwrap();

        assert_eq!(
            error_text(&session, login::PASSWORD_ERROR).as_deref(),
            Some("Password must contain an uppercase letter.")
        );
        assert!(session.click_outside().unwrap().is_empty());
    }

    #[test]
    fn test_own_toggle_suppresses_validation() {
        let mut session = session();
        session.fill(login::PASSWORD, "bad").unwrap();

        let dispatched = session.click(login::PASSWORD_TOGGLE).unwrap();

        assert_eq!(
            dispatched,
            vec![
                Dispatch::Suppressed {
                    field: login::PASSWORD.to_owned()
                },
                Dispatch::Toggled {
                    field: login::PASSWORD.to_owned(),
                    visible: true
                },
            ]
        );
        assert_eq!(error_text(&session, login::PASSWORD_ERROR), None);
        assert_eq!(
            session.page().attr(login::PASSWORD, "type").unwrap().as_deref(),
            Some(INPUT_TYPE_TEXT)
        );
        assert_eq!(session.page().text(login::PASSWORD_TOGGLE).unwrap(), TOGGLE_HIDE);
    }

    #[test]
    fn test_other_toggle_does_not_suppress_validation() {
        let mut session = signup_session();
        session.fill(signup::CONFIRM_PASSWORD, "different").unwrap();

        let dispatched = session.click(signup::PASSWORD_TOGGLE).unwrap();

        assert_eq!(
            dispatched[0],
            Dispatch::Validated {
                field: signup::CONFIRM_PASSWORD.to_owned(),
                valid: false
            }
        );
        assert_eq!(
            error_text(&session, signup::CONFIRM_PASSWORD_ERROR).as_deref(),
            Some("Passwords do not match.")
        );
    }

    #[test]
    fn test_signup_load() {
        let session = signup_session();

        assert_eq!(session.controller().view(), View::Signup);
        assert_eq!(session.page().focused(), Some(signup::EMAIL));
        assert!(session.page().is_displayed(signup::EMAIL));
        assert!(!session.page().is_displayed(login::EMAIL));
        assert!(session.page().is_disabled(signup::SUBMIT).unwrap());
        assert_eq!(session.controller().terms_checkbox(), Some(signup::TERMS));
        assert_eq!(session.controller().fields().count(), 5);
    }

    #[test]
    fn test_terms_gate_submit() {
        let mut session = signup_session();

        let dispatched = session.check(signup::TERMS).unwrap();
        assert_eq!(dispatched.last(), Some(&Dispatch::Gated { enabled: true }));
        assert!(!session.page().is_disabled(signup::SUBMIT).unwrap());
        assert!(!session.page().has_class(signup::SUBMIT, DISABLED_CLASS).unwrap());

        let dispatched = session.check(signup::TERMS).unwrap();
        assert_eq!(dispatched.last(), Some(&Dispatch::Gated { enabled: false }));
        assert!(session.page().is_disabled(signup::SUBMIT).unwrap());
        assert!(session.page().has_class(signup::SUBMIT, DISABLED_CLASS).unwrap());
    }

    #[test]
    fn test_disabled_submit_blocks_signup() {
        let mut session = signup_session();
        fill_signup(&mut session, GOOD_PASSWORD);

        assert!(session.click(signup::SUBMIT).unwrap().is_empty());
        assert_eq!(
            session.press_enter().unwrap(),
            Some(Dispatch::Submitted(SubmitOutcome::Blocked))
        );
        assert!(session.page().alerts().is_empty());
    }

    #[test]
    fn test_signup_mismatch() {
        let mut session = signup_session();
        fill_signup(&mut session, "abc123!?");
        session.check(signup::TERMS).unwrap();

        let dispatched = session.click(signup::SUBMIT).unwrap();

        assert_eq!(
            dispatched.last(),
            Some(&Dispatch::Submitted(SubmitOutcome::Rejected {
                failed: vec![signup::CONFIRM_PASSWORD.to_owned()]
            }))
        );
        assert_eq!(
            error_text(&session, signup::CONFIRM_PASSWORD_ERROR).as_deref(),
            Some("Passwords do not match.")
        );
        assert!(session.page().alerts().is_empty());
    }

    #[test]
    fn test_signup_stops_at_first_failure() {
        let mut session = signup_session();
        session.fill(signup::FIRST_NAME, "R2D2").unwrap();
        session.fill(signup::EMAIL, "nope").unwrap();
        session.check(signup::TERMS).unwrap();

        let outcome = session.press_enter().unwrap();

        assert_eq!(
            outcome,
            Some(Dispatch::Submitted(SubmitOutcome::Rejected {
                failed: vec![signup::FIRST_NAME.to_owned()]
            }))
        );
        assert_eq!(
            error_text(&session, signup::FIRST_NAME_ERROR).as_deref(),
            Some("First name may only contain letters.")
        );
        // Later fields were not looked at by the submit
        assert_eq!(error_text(&session, signup::LAST_NAME_ERROR), None);
        assert_eq!(
            session.controller().field_state(signup::LAST_NAME),
            Some(FieldState::Untouched)
        );
    }

    #[test]
    fn test_signup_policy_can_validate_all() {
        let config = FormsConfig::from_yaml("signup: {submit_policy: validate_all}").unwrap();
        let mut session = Session::open(&config).unwrap();
        session.click(view::SIGNUP_TRIGGER).unwrap();
        session.check(signup::TERMS).unwrap();

        let outcome = session.press_enter().unwrap();

        // Empty confirmation matches the empty password
        assert_eq!(
            outcome,
            Some(Dispatch::Submitted(SubmitOutcome::Rejected {
                failed: vec![
                    signup::FIRST_NAME.to_owned(),
                    signup::LAST_NAME.to_owned(),
                    signup::EMAIL.to_owned(),
                    signup::PASSWORD.to_owned(),
                ]
            }))
        );
    }

    #[test]
    fn test_signup_success() {
        let mut session = signup_session();
        fill_signup(&mut session, GOOD_PASSWORD);
        session.check(signup::TERMS).unwrap();

        let dispatched = session.click(signup::SUBMIT).unwrap();

        let Some(Dispatch::Submitted(SubmitOutcome::Accepted(Submission::Signup(data)))) =
            dispatched.last()
        else {
            panic!("Signup was not accepted: {:?}", dispatched);
        };
        assert_eq!(data.first_name.as_str(), "Ada");
        assert_eq!(data.email.as_str(), "ada@example.com");
        assert_eq!(session.page().alerts(), [SIGNUP_SUCCESS]);
    }

    #[test]
    fn test_switching_views_rebinds_once() {
        let mut session = session();
        session.fill(login::EMAIL, "nope").unwrap();
        session.click_outside().unwrap();
        assert!(error_text(&session, login::EMAIL_ERROR).is_some());

        session.click(view::SIGNUP_TRIGGER).unwrap();
        session.click(view::LOGIN_TRIGGER).unwrap();
        session.click(view::SIGNUP_TRIGGER).unwrap();
        let dispatched = session.click(view::LOGIN_TRIGGER).unwrap();

        assert_eq!(dispatched.last(), Some(&Dispatch::Switched(View::Login)));
        assert_eq!(session.controller().fields().count(), 2);
        assert_eq!(
            session.controller().field_state(login::EMAIL),
            Some(FieldState::Untouched)
        );
        assert_eq!(error_text(&session, login::EMAIL_ERROR), None);
        assert_eq!(session.controller().field_state(signup::EMAIL), None);
    }

    #[test]
    fn test_leaving_a_field_through_the_view_trigger_validates_it() {
        let mut session = session();
        session.fill(login::EMAIL, "nope").unwrap();

        let dispatched = session.click(view::SIGNUP_TRIGGER).unwrap();

        assert_eq!(
            dispatched,
            vec![
                Dispatch::Validated {
                    field: login::EMAIL.to_owned(),
                    valid: false
                },
                Dispatch::Switched(View::Signup),
            ]
        );
    }

    #[test]
    fn test_unknown_elements_are_errors() {
        let mut session = session();
        assert!(session.fill("nope", "x").is_err());
        assert!(session.click("nope").is_err());
    }
}
