//! Terminal page simulator.
//! Loads the configuration, sets up logging and lets the user drive the
//! login and signup forms from a menu.

use anyhow::Result;
use derive_more::Display;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use log::info;
use login_forms::config::FormsConfig;
use login_forms::consts::{view, INPUT_TYPE_PASSWORD};
use login_forms::controller::{Dispatch, Submission, SubmitOutcome, View};
use login_forms::page::Page;
use login_forms::session::Session;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// One round of the menu. Returns None to leave, Some(()) to go again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it leaves, reporting errors on the way.
    /// Ctrl-C leaves as well.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if matches!(
                    error.downcast_ref::<InquireError>(),
                    Some(InquireError::OperationInterrupted)
                ) {
                    break;
                }
                eprintln!("Error: {error}");
            }
        }
    }
}

/// An element offered in a selection, shown by its label
#[derive(Display)]
#[display("{label}")]
struct Target {
    id: String,
    label: String,
}

pub struct App {
    session: Session,
}

impl App {
    pub fn new(session: Session) -> Self {
        App { session }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Login / signup page. Pick actions to interact with the forms.");
        self.enter_loop();
        info!("Leaving the page simulator");
        Ok(())
    }

    fn label(&self, id: &str) -> String {
        self.session
            .page()
            .attr(id, "placeholder")
            .ok()
            .flatten()
            .unwrap_or_else(|| id.to_owned())
    }

    fn is_masked(&self, id: &str) -> Result<bool> {
        Ok(self.session.page().attr(id, "type")?.as_deref() == Some(INPUT_TYPE_PASSWORD))
    }

    fn fill(&mut self) -> Result<Vec<Dispatch>> {
        let fields = self
            .session
            .controller()
            .fields()
            .map(|field| Target {
                id: field.input().to_owned(),
                label: self.label(field.input()),
            })
            .collect();
        let field = Select::new("Which field?", fields).prompt()?;

        let value = if self.is_masked(&field.id)? {
            Password::new(&format!("{}:", field.label))
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()?
        } else {
            Text::new(&format!("{}:", field.label)).prompt()?
        };

        Ok(self.session.fill(&field.id, &value)?)
    }

    fn toggle(&mut self) -> Result<Vec<Dispatch>> {
        let toggles = self
            .session
            .controller()
            .toggles()
            .map(|(toggle, input)| Target {
                id: toggle.to_owned(),
                label: format!(
                    "{} ({})",
                    self.label(input),
                    self.session.page().text(toggle).unwrap_or_default()
                ),
            })
            .collect();
        let toggle = Select::new("Which password?", toggles).prompt()?;

        Ok(self.session.click(&toggle.id)?)
    }

    fn show(&self) -> Result<()> {
        let page = self.session.page();
        let controller = self.session.controller();

        println!("\n== {} ==", controller.view());
        for field in controller.fields() {
            let value = page.value(field.input())?;
            let shown = if self.is_masked(field.input())? {
                "*".repeat(value.chars().count())
            } else {
                value
            };
            let state = controller
                .field_state(field.input())
                .map(|state| state.to_string())
                .unwrap_or_default();
            println!("{:<18} [{shown}] ({state})", self.label(field.input()));
            if page.is_visible(field.error())? {
                println!("{:<18} ! {}", "", page.text(field.error())?);
            }
        }
        if let Some(terms) = controller.terms_checkbox() {
            let mark = if page.is_checked(terms)? { "x" } else { " " };
            println!("[{mark}] {}", page.text(terms)?);
        }
        if let Some(submit) = controller.submit_control() {
            let state = if page.is_disabled(submit)? {
                "disabled"
            } else {
                "enabled"
            };
            println!("<{}> ({state})\n", page.text(submit)?);
        }
        Ok(())
    }

    fn report(&self, dispatched: &[Dispatch]) -> Result<()> {
        let page = self.session.page();
        for outcome in dispatched {
            match outcome {
                Dispatch::Validated { field, valid: false } => {
                    let error = self
                        .session
                        .controller()
                        .fields()
                        .find(|binding| binding.input() == field)
                        .map(|binding| page.text(binding.error()))
                        .transpose()?
                        .unwrap_or_default();
                    println!("[!] {}: {error}", self.label(field));
                }
                Dispatch::Toggled { field, visible } => {
                    let state = if *visible { "visible" } else { "masked" };
                    println!("[*] {} is now {state}", self.label(field));
                }
                Dispatch::Gated { enabled } => {
                    let state = if *enabled { "enabled" } else { "disabled" };
                    println!("[*] Submit button {state}");
                }
                Dispatch::Submitted(SubmitOutcome::Blocked) => {
                    println!("[!] The submit button is disabled, accept the terms first");
                }
                Dispatch::Submitted(SubmitOutcome::Rejected { .. }) => {
                    println!("[!] The form has errors");
                    self.show()?;
                }
                Dispatch::Submitted(SubmitOutcome::Accepted(submission)) => match submission {
                    Submission::Login(data) => info!("Login accepted for {}", data.email),
                    Submission::Signup(data) => info!(
                        "Signup accepted for {} {} <{}>",
                        data.first_name, data.last_name, data.email
                    ),
                },
                Dispatch::Switched(view) => println!("[*] Now on the {view} view"),
                Dispatch::Validated { .. } | Dispatch::Suppressed { .. } | Dispatch::Ignored => {}
            }
        }
        Ok(())
    }

    fn acknowledge_alerts(&mut self) -> Result<()> {
        for alert in self.session.page_mut().take_alerts() {
            Text::new(&format!("*** {alert} ***"))
                .with_help_message("Press Enter to close")
                .prompt()?;
        }
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display, Clone, Copy, PartialEq, Eq)]
        enum Choice {
            #[display("Fill a field")]
            Fill,
            #[display("Show or hide a password")]
            Toggle,
            #[display("Tick or untick the terms")]
            Terms,
            #[display("Click the submit button")]
            Submit,
            #[display("Press Enter")]
            Enter,
            #[display("Click outside the form")]
            Outside,
            #[display("Switch view")]
            Switch,
            #[display("Inspect the page")]
            Inspect,
            #[display("Dump the page as JSON")]
            Dump,
            #[display("Quit")]
            Exit,
        }

        let current = self.session.controller().view();
        let terms = self.session.controller().terms_checkbox().map(str::to_owned);
        let choices = Choice::iter()
            .filter(|choice| *choice != Choice::Terms || terms.is_some())
            .collect();

        let choice = Select::new(&format!("[{current}] What do you want to do?"), choices).prompt()?;

        let dispatched = match choice {
            Choice::Fill => self.fill()?,
            Choice::Toggle => self.toggle()?,
            Choice::Terms => match &terms {
                Some(checkbox) => self.session.check(checkbox)?,
                None => Vec::new(),
            },
            Choice::Submit => match self.session.controller().submit_control() {
                Some(submit) => {
                    let dispatched = self.session.click(submit)?;
                    if dispatched.is_empty() {
                        println!("[!] The submit button is disabled");
                    }
                    dispatched
                }
                None => Vec::new(),
            },
            Choice::Enter => self.session.press_enter()?.into_iter().collect(),
            Choice::Outside => self.session.click_outside()?,
            Choice::Switch => {
                let trigger = match current {
                    View::Login => view::SIGNUP_TRIGGER,
                    View::Signup => view::LOGIN_TRIGGER,
                };
                self.session.click(trigger)?
            }
            Choice::Inspect => {
                self.show()?;
                Vec::new()
            }
            Choice::Dump => {
                println!("{}", serde_json::to_string_pretty(self.session.page())?);
                Vec::new()
            }
            Choice::Exit => return Ok(MENU_EXIT),
        };

        self.report(&dispatched)?;
        self.acknowledge_alerts()?;
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    let config = FormsConfig::load()?;
    simple_logging::log_to_file(&config.log_file, config.log_level()?)?;
    info!("Starting the page simulator");

    let session = Session::open(&config)?;
    App::new(session).start()
}
