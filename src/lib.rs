//! Login and signup form controller.
//! Validates form fields against rule sets, shows inline errors and manages
//! the password visibility and submit gating toggles of the page.

pub mod config;
pub mod consts;
pub mod controller;
pub mod page;
pub mod session;
pub mod utils;
