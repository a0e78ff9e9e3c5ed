//! The page the forms live on.
//!
//! The controller only talks to the page through the [`Page`] trait, which
//! exposes the handful of element operations it needs: read values, show or
//! hide message elements, flip classes and attributes, move focus and raise
//! a dialog. [`Document`] is the in-memory implementation.

mod document;
mod event;
pub mod layout;

pub use document::{Document, Element, ElementKind};
pub use event::PageEvent;

use crate::utils::errors::PageError;

pub type PageResult<T> = Result<T, PageError>;

pub trait Page {
    /// Current value of an input
    fn value(&self, id: &str) -> PageResult<String>;

    fn set_value(&mut self, id: &str, value: &str) -> PageResult<()>;

    fn attr(&self, id: &str, name: &str) -> PageResult<Option<String>>;

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> PageResult<()>;

    fn text(&self, id: &str) -> PageResult<String>;

    fn set_text(&mut self, id: &str, text: &str) -> PageResult<()>;

    fn is_visible(&self, id: &str) -> PageResult<bool>;

    fn set_visible(&mut self, id: &str, visible: bool) -> PageResult<()>;

    fn has_class(&self, id: &str, class: &str) -> PageResult<bool>;

    /// Adds `class` when `on`, removes it otherwise
    fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> PageResult<()>;

    fn is_disabled(&self, id: &str) -> PageResult<bool>;

    fn set_disabled(&mut self, id: &str, disabled: bool) -> PageResult<()>;

    fn is_checked(&self, id: &str) -> PageResult<bool>;

    fn set_checked(&mut self, id: &str, checked: bool) -> PageResult<()>;

    /// Element currently holding focus
    fn focused(&self) -> Option<&str>;

    /// Moves focus to `id` and returns the element that held it before
    fn focus(&mut self, id: &str) -> PageResult<Option<String>>;

    /// Drops focus and returns the element that held it
    fn blur(&mut self) -> Option<String>;

    /// Raises a blocking acknowledgement dialog
    fn alert(&mut self, message: &str);
}
