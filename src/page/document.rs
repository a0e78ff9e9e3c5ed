//! In-memory page: a flat map of elements indexed by id, plus focus and the
//! dialogs raised so far.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Page, PageResult};
use crate::utils::errors::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Container,
    Form,
    Input,
    Checkbox,
    Button,
    Text,
}

#[derive(Debug, Clone, Serialize)]
pub struct Element {
    kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    text: String,
    checked: bool,
    disabled: bool,
    visible: bool,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            value: String::new(),
            text: String::new(),
            checked: false,
            disabled: false,
            visible: true,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_owned());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    focused: Option<String>,
    alerts: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, replacing any element with the same id
    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_owned(), element);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Direct children of `parent`, ordered by id
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = (&'a str, &'a Element)> {
        self.elements
            .iter()
            .filter(move |(_, element)| element.parent() == Some(parent))
            .map(|(id, element)| (id.as_str(), element))
    }

    /// True when the element and all its ancestors are visible
    pub fn is_displayed(&self, id: &str) -> bool {
        let mut current = self.elements.get(id);
        while let Some(element) = current {
            if !element.visible {
                return false;
            }
            current = element.parent().and_then(|parent| self.elements.get(parent));
        }
        self.elements.contains_key(id)
    }

    /// Dialogs raised so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn get(&self, id: &str) -> PageResult<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| PageError::MissingElement(id.to_owned()))
    }

    fn get_mut(&mut self, id: &str) -> PageResult<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_owned()))
    }

    fn input(&self, id: &str) -> PageResult<&Element> {
        let element = self.get(id)?;
        match element.kind {
            ElementKind::Input => Ok(element),
            _ => Err(PageError::wrong_kind(id, "an input")),
        }
    }

    fn checkbox_mut(&mut self, id: &str) -> PageResult<&mut Element> {
        let element = self.get_mut(id)?;
        match element.kind {
            ElementKind::Checkbox => Ok(element),
            _ => Err(PageError::wrong_kind(id, "a checkbox")),
        }
    }
}

impl Page for Document {
    fn value(&self, id: &str) -> PageResult<String> {
        Ok(self.input(id)?.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> PageResult<()> {
        self.input(id)?;
        self.get_mut(id)?.value = value.to_owned();
        Ok(())
    }

    fn attr(&self, id: &str, name: &str) -> PageResult<Option<String>> {
        Ok(self.get(id)?.attr(name).map(str::to_owned))
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> PageResult<()> {
        self.get_mut(id)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn text(&self, id: &str) -> PageResult<String> {
        Ok(self.get(id)?.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) -> PageResult<()> {
        self.get_mut(id)?.text = text.to_owned();
        Ok(())
    }

    fn is_visible(&self, id: &str) -> PageResult<bool> {
        Ok(self.get(id)?.visible)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> PageResult<()> {
        self.get_mut(id)?.visible = visible;
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> PageResult<bool> {
        Ok(self.get(id)?.has_class(class))
    }

    fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> PageResult<()> {
        let classes = &mut self.get_mut(id)?.classes;
        if on {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn is_disabled(&self, id: &str) -> PageResult<bool> {
        Ok(self.get(id)?.disabled)
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> PageResult<()> {
        self.get_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn is_checked(&self, id: &str) -> PageResult<bool> {
        let element = self.get(id)?;
        match element.kind {
            ElementKind::Checkbox => Ok(element.checked),
            _ => Err(PageError::wrong_kind(id, "a checkbox")),
        }
    }

    fn set_checked(&mut self, id: &str, checked: bool) -> PageResult<()> {
        self.checkbox_mut(id)?.checked = checked;
        Ok(())
    }

    fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    fn focus(&mut self, id: &str) -> PageResult<Option<String>> {
        self.get(id)?;
        Ok(self.focused.replace(id.to_owned()))
    }

    fn blur(&mut self) -> Option<String> {
        self.focused.take()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
