//! Per-field message configuration.
//!
//! Messages are handlebars templates keyed by reason code. They are rendered
//! with a small context so a text can quote the rule it describes, e.g.
//! `"At least {{min_length}} characters"`.

use std::collections::BTreeMap;

use handlebars::{no_escape, Handlebars};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{ReasonCode, MIN_PASSWORD_LENGTH};

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hbs = Handlebars::new();
    // Messages end up as element text, not markup
    hbs.register_escape_fn(no_escape);
    hbs
});

#[derive(Serialize)]
struct MessageContext {
    min_length: usize,
}

const CONTEXT: MessageContext = MessageContext {
    min_length: MIN_PASSWORD_LENGTH,
};

/// Message templates of one field, keyed by the reason code they explain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMessages(BTreeMap<ReasonCode, String>);

impl FieldMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FieldMessages::insert`]
    pub fn with(mut self, reason: ReasonCode, template: impl Into<String>) -> Self {
        self.insert(reason, template);
        self
    }

    pub fn insert(&mut self, reason: ReasonCode, template: impl Into<String>) {
        self.0.insert(reason, template.into());
    }

    pub fn get(&self, reason: ReasonCode) -> Option<&str> {
        self.0.get(&reason).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReasonCode, &str)> {
        self.0.iter().map(|(reason, template)| (*reason, template.as_str()))
    }

    /// Overrides the templates of `self` with those of `other`
    pub fn merge(&mut self, other: &FieldMessages) {
        for (reason, template) in other.iter() {
            self.insert(reason, template);
        }
    }

    /// Text to display for `reason`. Falls back to the reason code itself
    /// when the field has no message for it.
    pub fn render(&self, reason: ReasonCode) -> String {
        let Some(template) = self.get(reason) else {
            warn!("No message configured for reason `{reason}`");
            return reason.to_string();
        };

        TEMPLATES
            .render_template(template, &CONTEXT)
            .unwrap_or_else(|e| {
                warn!("Could not render message for reason `{reason}`: {e}");
                template.to_owned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_message() {
        let messages = FieldMessages::new().with(ReasonCode::Required, "Email is required.");
        assert_eq!(messages.render(ReasonCode::Required), "Email is required.");
    }

    #[test]
    fn test_render_with_context() {
        let messages =
            FieldMessages::new().with(ReasonCode::MinLength, "At least {{min_length}} characters");
        assert_eq!(messages.render(ReasonCode::MinLength), "At least 8 characters");
    }

    #[test]
    fn test_render_is_not_html_escaped() {
        let messages = FieldMessages::new().with(ReasonCode::Special, "Add one of !@#$%^&*<>");
        assert_eq!(messages.render(ReasonCode::Special), "Add one of !@#$%^&*<>");
    }

    #[test]
    fn test_missing_message_falls_back_to_reason() {
        let messages = FieldMessages::new();
        assert_eq!(messages.render(ReasonCode::MinLength), "minlength");
    }

    #[test]
    fn test_broken_template_is_shown_verbatim() {
        let messages = FieldMessages::new().with(ReasonCode::Invalid, "Broken {{#if}}");
        assert_eq!(messages.render(ReasonCode::Invalid), "Broken {{#if}}");
    }

    #[test]
    fn test_merge_overrides_named_reasons_only() {
        let mut base = FieldMessages::new()
            .with(ReasonCode::Required, "base required")
            .with(ReasonCode::Invalid, "base invalid");
        base.merge(&FieldMessages::new().with(ReasonCode::Invalid, "custom invalid"));

        assert_eq!(base.get(ReasonCode::Required), Some("base required"));
        assert_eq!(base.get(ReasonCode::Invalid), Some("custom invalid"));
    }
}
