//! Field descriptors supplied by the host.

use std::sync::Arc;

use serde_json::Value;

use crate::validation::Validator;
use crate::widgets::Widget;

/// A user-supplied widget constructor that replaces the default one.
pub type WidgetFn = Arc<dyn Fn(&Field, &Value) -> Widget + Send + Sync>;

/// Definition of a form field.
pub struct Field {
    /// Field name.
    pub name: String,
    /// Type tag, optionally namespaced as `basetype:subtype`.
    pub field_type: String,
    /// Field label.
    pub label: String,
    /// Help text displayed under the widget.
    pub comment: Option<String>,
    /// Whether the field can be edited.
    pub writable: bool,
    /// Explicit widget constructor.
    pub widget: Option<WidgetFn>,
    /// Validators.
    pub requires: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("label", &self.label)
            .field("comment", &self.comment)
            .field("writable", &self.writable)
            .field("widget", &self.widget.is_some())
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates a new writable field with a label derived from its name.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: humanize(&name),
            name,
            field_type: field_type.into(),
            comment: None,
            writable: true,
            widget: None,
            requires: Vec::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the field read-only.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.requires.push(Box::new(validator));
        self
    }

    /// Replaces the default widget with a custom constructor.
    #[must_use]
    pub fn widget<F>(mut self, widget: F) -> Self
    where
        F: Fn(&Field, &Value) -> Widget + Send + Sync + 'static,
    {
        self.widget = Some(Arc::new(widget));
        self
    }

    /// Returns the type tag without its subtype (`reference:users` -> `reference`).
    pub fn base_type(&self) -> &str {
        self.field_type
            .split_once(':')
            .map_or(self.field_type.as_str(), |(base, _)| base)
    }

    /// Returns the subtype of a namespaced type tag, if any.
    pub fn subtype(&self) -> Option<&str> {
        self.field_type.split_once(':').map(|(_, sub)| sub)
    }

    /// Returns the first validator that enumerates options.
    pub fn options_validator(&self) -> Option<&dyn Validator> {
        self.requires
            .iter()
            .find(|v| v.options().is_some())
            .map(|v| &**v)
    }

    /// Returns the enumerated options and whether several may be chosen.
    pub fn options(&self) -> (Vec<(String, String)>, bool) {
        self.options_validator()
            .map(|v| (v.options().unwrap_or_default(), v.is_multiple()))
            .unwrap_or_default()
    }

    /// Returns whether the field may be left empty.
    ///
    /// A field without validators counts as optional, as does one carrying
    /// at least one validator that accepts empty values.
    pub fn is_optional(&self) -> bool {
        self.requires.is_empty() || self.requires.iter().any(|v| v.allows_empty())
    }
}

fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
