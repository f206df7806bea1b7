//! Whole-form rendering.

use std::collections::HashMap;

use serde_json::Value;

use crate::attributes::FormAttributes;
use crate::error::{Result, ValidationErrors};
use crate::field::Field;
use crate::style::StyleHooks;
use crate::styler::BulmaFormStyle;
use crate::widgets::{WidgetBuilder, WidgetRegistry};

/// A form definition that can be rendered any number of times.
///
/// Each call to [`Form::render`] uses its own [`BulmaFormStyle`], so a
/// `Form` can be shared between threads.
#[derive(Debug, Default)]
pub struct Form {
    attrs: FormAttributes,
    fields: Vec<Field>,
    hidden: Vec<(String, String)>,
    hooks: StyleHooks,
    registry: WidgetRegistry,
}

impl Form {
    /// Creates an empty form rendered with `attrs`.
    pub fn new(attrs: FormAttributes) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a hidden input, such as the id of the edited record.
    #[must_use]
    pub fn hidden(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden.push((key.into(), value.into()));
        self
    }

    /// Replaces the composition hooks.
    #[must_use]
    pub fn hooks(mut self, hooks: StyleHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Registers a widget builder for a type key.
    #[must_use]
    pub fn widget(mut self, key: impl Into<String>, builder: WidgetBuilder) -> Self {
        self.registry.register(key, builder);
        self
    }

    /// Returns the fields in render order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the form attributes.
    pub fn attributes(&self) -> &FormAttributes {
        &self.attrs
    }

    /// Renders the form.
    ///
    /// Values are looked up by field name (missing values render as empty)
    /// and each field shows its first validation error. Fails without
    /// output when a field has no widget builder.
    pub fn render(
        &self,
        values: &HashMap<String, Value>,
        errors: &ValidationErrors,
        csrf_token: &str,
    ) -> Result<String> {
        let mut style = BulmaFormStyle::new(&self.attrs, &self.registry).with_hooks(self.hooks);
        style.on_start();
        let null = Value::Null;
        for field in &self.fields {
            let value = values.get(&field.name).unwrap_or(&null);
            style.add_field(field, value, errors.first(&field.name))?;
        }
        for (key, value) in &self.hidden {
            style.add_hidden(key, value);
        }
        style.add_formkey(csrf_token);
        style.add_buttons();
        Ok(style.render())
    }
}
