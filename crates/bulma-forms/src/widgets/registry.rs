//! Mapping from widget type keys to builders.

use std::collections::HashMap;

use serde_json::Value;

use super::{bulma, Widget};
use crate::attributes::FormAttributes;
use crate::field::Field;

/// Builds a widget from the form attributes, the field, its value, a class
/// override and an id override.
pub type WidgetBuilder =
    fn(&FormAttributes, &Field, &Value, Option<&str>, Option<&str>) -> Widget;

/// Widget builders keyed by widget type (`string`, `select`, `upload`, ...).
#[derive(Clone)]
pub struct WidgetRegistry {
    builders: HashMap<String, WidgetBuilder>,
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.keys();
        keys.sort_unstable();
        f.debug_struct("WidgetRegistry")
            .field("keys", &keys)
            .finish()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::bulma()
    }
}

impl WidgetRegistry {
    /// Creates a registry without any builder.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Creates a registry holding the Bulma builders.
    pub fn bulma() -> Self {
        Self::empty()
            .with("string", bulma::string)
            .with("int", bulma::int)
            .with("bigint", bulma::bigint)
            .with("float", bulma::float)
            .with("date", bulma::date)
            .with("time", bulma::time)
            .with("datetime", bulma::datetime)
            .with("text", bulma::text)
            .with("password", bulma::password)
            .with("bool", bulma::bool)
            .with("select", bulma::select)
            .with("upload", bulma::upload)
            .with("json", bulma::json)
            .with("jsonb", bulma::jsonb)
    }

    /// Registers a builder, replacing any previous one for `key`.
    pub fn register(&mut self, key: impl Into<String>, builder: WidgetBuilder) {
        self.builders.insert(key.into(), builder);
    }

    /// Builder method to register a builder.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, builder: WidgetBuilder) -> Self {
        self.register(key, builder);
        self
    }

    /// Returns the builder registered for `key`.
    pub fn get(&self, key: &str) -> Option<WidgetBuilder> {
        self.builders.get(key).copied()
    }

    /// Returns whether a builder is registered for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.builders.contains_key(key)
    }

    /// Returns the registered keys.
    pub fn keys(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }
}
