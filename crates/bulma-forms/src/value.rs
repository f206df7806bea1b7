//! Helpers for reading host-supplied field values.
//!
//! Values arrive as [`serde_json::Value`], which covers every shape a host
//! hands over: strings, string lists for multi-valued fields, booleans,
//! numbers and null for absent values.

use serde_json::Value;

/// Form-oriented views over a [`Value`].
pub trait ValueExt {
    /// Returns whether the value counts as set.
    ///
    /// Null, `false`, zero, and empty strings, arrays or objects are falsy.
    fn is_truthy(&self) -> bool;

    /// Returns the text placed into a `value` attribute or element content.
    fn to_form_string(&self) -> String;

    /// Returns the value as a list of strings.
    ///
    /// Arrays map item by item, null is empty and any scalar is a
    /// one-element list.
    fn to_string_list(&self) -> Vec<String>;
}

impl ValueExt for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Array(items) => !items.is_empty(),
            Self::Object(map) => !map.is_empty(),
        }
    }

    fn to_form_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::String(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }

    fn to_string_list(&self) -> Vec<String> {
        match self {
            Self::Null => Vec::new(),
            Self::Array(items) => items.iter().map(ValueExt::to_form_string).collect(),
            other => vec![other.to_form_string()],
        }
    }
}
