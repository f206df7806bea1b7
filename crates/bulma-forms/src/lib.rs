//! # bulma-forms
//!
//! Form rendering with Bulma CSS classes.
//!
//! The host application owns the field definitions, validation and CSRF
//! tokens. This crate turns each field, its current value and its
//! validation error into markup, and assembles the fields into a `<form>`.
//!
//! This crate provides:
//! - Field descriptors with validators that drive widget selection
//! - Bulma widget builders, dispatched by the field's type tag
//! - Label, error and help text composition with replaceable hooks
//! - Hidden inputs, anti-forgery token and submit button
//!
//! ## Quick Start
//!
//! ```rust
//! use bulma_forms::{Field, Form, FormAttributes, ValidationErrors};
//! use bulma_forms::validation::IsIn;
//! use serde_json::{json, Value};
//! use std::collections::HashMap;
//!
//! let form = Form::new(
//!     FormAttributes::new()
//!         .submit("Save")
//!         .attr("method", "post")
//!         .attr("action", "/posts/42"),
//! )
//! .field(Field::new("title", "string").comment("Shown on the front page"))
//! .field(Field::new("published", "bool"))
//! .field(
//!     Field::new("status", "string")
//!         .validator(IsIn::new(vec![("draft", "Draft"), ("live", "Live")])),
//! )
//! .hidden("id", "42");
//!
//! let values: HashMap<String, Value> = HashMap::from([
//!     ("title".to_string(), json!("Hello")),
//!     ("published".to_string(), json!(true)),
//!     ("status".to_string(), json!("live")),
//! ]);
//! let errors = ValidationErrors::new();
//!
//! let html = form.render(&values, &errors, "csrf-token").unwrap();
//! assert!(html.contains(r#"<option value="live" selected>Live</option>"#));
//! ```
//!
//! ## Widget selection
//!
//! A field's widget comes from, in order:
//! 1. the widget function set with [`Field::widget`];
//! 2. the `select` builder when a validator enumerates options;
//! 3. the `int` builder for `reference:*` types and the `float` builder for
//!    `decimal:*` types;
//! 4. the builder registered under the field's base type.
//!
//! An unknown type fails the render with [`FormError::MissingWidget`].
//!
//! ## Widgets
//!
//! Builders registered by default (see [`widgets::bulma`]):
//! - `string`, `int`, `bigint`, `float` - text input
//! - `date`, `time`, `datetime` - text input with a picker class
//! - `text`, `json`, `jsonb` - textarea
//! - `password` - password input
//! - `bool` - checkbox
//! - `select` - dropdown, multi-select when the validator allows it
//! - `upload` - file input with preview and delete checkbox

mod attributes;
mod error;
mod field;
mod form;
pub mod style;
mod styler;
pub mod validation;
pub mod value;
pub mod widgets;

pub use attributes::{FormAttributes, UploadUrl};
pub use error::{FormError, Result, ValidationErrors};
pub use field::{Field, WidgetFn};
pub use form::Form;
pub use style::StyleHooks;
pub use styler::{widget_kind, BulmaFormStyle, RenderElement, CSRF_FIELD};
pub use widgets::{Widget, WidgetRegistry};
