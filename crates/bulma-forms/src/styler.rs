//! The Bulma form style: widget resolution and form assembly.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;
use serde_json::Value;
use tracing::{debug, warn};

use crate::attributes::FormAttributes;
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::style::StyleHooks;
use crate::widgets::{html_escape, Input, Widget, WidgetRegistry};

/// Name of the hidden input carrying the anti-forgery token.
pub const CSRF_FIELD: &str = "_csrf_token";

/// One field while it is being composed.
#[derive(Debug, Clone)]
pub struct RenderElement {
    /// The widget.
    pub widget: Widget,
    /// Whether the widget came from the field itself rather than a builder.
    pub user_defined: bool,
    /// Label markup.
    pub label: String,
    /// Help text markup.
    pub comment: Option<String>,
    /// Error markup.
    pub error: Option<String>,
}

impl RenderElement {
    /// Creates an element holding only its widget.
    pub fn new(widget: Widget, user_defined: bool) -> Self {
        Self {
            widget,
            user_defined,
            label: String::new(),
            comment: None,
            error: None,
        }
    }
}

/// Renders one form with Bulma classes.
///
/// A style accumulates the form body as fields are added, so use one
/// instance per rendered form:
///
/// ```rust
/// use bulma_forms::{BulmaFormStyle, Field, FormAttributes};
/// use bulma_forms::widgets::WidgetRegistry;
/// use serde_json::json;
///
/// let attrs = FormAttributes::new().submit("Save").attr("method", "post");
/// let registry = WidgetRegistry::bulma();
///
/// let mut style = BulmaFormStyle::new(&attrs, &registry);
/// style.on_start();
/// style.add_field(&Field::new("title", "string"), &json!("Hello"), None)?;
/// style.add_formkey("token");
/// style.add_buttons();
/// let html = style.render();
///
/// assert!(html.starts_with(r#"<form method="post">"#));
/// # Ok::<(), bulma_forms::FormError>(())
/// ```
#[derive(Debug)]
pub struct BulmaFormStyle<'a> {
    attrs: &'a FormAttributes,
    registry: &'a WidgetRegistry,
    hooks: StyleHooks,
    parent: Vec<String>,
}

impl<'a> BulmaFormStyle<'a> {
    /// Creates a style rendering with `attrs` and the builders of `registry`.
    pub fn new(attrs: &'a FormAttributes, registry: &'a WidgetRegistry) -> Self {
        Self {
            attrs,
            registry,
            hooks: StyleHooks::default(),
            parent: Vec::new(),
        }
    }

    /// Replaces the composition hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: StyleHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Starts a new form body.
    pub fn on_start(&mut self) {
        self.parent.clear();
    }

    /// Returns the widget for a field and whether the field supplied it.
    ///
    /// Default widgets are looked up by type key: `select` when a validator
    /// enumerates options, `int` for references, `float` for decimals and
    /// the base type otherwise. Widgets of read-only fields come back
    /// disabled.
    pub fn resolve_widget(&self, field: &Field, value: &Value) -> Result<(Widget, bool)> {
        if let Some(widget) = &field.widget {
            debug!(field = %field.name, "Using user-defined widget");
            return Ok((widget(field, value), true));
        }

        let kind = widget_kind(field);
        let Some(builder) = self.registry.get(kind) else {
            warn!(field = %field.name, kind = %kind, "No widget builder registered");
            return Err(FormError::MissingWidget {
                field: field.name.clone(),
                kind: kind.to_string(),
            });
        };

        let id = self.attrs.widget_id(&field.name);
        let mut widget = builder(self.attrs, field, value, None, Some(id.as_str()));
        if !field.writable {
            widget.disable();
        }
        debug!(field = %field.name, kind = %kind, "Resolved widget");
        Ok((widget, false))
    }

    /// Resolves the widget of a field and appends the composed field to
    /// the form body.
    pub fn add_field(&mut self, field: &Field, value: &Value, error: Option<&str>) -> Result<()> {
        let (widget, user_defined) = self.resolve_widget(field, value)?;
        self.add_element(
            RenderElement::new(widget, user_defined),
            &field.label,
            field.comment.as_deref(),
            error,
        );
        Ok(())
    }

    /// Decorates an element with its label, comment and error, then
    /// appends it to the form body.
    pub fn add_element(
        &mut self,
        mut element: RenderElement,
        label: &str,
        comment: Option<&str>,
        error: Option<&str>,
    ) {
        if !element.user_defined {
            (self.hooks.style_widget)(&mut element.widget);
        }
        element.label = (self.hooks.create_label)(label, element.widget.id());
        element.comment = comment
            .filter(|c| !c.is_empty())
            .map(self.hooks.create_comment);
        element.error = error.filter(|e| !e.is_empty()).map(self.hooks.create_error);
        self.add_widget(&element);
    }

    fn add_widget(&mut self, element: &RenderElement) {
        let error = element.error.as_deref().unwrap_or_default();
        let comment = element.comment.as_deref().unwrap_or_default();
        let block = html! { div.class("field") }
            .raw(&element.label)
            .child::<Div, _>(|d| {
                d.class("control")
                    .raw(element.widget.render())
                    .when(element.error.is_some(), |d| d.raw(error))
                    .when(element.comment.is_some(), |d| d.raw(comment))
            })
            .render();
        self.parent.push(block);
    }

    /// Appends a hidden input.
    pub fn add_hidden(&mut self, key: &str, value: &str) {
        self.parent.push(Input::hidden(key, value).render());
    }

    /// Appends the hidden anti-forgery token input.
    pub fn add_formkey(&mut self, token: &str) {
        self.add_hidden(CSRF_FIELD, token);
    }

    /// Appends the submit button.
    pub fn add_buttons(&mut self) {
        let submit = Input::new("submit")
            .value(&self.attrs.submit)
            .attr("class", "button is-primary");
        self.parent
            .push(Element::<Div>::new().raw(submit.render()).render());
    }

    /// Wraps the form body into the `<form>` element.
    pub fn render(self) -> String {
        let form_attrs: String = self
            .attrs
            .html
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect();
        debug!(fragments = self.parent.len(), "Rendered form");
        format!("<form{form_attrs}>{}</form>", self.parent.concat())
    }
}

/// Returns the widget type key a field's default widget is looked up by.
pub fn widget_kind(field: &Field) -> &str {
    let base = field.base_type();
    if field.options_validator().is_some() {
        "select"
    } else if base.starts_with("reference") {
        "int"
    } else if base.starts_with("decimal") {
        "float"
    } else {
        base
    }
}
