//! Form widgets and their HTML rendering.
//!
//! A [`Widget`] stays a value until the form is rendered, so the form style
//! can still add classes or mark it disabled after a builder produced it.

pub mod bulma;
mod registry;

pub use registry::{WidgetBuilder, WidgetRegistry};

use std::collections::BTreeMap;

/// Attributes that can be applied to a widget.
///
/// Attributes render in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Appends a class to the `class` attribute.
    pub fn add_class(&mut self, class: &str) {
        let classes = self.attrs.entry("class".to_string()).or_default();
        if classes.split_whitespace().any(|c| c == class) {
            return;
        }
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    fn suffix(&self) -> String {
        if self.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", self.to_html())
        }
    }
}

impl From<BTreeMap<String, String>> for WidgetAttrs {
    fn from(attrs: BTreeMap<String, String>) -> Self {
        Self { attrs }
    }
}

/// An `<input>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The HTML input type (text, password, checkbox, file, hidden, ...).
    pub input_type: String,
    /// The `name` attribute.
    pub name: Option<String>,
    /// The `value` attribute.
    pub value: Option<String>,
    /// Whether the `checked` flag is rendered.
    pub checked: bool,
    /// Remaining attributes.
    pub attrs: WidgetAttrs,
}

impl Input {
    /// Creates an input of the given type.
    pub fn new(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            name: None,
            value: None,
            checked: false,
            attrs: WidgetAttrs::new(),
        }
    }

    /// Creates a hidden input.
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("hidden").name(name).value(value)
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the checked flag.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Renders the input as HTML.
    pub fn render(&self) -> String {
        let name_attr = self
            .name
            .as_ref()
            .map(|n| format!(r#" name="{}""#, html_escape(n)))
            .unwrap_or_default();
        let value_attr = self
            .value
            .as_ref()
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let checked_attr = if self.checked { " checked" } else { "" };

        format!(
            r#"<input type="{}"{name_attr}{value_attr}{checked_attr}{}>"#,
            self.input_type,
            self.attrs.suffix()
        )
    }
}

/// A `<textarea>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    /// The `name` attribute.
    pub name: String,
    /// Text content.
    pub content: String,
    /// Remaining attributes.
    pub attrs: WidgetAttrs,
}

impl TextArea {
    /// Renders the textarea as HTML.
    pub fn render(&self) -> String {
        format!(
            r#"<textarea name="{}"{}>{}</textarea>"#,
            html_escape(&self.name),
            self.attrs.suffix(),
            html_escape(&self.content)
        )
    }
}

/// One `<option>` of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted key.
    pub value: String,
    /// Display name.
    pub label: String,
    /// Whether the option is preselected.
    pub selected: bool,
}

/// A `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    /// The `name` attribute.
    pub name: String,
    /// Available options.
    pub options: Vec<SelectOption>,
    /// Whether several options may be chosen.
    pub multiple: bool,
    /// Remaining attributes.
    pub attrs: WidgetAttrs,
}

impl Select {
    /// Returns the keys of the preselected options.
    pub fn selected(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Renders the select as HTML.
    pub fn render(&self) -> String {
        let options: String = self
            .options
            .iter()
            .map(|o| {
                let selected_attr = if o.selected { " selected" } else { "" };
                format!(
                    r#"<option value="{}"{selected_attr}>{}</option>"#,
                    html_escape(&o.value),
                    html_escape(&o.label)
                )
            })
            .collect();
        let multiple_attr = if self.multiple {
            r#" multiple="multiple""#
        } else {
            ""
        };

        format!(
            r#"<select name="{}"{multiple_attr}{}>{options}</select>"#,
            html_escape(&self.name),
            self.attrs.suffix()
        )
    }
}

/// Preview of a file already stored for an upload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPreview {
    /// Inline thumbnail.
    Image { src: String },
    /// Download link labelled with the filename.
    Link { href: String, filename: String },
}

impl UploadPreview {
    fn render(&self) -> String {
        match self {
            Self::Image { src } => format!(
                r#"<img src="{}" width="120px" class="xupload_img">"#,
                html_escape(src)
            ),
            Self::Link { href, filename } => format!(
                r#"<div><a href="{}">{}</a></div>"#,
                html_escape(href),
                html_escape(filename)
            ),
        }
    }
}

/// A file input with an optional preview and delete checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// The `<input type="file">`.
    pub input: Input,
    /// Preview of the stored file.
    pub preview: Option<UploadPreview>,
    /// Checkbox asking the host to clear the stored file.
    pub delete: Option<Input>,
}

impl Upload {
    /// Renders the upload block as HTML.
    pub fn render(&self) -> String {
        let preview = self
            .preview
            .as_ref()
            .map(UploadPreview::render)
            .unwrap_or_default();
        let delete = self
            .delete
            .as_ref()
            .map(|checkbox| {
                let label_for = checkbox
                    .attrs
                    .get("id")
                    .map(|id| format!(r#" for="{}""#, html_escape(id)))
                    .unwrap_or_default();
                format!(
                    r#"<div class="file">{}<label{label_for} class="file-label">delete</label></div>"#,
                    checkbox.render()
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="file">{}{preview}{delete}</div>"#,
            self.input.render()
        )
    }
}

/// One choice of a [`RadioGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    /// Submitted key.
    pub value: String,
    /// Display name.
    pub label: String,
    /// Whether the choice is preselected.
    pub checked: bool,
}

/// A group of radio inputs sharing one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    /// The shared `name` attribute.
    pub name: String,
    /// Available choices.
    pub options: Vec<RadioOption>,
    /// Attributes applied to every radio input.
    pub attrs: WidgetAttrs,
}

impl RadioGroup {
    /// Renders one wrapper per choice.
    pub fn render(&self) -> String {
        self.options
            .iter()
            .map(|o| {
                let id = format!("{}_{}", self.name, o.value);
                let mut input = Input::new("radio")
                    .name(&self.name)
                    .value(&o.value)
                    .checked(o.checked)
                    .attr("id", &id);
                input.attrs.attrs.extend(self.attrs.attrs.clone());
                format!(
                    r#"<div class="xoption_wrap">{}<label for="{}">{}</label></div>"#,
                    input.render(),
                    html_escape(&id),
                    html_escape(&o.label)
                )
            })
            .collect()
    }
}

/// Pre-rendered HTML supplied by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    /// Raw HTML, emitted as is.
    pub html: String,
    /// Id a label should point to.
    pub id: Option<String>,
}

/// A form control produced by a widget builder or a user-defined widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Input(Input),
    TextArea(TextArea),
    Select(Select),
    Upload(Upload),
    Radio(RadioGroup),
    Markup(Markup),
}

impl Widget {
    /// Wraps pre-rendered HTML.
    pub fn markup(html: impl Into<String>) -> Self {
        Self::Markup(Markup {
            html: html.into(),
            id: None,
        })
    }

    /// Returns the element id a label should point to.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Input(input) => input.attrs.get("id").map(String::as_str),
            Self::TextArea(area) => area.attrs.get("id").map(String::as_str),
            Self::Select(select) => select.attrs.get("id").map(String::as_str),
            Self::Upload(upload) => upload.input.attrs.get("id").map(String::as_str),
            Self::Radio(_) => None,
            Self::Markup(markup) => markup.id.as_deref(),
        }
    }

    /// Returns the attributes of the main control.
    pub fn attrs_mut(&mut self) -> Option<&mut WidgetAttrs> {
        match self {
            Self::Input(input) => Some(&mut input.attrs),
            Self::TextArea(area) => Some(&mut area.attrs),
            Self::Select(select) => Some(&mut select.attrs),
            Self::Upload(upload) => Some(&mut upload.input.attrs),
            Self::Radio(group) => Some(&mut group.attrs),
            Self::Markup(_) => None,
        }
    }

    /// Marks every control of the widget disabled.
    ///
    /// Pre-rendered markup is left untouched.
    pub fn disable(&mut self) {
        if let Self::Upload(Upload {
            delete: Some(checkbox),
            ..
        }) = self
        {
            checkbox.attrs.set("disabled", "disabled");
        }
        if let Some(attrs) = self.attrs_mut() {
            attrs.set("disabled", "disabled");
        }
    }

    /// Returns whether the main control carries the disabled marker.
    pub fn is_disabled(&self) -> bool {
        let attrs = match self {
            Self::Input(input) => &input.attrs,
            Self::TextArea(area) => &area.attrs,
            Self::Select(select) => &select.attrs,
            Self::Upload(upload) => &upload.input.attrs,
            Self::Radio(group) => &group.attrs,
            Self::Markup(_) => return false,
        };
        attrs.get("disabled").is_some()
    }

    /// Renders the widget as HTML.
    pub fn render(&self) -> String {
        match self {
            Self::Input(input) => input.render(),
            Self::TextArea(area) => area.render(),
            Self::Select(select) => select.render(),
            Self::Upload(upload) => upload.render(),
            Self::Radio(group) => group.render(),
            Self::Markup(markup) => markup.html.clone(),
        }
    }
}

impl From<Input> for Widget {
    fn from(input: Input) -> Self {
        Self::Input(input)
    }
}

impl From<TextArea> for Widget {
    fn from(area: TextArea) -> Self {
        Self::TextArea(area)
    }
}

impl From<Select> for Widget {
    fn from(select: Select) -> Self {
        Self::Select(select)
    }
}

impl From<Upload> for Widget {
    fn from(upload: Upload) -> Self {
        Self::Upload(upload)
    }
}

impl From<RadioGroup> for Widget {
    fn from(group: RadioGroup) -> Self {
        Self::Radio(group)
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
