//! Form-level configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Result;

/// Where upload previews link to.
#[derive(Clone)]
pub enum UploadUrl {
    /// Base URL; the stored filename is appended after a `/`.
    Base(String),
    /// Function turning the stored filename into a URL.
    Builder(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl UploadUrl {
    /// Resolves the download URL of a stored file.
    pub fn resolve(&self, filename: &str) -> String {
        match self {
            Self::Base(base) => format!("{base}/{filename}"),
            Self::Builder(build) => build(filename),
        }
    }
}

impl std::fmt::Debug for UploadUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(base) => f.debug_tuple("Base").field(base).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// Options for one form render.
#[derive(Debug, Clone)]
pub struct FormAttributes {
    /// Prefix prepended to field names to build widget ids.
    pub id_prefix: String,
    /// Label of the submit button.
    pub submit: String,
    /// Download location for upload previews.
    pub upload: Option<UploadUrl>,
    /// HTML attributes placed on the `<form>` tag.
    pub html: BTreeMap<String, String>,
}

impl Default for FormAttributes {
    fn default() -> Self {
        Self {
            id_prefix: String::new(),
            submit: "Submit".to_string(),
            upload: None,
            html: BTreeMap::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawAttributes {
    #[serde(default)]
    id_prefix: String,
    #[serde(default = "default_submit")]
    submit: String,
    #[serde(default)]
    upload: Option<String>,
    #[serde(flatten)]
    html: BTreeMap<String, String>,
}

fn default_submit() -> String {
    "Submit".to_string()
}

impl<'de> Deserialize<'de> for FormAttributes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawAttributes::deserialize(deserializer)?;
        Ok(Self {
            id_prefix: raw.id_prefix,
            submit: raw.submit,
            upload: raw.upload.map(UploadUrl::Base),
            html: raw.html,
        })
    }
}

impl FormAttributes {
    /// Creates attributes with an empty id prefix and a "Submit" button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses attributes from a JSON object.
    ///
    /// `id_prefix`, `submit` and `upload` are recognised; every other key
    /// becomes an HTML attribute of the `<form>` tag.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the widget id prefix.
    #[must_use]
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Sets the submit button label.
    #[must_use]
    pub fn submit(mut self, label: impl Into<String>) -> Self {
        self.submit = label.into();
        self
    }

    /// Links upload previews to `base/<filename>`.
    #[must_use]
    pub fn upload_url(mut self, base: impl Into<String>) -> Self {
        self.upload = Some(UploadUrl::Base(base.into()));
        self
    }

    /// Links upload previews to the URL computed by `build`.
    #[must_use]
    pub fn upload_with<F>(mut self, build: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.upload = Some(UploadUrl::Builder(Arc::new(build)));
        self
    }

    /// Sets an HTML attribute of the `<form>` tag.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.insert(key.into(), value.into());
        self
    }

    /// Returns the widget id for a field name.
    pub fn widget_id(&self, name: &str) -> String {
        format!("{}{name}", self.id_prefix)
    }
}
