//! Customisation hooks for element composition.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label, P};

use crate::widgets::Widget;

/// Functions used to decorate one field while it is composed.
///
/// Start from [`StyleHooks::default`] and replace the hooks to change.
#[derive(Clone, Copy)]
pub struct StyleHooks {
    /// Adjusts a default widget before it is placed. Not called for
    /// user-defined widgets.
    pub style_widget: fn(&mut Widget),
    /// Builds the label from its text and the id of the widget.
    pub create_label: fn(&str, Option<&str>) -> String,
    /// Builds the error element.
    pub create_error: fn(&str) -> String,
    /// Builds the help text element.
    pub create_comment: fn(&str) -> String,
}

impl std::fmt::Debug for StyleHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleHooks").finish_non_exhaustive()
    }
}

impl Default for StyleHooks {
    fn default() -> Self {
        Self {
            style_widget: keep_widget,
            create_label: label,
            create_error: error,
            create_comment: comment,
        }
    }
}

/// Leaves the widget as the builder produced it.
pub fn keep_widget(_widget: &mut Widget) {}

/// `<label class="label">`, pointing at the widget when it has an id.
pub fn label(text: &str, widget_id: Option<&str>) -> String {
    match widget_id {
        Some(id) => html! {
            label.for_(#id).class("label") { #text }
        }
        .render(),
        None => Element::<Label>::new().class("label").text(text).render(),
    }
}

/// `<div class="emt_error">`.
pub fn error(message: &str) -> String {
    Element::<Div>::new().class("emt_error").text(message).render()
}

/// `<p class="emt_help">`.
pub fn comment(text: &str) -> String {
    Element::<P>::new().class("emt_help").text(text).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_points_at_widget() {
        let html = label("Email", Some("user_email"));
        assert!(html.starts_with("<label"));
        assert!(html.contains(r#"for="user_email""#));
        assert!(html.contains(r#"class="label""#));
        assert!(html.contains("Email"));
    }

    #[test]
    fn test_label_without_widget_id() {
        let html = label("Notes", None);
        assert!(!html.contains("for="));
        assert!(html.contains("Notes"));
    }

    #[test]
    fn test_error_and_comment() {
        let html = error("Required");
        assert!(html.contains(r#"class="emt_error""#));
        assert!(html.contains("Required"));

        let html = comment("Pick one");
        assert!(html.starts_with("<p"));
        assert!(html.contains(r#"class="emt_help""#));
        assert!(html.contains("Pick one"));
    }
}
