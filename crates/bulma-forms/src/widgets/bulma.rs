//! Bulma widget builders, one per widget type key.
//!
//! Every builder takes the form attributes, the field, its current value,
//! an optional class replacing the builder's default and an optional id
//! (the field name when absent).

use serde_json::Value;

use super::{
    Input, RadioGroup, RadioOption, Select, SelectOption, TextArea, Upload, UploadPreview, Widget,
    WidgetAttrs,
};
use crate::attributes::FormAttributes;
use crate::field::Field;
use crate::value::ValueExt;

const IMAGE_EXTENSIONS: [&str; 5] = ["gif", "png", "jpg", "jpeg", "bmp"];

fn text_input(field: &Field, value: &Value, class: &str, id: Option<&str>) -> Widget {
    Input::new("text")
        .name(&field.name)
        .value(value.to_form_string())
        .attr("class", class)
        .attr("id", id.unwrap_or(&field.name))
        .into()
}

/// Single-line text input.
pub fn string(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text_input(field, value, class.unwrap_or("input"), id)
}

/// Integer input, rendered as a text input.
pub fn int(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    string(attrs, field, value, class, id)
}

/// Big integer input, rendered as a text input.
pub fn bigint(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    string(attrs, field, value, class, id)
}

/// Float input, rendered as a text input.
pub fn float(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    string(attrs, field, value, class, id)
}

/// Date input; the `date` class hooks client-side pickers.
pub fn date(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text_input(field, value, class.unwrap_or("date"), id)
}

/// Time input.
pub fn time(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text_input(field, value, class.unwrap_or("time"), id)
}

/// Date and time input.
pub fn datetime(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text_input(field, value, class.unwrap_or("datetime"), id)
}

/// Multi-line text input.
pub fn text(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    let content = if value.is_truthy() {
        value.to_form_string()
    } else {
        String::new()
    };
    TextArea {
        name: field.name.clone(),
        content,
        attrs: WidgetAttrs::new()
            .with("class", class.unwrap_or("textarea"))
            .with("id", id.unwrap_or(&field.name)),
    }
    .into()
}

/// Password input.
pub fn password(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    let value = if value.is_truthy() {
        value.to_form_string()
    } else {
        String::new()
    };
    Input::new("password")
        .name(&field.name)
        .value(value)
        .attr("class", class.unwrap_or("input"))
        .attr("id", id.unwrap_or(&field.name))
        .into()
}

/// Checkbox, checked when the value is truthy.
pub fn bool(
    _attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    Input::new("checkbox")
        .name(&field.name)
        .checked(value.is_truthy())
        .attr("class", class.unwrap_or("bool"))
        .attr("id", id.unwrap_or(&field.name))
        .into()
}

/// Dropdown over the options of the field's enumerating validator.
///
/// Delegates to [`multiple`] when that validator allows several choices.
pub fn select(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    let (options, is_multiple) = field.options();
    if is_multiple {
        return multiple(attrs, field, value, options, class, id);
    }

    let current = (!value.is_null()).then(|| value.to_form_string());
    Select {
        name: field.name.clone(),
        options: options
            .into_iter()
            .map(|(key, label)| SelectOption {
                selected: current.as_deref() == Some(key.as_str()),
                value: key,
                label,
            })
            .collect(),
        multiple: false,
        attrs: WidgetAttrs::new()
            .with("class", class.unwrap_or("select"))
            .with("id", id.unwrap_or(&field.name)),
    }
    .into()
}

/// Multi-select; every option whose key is among the values is selected.
pub fn multiple(
    _attrs: &FormAttributes,
    field: &Field,
    values: &Value,
    options: Vec<(String, String)>,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    let current = values.to_string_list();
    Select {
        name: field.name.clone(),
        options: options
            .into_iter()
            .map(|(key, label)| SelectOption {
                selected: current.contains(&key),
                value: key,
                label,
            })
            .collect(),
        multiple: true,
        attrs: WidgetAttrs::new()
            .with("class", class.unwrap_or("select"))
            .with("id", id.unwrap_or(&field.name)),
    }
    .into()
}

fn is_image(filename: &str) -> bool {
    filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// File input with a preview of the stored file.
///
/// The preview and the delete checkbox only appear when a file is stored
/// and the form attributes say where to download it from. The delete
/// checkbox, named `<field>__del`, is offered for optional fields only.
pub fn upload(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    let id = id.unwrap_or(&field.name);
    let filename = value.as_str().unwrap_or_default();
    let input = Input::new("file")
        .name(&field.name)
        .attr("class", class.unwrap_or("upload"))
        .attr("id", id);

    let mut preview = None;
    let mut delete = None;
    if let Some(download) = attrs.upload.as_ref().filter(|_| !filename.is_empty()) {
        let url = download.resolve(filename);
        preview = Some(if is_image(filename) {
            UploadPreview::Image { src: url }
        } else {
            UploadPreview::Link {
                href: url,
                filename: filename.to_string(),
            }
        });
        if field.is_optional() {
            delete = Some(
                Input::new("checkbox")
                    .name(format!("{}__del", field.name))
                    .attr("class", "xcheckbox")
                    .attr("id", format!("{id}__del"))
                    .attr("style", "display: inline;"),
            );
        }
    }

    Upload {
        input,
        preview,
        delete,
    }
    .into()
}

/// JSON document, edited as text.
pub fn json(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    _class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text(attrs, field, value, None, id)
}

/// Binary JSON document, edited as text.
pub fn jsonb(
    attrs: &FormAttributes,
    field: &Field,
    value: &Value,
    _class: Option<&str>,
    id: Option<&str>,
) -> Widget {
    text(attrs, field, value, None, id)
}

/// Radio buttons over the options of the field's enumerating validator.
///
/// Not part of the default dispatch table; assign it as a field's widget:
///
/// ```rust
/// use bulma_forms::Field;
/// use bulma_forms::validation::IsIn;
/// use bulma_forms::widgets::bulma;
///
/// let field = Field::new("size", "string")
///     .validator(IsIn::new(vec![("s", "Small"), ("l", "Large")]))
///     .widget(bulma::radio);
/// ```
pub fn radio(field: &Field, value: &Value) -> Widget {
    let (options, _) = field.options();
    let current = (!value.is_null()).then(|| value.to_form_string());
    RadioGroup {
        name: field.name.clone(),
        options: options
            .into_iter()
            .map(|(key, label)| RadioOption {
                checked: current.as_deref() == Some(key.as_str()),
                value: key,
                label,
            })
            .collect(),
        attrs: WidgetAttrs::new(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{IsEmptyOr, IsIn, IsNotEmpty};
    use serde_json::json;

    fn attrs() -> FormAttributes {
        FormAttributes::new()
    }

    #[test]
    fn test_string_defaults() {
        let field = Field::new("title", "string");
        let html = string(&attrs(), &field, &Value::Null, None, None).render();
        assert_eq!(
            html,
            r#"<input type="text" name="title" value="" class="input" id="title">"#
        );
    }

    #[test]
    fn test_string_keeps_falsy_numbers() {
        let field = Field::new("count", "int");
        let html = int(&attrs(), &field, &json!(0), None, Some("f_count")).render();
        assert!(html.contains(r#"value="0""#));
        assert!(html.contains(r#"id="f_count""#));
    }

    #[test]
    fn test_date_classes() {
        let field = Field::new("when", "date");
        assert!(date(&attrs(), &field, &json!("2024-01-02"), None, None)
            .render()
            .contains(r#"class="date""#));
        assert!(time(&attrs(), &field, &Value::Null, None, None)
            .render()
            .contains(r#"class="time""#));
        assert!(datetime(&attrs(), &field, &Value::Null, None, None)
            .render()
            .contains(r#"class="datetime""#));
    }

    #[test]
    fn test_text_content() {
        let field = Field::new("body", "text");
        let html = text(&attrs(), &field, &json!("Hello"), None, None).render();
        assert_eq!(
            html,
            r#"<textarea name="body" class="textarea" id="body">Hello</textarea>"#
        );
    }

    #[test]
    fn test_password_empty_when_absent() {
        let field = Field::new("secret", "password");
        let html = password(&attrs(), &field, &Value::Null, None, None).render();
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"value="""#));
    }

    #[test]
    fn test_bool_checked_only_when_truthy() {
        let field = Field::new("active", "bool");
        assert!(bool(&attrs(), &field, &json!(true), None, None)
            .render()
            .contains(" checked"));
        assert!(!bool(&attrs(), &field, &json!(false), None, None)
            .render()
            .contains(" checked"));
        assert!(!bool(&attrs(), &field, &Value::Null, None, None)
            .render()
            .contains(" checked"));
    }

    #[test]
    fn test_select_single() {
        let field =
            Field::new("status", "string").validator(IsIn::new(vec![("a", "A"), ("b", "B")]));
        let widget = select(&attrs(), &field, &json!("b"), None, None);
        let Widget::Select(select) = &widget else {
            panic!("expected a select, got {widget:?}");
        };
        assert!(!select.multiple);
        assert_eq!(select.selected(), vec!["b"]);
        assert!(widget
            .render()
            .contains(r#"<option value="b" selected>B</option>"#));
    }

    #[test]
    fn test_select_matches_numbers_as_strings() {
        let field = Field::new("author", "reference:users")
            .validator(IsIn::new(vec![("1", "Ann"), ("2", "Bob")]));
        let widget = select(&attrs(), &field, &json!(2), None, None);
        assert!(widget
            .render()
            .contains(r#"<option value="2" selected>Bob</option>"#));
    }

    #[test]
    fn test_select_null_selects_nothing() {
        let field = Field::new("status", "string").validator(IsIn::new(vec![("", "None")]));
        let Widget::Select(select) = select(&attrs(), &field, &Value::Null, None, None) else {
            panic!("expected a select");
        };
        assert!(select.selected().is_empty());
    }

    #[test]
    fn test_select_multiple() {
        let field = Field::new("tags", "list:string")
            .validator(IsIn::new(vec![("a", "A"), ("b", "B"), ("c", "C")]).multiple());
        let widget = select(&attrs(), &field, &json!(["a", "c"]), None, None);
        let Widget::Select(select) = &widget else {
            panic!("expected a select, got {widget:?}");
        };
        assert!(select.multiple);
        assert_eq!(select.selected(), vec!["a", "c"]);
        assert!(widget.render().contains(r#"multiple="multiple""#));
    }

    #[test]
    fn test_upload_without_value() {
        let field = Field::new("avatar", "upload");
        let html = upload(&attrs().upload_url("/files"), &field, &Value::Null, None, None).render();
        assert_eq!(
            html,
            r#"<div class="file"><input type="file" name="avatar" class="upload" id="avatar"></div>"#
        );
    }

    #[test]
    fn test_upload_image_preview() {
        let field = Field::new("avatar", "upload").validator(IsNotEmpty::new());
        let html = upload(
            &attrs().upload_url("/files"),
            &field,
            &json!("me.PNG"),
            None,
            Some("f_avatar"),
        )
        .render();
        assert!(html.contains(r#"<img src="/files/me.PNG" width="120px" class="xupload_img">"#));
        assert!(!html.contains("__del"));
    }

    #[test]
    fn test_upload_link_and_delete() {
        let field = Field::new("cv", "upload").validator(IsEmptyOr::new(IsNotEmpty::new()));
        let html = upload(
            &attrs().upload_with(|name| format!("/download/{name}")),
            &field,
            &json!("cv.pdf"),
            None,
            Some("f_cv"),
        )
        .render();
        assert!(html.contains(r#"<div><a href="/download/cv.pdf">cv.pdf</a></div>"#));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"name="cv__del""#));
        assert!(html.contains(r#"id="f_cv__del""#));
        assert!(html.contains(r#"<label for="f_cv__del" class="file-label">delete</label>"#));
    }

    #[test]
    fn test_upload_without_download_url_has_no_preview() {
        let field = Field::new("cv", "upload");
        let Widget::Upload(upload) = upload(&attrs(), &field, &json!("cv.pdf"), None, None) else {
            panic!("expected an upload");
        };
        assert!(upload.preview.is_none());
        assert!(upload.delete.is_none());
    }

    #[test]
    fn test_json_delegates_to_text() {
        let field = Field::new("meta", "json");
        let html = json(&attrs(), &field, &json!({"k": 1}), Some("ignored"), None).render();
        assert!(html.starts_with("<textarea"));
        assert!(html.contains(r#"class="textarea""#));
        assert!(html.contains("{&quot;k&quot;:1}"));
    }

    #[test]
    fn test_radio() {
        let field =
            Field::new("size", "string").validator(IsIn::new(vec![("s", "Small"), ("l", "Large")]));
        let html = radio(&field, &json!("l")).render();
        assert!(html.contains(
            r#"<input type="radio" name="size" value="l" checked id="size_l"><label for="size_l">Large</label>"#
        ));
        assert!(html.contains(r#"<input type="radio" name="size" value="s" id="size_s">"#));
        assert_eq!(html.matches(r#"class="xoption_wrap""#).count(), 2);
    }
}
