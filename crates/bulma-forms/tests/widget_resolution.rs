//! Tests for choosing a widget from a field's type tag.

mod common;
use common::*;

use bulma_forms::validation::{IsEmptyOr, IsIn, IsNotEmpty};
use bulma_forms::widgets::Input;
use bulma_forms::{widget_kind, Field, Widget};
use serde_json::{json, Value};

#[test]
fn text_like_types_render_text_inputs() {
    for (field_type, class) in [
        ("string", "input"),
        ("int", "input"),
        ("bigint", "input"),
        ("float", "input"),
        ("date", "date"),
        ("time", "time"),
        ("datetime", "datetime"),
    ] {
        let html = resolve_html(&Field::new("f", field_type), &json!("v"));
        assert_eq!(
            html,
            format!(r#"<input type="text" name="f" value="v" class="{class}" id="f_f">"#),
            "unexpected widget for {field_type}"
        );
    }
}

#[test]
fn textarea_types() {
    for field_type in ["text", "json", "jsonb"] {
        let html = resolve_html(&Field::new("f", field_type), &Value::Null);
        assert_eq!(
            html,
            r#"<textarea name="f" class="textarea" id="f_f"></textarea>"#,
            "unexpected widget for {field_type}"
        );
    }
}

#[test]
fn password_and_bool() {
    let html = resolve_html(&Field::new("pw", "password"), &json!("s3cret"));
    assert_eq!(
        html,
        r#"<input type="password" name="pw" value="s3cret" class="input" id="f_pw">"#
    );

    let html = resolve_html(&Field::new("ok", "bool"), &json!(1));
    assert_eq!(
        html,
        r#"<input type="checkbox" name="ok" checked class="bool" id="f_ok">"#
    );
}

#[test]
fn reference_resolves_to_int() {
    let field = Field::new("author", "reference:users");
    assert_eq!(widget_kind(&field), "int");
    let html = resolve_html(&field, &json!(7));
    assert!(html.starts_with(r#"<input type="text" name="author" value="7" class="input""#));
}

#[test]
fn decimal_resolves_to_float() {
    let field = Field::new("price", "decimal:10,2");
    assert_eq!(widget_kind(&field), "float");
    let html = resolve_html(&field, &json!("9.99"));
    assert!(html.contains(r#"value="9.99""#));
}

#[test]
fn options_force_select_regardless_of_type() {
    for field_type in ["string", "int", "reference:users", "decimal:5,2", "text"] {
        let field = Field::new("f", field_type)
            .validator(IsNotEmpty::new())
            .validator(IsEmptyOr::new(IsIn::new(vec![("1", "One")])));
        assert_eq!(widget_kind(&field), "select", "for {field_type}");
        let (widget, _) = resolve(&field, &json!("1"));
        assert!(matches!(widget, Widget::Select(_)), "for {field_type}");
    }
}

#[test]
fn select_single_marks_only_matching_option() {
    let field = Field::new("color", "string")
        .validator(IsIn::new(vec![("r", "Red"), ("g", "Green"), ("b", "Blue")]));

    let Widget::Select(select) = resolve(&field, &json!("g")).0 else {
        panic!("expected a select");
    };
    assert_eq!(select.selected(), vec!["g"]);

    let Widget::Select(select) = resolve(&field, &json!("x")).0 else {
        panic!("expected a select");
    };
    assert!(select.selected().is_empty());
}

#[test]
fn select_multiple_marks_every_present_value() {
    let field = Field::new("colors", "list:string")
        .validator(IsIn::new(vec![("r", "Red"), ("g", "Green"), ("b", "Blue")]).multiple());

    let (widget, _) = resolve(&field, &json!(["b", "r", "unknown"]));
    let html = widget.render();
    let Widget::Select(select) = widget else {
        panic!("expected a select");
    };
    assert!(select.multiple);
    assert_eq!(select.selected(), vec!["r", "b"]);
    assert!(html.contains(r#"<select name="colors" multiple="multiple" class="select" id="f_colors">"#));
    assert!(html.contains(r#"<option value="g">Green</option>"#));
}

#[test]
fn readonly_fields_are_disabled_for_every_type() {
    for field_type in [
        "string", "int", "bigint", "float", "date", "time", "datetime", "text", "password",
        "bool", "upload", "json", "jsonb", "reference:users", "decimal:4,1",
    ] {
        let field = Field::new("f", field_type).readonly();
        let (widget, user_defined) = resolve(&field, &Value::Null);
        assert!(!user_defined);
        assert!(widget.is_disabled(), "{field_type} is not disabled");
        assert!(widget.render().contains(r#"disabled="disabled""#));
        assert!(!field.writable);
    }

    let field = Field::new("f", "string")
        .validator(IsIn::new(vec![("a", "A")]))
        .readonly();
    assert!(resolve(&field, &Value::Null).0.is_disabled());
}

#[test]
fn user_widget_overrides_dispatch() {
    let field = Field::new("shade", "blob")
        .validator(IsIn::new(vec![("a", "A")]))
        .widget(|field, value| {
            Input::new("color")
                .name(&field.name)
                .value(value.as_str().unwrap_or("#000000"))
                .into()
        });

    let (widget, user_defined) = resolve(&field, &json!("#ff0000"));
    assert!(user_defined);
    assert_eq!(
        widget.render(),
        r##"<input type="color" name="shade" value="#ff0000">"##
    );
}
