#![allow(dead_code)]

use std::collections::HashMap;

use bulma_forms::widgets::WidgetRegistry;
use bulma_forms::{BulmaFormStyle, Field, Form, FormAttributes, ValidationErrors, Widget};
use serde_json::Value;

pub fn resolve(field: &Field, value: &Value) -> (Widget, bool) {
    let attrs = FormAttributes::new().id_prefix("f_");
    let registry = WidgetRegistry::bulma();
    BulmaFormStyle::new(&attrs, &registry)
        .resolve_widget(field, value)
        .unwrap_or_else(|e| panic!("Failed to resolve {}: {e}", field.name))
}

pub fn resolve_html(field: &Field, value: &Value) -> String {
    resolve(field, value).0.render()
}

pub fn values(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

pub fn render(form: &Form, values: &HashMap<String, Value>) -> String {
    form.render(values, &ValidationErrors::new(), "tok123")
        .unwrap_or_else(|e| panic!("Failed to render form: {e}"))
}
