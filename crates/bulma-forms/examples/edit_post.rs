//! Renders a blog post edit form.
//!
//! Run with: `cargo run -p bulma-forms --example edit_post`

use std::collections::HashMap;

use bulma_forms::validation::{IsEmptyOr, IsIn, IsNotEmpty};
use bulma_forms::widgets::bulma;
use bulma_forms::{Field, Form, FormAttributes, FormError, ValidationErrors};
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let form = Form::new(
        FormAttributes::new()
            .id_prefix("post_")
            .submit("Save post")
            .upload_url("/media")
            .attr("method", "post")
            .attr("action", "/posts/42/edit")
            .attr("enctype", "multipart/form-data"),
    )
    .field(
        Field::new("title", "string")
            .validator(IsNotEmpty::new())
            .comment("Shown on the front page"),
    )
    .field(Field::new("body", "text"))
    .field(Field::new("author", "reference:users").readonly())
    .field(
        Field::new("tags", "list:string").validator(
            IsIn::new(vec![("rust", "Rust"), ("web", "Web"), ("forms", "Forms")]).multiple(),
        ),
    )
    .field(
        Field::new("visibility", "string")
            .validator(IsIn::new(vec![("public", "Public"), ("private", "Private")]))
            .widget(bulma::radio),
    )
    .field(Field::new("published", "bool"))
    .field(Field::new("cover", "upload").validator(IsEmptyOr::new(IsNotEmpty::new())))
    .hidden("id", "42");

    let values: HashMap<String, Value> = HashMap::from([
        ("title".to_string(), json!("")),
        ("body".to_string(), json!("Forms, rendered.")),
        ("author".to_string(), json!(3)),
        ("tags".to_string(), json!(["rust", "forms"])),
        ("visibility".to_string(), json!("public")),
        ("published".to_string(), json!(true)),
        ("cover".to_string(), json!("cover.jpg")),
    ]);
    let errors = ValidationErrors::new().with("title", "Enter a title");

    println!("{}", form.render(&values, &errors, "3f9c2a7b")?);

    let broken = Form::new(FormAttributes::new()).field(Field::new("payload", "blob"));
    match broken.render(&HashMap::new(), &ValidationErrors::new(), "3f9c2a7b") {
        Err(FormError::MissingWidget { field, kind }) => {
            println!("No widget for field {field} of type {kind}");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    Ok(())
}
