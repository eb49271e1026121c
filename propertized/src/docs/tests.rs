//! Unit tests for documentation metadata.

use serde_json::json;

use super::{CliDoc, FieldDoc};
use crate::coerce::Coercion;
use crate::error::PropResult;
use crate::options::{Opt, OptAction, OptionsSchema};
use crate::prop::Prop;
use crate::schema::Schema;
use crate::value::ValueKind;

#[test]
fn property_docs_prefer_declared_type() -> PropResult<()> {
    let schema = Schema::builder("Vehicle")
        .prop(
            Prop::new("horse_power")
                .label("Horsepower")
                .help_text("The power of the vehicle's engine")
                .meta("type", "int"),
        )
        .prop(Prop::new("weight").default(4000))
        .prop(Prop::new("owners").default_with(|| json!([])))
        .build()?;
    let doc = schema.doc();
    assert_eq!(doc.class_name, "Vehicle");
    let types: Vec<_> = doc.fields.iter().map(|f| f.value_type.as_deref()).collect();
    assert_eq!(types, [Some("int"), Some("integer"), None]);
    let defaults: Vec<_> = doc.fields.iter().map(|f| f.default.as_deref()).collect();
    assert_eq!(defaults, [None, Some("4000"), None]);
    Ok(())
}

#[test]
fn render_text_lists_every_field() -> PropResult<()> {
    let schema = Schema::builder("Vehicle")
        .prop(Prop::new("manufacturer").label("Manufacturer"))
        .prop(
            Prop::new("max_speed")
                .help_text("The maximum speed, in MPH")
                .meta("type", "int"),
        )
        .build()?;
    assert_eq!(
        schema.doc().render_text(),
        "Field: Manufacturer\nType: unspecified\nDescription: \n\n\
         Field: max_speed\nType: int\nDescription: The maximum speed, in MPH\n"
    );
    Ok(())
}

#[test]
fn option_docs_carry_flags() -> PropResult<()> {
    let schema = OptionsSchema::builder("Options")
        .about("Audit accounts")
        .opt(Opt::new("action").default("audit").choices(["audit", "detect_fraud"]))
        .opt(Opt::new("account_id").required(true).help("The account"))
        .opt(Opt::new("dry_run").default(false).action(OptAction::StoreTrue))
        .opt(Opt::new("max_speed").coerce(Coercion::Kind(ValueKind::Integer)))
        .build()?;
    let doc = schema.doc();
    assert_eq!(doc.about.as_deref(), Some("Audit accounts"));
    assert_eq!(
        doc.fields.get(1),
        Some(&FieldDoc {
            name: "account_id".into(),
            label: String::new(),
            help: "The account".into(),
            value_type: None,
            default: None,
            required: true,
            cli: Some(CliDoc {
                long: "--account-id".into(),
                short: None,
                choices: Vec::new(),
                takes_value: true,
            }),
        })
    );
    let dry_run = doc.fields.get(2).and_then(|f| f.cli.as_ref());
    assert_eq!(dry_run.map(|cli| cli.takes_value), Some(false));
    assert_eq!(dry_run.and_then(|cli| cli.short), Some('d'));
    assert_eq!(
        doc.fields.get(3).and_then(|f| f.value_type.as_deref()),
        Some("integer")
    );
    Ok(())
}

#[test]
fn docs_serialise_to_json() -> PropResult<()> {
    let schema = OptionsSchema::builder("Options")
        .opt(Opt::new("action").choices(["audit"]))
        .build()?;
    let value = serde_json::to_value(schema.doc()).map_err(|source| crate::PropError::Extract {
        class: "Options".into(),
        target: "json".into(),
        source,
    })?;
    assert_eq!(value["fields"][0]["cli"]["long"], json!("--action"));
    assert_eq!(value["fields"][0]["cli"]["short"], json!("a"));
    Ok(())
}
