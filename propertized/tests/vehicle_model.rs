//! Behavioural tests for schema-bearing records modelled on a vehicle API.

use std::sync::Arc;

use anyhow::{Result, ensure};
use propertized::{Prop, PropError, Record, Schema};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn vehicle() -> Arc<Schema> {
    let schema = Schema::builder("Vehicle")
        .prop(Prop::new("manufacturer").label("Manufacturer"))
        .prop(
            Prop::new("horse_power")
                .label("Horsepower")
                .help_text("The power of the vehicle's engine")
                .meta("type", "int"),
        )
        .prop(
            Prop::new("weight")
                .label("Weight")
                .help_text("The weight in pounds of the vehicle")
                .meta("type", "int"),
        )
        .prop(
            Prop::new("max_speed")
                .label("Max speed")
                .help_text("The maximum speed, in MPH")
                .default(55),
        )
        .prop(Prop::new("service_log").default_with(|| json!([])))
        .build();
    match schema {
        Ok(schema) => Arc::new(schema),
        Err(err) => panic!("vehicle schema should build: {err}"),
    }
}

#[rstest]
fn keyword_construction_and_overwrite(vehicle: Arc<Schema>) -> Result<()> {
    let mut ford_prefect = Record::from_kwargs(
        vehicle,
        [
            ("manufacturer", json!("Ford")),
            ("horse_power", json!(120)),
            ("weight", json!(4000)),
            ("max_speed", json!(95)),
        ],
    )?;
    ensure!(ford_prefect.get("horse_power")? == json!(120));
    ford_prefect.set("horse_power", 110)?;
    ensure!(ford_prefect.get("horse_power")? == json!(110));
    Ok(())
}

#[rstest]
fn plain_default_until_written(vehicle: Arc<Schema>) -> Result<()> {
    let mut record = Record::new(vehicle);
    ensure!(record.get("max_speed")? == json!(55));
    record.set("max_speed", 95)?;
    ensure!(record.get("max_speed")? == json!(95));
    Ok(())
}

#[rstest]
fn factory_defaults_do_not_leak_between_records(vehicle: Arc<Schema>) -> Result<()> {
    let untouched = Record::new(Arc::clone(&vehicle));
    let mut serviced = Record::new(vehicle);
    let mut log = serviced.get("service_log")?;
    ensure!(log.is_array(), "factory should produce a list, got {log}");
    if let Value::Array(entries) = &mut log {
        entries.push(json!("oil change"));
    }
    serviced.set("service_log", log)?;
    ensure!(untouched.get("service_log")? == json!([]));
    ensure!(serviced.get("service_log")? == json!(["oil change"]));
    Ok(())
}

#[rstest]
fn unknown_keyword_names_the_key(vehicle: Arc<Schema>) -> Result<()> {
    let err = Record::from_kwargs(vehicle, [("wheels", json!(4))])
        .err()
        .ok_or_else(|| anyhow::anyhow!("construction with an unknown keyword should fail"))?;
    ensure!(matches!(err, PropError::UnknownAttribute { .. }));
    let message = err.to_string();
    ensure!(message.contains("wheels") && message.contains("Vehicle"), "{message}");
    Ok(())
}

#[test]
fn as_dict_is_exact_regardless_of_order() -> Result<()> {
    let schema = Arc::new(
        Schema::builder("Pair")
            .prop(Prop::new("b"))
            .prop(Prop::new("a"))
            .build()?,
    );
    let record = Record::from_kwargs(schema, [("a", 1), ("b", 2)])?;
    let expected: serde_json::Map<String, Value> =
        [("a".to_owned(), json!(1)), ("b".to_owned(), json!(2))]
            .into_iter()
            .collect();
    ensure!(record.as_dict() == expected);
    Ok(())
}

#[rstest]
fn repr_uses_class_name_and_dict(vehicle: Arc<Schema>) -> Result<()> {
    let record = Record::from_kwargs(vehicle, [("manufacturer", "Ford")])?;
    let repr = format!("{record:?}");
    ensure!(
        repr == r#"Vehicle(**{"manufacturer": "Ford", "horse_power": null, "weight": null, "max_speed": 55, "service_log": []})"#,
        "unexpected repr {repr}"
    );
    Ok(())
}

#[rstest]
fn documentation_from_declared_props(vehicle: Arc<Schema>) -> Result<()> {
    let text = vehicle.doc().render_text();
    ensure!(text.starts_with("Field: Manufacturer\nType: unspecified\nDescription: \n"));
    ensure!(text.contains(
        "Field: Horsepower\nType: int\nDescription: The power of the vehicle's engine\n"
    ));
    ensure!(text.contains(
        "Field: Max speed\nType: integer\nDescription: The maximum speed, in MPH\n"
    ));
    Ok(())
}
