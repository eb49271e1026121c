//! Serialisable documentation records for schemas and options.

use serde::Serialize;
use serde_json::Value;

use crate::options::{Opt, OptionsSchema, assign_short_flags, long_flag};
use crate::prop::{Prop, PropDefault};
use crate::schema::Schema;
use crate::value::ValueKind;

/// Documentation for a whole schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaDoc {
    /// Name of the documented class.
    pub class_name: String,
    /// About text of the generated command, for option schemas.
    pub about: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDoc>,
}

/// Documentation for one field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDoc {
    /// Attribute name.
    pub name: String,
    /// Human-readable label; may be empty.
    pub label: String,
    /// Help text; may be empty.
    pub help: String,
    /// Declared or inferred value type.
    pub value_type: Option<String>,
    /// Plain default rendered as JSON; factories are not shown.
    pub default: Option<String>,
    /// Whether parsing fails without a value.
    pub required: bool,
    /// Generated flags, for options.
    pub cli: Option<CliDoc>,
}

/// Command-line documentation for a field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CliDoc {
    /// Long flag including the leading dashes.
    pub long: String,
    /// Assigned short letter, if any.
    pub short: Option<char>,
    /// Allowed values; empty when unconstrained.
    pub choices: Vec<String>,
    /// Whether the flag consumes a value.
    pub takes_value: bool,
}

impl SchemaDoc {
    /// Plain-text listing with one block per field.
    ///
    /// # Examples
    ///
    /// ```
    /// use propertized::{Prop, Schema};
    ///
    /// let schema = Schema::builder("Vehicle")
    ///     .prop(Prop::new("weight").label("Weight").help_text("The weight in pounds"))
    ///     .build()?;
    /// assert_eq!(
    ///     schema.doc().render_text(),
    ///     "Field: Weight\nType: unspecified\nDescription: The weight in pounds\n"
    /// );
    /// # Ok::<_, propertized::PropError>(())
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        self.fields
            .iter()
            .map(|field| {
                let label = if field.label.is_empty() {
                    &field.name
                } else {
                    &field.label
                };
                format!(
                    "Field: {label}\nType: {}\nDescription: {}\n",
                    field.value_type.as_deref().unwrap_or("unspecified"),
                    field.help
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Schema {
    /// Documentation metadata for the declared properties.
    #[must_use]
    pub fn doc(&self) -> SchemaDoc {
        SchemaDoc {
            class_name: self.class_name().to_owned(),
            about: None,
            fields: self.props().iter().map(prop_doc).collect(),
        }
    }
}

impl OptionsSchema {
    /// Documentation metadata for the declared options, including their
    /// generated flags.
    #[must_use]
    pub fn doc(&self) -> SchemaDoc {
        let shorts = assign_short_flags(self.opts());
        SchemaDoc {
            class_name: self.class_name().to_owned(),
            about: self.about().map(str::to_owned),
            fields: self
                .opts()
                .iter()
                .zip(shorts)
                .map(|(opt, short)| opt_doc(opt, short))
                .collect(),
        }
    }
}

fn prop_doc(prop: &Prop) -> FieldDoc {
    let declared_type = prop
        .metadata()
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned);
    FieldDoc {
        name: prop.name().to_owned(),
        label: prop.label_text().to_owned(),
        help: prop.help().to_owned(),
        value_type: declared_type.or_else(|| default_kind(prop).map(|kind| kind.name().to_owned())),
        default: prop
            .default_value()
            .and_then(PropDefault::as_value)
            .map(Value::to_string),
        required: false,
        cli: None,
    }
}

fn opt_doc(opt: &Opt, short: Option<char>) -> FieldDoc {
    let base = prop_doc(opt.prop());
    FieldDoc {
        value_type: opt
            .declared_coercion()
            .map(|coercion| coercion.name().to_owned())
            .or(base.value_type),
        required: opt.is_required(),
        cli: Some(CliDoc {
            long: format!("--{}", long_flag(opt.name())),
            short,
            choices: opt.allowed().to_vec(),
            takes_value: opt.effective_action().takes_value(),
        }),
        ..base
    }
}

fn default_kind(prop: &Prop) -> Option<ValueKind> {
    prop.default_value()
        .and_then(PropDefault::as_value)
        .and_then(ValueKind::of)
}
