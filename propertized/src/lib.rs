//! Metadata-carrying property schemas and command-line options derived from
//! them.
//!
//! A [`Schema`] is an ordered registry of [`Prop`] descriptors. Each
//! descriptor names a field and carries its default, label, help text and
//! storage strategy; a [`Record`] holds the values of one instance and
//! rejects keywords the schema does not declare.
//!
//! An [`OptionsSchema`] is a schema of [`Opt`] descriptors. It derives a
//! long flag (`account_id` becomes `--account-id`) and, where the letter is
//! still free, a short flag (`-a`) for every option, then parses arguments
//! into a [`ScriptOptions`] record, coercing each value to its declared or
//! inferred [`ValueKind`].

mod coerce;
pub mod docs;
mod error;
pub mod options;
mod prop;
mod record;
mod schema;
mod value;

pub use coerce::{Coercion, coerce_lenient};
pub use error::{CoercionError, PropError, PropResult, is_display_request};
pub use options::{
    ArgExtras, Defaults, HELP_SHORT, Opt, OptAction, OptionsSchema, OptionsSchemaBuilder,
    ScriptOptions, compose_help, long_flag, missing_required_message,
};
pub use prop::{DefaultFactory, Prop, PropDefault, RESERVED_PREFIX, Storage};
pub use record::Record;
pub use schema::{Schema, SchemaBuilder};
pub use value::{ValueKind, is_absent};
