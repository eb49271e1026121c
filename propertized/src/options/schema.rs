//! Declaration of a set of command-line options.

use std::sync::Arc;

use clap::Command;

use super::opt::Opt;
use super::parser::{build_command, long_flag};
use crate::error::{PropError, PropResult};
use crate::schema::Schema;

/// Options declared by a script, backed by a property [`Schema`].
#[derive(Debug, Clone)]
pub struct OptionsSchema {
    schema: Arc<Schema>,
    opts: Vec<Opt>,
    about: Option<String>,
    bin_name: Option<String>,
}

impl OptionsSchema {
    /// Start declaring options for `class_name`.
    #[must_use]
    pub fn builder(class_name: impl Into<String>) -> OptionsSchemaBuilder {
        OptionsSchemaBuilder {
            class_name: class_name.into(),
            opts: Vec::new(),
            stores: Vec::new(),
            about: None,
            bin_name: None,
        }
    }

    /// Property schema of the parsed records.
    #[must_use]
    pub const fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Name of the options class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.schema.class_name()
    }

    /// Declared options in declaration order.
    #[must_use]
    pub fn opts(&self) -> &[Opt] {
        &self.opts
    }

    /// Looks up the option bound to `name`.
    #[must_use]
    pub fn opt(&self, name: &str) -> Option<&Opt> {
        self.opts.iter().find(|opt| opt.name() == name)
    }

    /// About text shown at the top of the usage.
    #[must_use]
    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Program name shown in the usage; defaults to the class name.
    #[must_use]
    pub fn bin_name(&self) -> &str {
        self.bin_name
            .as_deref()
            .unwrap_or_else(|| self.schema.class_name())
    }

    /// Assemble the command-line parser for these options.
    #[must_use]
    pub fn command(&self) -> Command {
        build_command(self.bin_name(), self.about(), &self.opts)
    }
}

/// Builder validating an [`OptionsSchema`] declaration.
#[derive(Debug)]
#[must_use = "call `build` to validate the options"]
pub struct OptionsSchemaBuilder {
    class_name: String,
    opts: Vec<Opt>,
    stores: Vec<String>,
    about: Option<String>,
    bin_name: Option<String>,
}

impl OptionsSchemaBuilder {
    /// Declare an option.
    pub fn opt(mut self, opt: Opt) -> Self {
        self.opts.push(opt);
        self
    }

    /// Declare a mapping store that delegated options may live in.
    pub fn store(mut self, name: impl Into<String>) -> Self {
        self.stores.push(name.into());
        self
    }

    /// About text shown at the top of the usage.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Program name shown in the usage.
    pub fn bin_name(mut self, bin_name: impl Into<String>) -> Self {
        self.bin_name = Some(bin_name.into());
        self
    }

    /// Validate the declarations and produce the options schema.
    ///
    /// # Errors
    ///
    /// Returns the [`Schema`] validation errors for the option names and
    /// stores, and [`PropError::InvalidOption`] for an option whose long
    /// flag would be `--help` or which combines choices with an action that
    /// takes no value.
    pub fn build(self) -> PropResult<OptionsSchema> {
        let Self {
            class_name,
            opts,
            stores,
            about,
            bin_name,
        } = self;
        for opt in &opts {
            check_opt(opt)?;
        }
        let schema = stores
            .into_iter()
            .fold(Schema::builder(class_name), |builder, store| builder.store(store));
        let schema = opts
            .iter()
            .fold(schema, |builder, opt| builder.prop(opt.prop().clone()))
            .build()?;
        Ok(OptionsSchema {
            schema: Arc::new(schema),
            opts,
            about,
            bin_name,
        })
    }
}

fn check_opt(opt: &Opt) -> PropResult<()> {
    if long_flag(opt.name()) == "help" {
        return Err(PropError::invalid_option(
            opt.name(),
            "--help is reserved for usage output",
        ));
    }
    if !opt.allowed().is_empty() && !opt.effective_action().takes_value() {
        return Err(PropError::invalid_option(
            opt.name(),
            "choices require an action that takes a value",
        ));
    }
    Ok(())
}
