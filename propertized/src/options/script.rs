//! Parsed option records.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Command;
use serde_json::{Map, Value};

use super::Defaults;
use super::parser::raw_value;
use super::schema::OptionsSchema;
use crate::coerce::coerce_lenient;
use crate::error::{PropError, PropResult, is_display_request};
use crate::record::Record;
use crate::value::is_absent;

/// Diagnostic written to the error stream when a required option is
/// missing.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     propertized::missing_required_message("account_id"),
///     "\n\nError! The option account_id is required\n\n"
/// );
/// ```
#[must_use]
pub fn missing_required_message(name: &str) -> String {
    format!("\n\nError! The option {name} is required\n\n")
}

/// Record populated from command-line arguments, retaining the parser that
/// produced it so usage can be printed later.
#[derive(Clone)]
pub struct ScriptOptions {
    options: Arc<OptionsSchema>,
    record: Record,
    command: Command,
}

impl ScriptOptions {
    /// Build options from explicit keywords instead of the command line.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] for keywords that are not
    /// declared options.
    pub fn new<I, K, V>(options: Arc<OptionsSchema>, kwargs: I) -> PropResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let record = Record::from_kwargs(Arc::clone(options.schema()), kwargs)?;
        let command = options.command();
        Ok(Self {
            options,
            record,
            command,
        })
    }

    /// Parse `argv` (including the program name) without exiting the
    /// process.
    ///
    /// Values absent from the command line take the override from
    /// `defaults` when present, else the option's own default. Each value is
    /// then coerced leniently and written through its property.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] when `defaults` names an
    /// undeclared option, [`PropError::Cli`] when `clap` rejects the
    /// arguments or help was requested, and [`PropError::MissingRequired`]
    /// for the first required option left without a value.
    pub fn try_parse_from<I, T>(
        options: Arc<OptionsSchema>,
        argv: I,
        defaults: &Defaults,
    ) -> PropResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Some(key) = defaults.keys().find(|key| options.opt(key).is_none()) {
            return Err(PropError::unknown_attribute(options.class_name(), key.clone()));
        }
        let mut command = options.command();
        let matches = command.try_get_matches_from_mut(argv)?;
        let mut record = Record::new(Arc::clone(options.schema()));
        for opt in options.opts() {
            let raw = raw_value(&matches, opt, defaults);
            if opt.is_required() && is_absent(&raw) {
                return Err(PropError::MissingRequired {
                    name: opt.name().to_owned(),
                    usage: command.render_help().to_string(),
                });
            }
            let value = coerce_lenient(opt.effective_coercion().as_ref(), raw);
            record.set(opt.name(), value)?;
        }
        tracing::debug!(class = options.class_name(), "options parsed");
        Ok(Self {
            options,
            record,
            command,
        })
    }

    /// Parse `argv` (including the program name), terminating the process
    /// on user-facing failures.
    ///
    /// A missing required option writes the diagnostic and the full usage
    /// to the error stream and exits with status 1. Help requests and
    /// invalid arguments are handled by `clap` (status 0 and 2).
    ///
    /// # Errors
    ///
    /// Returns the declaration errors of [`Self::try_parse_from`], such as
    /// overrides naming undeclared options.
    pub fn from_argv<I, T>(
        options: Arc<OptionsSchema>,
        argv: I,
        defaults: &Defaults,
    ) -> PropResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(options, argv, defaults) {
            Ok(parsed) => Ok(parsed),
            Err(PropError::MissingRequired { name, usage }) => {
                if let Err(err) = report_missing(&mut io::stderr().lock(), &name, &usage) {
                    tracing::warn!(error = %err, "failed to write usage to stderr");
                }
                std::process::exit(1)
            }
            Err(PropError::Cli(err)) => {
                if !is_display_request(&err) {
                    tracing::debug!(kind = ?err.kind(), "command-line arguments rejected");
                }
                err.exit()
            }
            Err(other) => Err(other),
        }
    }

    /// Parse the arguments of the current process.
    ///
    /// # Errors
    ///
    /// See [`Self::from_argv`].
    pub fn from_env(options: Arc<OptionsSchema>, defaults: &Defaults) -> PropResult<Self> {
        Self::from_argv(options, std::env::args_os(), defaults)
    }

    /// Options schema the record was parsed with.
    #[must_use]
    pub const fn options(&self) -> &Arc<OptionsSchema> {
        &self.options
    }

    /// Underlying record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Read the option `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] when `name` is not declared.
    pub fn get(&self, name: &str) -> PropResult<Value> {
        self.record.get(name)
    }

    /// Overwrite the option `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] when `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> PropResult<()> {
        self.record.set(name, value)
    }

    /// Current value of every option.
    #[must_use]
    pub fn as_dict(&self) -> Map<String, Value> {
        self.record.as_dict()
    }

    /// Usage text of the retained parser.
    #[must_use]
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Print the usage of the retained parser to standard output.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing.
    pub fn print_help(&self) -> io::Result<()> {
        self.command.clone().print_help()
    }
}

fn report_missing(out: &mut impl Write, name: &str, usage: &str) -> io::Result<()> {
    out.write_all(missing_required_message(name).as_bytes())?;
    out.write_all(usage.as_bytes())?;
    out.flush()
}

impl fmt::Display for ScriptOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}

impl fmt::Debug for ScriptOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}

#[cfg(test)]
mod tests {
    use super::report_missing;

    #[test]
    fn missing_report_puts_usage_after_diagnostic() -> std::io::Result<()> {
        let mut out = Vec::new();
        report_missing(&mut out, "account_id", "Usage: Options [OPTIONS]\n")?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "\n\nError! The option account_id is required\n\nUsage: Options [OPTIONS]\n"
        );
        Ok(())
    }
}
