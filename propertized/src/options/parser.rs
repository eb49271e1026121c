//! Translation of option descriptors into a `clap` command and of the
//! resulting matches back into values.

use std::collections::HashSet;

use clap::builder::PossibleValuesParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;

use super::Defaults;
use super::opt::{Opt, OptAction};

/// Short flag letter reserved for `-h`/`--help`.
pub const HELP_SHORT: char = 'h';

/// Id of the hidden positional collecting leftover arguments. The reserved
/// prefix keeps it apart from every declared option.
const LEFTOVERS: &str = "_args";

/// Long flag for `name`: underscores become hyphens.
///
/// # Examples
///
/// ```
/// assert_eq!(propertized::long_flag("account_id"), "account-id");
/// ```
#[must_use]
pub fn long_flag(name: &str) -> String {
    name.replace('_', "-")
}

/// Short letters for `opts` in declaration order.
///
/// Each option claims the first letter of its name unless an earlier option
/// or the help flag already holds it, in which case it gets none.
pub(crate) fn assign_short_flags(opts: &[Opt]) -> Vec<Option<char>> {
    let mut claimed = HashSet::from([HELP_SHORT]);
    opts.iter()
        .map(|opt| {
            let letter = opt.name().chars().next().filter(|c| claimed.insert(*c));
            tracing::trace!(option = opt.name(), short = ?letter, "short flag assigned");
            letter
        })
        .collect()
}

/// Help text for `opt`: its help, then the choices, prefixed with
/// `(Required) ` for required options.
///
/// # Examples
///
/// ```
/// use propertized::{Opt, compose_help};
///
/// let opt = Opt::new("action")
///     .help("The action you want to perform")
///     .choices(["audit", "detect_fraud"]);
/// assert_eq!(
///     compose_help(&opt),
///     "The action you want to perform. Choices are: audit, detect_fraud"
/// );
/// ```
#[must_use]
pub fn compose_help(opt: &Opt) -> String {
    let mut help = opt.prop().help().to_owned();
    if !opt.allowed().is_empty() {
        if !help.is_empty() {
            help.push_str(". ");
        }
        help.push_str("Choices are: ");
        help.push_str(&opt.allowed().join(", "));
    }
    if opt.is_required() {
        help.insert_str(0, "(Required) ");
    }
    help
}

pub(crate) fn build_command(name: &str, about: Option<&str>, opts: &[Opt]) -> Command {
    let mut command = Command::new(name.to_owned());
    if let Some(about) = about {
        command = command.about(about.to_owned());
    }
    let shorts = assign_short_flags(opts);
    opts.iter()
        .zip(shorts)
        .fold(command, |command, (opt, short)| command.arg(build_arg(opt, short)))
        .arg(
            Arg::new(LEFTOVERS)
                .num_args(0..)
                .action(ArgAction::Append)
                .hide(true),
        )
}

fn build_arg(opt: &Opt, short: Option<char>) -> Arg {
    let action = opt.effective_action();
    let mut arg = Arg::new(opt.name().to_owned())
        .long(long_flag(opt.name()))
        .action(action.arg_action())
        .help(compose_help(opt));
    if let Some(short) = short {
        arg = arg.short(short);
    }
    if action.takes_value() {
        arg = arg.allow_hyphen_values(true);
    }
    if !opt.allowed().is_empty() {
        arg = arg
            .value_parser(PossibleValuesParser::new(opt.allowed().to_vec()))
            .hide_possible_values(true);
    }
    let extras = opt.arg_extras();
    if let Some(value_name) = &extras.value_name {
        arg = arg.value_name(value_name.clone());
    }
    if !extras.aliases.is_empty() {
        arg = arg.aliases(extras.aliases.clone());
    }
    if let Some(long_help) = &extras.long_help {
        arg = arg.long_help(long_help.clone());
    }
    arg.hide(extras.hide)
}

/// Value the option resolves to when absent from the command line.
pub(crate) fn effective_default(opt: &Opt, overrides: &Defaults) -> Value {
    overrides
        .get(opt.name())
        .cloned()
        .unwrap_or_else(|| opt.prop().resolve_default())
}

/// Raw value of `opt` in `matches`, or its effective default when the flag
/// was not given on the command line.
pub(crate) fn raw_value(matches: &ArgMatches, opt: &Opt, overrides: &Defaults) -> Value {
    let id = opt.name();
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return effective_default(opt, overrides);
    }
    match opt.effective_action() {
        OptAction::Store => matches
            .get_one::<String>(id)
            .map_or(Value::Null, |value| Value::String(value.clone())),
        OptAction::StoreTrue => Value::Bool(true),
        OptAction::StoreFalse => Value::Bool(false),
        OptAction::Append => matches
            .get_many::<String>(id)
            .map_or(Value::Null, |values| {
                values.map(|value| Value::String(value.clone())).collect()
            }),
        OptAction::Count => Value::from(matches.get_count(id)),
    }
}
