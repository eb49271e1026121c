//! Option descriptors.

use clap::ArgAction;
use serde_json::Value;

use crate::coerce::Coercion;
use crate::prop::Prop;
use crate::value::ValueKind;

/// Parser behaviour of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptAction {
    /// Takes one value.
    #[default]
    Store,
    /// Flag without a value; `true` when given.
    StoreTrue,
    /// Flag without a value; `false` when given.
    StoreFalse,
    /// Takes a value and may be repeated; collects a list.
    Append,
    /// Flag without a value counting its occurrences.
    Count,
}

impl OptAction {
    /// Returns `true` when the option consumes a value on the command line.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Store | Self::Append)
    }

    pub(crate) const fn arg_action(self) -> ArgAction {
        match self {
            Self::Store => ArgAction::Set,
            Self::StoreTrue => ArgAction::SetTrue,
            Self::StoreFalse => ArgAction::SetFalse,
            Self::Append => ArgAction::Append,
            Self::Count => ArgAction::Count,
        }
    }
}

/// Extra settings forwarded to the generated flag.
///
/// Keys that have no flag counterpart belong in the property metadata via
/// [`Opt::meta`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgExtras {
    /// Placeholder shown for the value in usage text.
    pub value_name: Option<String>,
    /// Hidden long aliases.
    pub aliases: Vec<String>,
    /// Leave the flag out of the usage text.
    pub hide: bool,
    /// Text shown by `--help` instead of the composed help.
    pub long_help: Option<String>,
}

/// Property descriptor with command-line metadata.
#[derive(Debug, Clone)]
pub struct Opt {
    prop: Prop,
    required: bool,
    choices: Vec<String>,
    action: Option<OptAction>,
    coercion: Option<Coercion>,
    extras: ArgExtras,
}

impl Opt {
    /// Declare an option bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            prop: Prop::new(name),
            required: false,
            choices: Vec::new(),
            action: None,
            coercion: None,
            extras: ArgExtras::default(),
        }
    }

    /// Default used when the flag is absent.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.prop = self.prop.default(value);
        self
    }

    /// Default produced by `factory` when the flag is absent.
    #[must_use]
    pub fn default_with<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.prop = self.prop.default_with(factory);
        self
    }

    /// Help text shown next to the flag.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.prop = self.prop.help_text(help);
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.prop = self.prop.label(label);
        self
    }

    /// Store the parsed value in the mapping store `store`.
    #[must_use]
    pub fn stored_in(mut self, store: impl Into<String>) -> Self {
        self.prop = self.prop.stored_in(store);
        self
    }

    /// Attach an arbitrary metadata entry.
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.prop = self.prop.meta(key, value);
        self
    }

    /// Fail parsing when the option is absent and has no default.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Restrict the value to `choices`.
    #[must_use]
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Parser behaviour.
    #[must_use]
    pub const fn action(mut self, action: OptAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Explicit coercion for the parsed value.
    #[must_use]
    pub fn coerce(mut self, coercion: impl Into<Coercion>) -> Self {
        self.coercion = Some(coercion.into());
        self
    }

    /// Shorthand for coercing to a built-in kind.
    #[must_use]
    pub fn kind(self, kind: ValueKind) -> Self {
        self.coerce(kind)
    }

    /// Extra flag settings.
    #[must_use]
    pub fn extras(mut self, extras: ArgExtras) -> Self {
        self.extras = extras;
        self
    }

    /// Underlying property descriptor.
    #[must_use]
    pub const fn prop(&self) -> &Prop {
        &self.prop
    }

    /// Name the option is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        self.prop.name()
    }

    /// Whether the option is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Allowed values; empty when unconstrained.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.choices
    }

    /// Action used to build the flag.
    #[must_use]
    pub fn effective_action(&self) -> OptAction {
        self.action.unwrap_or_default()
    }

    /// Declared coercion, if any.
    #[must_use]
    pub const fn declared_coercion(&self) -> Option<&Coercion> {
        self.coercion.as_ref()
    }

    /// Coercion applied after parsing: the declared one, else the kind of
    /// the default.
    #[must_use]
    pub fn effective_coercion(&self) -> Option<Coercion> {
        self.coercion
            .clone()
            .or_else(|| ValueKind::of(&self.prop.resolve_default()).map(Coercion::Kind))
    }

    /// Extra flag settings.
    #[must_use]
    pub const fn arg_extras(&self) -> &ArgExtras {
        &self.extras
    }
}
