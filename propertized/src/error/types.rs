//! Primary error enum for schema and option handling.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while declaring schemas, accessing records, or parsing
/// command-line options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropError {
    /// A keyword or attribute name does not belong to the schema.
    #[error("Class {class} does not have attribute {key}")]
    UnknownAttribute {
        /// Name of the schema-bearing class.
        class: String,
        /// Offending keyword.
        key: String,
    },

    /// A declared name is not a valid identifier.
    #[error("invalid attribute name '{name}' on {class}: expected an identifier")]
    InvalidName {
        /// Name of the schema-bearing class.
        class: String,
        /// Rejected name.
        name: String,
    },

    /// A declared name starts with the reserved prefix.
    #[error("attribute name '{name}' on {class} uses the reserved prefix '_'")]
    ReservedName {
        /// Name of the schema-bearing class.
        class: String,
        /// Rejected name.
        name: String,
    },

    /// Two declarations share a name.
    #[error("attribute '{name}' is declared more than once on {class}")]
    DuplicateAttribute {
        /// Name of the schema-bearing class.
        class: String,
        /// Repeated name.
        name: String,
    },

    /// A property delegates to a store the schema never declared.
    #[error("attribute '{attr}' on {class} is stored in undeclared store '{store}'")]
    UndeclaredStore {
        /// Name of the schema-bearing class.
        class: String,
        /// Property whose storage points at the missing store.
        attr: String,
        /// Store name that was not declared.
        store: String,
    },

    /// An option declaration cannot be turned into a command-line flag.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        /// Option name.
        name: String,
        /// Why the declaration was rejected.
        reason: String,
    },

    /// A required option was neither supplied nor defaulted.
    #[error("The option {name} is required")]
    MissingRequired {
        /// Name of the missing option.
        name: String,
        /// Rendered usage text of the parser that detected the omission.
        usage: String,
    },

    /// Command-line parsing failed or help was requested.
    #[error("Failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),

    /// A record could not be converted into the requested typed value.
    #[error("failed to extract {target} from {class}: {source}")]
    Extract {
        /// Name of the schema-bearing class.
        class: String,
        /// Description of the requested target.
        target: String,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl From<clap::Error> for PropError {
    fn from(e: clap::Error) -> Self {
        Self::Cli(Box::new(e))
    }
}

impl PropError {
    /// Construct an [`PropError::UnknownAttribute`] for `class` and `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propertized::PropError;
    /// let err = PropError::unknown_attribute("Vehicle", "wheels");
    /// assert_eq!(err.to_string(), "Class Vehicle does not have attribute wheels");
    /// ```
    #[must_use]
    pub fn unknown_attribute(class: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            class: class.into(),
            key: key.into(),
        }
    }

    /// Construct an [`PropError::InvalidOption`].
    #[must_use]
    pub fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Failure converting a raw value with a coercion.
///
/// Coercion failures are tolerated by option parsing: the raw value is kept
/// and this error is only logged.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot convert {value} to {target}: {reason}")]
pub struct CoercionError {
    /// Name of the target kind or custom coercion.
    pub target: String,
    /// Value that failed to convert.
    pub value: Value,
    /// Human-readable explanation.
    pub reason: String,
}

impl CoercionError {
    /// Build a coercion error for `value` converted to `target`.
    #[must_use]
    pub fn new(target: impl Into<String>, value: &Value, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.clone(),
            reason: reason.into(),
        }
    }
}
