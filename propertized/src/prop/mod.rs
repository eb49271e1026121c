//! Property descriptors.
//!
//! A [`Prop`] describes one named field of a schema: its default, the
//! human-readable label and help text, where the value is stored on a
//! [`crate::Record`], and an open bag of extra metadata. Descriptors are
//! declared once per schema and shared by every record built from it; they
//! hold no per-record state.
//!
//! ```
//! use propertized::{Prop, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::builder("Vehicle")
//!     .prop(Prop::new("manufacturer").label("Manufacturer"))
//!     .prop(
//!         Prop::new("max_speed")
//!             .label("Max speed")
//!             .help_text("The maximum speed, in MPH")
//!             .meta("type", json!("int")),
//!     )
//!     .build()?;
//! assert_eq!(schema.props().len(), 2);
//! # Ok::<_, propertized::PropError>(())
//! ```

mod default;

pub use default::{DefaultFactory, PropDefault};

use serde_json::{Map, Value};

/// Prefix reserved for private per-record slots.
pub const RESERVED_PREFIX: &str = "_";

/// Where a property keeps its value on a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Storage {
    /// Private per-record slot keyed by [`Storage::slot_key`].
    #[default]
    Slot,
    /// Entry keyed by the property name inside the named mapping store.
    InAttr(String),
}

impl Storage {
    /// Key of the private slot backing the property `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propertized::Storage;
    /// assert_eq!(Storage::slot_key("horse_power"), "_horse_power");
    /// ```
    #[must_use]
    pub fn slot_key(name: &str) -> String {
        format!("{RESERVED_PREFIX}{name}")
    }
}

/// Descriptor for one named field on a schema.
#[derive(Debug, Clone)]
pub struct Prop {
    name: String,
    default: Option<PropDefault>,
    label: String,
    help_text: String,
    storage: Storage,
    metadata: Map<String, Value>,
}

impl Prop {
    /// Declare a property bound to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            label: String::new(),
            help_text: String::new(),
            storage: Storage::Slot,
            metadata: Map::new(),
        }
    }

    /// Default returned while no value has been written.
    ///
    /// The value is cloned on every read. Passing `null` clears the default.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.default = (!value.is_null()).then_some(PropDefault::Value(value));
        self
    }

    /// Default produced by calling `factory` on every read of an unset value.
    #[must_use]
    pub fn default_with<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(PropDefault::Factory(DefaultFactory::new(factory)));
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Help text describing the property.
    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Store the value inside the mapping store `store` instead of a
    /// private slot.
    #[must_use]
    pub fn stored_in(mut self, store: impl Into<String>) -> Self {
        self.storage = Storage::InAttr(store.into());
        self
    }

    /// Attach an arbitrary metadata entry.
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Name the property is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured default, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&PropDefault> {
        self.default.as_ref()
    }

    /// Human-readable label; empty when none was given.
    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.label
    }

    /// Help text; empty when none was given.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help_text
    }

    /// Storage strategy.
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Extra metadata attached to the descriptor.
    #[must_use]
    pub const fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Produce the default value, calling the factory when one is set.
    ///
    /// Returns `null` when no default is configured.
    #[must_use]
    pub fn resolve_default(&self) -> Value {
        self.default
            .as_ref()
            .map_or(Value::Null, PropDefault::produce)
    }
}

/// Returns `true` when `name` is an ASCII identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
