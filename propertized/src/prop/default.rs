//! Default values and factories for property descriptors.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Zero-argument producer of a fresh default value.
#[derive(Clone)]
pub struct DefaultFactory(Arc<dyn Fn() -> Value + Send + Sync>);

impl DefaultFactory {
    /// Wrap `factory`.
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Produce a new value.
    #[must_use]
    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFactory(<fn>)")
    }
}

/// Default configured on a property.
#[derive(Debug, Clone)]
pub enum PropDefault {
    /// Plain value, cloned on every read.
    Value(Value),
    /// Factory called on every read to build an independent value.
    Factory(DefaultFactory),
}

impl PropDefault {
    /// Produce the default value.
    #[must_use]
    pub fn produce(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Factory(factory) => factory.call(),
        }
    }

    /// Plain value, if this default is not a factory.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Factory(_) => None,
        }
    }
}
