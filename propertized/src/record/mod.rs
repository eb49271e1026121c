//! Schema-bearing records.
//!
//! A [`Record`] owns the per-instance values of a [`Schema`]. Values live in
//! a single attribute map: private slots under `_<name>` and declared mapping
//! stores under their own names, so the two storage strategies never
//! collide.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{PropError, PropResult};
use crate::prop::{Prop, Storage};
use crate::schema::Schema;
use crate::value::is_absent;

/// Values of one instance of a schema-bearing class.
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    attrs: Map<String, Value>,
}

impl Record {
    /// Create a record with no values written and every declared store
    /// empty.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        let attrs = schema
            .stores()
            .iter()
            .map(|store| (store.clone(), Value::Object(Map::new())))
            .collect();
        Self { schema, attrs }
    }

    /// Create a record and write each keyword through its property.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] naming the class and the first
    /// keyword that is not a declared property.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use propertized::{Prop, Record, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Arc::new(
    ///     Schema::builder("Vehicle")
    ///         .prop(Prop::new("manufacturer"))
    ///         .prop(Prop::new("horse_power"))
    ///         .build()?,
    /// );
    /// let ford = Record::from_kwargs(
    ///     Arc::clone(&schema),
    ///     [("manufacturer", json!("Ford")), ("horse_power", json!(120))],
    /// )?;
    /// assert_eq!(ford.get("horse_power")?, json!(120));
    ///
    /// let err = Record::from_kwargs(schema, [("wheels", json!(4))]).unwrap_err();
    /// assert_eq!(err.to_string(), "Class Vehicle does not have attribute wheels");
    /// # Ok::<_, propertized::PropError>(())
    /// ```
    pub fn from_kwargs<I, K, V>(schema: Arc<Schema>, kwargs: I) -> PropResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new(schema);
        record.hydrate(kwargs)?;
        Ok(record)
    }

    /// Write each keyword through its property.
    ///
    /// Keywords preceding an unknown one have already been written when the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] for the first undeclared
    /// keyword.
    pub fn hydrate<I, K, V>(&mut self, kwargs: I) -> PropResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in kwargs {
            self.set(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Schema the record was built from.
    #[must_use]
    pub const fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Declared properties, in declaration order.
    pub fn props(&self) -> impl Iterator<Item = &Prop> {
        self.schema.props().iter()
    }

    /// Read `name`, falling back to its default while no value is stored.
    ///
    /// Returns `null` when nothing is stored and no default is configured.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] when `name` is not declared.
    pub fn get(&self, name: &str) -> PropResult<Value> {
        let prop = self.lookup(name)?;
        Ok(self.read(prop))
    }

    /// Read `name` and deserialize it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] for undeclared names and
    /// [`PropError::Extract`] when the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> PropResult<T> {
        let value = self.get(name)?;
        serde_json::from_value(value).map_err(|source| PropError::Extract {
            class: self.schema.class_name().to_owned(),
            target: format!("attribute {name}"),
            source,
        })
    }

    /// Write `value` to `name` through the property's storage.
    ///
    /// Writing `null` clears the value so reads see the default again.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::UnknownAttribute`] when `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> PropResult<()> {
        let storage = self.lookup(name)?.storage().clone();
        let value = value.into();
        match storage {
            Storage::Slot => {
                self.attrs.insert(Storage::slot_key(name), value);
            }
            Storage::InAttr(store) => {
                let entry = self
                    .attrs
                    .entry(store)
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(map) = entry {
                    map.insert(name.to_owned(), value);
                }
            }
        }
        Ok(())
    }

    /// Contents of the declared mapping store `name`.
    #[must_use]
    pub fn store(&self, name: &str) -> Option<&Map<String, Value>> {
        self.declared_store(name)?;
        self.attrs.get(name).and_then(Value::as_object)
    }

    /// Mutable access to the declared mapping store `name`.
    pub fn store_mut(&mut self, name: &str) -> Option<&mut Map<String, Value>> {
        self.declared_store(name)?;
        self.attrs.get_mut(name).and_then(Value::as_object_mut)
    }

    /// Current value of every declared property, keyed by name in
    /// declaration order.
    #[must_use]
    pub fn as_dict(&self) -> Map<String, Value> {
        self.props()
            .map(|prop| (prop.name().to_owned(), self.read(prop)))
            .collect()
    }

    /// Deserialize the current values into a typed struct.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::Extract`] when the values do not fit `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> PropResult<T> {
        serde_json::from_value(Value::Object(self.as_dict())).map_err(|source| {
            PropError::Extract {
                class: self.schema.class_name().to_owned(),
                target: std::any::type_name::<T>().to_owned(),
                source,
            }
        })
    }

    fn lookup(&self, name: &str) -> PropResult<&Prop> {
        self.schema
            .prop(name)
            .ok_or_else(|| PropError::unknown_attribute(self.schema.class_name(), name))
    }

    fn declared_store(&self, name: &str) -> Option<()> {
        self.schema
            .stores()
            .iter()
            .any(|store| store == name)
            .then_some(())
    }

    fn read(&self, prop: &Prop) -> Value {
        let stored = match prop.storage() {
            Storage::Slot => self.attrs.get(&Storage::slot_key(prop.name())),
            Storage::InAttr(store) => self
                .attrs
                .get(store)
                .and_then(Value::as_object)
                .and_then(|map| map.get(prop.name())),
        };
        match stored {
            Some(value) if !is_absent(value) => value.clone(),
            _ => prop.resolve_default(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(**{{", self.schema.class_name())?;
        for (i, (key, value)) in self.as_dict().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {value}", Value::String(key.clone()))?;
        }
        f.write_str("})")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
