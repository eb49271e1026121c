//! Ordered registry of the properties declared for a class.

use std::collections::HashSet;

use crate::error::{PropError, PropResult};
use crate::prop::{Prop, RESERVED_PREFIX, Storage, is_identifier};

/// The declared properties of a schema-bearing class, in declaration order,
/// together with the mapping stores that back delegated properties.
#[derive(Debug, Clone)]
pub struct Schema {
    class_name: String,
    props: Vec<Prop>,
    stores: Vec<String>,
}

impl Schema {
    /// Start declaring a schema for `class_name`.
    #[must_use]
    pub fn builder(class_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            class_name: class_name.into(),
            props: Vec::new(),
            stores: Vec::new(),
        }
    }

    /// Name of the class the schema describes.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Declared properties in declaration order.
    #[must_use]
    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Looks up the property bound to `name`.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Prop> {
        self.props.iter().find(|prop| prop.name() == name)
    }

    /// Returns `true` when `name` is a declared property.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.prop(name).is_some()
    }

    /// Declared mapping stores.
    #[must_use]
    pub fn stores(&self) -> &[String] {
        &self.stores
    }
}

/// Builder validating a [`Schema`] declaration.
#[derive(Debug)]
#[must_use = "call `build` to validate the schema"]
pub struct SchemaBuilder {
    class_name: String,
    props: Vec<Prop>,
    stores: Vec<String>,
}

impl SchemaBuilder {
    /// Declare a property.
    pub fn prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }

    /// Declare a mapping store that delegated properties may live in.
    pub fn store(mut self, name: impl Into<String>) -> Self {
        self.stores.push(name.into());
        self
    }

    /// Validate the declarations and produce the schema.
    ///
    /// # Errors
    ///
    /// Returns [`PropError::InvalidName`] for names that are not identifiers,
    /// [`PropError::ReservedName`] for names using the reserved `_` prefix,
    /// [`PropError::DuplicateAttribute`] when a name is declared twice (as a
    /// property or a store), and [`PropError::UndeclaredStore`] when a
    /// property delegates to a store that was not declared.
    pub fn build(self) -> PropResult<Schema> {
        let Self {
            class_name,
            props,
            stores,
        } = self;
        let mut seen = HashSet::new();
        for name in props.iter().map(Prop::name).chain(stores.iter().map(String::as_str)) {
            check_name(&class_name, name)?;
            if !seen.insert(name) {
                return Err(PropError::DuplicateAttribute {
                    class: class_name.clone(),
                    name: name.to_owned(),
                });
            }
        }
        for prop in &props {
            if let Storage::InAttr(store) = prop.storage()
                && !stores.contains(store)
            {
                return Err(PropError::UndeclaredStore {
                    class: class_name.clone(),
                    attr: prop.name().to_owned(),
                    store: store.clone(),
                });
            }
        }
        tracing::trace!(class = %class_name, props = props.len(), "schema declared");
        Ok(Schema {
            class_name,
            props,
            stores,
        })
    }
}

fn check_name(class_name: &str, name: &str) -> PropResult<()> {
    if !is_identifier(name) {
        return Err(PropError::InvalidName {
            class: class_name.to_owned(),
            name: name.to_owned(),
        });
    }
    if name.starts_with(RESERVED_PREFIX) {
        return Err(PropError::ReservedName {
            class: class_name.to_owned(),
            name: name.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn keeps_declaration_order() -> PropResult<()> {
        let schema = Schema::builder("Vehicle")
            .prop(Prop::new("weight"))
            .prop(Prop::new("manufacturer"))
            .prop(Prop::new("horse_power"))
            .build()?;
        let names: Vec<_> = schema.props().iter().map(Prop::name).collect();
        assert_eq!(names, ["weight", "manufacturer", "horse_power"]);
        assert!(schema.contains("manufacturer"));
        assert!(!schema.contains("wheels"));
        Ok(())
    }

    #[rstest]
    #[case("_secret")]
    #[case("__dunder")]
    fn rejects_reserved_prefix(#[case] name: &str) {
        let err = Schema::builder("Vehicle").prop(Prop::new(name)).build();
        assert!(matches!(err, Err(PropError::ReservedName { .. })));
    }

    #[rstest]
    #[case("max-speed")]
    #[case("1st")]
    #[case("")]
    fn rejects_non_identifiers(#[case] name: &str) {
        let err = Schema::builder("Vehicle").prop(Prop::new(name)).build();
        assert!(matches!(err, Err(PropError::InvalidName { .. })));
    }

    #[test]
    fn rejects_duplicates() {
        let err = Schema::builder("Vehicle")
            .prop(Prop::new("weight"))
            .prop(Prop::new("weight"))
            .build();
        assert!(matches!(
            err,
            Err(PropError::DuplicateAttribute { ref name, .. }) if name == "weight"
        ));
    }

    #[test]
    fn rejects_store_colliding_with_property() {
        let err = Schema::builder("Vehicle")
            .prop(Prop::new("data"))
            .store("data")
            .build();
        assert!(matches!(err, Err(PropError::DuplicateAttribute { .. })));
    }

    #[test]
    fn delegated_properties_need_a_declared_store() {
        let err = Schema::builder("Vehicle")
            .prop(Prop::new("weight").stored_in("data"))
            .build();
        assert!(matches!(
            err,
            Err(PropError::UndeclaredStore { ref store, .. }) if store == "data"
        ));
    }

    #[test]
    fn delegated_properties_accept_declared_store() -> PropResult<()> {
        let schema = Schema::builder("Vehicle")
            .store("data")
            .prop(Prop::new("weight").stored_in("data"))
            .build()?;
        assert_eq!(schema.stores(), ["data".to_owned()]);
        Ok(())
    }
}
