//! Runtime kinds of property values.
//!
//! Property values are carried as [`serde_json::Value`]. [`ValueKind`] names
//! the shape of a value so coercions can be inferred from defaults and
//! documented in field metadata.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Shape of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `true` or `false`.
    Bool,
    /// Signed or unsigned integral number.
    Integer,
    /// Floating point number.
    Float,
    /// Text.
    String,
    /// Ordered sequence of values.
    List,
    /// String-keyed mapping of values.
    Map,
}

impl ValueKind {
    /// Infers the kind of `value`, or `None` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use propertized::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!(95)), Some(ValueKind::Integer));
    /// assert_eq!(ValueKind::of(&json!(false)), Some(ValueKind::Bool));
    /// assert_eq!(ValueKind::of(&json!(null)), None);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Bool),
            Value::Number(n) if n.is_f64() => Some(Self::Float),
            Value::Number(_) => Some(Self::Integer),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::List),
            Value::Object(_) => Some(Self::Map),
        }
    }

    /// Lower-case name used in diagnostics and documentation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` when `value` is the "no value" sentinel.
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    value.is_null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), Some(ValueKind::Bool))]
    #[case(json!(-3), Some(ValueKind::Integer))]
    #[case(json!(u64::MAX), Some(ValueKind::Integer))]
    #[case(json!(2.5), Some(ValueKind::Float))]
    #[case(json!("audit"), Some(ValueKind::String))]
    #[case(json!([1, 2]), Some(ValueKind::List))]
    #[case(json!({"a": 1}), Some(ValueKind::Map))]
    #[case(Value::Null, None)]
    fn infers_kind(#[case] value: Value, #[case] expected: Option<ValueKind>) {
        assert_eq!(ValueKind::of(&value), expected);
    }

    #[test]
    fn displays_lower_case_name() {
        assert_eq!(ValueKind::Integer.to_string(), "integer");
    }
}
