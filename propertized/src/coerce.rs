//! Per-field coercion of raw command-line values.
//!
//! Each option carries an explicit [`Coercion`], or one inferred from the
//! kind of its default. Option parsing applies it through
//! [`coerce_lenient`], whose policy is to keep the raw value whenever the
//! conversion fails.

use std::fmt;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::error::CoercionError;
use crate::value::ValueKind;

type CoerceFn = dyn Fn(&Value) -> Result<Value, CoercionError> + Send + Sync;

/// Conversion applied to a raw parsed value.
#[derive(Clone)]
pub enum Coercion {
    /// Built-in conversion to a value kind.
    Kind(ValueKind),
    /// Named user-supplied conversion.
    Custom {
        /// Name used in diagnostics and documentation.
        name: String,
        /// Conversion function.
        func: Arc<CoerceFn>,
    },
}

impl Coercion {
    /// Build a named custom coercion.
    ///
    /// # Examples
    ///
    /// ```
    /// use propertized::{Coercion, CoercionError};
    /// use serde_json::{Value, json};
    ///
    /// let upper = Coercion::custom("upper", |value: &Value| {
    ///     value
    ///         .as_str()
    ///         .map(|s| Value::String(s.to_uppercase()))
    ///         .ok_or_else(|| CoercionError::new("upper", value, "not a string"))
    /// });
    /// assert_eq!(upper.apply(&json!("ford"))?, json!("FORD"));
    /// # Ok::<_, CoercionError>(())
    /// ```
    #[must_use]
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, CoercionError> + Send + Sync + 'static,
    {
        Self::Custom {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Name of the target kind or custom coercion.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Kind(kind) => kind.name(),
            Self::Custom { name, .. } => name,
        }
    }

    /// Convert `raw`.
    ///
    /// Bool conversion never fails: `"true"` in any case, boolean `true`,
    /// and the number 1 are true and everything else is false. Other kinds
    /// leave absent values unconverted.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when `raw` cannot be represented as the
    /// target.
    pub fn apply(&self, raw: &Value) -> Result<Value, CoercionError> {
        match self {
            Self::Kind(kind) => coerce_kind(*kind, raw),
            Self::Custom { func, .. } => func(raw),
        }
    }
}

impl From<ValueKind> for Coercion {
    fn from(kind: ValueKind) -> Self {
        Self::Kind(kind)
    }
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
            Self::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish(),
        }
    }
}

/// Apply `coercion` to `raw`, keeping `raw` unchanged when no coercion is
/// set or the conversion fails.
#[must_use]
pub fn coerce_lenient(coercion: Option<&Coercion>, raw: Value) -> Value {
    let Some(coercion) = coercion else {
        return raw;
    };
    match coercion.apply(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(
                target_kind = coercion.name(),
                error = %err,
                "coercion failed; keeping raw value"
            );
            raw
        }
    }
}

fn coerce_kind(kind: ValueKind, raw: &Value) -> Result<Value, CoercionError> {
    match kind {
        ValueKind::Bool => Ok(Value::Bool(is_truthy(raw))),
        ValueKind::Integer => to_integer(raw),
        ValueKind::Float => to_float(raw),
        ValueKind::String => to_text(raw),
        ValueKind::List if raw.is_array() => Ok(raw.clone()),
        ValueKind::Map if raw.is_object() => Ok(raw.clone()),
        ValueKind::List | ValueKind::Map => Err(mismatch(kind, raw)),
    }
}

fn is_truthy(raw: &Value) -> bool {
    match raw {
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64() == Some(1) || n.as_f64() == Some(1.0),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn to_integer(raw: &Value) -> Result<Value, CoercionError> {
    let target = ValueKind::Integer.name();
    match raw {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(raw.clone()),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .map(f64::trunc)
            .and_then(float_to_integer)
            .ok_or_else(|| CoercionError::new(target, raw, "number out of integer range")),
        Value::String(s) => {
            let text = s.trim();
            text.parse::<i64>()
                .map(Value::from)
                .or_else(|_| text.parse::<u64>().map(Value::from))
                .map_err(|e| CoercionError::new(target, raw, e.to_string()))
        }
        Value::Bool(b) => Ok(Value::from(u8::from(*b))),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(mismatch(ValueKind::Integer, raw)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is truncated and range-checked before the cast"
)]
fn float_to_integer(f: f64) -> Option<Value> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (-LIMIT..LIMIT).contains(&f).then(|| Value::from(f as i64))
}

fn to_float(raw: &Value) -> Result<Value, CoercionError> {
    let target = ValueKind::Float.name();
    let float = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(
            s.trim()
                .parse::<f64>()
                .map_err(|e| CoercionError::new(target, raw, e.to_string()))?,
        ),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(mismatch(ValueKind::Float, raw));
        }
    };
    float
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| CoercionError::new(target, raw, "not a finite number"))
}

fn to_text(raw: &Value) -> Result<Value, CoercionError> {
    match raw {
        Value::String(_) => Ok(raw.clone()),
        Value::Null => Err(mismatch(ValueKind::String, raw)),
        other => Ok(Value::String(other.to_string())),
    }
}

fn mismatch(kind: ValueKind, raw: &Value) -> CoercionError {
    let found = ValueKind::of(raw).map_or("nothing", ValueKind::name);
    CoercionError::new(kind.name(), raw, format!("found {found}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("true"), true)]
    #[case(json!("TRUE"), true)]
    #[case(json!("True"), true)]
    #[case(json!(true), true)]
    #[case(json!(1), true)]
    #[case(json!(1.0), true)]
    #[case(json!("1"), false)]
    #[case(json!("yes"), false)]
    #[case(json!("false"), false)]
    #[case(json!(""), false)]
    #[case(json!(0), false)]
    #[case(json!(2), false)]
    #[case(Value::Null, false)]
    fn bool_special_case(#[case] raw: Value, #[case] expected: bool) {
        let coerced = Coercion::Kind(ValueKind::Bool).apply(&raw);
        assert_eq!(coerced.ok(), Some(Value::Bool(expected)));
    }

    #[rstest]
    #[case(json!("95"), json!(95))]
    #[case(json!(" -7 "), json!(-7))]
    #[case(json!(95.9), json!(95))]
    #[case(json!(true), json!(1))]
    #[case(json!("18446744073709551615"), json!(u64::MAX))]
    fn integer_conversions(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(Coercion::Kind(ValueKind::Integer).apply(&raw).ok(), Some(expected));
    }

    #[rstest]
    #[case(json!("fast"))]
    #[case(json!("9.5"))]
    #[case(json!(["1"]))]
    #[case(Value::Null)]
    fn integer_failures(#[case] raw: Value) {
        assert!(Coercion::Kind(ValueKind::Integer).apply(&raw).is_err());
    }

    #[rstest]
    #[case(json!("2.5"), json!(2.5))]
    #[case(json!(3), json!(3.0))]
    #[case(json!(false), json!(0.0))]
    fn float_conversions(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(Coercion::Kind(ValueKind::Float).apply(&raw).ok(), Some(expected));
    }

    #[test]
    fn float_rejects_non_finite() {
        assert!(Coercion::Kind(ValueKind::Float).apply(&json!("inf")).is_err());
    }

    #[rstest]
    #[case(json!("audit"), json!("audit"))]
    #[case(json!(7), json!("7"))]
    #[case(json!(true), json!("true"))]
    #[case(json!(["a"]), json!("[\"a\"]"))]
    fn string_conversions(#[case] raw: Value, #[case] expected: Value) {
        assert_eq!(Coercion::Kind(ValueKind::String).apply(&raw).ok(), Some(expected));
    }

    #[test]
    fn collections_only_accept_their_shape() {
        let list = Coercion::Kind(ValueKind::List);
        assert_eq!(list.apply(&json!(["a"])).ok(), Some(json!(["a"])));
        assert!(list.apply(&json!("a")).is_err());
        let map = Coercion::Kind(ValueKind::Map);
        assert!(map.apply(&json!({"a": 1})).is_ok());
        assert!(map.apply(&json!([])).is_err());
    }

    #[test]
    fn lenient_keeps_raw_value_on_failure() {
        let int = Coercion::Kind(ValueKind::Integer);
        assert_eq!(coerce_lenient(Some(&int), json!("fast")), json!("fast"));
        assert_eq!(coerce_lenient(Some(&int), json!("95")), json!(95));
        assert_eq!(coerce_lenient(None, json!("95")), json!("95"));
    }

    #[test]
    fn custom_failures_are_tolerated() {
        let failing = Coercion::custom("never", |value: &Value| {
            Err(CoercionError::new("never", value, "always fails"))
        });
        assert_eq!(failing.name(), "never");
        assert_eq!(coerce_lenient(Some(&failing), json!("raw")), json!("raw"));
    }
}
