//! Query parameter values
//!
//! The original dynamic `Record<string, any>` shape becomes a tagged
//! variant here: a value is null, a scalar, or a list of scalars.
//! Anything deeper is rejected when serializing instead of being coerced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A query parameter scalar: stringifiable without iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    /// Natural textual representation, matching what the encoder stringifies
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// The value side of a query parameter
///
/// - `Null` contributes nothing to the output
/// - `Scalar` contributes one `key=value` segment
/// - `List` contributes one segment per non-null element, reusing the key
///
/// A `List` nested inside a `List` is representable but invalid; the
/// serializer rejects it with [`QueryError::InvalidValueType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    #[default]
    Null,
    Scalar(Scalar),
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Returns true for `QueryValue::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }

    /// Converts a `serde_json::Value` into a query value
    ///
    /// `key` is only used for error reporting. Objects and arrays nested
    /// inside arrays are rejected rather than coerced.
    pub(crate) fn from_json(key: &str, value: serde_json::Value) -> Result<Self, QueryError> {
        match value {
            serde_json::Value::Null => Ok(QueryValue::Null),
            serde_json::Value::Bool(b) => Ok(QueryValue::Scalar(Scalar::Bool(b))),
            serde_json::Value::Number(n) => Ok(QueryValue::Scalar(number_to_scalar(&n))),
            serde_json::Value::String(s) => Ok(QueryValue::Scalar(Scalar::Str(s))),
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::Array(_) => {
                            return Err(QueryError::InvalidValueType {
                                key: key.to_string(),
                                found: "nested list",
                            })
                        }
                        serde_json::Value::Object(_) => {
                            return Err(QueryError::InvalidValueType {
                                key: key.to_string(),
                                found: "object",
                            })
                        }
                        other => list.push(QueryValue::from_json(key, other)?),
                    }
                }
                Ok(QueryValue::List(list))
            }
            serde_json::Value::Object(_) => Err(QueryError::InvalidValueType {
                key: key.to_string(),
                found: "object",
            }),
        }
    }
}

fn number_to_scalar(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        Scalar::Float(n.as_f64().unwrap_or_default())
    }
}

impl From<Scalar> for QueryValue {
    fn from(v: Scalar) -> Self {
        QueryValue::Scalar(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Scalar(v.into())
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Scalar(v.into())
    }
}

/// `None` becomes `Null`, which the serializer omits entirely
impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => QueryValue::Null,
        }
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(v: Vec<T>) -> Self {
        QueryValue::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Str("abc".to_string()).to_string(), "abc");
        assert_eq!(Scalar::Int(42).to_string(), "42");
        assert_eq!(Scalar::Float(4.5).to_string(), "4.5");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_option_none_is_null() {
        let value: QueryValue = Option::<&str>::None.into();
        assert!(value.is_null());
    }

    #[test]
    fn test_vec_becomes_list() {
        let value: QueryValue = vec!["a", "b"].into();
        assert_eq!(
            value,
            QueryValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_from_json_rejects_object() {
        let err = QueryValue::from_json("filter", serde_json::json!({"a": 1})).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidValueType {
                key: "filter".to_string(),
                found: "object",
            }
        );
    }

    #[test]
    fn test_from_json_rejects_nested_array() {
        let err = QueryValue::from_json("tags", serde_json::json!([["a"]])).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidValueType {
                key: "tags".to_string(),
                found: "nested list",
            }
        );
    }
}
