//! Ordered query parameter collection
//!
//! Keys keep their first-insertion position, which fixes the order of
//! segments in the serialized output. A `Vec` of pairs is enough here;
//! parameter maps are tiny and built once per URL.

use crate::error::QueryError;
use crate::value::QueryValue;

/// An insertion-ordered mapping of parameter names to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets a parameter (functional builder)
    ///
    /// Same replacement semantics as [`set`](Self::set), consuming and
    /// returning `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_query::QueryParams;
    ///
    /// let params = QueryParams::new()
    ///     .with_param("page", 2)
    ///     .with_param("q", "rust routers");
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a parameter, replacing any existing value in place
    ///
    /// A replaced key keeps its original position, so re-setting a value
    /// never reorders the serialized output.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Appends a parameter without replacing existing entries for the key
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Gets the first value stored under a key
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes all entries for a key, returning the first removed value
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let first = self
            .pairs
            .iter()
            .position(|(k, _)| k == key)
            .map(|pos| self.pairs.remove(pos).1);
        self.pairs.retain(|(k, _)| k != key);
        first
    }

    /// Number of entries (including null-valued ones)
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// Converts a loosely-typed JSON object into typed parameters
///
/// This is the bridge for hosts that hand over `Record<string, any>`
/// style data. Key order of the object is preserved.
///
/// # Examples
///
/// ```
/// use route_query::{stringify_query, QueryParams};
/// use serde_json::json;
///
/// let params = QueryParams::try_from(json!({
///     "id": 42,
///     "tags": ["a/b", null, "c@d"],
///     "empty": null,
/// }))
/// .unwrap();
///
/// assert_eq!(stringify_query(&params).unwrap(), "id=42&tags=a/b&tags=c@d");
/// ```
impl TryFrom<serde_json::Value> for QueryParams {
    type Error = QueryError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let map = match value {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => return Err(QueryError::NotAnObject { found: "null" }),
            serde_json::Value::Bool(_) => return Err(QueryError::NotAnObject { found: "a bool" }),
            serde_json::Value::Number(_) => {
                return Err(QueryError::NotAnObject { found: "a number" })
            }
            serde_json::Value::String(_) => {
                return Err(QueryError::NotAnObject { found: "a string" })
            }
            serde_json::Value::Array(_) => {
                return Err(QueryError::NotAnObject { found: "an array" })
            }
        };

        let mut params = QueryParams::new();
        for (key, value) in map {
            let converted = QueryValue::from_json(&key, value)?;
            params.pairs.push((key, converted));
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::new();
        params.set("a", 1);
        params.set("b", 2);
        params.set("a", 3);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&QueryValue::Scalar(3.into())));
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut params = QueryParams::new();
        params.append("tag", "a");
        params.append("tag", "b");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_remove_drops_all_entries() {
        let mut params = QueryParams::new();
        params.append("tag", "a");
        params.append("other", 1);
        params.append("tag", "b");

        let removed = params.remove("tag");
        assert_eq!(removed, Some("a".into()));
        assert_eq!(params.len(), 1);
        assert!(params.get("tag").is_none());
    }

    #[test]
    fn test_try_from_rejects_non_object() {
        let err = QueryParams::try_from(serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(err, QueryError::NotAnObject { found: "an array" });
    }
}
