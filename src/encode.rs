//! Query-string serialization
//!
//! Standard percent-encoding with one twist: after encoding a value, the
//! escapes for `@`, `/` and `:` are reversed so URLs carrying handles,
//! paths or timestamps stay readable. Keys get no such exemption.

use tracing::trace;

use crate::error::QueryError;
use crate::params::QueryParams;
use crate::value::{QueryValue, Scalar};

/// Serializes parameters into a query string (without the leading `?`)
///
/// - Null values are skipped entirely
/// - List values emit one `key=value` segment per non-null element, in order
/// - Keys and values are percent-encoded independently; encoded values then
///   get `%40` restored to `@`, `%2F`/`%2f` to `/` and `%3A`/`%3a` to `:`
/// - Segments are joined with `&`; an empty result is the empty string
///
/// # Errors
///
/// Returns [`QueryError::InvalidValueType`] when a list element is itself
/// a list; there is no other failure path.
///
/// # Examples
///
/// ```
/// use route_query::{stringify_query, QueryParams, QueryValue};
///
/// let params = QueryParams::new()
///     .with_param("id", 42)
///     .with_param("tags", vec!["a/b", "c@d"])
///     .with_param("empty", QueryValue::Null);
///
/// assert_eq!(stringify_query(&params).unwrap(), "id=42&tags=a/b&tags=c@d");
/// ```
pub fn stringify_query(params: &QueryParams) -> Result<String, QueryError> {
    let mut parts: Vec<String> = Vec::new();

    for (key, value) in params.iter() {
        match value {
            QueryValue::Null => {}
            QueryValue::Scalar(scalar) => parts.push(segment(key, scalar)),
            QueryValue::List(items) => {
                for item in items {
                    match item {
                        QueryValue::Null => {}
                        QueryValue::Scalar(scalar) => parts.push(segment(key, scalar)),
                        QueryValue::List(_) => {
                            return Err(QueryError::InvalidValueType {
                                key: key.to_string(),
                                found: "nested list",
                            })
                        }
                    }
                }
            }
        }
    }

    trace!(segments = parts.len(), "serialized query string");
    Ok(parts.join("&"))
}

/// Builds a single `key=value` segment
fn segment(key: &str, value: &Scalar) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        restore_readable(&urlencoding::encode(&value.to_string()))
    )
}

/// Reverses the escaping of `@`, `/` and `:` in an encoded value
///
/// `%40` is matched exactly; `%2F` and `%3A` are matched on either hex
/// case, mirroring how other encoders may emit lowercase digits.
fn restore_readable(encoded: &str) -> String {
    encoded
        .replace("%40", "@")
        .replace("%2F", "/")
        .replace("%2f", "/")
        .replace("%3A", ":")
        .replace("%3a", ":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_readable_uppercase() {
        assert_eq!(restore_readable("%40%2F%3A"), "@/:");
    }

    #[test]
    fn test_restore_readable_lowercase_hex() {
        // %40 is only matched uppercase; %2f and %3a on either case
        assert_eq!(restore_readable("%2f%3a"), "/:");
    }

    #[test]
    fn test_segment_encodes_key_without_exemptions() {
        assert_eq!(segment("user@host", &Scalar::Int(1)), "user%40host=1");
    }
}
