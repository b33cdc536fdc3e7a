//! Router configuration surface
//!
//! The serializer is registered as a named capability on a config object;
//! the host router decides when to invoke it. Mirrors the `stringifyQuery`
//! override slot found in client-side router configs.

use tracing::debug;

use crate::encode::stringify_query;
use crate::error::QueryError;
use crate::params::QueryParams;

/// Signature of a query-string serializer override
pub type StringifyQuery = fn(&QueryParams) -> Result<String, QueryError>;

/// Routing configuration holding the active query serializer
///
/// Defaults to [`stringify_query`]. Hosts that need different encoding
/// rules swap the function in with the builder.
///
/// # Examples
///
/// ```
/// use route_query::{QueryParams, RouterConfig};
///
/// let config = RouterConfig::new();
/// let params = QueryParams::new().with_param("at", "2024-01-01T00:00:00");
///
/// assert_eq!(config.stringify(&params).unwrap(), "at=2024-01-01T00:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct RouterConfig {
    stringify_query: StringifyQuery,
}

impl RouterConfig {
    /// Creates a config with the default serializer
    pub fn new() -> Self {
        Self {
            stringify_query: stringify_query,
        }
    }

    /// Registers a custom query serializer (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use route_query::{QueryError, QueryParams, RouterConfig};
    ///
    /// fn count_only(params: &QueryParams) -> Result<String, QueryError> {
    ///     Ok(format!("n={}", params.len()))
    /// }
    ///
    /// let config = RouterConfig::new().with_stringify_query(count_only);
    /// let params = QueryParams::new().with_param("a", 1);
    /// assert_eq!(config.stringify(&params).unwrap(), "n=1");
    /// ```
    pub fn with_stringify_query(mut self, stringify: StringifyQuery) -> Self {
        debug!("custom query serializer registered");
        self.stringify_query = stringify;
        self
    }

    /// Serializes parameters with the registered serializer
    pub fn stringify(&self, params: &QueryParams) -> Result<String, QueryError> {
        (self.stringify_query)(params)
    }

    /// Joins a path with its serialized query
    ///
    /// The `?` separator is only appended when the query string is
    /// non-empty, so all-null parameter sets leave the path untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_query::{QueryParams, QueryValue, RouterConfig};
    ///
    /// let config = RouterConfig::new();
    ///
    /// let params = QueryParams::new().with_param("tab", "activity");
    /// assert_eq!(config.build_url("/users/42", &params).unwrap(), "/users/42?tab=activity");
    ///
    /// let empty = QueryParams::new().with_param("tab", QueryValue::Null);
    /// assert_eq!(config.build_url("/users/42", &empty).unwrap(), "/users/42");
    /// ```
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<String, QueryError> {
        let query = self.stringify(params)?;
        if query.is_empty() {
            Ok(path.to_string())
        } else {
            Ok(format!("{}?{}", path, query))
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}
