//! Error types for query-string serialization

use thiserror::Error;

/// Errors produced while converting or serializing query parameters
///
/// The serializer has no failure path for well-formed input; errors only
/// arise from shapes the data model cannot express as a query string
/// (nested lists, embedded objects).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Value is neither null, a scalar, nor a flat list of scalars/nulls
    #[error("query parameter `{key}` holds an unsupported {found} value")]
    InvalidValueType {
        /// The parameter the invalid value was found under
        key: String,
        /// Short description of the rejected shape
        found: &'static str,
    },

    /// Top-level JSON input was not an object of parameters
    #[error("expected a JSON object of query parameters, found {found}")]
    NotAnObject {
        /// JSON type that was provided instead
        found: &'static str,
    },
}
