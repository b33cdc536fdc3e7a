//! # route-query
//!
//! Query-string serialization for web routers, tuned for readable URLs:
//! - `@`, `/` and `:` stay literal in encoded values (`tags=a/b&mention=user@host`)
//! - Everything else gets standard percent-encoding (space, `&`, `=`, `#`, ...)
//! - Null values are skipped, list values repeat their key once per element
//! - Key insertion order is preserved in the output
//!
//! The serializer is exposed both as a plain function ([`stringify_query`])
//! and as a named override inside a [`RouterConfig`], so a host router can
//! swap its query serialization without touching matching or navigation.
//!
//! ## Example
//!
//! ```
//! use route_query::{stringify_query, QueryParams};
//!
//! let params = QueryParams::new()
//!     .with_param("id", 42)
//!     .with_param("tags", vec!["a/b", "c@d"]);
//!
//! assert_eq!(stringify_query(&params).unwrap(), "id=42&tags=a/b&tags=c@d");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod encode;
mod error;
mod params;
mod value;

// Re-export the public surface at the crate root
pub use config::{RouterConfig, StringifyQuery};
pub use encode::stringify_query;
pub use error::QueryError;
pub use params::QueryParams;
pub use value::{QueryValue, Scalar};
