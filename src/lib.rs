//! dataproducts-queries - Canonical Druid query documents for content data products
//!
//! This library provides:
//! - The content list query document, exactly as consumers expect it
//! - A by-name registry of shipped query templates
//! - Typed query model (SelectQuery, Filter, PagingSpec, Granularity)
//! - Parsing from JSON or YAML, and serialization back to JSON
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `queries/` - the literal query templates
//! - `query/` - query document types (SelectQuery, Filter, PagingSpec)
//!
//! **Verb modules** (transformations):
//! - `parser/` - JSON/YAML → SelectQuery → JSON
//!
//! # Example
//!
//! ```
//! use dataproducts_queries::{content_list, parser};
//!
//! let query = parser::parse_str(content_list()).unwrap();
//! assert_eq!(query.data_source, "content-model-snapshot");
//! assert_eq!(query.paging_spec.threshold, 10000);
//! ```

pub mod queries;
pub mod query;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use queries::content_list;
pub use query::{SelectQuery, Filter, Granularity, PagingSpec, Interval};
pub use error::ParseError;
