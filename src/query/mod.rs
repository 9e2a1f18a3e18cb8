//! Query document types (nouns)
//!
//! Typed model of a Druid select query. Field order mirrors the wire
//! documents so serialized output keeps the same key order.

mod filter;
mod granularity;
mod select;

pub use filter::Filter;
pub use granularity::{Granularity, ParseGranularityError};
pub use select::{SelectQuery, PagingSpec, Interval};
