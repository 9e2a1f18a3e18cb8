//! Select query document

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::filter::Filter;
use super::granularity::Granularity;
use crate::error::ParseError;

/// A Druid select query
///
/// Aggregations and post-aggregations are kept as raw JSON; select queries
/// carry them only as (usually empty) placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectQuery {
    pub query_type: String,
    pub data_source: String,
    pub filter: Filter,
    #[serde(default)]
    pub aggregations: Vec<Value>,
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub post_aggregations: Vec<Value>,
    /// ISO-8601 interval, `start/end`
    pub intervals: String,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    pub paging_spec: PagingSpec,
}

impl SelectQuery {
    /// Check whether a dimension is projected by this query
    pub fn has_dimension(&self, name: &str) -> bool {
        self.dimensions.iter().any(|d| d == name)
    }

    /// Split the interval string into its bounds
    pub fn interval(&self) -> Result<Interval, ParseError> {
        Interval::parse(&self.intervals)
    }
}

/// Cursor state and page size for select queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingSpec {
    /// Segment identifier → offset of the last row returned
    #[serde(default)]
    pub paging_identifiers: BTreeMap<String, i64>,
    pub threshold: u64,
}

impl PagingSpec {
    pub fn new(threshold: u64) -> Self {
        Self {
            paging_identifiers: BTreeMap::new(),
            threshold,
        }
    }

    /// True for the first page (no cursor yet)
    pub fn is_initial(&self) -> bool {
        self.paging_identifiers.is_empty()
    }
}

/// The two bounds of an ISO-8601 interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: String,
    pub end: String,
}

impl Interval {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = |reason: &str| ParseError::InvalidInterval {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = input.split('/');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(invalid("expected exactly one '/' separator")),
        };
        if start.is_empty() || end.is_empty() {
            return Err(invalid("start and end must both be present"));
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
