//! Filter trees

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Druid filter node, tagged by `"type"` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
    /// All child filters must match
    And { fields: Vec<Filter> },
    /// At least one child filter must match
    Or { fields: Vec<Filter> },
    /// Negation of a single child filter
    Not { field: Box<Filter> },
    /// Exact match of a dimension value
    Selector { dimension: String, value: String },
}

impl Filter {
    pub fn selector(dimension: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Selector {
            dimension: dimension.into(),
            value: value.into(),
        }
    }

    pub fn and(fields: Vec<Filter>) -> Self {
        Filter::And { fields }
    }

    pub fn or(fields: Vec<Filter>) -> Self {
        Filter::Or { fields }
    }

    pub fn not(field: Filter) -> Self {
        Filter::Not { field: Box::new(field) }
    }

    /// All selector predicates in the tree as `(dimension, value)`, in document order.
    ///
    /// Selectors under a `not` are included; the caller sees structure, not polarity.
    pub fn selectors(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_selectors(&mut out);
        out
    }

    fn collect_selectors<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Filter::And { fields } | Filter::Or { fields } => {
                for f in fields {
                    f.collect_selectors(out);
                }
            }
            Filter::Not { field } => field.collect_selectors(out),
            Filter::Selector { dimension, value } => out.push((dimension.as_str(), value.as_str())),
        }
    }

    /// Evaluate the filter against a single event row.
    ///
    /// A selector with an empty value also matches a missing or null dimension,
    /// which is how Druid treats null and empty strings. Non-string values are
    /// compared through their JSON text.
    pub fn matches(&self, row: &Map<String, Value>) -> bool {
        match self {
            Filter::And { fields } => fields.iter().all(|f| f.matches(row)),
            Filter::Or { fields } => fields.iter().any(|f| f.matches(row)),
            Filter::Not { field } => !field.matches(row),
            Filter::Selector { dimension, value } => match row.get(dimension) {
                None | Some(Value::Null) => value.is_empty(),
                Some(Value::String(s)) => s == value,
                Some(other) => other.to_string() == *value,
            },
        }
    }
}
