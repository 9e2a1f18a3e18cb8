//! Query document parser (verb module)
//!
//! Transforms JSON or YAML text into query types, and back to JSON.

use std::path::Path;
use tracing::debug;

use crate::error::ParseError;
use crate::query::SelectQuery;

/// Parse a query document from a file
///
/// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SelectQuery, ParseError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path_str.clone(),
        source: e,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    debug!(path = %path_str, yaml = is_yaml, "parsing query document");

    if is_yaml {
        parse_yaml_str(&contents)
    } else {
        parse_str(&contents)
    }
}

/// Parse a query document from a JSON string
pub fn parse_str(json: &str) -> Result<SelectQuery, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse a query document from a YAML string
pub fn parse_yaml_str(yaml: &str) -> Result<SelectQuery, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse any JSON text into an untyped value
pub fn parse_value(json: &str) -> Result<serde_json::Value, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Serialize a query as compact JSON
pub fn to_json_string(query: &SelectQuery) -> Result<String, ParseError> {
    serde_json::to_string(query).map_err(ParseError::from)
}

/// Serialize a query as indented JSON
pub fn to_json_string_pretty(query: &SelectQuery) -> Result<String, ParseError> {
    serde_json::to_string_pretty(query).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Filter, Granularity};

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_str("{\"queryType\": ");
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml_str("not: [valid: yaml");
        assert!(matches!(result, Err(ParseError::Yaml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file("does/not/exist.json");
        match result {
            Err(err @ ParseError::Io { .. }) => {
                assert!(err.to_string().starts_with("Failed to read 'does/not/exist.json'"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r#"
queryType: select
dataSource: events
filter:
  type: selector
  dimension: channel
  value: web
granularity: day
intervals: 2020-01-01/2020-02-01
dimensions: [channel, user]
pagingSpec:
  pagingIdentifiers:
    seg_1: 4
  threshold: 100
"#;
        let q = parse_yaml_str(yaml).unwrap();
        assert_eq!(q.data_source, "events");
        assert_eq!(q.filter, Filter::selector("channel", "web"));
        assert_eq!(q.granularity, Granularity::Day);
        assert_eq!(q.dimensions, vec!["channel", "user"]);
        assert!(!q.paging_spec.is_initial());
        assert_eq!(q.paging_spec.paging_identifiers.get("seg_1"), Some(&4));
    }

    #[test]
    fn test_serialize_roundtrip_is_structural() {
        let q = parse_str(crate::queries::content_list()).unwrap();
        let compact = to_json_string(&q).unwrap();
        let pretty = to_json_string_pretty(&q).unwrap();
        assert_ne!(compact, pretty);
        assert_eq!(parse_str(&compact).unwrap(), q);
        assert_eq!(parse_value(&pretty).unwrap(), parse_value(&compact).unwrap());
    }
}
