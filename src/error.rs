//! Error types for dataproducts-queries

use std::fmt;

/// Errors that can occur while loading or parsing a query document
#[derive(Debug)]
pub enum ParseError {
    /// IO error reading file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// JSON deserialization error
    Json {
        source: serde_json::Error,
    },
    /// YAML deserialization error
    Yaml {
        source: serde_yaml::Error,
    },
    /// No template is registered under this name
    UnknownTemplate {
        name: String,
    },
    /// Interval string is not of the form `start/end`
    InvalidInterval {
        input: String,
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            ParseError::Json { source } => {
                write!(f, "Invalid JSON: {}", source)
            }
            ParseError::Yaml { source } => {
                write!(f, "Invalid YAML: {}", source)
            }
            ParseError::UnknownTemplate { name } => {
                write!(f, "Unknown query template '{}'", name)
            }
            ParseError::InvalidInterval { input, reason } => {
                write!(f, "Invalid interval '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Json { source } => Some(source),
            ParseError::Yaml { source } => Some(source),
            ParseError::UnknownTemplate { .. } | ParseError::InvalidInterval { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json { source: err }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}
