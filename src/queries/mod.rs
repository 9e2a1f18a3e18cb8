//! Query template provider
//!
//! Canonical query documents shipped with the crate, addressable by name.

mod content_list;

pub use content_list::content_list;

use tracing::debug;

use crate::error::ParseError;
use crate::parser;
use crate::query::SelectQuery;

pub const CONTENT_LIST_NAME: &str = "content_list";

const TEMPLATES: &[(&str, fn() -> &'static str)] = &[
    (CONTENT_LIST_NAME, content_list as fn() -> &'static str),
];

/// Names of all shipped templates
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Look up a template's raw text by name
pub fn get(name: &str) -> Option<&'static str> {
    let found = TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, template)| template());
    match found {
        Some(_) => debug!(template = name, "resolved query template"),
        None => debug!(template = name, "no query template with this name"),
    }
    found
}

/// Look up a template by name and parse it
pub fn load(name: &str) -> Result<SelectQuery, ParseError> {
    let text = get(name).ok_or_else(|| ParseError::UnknownTemplate {
        name: name.to_string(),
    })?;
    parser::parse_str(text)
}
