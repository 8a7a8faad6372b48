//! Config formatting for display
//!
//! The config list and editor views show a config's id and name, plus the
//! whole document pretty-printed for editing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Result, TransportError};

/// A config ready to be shown to the user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// `id` of the document (null when missing)
    pub id: Value,
    /// `name` of the document (null when missing)
    pub name: Value,
    /// Whole document, pretty-printed
    pub formatted: String,
}

/// Extract id and name and pretty-print the whole document
pub fn to_display_config(document: &Value) -> Result<DisplayConfig> {
    Ok(DisplayConfig {
        id: document.get("id").cloned().unwrap_or(Value::Null),
        name: document.get("name").cloned().unwrap_or(Value::Null),
        formatted: serde_json::to_string_pretty(document)?,
    })
}

/// Parse a single config from JSON text
pub fn parse_config(text: &str) -> Result<DisplayConfig> {
    let document: Value = serde_json::from_str(text)?;
    to_display_config(&document)
}

/// Parse a JSON array of configs
pub fn parse_config_list(text: &str) -> Result<Vec<DisplayConfig>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(documents) => documents.iter().map(to_display_config).collect(),
        _ => Err(TransportError::NotAList),
    }
}
