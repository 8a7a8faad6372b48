//! Lighting config document
//!
//! A C.L.A.R.A config is a JSON object holding LED patterns, display commands
//! and the music (note sequence) played alongside them. Documents that come
//! from the outside world are kept as an ordered JSON object so fields we
//! don't model survive a round trip untouched. Freshly synthesized documents
//! are built from the typed [`LightingConfig`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::song::Music;

/// Field holding the note sequence
pub const MUSIC_FIELD: &str = "music";

/// A single LED pattern
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pattern {
    pub id: String,
    /// Colours as `#RRGGBB` strings, one per LED
    pub leds: Vec<String>,
    pub repeat: u32,
    pub offset: u32,
}

impl Pattern {
    /// Pattern lighting a single LED in one colour
    pub fn solid(id: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            leds: vec![colour.into()],
            repeat: 0,
            offset: 0,
        }
    }
}

/// A lighting command, tagged by its `command` field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Show the pattern with the given id
    Display { id: String },
}

/// Typed shape of a newly created config
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LightingConfig {
    pub id: String,
    pub name: String,
    pub patterns: Vec<Pattern>,
    pub commands: Vec<Command>,
}

/// A config document as an order-preserving JSON object
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ConfigDocument(Map<String, Value>);

impl ConfigDocument {
    /// Parse a document from JSON text
    ///
    /// Returns `None` for malformed JSON and for JSON that isn't an object.
    pub fn parse(text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(Self(map)),
            Ok(other) => {
                log::debug!("config JSON is not an object (found {})", json_kind(&other));
                None
            }
            Err(e) => {
                log::debug!("config JSON is malformed: {}", e);
                None
            }
        }
    }

    /// `id` field, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// `name` field, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Replace the music field, keeping its position if it already exists
    pub fn set_music(&mut self, music: &Music) -> serde_json::Result<()> {
        self.0.insert(MUSIC_FIELD.to_string(), serde_json::to_value(music)?);
        Ok(())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize as pretty-printed JSON (2-space indent)
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl LightingConfig {
    /// Convert into a document, fields in declaration order
    pub fn into_document(self) -> serde_json::Result<ConfigDocument> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::song::SongEntry;

    fn sample_config() -> LightingConfig {
        LightingConfig {
            id: "abc".to_string(),
            name: "Stage".to_string(),
            patterns: vec![Pattern::solid("green", "#00FF00")],
            commands: vec![Command::Display { id: "green".to_string() }],
        }
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(ConfigDocument::parse("not json").is_none());
        assert!(ConfigDocument::parse("").is_none());
        assert!(ConfigDocument::parse("[1, 2]").is_none());
        assert!(ConfigDocument::parse("\"text\"").is_none());
        assert!(ConfigDocument::parse("null").is_none());
        assert!(ConfigDocument::parse("{}").is_some());
    }

    #[test]
    fn test_accessors() {
        let doc = ConfigDocument::parse(r#"{"id": "x", "name": 5}"#).unwrap();
        assert_eq!(doc.id(), Some("x"));
        assert_eq!(doc.name(), None);
    }

    #[test]
    fn test_typed_config_key_order() {
        let doc = sample_config().into_document().unwrap();
        let keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "patterns", "commands"]);

        let command = &doc.get("commands").unwrap()[0];
        assert_eq!(command["command"], "display");
        assert_eq!(command["id"], "green");

        let pattern = &doc.get("patterns").unwrap()[0];
        assert_eq!(pattern["leds"][0], "#00FF00");
        assert_eq!(pattern["repeat"], 0);
    }

    #[test]
    fn test_typed_config_document_shape() {
        let doc = sample_config().into_document().unwrap();
        assert_eq!(
            Value::Object(doc.as_map().clone()),
            serde_json::json!({
                "id": "abc",
                "name": "Stage",
                "patterns": [{"id": "green", "leds": ["#00FF00"], "repeat": 0, "offset": 0}],
                "commands": [{"command": "display", "id": "green"}],
            })
        );
    }

    #[test]
    fn test_set_music_appends_when_missing() {
        let mut doc = sample_config().into_document().unwrap();
        doc.set_music(&Music::Error("bad".to_string())).unwrap();

        let keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "patterns", "commands", "music"]);
        assert_eq!(doc.get(MUSIC_FIELD).unwrap(), "bad");
    }

    #[test]
    fn test_set_music_keeps_existing_position() {
        let mut doc =
            ConfigDocument::parse(r#"{"id": "x", "music": "old", "name": "y"}"#).unwrap();
        doc.set_music(&Music::Song(vec![SongEntry::rest(60)])).unwrap();

        let keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "music", "name"]);
        assert_eq!(doc.get(MUSIC_FIELD).unwrap()[0]["note"], "Rest");
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let doc = ConfigDocument::parse(r#"{"id":"x"}"#).unwrap();
        assert_eq!(doc.to_pretty_json().unwrap(), "{\n  \"id\": \"x\"\n}");
    }
}
