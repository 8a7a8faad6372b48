//! Converter settings
//!
//! Everything the converter would otherwise hard-code: what a brand new
//! config looks like, when silence becomes a rest, and how a failed MIDI
//! parse is reported. [`ConverterOptions::default`] gives the stock
//! C.L.A.R.A values.

use crate::models::config::{Command, LightingConfig, Pattern};

/// Name given to configs created from scratch
pub const DEFAULT_CONFIG_NAME: &str = "New Lighting Config";

/// Gaps between notes longer than this many ticks become rests
pub const DEFAULT_REST_THRESHOLD: u64 = 50;

/// Stored in the `music` field when the input isn't a readable MIDI file
pub const MIDI_PARSE_ERROR_MESSAGE: &str =
    "Error parsing file - are you sure the file you provided is MIDI?";

/// Source of ids for newly created configs
pub trait IdGenerator {
    fn fresh_id(&mut self) -> String;
}

/// Random (v4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn fresh_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn fresh_id(&mut self) -> String {
        self()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterOptions {
    pub default_name: String,
    pub default_patterns: Vec<Pattern>,
    pub default_commands: Vec<Command>,
    pub rest_threshold: u64,
    pub parse_error_message: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_CONFIG_NAME.to_string(),
            default_patterns: vec![Pattern::solid("green", "#00FF00")],
            default_commands: vec![Command::Display { id: "green".to_string() }],
            rest_threshold: DEFAULT_REST_THRESHOLD,
            parse_error_message: MIDI_PARSE_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ConverterOptions {
    /// A fresh config with the given id and the default name, patterns and commands
    pub fn new_config(&self, id: String) -> LightingConfig {
        LightingConfig {
            id,
            name: self.default_name.clone(),
            patterns: self.default_patterns.clone(),
            commands: self.default_commands.clone(),
        }
    }
}
