//! Config store transport
//!
//! Display formatting for configs fetched from the store, and the HTTP
//! calls used to read and write them.

pub mod client;
pub mod display;

pub use client::ConfigClient;
pub use display::{parse_config, parse_config_list, to_display_config, DisplayConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON array of configs")]
    NotAList,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
