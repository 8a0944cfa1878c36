//! Configuration for the opcode decoder.
//!
//! Configuration is supplied as JSON or built with `Config::default()`. Every
//! field is optional in the JSON form and falls back to its default.
//!
//! # Examples
//!
//! ```
//! use rvctl_core::config::Config;
//!
//! let config = Config::from_json(r#"{ "decoder": { "trace_unrecognized": true } }"#)?;
//! assert!(config.decoder.trace_unrecognized);
//! # Ok::<(), rvctl_core::common::DecodeError>(())
//! ```

use serde::Deserialize;

use crate::common::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Decoder diagnostics.
    #[serde(default)]
    pub decoder: DecoderConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Config`](crate::common::DecodeError::Config) if
    /// the document is not valid JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decoder diagnostic settings.
///
/// None of these settings change the decoded signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DecoderConfig {
    /// Emit a `tracing` debug event for each opcode that misses the decode table.
    #[serde(default)]
    pub trace_unrecognized: bool,
}
