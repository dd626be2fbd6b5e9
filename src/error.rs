//! Errors for loading external data (settings, level packs)
//!
//! The simulation itself never fails; only file/JSON input can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid level {level}: {reason}")]
    InvalidLevel { level: u32, reason: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
