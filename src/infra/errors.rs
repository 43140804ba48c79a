// src/infra/errors.rs — Error types for Questlog

use thiserror::Error;

/// Infrastructure faults. Gameplay itself has no error paths: form
/// validation blocks bad submissions, numeric junk coerces to zero,
/// and stale quest ids resolve to a no-op.
#[derive(Error, Debug)]
pub enum QuestlogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
