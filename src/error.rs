//! Error types for Cuantizar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid float format {name}: {reason}")]
    InvalidFormat { name: String, reason: String },

    #[error("Unknown float format: {0}")]
    UnknownFormat(String),

    #[error("Duplicate float format: {0}")]
    DuplicateFormat(String),

    #[error("Attribute collision on merge: {key}")]
    AttributeCollision { key: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
