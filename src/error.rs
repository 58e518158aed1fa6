//! Error types for fallible library operations.
//!
//! The checking pipeline itself never fails; only the code that reads
//! dictionaries, input text and configuration from disk returns
//! [`SpellcheckError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellcheckError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    ReadDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SpellcheckError>;
