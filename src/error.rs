use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the embedded mock data
#[derive(Debug, Error)]
pub enum SeedError {
    /// A fixture failed to parse
    #[error("Invalid seed fixture '{name}': {source}")]
    InvalidFixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in one fixture share an id
    #[error("Duplicate id {id} in seed fixture '{name}'")]
    DuplicateId { name: &'static str, id: u32 },
}

/// Errors raised while reading or writing the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
