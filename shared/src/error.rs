use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
