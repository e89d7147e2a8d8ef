//! Error types.
//!
//! Statistics and pointer handling never fail; only loading or saving a scene
//! configuration can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid scene YAML document.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Parsed, but the values cannot describe a scene.
    #[error("Invalid scene configuration: {0}")]
    Invalid(String),
}
