//! Error types for configuration handling.

use std::path::PathBuf;

/// Errors raised while loading, validating or saving configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment override holds a value of the wrong shape.
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The configuration parsed but is not usable.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
