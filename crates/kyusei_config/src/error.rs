//! Error types for kyusei_config.

use std::path::PathBuf;

/// Errors raised while loading a fortune configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {reason}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },

    /// The text is not valid TOML or does not match the expected layout.
    #[error("invalid fortune config: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// A label id or `enable_<id>` key names no known label.
    #[error("unknown direction label '{id}'")]
    UnknownLabel {
        /// The offending id or key.
        id: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse {
            reason: e.message().to_string(),
        }
    }
}
