//! Error types for target configuration and strict component parsing.
//!
//! Triple classification itself never fails; these errors only come out of
//! the configuration layer and the strict `FromStr` impls of the component
//! enums.

use std::path::PathBuf;

use triplex_version::VersionError;

use crate::table::Axis;

/// Errors that can occur while loading configuration or parsing components strictly.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A version string was malformed.
    #[error("invalid version: {0}")]
    Version(#[from] VersionError),

    /// A name matched no spelling of the requested component.
    #[error("unknown {axis} name '{name}'")]
    UnknownComponent {
        /// Which component was being parsed.
        axis: Axis,
        /// The name as written.
        name: String,
    },

    /// Validation error in a configuration.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
