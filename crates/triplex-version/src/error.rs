//! Error types for strict version parsing.

/// Errors that can occur when parsing a version string in full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The input was empty.
    #[error("empty version string")]
    Empty,

    /// A component was missing or was not a decimal number that fits in 32 bits.
    #[error("invalid version component {position}: '{text}'")]
    InvalidComponent {
        /// Zero-based index of the offending component.
        position: usize,
        /// The text of the component as written.
        text: String,
    },

    /// More than four dot-separated components were given.
    #[error("too many version components ({found}, at most 4 allowed)")]
    TooManyComponents {
        /// Number of components found.
        found: usize,
    },

    /// The version was followed by characters that are not part of it.
    #[error("unexpected trailing characters '{rest}' after version")]
    TrailingCharacters {
        /// The unparsed remainder.
        rest: String,
    },
}

/// Result type for version operations.
pub type Result<T> = std::result::Result<T, VersionError>;
