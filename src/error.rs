//! Error types for the `safe_text` crate.

/// All errors that can occur during sanitization.
///
/// Empty input is not an error: operations that have no value to return for
/// empty text return `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    /// A blocklist was given a token argument that is not a list of texts.
    #[error("Token argument is not a list")]
    NotAList,

    /// A structured sanitizer was given a leaf where a container was expected.
    #[error("Value is not a container")]
    NotAContainer,

    /// A case-insensitive token could not be compiled into a matcher.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// A type alias for `Result<T, SanitizeError>`.
pub type Result<T> = std::result::Result<T, SanitizeError>;
