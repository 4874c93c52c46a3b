//! Error type for the boundaries around the engine.
//!
//! Scanning and rendering never fail; these errors come from entry points that
//! accept dynamically typed input (bindings) or named modes.

/// Rejected input at an entry point.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    /// The text argument was not a string.
    #[error("expected a string, found {found}")]
    InvalidArgument {
        /// Type name of the value that was passed instead.
        found: String,
    },

    /// The options argument had the wrong shape.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A mode name other than `all`, `line`, or `block`.
    #[error("unknown mode '{0}' (expected all, line, or block)")]
    UnknownMode(String),
}

impl StripError {
    /// Build an [`StripError::InvalidArgument`] naming the received type.
    pub fn invalid_argument(found: impl Into<String>) -> Self {
        StripError::InvalidArgument {
            found: found.into(),
        }
    }
}
