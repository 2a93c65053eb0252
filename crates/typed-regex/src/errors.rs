//! # Error Types

use crate::engine::ErrorWrapper;

/// Errors from typed-regex operations.
#[derive(Debug, thiserror::Error)]
pub enum TypedRegexError {
    /// A flag character outside of the supported alphabet.
    ///
    /// Reported before any regex engine is constructed.
    #[error("invalid regex flag {flag:?} at position {position}; expected one of \"dgimsuy\"")]
    InvalidFlag {
        /// The offending flag character.
        flag: char,

        /// The char position of the flag in the flag string.
        position: usize,
    },

    /// The regex engine rejected the pattern.
    #[error("regex compile error: {0}")]
    Compile(ErrorWrapper),

    /// The regex engine failed while searching.
    #[error("regex search error: {0}")]
    Search(ErrorWrapper),
}

/// Result type for typed-regex operations.
pub type TRResult<T> = core::result::Result<T, TypedRegexError>;
