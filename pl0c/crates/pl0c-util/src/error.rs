//! Error types shared by the compiler phases.
//!
//! The lexer reports exactly two kinds of failure, both fatal to the scan in
//! progress. Every error carries the source position it is anchored at.

use std::fmt;

use thiserror::Error;

use crate::span::Pos;

/// The kind of a tokenization failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// An unsigned integer literal does not fit the target integer type
    IntegerOverflow,
    /// A character that does not begin any token
    InvalidInput,
}

impl ErrorCode {
    /// Stable diagnostic code (e.g. `E0001`)
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::IntegerOverflow.as_str(), "E0001");
    /// assert_eq!(ErrorCode::InvalidInput.as_str(), "E0002");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IntegerOverflow => "E0001",
            ErrorCode::InvalidInput => "E0002",
        }
    }

    /// Human-readable description of the failure
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorCode::IntegerOverflow => "integer literal is too large",
            ErrorCode::InvalidInput => "invalid input character",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A tokenization failure anchored at a source position
///
/// # Examples
///
/// ```
/// use pl0c_util::{ErrorCode, Pos, TokenizeError};
///
/// let err = TokenizeError::new(ErrorCode::InvalidInput, Pos::new(4, 1, 5));
/// assert_eq!(err.to_string(), "invalid input character at 1:5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{code} at {pos}")]
pub struct TokenizeError {
    /// What went wrong
    pub code: ErrorCode,
    /// Where it went wrong
    pub pos: Pos,
}

impl TokenizeError {
    /// Create a new error of the given kind at `pos`
    #[inline]
    pub const fn new(code: ErrorCode, pos: Pos) -> Self {
        Self { code, pos }
    }
}

/// Result type alias for tokenization
pub type TokenizeResult<T> = std::result::Result<T, TokenizeError>;
