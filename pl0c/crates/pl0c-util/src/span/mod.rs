//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! single cursor positions ([`Pos`]) and half-open byte ranges ([`Span`]).
//!
//! # Examples
//!
//! ```
//! use pl0c_util::span::{Pos, Span};
//!
//! let start = Pos::new(4, 1, 5);
//! let end = Pos::new(7, 1, 8);
//! let span = Span::between(start, end);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.column, 5);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// A cursor position in a source buffer
///
/// Carries the byte offset into the buffer together with the 1-based line
/// and 1-based column (counted in characters) of that offset. Positions
/// order by offset.
///
/// # Examples
///
/// ```
/// use pl0c_util::span::Pos;
///
/// let pos = Pos::new(6, 2, 1);
/// assert_eq!(pos.to_string(), "2:1");
/// assert!(Pos::START < pos);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// Byte offset into the source buffer
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Pos {
    /// The position of the first character of any source
    pub const START: Pos = Pos {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a new position
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Pos {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in source code
/// plus the line and column of its first character, for human-readable
/// output.
///
/// # Examples
///
/// ```
/// use pl0c_util::span::Span;
///
/// let span = Span::new(6, 9, 2, 1);
/// assert_eq!(span.len(), 3);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create the span covering `[start, end)` between two cursor positions
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::{Pos, Span};
    ///
    /// let span = Span::between(Pos::new(2, 1, 3), Pos::new(5, 1, 6));
    /// assert_eq!((span.start, span.end), (2, 5));
    /// assert_eq!((span.line, span.column), (1, 3));
    /// ```
    #[inline]
    pub fn between(start: Pos, end: Pos) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            line: start.line,
            column: start.column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
