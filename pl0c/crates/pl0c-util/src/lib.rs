//! pl0c-util - Core Utilities and Foundation Types
//!
//! This crate provides the types shared by every phase of the PL/0
//! compiler:
//!
//! - [`span`] - source positions, spans and source files
//! - [`error`] - the tokenization error taxonomy
//! - [`diagnostic`] - rendering errors with source context
//!
//! # Examples
//!
//! ```
//! use pl0c_util::{ErrorCode, Pos, TokenizeError};
//!
//! let err = TokenizeError::new(ErrorCode::InvalidInput, Pos::START);
//! assert_eq!(err.code, ErrorCode::InvalidInput);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::Diagnostic;
pub use error::{ErrorCode, TokenizeError, TokenizeResult};
pub use span::{Pos, SourceFile, Span};
