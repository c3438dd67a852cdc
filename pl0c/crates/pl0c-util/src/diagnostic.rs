//! Diagnostic module - Error reporting infrastructure.
//!
//! Turns compiler errors into human-readable reports with source context.
//!
//! # Examples
//!
//! ```
//! use pl0c_util::{Diagnostic, ErrorCode, Pos, SourceFile, TokenizeError};
//!
//! let file = SourceFile::new("main.pl0", "x = #");
//! let err = TokenizeError::new(ErrorCode::InvalidInput, Pos::new(4, 1, 5));
//! let report = Diagnostic::from(&err).render(&file);
//! assert!(report.starts_with("error[E0002]: invalid input character"));
//! ```

use std::fmt;

use crate::error::TokenizeError;
use crate::span::{SourceFile, Span};

/// An error report with an optional code and a source location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Optional diagnostic code
    pub code: Option<&'static str>,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            code: None,
            message: message.into(),
            span,
        }
    }

    /// Attach a diagnostic code
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Render the diagnostic against the file it refers to.
    ///
    /// Falls back to a bare `--> file:line:col` location when the span's
    /// line is not part of the file.
    pub fn render(&self, file: &SourceFile) -> String {
        let location = file.format_span(self.span).unwrap_or_else(|| {
            format!("--> {}:{}:{}", file.name(), self.span.line, self.span.column)
        });
        format!("{}\n{}", self, location)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

impl From<&TokenizeError> for Diagnostic {
    fn from(err: &TokenizeError) -> Self {
        Diagnostic::error(err.code.description(), Span::between(err.pos, err.pos))
            .with_code(err.code.as_str())
    }
}
