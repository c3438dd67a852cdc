//! pl0c-lex - Lexical Analyzer for the PL/0 Language
//!
//! This crate turns PL/0 source text into a stream of tokens for the
//! parser. Scanning is pull-based: every call to
//! [`Tokenizer::next_token`] skips whitespace and scans exactly one token.
//!
//! # Example Usage
//!
//! ```
//! use pl0c_lex::{Tokenizer, TokenKind};
//!
//! let mut tokenizer = Tokenizer::new("var x = 12;");
//! let kinds: Vec<TokenKind> = tokenizer
//!     .tokenize_all()?
//!     .iter()
//!     .map(|token| token.kind())
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::UnsignedInteger,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! # Ok::<(), pl0c_util::TokenizeError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`char_source`] - Character sources the tokenizer pulls from
//! - [`token`] - Token type definitions
//! - [`lexer`] - The tokenizer
//! - [`unicode`] - Character classes for identifiers and digits
//!
//! # Tokens
//!
//! - **Keywords**: `begin`, `end`, `var`, `const`, `print`
//! - **Identifiers**: a letter followed by letters or digits
//! - **Unsigned integers**: decimal digits, up to `i32::MAX`
//! - **Operators and punctuation**: `+ - * / = ( ) ;`
//! - **EOF**: zero-length end of input marker

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_source;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use char_source::{CharSource, Cursor};
pub use lexer::{Tokenizer, Tokens};
pub use token::{keyword_from_ident, punct_from_char, Token, TokenKind, TokenValue};
pub use unicode::IdentCharset;
