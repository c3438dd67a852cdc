//! Lexer module.
//!
//! This module organizes the tokenizer into smaller, focused components:
//! - `core` - Tokenizer struct, whitespace skipping and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Unsigned integer lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{Tokenizer, Tokens};
