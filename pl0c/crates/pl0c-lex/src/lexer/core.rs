//! Core tokenizer implementation.
//!
//! This module contains the Tokenizer struct, whitespace skipping and the
//! per-token dispatch.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use pl0c_util::TokenizeResult;
use tracing::{debug, trace};

use crate::char_source::{CharSource, Cursor};
use crate::token::Token;
use crate::unicode::{is_digit, is_whitespace, IdentCharset};

/// Tokenizer for the PL/0 language.
///
/// Pulls characters from a [`CharSource`] and produces one token per call
/// to [`next_token`](Tokenizer::next_token). Apart from the source cursor
/// and the identifier charset, no state survives between calls.
///
/// # Example
///
/// ```
/// use pl0c_lex::{Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new("var x;");
/// assert_eq!(tokenizer.next_token()?.kind(), TokenKind::Var);
/// assert_eq!(tokenizer.next_token()?.as_text(), Some("x"));
/// assert_eq!(tokenizer.next_token()?.kind(), TokenKind::Semicolon);
/// assert!(tokenizer.next_token()?.is_eof());
/// # Ok::<(), pl0c_util::TokenizeError>(())
/// ```
#[derive(Debug)]
pub struct Tokenizer<'src, S> {
    /// Character source for traversal.
    pub(super) source: S,

    /// Characters identifiers are built from.
    pub(super) charset: IdentCharset,

    _src: PhantomData<&'src str>,
}

impl<'src> Tokenizer<'src, Cursor<'src>> {
    /// Creates a tokenizer over an in-memory source.
    pub fn new(source: &'src str) -> Self {
        Self::with_source(Cursor::new(source))
    }
}

impl<'src, S: CharSource<'src>> Tokenizer<'src, S> {
    /// Creates a tokenizer pulling from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            charset: IdentCharset::default(),
            _src: PhantomData,
        }
    }

    /// Selects the characters identifiers are built from.
    pub fn with_charset(mut self, charset: IdentCharset) -> Self {
        self.charset = charset;
        self
    }

    /// The identifier charset in use.
    pub fn charset(&self) -> IdentCharset {
        self.charset
    }

    /// The underlying character source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the tokenizer, returning the character source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the next character: digits start
    /// an unsigned integer, identifier-start characters an identifier or
    /// keyword, anything else an operator or punctuation. At end of input
    /// a zero-length `Eof` token is returned, on this and every later call.
    ///
    /// # Errors
    ///
    /// `IntegerOverflow` for a literal that does not fit `i32`, and
    /// `InvalidInput` for a character no token starts with. The tokenizer
    /// does not recover; the cursor is left after the offending lexeme.
    pub fn next_token(&mut self) -> TokenizeResult<Token<'src>> {
        self.source.read_all();
        self.skip_whitespace();

        if self.source.is_eof() {
            return Ok(Token::eof(self.source.current_pos()));
        }

        let peek = self.source.peek_char();
        let result = if is_digit(peek) {
            self.lex_uint()
        } else if self.charset.is_ident_start(peek) {
            self.lex_ident_or_keyword()
        } else {
            self.lex_operator_or_unknown()
        };

        match &result {
            Ok(token) => trace!(kind = %token.kind(), start = %token.start(), "token"),
            Err(err) => debug!(code = err.code.as_str(), pos = %err.pos, "tokenize error"),
        }
        result
    }

    /// Returns an iterator over the remaining tokens.
    ///
    /// The iterator ends at end of input (the `Eof` token is not yielded)
    /// and after yielding the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'src, S> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// Tokenizes the rest of the input, including the final `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn tokenize_all(&mut self) -> TokenizeResult<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.source.is_eof() && is_whitespace(self.source.peek_char()) {
            self.source.next_char();
        }
    }
}

/// Iterator over the tokens of a [`Tokenizer`].
///
/// Created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'t, 'src, S> {
    tokenizer: &'t mut Tokenizer<'src, S>,
    done: bool,
}

impl<'src, S: CharSource<'src>> Iterator for Tokens<'_, 'src, S> {
    type Item = TokenizeResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.tokenizer.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }
}

impl<'src, S: CharSource<'src>> FusedIterator for Tokens<'_, 'src, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use pl0c_util::{ErrorCode, Pos};

    #[test]
    fn test_empty_source_is_eof() {
        let mut tokenizer = Tokenizer::new("");
        let token = tokenizer.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.start(), Pos::START);
        assert_eq!(token.end(), Pos::START);
    }

    #[test]
    fn test_whitespace_only_yields_eof_at_end() {
        let source = "  \t\n  \r\n ";
        let mut tokenizer = Tokenizer::new(source);
        let token = tokenizer.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.start().offset, source.len());
        assert_eq!(token.start(), token.end());
        assert_eq!(token.start().line, 3);
        assert_eq!(token.start().column, 2);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut tokenizer = Tokenizer::new("x ");
        assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::Identifier);
        let first = tokenizer.next_token().unwrap();
        assert!(first.is_eof());
        for _ in 0..3 {
            assert_eq!(tokenizer.next_token().unwrap(), first);
        }
    }

    #[test]
    fn test_dispatch() {
        let mut tokenizer = Tokenizer::new("7 a ;");
        assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::UnsignedInteger);
        assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::Identifier);
        assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::Semicolon);
    }

    #[test]
    fn test_bom_is_skipped() {
        let mut tokenizer = Tokenizer::new("\u{FEFF}begin");
        let token = tokenizer.next_token().unwrap();
        assert_eq!(token.kind(), TokenKind::Begin);
        assert_eq!(token.start().column, 1);
    }

    #[test]
    fn test_tokens_iterator_excludes_eof() {
        let mut tokenizer = Tokenizer::new("begin end");
        let kinds: Vec<TokenKind> = tokenizer
            .tokens()
            .map(|token| token.unwrap().kind())
            .collect();
        assert_eq!(kinds, vec![TokenKind::Begin, TokenKind::End]);
    }

    #[test]
    fn test_tokens_iterator_fuses_after_error() {
        let mut tokenizer = Tokenizer::new("x # y");
        let mut tokens = tokenizer.tokens();
        assert!(tokens.next().unwrap().is_ok());
        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_tokenize_all_ends_with_eof() {
        let mut tokenizer = Tokenizer::new("print(1)");
        let tokens = tokenizer.tokenize_all().unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_tokenize_all_returns_first_error() {
        let mut tokenizer = Tokenizer::new("1 99999999999 #");
        let err = tokenizer.tokenize_all().unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegerOverflow);
        assert_eq!(err.pos, Pos::new(2, 1, 3));
    }

    #[test]
    fn test_caller_may_continue_after_invalid_input() {
        let mut tokenizer = Tokenizer::new("# x");
        assert!(tokenizer.next_token().is_err());
        assert_eq!(tokenizer.next_token().unwrap().as_text(), Some("x"));
    }

    #[test]
    fn test_charset_builder() {
        let tokenizer = Tokenizer::new("").with_charset(IdentCharset::Ascii);
        assert_eq!(tokenizer.charset(), IdentCharset::Ascii);
        assert_eq!(tokenizer.into_source().source(), "");
    }
}
