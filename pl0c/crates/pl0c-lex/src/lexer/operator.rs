//! Operator and punctuation lexing.

use pl0c_util::{ErrorCode, TokenizeError, TokenizeResult};

use crate::char_source::CharSource;
use crate::token::{punct_from_char, Token, TokenValue};
use crate::Tokenizer;

impl<'src, S: CharSource<'src>> Tokenizer<'src, S> {
    /// Lexes a single-character operator or punctuation.
    ///
    /// Handles: `+`, `-`, `*`, `/`, `=`, `(`, `)`, `;`
    ///
    /// # Errors
    ///
    /// `InvalidInput` at the position of any other character. The character
    /// is consumed.
    pub(super) fn lex_operator_or_unknown(&mut self) -> TokenizeResult<Token<'src>> {
        let c = self.source.next_char();
        let start = self.source.previous_pos();

        match punct_from_char(c) {
            Some(kind) => Ok(Token::new(
                kind,
                TokenValue::Char(c),
                start,
                self.source.current_pos(),
            )),
            None => Err(TokenizeError::new(ErrorCode::InvalidInput, start)),
        }
    }
}
