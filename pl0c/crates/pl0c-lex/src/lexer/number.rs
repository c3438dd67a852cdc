//! Unsigned integer lexing.

use pl0c_util::{ErrorCode, TokenizeError, TokenizeResult};

use crate::char_source::CharSource;
use crate::token::{Token, TokenKind, TokenValue};
use crate::unicode::is_digit;
use crate::Tokenizer;

impl<'src, S: CharSource<'src>> Tokenizer<'src, S> {
    /// Lexes an unsigned integer literal.
    ///
    /// Consumes every consecutive digit, then parses the run as an `i32`.
    /// Leading zeros are allowed (`007` is `7`).
    ///
    /// # Errors
    ///
    /// `IntegerOverflow`, anchored at the first digit, when the value exceeds
    /// `i32::MAX`. The whole digit run is consumed either way.
    pub(super) fn lex_uint(&mut self) -> TokenizeResult<Token<'src>> {
        let start = self.source.current_pos();
        while is_digit(self.source.peek_char()) {
            self.source.next_char();
        }
        let end = self.source.current_pos();

        let text = self.source.slice(start, end);
        let value = text
            .parse::<i32>()
            .map_err(|_| TokenizeError::new(ErrorCode::IntegerOverflow, start))?;

        Ok(Token::new(
            TokenKind::UnsignedInteger,
            TokenValue::Integer(value),
            start,
            end,
        ))
    }
}
