//! Identifier and keyword lexing.

use pl0c_util::TokenizeResult;

use crate::char_source::CharSource;
use crate::token::{keyword_from_ident, Token, TokenKind, TokenValue};
use crate::Tokenizer;

impl<'src, S: CharSource<'src>> Tokenizer<'src, S> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of identifier characters, then checks the
    /// text against the keyword set. The token value is the lexeme itself,
    /// borrowed from the source, for keywords and identifiers alike.
    pub(super) fn lex_ident_or_keyword(&mut self) -> TokenizeResult<Token<'src>> {
        let start = self.source.current_pos();
        while self.charset.is_ident_continue(self.source.peek_char()) {
            self.source.next_char();
        }
        let end = self.source.current_pos();

        let text = self.source.slice(start, end);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);

        Ok(Token::new(kind, TokenValue::Text(text), start, end))
    }
}
