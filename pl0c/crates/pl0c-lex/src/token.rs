//! Token definitions for the PL/0 lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with its payload and the half-open
//! source range it was scanned from. Identifier and keyword payloads borrow
//! the source buffer instead of copying it.

use std::fmt;

use pl0c_util::{Pos, Span};

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    Eof,
    /// Unsigned integer literal
    UnsignedInteger,
    /// Identifier
    Identifier,

    // Keywords
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `var`
    Var,
    /// `const`
    Const,
    /// `print`
    Print,

    // Operators and punctuation
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `=`
    Equal,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// Returns true for `begin`, `end`, `var`, `const` and `print`.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Begin | TokenKind::End | TokenKind::Var | TokenKind::Const | TokenKind::Print
        )
    }

    /// Returns true for the single-character operators and punctuation.
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mult
                | TokenKind::Div
                | TokenKind::Equal
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Semicolon
        )
    }

    /// Name used when printing tokens.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::UnsignedInteger => "UnsignedInteger",
            TokenKind::Identifier => "Identifier",
            TokenKind::Begin => "Begin",
            TokenKind::End => "End",
            TokenKind::Var => "Var",
            TokenKind::Const => "Const",
            TokenKind::Print => "Print",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Mult => "Mult",
            TokenKind::Div => "Div",
            TokenKind::Equal => "Equal",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Semicolon => "Semicolon",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a token. Its type depends on the token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue<'src> {
    /// No payload (end of input)
    None,
    /// Value of an unsigned integer literal
    Integer(i32),
    /// Identifier or keyword text, borrowed from the source
    Text(&'src str),
    /// The operator or punctuation character
    Char(char),
}

impl fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Text(text) => write!(f, "{:?}", text),
            TokenValue::Char(c) => write!(f, "{:?}", c),
        }
    }
}

/// A classified, positioned unit of lexical input.
///
/// Tokens are immutable; `start..end` is the half-open range of characters
/// consumed to produce the token.
///
/// # Example
///
/// ```
/// use pl0c_lex::{Token, TokenKind, TokenValue};
/// use pl0c_util::Pos;
///
/// let token = Token::new(
///     TokenKind::Identifier,
///     TokenValue::Text("x"),
///     Pos::new(4, 1, 5),
///     Pos::new(5, 1, 6),
/// );
/// assert_eq!(token.as_text(), Some("x"));
/// assert_eq!(token.to_string(), "Identifier(\"x\")");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: TokenKind,
    value: TokenValue<'src>,
    start: Pos,
    end: Pos,
}

impl<'src> Token<'src> {
    /// Creates a token covering `[start, end)`.
    pub fn new(kind: TokenKind, value: TokenValue<'src>, start: Pos, end: Pos) -> Self {
        debug_assert!(start <= end, "token start {start} after end {end}");
        Self {
            kind,
            value,
            start,
            end,
        }
    }

    /// Creates a zero-length end-of-input token at `pos`.
    pub fn eof(pos: Pos) -> Self {
        Self::new(TokenKind::Eof, TokenValue::None, pos, pos)
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token payload.
    #[inline]
    pub fn value(&self) -> TokenValue<'src> {
        self.value
    }

    /// Position of the first character of the token.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position just past the last character of the token.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// The byte span of the token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::between(self.start, self.end)
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The integer value, for unsigned integer literals.
    pub fn as_integer(&self) -> Option<i32> {
        match self.value {
            TokenValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// The lexeme text, for identifiers and keywords.
    pub fn as_text(&self) -> Option<&'src str> {
        match self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            value => write!(f, "{}({})", self.kind, value),
        }
    }
}

/// Looks up the keyword spelled by `ident`. Matching is exact and
/// case-sensitive.
///
/// # Example
///
/// ```
/// use pl0c_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("begin"), Some(TokenKind::Begin));
/// assert_eq!(keyword_from_ident("Begin"), None);
/// assert_eq!(keyword_from_ident("beginning"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "begin" => Some(TokenKind::Begin),
        "end" => Some(TokenKind::End),
        "var" => Some(TokenKind::Var),
        "const" => Some(TokenKind::Const),
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}

/// Looks up the operator or punctuation spelled by `c`.
///
/// # Example
///
/// ```
/// use pl0c_lex::{punct_from_char, TokenKind};
///
/// assert_eq!(punct_from_char(';'), Some(TokenKind::Semicolon));
/// assert_eq!(punct_from_char('#'), None);
/// ```
pub fn punct_from_char(c: char) -> Option<TokenKind> {
    match c {
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Mult),
        '/' => Some(TokenKind::Div),
        '=' => Some(TokenKind::Equal),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        ';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}
